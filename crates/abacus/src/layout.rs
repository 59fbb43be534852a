use core::mem::size_of;

use tracing::trace;

use crate::{Abacus, Error, Layout};

/// Thresholds deciding between [`Layout::Dense`] and [`Layout::Sparse`].
///
/// The sparse → dense rule also requires the span to stay within
/// `max_dense_span`, so a long but full value settles on one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPolicy {
    /// Dense values whose zero ratio exceeds this become sparse
    pub sparse_zero_ratio: f64,
    /// Dense values spanning more exponents than this become sparse
    pub max_dense_span: u64,
    /// Sparse values whose nonzero ratio exceeds this become dense
    pub dense_nonzero_ratio: f64,
}

impl LayoutPolicy {
    pub const DEFAULT: Self = Self {
        sparse_zero_ratio: 0.5,
        max_dense_span: 100,
        dense_nonzero_ratio: 0.8,
    };

    fn wants_sparse(&self, value: &Abacus) -> bool {
        value.digits.span() > self.max_dense_span || value.sparsity() > self.sparse_zero_ratio
    }

    fn wants_dense(&self, value: &Abacus) -> bool {
        value.digits.span() <= self.max_dense_span
            && 1.0 - value.sparsity() > self.dense_nonzero_ratio
    }
}

impl Default for LayoutPolicy {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Abacus {
    #[inline]
    pub fn layout(&self) -> Layout {
        self.digits.layout()
    }

    /// Share of zero digits within `[min_exponent, max_exponent]`,
    /// regardless of how the digits are stored. Zero has sparsity `0.0`.
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    pub fn sparsity(&self) -> f64 {
        let span = self.digits.span();
        if span == 0 {
            return 0.0;
        }
        1.0 - self.digits.nonzero_count() as f64 / span as f64
    }

    pub fn sparsify(&mut self) -> Result<(), Error> {
        if self.layout() != Layout::Sparse {
            trace!(span = self.digits.span(), "switching to sparse layout");
            self.digits = self.digits.to_sparse()?.into();
        }
        Ok(())
    }

    pub fn densify(&mut self) -> Result<(), Error> {
        if self.layout() != Layout::Dense {
            trace!(span = self.digits.span(), "switching to dense layout");
            self.digits = self.digits.to_dense()?.into();
        }
        Ok(())
    }

    /// [`optimize_with`](Self::optimize_with) the default policy
    #[inline]
    pub fn optimize(&mut self) -> Result<Layout, Error> {
        self.optimize_with(&LayoutPolicy::DEFAULT)
    }

    /// Switches layout when the current one violates `policy`.
    /// Returns the resulting layout.
    pub fn optimize_with(&mut self, policy: &LayoutPolicy) -> Result<Layout, Error> {
        match self.layout() {
            Layout::Dense if policy.wants_sparse(self) => self.sparsify()?,
            Layout::Sparse if policy.wants_dense(self) => self.densify()?,
            Layout::Dense | Layout::Sparse => {}
        }
        Ok(self.layout())
    }

    /// Approximate number of bytes held by the value
    #[inline]
    pub fn memory_estimate(&self) -> usize {
        size_of::<Self>() + self.digits.heap_bytes()
    }

    /// Normalizes and picks the layout from the value alone, so equal
    /// results end up identical whichever path computed them.
    pub(crate) fn settle(&mut self) -> Result<(), Error> {
        self.normalize();
        if LayoutPolicy::DEFAULT.wants_sparse(self) {
            self.sparsify()
        } else {
            self.densify()
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn spread(base: u32, exponents: &[i32]) -> Abacus {
        Abacus::from_digits(base, false, exponents.iter().map(|e| (*e, 1))).unwrap()
    }

    #[rstest]
    #[case(&[], 0.0)]
    #[case(&[0, 1, 2, 3], 0.0)]
    #[case(&[0, 3], 0.5)]
    #[case(&[0, 9], 0.8)]
    #[case(&[-2, 1], 0.5)]
    fn sparsity(#[case] exponents: &[i32], #[case] expected: f64) {
        let mut v = spread(10, exponents);
        assert!((v.sparsity() - expected).abs() < 1e-12);
        v.sparsify().unwrap();
        assert!((v.sparsity() - expected).abs() < 1e-12);
        v.densify().unwrap();
        assert!((v.sparsity() - expected).abs() < 1e-12);
    }

    #[test]
    fn switches_preserve_value() {
        let mut v = spread(10, &[-3, 0, 50]);
        let before = v.clone();
        v.densify().unwrap();
        assert_eq!(v.layout(), Layout::Dense);
        assert_eq!(v, before);
        v.sparsify().unwrap();
        assert_eq!(v.layout(), Layout::Sparse);
        assert_eq!(v, before);
        assert_eq!(v.precision(), before.precision());
    }

    #[test]
    fn optimize_long_sparse_value() {
        let mut v = Abacus::from_digits(10, false, (0..200).filter(|e| e % 20 == 0).map(|e| (e, 3)))
            .unwrap();
        v.densify().unwrap();
        assert_eq!(v.optimize().unwrap(), Layout::Sparse);
        // nonzero ratio is low, stays sparse
        assert_eq!(v.optimize().unwrap(), Layout::Sparse);
    }

    #[test]
    fn full_but_long_stays_sparse() {
        let mut v = spread(2, &(0..150).collect::<Vec<_>>());
        v.sparsify().unwrap();
        assert_eq!(v.optimize().unwrap(), Layout::Sparse);
        v.densify().unwrap();
        assert_eq!(v.optimize().unwrap(), Layout::Sparse);
    }

    #[test]
    fn full_and_short_becomes_dense() {
        let mut v = spread(10, &[0, 1, 2, 3, 4]);
        v.sparsify().unwrap();
        assert_eq!(v.optimize().unwrap(), Layout::Dense);
    }

    #[test]
    fn custom_policy() {
        let policy = LayoutPolicy {
            sparse_zero_ratio: 0.1,
            ..LayoutPolicy::default()
        };
        let mut v = spread(10, &[0, 1, 2, 4]);
        assert_eq!(v.layout(), Layout::Dense);
        assert_eq!(v.optimize_with(&policy).unwrap(), Layout::Sparse);
    }

    #[test]
    fn memory_estimate_grows_with_digits() {
        let small = spread(10, &[0]);
        let large = spread(10, &(0..64).collect::<Vec<_>>());
        assert!(small.memory_estimate() >= size_of::<Abacus>());
        assert!(large.memory_estimate() > small.memory_estimate());
    }
}
