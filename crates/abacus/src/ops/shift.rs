use crate::{Abacus, Error};

impl Abacus {
    /// `self · base^n`, lowering the precision floor by `n`
    pub fn try_shl(&self, n: u32) -> Result<Self, Error> {
        Ok(Self {
            precision: self.precision.saturating_sub(n),
            digits: self.digits.shifted(n.into())?,
            ..self.clone()
        })
    }

    /// `self / base^n`, exact, raising the precision floor by `n`
    pub fn try_shr(&self, n: u32) -> Result<Self, Error> {
        let precision = self
            .precision
            .checked_add(n)
            .filter(|p| *p <= Self::MAX_PRECISION)
            .ok_or(Error::Overflow)?;
        Ok(Self {
            precision,
            digits: self.digits.shifted(-i64::from(n))?,
            ..self.clone()
        })
    }
}
