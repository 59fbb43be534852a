use core::mem::size_of;

use itertools::Either;
use strum::{EnumDiscriminants, EnumIter, EnumString};

use crate::{Digit, Error, Exponent};

/// Digit storage of an [`Abacus`](crate::Abacus)
#[derive(Debug, Clone, EnumDiscriminants, derive_more::From)]
#[strum_discriminants(
    name(Layout),
    derive(Hash, strum::Display, EnumString, EnumIter),
    strum(serialize_all = "snake_case"),
    vis(pub)
)]
pub(crate) enum Digits {
    Dense(Dense),
    Sparse(Sparse),
}

/// Contiguous slots, `slots[i]` holds the digit at `min_exponent + i`.
/// Canonical zero is a single `0` slot at exponent 0.
#[derive(Debug, Clone)]
pub(crate) struct Dense {
    min_exponent: Exponent,
    slots: Vec<Digit>,
}

/// Nonzero `(exponent, digit)` pairs, ascending by exponent.
/// Zero has no entries.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sparse {
    entries: Vec<(Exponent, Digit)>,
}

/// Vector of `len` zero digits, reporting allocation failure instead of aborting.
pub(crate) fn zeroed(len: usize) -> Result<Vec<Digit>, Error> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(len)?;
    slots.resize(len, 0);
    Ok(slots)
}

/// Exponent of `slots[index]` for a span starting at `min`.
/// Spans are validated on construction, so this never leaves `Exponent`.
#[inline]
#[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn exponent_at(min: Exponent, index: usize) -> Exponent {
    min.wrapping_add(index as Exponent)
}

/// Slot index of exponent `e` in a buffer starting at `lo`, where `lo <= e`.
#[inline]
#[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn index_of(lo: i64, e: Exponent) -> usize {
    debug_assert!(lo <= i64::from(e));
    (i64::from(e) - lo) as usize
}

/// `t mod base` as a digit
#[inline]
#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
pub(crate) const fn low_digit(t: u128, base: u128) -> Digit {
    (t % base) as Digit
}

impl Dense {
    pub fn zero() -> Self {
        Self {
            min_exponent: 0,
            slots: vec![0],
        }
    }

    /// `slots[i]` is the digit at exponent `lo + i`.
    /// Zero slots at both ends are trimmed.
    pub fn from_slots(lo: i64, mut slots: Vec<Digit>) -> Result<Self, Error> {
        let Some(last) = slots.iter().rposition(|d| *d != 0) else {
            return Ok(Self::zero());
        };
        slots.truncate(last + 1);
        let first = slots.iter().position(|d| *d != 0).unwrap_or_default();
        slots.drain(..first);

        let min = lo + i64::try_from(first)?;
        let max = min + i64::try_from(slots.len() - 1)?;
        let min_exponent = Exponent::try_from(min)?;
        Exponent::try_from(max)?;

        Ok(Self {
            min_exponent,
            slots,
        })
    }
}

impl Sparse {
    /// `entries` must be ascending by exponent; zero digits are dropped.
    pub fn from_entries<I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (i64, Digit)>,
    {
        let entries = entries
            .into_iter()
            .filter(|(_, d)| *d != 0)
            .map(|(e, d)| Ok((Exponent::try_from(e)?, d)))
            .collect::<Result<Vec<_>, Error>>()?;
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        Ok(Self { entries })
    }

    #[inline]
    pub fn entries(&self) -> &[(Exponent, Digit)] {
        &self.entries
    }
}

impl Digits {
    #[inline]
    pub fn zero() -> Self {
        Dense::zero().into()
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.into()
    }

    #[inline]
    pub const fn sparse(&self) -> Option<&Sparse> {
        match self {
            Self::Sparse(sparse) => Some(sparse),
            Self::Dense(_) => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Dense(dense) => dense.slots.iter().all(|d| *d == 0),
            Self::Sparse(sparse) => sparse.entries.is_empty(),
        }
    }

    /// Nonzero digits, ascending by exponent
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Exponent, Digit)> + '_ {
        match self {
            Self::Dense(dense) => Either::Left(
                dense
                    .slots
                    .iter()
                    .enumerate()
                    .filter(|(_, d)| **d != 0)
                    .map(|(i, d)| (exponent_at(dense.min_exponent, i), *d)),
            ),
            Self::Sparse(sparse) => Either::Right(sparse.entries.iter().copied()),
        }
    }

    pub fn get(&self, exponent: Exponent) -> Digit {
        match self {
            Self::Dense(dense) => i64::from(exponent)
                .checked_sub(dense.min_exponent.into())
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| dense.slots.get(i).copied())
                .unwrap_or_default(),
            Self::Sparse(sparse) => sparse
                .entries
                .binary_search_by_key(&exponent, |(e, _)| *e)
                .map_or(0, |i| sparse.entries[i].1),
        }
    }

    /// Lowest exponent holding a nonzero digit, 0 for zero
    pub fn min_exponent(&self) -> Exponent {
        match self {
            Self::Dense(dense) => dense.min_exponent,
            Self::Sparse(sparse) => sparse.entries.first().map_or(0, |(e, _)| *e),
        }
    }

    /// Highest exponent holding a nonzero digit, 0 for zero
    pub fn max_exponent(&self) -> Exponent {
        match self {
            Self::Dense(dense) => exponent_at(dense.min_exponent, dense.slots.len().saturating_sub(1)),
            Self::Sparse(sparse) => sparse.entries.last().map_or(0, |(e, _)| *e),
        }
    }

    /// Width of `[min_exponent, max_exponent]`, 0 for zero
    pub fn span(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        (i64::from(self.max_exponent()) - i64::from(self.min_exponent()))
            .unsigned_abs()
            .saturating_add(1)
    }

    pub fn nonzero_count(&self) -> usize {
        match self {
            Self::Dense(dense) => dense.slots.iter().filter(|d| **d != 0).count(),
            Self::Sparse(sparse) => sparse.entries.len(),
        }
    }

    /// Writes every nonzero digit into `buf`, where `buf[0]` stands for exponent `lo`.
    /// Digits outside of the buffer are skipped.
    pub fn write_into(&self, lo: i64, buf: &mut [Digit]) {
        for (e, d) in self.iter().filter(|(e, _)| i64::from(*e) >= lo) {
            if let Some(slot) = buf.get_mut(index_of(lo, e)) {
                *slot = d;
            }
        }
    }

    /// Digits copied into a fresh buffer of `len` slots starting at exponent `lo`
    pub fn aligned(&self, lo: i64, len: usize) -> Result<Vec<Digit>, Error> {
        let mut buf = zeroed(len)?;
        self.write_into(lo, &mut buf);
        Ok(buf)
    }

    /// Same digits, every exponent moved by `by`
    pub fn shifted(&self, by: i64) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        let moved = |e: Exponent| Exponent::try_from(i64::from(e) + by);
        Ok(match self {
            Self::Dense(dense) => {
                moved(self.max_exponent())?;
                Dense {
                    min_exponent: moved(dense.min_exponent)?,
                    slots: dense.slots.clone(),
                }
                .into()
            }
            Self::Sparse(sparse) => Sparse {
                entries: sparse
                    .entries
                    .iter()
                    .map(|(e, d)| Ok((moved(*e)?, *d)))
                    .collect::<Result<_, Error>>()?,
            }
            .into(),
        })
    }

    /// Drops every digit below `floor`
    pub fn truncate_below(&mut self, floor: Exponent) {
        match self {
            Self::Dense(dense) => {
                let cut = i64::from(floor) - i64::from(dense.min_exponent);
                if cut > 0 {
                    let cut = usize::try_from(cut).map_or(dense.slots.len(), |cut| {
                        cut.min(dense.slots.len())
                    });
                    dense.slots.drain(..cut);
                    dense.min_exponent = floor;
                }
            }
            Self::Sparse(sparse) => sparse.entries.retain(|(e, _)| *e >= floor),
        }
        self.normalize();
    }

    /// Strips zero digits, restores ordering and collapses to canonical zero
    pub fn normalize(&mut self) {
        match self {
            Self::Dense(dense) => {
                let Some(last) = dense.slots.iter().rposition(|d| *d != 0) else {
                    *dense = Dense::zero();
                    return;
                };
                dense.slots.truncate(last + 1);
                let first = dense.slots.iter().position(|d| *d != 0).unwrap_or_default();
                dense.slots.drain(..first);
                dense.min_exponent = exponent_at(dense.min_exponent, first);
            }
            Self::Sparse(sparse) => {
                sparse.entries.retain(|(_, d)| *d != 0);
                sparse.entries.sort_unstable_by_key(|(e, _)| *e);
            }
        }
    }

    pub fn to_sparse(&self) -> Result<Sparse, Error> {
        match self {
            Self::Sparse(sparse) => Ok(sparse.clone()),
            Self::Dense(_) => {
                let mut entries = Vec::new();
                entries.try_reserve_exact(self.nonzero_count())?;
                entries.extend(self.iter());
                Ok(Sparse { entries })
            }
        }
    }

    pub fn to_dense(&self) -> Result<Dense, Error> {
        match self {
            Self::Dense(dense) => Ok(dense.clone()),
            Self::Sparse(_) if self.is_zero() => Ok(Dense::zero()),
            Self::Sparse(_) => {
                let lo = i64::from(self.min_exponent());
                let len = usize::try_from(self.span())?;
                Dense::from_slots(lo, self.aligned(lo, len)?)
            }
        }
    }

    /// Heap bytes held by the current layout
    pub fn heap_bytes(&self) -> usize {
        match self {
            Self::Dense(dense) => dense.slots.capacity() * size_of::<Digit>(),
            Self::Sparse(sparse) => sparse.entries.capacity() * size_of::<(Exponent, Digit)>(),
        }
    }
}
