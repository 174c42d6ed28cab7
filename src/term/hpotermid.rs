use core::fmt::Debug;
use std::fmt::Display;

use crate::{HpoError, HpoResult};

/// The numeric identifier of an HPO term, e.g. `HP:0000123`
///
/// The identifier is the integer form of the `HP:NNNNNNN` code, so
/// `HP:0001197` and `HP:1197` denote the same term.
#[derive(Copy, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HpoTermId {
    inner: u32,
}

impl HpoTermId {
    /// Returns the identifier as `usize`, e.g. for indexing
    pub fn to_usize(self) -> usize {
        self.inner as usize
    }
}

impl TryFrom<&str> for HpoTermId {
    type Error = HpoError;
    fn try_from(s: &str) -> HpoResult<Self> {
        let (_, digits) = s.split_once(':').ok_or(HpoError::ParseIntError)?;
        Ok(HpoTermId {
            inner: digits.parse::<u32>()?,
        })
    }
}

impl From<u32> for HpoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Debug for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HpoTermId({})", self)
    }
}

impl Display for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP:{:07}", self.inner)
    }
}
