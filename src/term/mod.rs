//! Types for individual ontology terms
use smallvec::SmallVec;

use crate::DEFAULT_NUM_CHILDREN;

mod hpoterm;
mod hpotermid;
pub(crate) mod internal;

pub use hpoterm::{Ancestors, HpoTerm, HpoTerms};
pub use hpotermid::HpoTermId;
pub(crate) use internal::HpoTermInternal;

/// [`HpoTermId`]s of the direct children of a term, in discovery order
pub type HpoChildren = SmallVec<[HpoTermId; DEFAULT_NUM_CHILDREN]>;
