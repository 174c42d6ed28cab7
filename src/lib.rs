//! Parse stanza-based phenotype ontology files and query their hierarchy
//!
//! The crate reads the `[Term]`-stanza text format of the Human Phenotype
//! Ontology, collapses every term onto its first `is_a` parent and builds a
//! single-parent tree, the [`Ontology`]. Against the finished tree it
//! answers ancestor-trace queries ([`query`]) and reports the longest
//! root-to-leaf path(s) ([`maxpath`]).
//!
//! # Examples
//!
//! ```
//! use hpotrace::Ontology;
//!
//! let ontology = Ontology::from_obo_data(
//!     "[Term]\nid: HP:0000001\n\n[Term]\nid: HP:0000002\nis_a: HP:0000001 ! All\n",
//! )
//! .unwrap();
//!
//! let term = ontology.hpo(2u32).unwrap();
//! assert_eq!(term.path_length(), 1);
//! ```
use std::num::ParseIntError;
use thiserror::Error;

pub mod maxpath;
pub mod query;
pub mod term;
mod ontology;
mod parser;

pub use ontology::{AllTerms, Builder, LooseCollection, Ontology};
pub use term::{HpoTerm, HpoTermId};

const DEFAULT_NUM_CHILDREN: usize = 10;

/// Error variants of the crate
#[derive(Error, Debug)]
pub enum HpoError {
    /// The searched term is not present in the ontology
    #[error("term does not exist")]
    DoesNotExist,
    /// Failed to parse an integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// The provided input file could not be opened or read
    #[error("cannot open file: {0}")]
    CannotOpenFile(String),
    /// A term references a parent that is not part of the ontology
    #[error("term {child} references unknown parent term {parent}")]
    DanglingParent {
        /// the referencing term
        child: HpoTermId,
        /// the missing parent
        parent: HpoTermId,
    },
    /// No term without a parent exists, so the ontology has no root
    #[error("ontology does not contain a root term")]
    NoRootTerm,
    /// More than one term without a parent exists
    #[error("ontology contains {0} terms without a parent")]
    MultipleRootTerms(usize),
    /// Reading or writing one of the boundary files failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ParseIntError> for HpoError {
    fn from(_: ParseIntError) -> Self {
        HpoError::ParseIntError
    }
}

/// Crate-wide Result alias
pub type HpoResult<T> = Result<T, HpoError>;
