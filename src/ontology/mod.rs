use core::fmt::Debug;
use std::path::Path;

use tracing::debug;

use crate::parser;
use crate::term::internal::HpoTermInternal;
use crate::term::{HpoTerm, HpoTermId};
use crate::HpoResult;

mod builder;
mod termarena;

pub use builder::{AllTerms, Builder, LooseCollection};
use termarena::Arena;

/// `Ontology` holds the complete, linked term hierarchy
///
/// It is constructed once per run, either from an obo-style file
/// ([`Ontology::from_obo`]) or from in-memory text
/// ([`Ontology::from_obo_data`]), and is read-only afterwards. All terms
/// are kept sorted by ascending [`HpoTermId`].
///
/// # Examples
///
/// ```
/// use hpotrace::Ontology;
///
/// let ontology = Ontology::from_obo_data(
///     "[Term]\nid: HP:0000001\n\n[Term]\nid: HP:0000118\nis_a: HP:0000001 ! All\n",
/// )
/// .unwrap();
///
/// assert_eq!(ontology.len(), 2);
/// assert_eq!(ontology.root().id(), 1u32.into());
/// assert!(ontology.hpo(9999u32).is_none());
///
/// for term in &ontology {
///     println!("{}", term.id());
/// }
/// ```
pub struct Ontology {
    terms: Arena,
    root: HpoTermId,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.terms.len())
    }
}

impl Ontology {
    /// Builds the ontology from a stanza-based obo file
    ///
    /// # Errors
    ///
    /// - file not present or readable: [`crate::HpoError::CannotOpenFile`]
    /// - invalid stanza data or hierarchy: see [`Builder::link_all`]
    pub fn from_obo<P: AsRef<Path>>(filename: P) -> HpoResult<Ontology> {
        let mut builder = Builder::new();
        parser::hp_obo::read_obo_file(filename, &mut builder)?;
        let ontology = builder.terms_complete().link_all()?;
        debug!("loaded ontology with {} terms", ontology.len());
        Ok(ontology)
    }

    /// Builds the ontology from stanza-based text
    ///
    /// # Errors
    ///
    /// Same as [`Ontology::from_obo`], except that no file is involved
    pub fn from_obo_data(data: &str) -> HpoResult<Ontology> {
        let mut builder = Builder::new();
        parser::hp_obo::parse_obo(data, &mut builder)?;
        builder.terms_complete().link_all()
    }

    pub(crate) fn new(terms: Arena, root: HpoTermId) -> Ontology {
        Ontology { terms, root }
    }

    pub(crate) fn get(&self, term_id: HpoTermId) -> Option<&HpoTermInternal> {
        self.terms.get(term_id)
    }

    pub(crate) fn get_unchecked(&self, term_id: HpoTermId) -> &HpoTermInternal {
        self.terms.get_unchecked(term_id)
    }

    /// Returns the term with the given id, `None` if it does not exist
    pub fn hpo<I: Into<HpoTermId>>(&self, term_id: I) -> Option<HpoTerm> {
        self.get(term_id.into()).map(|term| HpoTerm::new(self, term))
    }

    /// Returns the root term of the hierarchy
    pub fn root(&self) -> HpoTerm {
        HpoTerm::new(self, self.get_unchecked(self.root))
    }

    /// Returns the number of terms in the ontology
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the ontology holds no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns an iterator of all terms, in ascending id order
    pub fn terms(&self) -> OntologyIterator {
        OntologyIterator {
            inner: self.terms.values().iter(),
            ontology: self,
        }
    }
}

/// Iterates all [`HpoTerm`]s of the ontology in ascending id order
pub struct OntologyIterator<'a> {
    inner: std::slice::Iter<'a, HpoTermInternal>,
    ontology: &'a Ontology,
}

impl<'a> Iterator for OntologyIterator<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|term| HpoTerm::new(self.ontology, term))
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = HpoTerm<'a>;
    type IntoIter = OntologyIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms()
    }
}
