use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::ontology::termarena::Arena;
use crate::ontology::Ontology;
use crate::term::internal::HpoTermInternal;
use crate::{HpoError, HpoResult, HpoTermId};

/// Marker state: terms may still be added
pub struct LooseCollection;
/// Marker state: the term set is complete and ready for linking
pub struct AllTerms;

fn transition_state<TX, TY>(builder: Builder<TX>) -> Builder<TY> {
    Builder::<TY> {
        terms: builder.terms,
        state: PhantomData,
    }
}

/// Two-phase construction of an [`Ontology`]
///
/// The parser populates a `Builder<LooseCollection>`. Once all terms are
/// present, [`Builder::terms_complete`] seals the term set and
/// [`Builder::link_all`] wires every term to its parent, yielding the
/// immutable [`Ontology`]. The type states make a second linking pass or
/// a late insertion impossible.
pub struct Builder<T> {
    terms: Arena,
    state: PhantomData<T>,
}

impl Builder<LooseCollection> {
    pub fn new() -> Builder<LooseCollection> {
        Builder::<LooseCollection> {
            terms: Arena::default(),
            state: PhantomData,
        }
    }

    /// Inserts a term at its sorted position in the arena
    ///
    /// A term with an already known id is dropped, the first record wins.
    pub(crate) fn add_term(&mut self, term: HpoTermInternal) {
        let id = term.id();
        if !self.terms.insert(term) {
            warn!("skipping duplicate term {}", id);
        }
    }

    /// Inserts a term with the given id, parent and stanza text
    ///
    /// # Examples
    ///
    /// ```
    /// use hpotrace::Builder;
    ///
    /// let mut builder = Builder::new();
    /// builder.insert_term(1u32.into(), None, String::from("[Term]\nid: HP:0000001\n"));
    /// builder.insert_term(2u32.into(), Some(1u32.into()), String::from("[Term]\nid: HP:0000002\n"));
    ///
    /// let ontology = builder.terms_complete().link_all().unwrap();
    /// assert_eq!(ontology.root().id(), 1u32.into());
    /// ```
    pub fn insert_term(&mut self, id: HpoTermId, parent_id: Option<HpoTermId>, content: String) {
        self.add_term(HpoTermInternal::new(id, parent_id, content));
    }

    /// Seals the term set
    #[must_use]
    pub fn terms_complete(self) -> Builder<AllTerms> {
        transition_state(self)
    }
}

impl Default for Builder<LooseCollection> {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<AllTerms> {
    /// Resolves every term's parent and records the child links
    ///
    /// Runs exactly once, consuming the builder.
    ///
    /// # Errors
    ///
    /// - [`HpoError::DanglingParent`] if a term references an id that is
    ///   not part of the ontology
    /// - [`HpoError::NoRootTerm`] / [`HpoError::MultipleRootTerms`] if not
    ///   exactly one term is without a parent
    pub fn link_all(mut self) -> HpoResult<Ontology> {
        let mut roots: Vec<HpoTermId> = Vec::with_capacity(1);
        let mut connections: Vec<(HpoTermId, HpoTermId)> = Vec::with_capacity(self.terms.len());

        for term in self.terms.values() {
            match term.parent_id() {
                Some(parent) => connections.push((term.id(), parent)),
                None => roots.push(term.id()),
            }
        }

        let root = match roots[..] {
            [id] => id,
            [] => return Err(HpoError::NoRootTerm),
            _ => return Err(HpoError::MultipleRootTerms(roots.len())),
        };

        for (child, parent) in connections {
            self.terms
                .get_mut(parent)
                .ok_or(HpoError::DanglingParent { child, parent })?
                .add_child(child);
        }

        debug!("linked {} terms below root {}", self.terms.len(), root);
        Ok(Ontology::new(self.terms, root))
    }
}
