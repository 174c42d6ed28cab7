use crate::term::internal::HpoTermInternal;
use crate::term::{HpoChildren, HpoTermId};
use crate::{HpoError, HpoResult, Ontology};

/// A single term of the ontology with access to its relations
///
/// `HpoTerm`s borrow from the [`Ontology`] and are created through
/// [`Ontology::hpo`] or by iterating the ontology.
#[derive(Debug, Clone, Copy)]
pub struct HpoTerm<'a> {
    id: HpoTermId,
    parent_id: Option<HpoTermId>,
    content: &'a str,
    children: &'a HpoChildren,
    ontology: &'a Ontology,
}

impl<'a> HpoTerm<'a> {
    /// Constructs a new [`HpoTerm`]
    ///
    /// # Errors
    ///
    /// If the given [`HpoTermId`] does not match an existing term
    /// it returns [`HpoError::DoesNotExist`]
    pub fn try_new(ontology: &'a Ontology, term_id: HpoTermId) -> HpoResult<HpoTerm<'a>> {
        let term = ontology.get(term_id).ok_or(HpoError::DoesNotExist)?;
        Ok(HpoTerm::new(ontology, term))
    }

    pub(crate) fn new(ontology: &'a Ontology, term: &'a HpoTermInternal) -> HpoTerm<'a> {
        HpoTerm {
            id: term.id(),
            parent_id: term.parent_id(),
            content: term.content(),
            children: term.children(),
            ontology,
        }
    }

    /// Returns the [`HpoTermId`] of the term
    pub fn id(&self) -> HpoTermId {
        self.id
    }

    /// Returns the [`HpoTermId`] of the parent, `None` for the root
    pub fn parent_id(&self) -> Option<HpoTermId> {
        self.parent_id
    }

    /// Returns the verbatim stanza text of the term
    ///
    /// Every line of the source stanza, the `[Term]` marker included,
    /// carries its trailing newline.
    pub fn content(&self) -> &'a str {
        self.content
    }

    /// Returns the parent term, `None` for the root
    pub fn parent(&self) -> Option<HpoTerm<'a>> {
        self.parent_id
            .map(|id| HpoTerm::new(self.ontology, self.ontology.get_unchecked(id)))
    }

    /// Returns an iterator of the direct children of the term
    pub fn children(&self) -> HpoTerms<'a> {
        HpoTerms::new(self.children, self.ontology)
    }

    /// Returns `true` if the term has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns an iterator walking from the parent up to the root
    ///
    /// The term itself is not part of the iteration. For the root the
    /// iterator is empty.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            ontology: self.ontology,
            next: self.parent_id,
        }
    }

    /// Returns the number of parent edges between the term and the root
    ///
    /// The root itself has a path length of `0`.
    pub fn path_length(&self) -> usize {
        self.ancestors().count()
    }
}

/// Iterates the chain of parents up to and including the root
pub struct Ancestors<'a> {
    ontology: &'a Ontology,
    next: Option<HpoTermId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        // parent ids are verified during linking, so the lookup cannot fail
        let term = self.ontology.get_unchecked(self.next.take()?);
        self.next = term.parent_id();
        Some(HpoTerm::new(self.ontology, term))
    }
}

/// Iterates a list of [`HpoTermId`]s as [`HpoTerm`]s
pub struct HpoTerms<'a> {
    ontology: &'a Ontology,
    ids: std::slice::Iter<'a, HpoTermId>,
}

impl<'a> HpoTerms<'a> {
    pub(crate) fn new(ids: &'a HpoChildren, ontology: &'a Ontology) -> Self {
        HpoTerms {
            ids: ids.iter(),
            ontology,
        }
    }
}

impl<'a> Iterator for HpoTerms<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        Some(HpoTerm::new(self.ontology, self.ontology.get_unchecked(*id)))
    }
}
