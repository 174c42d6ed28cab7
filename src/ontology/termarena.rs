use crate::term::internal::HpoTermInternal;
use crate::HpoTermId;

/// Arena of all terms, kept sorted by ascending [`HpoTermId`]
///
/// Insertion shifts the tail of the vector, which is acceptable for the
/// one-time batch construction. Lookups are binary searches.
pub(crate) struct Arena {
    terms: Vec<HpoTermInternal>,
}

impl Arena {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Inserts the term at its sorted position
    ///
    /// Returns whether the term was newly inserted. That is:
    ///
    /// - If the arena did not previously contain a term with this id, true is returned.
    /// - If a term with the same id is already present, false is returned
    ///   and the arena is unchanged.
    pub fn insert(&mut self, term: HpoTermInternal) -> bool {
        match self.position(term.id()) {
            Ok(_) => false,
            Err(idx) => {
                self.terms.insert(idx, term);
                true
            }
        }
    }

    pub fn get(&self, id: HpoTermId) -> Option<&HpoTermInternal> {
        self.position(id).ok().map(|idx| &self.terms[idx])
    }

    pub fn get_unchecked(&self, id: HpoTermId) -> &HpoTermInternal {
        self.get(id).unwrap()
    }

    pub fn get_mut(&mut self, id: HpoTermId) -> Option<&mut HpoTermInternal> {
        match self.position(id) {
            Ok(idx) => Some(&mut self.terms[idx]),
            Err(_) => None,
        }
    }

    /// All terms in ascending id order
    pub fn values(&self) -> &[HpoTermInternal] {
        &self.terms
    }

    fn position(&self, id: HpoTermId) -> Result<usize, usize> {
        self.terms.binary_search_by_key(&id, HpoTermInternal::id)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            terms: Vec::with_capacity(20_000),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn term(id: u32) -> HpoTermInternal {
        HpoTermInternal::new(id.into(), None, String::new())
    }

    #[test]
    fn sorted_insertion() {
        let mut arena = Arena::default();
        for id in [5u32, 1, 3, 4, 2] {
            assert!(arena.insert(term(id)));
        }
        let ids: Vec<HpoTermId> = arena.values().iter().map(HpoTermInternal::id).collect();
        assert_eq!(
            ids,
            vec![1u32.into(), 2u32.into(), 3u32.into(), 4u32.into(), 5u32.into()]
        );
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut arena = Arena::default();
        assert!(arena.insert(term(7)));
        assert!(!arena.insert(term(7)));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn lookup() {
        let mut arena = Arena::default();
        for id in [10u32, 20, 30] {
            arena.insert(term(id));
        }
        assert_eq!(arena.get(20u32.into()).unwrap().id(), 20u32.into());
        assert!(arena.get(25u32.into()).is_none());
    }
}
