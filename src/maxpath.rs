//! Longest root-to-leaf path analysis
//!
//! Only leaves are inspected: any path through an inner term extends to a
//! leaf below it that is at least as far from the root.
use std::io;
use std::io::Write;

use tracing::debug;

use crate::query;
use crate::{HpoTermId, Ontology};

/// The maximum root-to-leaf distance and every leaf achieving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxPath {
    length: usize,
    leaves: Vec<HpoTermId>,
}

impl MaxPath {
    /// Number of parent edges between the deepest leaves and the root
    pub fn length(&self) -> usize {
        self.length
    }

    /// The leaves at maximum distance, in ascending id order
    pub fn leaves(&self) -> &[HpoTermId] {
        &self.leaves
    }
}

/// Computes the longest root-to-leaf distance and the set of leaves
/// reaching it
///
/// Ties are all retained. Rerunning against the same ontology yields the
/// same result.
pub fn longest_paths(ontology: &Ontology) -> MaxPath {
    let mut length = 0;
    let mut leaves: Vec<HpoTermId> = Vec::new();

    for term in ontology {
        if !term.is_leaf() {
            continue;
        }
        let path_length = term.path_length();
        if path_length == length {
            leaves.push(term.id());
        } else if path_length > length {
            length = path_length;
            leaves.clear();
            leaves.push(term.id());
        }
    }

    debug!("{} leaves at maximum path length {}", leaves.len(), length);
    MaxPath { length, leaves }
}

/// Writes one `[max_path=N]` framed entry per qualifying leaf
///
/// Every entry carries the leaf's full ancestor trace, in the same format
/// the query resolver produces.
///
/// # Errors
///
/// Fails only if writing to the sink fails
pub fn write<W: Write>(ontology: &Ontology, max_path: &MaxPath, sink: &mut W) -> io::Result<()> {
    for leaf in max_path.leaves() {
        let term = ontology.hpo(*leaf).expect("leaf is part of the ontology");
        writeln!(sink, "[max_path={}]", max_path.length())?;
        writeln!(sink, "{}", query::ancestor_trace(&term))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Ontology;

    const CHAIN: &str = "[Term]\nid: HP:0000001\n\n\
        [Term]\nid: HP:0000002\nis_a: HP:0000001 ! All\n\n\
        [Term]\nid: HP:0000003\nis_a: HP:0000002 ! Abnormality\n\n";

    #[test]
    fn single_deepest_leaf() {
        let ont = Ontology::from_obo_data(CHAIN).unwrap();
        let max_path = longest_paths(&ont);
        assert_eq!(max_path.length(), 2);
        assert_eq!(max_path.leaves(), &[3u32.into()]);
    }

    #[test]
    fn ties_are_all_retained() {
        let data = format!(
            "{CHAIN}[Term]\nid: HP:0000004\nis_a: HP:0000002 ! Abnormality\n\n\
             [Term]\nid: HP:0000005\nis_a: HP:0000001 ! All\n\n"
        );
        let ont = Ontology::from_obo_data(&data).unwrap();
        let max_path = longest_paths(&ont);
        assert_eq!(max_path.length(), 2);
        assert_eq!(max_path.leaves(), &[3u32.into(), 4u32.into()]);
    }

    #[test]
    fn root_only_ontology() {
        let ont = Ontology::from_obo_data("[Term]\nid: HP:0000001\n").unwrap();
        let max_path = longest_paths(&ont);
        assert_eq!(max_path.length(), 0);
        assert_eq!(max_path.leaves(), &[1u32.into()]);
    }

    #[test]
    fn rerun_is_idempotent() {
        let ont = Ontology::from_obo_data(CHAIN).unwrap();
        assert_eq!(longest_paths(&ont), longest_paths(&ont));
    }

    #[test]
    fn report_format() {
        let ont = Ontology::from_obo_data(CHAIN).unwrap();
        let max_path = longest_paths(&ont);

        let mut sink = Vec::new();
        write(&ont, &max_path, &mut sink).unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "[max_path=2]\n\
             [Term]\nid: HP:0000003\nis_a: HP:0000002 ! Abnormality\n\n\
             [Term]\nid: HP:0000002\nis_a: HP:0000001 ! All\n\n\
             [Term]\nid: HP:0000001\n\n"
        );
    }
}
