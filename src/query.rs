//! Resolve ancestor-trace queries against the [`Ontology`]
//!
//! Every line of the query input yields exactly one output entry: the
//! ancestor trace of the queried term, or a diagnostic line for queries
//! that cannot be completed. Errors in single entries never abort the run.
use std::io;
use std::io::Write;

use crate::{HpoTerm, HpoTermId, Ontology};

/// Diagnostic for a query line without a numeric code in its third field
pub const MALFORMED_ENTRY: &str =
    "QUERY CANNOT BE COMPLETED. QUERY.TXT ENTRY NOT FORMATTED PROPERLY.";

/// Diagnostic for an id that is not part of the ontology
pub const UNKNOWN_ID: &str = "QUERY CANNOT BE COMPLETED. NO SUCH ID EXISTS.";

/// Header line preceding every entry of the results output
pub const ANSWER_HEADER: &str = "[query_answer]";

/// One parsed line of the query input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Query for the term with the given id
    Term(HpoTermId),
    /// The line carries no numeric code in its third `:`-field
    Malformed,
}

impl Query {
    /// Parses a single query line
    ///
    /// The queried id is the numeric code in the third `:`-delimited field,
    /// `a:b:3` queries the term `HP:0000003`.
    pub fn from_line(line: &str) -> Query {
        match line.split(':').nth(2).map(str::parse::<u32>) {
            Some(Ok(code)) => Query::Term(code.into()),
            _ => Query::Malformed,
        }
    }
}

/// Renders the ancestor trace of a term
///
/// The trace is the term's own stanza text followed by the text of every
/// ancestor up to and including the root, blocks separated by a newline.
pub fn ancestor_trace(term: &HpoTerm) -> String {
    let mut entry = String::from(term.content());
    for ancestor in term.ancestors() {
        entry.push('\n');
        entry.push_str(ancestor.content());
    }
    entry
}

/// Resolves one query to its output block
pub fn resolve(ontology: &Ontology, query: Query) -> String {
    match query {
        Query::Malformed => String::from(MALFORMED_ENTRY),
        Query::Term(id) => match ontology.hpo(id) {
            Some(term) => ancestor_trace(&term),
            None => String::from(UNKNOWN_ID),
        },
    }
}

/// Resolves all query lines in source order, writing one framed entry
/// per line to the sink
///
/// Entries are written as they are produced, none are retained.
///
/// # Errors
///
/// Fails only if writing to the sink fails
pub fn process<I, W>(ontology: &Ontology, lines: I, sink: &mut W) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    W: Write,
{
    for line in lines {
        let entry = resolve(ontology, Query::from_line(line.as_ref()));
        writeln!(sink, "{ANSWER_HEADER}")?;
        writeln!(sink, "{entry}")?;
    }
    Ok(())
}
