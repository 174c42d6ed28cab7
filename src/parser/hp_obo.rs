//! Parse the `[Term]`-stanza text format
//!
//! A stanza starts at a line that is exactly `[Term]` and ends at the next
//! empty line or the end of the input. Stanzas carrying an `is_obsolete`
//! field are discarded. Of repeated `is_a` fields only the first is kept,
//! collapsing the multi-parent ontology onto a single-parent tree.
use std::fs;
use std::path::Path;

use tracing::{trace, warn};

use crate::ontology::{Builder, LooseCollection};
use crate::term::internal::HpoTermInternal;
use crate::{HpoError, HpoResult, HpoTermId};

const STANZA_MARKER: &str = "[Term]";

/// Reads an obo file and adds one term per non-obsolete stanza to the builder
pub(crate) fn read_obo_file<P: AsRef<Path>>(
    filename: P,
    builder: &mut Builder<LooseCollection>,
) -> HpoResult<()> {
    let file_content = fs::read_to_string(&filename)
        .map_err(|_| HpoError::CannotOpenFile(filename.as_ref().display().to_string()))?;
    parse_obo(&file_content, builder)
}

/// Scans the input line by line and collects `[Term]` stanzas
pub(crate) fn parse_obo(data: &str, builder: &mut Builder<LooseCollection>) -> HpoResult<()> {
    let mut lines = data.lines().peekable();
    while let Some(line) = lines.next() {
        if line != STANZA_MARKER {
            trace!("ignoring non-stanza line: {}", line);
            continue;
        }
        let mut stanza = vec![line];
        while let Some(stanza_line) = lines.next_if(|peeked| !peeked.is_empty()) {
            stanza.push(stanza_line);
        }
        if let Some(term) = term_from_stanza(&stanza)? {
            builder.add_term(term);
        }
    }
    Ok(())
}

/// Builds one term from the lines of a stanza, marker line included
///
/// Returns `None` for obsolete stanzas. A stanza without an `id` field
/// falls back to id `0`.
fn term_from_stanza(stanza: &[&str]) -> HpoResult<Option<HpoTermInternal>> {
    if stanza.iter().any(|line| field_name(line) == "is_obsolete") {
        trace!("skipping obsolete stanza");
        return Ok(None);
    }

    let mut id: Option<HpoTermId> = None;
    let mut parent_id: Option<HpoTermId> = None;
    let mut content = String::new();

    for line in stanza {
        content.push_str(line);
        content.push('\n');

        match field_name(line) {
            "id" => id = Some(id_code(line)?),
            // only the first is_a line counts
            "is_a" if parent_id.is_none() => parent_id = Some(parent_code(line)?),
            _ => (),
        }
    }

    let id = id.unwrap_or_else(|| {
        warn!("stanza without id field, falling back to id 0");
        HpoTermId::default()
    });

    Ok(Some(HpoTermInternal::new(id, parent_id, content)))
}

/// The field name is everything before the first `:`, or the whole line
/// for lines without one
fn field_name(line: &str) -> &str {
    line.split_once(':').map_or(line, |(name, _)| name)
}

/// The integer code in the third `:`-delimited field,
/// e.g. `id: HP:0001197` yields 1197
fn id_code(line: &str) -> HpoResult<HpoTermId> {
    let digits = line.split(':').nth(2).ok_or(HpoError::ParseIntError)?;
    Ok(digits.parse::<u32>()?.into())
}

/// Like [`id_code`], but only the token before the first space counts,
/// e.g. `is_a: HP:0001196 ! Some label` yields 1196
fn parent_code(line: &str) -> HpoResult<HpoTermId> {
    let value = line.split(':').nth(2).ok_or(HpoError::ParseIntError)?;
    let digits = value.split_once(' ').map_or(value, |(code, _)| code);
    Ok(digits.parse::<u32>()?.into())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Ontology;

    const SMALL: &str = "format-version: 1.2\n\n\
        [Term]\nid: HP:0000001\nname: All\n\n\
        [Term]\nid: HP:0000002\nname: Abnormality\nis_a: HP:0000001 ! All\n\n\
        [Term]\nid: HP:0000003\nis_a: HP:0000002 ! Abnormality\nis_a: HP:0000001 ! All\n\n\
        [Term]\nid: HP:0000004\nis_obsolete: true\n";

    fn parse(data: &str) -> Builder<LooseCollection> {
        let mut builder = Builder::new();
        parse_obo(data, &mut builder).unwrap();
        builder
    }

    #[test]
    fn split_terms() {
        let ont = parse(SMALL).terms_complete().link_all().unwrap();

        assert_eq!(ont.len(), 3);
        assert!(ont.hpo(4u32).is_none());
    }

    #[test]
    fn first_is_a_wins() {
        let ont = parse(SMALL).terms_complete().link_all().unwrap();
        assert_eq!(ont.hpo(3u32).unwrap().parent_id(), Some(2u32.into()));
    }

    #[test]
    fn content_is_verbatim() {
        let ont = parse(SMALL).terms_complete().link_all().unwrap();
        assert_eq!(
            ont.hpo(2u32).unwrap().content(),
            "[Term]\nid: HP:0000002\nname: Abnormality\nis_a: HP:0000001 ! All\n"
        );
    }

    #[test]
    fn obsolete_without_colon_is_discarded() {
        let data = "[Term]\nid: HP:0000001\n\n[Term]\nid: HP:0000005\nis_obsolete\n";
        let ont = parse(data).terms_complete().link_all().unwrap();
        assert_eq!(ont.len(), 1);
    }

    #[test]
    fn missing_id_falls_back_to_zero() {
        let data = "[Term]\nname: nameless\nis_a: HP:0000001 ! All\n\n[Term]\nid: HP:0000001\n";
        let ont = Ontology::from_obo_data(data).unwrap();
        assert!(ont.hpo(0u32).is_some());
        assert_eq!(ont.hpo(0u32).unwrap().parent_id(), Some(1u32.into()));
    }

    #[test]
    fn stanza_at_end_of_input() {
        // no trailing empty line after the last stanza
        let data = "[Term]\nid: HP:0000001\n\n[Term]\nid: HP:0000009\nis_a: HP:0000001 ! All";
        let ont = Ontology::from_obo_data(data).unwrap();
        assert_eq!(ont.len(), 2);
        assert_eq!(
            ont.hpo(9u32).unwrap().content(),
            "[Term]\nid: HP:0000009\nis_a: HP:0000001 ! All\n"
        );
    }

    #[test]
    fn unparseable_id_is_an_error() {
        let mut builder = Builder::new();
        assert!(matches!(
            parse_obo("[Term]\nid: HP:00x01\n", &mut builder),
            Err(HpoError::ParseIntError)
        ));
    }

    #[test]
    fn missing_file() {
        let mut builder = Builder::new();
        assert!(matches!(
            read_obo_file("does/not/exist.obo", &mut builder),
            Err(HpoError::CannotOpenFile(_))
        ));
    }
}
