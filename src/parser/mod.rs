//! Parsers for the ontology input files
pub(crate) mod hp_obo;
