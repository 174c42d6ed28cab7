use std::env;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

use hpotrace::{maxpath, query, HpoError, HpoResult, Ontology};

const ONTOLOGY_FILE: &str = "HPO.txt";
const QUERY_FILE: &str = "queries.txt";
const RESULTS_FILE: &str = "results.txt";
const MAXPATH_FILE: &str = "maxpath.txt";

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let ontology_file = args.next().unwrap_or_else(|| String::from(ONTOLOGY_FILE));
    let query_file = args.next().unwrap_or_else(|| String::from(QUERY_FILE));
    let results_file = args.next().unwrap_or_else(|| String::from(RESULTS_FILE));
    let maxpath_file = args.next().unwrap_or_else(|| String::from(MAXPATH_FILE));

    match run(&ontology_file, &query_file, &results_file, &maxpath_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    ontology_file: &str,
    query_file: &str,
    results_file: &str,
    maxpath_file: &str,
) -> HpoResult<()> {
    let ontology = Ontology::from_obo(ontology_file)?;

    // the query input is read in full before any output file is created
    let queries = fs::read_to_string(query_file)
        .map_err(|_| HpoError::CannotOpenFile(query_file.to_string()))?;

    let mut results = BufWriter::new(File::create(results_file)?);
    query::process(&ontology, queries.lines(), &mut results)?;
    results.flush()?;

    let max_path = maxpath::longest_paths(&ontology);
    let mut report = BufWriter::new(File::create(maxpath_file)?);
    maxpath::write(&ontology, &max_path, &mut report)?;
    report.flush()?;

    Ok(())
}
