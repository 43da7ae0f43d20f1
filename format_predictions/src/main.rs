/*
Convert raw netMHC / netMHCpan predictions into FASTA records
    + expand the raw file list (a captured list may arrive as one argument)
    + for every raw file
        + drop the header, footer and log lines named by the version's bad words
        + split the remaining lines on whitespace
        + keep rows whose score column is below the cutoff
            + 3.4: score in column 3
            + 4.0 / pan: score in column 11
        + write the kept rows as ">>header" + peptide
    + the output file is the raw file name with "output" replaced by "data"

Arguments
    netMHC version
    raw files
    cutoff

The written file names are printed space separated on stdout for shell capture.
*/

mod utils;
use clap::Parser;
use log::{debug, error};
use netmhc_common::{init_logging, join_paths};
use utils::get_args::Cli;
use utils::format_results::process_data;

fn main() {
    init_logging();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    match process_data(&cli) {
        Ok(formatted_files) => println!("{}", join_paths(&formatted_files, " ")),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
