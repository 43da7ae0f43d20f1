/*
Split a FASTA file into smaller files that can be handed to netMHC one by one
    + read the whole file and cut it at every ">"
        + drop empty pieces (leading marker, doubled markers)
    + group the records
        + --num: fixed number of records per file
        + --num_chunks: ceil(records / num_chunks) records per file
    + write each group as split{i}_{stem}
        + the first file carries no leading ">", like the original framing

Arguments
    get path to the FASTA file
    chunk size or number of chunks
    optional output directory

The written file names are printed space separated on stdout for shell capture.
*/

mod utils;
use clap::Parser;
use log::{debug, error};
use netmhc_common::{init_logging, join_paths};
use utils::get_args::Cli;
use utils::split_records::split_files;

fn main() {
    init_logging();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    match split_files(&cli) {
        Ok(split_list) => println!("{}", join_paths(&split_list, " ")),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
