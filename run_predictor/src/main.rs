/*
Run netMHC / netMHCpan over a set of FASTA files
    + for every peptide length
        + for every input file
            + name the outputs after the file name up to ".f"
                {head}_{length}_output.txt  predictor stdout
                {head}_{length}_error.log   predictor stderr
            + build the argument list for the version
                4.0 / 3.4: netMHC -l len -a mhc file
                pan:       netMHCpan -l len -a mhc -f file
            + run the predictor, wait for it
    + failed runs are reported, the remaining runs still go ahead

Arguments
    directory holding the predictor
    version
    input files
    MHC allele
    peptide lengths as one string, e.g. "8 9 10"
    number of predictions running at once

The output file names are printed one per line on stdout for shell capture.
*/

mod utils;
use clap::Parser;
use log::{debug, error};
use netmhc_common::{init_logging, join_paths};
use utils::get_args::Cli;
use utils::execute_mhc::executemhc;

fn main() {
    init_logging();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    match executemhc(&cli) {
        Ok(out_list) => println!("{}", join_paths(&out_list, "\n")),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
