use clap::Parser;
use netmhc_common::{MhcError, NetMhcVersion};

// no `version` here: --version is the netMHC release tag
#[derive(Parser)]
#[command(author, about = "Convert netMHC predictions to FASTA", long_about = None)]
pub struct Cli {
    /// netMHC version that produced the raw files: 3.4, 4.0 or pan
    #[arg(long = "version", required = true, value_parser = parse_version)]
    pub netmhc_version: NetMhcVersion,
    /// Raw netMHC output files. Whitespace separated lists inside one argument are accepted
    #[arg(long = "rawfiles", required = true, num_args = 1.., action = clap::ArgAction::Append)]
    pub rawfiles: Vec<String>,
    /// Affinity cutoff. Rows scoring below it are kept
    #[arg(long = "cutoff", required = true, value_parser = validate_cutoff)]
    pub cutoff: f64,
}

fn parse_version(input_str: &str) -> Result<NetMhcVersion, String> {
    input_str.parse().map_err(|e: MhcError| e.to_string())
}

fn validate_cutoff(input_str: &str) -> Result<f64, String> {
    let cutoff: f64 = input_str
        .trim()
        .parse()
        .map_err(|_| format!("Cutoff {input_str:?} is not a number"))?;
    if cutoff.is_nan() {
        Err(String::from("Cutoff cannot be NaN"))
    } else {
        Ok(cutoff)
    }
}
