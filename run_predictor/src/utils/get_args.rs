use clap::Parser;
use netmhc_common::{MhcError, NetMhcVersion};
use std::path::PathBuf;
use super::execute_mhc::parse_lengths;

#[derive(Parser)]
#[command(author, version, about = "Execute netMHC predictions", long_about = None)]
pub struct Cli {
    /// Directory holding the netMHC / netMHCpan executable
    #[arg(long = "path", required = true)]
    pub path: PathBuf,
    /// Version of netMHC: 4.0, pan or 3.4
    // own id so it does not collide with clap's --version flag
    #[arg(id = "netmhc_version", long = "ver", required = true, value_parser = parse_version)]
    pub netmhc_version: NetMhcVersion,
    /// Input FASTA file(s)
    #[arg(long = "ifile", required = true, num_args = 1.., action = clap::ArgAction::Append)]
    pub ifile: Vec<PathBuf>,
    /// MHC allele, e.g. HLA-A0201
    #[arg(long = "mhc", required = true)]
    pub mhc: String,
    /// Peptide length(s), e.g. "8 9 10"
    #[arg(long = "length", required = true, value_parser = validate_lengths)]
    pub lengths: PeptideLengths,
    /// Number of predictions running at the same time. Default: 1
    #[arg(short = 'n', long = "threads", default_value_t = 1, value_parser = validate_threads)]
    pub nproc: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeptideLengths(pub Vec<u32>);

fn parse_version(input_str: &str) -> Result<NetMhcVersion, String> {
    input_str.parse().map_err(|e: MhcError| e.to_string())
}

fn validate_lengths(input_str: &str) -> Result<PeptideLengths, String> {
    parse_lengths(input_str)
        .map(PeptideLengths)
        .map_err(|e| e.to_string())
}

fn validate_threads(input_str: &str) -> Result<usize, String> {
    match input_str.parse::<usize>() {
        Ok(nproc) if nproc > 0 => Ok(nproc),
        _ => Err(format!("Threads must be a positive integer, got {input_str:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "run_predictor", "--path", "/opt/netMHC-4.0", "--ver", "4.0",
            "--ifile", "split1_seqs", "split2_seqs",
            "--mhc", "HLA-A0201", "--length", "8 9 10",
        ]).unwrap();
        assert_eq!(cli.netmhc_version, NetMhcVersion::V40);
        assert_eq!(cli.ifile, vec![PathBuf::from("split1_seqs"), PathBuf::from("split2_seqs")]);
        assert_eq!(cli.lengths, PeptideLengths(vec![8, 9, 10]));
        assert_eq!(cli.nproc, 1);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let parsed = Cli::try_parse_from([
            "run_predictor", "--path", ".", "--ver", "2.0", "--ifile", "a.fa",
            "--mhc", "HLA-A0201", "--length", "9",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ver_and_version_flags_coexist() {
        Cli::command().debug_assert();
        let parsed = Cli::try_parse_from(["run_predictor", "--version"]);
        assert_eq!(parsed.err().map(|e| e.kind()), Some(clap::error::ErrorKind::DisplayVersion));
    }

    #[test]
    fn zero_threads_is_rejected() {
        assert!(validate_threads("0").is_err());
        assert_eq!(validate_threads("4").unwrap(), 4);
    }
}
