use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use super::split_records::SplitMode;

#[derive(Parser)]
#[command(author, version, about = "Split a FASTA file into smaller chunks", long_about = None)]
#[command(group(ArgGroup::new("chunking").required(true).args(["num", "num_chunks"])))]
pub struct Cli {
    /// The input FASTA file
    #[arg(long = "fname", required = true)]
    pub fname: PathBuf,
    /// Number of records written to each chunk
    #[arg(long = "num")]
    pub num: Option<usize>,
    /// Number of chunks to split the file into
    #[arg(long = "num_chunks")]
    pub num_chunks: Option<usize>,
    /// Directory to store the chunks in. Default: current directory
    #[arg(short = 'o', long = "outdir")]
    pub outdir: Option<PathBuf>,
    /// Keep the ">" in front of the first record of the first chunk
    #[arg(long = "keep-leading-marker")]
    pub keep_leading_marker: bool,
}

impl Cli {
    pub fn mode(&self) -> SplitMode {
        // clap guarantees exactly one of the two
        match self.num_chunks {
            Some(num_chunks) => SplitMode::NumChunks(num_chunks),
            None => SplitMode::ChunkSize(self.num.unwrap_or(1)),
        }
    }
}
