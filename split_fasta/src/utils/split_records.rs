/*
    Cut the file at every record marker
    Group the records by a fixed size, or by ceil(total / num_chunks)
    Join every group back with the marker and write it to its own file
*/

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use netmhc_common::{MhcError, Result};
use netmhc_common::lib_utils::struct_helper::read_file;
use super::get_args::Cli;

const RECORD_MARKER: char = '>';
const RECORD_SEPARATOR: &str = ">";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SplitMode {
    /// records per file
    ChunkSize(usize),
    /// files requested
    NumChunks(usize),
}

pub fn split_files(cli: &Cli) -> Result<Vec<PathBuf>> {
    let content = read_file(&cli.fname)?;
    info!("File opened successfully - {:?}", cli.fname);
    let records = parse_records(&content);
    if records.is_empty() {
        warn!("No records found in {:?}, nothing to split", cli.fname);
        return Ok(Vec::new());
    }
    let mode = cli.mode();
    let size = records_per_chunk(mode, records.len())?;
    info!("{} records found, writing {} records per chunk", records.len(), size);

    if let Some(outdir) = &cli.outdir {
        fs::create_dir_all(outdir).map_err(|e| MhcError::io(outdir, e))?;
    }

    let mut split_list = Vec::new();
    for (idx, chunk) in records.chunks(size).enumerate() {
        let count = idx + 1;
        let chunk_content = assemble_chunk(chunk, count == 1 && !cli.keep_leading_marker);
        let file_name = chunk_file_name(count, &cli.fname);
        let split_path = match &cli.outdir {
            Some(outdir) => outdir.join(file_name),
            None => PathBuf::from(file_name),
        };
        fs::write(&split_path, chunk_content).map_err(|e| MhcError::io(&split_path, e))?;
        debug!("Wrote {} records to {:?}", chunk.len(), split_path);
        split_list.push(split_path);
    }

    if let SplitMode::NumChunks(requested) = mode {
        if split_list.len() != requested {
            warn!("{} chunks requested but {} records only fill {} chunks of {}",
                requested, records.len(), split_list.len(), size);
        }
    }
    Ok(split_list)
}

/// Pieces of the file between record markers. Empty pieces are dropped.
pub fn parse_records(content: &str) -> Vec<&str> {
    content.split(RECORD_MARKER)
        .filter(|record| !record.is_empty())
        .collect()
}

pub fn records_per_chunk(mode: SplitMode, total_records: usize) -> Result<usize> {
    match mode {
        SplitMode::ChunkSize(0) => {
            warn!("Chunk size of 0 requested, using 1");
            Ok(1)
        },
        SplitMode::ChunkSize(size) => Ok(size),
        SplitMode::NumChunks(0) => Err(MhcError::InvalidChunkCount),
        SplitMode::NumChunks(num_chunks) => {
            Ok(total_records.div_ceil(num_chunks).max(1))
        }
    }
}

pub fn assemble_chunk(records: &[&str], strip_leading_marker: bool) -> String {
    let joined = records.join(RECORD_SEPARATOR);
    if strip_leading_marker {
        joined
    } else {
        format!("{RECORD_SEPARATOR}{joined}")
    }
}

// split{index}_{file name up to its first "."}
pub fn chunk_file_name(index: usize, input: &Path) -> String {
    let stem = input.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or_default();
    format!("split{index}_{stem}")
}
