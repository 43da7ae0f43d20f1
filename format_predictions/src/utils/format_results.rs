/*
    Read every raw file line by line
        skip noise lines and blank lines
        classify the rest against the version's column layout
        write kept rows to the matching "data" file
    Bad rows are logged and skipped, never fatal
*/

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::{info, warn};
use netmhc_common::{MhcError, NetMhcVersion, Result};
use netmhc_common::lib_utils::struct_helper::{create_file, FileBufferHelper};
use super::get_args::Cli;
use super::prediction_row::{ColumnLayout, RowOutcome};

const RAW_TAG: &str = "output";
const FORMATTED_TAG: &str = "data";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormatSummary {
    pub kept: usize,
    pub above_cutoff: usize,
    pub malformed: usize,
}

pub fn process_data(cli: &Cli) -> Result<Vec<PathBuf>> {
    let rawfile_list = expand_rawfiles(&cli.rawfiles);
    // resolve every name first so a bad one fails before anything is written
    let formatted_files = rawfile_list.iter()
        .map(|rawfile| formatted_file_name(rawfile))
        .collect::<Result<Vec<PathBuf>>>()?;

    for (rawfile, newname) in rawfile_list.iter().zip(&formatted_files) {
        info!("Processing file: {}", rawfile.display());
        let summary = format_file(rawfile, newname, cli.netmhc_version, cli.cutoff)?;
        info!("{}: {} records written, {} rows not below cutoff {}, {} rows skipped",
            newname.display(), summary.kept, summary.above_cutoff, cli.cutoff, summary.malformed);
    }
    info!("netMHC to fasta conversion complete");
    Ok(formatted_files)
}

/// Split every argument on whitespace, newlines included.
pub fn expand_rawfiles(rawfiles: &[String]) -> Vec<PathBuf> {
    rawfiles.iter()
        .flat_map(|rawfile| rawfile.split_whitespace())
        .map(PathBuf::from)
        .collect()
}

/// Raw file name with its first "output" replaced by "data".
pub fn formatted_file_name(rawfile: &Path) -> Result<PathBuf> {
    match rawfile.file_name().and_then(|name| name.to_str()) {
        Some(name) if name.contains(RAW_TAG) => {
            Ok(rawfile.with_file_name(name.replacen(RAW_TAG, FORMATTED_TAG, 1)))
        },
        _ => Err(MhcError::OutputWouldOverwriteInput(rawfile.to_path_buf())),
    }
}

pub fn format_file(
    rawfile: &Path,
    newname: &Path,
    version: NetMhcVersion,
    cutoff: f64,
) -> Result<FormatSummary> {
    let mut oldfile = FileBufferHelper::new(rawfile)?;
    let mut newfile = BufWriter::new(create_file(newname)?);
    let layout = ColumnLayout::new(version, cutoff);
    let mut summary = FormatSummary::default();
    let mut line_number = 0usize;

    while oldfile.next_line()? {
        line_number += 1;
        if version.is_noise(&oldfile.line) || oldfile.line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<&str> = oldfile.line.split_whitespace().collect();
        match layout.classify(&tokens, cutoff) {
            RowOutcome::Keep(record) => {
                writeln!(newfile, "{}", record).map_err(|e| MhcError::io(newname, e))?;
                summary.kept += 1;
            },
            RowOutcome::AboveCutoff(score) => {
                info!("Skipping {}:{}, score {} not below cutoff {}",
                    rawfile.display(), line_number, score, cutoff);
                summary.above_cutoff += 1;
            },
            RowOutcome::Malformed(reason) => {
                warn!("Skipping {}:{} due to {}: {:?}", rawfile.display(), line_number, reason, tokens);
                summary.malformed += 1;
            },
        }
    }
    newfile.flush().map_err(|e| MhcError::io(newname, e))?;
    Ok(summary)
}
