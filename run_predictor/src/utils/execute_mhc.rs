/*
    Expand (length x file) into prediction jobs, lengths outermost
    Run every job on the thread pool
        predictor stdout -> outfile, stderr -> errfile
    Collect the outcomes and report the runs that failed
*/

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use threadpool::ThreadPool;
use log::{debug, info, warn};
use netmhc_common::{MhcError, NetMhcVersion, Result};
use netmhc_common::lib_utils::struct_helper::create_file;
use super::get_args::Cli;

const INPUT_EXTENSION_MARK: &str = ".f";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionJob {
    pub input: PathBuf,
    pub length: u32,
    pub head: String,
    pub outfile: PathBuf,
    pub errfile: PathBuf,
}

impl PredictionJob {
    pub fn new(input: &Path, length: u32) -> PredictionJob {
        let file_name = input.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let head = match file_name.find(INPUT_EXTENSION_MARK) {
            Some(idx) => file_name[..idx].to_string(),
            None => file_name,
        };
        PredictionJob {
            input: input.to_path_buf(),
            length,
            outfile: input.with_file_name(format!("{head}_{length}_output.txt")),
            errfile: input.with_file_name(format!("{head}_{length}_error.log")),
            head,
        }
    }

    pub fn arguments(&self, version: NetMhcVersion, mhc: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-l".into(), self.length.to_string().into(),
            "-a".into(), mhc.into(),
        ];
        if version == NetMhcVersion::Pan {
            args.push("-f".into());
        }
        args.push(self.input.clone().into_os_string());
        args
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum JobOutcome {
    Succeeded,
    Failed(String),
}

/// Space separated peptide lengths, e.g. "8 9 10".
pub fn parse_lengths(lengths: &str) -> Result<Vec<u32>> {
    let parsed = lengths.split_whitespace()
        .map(|length| match length.parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(MhcError::InvalidLength(length.to_string())),
        })
        .collect::<Result<Vec<u32>>>()?;
    if parsed.is_empty() {
        return Err(MhcError::InvalidLength(lengths.to_string()));
    }
    Ok(parsed)
}

pub fn prediction_jobs(input_files: &[PathBuf], lengths: &[u32]) -> Vec<PredictionJob> {
    lengths.iter()
        .flat_map(|&length| input_files.iter().map(move |file| PredictionJob::new(file, length)))
        .collect()
}

pub fn executemhc(cli: &Cli) -> Result<Vec<PathBuf>> {
    info!("Execution started");
    let executable = cli.path.join(cli.netmhc_version.executable());
    let jobs = prediction_jobs(&cli.ifile, &cli.lengths.0);
    debug!("{} predictions queued on {} threads", jobs.len(), cli.nproc);

    let results: Arc<Mutex<Vec<(usize, Result<JobOutcome>)>>> = Arc::new(Mutex::new(Vec::new()));
    let pool = ThreadPool::new(cli.nproc);
    for (idx, job) in jobs.iter().enumerate() {
        let job = job.clone();
        let args = job.arguments(cli.netmhc_version, &cli.mhc);
        let executable = executable.clone();
        let arc_clone = Arc::clone(&results);
        pool.execute(move || {
            let outcome = run_job(&job, &executable, &args);
            if let Ok(mut finished) = arc_clone.lock() {
                finished.push((idx, outcome));
            }
        });
    }
    pool.join();
    info!("Threadpool jobs complete");

    let mut finished = std::mem::take(&mut *results.lock().unwrap_or_else(|e| e.into_inner()));
    finished.sort_by_key(|(idx, _)| *idx);
    if finished.len() != jobs.len() {
        warn!("{} of {} predictions did not report back", jobs.len() - finished.len(), jobs.len());
    }

    let mut failures = 0usize;
    for (idx, outcome) in finished {
        if let JobOutcome::Failed(reason) = outcome? {
            failures += 1;
            warn!("Prediction for {} at length {} failed: {}. See {}",
                jobs[idx].input.display(), jobs[idx].length, reason, jobs[idx].errfile.display());
        }
    }
    if failures > 0 {
        warn!("{} of {} predictions failed", failures, jobs.len());
    }
    info!("netMHC execution completed.");
    Ok(jobs.into_iter().map(|job| job.outfile).collect())
}

// Output files that cannot be created are errors; a predictor that fails is an outcome.
fn run_job(job: &PredictionJob, executable: &Path, args: &[OsString]) -> Result<JobOutcome> {
    info!("Executing file {} for length {}", job.head, job.length);
    let out = create_file(&job.outfile)?;
    let err = create_file(&job.errfile)?;
    let status = Command::new(executable)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::from(out))
        .stderr(Stdio::from(err))
        .status();
    match status {
        Ok(status) if status.success() => Ok(JobOutcome::Succeeded),
        Ok(status) => Ok(JobOutcome::Failed(format!("{} exited with {}", executable.display(), status))),
        Err(e) => Ok(JobOutcome::Failed(format!("{} could not be started - {}", executable.display(), e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use super::super::get_args::PeptideLengths;

    fn cli_for(path: &Path, version: NetMhcVersion, ifile: Vec<PathBuf>, lengths: Vec<u32>, nproc: usize) -> Cli {
        Cli {
            path: path.to_path_buf(),
            netmhc_version: version,
            ifile,
            mhc: String::from("HLA-A0201"),
            lengths: PeptideLengths(lengths),
            nproc,
        }
    }

    #[test]
    fn lengths_are_split_on_whitespace() {
        assert_eq!(parse_lengths("8 9  10\n").unwrap(), vec![8, 9, 10]);
        assert!(matches!(parse_lengths("8 nine"), Err(MhcError::InvalidLength(ref l)) if l == "nine"));
        assert!(parse_lengths("0").is_err());
        assert!(parse_lengths("   ").is_err());
    }

    #[test]
    fn job_names_cut_at_first_dot_f() {
        let job = PredictionJob::new(Path::new("runs/seqs.fasta"), 9);
        assert_eq!(job.head, "seqs");
        assert_eq!(job.outfile, PathBuf::from("runs/seqs_9_output.txt"));
        assert_eq!(job.errfile, PathBuf::from("runs/seqs_9_error.log"));
        // split files carry no extension
        let job = PredictionJob::new(Path::new("split1_seqs"), 8);
        assert_eq!(job.outfile, PathBuf::from("split1_seqs_8_output.txt"));
        let job = PredictionJob::new(Path::new("my.file.fa"), 10);
        assert_eq!(job.head, "my");
    }

    #[test]
    fn arguments_follow_version() {
        let job = PredictionJob::new(Path::new("seqs.fa"), 9);
        let expected: Vec<OsString> = ["-l", "9", "-a", "HLA-A0201", "seqs.fa"]
            .iter().map(OsString::from).collect();
        assert_eq!(job.arguments(NetMhcVersion::V40, "HLA-A0201"), expected);
        assert_eq!(job.arguments(NetMhcVersion::V34, "HLA-A0201"), expected);
        let expected_pan: Vec<OsString> = ["-l", "9", "-a", "HLA-A0201", "-f", "seqs.fa"]
            .iter().map(OsString::from).collect();
        assert_eq!(job.arguments(NetMhcVersion::Pan, "HLA-A0201"), expected_pan);
    }

    #[test]
    fn jobs_iterate_lengths_then_files() {
        let files = vec![PathBuf::from("a.fa"), PathBuf::from("b.fa")];
        let jobs = prediction_jobs(&files, &[8, 9]);
        let outfiles: Vec<PathBuf> = jobs.into_iter().map(|job| job.outfile).collect();
        assert_eq!(outfiles, vec![
            PathBuf::from("a_8_output.txt"),
            PathBuf::from("b_8_output.txt"),
            PathBuf::from("a_9_output.txt"),
            PathBuf::from("b_9_output.txt"),
        ]);
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing_dir").join("seqs.fa");
        let cli = cli_for(dir.path(), NetMhcVersion::V40, vec![input], vec![9], 1);
        assert!(matches!(executemhc(&cli), Err(MhcError::Io { .. })));
    }

    // all process spawning stays in this one test so no fork races a stub
    // script that is still open for writing (ETXTBSY)
    #[cfg(unix)]
    #[test]
    fn runs_stub_predictor_for_every_length_and_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("netMHC");
        fs::write(&stub, "#!/bin/sh\necho \"$@\"\necho \"stub stderr\" >&2\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
        let inputs = vec![dir.path().join("a.fasta"), dir.path().join("b.fsa")];
        for input in &inputs {
            fs::write(input, ">s1\nAAAGAAAAA\n").unwrap();
        }

        for nproc in [1, 3] {
            let cli = cli_for(dir.path(), NetMhcVersion::V40, inputs.clone(), vec![8, 9], nproc);
            let out_list = executemhc(&cli).unwrap();
            assert_eq!(out_list, vec![
                dir.path().join("a_8_output.txt"),
                dir.path().join("b_8_output.txt"),
                dir.path().join("a_9_output.txt"),
                dir.path().join("b_9_output.txt"),
            ]);
            for (outfile, (input, length)) in out_list.iter().zip([
                (&inputs[0], 8), (&inputs[1], 8), (&inputs[0], 9), (&inputs[1], 9),
            ]) {
                assert_eq!(fs::read_to_string(outfile).unwrap(),
                           format!("-l {} -a HLA-A0201 {}\n", length, input.display()));
            }
            assert_eq!(fs::read_to_string(dir.path().join("a_8_error.log")).unwrap(), "stub stderr\n");
        }

        // a predictor that cannot be started is reported, not fatal
        let cli = cli_for(&dir.path().join("nowhere"), NetMhcVersion::Pan, vec![inputs[0].clone()], vec![10], 1);
        let out_list = executemhc(&cli).unwrap();
        assert_eq!(out_list, vec![dir.path().join("a_10_output.txt")]);
        assert!(out_list[0].exists());

        // a failing predictor does not stop the run
        fs::write(&stub, "#!/bin/sh\necho \"bad allele\" >&2\nexit 3\n").unwrap();
        let cli = cli_for(dir.path(), NetMhcVersion::V34, inputs.clone(), vec![9], 1);
        let out_list = executemhc(&cli).unwrap();
        assert_eq!(out_list.len(), 2);
        assert_eq!(fs::read_to_string(dir.path().join("b_9_error.log")).unwrap(), "bad allele\n");
    }
}
