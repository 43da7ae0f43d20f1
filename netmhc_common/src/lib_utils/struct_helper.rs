
// struct to handle file buffers


use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use log::debug;
use super::error::{MhcError, Result};

pub struct FileBufferHelper {
    pub path: PathBuf,
    pub buffer_reader: BufReader<File>,
    pub line: String
}

impl FileBufferHelper {
    pub fn new(file: &Path) -> Result<FileBufferHelper> {
        let file_open = File::open(file).map_err(|e| MhcError::io(file, e))?;
        debug!("FileHelper created for: {:?}", file);
        Ok(Self {
            path: file.to_path_buf(),
            buffer_reader: BufReader::new(file_open),
            line: String::new(),
        })
    }

    /// Replace `self.line` with the next line of the file. Returns false at end of file.
    pub fn next_line(&mut self) -> Result<bool> {
        self.line.clear();
        let read = self.buffer_reader.read_line(&mut self.line)
            .map_err(|e| MhcError::io(&self.path, e))?;
        Ok(read > 0)
    }
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| MhcError::io(path, e))
}

pub fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| MhcError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_every_line_then_stops() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first\n\nthird").unwrap();
        let mut helper = FileBufferHelper::new(file.path()).unwrap();
        let mut lines = Vec::new();
        while helper.next_line().unwrap() {
            lines.push(helper.line.clone());
        }
        assert_eq!(lines, vec!["first\n", "\n", "third"]);
        assert!(!helper.next_line().unwrap());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");
        match FileBufferHelper::new(&missing) {
            Err(MhcError::Io { path, .. }) => assert_eq!(path, missing),
            _ => panic!("expected an io error"),
        }
        assert!(read_file(&missing).is_err());
    }
}
