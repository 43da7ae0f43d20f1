// Column layout of a netMHC prediction row and the cutoff test applied to it

use std::fmt;
use netmhc_common::NetMhcVersion;

// netMHC 3.4 reports a different header column set above this affinity
const V34_WIDE_CUTOFF: f64 = 500.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum HeaderStyle {
    /// >>a_b_c
    Underscore,
    /// >>a|Score:b|Allele:c
    Labelled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    score: usize,
    header: [usize; 3],
    body: usize,
    style: HeaderStyle,
}

impl ColumnLayout {
    pub fn new(version: NetMhcVersion, cutoff: f64) -> ColumnLayout {
        match version {
            NetMhcVersion::V34 => ColumnLayout {
                score: 3,
                header: if cutoff < V34_WIDE_CUTOFF { [5, 3, 6] } else { [4, 3, 5] },
                body: 1,
                style: HeaderStyle::Underscore,
            },
            NetMhcVersion::V40 | NetMhcVersion::Pan => ColumnLayout {
                score: 11,
                header: [10, 11, 1],
                body: 2,
                style: HeaderStyle::Labelled,
            },
        }
    }

    /// Number of tokens a row needs for every column to exist.
    pub fn min_tokens(&self) -> usize {
        self.header.iter()
            .chain([self.score, self.body].iter())
            .max()
            .map_or(0, |idx| idx + 1)
    }

    pub fn classify(&self, tokens: &[&str], cutoff: f64) -> RowOutcome {
        let score: f64 = match tokens.get(self.score).map(|token| token.parse::<f64>()) {
            Some(Ok(score)) => score,
            Some(Err(e)) => return RowOutcome::Malformed(format!(
                "value conversion issue on {:?}: {}", tokens[self.score], e)),
            None => return self.insufficient(tokens),
        };
        // the score decides before the remaining columns are looked at
        if !(score < cutoff) {
            RowOutcome::AboveCutoff(score)
        } else if tokens.len() < self.min_tokens() {
            self.insufficient(tokens)
        } else {
            RowOutcome::Keep(self.record(tokens))
        }
    }

    fn insufficient(&self, tokens: &[&str]) -> RowOutcome {
        RowOutcome::Malformed(format!(
            "insufficient data, {} columns found and {} needed", tokens.len(), self.min_tokens()))
    }

    fn record(&self, tokens: &[&str]) -> FastaRecord {
        let [first, second, third] = self.header.map(|idx| tokens[idx]);
        let header = match self.style {
            HeaderStyle::Underscore => format!("{first}_{second}_{third}"),
            HeaderStyle::Labelled => format!("{first}|Score:{second}|Allele:{third}"),
        };
        FastaRecord {
            header,
            body: tokens[self.body].to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum RowOutcome {
    Keep(FastaRecord),
    AboveCutoff(f64),
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub body: String,
}

impl fmt::Display for FastaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">>{}", self.header)?;
        write!(f, "{}", self.body)
    }
}
