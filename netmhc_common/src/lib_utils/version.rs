// netMHC release tags understood by the tools, with the tables keyed on them

use std::fmt;
use std::str::FromStr;
use super::error::MhcError;

// substrings marking header, footer and log lines in the predictor output
const BAD_WORDS_V34: &[&str] = &[
    "binder threshold", "Artificial Neural", "affinity(nM)", "--------",
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const BAD_WORDS_V40: &[&str] = &["high binders", "iCore", "----", "#"];
const BAD_WORDS_PAN: &[&str] = &[
    "Pos", "HLA", "Peptide", "Core", "Icore", "Identity", "Score", "%Rank", "BindLevel",
    "#", "training data", "ICore", "high binders", "------", "Command", "NetMHCpan",
    "Rank", "---",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NetMhcVersion {
    V34,
    V40,
    Pan,
}

impl NetMhcVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetMhcVersion::V34 => "3.4",
            NetMhcVersion::V40 => "4.0",
            NetMhcVersion::Pan => "pan",
        }
    }

    pub fn bad_words(&self) -> &'static [&'static str] {
        match self {
            NetMhcVersion::V34 => BAD_WORDS_V34,
            NetMhcVersion::V40 => BAD_WORDS_V40,
            NetMhcVersion::Pan => BAD_WORDS_PAN,
        }
    }

    /// True when the line holds any of the version's bad words.
    pub fn is_noise(&self, line: &str) -> bool {
        self.bad_words().iter().any(|word| line.contains(word))
    }

    /// Name of the predictor binary inside the install directory.
    pub fn executable(&self) -> &'static str {
        match self {
            NetMhcVersion::V34 | NetMhcVersion::V40 => "netMHC",
            NetMhcVersion::Pan => "netMHCpan",
        }
    }
}

impl FromStr for NetMhcVersion {
    type Err = MhcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3.4" => Ok(NetMhcVersion::V34),
            "4.0" => Ok(NetMhcVersion::V40),
            "pan" => Ok(NetMhcVersion::Pan),
            other => Err(MhcError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl fmt::Display for NetMhcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
