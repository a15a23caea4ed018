//! Folder mode and pull order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether local changes are sent, received, or both.
///
/// The legacy names `readwrite` and `readonly` are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderType {
    /// Send local changes and apply remote ones.
    #[default]
    #[serde(alias = "readwrite")]
    SendReceive,
    /// Send local changes only.
    #[serde(alias = "readonly")]
    SendOnly,
}

impl FolderType {
    /// The configuration-file spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SendReceive => "sendreceive",
            Self::SendOnly => "sendonly",
        }
    }
}

impl fmt::Display for FolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which needed files are pulled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PullOrder {
    /// Random order.
    #[default]
    Random,
    /// By name.
    Alphabetic,
    /// Smallest file first.
    SmallestFirst,
    /// Largest file first.
    LargestFirst,
    /// Oldest modification first.
    OldestFirst,
    /// Newest modification first.
    NewestFirst,
}

impl PullOrder {
    /// The configuration-file spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Alphabetic => "alphabetic",
            Self::SmallestFirst => "smallestFirst",
            Self::LargestFirst => "largestFirst",
            Self::OldestFirst => "oldestFirst",
            Self::NewestFirst => "newestFirst",
        }
    }
}

impl fmt::Display for PullOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
