use serde::Serialize;

/// Where a training log row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Cli,
    Import,
}

impl EntrySource {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntrySource::Cli => "cli",
            EntrySource::Import => "import",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "cli" => Some(EntrySource::Cli),
            "import" => Some(EntrySource::Import),
            _ => None,
        }
    }
}
