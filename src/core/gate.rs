//! # Access Gate
//!
//! A single shared passphrase checked before the deck is shown. The viewer
//! only cares about the yes/no answer; see `App::authorized`.

/// Whether (and how) the deck is locked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccessGate {
    /// No passphrase configured.
    #[default]
    Open,
    Passphrase(String),
}

impl AccessGate {
    /// Build a gate from an optional configured passphrase. Blank counts as none.
    pub fn from_passphrase(passphrase: Option<&str>) -> Self {
        match passphrase.map(str::trim) {
            Some(p) if !p.is_empty() => AccessGate::Passphrase(p.to_string()),
            _ => AccessGate::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, AccessGate::Open)
    }

    /// Case-insensitive comparison; surrounding whitespace is ignored.
    pub fn check(&self, attempt: &str) -> bool {
        match self {
            AccessGate::Open => true,
            AccessGate::Passphrase(expected) => {
                attempt.trim().to_lowercase() == expected.to_lowercase()
            }
        }
    }
}
