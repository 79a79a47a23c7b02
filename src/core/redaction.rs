//! Privacy rules for interpolated values
//!
//! A [`Privacy`] is attached to every value interpolated into a log message.
//! Redaction is applied when the message is rendered, so the redacted form is
//! the only one that ever reaches a sink or the session store.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Marker appended (or prepended) when a value is truncated
pub const ELLIPSIS: &str = "...";

/// Placeholder rendered for [`Sensitivity::Hide`]
pub const HIDDEN_PLACEHOLDER: &str = "<private>";

/// Seed for [`Sensitivity::ShowHash`]; fixed so hashes match across runs
pub const REDACTION_HASH_SEED: u64 = 0x5041_5252_4f54;

/// How much of a sensitive value is disclosed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sensitivity {
    /// First `n` characters, then an ellipsis if anything was cut
    ShowPrefix(usize),
    /// Ellipsis if anything was cut, then the last `n` characters
    ShowSuffix(usize),
    /// `<hash: N>` with a stable 64-bit hash of the value
    ShowHash,
    /// One `*` per character
    ShowMasked,
    /// [`HIDDEN_PLACEHOLDER`]
    Hide,
}

/// Disclosure rule for one interpolated value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Privacy {
    #[default]
    Public,
    Sensitive(Sensitivity),
}

impl Privacy {
    pub fn prefix(n: usize) -> Self {
        Privacy::Sensitive(Sensitivity::ShowPrefix(n))
    }

    pub fn suffix(n: usize) -> Self {
        Privacy::Sensitive(Sensitivity::ShowSuffix(n))
    }

    pub fn hash() -> Self {
        Privacy::Sensitive(Sensitivity::ShowHash)
    }

    pub fn masked() -> Self {
        Privacy::Sensitive(Sensitivity::ShowMasked)
    }

    pub fn hide() -> Self {
        Privacy::Sensitive(Sensitivity::Hide)
    }
}

/// Whether sensitive values are redacted or shown in full.
///
/// `Reveal` is meant for development builds; it is chosen when a logger is
/// constructed and never changes per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RedactionMode {
    #[default]
    Redact,
    Reveal,
}

impl RedactionMode {
    /// Parse the `LOG_REVEAL_SENSITIVE` switch value
    pub fn from_flag(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(RedactionMode::Reveal),
            "0" | "false" | "no" | "off" => Some(RedactionMode::Redact),
            _ => None,
        }
    }
}

/// Render `repr` under `privacy`.
///
/// Character counts are in Unicode scalar values, so multi-byte text is never
/// split inside a code point.
pub fn render(repr: &str, privacy: Privacy, mode: RedactionMode) -> String {
    let sensitivity = match (privacy, mode) {
        (Privacy::Public, _) | (_, RedactionMode::Reveal) => return repr.to_string(),
        (Privacy::Sensitive(sensitivity), RedactionMode::Redact) => sensitivity,
    };

    if repr.is_empty() && sensitivity != Sensitivity::Hide {
        return String::new();
    }

    let len = repr.chars().count();
    match sensitivity {
        Sensitivity::ShowPrefix(n) => {
            let mut out: String = repr.chars().take(n).collect();
            if len > n {
                out.push_str(ELLIPSIS);
            }
            out
        }
        Sensitivity::ShowSuffix(n) => {
            let tail: String = repr.chars().skip(len.saturating_sub(n)).collect();
            if len > n {
                format!("{ELLIPSIS}{tail}")
            } else {
                tail
            }
        }
        Sensitivity::ShowHash => format!("<hash: {}>", stable_hash(repr)),
        Sensitivity::ShowMasked => "*".repeat(len),
        Sensitivity::Hide => HIDDEN_PLACEHOLDER.to_string(),
    }
}

#[inline]
fn stable_hash(repr: &str) -> u64 {
    xxh3_64_with_seed(repr.as_bytes(), REDACTION_HASH_SEED)
}
