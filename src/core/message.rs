//! Privacy-aware message construction
//!
//! A [`MessageTemplate`] is an ordered list of literal text and interpolated
//! values, each value carrying its own [`Privacy`]. A [`MessageBuilder`]
//! turns the template into the final message string.
//!
//! # Example
//!
//! ```
//! use parrot_logger::prelude::*;
//!
//! let email = "alice@example.com";
//! let template = MessageTemplate::new()
//!     .literal("login from ")
//!     .value(email, Privacy::prefix(5))
//!     .literal(" with pin ")
//!     .value(1234, Privacy::hide());
//!
//! let message = MessageBuilder::new(RedactionMode::Redact).build(&template);
//! assert_eq!(message, "login from alice... with pin <private>");
//! ```

use super::redaction::{self, Privacy, RedactionMode};
use std::fmt;

/// One piece of a [`MessageTemplate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// A value's `Display` form together with its disclosure rule
    Value { repr: String, privacy: Privacy },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplate {
    segments: Vec<Segment>,
}

impl MessageTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text, rendered verbatim
    #[must_use]
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Literal(text.into()));
        self
    }

    /// Append an interpolated value under `privacy`
    #[must_use]
    pub fn value(mut self, value: impl fmt::Display, privacy: Privacy) -> Self {
        self.segments.push(Segment::Value {
            repr: value.to_string(),
            privacy,
        });
        self
    }

    /// Append an interpolated value that is always shown
    #[must_use]
    pub fn public(self, value: impl fmt::Display) -> Self {
        self.value(value, Privacy::Public)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for MessageTemplate {
    fn from(text: &str) -> Self {
        MessageTemplate::new().literal(text)
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        MessageTemplate::new().literal(text)
    }
}

/// Renders templates under a fixed [`RedactionMode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageBuilder {
    mode: RedactionMode,
}

impl MessageBuilder {
    pub fn new(mode: RedactionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RedactionMode {
        self.mode
    }

    /// Concatenate literals and rendered values in template order
    pub fn build(&self, template: &MessageTemplate) -> String {
        let mut out = String::new();
        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value { repr, privacy } => {
                    out.push_str(&redaction::render(repr, *privacy, self.mode))
                }
            }
        }
        out
    }
}
