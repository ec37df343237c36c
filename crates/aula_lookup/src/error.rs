//! Lookup errors.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// Which catalogue a lookup targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Subject {
    /// Character catalogue.
    #[display("Character")]
    Character,
    /// Creature catalogue.
    #[display("Creature")]
    Creature,
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LookupErrorKind {
    /// Query was blank after trimming.
    #[display("empty query")]
    EmptyQuery,
    /// Server answered with a non-success status.
    #[display("HTTP status {}", _0)]
    Status(u16),
    /// Request never completed.
    #[display("request failed: {}", _0)]
    Transport(String),
    /// Body was not the expected JSON.
    #[display("undecodable body: {}", _0)]
    Decode(String),
    /// Search succeeded but matched nothing.
    #[display("no results")]
    NoResults,
    /// Base URL could not be turned into a request URL.
    #[display("invalid URL: {}", _0)]
    Url(String),
}

/// Error from a catalogue lookup.
#[derive(Debug, Clone, Display, Error)]
#[display("{} lookup failed ({}) at {}:{}", subject, kind, file, line)]
pub struct LookupError {
    /// Catalogue queried.
    pub subject: Subject,
    /// Failure detail.
    pub kind: LookupErrorKind,
    /// Line number where the error was created.
    pub line: u32,
    /// Source file where the error was created.
    pub file: &'static str,
}

impl LookupError {
    /// Creates a new lookup error.
    #[track_caller]
    #[instrument]
    pub fn new(subject: Subject, kind: LookupErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        warn!(%subject, %kind, "Lookup failed");
        Self {
            subject,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The one line shown to people.
    ///
    /// Every failure other than a blank query reads as "not found".
    pub fn user_message(&self) -> String {
        match self.kind {
            LookupErrorKind::EmptyQuery => {
                format!("Please enter a {} name.", self.subject.to_string().to_lowercase())
            }
            _ => format!("{} not found. Try another name.", self.subject),
        }
    }

    /// True when the server had nothing for the query.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            LookupErrorKind::Status(404) | LookupErrorKind::NoResults
        )
    }
}

/// The shared HTTP client could not be set up.
///
/// Raised before any catalogue is queried, so it names none.
#[derive(Debug, Clone, Display, Error)]
#[display("HTTP client setup failed: {} at {}:{}", message, file, line)]
pub struct ClientError {
    /// Underlying cause.
    pub message: String,
    /// Line number where the error was created.
    pub line: u32,
    /// Source file where the error was created.
    pub file: &'static str,
}

impl ClientError {
    /// Creates a new client setup error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        warn!(%message, "HTTP client setup failed");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_detail() {
        let err = LookupError::new(Subject::Creature, LookupErrorKind::Status(500));
        assert_eq!(err.user_message(), "Creature not found. Try another name.");
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("HTTP status 500"));
    }

    #[test]
    fn test_empty_query_message() {
        let err = LookupError::new(Subject::Character, LookupErrorKind::EmptyQuery);
        assert_eq!(err.user_message(), "Please enter a character name.");
    }

    #[test]
    fn test_location_is_recorded() {
        let err = LookupError::new(Subject::Character, LookupErrorKind::NoResults);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_client_error_names_no_catalogue() {
        let err = ClientError::new("no TLS backend");
        let text = err.to_string();
        assert!(text.starts_with("HTTP client setup failed: no TLS backend"));
        assert!(!text.contains("Character"));
        assert!(!text.contains("Creature"));
        assert!(err.file.ends_with("error.rs"));
    }
}
