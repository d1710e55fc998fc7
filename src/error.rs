//! Error types for statement generation.

use thiserror::Error;

/// Result type alias for statement operations
pub type Result<T> = std::result::Result<T, StatementError>;

/// Errors that can occur while building a statement or loading its inputs.
#[derive(Error, Debug)]
pub enum StatementError {
    /// A performance references a play id missing from the catalog
    #[error("no play found for id: {play_id}")]
    UnresolvedPlay { play_id: String },

    /// A play carries a genre tag with no pricing rules
    #[error("unknown type: {genre}")]
    UnknownGenre { genre: String },

    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Structurally valid CSV row that cannot be accepted
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error(
        "Missing input file argument. Usage: theater-statement <plays.csv> <invoices.csv>"
    )]
    MissingArgument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_genre_message_embeds_tag() {
        let err = StatementError::UnknownGenre {
            genre: "musical".to_string(),
        };
        assert_eq!(err.to_string(), "unknown type: musical");
    }

    #[test]
    fn test_unresolved_play_message_names_id() {
        let err = StatementError::UnresolvedPlay {
            play_id: "macbeth".to_string(),
        };
        assert!(err.to_string().contains("macbeth"));
    }
}
