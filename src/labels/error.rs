use std::num::ParseIntError;

use derive_more::derive::{Display, Error};

/// A fatal problem with the label list.
///
/// Every variant aborts the run; the process exit code is chosen by
/// [`LabelError::exit_code`].
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum LabelError {
    /// The id is a number, but not one a `pg_byte` can hold.
    #[display("ID for label {label} is out of range 0..=255 ({value})")]
    IdOutOfRange { label: String, value: String },

    /// The id text isn't a base-10 integer. The parse failure is kept as the
    /// error source, so it shows up in the reported chain.
    #[display("invalid ID {text:?} for label {label}")]
    InvalidId {
        label: String,
        text: String,
        source: ParseIntError,
    },

    /// The line carries an `=` but nothing to its left.
    #[display("line {line_no} doesn't name a label: {line:?}")]
    MalformedLine { line_no: usize, line: String },
}

impl LabelError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::IdOutOfRange { .. } => 1,
            Self::InvalidId { .. } | Self::MalformedLine { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::LabelError;

    #[test]
    fn exit_codes() {
        let range = LabelError::IdOutOfRange {
            label: "Y".into(),
            value: "300".into(),
        };
        assert_eq!(range.exit_code(), 1);

        let invalid = LabelError::InvalidId {
            label: "X".into(),
            text: "abc".into(),
            source: "abc".parse::<i64>().unwrap_err(),
        };
        assert_eq!(invalid.exit_code(), 2);

        let malformed = LabelError::MalformedLine {
            line_no: 3,
            line: "= 4".into(),
        };
        assert_eq!(malformed.exit_code(), 2);
    }

    #[test]
    fn messages_name_the_offender() {
        let range = LabelError::IdOutOfRange {
            label: "Y".into(),
            value: "300".into(),
        };
        assert_eq!(
            range.to_string(),
            "ID for label Y is out of range 0..=255 (300)"
        );

        let invalid = LabelError::InvalidId {
            label: "X".into(),
            text: "abc".into(),
            source: "abc".parse::<i64>().unwrap_err(),
        };
        assert_eq!(
            invalid.to_string(),
            "invalid ID \"abc\" for label X"
        );
        let source = std::error::Error::source(&invalid).unwrap();
        assert_eq!(source.to_string(), "invalid digit found in string");
    }
}
