//! Failure types for scheme construction

use std::fmt;

use thiserror::Error;

/// Identifies a builder field in [`BuildError::MissingField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Minimum number of shares needed to reconstruct the secret.
    RequiredShareCount,
    /// Total number of shares the split will create.
    TotalShareCount,
    /// Prime modulus of the finite field.
    Prime,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::RequiredShareCount => "required share count",
            Field::TotalShareCount => "total share count",
            Field::Prime => "prime",
        };
        f.write_str(name)
    }
}

/// Error returned when [`SchemeBuilder::build`] rejects a candidate scheme.
///
/// Both kinds are deterministic functions of the supplied values. There is
/// no partial descriptor to recover; the caller corrects the configuration
/// and builds again.
///
/// [`SchemeBuilder::build`]: crate::SchemeBuilder::build
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// `build` was called before every field had been set.
    #[error("builder field(s) never set: {}", join(.0))]
    MissingField(Vec<Field>),

    /// The supplied values violate a relational invariant.
    #[error("{0}")]
    InvalidValue(String),
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
