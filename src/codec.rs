//! Wire format for scheme descriptors
//!
//! A [`Scheme`] crosses process boundaries as a record of exactly three
//! named fields: `requiredShareCount`, `totalShareCount`, and `prime`. The
//! prime travels as a decimal string because it may exceed every fixed-width
//! numeric type; an encoder that narrowed it to 64 bits would silently
//! corrupt the field.
//!
//! Decoding funnels through [`SchemeBuilder`], so a deserialized record is
//! subject to exactly the same validation as a scheme built directly.
//!
//! # Examples
//!
//! ```rust
//! use schemir::Scheme;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{"requiredShareCount":2,"totalShareCount":3,"prime":"7"}"#;
//! let scheme: Scheme = serde_json::from_str(json)?;
//! assert_eq!(scheme.total_share_count(), 3);
//!
//! // An invalid record is rejected with the same rule that direct
//! // construction would report.
//! let bad = r#"{"requiredShareCount":1,"totalShareCount":3,"prime":"7"}"#;
//! assert!(serde_json::from_str::<Scheme>(bad).is_err());
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Scheme, SchemeBuilder};
use crate::error::BuildError;

/// Serialized form of [`Scheme`].
///
/// Field names are fixed by the wire contract; unknown fields are rejected.
/// The only way to turn a `WireScheme` back into a [`Scheme`] is the
/// validating [`TryFrom`] conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WireScheme {
    required_share_count: u32,
    total_share_count: u32,
    prime: String,
}

/// Error turning a [`WireScheme`] back into a [`Scheme`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The prime field did not parse as a decimal integer.
    #[error("prime is not a decimal integer (got {0:?})")]
    MalformedPrime(String),

    /// The decoded values fail scheme validation.
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl From<Scheme> for WireScheme {
    fn from(scheme: Scheme) -> Self {
        Self {
            required_share_count: scheme.required_share_count(),
            total_share_count: scheme.total_share_count(),
            prime: scheme.prime().to_str_radix(10),
        }
    }
}

impl TryFrom<WireScheme> for Scheme {
    type Error = DecodeError;

    fn try_from(wire: WireScheme) -> Result<Self, Self::Error> {
        let prime: BigUint = wire
            .prime
            .parse()
            .map_err(|_| DecodeError::MalformedPrime(wire.prime.clone()))?;

        let scheme = SchemeBuilder::new()
            .required_share_count(wire.required_share_count)
            .total_share_count(wire.total_share_count)
            .prime(prime)
            .build()?;

        Ok(scheme)
    }
}
