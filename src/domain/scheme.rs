//! Validated scheme descriptor for threshold secret sharing

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::SchemeBuilder;

/// Parameters for splitting a secret into threshold shares.
///
/// A `Scheme` can only be obtained through [`SchemeBuilder`], which checks
/// every invariant before construction:
///
/// - the required share count is at least 2,
/// - the required share count does not exceed the total share count,
/// - the prime is greater than the total share count.
///
/// Once built, a scheme is immutable. Every instance satisfies the
/// invariants for its entire lifetime, and concurrent reads need no
/// synchronization.
///
/// # Examples
///
/// ```rust
/// use schemir::Scheme;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let scheme = Scheme::builder()
///     .required_share_count(2)
///     .total_share_count(3)
///     .prime(7u32)
///     .build()?;
///
/// assert_eq!(scheme.required_share_count(), 2);
/// assert_eq!(scheme.total_share_count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "crate::codec::WireScheme",
    into = "crate::codec::WireScheme"
)]
pub struct Scheme {
    required_share_count: u32,
    total_share_count: u32,
    prime: BigUint,
}

impl Scheme {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> SchemeBuilder {
        SchemeBuilder::new()
    }

    /// Constructs a scheme from already-validated values.
    ///
    /// Callers must have run the [`SchemeBuilder`] checks first.
    pub(crate) fn new_unchecked(
        required_share_count: u32,
        total_share_count: u32,
        prime: BigUint,
    ) -> Self {
        Self {
            required_share_count,
            total_share_count,
            prime,
        }
    }

    /// Minimum number of shares needed to reconstruct the secret.
    #[must_use]
    pub fn required_share_count(&self) -> u32 {
        self.required_share_count
    }

    /// Total number of shares the split will create.
    #[must_use]
    pub fn total_share_count(&self) -> u32 {
        self.total_share_count
    }

    /// Prime modulus of the finite field the shares are computed in.
    ///
    /// Guaranteed greater than the total share count, so every share can be
    /// assigned a distinct nonzero x-coordinate. Whether the prime also
    /// exceeds the secret being split is checked by the split operation,
    /// which is the first place the secret is known.
    #[must_use]
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }
}
