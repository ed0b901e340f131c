//! Deferred-validation builder for scheme descriptors

use num_bigint::BigUint;

use crate::error::{BuildError, Field};

use super::Scheme;

/// Accumulates candidate scheme parameters, validating nothing until
/// [`build`](Self::build).
///
/// The invariants are relational across all three fields, so no setter can
/// be checked in isolation; setters only store. `build` checks everything in
/// one pass and either returns a [`Scheme`] or the first rule violation.
///
/// A builder belongs to a single logical construction and is not meant to be
/// shared across threads.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use schemir::{BuildError, Scheme};
///
/// // Valid: a 2-of-3 split over GF(7)
/// let scheme = Scheme::builder()
///     .required_share_count(2)
///     .total_share_count(3)
///     .prime(7u32)
///     .build()
///     .unwrap();
/// assert_eq!(*scheme.prime(), BigUint::from(7u32));
///
/// // Invalid: cannot require more shares than exist
/// let err = Scheme::builder()
///     .required_share_count(5)
///     .total_share_count(3)
///     .prime(11u32)
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, BuildError::InvalidValue(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemeBuilder {
    required_share_count: Option<u32>,
    total_share_count: Option<u32>,
    prime: Option<BigUint>,
}

impl SchemeBuilder {
    /// Creates a builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum number of shares needed to reconstruct the secret.
    ///
    /// Stored as-is; validated by [`build`](Self::build).
    #[must_use]
    pub fn required_share_count(mut self, count: u32) -> Self {
        self.required_share_count = Some(count);
        self
    }

    /// Sets the total number of shares to create.
    ///
    /// Stored as-is; validated by [`build`](Self::build).
    #[must_use]
    pub fn total_share_count(mut self, count: u32) -> Self {
        self.total_share_count = Some(count);
        self
    }

    /// Sets the prime modulus of the finite field.
    ///
    /// Anything convertible to a [`BigUint`] is accepted, so small literals
    /// work without an explicit widening step: `.prime(7u32)`.
    #[must_use]
    pub fn prime(mut self, prime: impl Into<BigUint>) -> Self {
        self.prime = Some(prime.into());
        self
    }

    /// Validates the accumulated values and constructs the scheme.
    ///
    /// Checks run in a fixed order and stop at the first failure: missing
    /// fields, then the required count being at least 2, then the required
    /// count not exceeding the total count, then the prime exceeding the
    /// total count.
    ///
    /// # Errors
    ///
    /// [`BuildError::MissingField`] if any field was never set, naming every
    /// absent field. [`BuildError::InvalidValue`] for the first violated
    /// invariant, with the offending values in the message.
    pub fn build(self) -> Result<Scheme, BuildError> {
        let mut missing = Vec::new();
        if self.required_share_count.is_none() {
            missing.push(Field::RequiredShareCount);
        }
        if self.total_share_count.is_none() {
            missing.push(Field::TotalShareCount);
        }
        if self.prime.is_none() {
            missing.push(Field::Prime);
        }

        let (Some(required), Some(total), Some(prime)) =
            (self.required_share_count, self.total_share_count, self.prime)
        else {
            return Err(BuildError::MissingField(missing));
        };

        if required < 2 {
            return Err(BuildError::InvalidValue(format!(
                "required share count must be at least 2 (got {required})"
            )));
        }

        if required > total {
            return Err(BuildError::InvalidValue(format!(
                "required share count {required} exceeds total share count {total}"
            )));
        }

        if prime <= BigUint::from(total) {
            return Err(BuildError::InvalidValue(format!(
                "prime {prime} must exceed total share count {total}"
            )));
        }

        Ok(Scheme::new_unchecked(required, total, prime))
    }
}
