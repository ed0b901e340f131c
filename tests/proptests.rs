//! Property-based tests for scheme construction
//!
//! This test suite uses quickcheck to verify that building a scheme succeeds
//! exactly when the invariants hold, and that the wire codec and equality
//! semantics are stable across random inputs.
//!
//! Run with: cargo test --test proptests

use std::hash::{DefaultHasher, Hash, Hasher};

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use schemir::{BuildError, Scheme};

fn hash_of(scheme: &Scheme) -> u64 {
    let mut hasher = DefaultHasher::new();
    scheme.hash(&mut hasher);
    hasher.finish()
}

/// Wrapper generating triples across both the valid and invalid regions
#[derive(Clone, Copy, Debug)]
struct AnyTriple {
    required: u32,
    total: u32,
    prime: u64,
}

impl Arbitrary for AnyTriple {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small ranges keep the valid and invalid regions both well populated
        AnyTriple {
            required: u32::from(u8::arbitrary(g) % 12),
            total: u32::from(u8::arbitrary(g) % 12),
            prime: u64::from(u8::arbitrary(g) % 16),
        }
    }
}

/// Wrapper generating only valid triples, with primes that sometimes exceed
/// every fixed-width integer type
#[derive(Clone, Debug)]
struct ValidTriple {
    required: u32,
    total: u32,
    prime: BigUint,
}

impl Arbitrary for ValidTriple {
    fn arbitrary(g: &mut Gen) -> Self {
        // Share counts between 2 and 20 (keep it reasonable for testing)
        let total = u32::from(u8::arbitrary(g) % 19) + 2; // 2..=20

        // Required count between 2 and total
        let required = (u32::arbitrary(g) % (total - 1)) + 2; // 2..=total

        // Any value strictly above the total count is a valid modulus here;
        // shift half of them far past u128 to exercise arbitrary precision
        let offset = u64::from(u16::arbitrary(g)) + 1;
        let mut prime = BigUint::from(total) + offset;
        if bool::arbitrary(g) {
            prime <<= 200u32;
        }

        ValidTriple {
            required,
            total,
            prime,
        }
    }
}

impl ValidTriple {
    fn build(&self) -> Scheme {
        Scheme::builder()
            .required_share_count(self.required)
            .total_share_count(self.total)
            .prime(self.prime.clone())
            .build()
            .unwrap()
    }
}

/// Building succeeds iff all three invariants hold
#[quickcheck]
fn prop_build_succeeds_iff_invariants_hold(triple: AnyTriple) -> bool {
    let invariants_hold = triple.required >= 2
        && triple.required <= triple.total
        && triple.prime > u64::from(triple.total);

    let result = Scheme::builder()
        .required_share_count(triple.required)
        .total_share_count(triple.total)
        .prime(triple.prime)
        .build();

    result.is_ok() == invariants_hold
}

/// A failed build with all fields set always reports a rule violation, never
/// a missing field
#[quickcheck]
fn prop_full_builder_never_reports_missing_fields(triple: AnyTriple) -> bool {
    let result = Scheme::builder()
        .required_share_count(triple.required)
        .total_share_count(triple.total)
        .prime(triple.prime)
        .build();

    match result {
        Ok(_) => true,
        Err(BuildError::InvalidValue(_)) => true,
        Err(BuildError::MissingField(_)) => false,
    }
}

/// A successful build stores exactly the supplied values
#[quickcheck]
fn prop_built_scheme_returns_inputs(triple: AnyTriple) -> bool {
    let result = Scheme::builder()
        .required_share_count(triple.required)
        .total_share_count(triple.total)
        .prime(triple.prime)
        .build();

    match result {
        Ok(scheme) => {
            scheme.required_share_count() == triple.required
                && scheme.total_share_count() == triple.total
                && *scheme.prime() == BigUint::from(triple.prime)
        }
        Err(_) => true,
    }
}

/// Serializing and deserializing a valid scheme yields an equal scheme
#[quickcheck]
fn prop_wire_round_trip_preserves_equality(triple: ValidTriple) -> bool {
    let original = triple.build();

    let Ok(json) = serde_json::to_string(&original) else {
        return false;
    };
    let Ok(decoded) = serde_json::from_str::<Scheme>(&json) else {
        return false;
    };

    original == decoded
}

/// Two schemes built independently from the same values are equal and hash
/// identically
#[quickcheck]
fn prop_identical_values_build_equal_schemes(triple: ValidTriple) -> bool {
    let a = triple.build();
    let b = triple.build();

    a == b && hash_of(&a) == hash_of(&b)
}

/// Changing the prime alone breaks equality
#[quickcheck]
fn prop_different_prime_breaks_equality(triple: ValidTriple) -> bool {
    let base = triple.build();

    let bumped = Scheme::builder()
        .required_share_count(triple.required)
        .total_share_count(triple.total)
        .prime(triple.prime.clone() + 1u32)
        .build()
        .unwrap();

    base != bumped
}
