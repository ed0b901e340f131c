//! Validated parameters for threshold secret sharing
//!
//! A [`Scheme`] describes a split before any field arithmetic happens: how
//! many shares reconstruction requires, how many shares will exist in total,
//! and the prime modulus of the finite field the shares are computed in.
//! Split and reconstruction engines take a `Scheme` as a precondition
//! object. An invalid combination of the three parameters silently breaks
//! the security or correctness of the whole scheme (a modulus smaller than
//! the share count cannot give every share a distinct coordinate, and a
//! required count above the total makes reconstruction impossible), so a
//! `Scheme` cannot be constructed without passing validation.
//!
//! ```rust
//! use schemir::Scheme;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scheme = Scheme::builder()
//!     .required_share_count(3)
//!     .total_share_count(5)
//!     .prime(257u32)
//!     .build()?;
//!
//! assert_eq!(scheme.required_share_count(), 3);
//! assert_eq!(scheme.total_share_count(), 5);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod domain;
pub mod error;

pub use codec::{DecodeError, WireScheme};
pub use domain::{Scheme, SchemeBuilder};
pub use error::{BuildError, Field};
