//! Reference vs Optimized Primitives
//!
//! Five small primitives, each implemented twice: a straightforward reference
//! variant in `baselines` and a competing variant in `optimized`. The harness
//! checks that both variants agree and times them against each other.

use std::ffi::CStr;

pub mod baselines;
pub mod config;
pub mod error;
pub mod logging;
pub mod optimized;
pub mod primitive;
pub mod profile;
pub mod registry;
pub mod report;
pub mod specimen;
pub mod verify;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use primitive::{Category, Pair, Primitive, Value, Variant};
pub use profile::{BenchmarkSample, ProfileReport, Speed};
pub use registry::Catalogue;
pub use specimen::{Specimen, Suite, TestVector};
pub use verify::{SpecimenVerdict, VerificationOutcome};

/// Returned by [`SecondLargest`] when the input has fewer than two elements.
pub const SENTINEL: i32 = -1;

/// Reverse the decimal digits of an integer.
///
/// The remainder truncates toward zero, so every digit of a negative input is
/// negative and the sign survives. Reversals that overflow `i32` wrap.
pub trait DigitReverser: Send + Sync {
    fn reverse_number(&self, num: i32) -> i32;
}

/// Count the bytes before the NUL terminator.
pub trait StrLen: Send + Sync {
    fn strlen(&self, s: &CStr) -> usize;
}

/// Reverse a byte string in place.
pub trait StrReverser: Send + Sync {
    fn strrev(&self, s: &mut [u8]);
}

/// Reverse an integer array in place.
pub trait ArrayReverser: Send + Sync {
    fn reverse_array(&self, arr: &mut [i32]);
}

/// Find the second largest element, counting duplicates by position.
///
/// Returns [`SENTINEL`] for inputs with fewer than two elements.
pub trait SecondLargest: Send + Sync {
    fn second_largest(&self, arr: &[i32]) -> i32;
}
