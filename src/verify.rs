//! Correctness verification: run both variants on every vector and compare.
//!
//! Each variant receives its own copy of the input, so an in-place primitive
//! can never observe the other variant's mutation. The copy is dropped as
//! soon as its output has been settled.

use crate::error::HarnessError;
use crate::primitive::{Category, Primitive, Value, Variant};
use crate::specimen::TestVector;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationOutcome {
    pub specimen: String,
    pub index: usize,
    pub case: String,
    pub input: Value,
    pub reference: Value,
    pub optimized: Value,
    pub agree: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    /// `Some(true)` only when both variants equal the oracle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_expected: Option<bool>,
}

impl VerificationOutcome {
    pub fn passed(&self) -> bool {
        self.agree && self.matches_expected.unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecimenVerdict {
    pub specimen: String,
    pub category: Category,
    pub passed: bool,
    pub outcomes: Vec<VerificationOutcome>,
}

impl SpecimenVerdict {
    pub fn new(specimen: &str, category: Category, outcomes: Vec<VerificationOutcome>) -> Self {
        let passed = outcomes.iter().all(VerificationOutcome::passed);
        Self {
            specimen: specimen.to_string(),
            category,
            passed,
            outcomes,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &VerificationOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Run one variant against a private copy of `input`.
pub fn run_isolated<P: Primitive>(primitive: &P, variant: Variant, input: &P::Input) -> P::Output {
    let mut copy = input.clone();
    let ret = primitive.invoke(variant, &mut copy);
    P::settle(copy, ret)
}

pub fn verify_vectors<P: Primitive>(
    specimen: &str,
    primitive: &P,
    vectors: &[TestVector<P::Input, P::Output>],
) -> Vec<VerificationOutcome> {
    vectors
        .iter()
        .enumerate()
        .map(|(index, vector)| {
            let reference = run_isolated(primitive, Variant::Reference, &vector.input);
            let optimized = run_isolated(primitive, Variant::Optimized, &vector.input);

            let agree = reference == optimized;
            let matches_expected = vector
                .expected
                .as_ref()
                .map(|expected| *expected == reference && *expected == optimized);

            if !agree {
                tracing::debug!(specimen, index, case = %vector.case, "variants disagree");
            }

            VerificationOutcome {
                specimen: specimen.to_string(),
                index,
                case: vector.case.clone(),
                input: vector.input.clone().into(),
                reference: reference.into(),
                optimized: optimized.into(),
                agree,
                expected: vector.expected.clone().map(Into::into),
                matches_expected,
            }
        })
        .collect()
}

/// Check every oracle-bearing vector against both variants, stopping at the
/// first mismatch. Returns the number of checks performed.
pub fn check_vectors<P: Primitive>(
    specimen: &str,
    primitive: &P,
    vectors: &[TestVector<P::Input, P::Output>],
) -> Result<usize, HarnessError> {
    let mut checked = 0;
    for vector in vectors {
        let Some(expected) = &vector.expected else {
            continue;
        };
        for variant in Variant::BOTH {
            let actual = run_isolated(primitive, variant, &vector.input);
            if actual != *expected {
                return Err(HarnessError::Mismatch {
                    specimen: specimen.to_string(),
                    case: vector.case.clone(),
                    variant,
                    expected: expected.clone().into(),
                    actual: actual.into(),
                });
            }
            checked += 1;
        }
    }
    Ok(checked)
}
