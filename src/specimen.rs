//! A specimen is one primitive bound to its pair, its test vectors and its
//! benchmark input.

use crate::error::HarnessError;
use crate::primitive::{Category, Primitive};
use crate::profile::{self, ProfileReport};
use crate::verify::{self, SpecimenVerdict};

/// One input plus, optionally, the known-correct output.
#[derive(Debug, Clone, PartialEq)]
pub struct TestVector<I, O> {
    /// Short label shown in reports, e.g. `all-equal` or `generated#3`.
    pub case: String,
    pub input: I,
    pub expected: Option<O>,
}

impl<I, O> TestVector<I, O> {
    pub fn new(case: impl Into<String>, input: I) -> Self {
        Self {
            case: case.into(),
            input,
            expected: None,
        }
    }

    pub fn expecting(case: impl Into<String>, input: I, expected: O) -> Self {
        Self {
            case: case.into(),
            input,
            expected: Some(expected),
        }
    }
}

/// Object-safe view of a [`Suite`], so specimens of different categories
/// live in one catalogue.
pub trait Specimen: Send + Sync {
    fn name(&self) -> &str;

    fn category(&self) -> Category;

    fn vector_count(&self) -> usize;

    /// Collecting mode: every vector is run and every outcome is kept.
    fn verify(&self) -> SpecimenVerdict;

    /// Fail-fast mode: stop at the first variant output that differs from an
    /// oracle.
    fn check(&self) -> Result<usize, HarnessError>;

    fn profile(&self, iterations: u64) -> ProfileReport;
}

pub struct Suite<P: Primitive> {
    name: String,
    primitive: P,
    vectors: Vec<TestVector<P::Input, P::Output>>,
    bench_input: P::Input,
}

impl<P: Primitive> Suite<P> {
    pub fn new(
        name: impl Into<String>,
        primitive: P,
        vectors: Vec<TestVector<P::Input, P::Output>>,
        bench_input: P::Input,
    ) -> Self {
        Self {
            name: name.into(),
            primitive,
            vectors,
            bench_input,
        }
    }

    pub fn vectors(&self) -> &[TestVector<P::Input, P::Output>] {
        &self.vectors
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }
}

impl<P: Primitive> Specimen for Suite<P>
where
    P::Input: Send + Sync,
    P::Output: Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        self.primitive.category()
    }

    fn vector_count(&self) -> usize {
        self.vectors.len()
    }

    fn verify(&self) -> SpecimenVerdict {
        let outcomes = verify::verify_vectors(&self.name, &self.primitive, &self.vectors);
        SpecimenVerdict::new(&self.name, self.category(), outcomes)
    }

    fn check(&self) -> Result<usize, HarnessError> {
        verify::check_vectors(&self.name, &self.primitive, &self.vectors)
    }

    fn profile(&self, iterations: u64) -> ProfileReport {
        profile::profile_pair(&self.name, &self.primitive, &self.bench_input, iterations)
    }
}
