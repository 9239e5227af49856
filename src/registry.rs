//! The catalogue of specimens.
//!
//! Built once, then read-only: there is no insertion or removal after
//! construction. `Catalogue::standard` assembles the five compiled-in
//! specimens; tests build their own catalogues from mock suites.

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::primitive::Pair;
use crate::specimen::{Specimen, Suite, TestVector};
use crate::{baselines, optimized, SENTINEL};
use crate::{ArrayReverser, DigitReverser, SecondLargest, StrLen, StrReverser};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::ffi::CString;

pub const REVERSE_NUMBER: &str = "reverse_number";
pub const STRLEN: &str = "strlen";
pub const STRREV: &str = "strrev";
pub const REVERSE_ARRAY: &str = "reverse_array";
pub const SECOND_LARGEST: &str = "second_largest";

const BENCH_NUMBER: i32 = 123_456_789;
const BENCH_STRLEN: &str = "This is a test string for benchmarking";
const BENCH_STRREV: &[u8] = b"A string to reverse";

pub struct Catalogue {
    specimens: Vec<Box<dyn Specimen>>,
    index: HashMap<String, usize>,
}

impl std::fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalogue").field("specimens", &self.names()).finish()
    }
}

impl Catalogue {
    pub fn new(specimens: Vec<Box<dyn Specimen>>) -> Result<Self, HarnessError> {
        let mut index = HashMap::with_capacity(specimens.len());
        for (position, specimen) in specimens.iter().enumerate() {
            if index.insert(specimen.name().to_string(), position).is_some() {
                return Err(HarnessError::DuplicateSpecimen {
                    name: specimen.name().to_string(),
                });
            }
        }
        Ok(Self { specimens, index })
    }

    /// The five primitives with curated and generated vectors.
    pub fn standard(config: &HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);

        let specimens: Vec<Box<dyn Specimen>> = vec![
            Box::new(number_suite(&mut rng, config.generated_vectors)),
            Box::new(strlen_suite(&mut rng, config.generated_vectors)?),
            Box::new(strrev_suite(&mut rng, config.generated_vectors)),
            Box::new(array_suite(&mut rng, config)),
            Box::new(second_largest_suite(&mut rng, config)),
        ];

        let catalogue = Self::new(specimens)?;
        tracing::debug!(
            specimens = catalogue.len(),
            seed = config.seed,
            "standard catalogue built"
        );
        Ok(catalogue)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Specimen, HarnessError> {
        self.index
            .get(name)
            .map(|&position| -> &dyn Specimen { self.specimens[position].as_ref() })
            .ok_or_else(|| HarnessError::NotFound {
                name: name.to_string(),
            })
    }

    /// Specimens in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Specimen> {
        self.specimens.iter().map(|s| -> &dyn Specimen { s.as_ref() })
    }

    /// Every specimen, or just the named one.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&dyn Specimen>, HarnessError> {
        match name {
            Some(name) => Ok(vec![self.get(name)?]),
            None => Ok(self.iter().collect()),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.specimens.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.specimens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specimens.is_empty()
    }
}

fn number_suite(rng: &mut StdRng, generated: usize) -> Suite<Pair<dyn DigitReverser>> {
    let pair: Pair<dyn DigitReverser> = Pair {
        reference: Box::new(baselines::LoopDigitReverser),
        optimized: Box::new(optimized::PairwiseDigitReverser),
    };

    let mut vectors = vec![
        TestVector::expecting("zero", 0, 0),
        TestVector::expecting("single digit", 5, 5),
        TestVector::expecting("three digits", 123, 321),
        TestVector::expecting("trailing zeros", 100, 1),
        TestVector::expecting("nine digits", 123_456_789, 987_654_321),
        // Sign handling belongs to the pair; agreement only.
        TestVector::new("negative", -12345),
        TestVector::expecting("five digits", 12345, 54321),
        TestVector::expecting("palindrome", 121, 121),
    ];
    vectors.extend((0..generated).map(|i| TestVector::new(format!("generated#{i}"), rng.gen::<i32>())));

    Suite::new(REVERSE_NUMBER, pair, vectors, BENCH_NUMBER)
}

fn strlen_suite(
    rng: &mut StdRng,
    generated: usize,
) -> Result<Suite<Pair<dyn StrLen>>, HarnessError> {
    let pair: Pair<dyn StrLen> = Pair {
        reference: Box::new(baselines::ScanStrLen),
        optimized: Box::new(optimized::WordStrLen),
    };

    let mut vectors = Vec::new();
    for (case, text) in [
        ("empty", ""),
        ("single char", "a"),
        ("word", "hello"),
        ("with spaces", "longer string with spaces"),
    ] {
        vectors.push(TestVector::expecting(case, c_string(text)?, text.len()));
    }
    for i in 0..generated {
        let text = random_text(rng);
        let len = text.len();
        vectors.push(TestVector::expecting(format!("generated#{i}"), c_string(&text)?, len));
    }

    Ok(Suite::new(STRLEN, pair, vectors, c_string(BENCH_STRLEN)?))
}

fn strrev_suite(rng: &mut StdRng, generated: usize) -> Suite<Pair<dyn StrReverser>> {
    let pair: Pair<dyn StrReverser> = Pair {
        reference: Box::new(baselines::TwoPointerStrReverser),
        optimized: Box::new(optimized::BlockStrReverser),
    };

    let curated = [
        ("empty", "", ""),
        ("single char", "a", "a"),
        ("two chars", "ab", "ba"),
        ("three chars", "abc", "cba"),
        ("word", "hello", "olleh"),
        ("palindrome", "racecar", "racecar"),
        ("digits", "12345", "54321"),
    ];
    let mut vectors: Vec<_> = curated
        .into_iter()
        .map(|(case, input, expected)| {
            TestVector::expecting(case, input.as_bytes().to_vec(), expected.as_bytes().to_vec())
        })
        .collect();
    vectors.extend((0..generated).map(|i| {
        let input = random_text(rng).into_bytes();
        let expected: Vec<u8> = input.iter().rev().copied().collect();
        TestVector::expecting(format!("generated#{i}"), input, expected)
    }));

    Suite::new(STRREV, pair, vectors, BENCH_STRREV.to_vec())
}

fn array_suite(rng: &mut StdRng, config: &HarnessConfig) -> Suite<Pair<dyn ArrayReverser>> {
    let pair: Pair<dyn ArrayReverser> = Pair {
        reference: Box::new(baselines::IndexArrayReverser),
        optimized: Box::new(optimized::SplitArrayReverser),
    };

    let curated: [(&str, &[i32]); 6] = [
        ("empty", &[]),
        ("single element", &[1]),
        ("two elements", &[1, 2]),
        ("odd length", &[1, 2, 3]),
        ("even length", &[1, 2, 3, 4]),
        ("mixed values", &[5, 2, 9, 1, 7]),
    ];
    let mut vectors: Vec<_> = curated
        .into_iter()
        .map(|(case, input)| {
            let expected: Vec<i32> = input.iter().rev().copied().collect();
            TestVector::expecting(case, input.to_vec(), expected)
        })
        .collect();
    vectors.extend((0..config.generated_vectors).map(|i| {
        let input = random_array(rng);
        let expected: Vec<i32> = input.iter().rev().copied().collect();
        TestVector::expecting(format!("generated#{i}"), input, expected)
    }));

    let bench_input = (0..config.array_size).map(|i| i as i32).collect();
    Suite::new(REVERSE_ARRAY, pair, vectors, bench_input)
}

fn second_largest_suite(
    rng: &mut StdRng,
    config: &HarnessConfig,
) -> Suite<Pair<dyn SecondLargest>> {
    let pair: Pair<dyn SecondLargest> = Pair {
        reference: Box::new(baselines::TrackingSecondLargest),
        optimized: Box::new(optimized::BranchlessSecondLargest),
    };

    let mut vectors = vec![
        TestVector::expecting("simple", vec![1, 2], 1),
        TestVector::expecting("typical", vec![5, 2, 9, 1, 7], 7),
        TestVector::expecting("duplicates", vec![9, 9, 8, 8], 9),
        TestVector::expecting("negatives", vec![-5, -2, -9], -5),
        // Duplicates count by position, so the common value is second largest.
        TestVector::expecting("all-equal", vec![1, 1, 1, 1], 1),
        TestVector::expecting("single element", vec![1], SENTINEL),
        TestVector::expecting("empty", vec![], SENTINEL),
    ];
    vectors.extend(
        (0..config.generated_vectors).map(|i| TestVector::new(format!("generated#{i}"), random_array(rng))),
    );

    let bench_input = (0..config.array_size).map(|_| rng.gen_range(0..1000)).collect();
    Suite::new(SECOND_LARGEST, pair, vectors, bench_input)
}

fn c_string(text: &str) -> Result<CString, HarnessError> {
    CString::new(text).map_err(|e| HarnessError::InvalidInput(e.to_string()))
}

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..48);
    rng.sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

fn random_array(rng: &mut StdRng) -> Vec<i32> {
    let len = rng.gen_range(0..64);
    (0..len).map(|_| rng.gen_range(-1000..1000)).collect()
}
