//! Wall-clock comparison of the two variants of a specimen.
//!
//! Each variant runs `iterations` times in a tight loop bracketed by two
//! monotonic timestamps. The reference loop completes before the optimized
//! loop starts. No warm-up and no sampling: one number per variant.

use crate::primitive::{Category, Primitive, Variant};
use serde::Serialize;
use std::hint::black_box;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkSample {
    pub variant: Variant,
    pub iterations: u64,
    pub elapsed_ns: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Faster,
    Slower,
    Equal,
    Undefined,
}

impl Speed {
    pub fn from_delta(delta_percent: Option<f64>) -> Self {
        match delta_percent {
            None => Speed::Undefined,
            Some(d) if d < 0.0 => Speed::Faster,
            Some(d) if d > 0.0 => Speed::Slower,
            Some(_) => Speed::Equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub specimen: String,
    pub category: Category,
    pub iterations: u64,
    pub reference: BenchmarkSample,
    pub optimized: BenchmarkSample,
    /// Positive means the optimized variant is slower; `None` when undefined.
    pub delta_percent: Option<f64>,
    pub speed: Speed,
}

/// `100 * (optimized - reference) / reference`, or `None` when the reference
/// took no measurable time.
pub fn percent_delta(reference_ns: u64, optimized_ns: u64) -> Option<f64> {
    if reference_ns == 0 {
        return None;
    }
    let reference = reference_ns as f64;
    Some(100.0 * (optimized_ns as f64 - reference) / reference)
}

/// Time `iterations` calls of one variant.
///
/// In-place primitives work on a private buffer; when the primitive asks for
/// it, the buffer is restored from `input` before every call. The restore is
/// inside the timed loop, as a caller re-copying a string would be.
pub fn time_variant<P: Primitive>(
    primitive: &P,
    variant: Variant,
    input: &P::Input,
    iterations: u64,
) -> BenchmarkSample {
    if iterations == 0 {
        return BenchmarkSample {
            variant,
            iterations,
            elapsed_ns: 0,
        };
    }

    let mut work = input.clone();
    let reset = primitive.resets_between_calls();

    let start = Instant::now();
    for _ in 0..iterations {
        if reset {
            work.clone_from(input);
        }
        black_box(primitive.invoke(variant, black_box(&mut work)));
    }
    let elapsed = start.elapsed();

    BenchmarkSample {
        variant,
        iterations,
        elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
    }
}

pub fn profile_pair<P: Primitive>(
    specimen: &str,
    primitive: &P,
    input: &P::Input,
    iterations: u64,
) -> ProfileReport {
    let reference = time_variant(primitive, Variant::Reference, input, iterations);
    let optimized = time_variant(primitive, Variant::Optimized, input, iterations);

    let delta_percent = if iterations == 0 {
        None
    } else {
        percent_delta(reference.elapsed_ns, optimized.elapsed_ns)
    };

    tracing::debug!(
        specimen,
        iterations,
        reference_ns = reference.elapsed_ns,
        optimized_ns = optimized.elapsed_ns,
        "profiled"
    );

    ProfileReport {
        specimen: specimen.to_string(),
        category: primitive.category(),
        iterations,
        reference,
        optimized,
        delta_percent,
        speed: Speed::from_delta(delta_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Pair;
    use crate::{DigitReverser, StrReverser};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    struct Counting(Arc<AtomicU64>);

    impl DigitReverser for Counting {
        fn reverse_number(&self, num: i32) -> i32 {
            self.0.fetch_add(1, Ordering::Relaxed);
            num
        }
    }

    /// Records the first byte it sees, then scribbles over the buffer.
    struct Scribbler(Arc<AtomicU64>);

    impl StrReverser for Scribbler {
        fn strrev(&self, s: &mut [u8]) {
            if let Some(first) = s.first_mut() {
                if *first == b'A' {
                    self.0.fetch_add(1, Ordering::Relaxed);
                }
                *first = b'#';
            }
        }
    }

    #[test]
    fn delta_sign_convention() {
        assert_eq!(percent_delta(200, 100), Some(-50.0));
        assert_eq!(percent_delta(100, 150), Some(50.0));
        assert_eq!(percent_delta(100, 100), Some(0.0));
        assert_eq!(Speed::from_delta(Some(-50.0)), Speed::Faster);
        assert_eq!(Speed::from_delta(Some(50.0)), Speed::Slower);
        assert_eq!(Speed::from_delta(Some(0.0)), Speed::Equal);
    }

    #[test]
    fn zero_reference_time_is_undefined() {
        assert_eq!(percent_delta(0, 0), None);
        assert_eq!(percent_delta(0, 10), None);
        assert_eq!(Speed::from_delta(None), Speed::Undefined);
    }

    #[test]
    fn zero_iterations_never_calls_either_variant() {
        let reference_calls = Arc::new(AtomicU64::new(0));
        let optimized_calls = Arc::new(AtomicU64::new(0));
        let pair: Pair<dyn DigitReverser> = Pair {
            reference: Box::new(Counting(Arc::clone(&reference_calls))),
            optimized: Box::new(Counting(Arc::clone(&optimized_calls))),
        };

        let report = profile_pair("reverse_number", &pair, &42, 0);
        assert_eq!(report.reference.elapsed_ns, 0);
        assert_eq!(report.optimized.elapsed_ns, 0);
        assert_eq!(report.delta_percent, None);
        assert_eq!(report.speed, Speed::Undefined);
        assert_eq!(reference_calls.load(Ordering::Relaxed), 0);
        assert_eq!(optimized_calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn each_variant_runs_exactly_the_requested_iterations() {
        let reference_calls = Arc::new(AtomicU64::new(0));
        let optimized_calls = Arc::new(AtomicU64::new(0));
        let pair: Pair<dyn DigitReverser> = Pair {
            reference: Box::new(Counting(Arc::clone(&reference_calls))),
            optimized: Box::new(Counting(Arc::clone(&optimized_calls))),
        };

        let report = profile_pair("reverse_number", &pair, &42, 1000);
        assert_eq!(report.iterations, 1000);
        assert_eq!(report.reference.variant, Variant::Reference);
        assert_eq!(report.optimized.variant, Variant::Optimized);
        assert_eq!(reference_calls.load(Ordering::Relaxed), 1000);
        assert_eq!(optimized_calls.load(Ordering::Relaxed), 1000);
        assert_eq!(report.category, Category::NumberReversal);
    }

    #[test]
    fn resetting_primitives_see_pristine_input_every_call() {
        let pristine_seen = Arc::new(AtomicU64::new(0));
        let pair: Pair<dyn StrReverser> = Pair {
            reference: Box::new(Scribbler(Arc::clone(&pristine_seen))),
            optimized: Box::new(Scribbler(Arc::clone(&pristine_seen))),
        };
        let input = b"A string to reverse".to_vec();

        let sample = time_variant(&pair, Variant::Reference, &input, 25);
        assert_eq!(sample.iterations, 25);
        assert_eq!(pristine_seen.load(Ordering::Relaxed), 25);
        assert_eq!(input, b"A string to reverse");
    }
}
