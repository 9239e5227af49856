use proptest::prelude::*;
use specimen_bench::baselines::*;
use specimen_bench::optimized::*;
use specimen_bench::{ArrayReverser, DigitReverser, SecondLargest, StrLen, StrReverser, SENTINEL};
use std::ffi::CString;

fn non_nul_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=255, 0..96)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn digit_reversal_variants_agree(num in any::<i32>()) {
        prop_assert_eq!(
            LoopDigitReverser.reverse_number(num),
            PairwiseDigitReverser.reverse_number(num)
        );
    }

    #[test]
    fn digit_reversal_is_involution_without_trailing_zeros(num in 1i32..100_000_000) {
        prop_assume!(num % 10 != 0);
        let twice = LoopDigitReverser.reverse_number(LoopDigitReverser.reverse_number(num));
        prop_assert_eq!(twice, num);
    }

    #[test]
    fn strlen_variants_agree(bytes in non_nul_bytes()) {
        let len = bytes.len();
        let s = CString::new(bytes).unwrap();
        prop_assert_eq!(ScanStrLen.strlen(&s), len);
        prop_assert_eq!(WordStrLen.strlen(&s), len);
    }

    #[test]
    fn strrev_variants_agree_and_are_involutions(bytes in non_nul_bytes()) {
        let mut reference = bytes.clone();
        let mut optimized = bytes.clone();
        TwoPointerStrReverser.strrev(&mut reference);
        BlockStrReverser.strrev(&mut optimized);
        prop_assert_eq!(&reference, &optimized);

        BlockStrReverser.strrev(&mut optimized);
        prop_assert_eq!(optimized, bytes);
    }

    #[test]
    fn array_reversal_variants_agree_and_are_involutions(
        arr in prop::collection::vec(any::<i32>(), 0..128)
    ) {
        let mut reference = arr.clone();
        let mut optimized = arr.clone();
        IndexArrayReverser.reverse_array(&mut reference);
        SplitArrayReverser.reverse_array(&mut optimized);
        prop_assert_eq!(&reference, &optimized);
        prop_assert!(reference.iter().eq(arr.iter().rev()));

        SplitArrayReverser.reverse_array(&mut optimized);
        prop_assert_eq!(optimized, arr);
    }

    #[test]
    fn second_largest_variants_agree(arr in prop::collection::vec(-50i32..50, 0..64)) {
        let reference = TrackingSecondLargest.second_largest(&arr);
        let optimized = BranchlessSecondLargest.second_largest(&arr);
        prop_assert_eq!(reference, optimized);

        if arr.len() < 2 {
            prop_assert_eq!(reference, SENTINEL);
        } else {
            let mut sorted = arr.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(reference, sorted[1]);
        }
    }
}
