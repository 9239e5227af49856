//! Reference implementations: plain loops, one step per element

use crate::{ArrayReverser, DigitReverser, SecondLargest, StrLen, StrReverser, SENTINEL};
use std::ffi::CStr;

/// Peel one digit per iteration
pub struct LoopDigitReverser;

impl DigitReverser for LoopDigitReverser {
    #[inline]
    fn reverse_number(&self, mut num: i32) -> i32 {
        let mut reversed: i32 = 0;
        while num != 0 {
            reversed = reversed.wrapping_mul(10).wrapping_add(num % 10);
            num /= 10;
        }
        reversed
    }
}

/// Walk bytes until the terminator
pub struct ScanStrLen;

impl StrLen for ScanStrLen {
    #[inline]
    fn strlen(&self, s: &CStr) -> usize {
        let mut len = 0;
        for &byte in s.to_bytes_with_nul() {
            if byte == 0 {
                break;
            }
            len += 1;
        }
        len
    }
}

/// Swap from both ends toward the middle
pub struct TwoPointerStrReverser;

impl StrReverser for TwoPointerStrReverser {
    #[inline]
    fn strrev(&self, s: &mut [u8]) {
        if s.len() < 2 {
            return;
        }
        let mut start = 0;
        let mut end = s.len() - 1;
        while start < end {
            s.swap(start, end);
            start += 1;
            end -= 1;
        }
    }
}

/// Swap index `i` with `len - 1 - i` for the first half
pub struct IndexArrayReverser;

impl ArrayReverser for IndexArrayReverser {
    #[inline]
    fn reverse_array(&self, arr: &mut [i32]) {
        let len = arr.len();
        for i in 0..len / 2 {
            arr.swap(i, len - 1 - i);
        }
    }
}

/// Track the top two values in one pass
pub struct TrackingSecondLargest;

impl SecondLargest for TrackingSecondLargest {
    #[inline]
    fn second_largest(&self, arr: &[i32]) -> i32 {
        if arr.len() < 2 {
            return SENTINEL;
        }

        let (mut first, mut second) = (arr[0], arr[1]);
        if first < second {
            std::mem::swap(&mut first, &mut second);
        }

        for &value in &arr[2..] {
            if value > first {
                second = first;
                first = value;
            } else if value > second {
                second = value;
            }
        }
        second
    }
}
