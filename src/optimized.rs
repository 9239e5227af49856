//! Optimized implementations
//!
//! Each variant must produce exactly what its counterpart in `baselines`
//! produces, including the wrapping behaviour of digit reversal.

use crate::{ArrayReverser, DigitReverser, SecondLargest, StrLen, StrReverser, SENTINEL};
use std::ffi::CStr;

const LO_BITS: u64 = 0x0101_0101_0101_0101;
const HI_BITS: u64 = 0x8080_8080_8080_8080;

/// `SWAPPED[d1 * 10 + d0] == d0 * 10 + d1`
const SWAPPED: [u8; 100] = {
    let mut table = [0u8; 100];
    let mut i = 0;
    while i < 100 {
        table[i] = ((i % 10) * 10 + i / 10) as u8;
        i += 1;
    }
    table
};

/// Two digits per division, widened to i64 so no step overflows
pub struct PairwiseDigitReverser;

impl DigitReverser for PairwiseDigitReverser {
    #[inline]
    fn reverse_number(&self, num: i32) -> i32 {
        let mut rest = u64::from(num.unsigned_abs());
        let mut reversed: i64 = 0;

        while rest >= 100 {
            reversed = reversed * 100 + i64::from(SWAPPED[(rest % 100) as usize]);
            rest /= 100;
        }
        if rest >= 10 {
            reversed = reversed * 100 + i64::from(SWAPPED[rest as usize]);
        } else if rest > 0 {
            reversed = reversed * 10 + rest as i64;
        }

        // Truncation matches the reference's wrapping arithmetic mod 2^32
        if num < 0 {
            (-reversed) as i32
        } else {
            reversed as i32
        }
    }
}

/// Word-at-a-time (SWAR) terminator search
pub struct WordStrLen;

impl StrLen for WordStrLen {
    #[inline]
    fn strlen(&self, s: &CStr) -> usize {
        let bytes = s.to_bytes_with_nul();
        let mut chunks = bytes.chunks_exact(8);
        let mut offset = 0;

        for chunk in &mut chunks {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            let word = u64::from_le_bytes(word);
            let zeros = word.wrapping_sub(LO_BITS) & !word & HI_BITS;
            if zeros != 0 {
                return offset + (zeros.trailing_zeros() / 8) as usize;
            }
            offset += 8;
        }

        let tail = chunks.remainder();
        offset + tail.iter().position(|&b| b == 0).unwrap_or(tail.len())
    }
}

/// Swap 8-byte blocks from both ends, then finish the middle bytewise
pub struct BlockStrReverser;

impl StrReverser for BlockStrReverser {
    #[inline]
    fn strrev(&self, s: &mut [u8]) {
        let (mut lo, mut hi) = (0, s.len());
        while hi - lo >= 16 {
            let head = load_u64(&s[lo..lo + 8]);
            let tail = load_u64(&s[hi - 8..hi]);
            s[lo..lo + 8].copy_from_slice(&tail.swap_bytes().to_le_bytes());
            s[hi - 8..hi].copy_from_slice(&head.swap_bytes().to_le_bytes());
            lo += 8;
            hi -= 8;
        }
        s[lo..hi].reverse();
    }
}

#[inline]
fn load_u64(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_le_bytes(word)
}

/// Split into disjoint halves and swap pairwise without index arithmetic
pub struct SplitArrayReverser;

impl ArrayReverser for SplitArrayReverser {
    #[inline]
    fn reverse_array(&self, arr: &mut [i32]) {
        let half = arr.len() / 2;
        let (front, back) = arr.split_at_mut(half);
        let skip = back.len() - half;
        for (a, b) in front.iter_mut().zip(back[skip..].iter_mut().rev()) {
            std::mem::swap(a, b);
        }
    }
}

/// Top-two tracking with min/max instead of branches
pub struct BranchlessSecondLargest;

impl SecondLargest for BranchlessSecondLargest {
    #[inline]
    fn second_largest(&self, arr: &[i32]) -> i32 {
        let [a, b, rest @ ..] = arr else {
            return SENTINEL;
        };

        let mut first = (*a).max(*b);
        let mut second = (*a).min(*b);
        for &value in rest {
            second = second.max(value.min(first));
            first = first.max(value);
        }
        second
    }
}
