//! Uniform calling convention over the five primitive contracts.
//!
//! A [`Pair`] bundles the reference and optimized implementations of one
//! contract; [`Primitive`] lets the verifier and profiler drive any pair
//! through the same three steps: copy the input, invoke one variant, settle
//! the observable output.

use crate::{ArrayReverser, DigitReverser, SecondLargest, StrLen, StrReverser};
use serde::Serialize;
use std::ffi::{CStr, CString};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Reference,
    Optimized,
}

impl Variant {
    pub const BOTH: [Variant; 2] = [Variant::Reference, Variant::Optimized];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Reference => "reference",
            Variant::Optimized => "optimized",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NumberReversal,
    StringLength,
    StringReversal,
    ArrayReversal,
    SecondLargest,
}

impl Category {
    /// Divides the base iteration count. Categories that copy or allocate per
    /// call run fewer iterations so every specimen takes comparable wall time.
    pub fn iteration_divisor(self) -> u64 {
        match self {
            Category::NumberReversal | Category::StringLength => 1,
            Category::StringReversal | Category::SecondLargest => 10,
            Category::ArrayReversal => 100,
        }
    }

    /// Whether the primitive mutates its input in place.
    pub fn is_mutating(self) -> bool {
        matches!(self, Category::StringReversal | Category::ArrayReversal)
    }
}

/// Type-erased rendering of a primitive's input or output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    Length(usize),
    Text(String),
    Array(Vec<i32>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Length(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "'{s}'"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Length(n)
    }
}

impl From<CString> for Value {
    fn from(s: CString) -> Self {
        Value::Text(s.to_string_lossy().into_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Text(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl From<Vec<i32>> for Value {
    fn from(items: Vec<i32>) -> Self {
        Value::Array(items)
    }
}

/// The reference and optimized implementations of one contract.
pub struct Pair<T: ?Sized> {
    pub reference: Box<T>,
    pub optimized: Box<T>,
}

impl<T: ?Sized> Pair<T> {
    pub fn select(&self, variant: Variant) -> &T {
        match variant {
            Variant::Reference => &self.reference,
            Variant::Optimized => &self.optimized,
        }
    }
}

/// A pair that can be driven without knowing which contract it implements.
pub trait Primitive: Send + Sync {
    type Input: Clone + Into<Value>;
    /// What a single call returns; `()` for in-place primitives.
    type Return;
    /// What the verifier compares.
    type Output: Clone + PartialEq + Into<Value>;

    fn category(&self) -> Category;

    fn invoke(&self, variant: Variant, input: &mut Self::Input) -> Self::Return;

    /// Combine the post-call input with the call's return value into the
    /// observable output. In-place primitives yield the mutated input.
    fn settle(input: Self::Input, ret: Self::Return) -> Self::Output;

    /// Whether the profiler restores the pristine input before every call.
    fn resets_between_calls(&self) -> bool {
        false
    }
}

impl Primitive for Pair<dyn DigitReverser> {
    type Input = i32;
    type Return = i32;
    type Output = i32;

    fn category(&self) -> Category {
        Category::NumberReversal
    }

    #[inline]
    fn invoke(&self, variant: Variant, input: &mut i32) -> i32 {
        self.select(variant).reverse_number(*input)
    }

    fn settle(_input: i32, ret: i32) -> i32 {
        ret
    }
}

impl Primitive for Pair<dyn StrLen> {
    type Input = CString;
    type Return = usize;
    type Output = usize;

    fn category(&self) -> Category {
        Category::StringLength
    }

    #[inline]
    fn invoke(&self, variant: Variant, input: &mut CString) -> usize {
        let s: &CStr = input;
        self.select(variant).strlen(s)
    }

    fn settle(_input: CString, ret: usize) -> usize {
        ret
    }
}

impl Primitive for Pair<dyn StrReverser> {
    type Input = Vec<u8>;
    type Return = ();
    type Output = Vec<u8>;

    fn category(&self) -> Category {
        Category::StringReversal
    }

    #[inline]
    fn invoke(&self, variant: Variant, input: &mut Vec<u8>) {
        self.select(variant).strrev(input);
    }

    fn settle(input: Vec<u8>, _ret: ()) -> Vec<u8> {
        input
    }

    fn resets_between_calls(&self) -> bool {
        true
    }
}

impl Primitive for Pair<dyn ArrayReverser> {
    type Input = Vec<i32>;
    type Return = ();
    type Output = Vec<i32>;

    fn category(&self) -> Category {
        Category::ArrayReversal
    }

    #[inline]
    fn invoke(&self, variant: Variant, input: &mut Vec<i32>) {
        self.select(variant).reverse_array(input);
    }

    fn settle(input: Vec<i32>, _ret: ()) -> Vec<i32> {
        input
    }
}

impl Primitive for Pair<dyn SecondLargest> {
    type Input = Vec<i32>;
    type Return = i32;
    type Output = i32;

    fn category(&self) -> Category {
        Category::SecondLargest
    }

    #[inline]
    fn invoke(&self, variant: Variant, input: &mut Vec<i32>) -> i32 {
        self.select(variant).second_largest(input)
    }

    fn settle(_input: Vec<i32>, ret: i32) -> i32 {
        ret
    }
}
