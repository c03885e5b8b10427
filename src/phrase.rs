//! Packed sliding window of the last three word codes
//!
//! Layout, most significant field first:
//!
//! ```text
//!  63  62        42 41        21 20         0
//! [ 0 ][  slot 0   ][  slot 1   ][  slot 2   ]
//!       oldest                     newest
//! ```
//!
//! Pushing shifts every slot one field towards the top and drops whatever
//! falls off the 63-bit window. Sub-keys are the n-grams that *start* at
//! slot 0, right-aligned so that a unigram key is just the word's code and
//! keys of different lengths share one numeric keyspace.

use crate::dictionary::{Code, SENTINEL};

/// Bits per word slot
pub const FIELD_BITS: u32 = 21;

/// Slots per window
pub const FIELD_COUNT: usize = 3;

/// Mask of a single slot
pub const FIELD_MASK: u64 = (1 << FIELD_BITS) - 1;

/// Number of distinct codes a slot can hold
pub const CAPACITY: u64 = 1 << FIELD_BITS;

const WINDOW_BITS: u32 = FIELD_BITS * FIELD_COUNT as u32;
const WINDOW_MASK: u64 = (1 << WINDOW_BITS) - 1;

const _: () = assert!(WINDOW_BITS < u64::BITS, "window must fit a u64");

/// Three word codes packed into one integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phrase {
    value: u64,
}

impl Phrase {
    /// An all-sentinel window
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Wraps a packed value, e.g. a key read back from the frequency table
    pub fn from_value(value: u64) -> Self {
        Self {
            value: value & WINDOW_MASK,
        }
    }

    /// Shifts `code` in as the newest word
    pub fn push(&mut self, code: Code) {
        self.value = ((self.value << FIELD_BITS) | (u64::from(code) & FIELD_MASK)) & WINDOW_MASK;
    }

    /// Returns a copy with `code` pushed
    #[must_use]
    pub fn with(mut self, code: Code) -> Self {
        self.push(code);
        self
    }

    /// Key of the `n + 1` word sequence starting at the oldest slot.
    ///
    /// `subkey(0)` is the oldest word alone, `subkey(2)` the whole window.
    pub fn subkey(&self, n: usize) -> u64 {
        debug_assert!(n < FIELD_COUNT, "sub-key index out of range: {n}");
        (self.value >> downshift(n)) & mask(n)
    }

    /// Code in slot `i`, counted from the oldest slot
    pub fn field(&self, i: usize) -> Code {
        debug_assert!(i < FIELD_COUNT, "slot index out of range: {i}");
        ((self.value >> downshift(i)) & FIELD_MASK) as Code
    }

    /// Raw packed value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of occupied slots: from the first non-sentinel slot through
    /// the newest one
    pub fn len(&self) -> usize {
        (0..FIELD_COUNT)
            .find(|&i| self.field(i) != SENTINEL)
            .map_or(0, |first| FIELD_COUNT - first)
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Codes of the occupied slots, oldest first
    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        (FIELD_COUNT - self.len()..FIELD_COUNT).map(move |i| self.field(i))
    }
}

const fn downshift(i: usize) -> u32 {
    FIELD_BITS * (FIELD_COUNT - (i + 1)) as u32
}

const fn mask(i: usize) -> u64 {
    (1 << (FIELD_BITS * (i as u32 + 1))) - 1
}
