// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Input construction for the benchmark fixtures.
//!
//! Every fixture builds its inputs here, once per parameter combination,
//! before any measured iteration runs. Fixtures that need run-to-run
//! reproducibility use a fixed seed; the rest draw from the thread-local
//! generator.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Seed shared by the deterministic fixtures.
pub const FIXED_SEED: u64 = 42;

/// Generate a random byte buffer of exactly `len` bytes from a fixed seed.
pub fn seeded_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

/// Generate a random byte buffer of exactly `len` bytes.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

/// Generate a random alphanumeric string of exactly `len` chars.
///
/// The alphabet is `A-Za-z0-9`, so the string-search probe `'_'` can never
/// occur and every search over the result is a full-scan miss.
pub fn random_alnum_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Initialization order for the sorting fixture's input vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOrder {
    Ascending,
    Descending,
    Random,
}

impl InitOrder {
    pub const ALL: [InitOrder; 3] = [InitOrder::Ascending, InitOrder::Descending, InitOrder::Random];

    pub fn label(self) -> &'static str {
        match self {
            InitOrder::Ascending => "ascending",
            InitOrder::Descending => "descending",
            InitOrder::Random => "random",
        }
    }
}

/// Build a vector of `len` i32 values in the given initialization order.
///
/// Ascending and descending runs start from a random offset, as the original
/// ranges do; the offset is clamped so the run cannot overflow i32.
pub fn ordered_ints(len: usize, order: InitOrder) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    match order {
        InitOrder::Ascending => {
            let start = rng.gen_range(0..i32::MAX - len as i32);
            (start..start + len as i32).collect()
        }
        InitOrder::Descending => {
            let start = rng.gen_range(0..i32::MAX - len as i32);
            (start..start + len as i32).rev().collect()
        }
        InitOrder::Random => (0..len).map(|_| rng.gen::<i32>()).collect(),
    }
}

/// Needle placement for the containment fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedlePosition {
    First,
    Mid,
    Last,
    Never,
}

impl NeedlePosition {
    pub const ALL: [NeedlePosition; 4] = [
        NeedlePosition::First,
        NeedlePosition::Mid,
        NeedlePosition::Last,
        NeedlePosition::Never,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NeedlePosition::First => "first",
            NeedlePosition::Mid => "mid",
            NeedlePosition::Last => "last",
            NeedlePosition::Never => "never",
        }
    }

    /// The needle value for a haystack of `1..=n`.
    pub fn needle(self, n: i32) -> i32 {
        match self {
            NeedlePosition::First => 1,
            NeedlePosition::Mid => n / 2,
            NeedlePosition::Last => n,
            NeedlePosition::Never => n + 1,
        }
    }
}

/// The containment fixture's haystack: `1..=n`.
pub fn sequential_ints(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

/// Parallel arrays for the numeric fixture, one slot per representation.
///
/// All five arrays hold the same `len` source values drawn from a seeded
/// generator, so every variant in a comparison group sees identical input.
pub struct NumericArrays {
    pub strings: Vec<String>,
    pub ints: Vec<i32>,
    pub longs: Vec<i64>,
    pub doubles: Vec<f64>,
    pub decimals: Vec<Decimal>,
}

impl NumericArrays {
    /// Build the bundle from `StdRng::seed_from_u64(seed)`.
    pub fn seeded(len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut strings = Vec::with_capacity(len);
        let mut ints = Vec::with_capacity(len);
        let mut longs = Vec::with_capacity(len);
        let mut doubles = Vec::with_capacity(len);
        let mut decimals = Vec::with_capacity(len);

        for _ in 0..len {
            // Non-negative, like the original's Random.Next().
            let value = rng.gen_range(0..i32::MAX);
            strings.push(value.to_string());
            ints.push(value);
            longs.push(i64::from(value));
            doubles.push(f64::from(value));
            decimals.push(Decimal::from(value));
        }

        Self {
            strings,
            ints,
            longs,
            doubles,
            decimals,
        }
    }

    pub fn len(&self) -> usize {
        self.ints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ints.is_empty()
    }
}
