//! Fuzz target for the exact test with hostile probabilities.
//!
//! The core performs no input validation; arbitrary p (including NaN
//! and infinities) may produce NaN, but must never panic or loop
//! unboundedly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use prop_math::binomial_test_twotailed;

fuzz_target!(|input: (u8, u8, f64)| {
    let (k, n, p) = input;
    let _ = binomial_test_twotailed(i64::from(k), i64::from(n), p);
});
