//! Significance tests for two observed proportions.
//!
//! Everything in this crate is a pure function of scalar inputs: no I/O,
//! no shared state, no error type. Degenerate inputs flow through
//! ordinary floating-point semantics (0.0, NaN) instead of panicking.

pub mod math;

pub use math::binomial::{binomial, binomial_integral, binomial_test, binomial_test_twotailed};
pub use math::chisquare::{chisquare_cdf_1df, chisquare_cdfc_1df, chisquare_test};
pub use math::proportion::{proportion_test, selected_method, Method, EXACT_TEST_MAX_TOTAL};
pub use math::special::{erf, erfc, gamma_p, gamma_q};
pub use math::stable::log_gamma;
