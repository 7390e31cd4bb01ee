//! Dispatcher between the exact and asymptotic equal-proportion tests.

use serde::Serialize;

use super::binomial::binomial_test;
use super::chisquare::chisquare_test;

/// Largest total sample size still handled by the exact binomial test.
///
/// Above this the chi-square approximation takes over: the exact test's
/// tail sums are O(n) and its point masses accumulate more rounding
/// error as n grows, while the asymptotic approximation only gets
/// better.
pub const EXACT_TEST_MAX_TOTAL: i64 = 200;

/// Which statistical test the dispatcher selects for a pair of counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Two-tailed exact binomial test.
    Exact,
    /// Pearson chi-square test, one degree of freedom.
    ChiSquare,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Exact => write!(f, "exact"),
            Method::ChiSquare => write!(f, "chi_square"),
        }
    }
}

/// Test selected for the given counts: exact up to a total of
/// [`EXACT_TEST_MAX_TOTAL`], chi-square beyond it.
pub fn selected_method(n1: i64, n2: i64) -> Method {
    if n1 + n2 > EXACT_TEST_MAX_TOTAL {
        Method::ChiSquare
    } else {
        Method::Exact
    }
}

/// Two-sided p-value for the null hypothesis that n1 and n2 are drawn
/// from equal proportions.
pub fn proportion_test(n1: i64, n2: i64) -> f64 {
    match selected_method(n1, n2) {
        Method::ChiSquare => chisquare_test(n1, n2),
        Method::Exact => binomial_test(n1, n2),
    }
}
