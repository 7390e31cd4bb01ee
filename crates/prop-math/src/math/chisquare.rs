//! Chi-square distribution with one degree of freedom, in closed form.
//!
//! For k = 1 the regularized incomplete gamma collapses onto the error
//! function:
//!
//! ```text
//! chisq_cdf(x; 1) = gammai(1/2, x/2) / gamma(1/2) = erf(sqrt(x/2))
//! ```
//!
//! so no general chi-square machinery is needed for the two-category
//! goodness-of-fit test below.

use super::special::{erf, erfc};

/// CDF of the chi-square distribution with one degree of freedom.
///
/// Expects x >= 0 (a squared-deviation statistic); negative x is not
/// guarded and yields NaN through the square root.
pub fn chisquare_cdf_1df(x: f64) -> f64 {
    erf((x / 2.0).sqrt())
}

/// Complement of the CDF (1 - CDF(x)) for the chi-square distribution
/// with one degree of freedom, accurate for large statistics where the
/// complement underflows the direct subtraction.
pub fn chisquare_cdfc_1df(x: f64) -> f64 {
    erfc((x / 2.0).sqrt())
}

/// Asymptotic chi-square p-value for two observed proportions against
/// the null hypothesis of equal proportions.
///
/// The Pearson statistic is written out directly because there are only
/// two categories, each with expected frequency 0.5 under the null.
///
/// When both counts are zero the expected frequency is zero and the
/// statistic is undefined; this returns NaN, making explicit what the
/// unguarded 0/0 division produced.
pub fn chisquare_test(n1: i64, n2: i64) -> f64 {
    let total = n1 + n2;
    if total == 0 {
        return f64::NAN;
    }
    let expected = total as f64 / 2.0;
    let diff1 = n1 as f64 - expected;
    let diff2 = n2 as f64 - expected;
    let statistic = diff1 * diff1 / expected + diff2 * diff2 / expected;

    chisquare_cdfc_1df(statistic)
}
