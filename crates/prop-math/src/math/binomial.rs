//! Binomial point mass, tail sums, and the two-tailed exact test.
//!
//! The point mass is evaluated in log space:
//!
//! ```text
//! B(k; n, p) = exp( lgamma(n+1) - lgamma(k+1) - lgamma(n-k+1)
//!                   + k ln(p) + (n-k) ln(1-p) )
//! ```
//!
//! which stays finite where the factorial form would overflow long
//! before n reaches the trial counts this crate handles. Extreme tails
//! may still underflow to 0.0; that is an accepted approximation, not
//! an error.
//!
//! None of these functions validate their inputs. Out-of-domain
//! arguments (k < 0, k > n, p outside (0,1)) flow through `log_gamma`
//! and `ln` and generally come back as NaN.

use super::stable::log_gamma;

/// Binomial point mass B(k; n, p): probability of exactly k successes
/// in n trials with per-trial success probability p.
pub fn binomial(k: i64, n: i64, p: f64) -> f64 {
    let k = k as f64;
    let n = n as f64;
    (log_gamma(n + 1.0) - log_gamma(k + 1.0) - log_gamma(n - k + 1.0)
        + k * p.ln()
        + (n - k) * (1.0 - p).ln())
    .exp()
}

/// Sum of binomial point masses for k in [start, end], both ends
/// included.
///
/// An empty range (start > end) sums to 0.0. Callers rely on this when
/// a rejection-region tail falls entirely outside the support.
pub fn binomial_integral(start: i64, end: i64, n: i64, p: f64) -> f64 {
    let mut sum = 0.0;
    for k in start..=end {
        sum += binomial(k, n, p);
    }
    sum
}

/// Two-tailed exact binomial p-value for k observed successes in n
/// trials under null success probability p.
///
/// The rejection region is both tails at least as far from the mean as
/// k: the observed count on one side, and its mirror image
/// `2*mean - k` on the other, rounded away from the mean (floor when it
/// is the lower limit, ceil when it is the upper limit) so a tail is
/// never under-counted. When k sits exactly on the mean the two
/// inclusive tails cover the whole support and overlap at k; the sum is
/// clamped so that case reports certainty (1.0) rather than
/// 1 + B(k; n, p). The clamp cannot affect any other outcome: off the
/// mean the two tail ranges are disjoint.
///
/// This tail-limit convention is deliberate and is pinned by the
/// reference results; it is close to, but not identical with, R's
/// `binom.test` (known divergence in the k=298, n=320 region).
pub fn binomial_test_twotailed(k: i64, n: i64, p: f64) -> f64 {
    let mean = p * n as f64;
    let opposite = 2.0 * mean - k as f64;

    // Put the limits on the correct sides of each other, rounding the
    // mirrored limit away from the mean.
    let (left_limit, right_limit) = if opposite < k as f64 {
        (opposite.floor() as i64, k)
    } else {
        (k, opposite.ceil() as i64)
    };

    let left_tail = binomial_integral(0, left_limit, n, p);
    let right_tail = binomial_integral(right_limit, n, n, p);

    let p_value = left_tail + right_tail;
    // NaN must survive this clamp, so no f64::min here.
    if p_value > 1.0 {
        1.0
    } else {
        p_value
    }
}

/// Exact two-tailed test of two observed proportions against the null
/// hypothesis that both are drawn from probability 0.5.
pub fn binomial_test(n1: i64, n2: i64) -> f64 {
    binomial_test_twotailed(n1, n1 + n2, 0.5)
}
