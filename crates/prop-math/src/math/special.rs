//! Error function and regularized incomplete gamma.
//!
//! The chi-square CDF with one degree of freedom reduces to
//! `erf(sqrt(x/2))`, and erf/erfc themselves reduce to the regularized
//! incomplete gamma at a = 1/2:
//!
//! ```text
//! erf(x)  = P(1/2, x^2)        (x >= 0)
//! erfc(x) = Q(1/2, x^2)        (x >= 0)
//! ```
//!
//! P is computed by series expansion for `x < a + 1` and Q by a modified
//! Lentz continued fraction otherwise. The reference suite pins p-values
//! to 10 significant digits, which rules out the usual low-order
//! polynomial erf approximations (~1e-7); the series/continued-fraction
//! route converges to near machine precision and keeps erfc accurate in
//! the far tail where `1 - erf` would cancel catastrophically.

use super::stable::log_gamma;

const GAMMAINC_MAX_ITERS: usize = 300;
const GAMMAINC_EPS: f64 = 1.0e-14;
const GAMMAINC_FPMIN: f64 = 1.0e-30;

/// Regularized lower incomplete gamma function P(a, x).
///
/// P(a, x) = γ(a, x) / Γ(a) for a > 0, x >= 0.
pub fn gamma_p(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() {
        return f64::NAN;
    }
    if a <= 0.0 || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }

    if x < a + 1.0 {
        gammainc_series(a, x)
    } else {
        1.0 - gammainc_cf(a, x)
    }
}

/// Regularized upper incomplete gamma function Q(a, x) = 1 - P(a, x).
pub fn gamma_q(a: f64, x: f64) -> f64 {
    if a.is_nan() || x.is_nan() {
        return f64::NAN;
    }
    if a <= 0.0 || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 1.0;
    }
    if x.is_infinite() {
        return 0.0;
    }

    if x < a + 1.0 {
        1.0 - gammainc_series(a, x)
    } else {
        gammainc_cf(a, x)
    }
}

/// Series expansion for P(a, x), efficient when x < a+1.
///
/// P(a, x) = e^(-x) * x^a / Γ(a) * Σ_{n=0}^∞ x^n / (a (a+1) ... (a+n))
fn gammainc_series(a: f64, x: f64) -> f64 {
    let log_prefactor = a * x.ln() - x - log_gamma(a);

    let mut term = 1.0 / a;
    let mut sum = term;
    for n in 1..=GAMMAINC_MAX_ITERS {
        term *= x / (a + n as f64);
        sum += term;
        if term.abs() < GAMMAINC_EPS * sum.abs() {
            break;
        }
    }

    (log_prefactor.exp() * sum).clamp(0.0, 1.0)
}

/// Modified Lentz continued fraction for Q(a, x), efficient when x >= a+1.
fn gammainc_cf(a: f64, x: f64) -> f64 {
    let log_prefactor = a * x.ln() - x - log_gamma(a);

    let mut b = x - a + 1.0;
    let mut c = 1.0 / GAMMAINC_FPMIN;
    let mut d = 1.0 / b;
    let mut h = d;

    for i in 1..=GAMMAINC_MAX_ITERS {
        let ai = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = ai * d + b;
        if d.abs() < GAMMAINC_FPMIN {
            d = GAMMAINC_FPMIN;
        }
        c = b + ai / c;
        if c.abs() < GAMMAINC_FPMIN {
            c = GAMMAINC_FPMIN;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;
        if (del - 1.0).abs() < GAMMAINC_EPS {
            break;
        }
    }

    (log_prefactor.exp() * h).clamp(0.0, 1.0)
}

/// Error function.
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return x; // preserves the sign of zero
    }
    let p = gamma_p(0.5, x * x);
    if x > 0.0 {
        p
    } else {
        -p
    }
}

/// Complementary error function, 1 - erf(x), accurate for large x.
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x >= 0.0 {
        gamma_q(0.5, x * x)
    } else {
        1.0 + gamma_p(0.5, x * x)
    }
}
