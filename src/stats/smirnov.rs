//! Exact distribution of the one-sided Kolmogorov-Smirnov statistic.
//!
//! For a sample of size `n` from the uniform distribution, the one-sided
//! statistic `D_n+ = max(i/n - U_(i))` has the survival function
//! (Birnbaum & Tingey, 1951):
//!
//! ```text
//! P(D_n+ > d) = (1-d)^n + d * sum_{j=1}^{floor(n(1-d))} C(n,j) (1-d-j/n)^(n-j) (d+j/n)^(j-1)
//! ```
//!
//! Every term is non-negative, so the sum is evaluated in log space without
//! cancellation. The two-sided critical value at significance `alpha` is
//! approximated by the one-sided quantile at `1 - alpha/2`.
//!
//! # Reference
//!
//! Birnbaum, Z. W. & Tingey, F. H. (1951). "One-sided confidence contours
//! for probability distribution functions." Ann. Math. Statist. 22(4):592–596.

/// Maximum bisection steps for [`inverse_cdf`].
const MAX_BISECTION_STEPS: usize = 200;

/// Bracket width at which bisection stops.
const BISECTION_TOLERANCE: f64 = 1e-15;

/// Survival function `P(D_n+ > d)`.
///
/// Returns 1 for `d <= 0` and 0 for `d >= 1`. `n` must be positive.
pub fn survival(n: usize, d: f64) -> f64 {
    debug_assert!(n > 0, "sample size must be positive");
    if d <= 0.0 {
        return 1.0;
    }
    if d >= 1.0 {
        return 0.0;
    }

    let nf = n as f64;
    let ln_d = d.ln();
    let mut total = (1.0 - d).powi(n as i32);
    let mut ln_binom = 0.0f64;

    let j_max = (nf * (1.0 - d)).floor() as usize;
    for j in 1..=j_max.min(n) {
        ln_binom += ((n - j + 1) as f64).ln() - (j as f64).ln();
        let jf = j as f64;
        let base = 1.0 - d - jf / nf;
        if base <= 0.0 {
            continue;
        }
        let ln_term =
            ln_d + ln_binom + (nf - jf) * base.ln() + (jf - 1.0) * (d + jf / nf).ln();
        total += ln_term.exp();
    }
    total.clamp(0.0, 1.0)
}

/// Cumulative distribution `P(D_n+ <= d)`.
pub fn cdf(n: usize, d: f64) -> f64 {
    1.0 - survival(n, d)
}

/// Quantile function: the `d` with `cdf(n, d) = q`.
///
/// Returns 0 for `q <= 0` and 1 for `q >= 1`. Solved by bisection on [0, 1],
/// which always brackets the root since `cdf` is monotone there.
pub fn inverse_cdf(n: usize, q: f64) -> f64 {
    if q <= 0.0 {
        return 0.0;
    }
    if q >= 1.0 {
        return 1.0;
    }

    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    let mut steps = 0;
    while steps < MAX_BISECTION_STEPS && hi - lo > BISECTION_TOLERANCE {
        let mid = 0.5 * (lo + hi);
        if cdf(n, mid) < q {
            lo = mid;
        } else {
            hi = mid;
        }
        steps += 1;
    }
    let d = 0.5 * (lo + hi);
    log::trace!("inverse_cdf(n={}, q={}) = {} after {} steps", n, q, d, steps);
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {} within {}, got {}",
            expected,
            tol,
            actual
        );
    }

    #[test]
    fn test_survival_bounds() {
        assert_eq!(survival(10, 0.0), 1.0);
        assert_eq!(survival(10, -0.5), 1.0);
        assert_eq!(survival(10, 1.0), 0.0);
    }

    #[test]
    fn test_single_observation_is_linear() {
        // D_1+ = 1 - U, so P(D_1+ > d) = 1 - d
        for d in [0.1, 0.25, 0.5, 0.9] {
            assert_close(survival(1, d), 1.0 - d, 1e-15);
        }
        assert_close(inverse_cdf(1, 0.975), 0.975, 1e-12);
    }

    #[test]
    fn test_survival_known_value() {
        assert_close(survival(10, 0.3), 0.13546355559999992, 1e-12);
    }

    #[test]
    fn test_cdf_monotone() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let d = i as f64 / 100.0;
            let c = cdf(20, d);
            assert!(c >= prev - 1e-15, "cdf decreased at d={}", d);
            prev = c;
        }
    }

    #[test]
    fn test_two_sided_table_alpha_005() {
        // Standard two-sided KS table at alpha = 0.05
        assert_close(inverse_cdf(5, 0.975), 0.56328, 1e-4);
        assert_close(inverse_cdf(10, 0.975), 0.40925, 1e-4);
        assert_close(inverse_cdf(20, 0.975), 0.29408, 1e-4);
        assert_close(inverse_cdf(30, 0.975), 0.24170, 1e-4);
    }

    #[test]
    fn test_inverse_cdf_edges() {
        assert_eq!(inverse_cdf(10, 0.0), 0.0);
        assert_eq!(inverse_cdf(10, 1.0), 1.0);
        assert_close(inverse_cdf(10, 0.5), 0.17157867005993976, 1e-9);
    }

    #[test]
    fn test_inverse_cdf_inverts_cdf() {
        for n in [1, 3, 12, 30] {
            for q in [0.1, 0.5, 0.9, 0.995] {
                let d = inverse_cdf(n, q);
                assert_close(cdf(n, d), q, 1e-9);
            }
        }
    }
}
