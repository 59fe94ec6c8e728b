//! Plain-text rendering of generation and test results.
//!
//! Every function returns a `String` so callers decide where it goes.

use std::fmt::Write;

use crate::random::multiplier::GenerationStep;
use crate::session::Sequence;
use crate::stats::ks_test::{critical_value_for_alpha, KsResult, KsRow, KsTable, CHART_ALPHAS};

/// Label of the trailing maximum row.
const MAX_ROW_LABEL: &str = "Max value";

/// Renders the generation steps, one row per iteration (1-based).
pub fn generation_table(steps: &[GenerationStep]) -> String {
    let product_width = steps
        .iter()
        .map(|s| s.product.len())
        .max()
        .unwrap_or(0)
        .max("Product".len());
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>9}  {:>12}  {:>12}  {:>pw$}  {:>6}  {:>6}  {:>6}",
        "Iteration",
        "Seed",
        "Constant",
        "Product",
        "Length",
        "Middle",
        "ri",
        pw = product_width
    );
    for (i, step) in steps.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>9}  {:>12}  {:>12}  {:>pw$}  {:>6}  {:>6}  {:>6.4}",
            i + 1,
            step.seed_before,
            step.constant,
            step.product,
            step.digit_count,
            step.middle,
            step.ri,
            pw = product_width
        );
    }
    out
}

/// Renders the pseudo-random numbers, one per line (1-based).
pub fn sequence_table(sequence: &Sequence) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:>6}", "Data", "ri");
    for (i, ri) in sequence.values().iter().enumerate() {
        let _ = writeln!(out, "{:>5}  {:>6.4}", i + 1, ri);
    }
    out
}

/// Renders the KS table with its trailing maximum row.
pub fn ks_table(table: &KsTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>9}  {:>10}  {:>11}  {:>10}",
        "Number", "Empirical", "Theoretical", "Difference"
    );
    for row in table.rows() {
        match row {
            KsRow::Observation(obs) => {
                let _ = writeln!(
                    out,
                    "{:>9}  {:>10.4}  {:>11.4}  {:>10.4}",
                    obs.index, obs.empirical, obs.theoretical, obs.deviation
                );
            }
            KsRow::Maximum { deviation } => {
                let _ = writeln!(
                    out,
                    "{:>9}  {:>10}  {:>11}  {:>10.4}",
                    MAX_ROW_LABEL, "", "", deviation
                );
            }
        }
    }
    out
}

/// Critical value line followed by the verdict.
pub fn verdict(result: &KsResult) -> String {
    let decision = if result.uniform {
        "Fails to reject the null hypothesis: the numbers are uniform"
    } else {
        "Rejects the null hypothesis: the numbers are not uniform"
    };
    format!(
        "Kolmogorov-Smirnov critical value (n={}, {}% confidence) is {}\n\
         Maximum difference {} {} critical value\n{}\n",
        result.sample_size,
        result.confidence_percent,
        result.critical_value,
        result.max_deviation,
        if result.uniform { "<" } else { ">=" },
        decision
    )
}

/// Chart of two-sided critical values for `n = 1..=max_n`.
///
/// Stands in for the printed KS table usually consulted by hand.
pub fn critical_value_chart(max_n: usize) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>4}", "n");
    for alpha in CHART_ALPHAS {
        let label = format!("a={:.2}", alpha);
        let _ = write!(out, "  {:>7}", label);
    }
    out.push('\n');
    for n in 1..=max_n {
        let _ = write!(out, "{:>4}", n);
        for alpha in CHART_ALPHAS {
            // n >= 1, so the lookup cannot fail
            let value = critical_value_for_alpha(n, alpha).unwrap_or(f64::NAN);
            let _ = write!(out, "  {:>7.5}", value);
        }
        out.push('\n');
    }
    out
}
