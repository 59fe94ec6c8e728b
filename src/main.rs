//! Command-line front end for the middle-digits generator and KS test.
//!
//! # Usage
//!
//! ```bash
//! # Generate 10 values and test them at 95% confidence
//! middle-ks --seed 1234 --constant 5678 --iterations 10
//!
//! # Re-test the same sequence at several confidence levels
//! middle-ks -s 5735 -k 3267 -n 30 -c 90 -c 95 -c 99
//!
//! # Also print the critical value chart for n = 1..=30
//! middle-ks -s 5735 -k 3267 -n 30 --critical-table
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};

use middle_ks::utils::digits::parse_confidence;
use middle_ks::{report, GeneratorConfig, Session, MAX_ITERATIONS};

/// Middle-digits pseudo-random generator with a Kolmogorov-Smirnov uniformity test
#[derive(Parser, Debug)]
#[command(name = "middle-ks")]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed (positive, even number of digits)
    #[arg(short, long)]
    seed: String,

    /// Constant multiplier (positive, even number of digits)
    #[arg(short = 'k', long)]
    constant: String,

    /// Number of values to generate (1 to 30)
    #[arg(short = 'n', long)]
    iterations: String,

    /// Confidence level in percent; repeat to test several levels
    #[arg(short, long, default_value = "95")]
    confidence: Vec<String>,

    /// Print the two-sided critical value chart
    #[arg(long)]
    critical_table: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Logger honoring the filter variable of `env`, defaulting to `info`.
///
/// `--debug` forces the global level to `debug` regardless of the variable.
fn logger_builder(debug: bool, env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or("info"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger_builder(args.debug, Env::default()).init();

    let config = GeneratorConfig::from_input(&args.seed, &args.constant, &args.iterations)
        .context("Invalid generator input")?;
    log::info!(
        "Generating {} values from seed {} and constant {}",
        config.iterations(),
        config.seed(),
        config.constant()
    );

    let session = Session::start(config).context("Generation failed")?;

    println!("Constant multiplier table");
    println!("{}", report::generation_table(session.steps()));
    println!("Pseudo-random numbers");
    println!("{}", report::sequence_table(session.sequence()));

    for raw in &args.confidence {
        let confidence = parse_confidence(raw)
            .with_context(|| format!("Invalid confidence level '{}'", raw))?;
        log::info!("Evaluating at {}% confidence", confidence);

        let table = session
            .evaluate_table(confidence)
            .context("Kolmogorov-Smirnov evaluation failed")?;
        println!("Kolmogorov-Smirnov table ({}% confidence)", confidence);
        println!("{}", report::ks_table(&table));
        println!("{}", report::verdict(table.result()));
    }

    if args.critical_table {
        println!("Kolmogorov-Smirnov critical values");
        println!("{}", report::critical_value_chart(MAX_ITERATIONS as usize));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    fn max_level(debug: bool, var: &str) -> LevelFilter {
        logger_builder(debug, Env::new().filter(var)).build().filter()
    }

    #[test]
    fn test_logger_defaults_to_info() {
        std::env::remove_var("MIDDLE_KS_LOG_UNSET");
        assert_eq!(max_level(false, "MIDDLE_KS_LOG_UNSET"), LevelFilter::Info);
    }

    #[test]
    fn test_logger_honors_filter_variable() {
        std::env::set_var("MIDDLE_KS_LOG_WARN", "warn");
        assert_eq!(max_level(false, "MIDDLE_KS_LOG_WARN"), LevelFilter::Warn);
        std::env::set_var("MIDDLE_KS_LOG_TRACE", "trace");
        assert_eq!(max_level(false, "MIDDLE_KS_LOG_TRACE"), LevelFilter::Trace);
    }

    #[test]
    fn test_logger_debug_flag_overrides() {
        std::env::set_var("MIDDLE_KS_LOG_ERROR", "error");
        assert_eq!(max_level(true, "MIDDLE_KS_LOG_ERROR"), LevelFilter::Debug);
    }
}
