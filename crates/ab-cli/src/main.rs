//! abstat CLI
//!
//! `abstat <metric> <json-payload>` computes Bayesian A/B-test decision
//! metrics from two arms' summary statistics and prints one JSON result
//! object.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "abstat")]
#[command(about = "Bayesian A/B-test decision metrics from per-arm summary statistics")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Metric family of the experiment
    #[arg(value_enum)]
    metric: Metric,

    /// JSON payload: {"users":[n_a,n_b],"count":[x_a,x_b],"mean":[m_a,m_b],"stddev":[s_a,s_b]}
    payload: String,

    /// Complement of the credible level (0.05 = 95% interval)
    #[arg(long, default_value = "0.05")]
    ccr: f64,

    /// Output file for results (pretty JSON). Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Metric {
    /// Conversion-rate outcomes (successes / trials)
    Binomial,
    /// Continuous outcomes summarized by mean / stddev / n
    Normal,
}

/// Per-arm summary statistics, two entries per key (arm A, arm B).
///
/// `users` is always required; `count` only feeds the binomial path and
/// `mean`/`stddev` only the normal path.
#[derive(Debug, Deserialize)]
struct Payload {
    users: [u64; 2],
    #[serde(default)]
    count: Option<[u64; 2]>,
    #[serde(default)]
    mean: Option<[f64; 2]>,
    #[serde(default)]
    stddev: Option<[f64; 2]>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let payload: Payload =
        serde_json::from_str(&cli.payload).context("invalid JSON payload")?;

    let result = match cli.metric {
        Metric::Binomial => {
            let count = payload
                .count
                .context("binomial metric requires a \"count\" key with two entries")?;
            ab_inference::binomial_ab_test(
                count[0],
                payload.users[0],
                count[1],
                payload.users[1],
                cli.ccr,
            )?
        }
        Metric::Normal => {
            let mean = payload
                .mean
                .context("normal metric requires a \"mean\" key with two entries")?;
            let stddev = payload
                .stddev
                .context("normal metric requires a \"stddev\" key with two entries")?;
            ab_inference::gaussian_ab_test(
                mean[0],
                stddev[0],
                payload.users[0],
                mean[1],
                stddev[1],
                payload.users[1],
                cli.ccr,
            )?
        }
    };

    tracing::info!(chance_to_win = result.chance_to_win, "test complete");
    write_json(cli.output.as_ref(), serde_json::to_value(&result)?)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
