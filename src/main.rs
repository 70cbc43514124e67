//! sbom-enrich: CycloneDX SBOM supplier enrichment tool.

use clap::Parser;
use sbom_enrich::{enrich_sbom, EnrichError, EnrichOptions};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-enrich")]
#[command(author = "Binarly.io")]
#[command(version)]
#[command(about = "Enrich a CycloneDX SBOM with supplier data (PyPI based)", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    2  Input SBOM missing or not valid JSON
    3  Unexpected error

EXAMPLES:
    # In-place enrichment
    sbom-enrich -i sbom.json

    # Write to a separate file, verbose logs
    sbom-enrich -i sbom.json -o enriched.json -v

    # Slow down registry traffic
    sbom-enrich -i sbom.json --delay 0.5")]
struct Cli {
    /// Path to input SBOM JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Path for enriched SBOM (defaults to overwrite input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Delay between registry requests in seconds
    #[arg(long, default_value = "0.1", env = "SBOM_ENRICH_DELAY", value_parser = parse_delay)]
    delay: Duration,

    /// Registry request timeout in seconds
    #[arg(long, default_value = "10", env = "SBOM_ENRICH_TIMEOUT")]
    timeout: u64,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

/// Parse a delay argument as seconds, rejecting anything `Duration` cannot
/// represent (negative, NaN, infinite, or absurdly large values).
fn parse_delay(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of seconds"))?;
    if secs < 0.0 {
        return Err("delay must not be negative".to_string());
    }
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let output = cli.output.unwrap_or_else(|| cli.input.clone());
    let options = EnrichOptions {
        request_delay: cli.delay,
        timeout: Duration::from_secs(cli.timeout),
    };

    match enrich_sbom(&cli.input, &output, &options) {
        Ok(report) => {
            report.log_summary();
            if !cli.quiet {
                println!(
                    "Components updated: {}\nWritten SBOM: {}",
                    report.components_updated,
                    output.display()
                );
            }
            0
        }
        Err(err @ (EnrichError::Io { .. } | EnrichError::Parse { .. })) => {
            tracing::error!("{err}");
            err.exit_code()
        }
        Err(err) => {
            tracing::error!("unexpected error enriching SBOM: {err}");
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delay_accepts_reasonable_values() {
        assert_eq!(parse_delay("0.1").unwrap(), Duration::from_millis(100));
        assert_eq!(parse_delay("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_delay("2").unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_parse_delay_rejects_unrepresentable_values() {
        assert!(parse_delay("not-a-number").is_err());
        assert!(parse_delay("-1").is_err());
        assert!(parse_delay("nan").is_err());
        assert!(parse_delay("inf").is_err());
        assert!(parse_delay("1e40").is_err());
    }

    #[test]
    fn test_delay_env_fallback() {
        std::env::set_var("SBOM_ENRICH_DELAY", "0.5");
        let cli = Cli::try_parse_from(["sbom-enrich", "-i", "sbom.json"]).unwrap();
        assert_eq!(cli.delay, Duration::from_millis(500));
        std::env::remove_var("SBOM_ENRICH_DELAY");
    }
}
