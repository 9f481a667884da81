//! tfmodscan CLI entry point.

use std::process::ExitCode;
use tfmodscan::cli::Cli;
use tfmodscan::reporter::Reporter;
use tfmodscan::{ScanError, Scanner};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse_normalized();

    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Scan failed");

            eprintln!("Error walking directories: {e}");

            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut i = 0;
                while let Some(cause) = source {
                    eprintln!("  {i}: {cause}");
                    source = cause.source();
                    i += 1;
                }
            }

            let code = e
                .downcast_ref::<ScanError>()
                .map_or(1, ScanError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let base_level = match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::new(format!("warn,tfmodscan={base_level}"))
        })
    };

    // Logs go to stderr, stdout carries the report only.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.to_config();
    tracing::debug!(?config, "Configuration built from arguments");

    let modules = Scanner::new(config.clone()).scan_path(&cli.dir)?;

    println!("{}", Reporter::new(&config).report(&modules));

    Ok(())
}
