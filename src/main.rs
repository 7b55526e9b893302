use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculette_rs::config::{Config, Variant};
use calculette_rs::run;

/// Console calculator: `<number1><operation><number2>`.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Only + - * /, without ^ and superscript exponents
    #[arg(long)]
    basic: bool,

    /// Significant digits shown in results (1-17)
    #[arg(long, default_value_t = Config::DEFAULT_DIGITS)]
    digits: usize,
}

fn main() {
    // Логи идут в stderr, чтобы не смешиваться с выводом калькулятора
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let variant = if cli.basic {
        Variant::Basic
    } else {
        Variant::Extended
    };
    let config = Config::with_variant(variant).digits(cli.digits);

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
