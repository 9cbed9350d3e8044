use anyhow::Result;
use clap::Parser;
use colsel::{input::open_input, parse_specs, run};
use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::exit,
};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Select, rename and pin columns of whitespace-delimited text by header name.
///
/// The first input line is the header. Every following line is split on
/// whitespace, lowercased and re-emitted with the requested columns in
/// argument order. Lines whose column count differs from the header are
/// reported on stderr and skipped.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Columns to emit: NAME, NAME:ALIAS, NAME=LITERAL or NAME:ALIAS=LITERAL
    #[arg(value_name = "SPEC", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    specs: Vec<String>,

    /// Read from PATH instead of stdin ("-" also means stdin)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = execute(&cli) {
        eprintln!("{}", error_message(&err));
        exit(1);
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let specs = parse_specs(&cli.specs);
    debug!(?specs, "parsed column specs");

    let input = open_input(cli.input.as_deref())?;
    let output = BufWriter::new(io::stdout().lock());
    run(input, output, io::stderr(), &specs)?;

    Ok(())
}

/// One-line error report with the whole context chain.
fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}
