use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{bail, Context};
use clap::Parser;
use cpplex::{
    classifier::classifier::classify,
    config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT},
    lexer::lexer::tokenize,
    render_error,
    report::{csv::write_csv, table::render_table},
};
use log::{debug, error, info};

/// Builds the lexical-components table of a C++ subset source file
#[derive(Parser, Debug)]
#[command(name = "cpplex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Builds the lexical-components table of a C++ subset source file", long_about = None)]
struct Cli {
    /// Source file to analyze
    #[arg(env = "CPPLEX_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Path of the CSV export
    #[arg(short, long, env = "CPPLEX_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Skip the CSV export
    #[arg(long)]
    no_csv: bool,

    /// Print the source before the table
    #[arg(long)]
    echo_source: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            csv_output: if cli.no_csv { None } else { Some(cli.output) },
            echo_source: cli.echo_source,
            verbose: cli.verbose,
        }
    }
}

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .format_timestamp_micros()
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("analysis of {} failed", config.input_label());
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let source = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read {}", config.input.display()))?;
    debug!("read {} bytes from {}", source.len(), config.input.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.echo_source {
        writeln!(out, "Code read from file:\n{}", source)?;
    }

    let start = Instant::now();
    let tokens = match tokenize(&source, Some(config.input_label())) {
        Ok(tokens) => tokens,
        Err(error) => bail!("{}", render_error(&error, &source)),
    };
    info!("tokenized in {:?}", start.elapsed());

    let rows = classify(&tokens);

    writeln!(out, "{}", render_table(&rows))?;
    out.flush()?;

    if let Some(path) = &config.csv_output {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_csv(&rows, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {} rows to {}", rows.len(), path.display());
    }

    Ok(())
}
