mod cli;
mod error;
mod input;
mod output;

use std::fs::File;
use std::io::{BufRead, BufReader};

use clap::Parser;

use cli::Cli;
use error::{exit_with_error, CliError, CliResult};
use graphwash_trig::StreamDriver;
use input::{LineDisposition, LineFilter};
use output::RecordWriter;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off"
    //   --verbose → "info" level, or RUST_LOG when set
    //   default  → "off" (clean terminal; use --verbose to see logs)
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let filter = LineFilter::from_cli(
        cli.exclude.clone(),
        cli.exclude_file.as_deref(),
        cli.ignore_prefix.clone(),
    )?;

    let reader = BufReader::new(File::open(&cli.input).map_err(|e| {
        CliError::Input(format!("cannot open {}: {e}", cli.input.display()))
    })?);
    let writer = RecordWriter::create(&cli.output).map_err(|e| {
        CliError::Input(format!("cannot create {}: {e}", cli.output.display()))
    })?;

    let mut driver = StreamDriver::new(writer);
    let mut lines_excluded = 0usize;
    let mut lines_passed_through = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        match filter.dispose(&line) {
            LineDisposition::Drop => {
                lines_excluded += 1;
                tracing::debug!(line = line_number, "line excluded");
            }
            LineDisposition::PassThrough => {
                lines_passed_through += 1;
                driver.sink_mut().passthrough(&line);
            }
            LineDisposition::Process => {
                if let Err(err) = driver.feed_line(&line) {
                    if cli.keep_going {
                        tracing::warn!(line = line_number, %err, "graph aborted; continuing");
                        driver.abandon_graph();
                    } else {
                        return Err(CliError::Parse {
                            line: line_number,
                            source: err,
                        });
                    }
                }
            }
        }
    }

    let (writer, stats) = driver.finish();
    writer.finish()?;

    if !cli.quiet {
        println!("------------------------------");
        println!("Graphs completed:     {}", stats.graphs_completed);
        println!("Statements emitted:   {}", stats.statements_emitted);
        println!("Statements skipped:   {}", stats.statements_skipped);
        println!("Lines excluded:       {lines_excluded}");
        println!("Lines passed through: {lines_passed_through}");
        println!("------------------------------");
    }

    Ok(())
}
