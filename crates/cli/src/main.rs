use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use polystack::{stack_digits, StackCfg};
use std::io::{BufRead, Write};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

const DEFAULT_DIGITS: &str = "6031301721";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "polystack")]
#[command(about = "Stack regular polygons built from the digits of a number")]
#[command(version = polystack::VERSION)]
struct Cmd {
    /// Digits to stack; `-` reads one line from stdin
    #[arg(default_value = DEFAULT_DIGITS)]
    digits: String,

    /// Side length shared by every polygon
    #[arg(long, default_value_t = 1.0)]
    side_length: f64,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log at debug level (one event per placed polygon)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    run(cmd)
}

fn run(cmd: Cmd) -> Result<()> {
    let input = if cmd.digits == "-" {
        read_stdin_line()?
    } else {
        cmd.digits
    };
    let cfg = StackCfg {
        side_length: cmd.side_length,
        ..StackCfg::default()
    };
    let stack = stack_digits(&input, cfg).with_context(|| format!("stacking {input:?}"))?;
    tracing::info!(
        input,
        sorted = stack.digit_string(),
        polygons = stack.polygons().len(),
        height = stack.height(),
        "stack"
    );
    for (i, p) in stack.polygons().iter().enumerate() {
        tracing::debug!(i, n = p.shape().n(), center_y = p.center().y, "placed");
    }

    let out = match cmd.format {
        Format::Text => report::render_text(&stack),
        Format::Json => report::render_json(&stack)?,
    };
    std::io::stdout()
        .lock()
        .write_all(out.as_bytes())
        .context("writing to stdout")?;
    Ok(())
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading digits from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
