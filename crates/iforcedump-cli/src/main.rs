use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use glob::glob;
use iforcedump_core::OutputFormat;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "iforcedump")]
#[command(version)]
#[command(
    about = "Decode IForce force-feedback USB dumps into a readable report or SDL haptic code.",
    long_about = None,
    after_help = "Examples:\n  iforcedump capture.txt\n  iforcedump capture.txt --sdl > effects.c\n  iforcedump 'captures/wheel-*.txt'"
)]
struct Cli {
    /// Path to a text dump (`<timestamp>\t<hex>` per line); if no such file exists,
    /// it is expanded as a glob that must match one file
    input: PathBuf,

    /// Emit SDL haptic code instead of the text report
    #[arg(long)]
    sdl: bool,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match cmd_decode(&cli.input, cli.sdl) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

/// Diagnostics go to stderr so stdout carries only rendered output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_decode(input: &Path, sdl: bool) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(input)?;
    validate_input_file(&resolved_input)?;

    let format = if sdl {
        OutputFormat::Sdl
    } else {
        OutputFormat::Text
    };
    debug!(input = %resolved_input.display(), ?format, "decoding dump");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats =
        iforcedump_core::render_dump_file(&resolved_input, format.renderer().as_ref(), &mut out)
            .with_context(|| format!("Failed to decode dump: {}", resolved_input.display()))?;
    debug!(
        packets = stats.packets,
        records = stats.records,
        "dump decoded"
    );
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a text dump with one `<timestamp>\\t<hex>` line per packet".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a single dump file, not a directory".to_string()),
        ));
    }
    Ok(())
}

/// Existing paths are taken literally, so names like `capture[1].txt` work;
/// only a path that does not exist is tried as a glob pattern.
fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if input.exists() || !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let invalid = |detail: String| {
        CliError::new(
            format!("invalid input pattern '{pattern}'"),
            Some(format!("pattern error: {detail}")),
        )
    };
    let mut matches = Vec::new();
    for entry in glob(&pattern).map_err(|err| invalid(err.msg.to_string()))? {
        let path = entry.map_err(|err| invalid(err.to_string()))?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{pattern}'"),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{pattern}' ({count} matches); \
                     matches: {listed}{more}"
                ),
                Some("pass a single dump file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
