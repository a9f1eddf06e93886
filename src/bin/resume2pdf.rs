//! CLI binary for resume2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `RenderConfig` and prints per-artifact status lines.

use anyhow::{Context, Result};
use clap::Parser;
use resume2pdf::{generate_to_files, watch, RenderConfig, WatchIteration};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Generate resume.html + resume.pdf from resume.yaml in the CWD
  resume2pdf

  # Different source and destinations
  resume2pdf cv.yaml --html out/cv.html --pdf out/cv.pdf

  # Regenerate on every save of the source file (Ctrl-C to stop)
  resume2pdf --watch

  # Machine-readable run stats
  resume2pdf --json

SOURCE FORMAT:
  A YAML document with top-level scalars (name, location, email, website)
  and sections (skills, experience, awards, education, projects). Any text
  field may contain [label](url) inline links; date fields render their
  hyphens as en-dashes.

LOGGING:
  RUST_LOG overrides the log filter, e.g. RUST_LOG=resume2pdf=debug.
"#;

/// Generate an HTML and PDF resume from a YAML source.
#[derive(Parser, Debug)]
#[command(
    name = "resume2pdf",
    version,
    about = "Generate an HTML and PDF resume from a YAML source",
    long_about = "Convert a structured YAML resume into two artifacts: a standalone HTML \
document and a paginated US-Letter PDF. With --watch, the source file is observed and both \
artifacts are regenerated on every save.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// YAML source document.
    #[arg(default_value = "resume.yaml")]
    input: PathBuf,

    /// Destination of the HTML artifact.
    #[arg(long, default_value = "resume.html")]
    html: PathBuf,

    /// Destination of the PDF artifact.
    #[arg(long, default_value = "resume.pdf")]
    pdf: PathBuf,

    /// Watch the source file and regenerate on change until interrupted.
    #[arg(short, long)]
    watch: bool,

    /// Body font size for the PDF, in points.
    #[arg(long, default_value_t = 10.0)]
    font_size: f32,

    /// Debounce window for watch mode, in milliseconds.
    #[arg(long, default_value_t = 500)]
    debounce: u64,

    /// Print run statistics as JSON instead of status lines.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = RenderConfig::builder()
        .input(&cli.input)
        .html_output(&cli.html)
        .pdf_output(&cli.pdf)
        .font_size_pt(cli.font_size)
        .debounce_ms(cli.debounce)
        .build()
        .context("Invalid configuration")?;

    if cli.watch {
        return run_watch(&cli, &config).await;
    }

    // ── Single run ───────────────────────────────────────────────────────
    let stats = generate_to_files(&config)
        .await
        .context("Generation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else if !cli.quiet {
        println!(
            "{} {}  {}",
            green("✓"),
            bold(&config.html_output.display().to_string()),
            dim(&format!("{} bytes", stats.html_bytes)),
        );
        println!(
            "{} {}  {}",
            green("✓"),
            bold(&config.pdf_output.display().to_string()),
            dim(&format!("{} pages, {} bytes", stats.pdf_pages, stats.pdf_bytes)),
        );
    }

    Ok(())
}

/// Watch mode: generate once, then regenerate per accepted change.
async fn run_watch(cli: &Cli, config: &RenderConfig) -> Result<()> {
    if !cli.quiet {
        println!("{}", bold("resume2pdf — watch mode"));
        println!(
            "Watching {} for changes  {}",
            bold(&config.input.display().to_string()),
            dim("(Ctrl-C to stop)")
        );
    }

    let quiet = cli.quiet;
    watch(config, move |iteration: &WatchIteration| {
        if quiet {
            if let Err(ref e) = iteration.result {
                eprintln!("{} {e}", red("✗"));
            }
            return;
        }
        let stamp = iteration.timestamp.format("%H:%M:%S");
        match &iteration.result {
            Ok(stats) => println!(
                "[{stamp}] {} regenerated  {}",
                green("✓"),
                dim(&format!(
                    "{} pages, {}ms",
                    stats.pdf_pages, stats.total_duration_ms
                )),
            ),
            Err(e) => println!("[{stamp}] {} {e}", red("✗")),
        }
    })
    .await
    .context("Watch failed")?;

    if !cli.quiet {
        println!("\nStopping watcher.");
    }
    Ok(())
}
