//! CLI binary for ddr-md2html.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `RenderConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use ddr_md2html::{render_with_config, wrap_document, write_html, RenderConfig, RenderStats};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Render a report fragment to stdout
  md2html report.md

  # Render from stdin
  cat report.md | md2html

  # Standalone page, ready to open or print
  md2html report.md --standalone --title "Flat 103 DDR" -o report.html

  # Model output wrapped in ```markdown fences
  md2html raw_answer.md --clean -o report.html

  # Fragment plus block counters as JSON
  md2html --json report.md > report.json

ENVIRONMENT VARIABLES:
  RUST_LOG                Override the log filter (e.g. ddr_md2html=debug)
  MD2HTML_OUTPUT          Default output path
  MD2HTML_TITLE           Default page title for --standalone
"#;

/// Render diagnostic report Markdown to HTML.
#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Render diagnostic report Markdown to HTML",
    long_about = "Render machine-generated diagnostic report Markdown (headings, lists, \
pipe tables, block quotes, rules and inline emphasis) to an HTML fragment. Table cells \
reading high, medium or low become severity badges.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to render; `-` or absent reads stdin.
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, env = "MD2HTML_OUTPUT")]
    output: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML page with report styling.
    #[arg(long, env = "MD2HTML_STANDALONE")]
    standalone: bool,

    /// Page title used with --standalone.
    #[arg(long, env = "MD2HTML_TITLE", default_value = "Detailed Diagnostic Report")]
    title: String,

    /// Leave high/medium/low table cells as plain text.
    #[arg(long, env = "MD2HTML_NO_BADGES")]
    no_badges: bool,

    /// Strip outer ``` fences, CRLF and invisible characters before rendering.
    #[arg(long, env = "MD2HTML_CLEAN")]
    clean: bool,

    /// Open links in the same tab (no target/rel attributes).
    #[arg(long, env = "MD2HTML_SAME_TAB")]
    same_tab: bool,

    /// Class of the scroll container around tables.
    #[arg(long, env = "MD2HTML_TABLE_CLASS", default_value = "table-wrapper")]
    table_class: String,

    /// Class of the paragraph emitted for a standalone italic line.
    #[arg(long, env = "MD2HTML_CITATION_CLASS", default_value = "citation")]
    citation_class: String,

    /// Output structured JSON (RenderOutput) instead of HTML.
    #[arg(long, env = "MD2HTML_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2HTML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2HTML_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;
    debug!("{:?}", config);

    // ── Read input ───────────────────────────────────────────────────────
    let markdown = read_input(cli.input.as_ref())?;

    // ── Render ───────────────────────────────────────────────────────────
    let mut output = render_with_config(&markdown, &config);
    if cli.standalone {
        output.html = wrap_document(&output.html, &cli.title);
    }

    let body = if cli.json {
        serde_json::to_string_pretty(&output).context("Failed to serialise output")?
    } else {
        output.html
    };

    // ── Write output ─────────────────────────────────────────────────────
    match cli.output {
        Some(ref path) => {
            write_html(path, &body).context("Failed to write output")?;
        }
        None => {
            write_body(&mut io::stdout().lock(), &body).context("Failed to write to stdout")?;
        }
    }

    if !cli.quiet && !cli.json {
        print_summary(&output.stats, cli.output.as_ref());
    }

    Ok(())
}

/// Map CLI args to `RenderConfig`.
fn build_config(cli: &Cli) -> Result<RenderConfig> {
    RenderConfig::builder()
        .severity_badges(!cli.no_badges)
        .clean_input(cli.clean)
        .links_new_tab(!cli.same_tab)
        .table_wrapper_class(cli.table_class.clone())
        .citation_class(cli.citation_class.clone())
        .build()
        .context("Invalid configuration")
}

/// Read the whole input document from a file or stdin.
fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read Markdown from stdin")?;
            Ok(buf)
        }
    }
}

/// Write the body and a trailing newline if it lacks one.
fn write_body<W: Write>(out: &mut W, body: &str) -> io::Result<()> {
    out.write_all(body.as_bytes())?;
    if !body.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}

fn print_summary(stats: &RenderStats, output: Option<&PathBuf>) {
    let target = output
        .map(|p| bold(&p.display().to_string()))
        .unwrap_or_else(|| "stdout".to_string());
    eprintln!(
        "{} {} blocks  →  {}",
        if stats.tables_degraded == 0 {
            green("✔")
        } else {
            cyan("⚠")
        },
        stats.blocks(),
        target,
    );
    eprintln!(
        "   {} headings  /  {} tables  /  {} severity badges",
        dim(&stats.headings.to_string()),
        dim(&stats.tables.to_string()),
        dim(&stats.severity_badges.to_string()),
    );
    if stats.tables_degraded > 0 {
        eprintln!(
            "   {} table run(s) had no body row and were left as raw text",
            stats.tables_degraded
        );
    }
}
