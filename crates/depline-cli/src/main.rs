//! CLI entry point for depline.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `depline-app` crate.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use depline_app::{
    ParseInput, parse_report_json, render_annotations, render_markdown, run_parse,
    runtime_error_report, serialize_report, verdict_exit_code,
};
use depline_settings::Overrides;
use depline_types::ParseReport;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "depline",
    version,
    about = "Extract Maven coordinates from dependency:list output and Bazel WORKSPACE files"
)]
struct Cli {
    /// Path to depline config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "depline.toml")]
    config: Utf8PathBuf,

    /// Override profile (lenient|strict).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log extracted dependencies and rules to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify input lines and write a JSON report.
    Parse {
        /// Input files, read in order. Use `-` for standard input.
        #[arg(required = true)]
        inputs: Vec<Utf8PathBuf>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/depline/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/depline/comment.md")]
        markdown_out: Utf8PathBuf,

        /// Shorthand for `--profile strict`; wins over `--profile`.
        #[arg(long)]
        strict: bool,

        /// Drop `# RULE` lines instead of registering them.
        #[arg(long)]
        no_rules: bool,

        /// Five-part dependency-list lines with an unknown scope (infer|reject).
        #[arg(long)]
        ambiguous_layout: Option<String>,

        /// When to fail the run (never|parse_error).
        #[arg(long)]
        fail_on: Option<String>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/depline/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations for rejected lines from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/depline/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },
}

struct ParseArgs {
    inputs: Vec<Utf8PathBuf>,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
    overrides: Overrides,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Parse {
            inputs,
            report_out,
            write_markdown,
            markdown_out,
            strict,
            no_rules,
            ambiguous_layout,
            fail_on,
        } => {
            let profile = if strict {
                Some("strict".to_string())
            } else {
                cli.profile
            };
            let args = ParseArgs {
                inputs,
                report_out,
                write_markdown,
                markdown_out,
                overrides: Overrides {
                    profile,
                    ambiguous_layout,
                    rules: no_rules.then_some(false),
                    fail_on,
                },
            };
            cmd_parse(&cli.config, args)
        }
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or `info` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_parse(config: &Utf8Path, args: ParseArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(config)?;

        let output = run_parse(ParseInput {
            inputs: &args.inputs,
            config_text: &cfg_text,
            overrides: args.overrides.clone(),
        })?;

        write_report_file(&args.report_out, &output.report).context("write report json")?;

        if args.write_markdown {
            let md = render_markdown(&output.report);
            write_text_file(&args.markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(&args.report_out, &report);
            eprintln!("depline error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing config file is allowed (defaults apply); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn write_report_file(path: &Utf8Path, report: &ParseReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(report_path: &Utf8Path) -> anyhow::Result<ParseReport> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;

    for annotation in render_annotations(&report, max) {
        println!("{}", annotation);
    }

    Ok(())
}
