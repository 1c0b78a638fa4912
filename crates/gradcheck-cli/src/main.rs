//! CLI entry point for gradcheck.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `gradcheck-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use gradcheck_app::{
    AuditInput, CatalogInput, ExplainOutput, PlanInput, parse_report_json, render_markdown,
    render_plan_markdown, run_audit, run_catalog, run_explain, run_plan, serialize_report,
    status_exit_code, to_renderable, to_renderable_plan,
};
use gradcheck_settings::Overrides;
use gradcheck_types::{AuditEnvelope, AuditStatus, StudentProfile};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "GRADCHECK_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "gradcheck",
    version,
    about = "Degree requirement audits against structured course catalogs"
)]
struct Cli {
    /// Directory that the config file and relative data paths resolve against.
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Path to gradcheck config TOML, relative to --root.
    #[arg(long, default_value = "gradcheck.toml")]
    config: Utf8PathBuf,

    /// Override the catalog data directory.
    #[arg(long)]
    data_dir: Option<String>,

    /// Override the degree-wide minimum credit total.
    #[arg(long)]
    min_total_credits: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug). GRADCHECK_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit a student's completed courses and write the report.
    Audit {
        /// Student profile JSON.
        #[arg(long, conflicts_with_all = ["courses", "catalog_year"])]
        profile: Option<Utf8PathBuf>,

        /// Completed course code (repeatable), used instead of --profile.
        #[arg(long = "course", value_name = "CODE")]
        courses: Vec<String>,

        /// Catalog year, required with --course.
        #[arg(long)]
        catalog_year: Option<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/gradcheck/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/gradcheck/audit.md")]
        markdown_out: Utf8PathBuf,

        /// Exit with code 2 when the audit is incomplete.
        #[arg(long)]
        strict: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/gradcheck/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print the normalized catalog as JSON.
    Catalog,

    /// Print the four-year plan as Markdown.
    Plan,

    /// Explain a satisfaction strategy.
    Explain {
        /// Strategy ID (e.g. "explicit_options", "prefix_match").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Audit {
            ref profile,
            ref courses,
            ref catalog_year,
            ref report_out,
            write_markdown,
            ref markdown_out,
            strict,
        } => {
            let code = match cmd_audit(
                &cli,
                profile.as_deref(),
                courses,
                catalog_year.as_deref(),
                report_out,
                write_markdown.then_some(markdown_out.as_path()),
            ) {
                Ok(status) => status_exit_code(status, strict),
                Err(err) => {
                    eprintln!("gradcheck error: {err:#}");
                    1
                }
            };
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Catalog => cmd_catalog(&cli),
        Commands::Plan => cmd_plan(&cli),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        data_dir: cli.data_dir.clone(),
        min_total_credits: cli.min_total_credits,
    }
}

/// Config file contents; a missing file means defaults.
fn read_config(cli: &Cli) -> anyhow::Result<String> {
    let path = cli.root.join(&cli.config);
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn load_profile(
    profile: Option<&Utf8Path>,
    courses: &[String],
    catalog_year: Option<&str>,
) -> anyhow::Result<StudentProfile> {
    match profile {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read profile: {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("parse profile: {}", path))
        }
        None => {
            let year = catalog_year.context("either --profile or --catalog-year is required")?;
            Ok(StudentProfile::new(year, courses.to_vec()))
        }
    }
}

fn cmd_audit(
    cli: &Cli,
    profile: Option<&Utf8Path>,
    courses: &[String],
    catalog_year: Option<&str>,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<AuditStatus> {
    if !cli.root.is_dir() {
        anyhow::bail!("root does not exist: {}", cli.root);
    }
    let profile = load_profile(profile, courses, catalog_year)?;
    let config_text = read_config(cli)?;

    let output = run_audit(AuditInput {
        root: &cli.root,
        config_text: &config_text,
        overrides: overrides(cli),
        profile,
    })?;

    write_report_file(report_out, &output.envelope).context("write report json")?;

    if let Some(md_path) = markdown_out {
        let md = render_markdown(&to_renderable(&output.envelope));
        write_text_file(md_path, &md).context("write markdown")?;
    }

    let env = &output.envelope;
    let status = match env.status {
        AuditStatus::Complete => "complete",
        AuditStatus::Incomplete => "incomplete",
    };
    let blocks_complete = env.audit.blocks.values().filter(|b| b.is_complete()).count();
    println!(
        "gradcheck: {} ({} / {} credits, {} / {} blocks complete)",
        status,
        env.audit.credits_done,
        env.audit.credits_required,
        blocks_complete,
        env.audit.blocks.len()
    );

    Ok(env.status)
}

fn write_report_file(path: &Utf8Path, envelope: &AuditEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(envelope).context("serialize report")?;
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

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let envelope = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&envelope));

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_catalog(cli: &Cli) -> anyhow::Result<()> {
    let config_text = read_config(cli)?;
    let listing = run_catalog(CatalogInput {
        root: &cli.root,
        config_text: &config_text,
        overrides: overrides(cli),
    })?;
    let json = serde_json::to_string_pretty(&listing).context("serialize catalog")?;
    println!("{}", json);
    Ok(())
}

fn cmd_plan(cli: &Cli) -> anyhow::Result<()> {
    let config_text = read_config(cli)?;
    let output = run_plan(PlanInput {
        root: &cli.root,
        config_text: &config_text,
        overrides: overrides(cli),
    })?;
    print!("{}", render_plan_markdown(&to_renderable_plan(&output.terms)));
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", gradcheck_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_strategies,
        } => {
            eprint!(
                "{}",
                gradcheck_app::format_not_found(&identifier, available_strategies)
            );
            std::process::exit(1);
        }
    }
}
