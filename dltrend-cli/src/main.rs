mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use config::ConfigMerger;
use dltrend_core::adapters::{FixedClock, FsWritePort, SystemClock};
use dltrend_core::pipeline::{run_render, run_summary, write_chart};
use dltrend_core::ports::Clock;
use dltrend_render::{render_series_json, render_series_md, render_series_text};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "dltrend",
    version,
    about = "Render the cumulative downloads trend chart."
)]
struct Cli {
    /// Config file (default: ./dltrend.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Date of the trailing "unreleased" point, as YYYY-MM-DD (default: today).
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw the chart and write it as PNG (the default).
    Render(RenderArgs),
    /// Print the cumulative series without drawing.
    Table(TableArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Render(RenderArgs::default())
    }
}

#[derive(Debug, Default, Parser)]
struct RenderArgs {
    /// Output PNG path (default: miscellaneous/cumulative_downloads_trend.png).
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Output resolution in dots per inch (default: 150).
    #[arg(long)]
    dpi: Option<u32>,
}

#[derive(Debug, Parser)]
struct TableArgs {
    /// Output format (text, json, md).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Md,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    dltrend_domain::parse_day(value).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(&e),
    };
    if let Err(e) = real_main(cli) {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

/// Help and version requests exit 0; any other usage error exits 1.
fn usage_exit(e: &clap::Error) -> ExitCode {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(0),
        _ => ExitCode::from(1),
    }
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let file_config = config::load_or_default(Utf8Path::new("."), cli.config.as_deref())
        .context("load dltrend.toml config")?;
    let merger = ConfigMerger::new(file_config);

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    match cli.cmd.unwrap_or_default() {
        Command::Render(args) => cmd_render(args, merger, clock.as_ref()),
        Command::Table(args) => cmd_table(args, merger, clock.as_ref()),
    }
}

fn cmd_render(args: RenderArgs, merger: ConfigMerger, clock: &dyn Clock) -> anyhow::Result<()> {
    let settings = merger.merge_render_args(args.out.as_deref(), args.dpi);
    debug!(
        "merged settings: out={}, dpi={}, padding={:?}",
        settings.out_path, settings.style.dpi, settings.padding
    );

    let outcome = run_render(&settings, clock)?;
    write_chart(&outcome, &settings.out_path, &FsWritePort)
        .with_context(|| format!("save chart to {}", settings.out_path))?;
    Ok(())
}

fn cmd_table(args: TableArgs, merger: ConfigMerger, clock: &dyn Clock) -> anyhow::Result<()> {
    let padding = merger.merge_table_args();
    let summary = run_summary(&padding, clock)?;

    match args.format {
        OutputFormat::Text => print!("{}", render_series_text(&summary)),
        OutputFormat::Json => println!(
            "{}",
            render_series_json(&summary).context("serialize series")?
        ),
        OutputFormat::Md => print!("{}", render_series_md(&summary)),
    }
    Ok(())
}
