// gitlog-timesheet - turns commit logs into timesheet reports
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitlog_timesheet_lib::{
    core::{reformat, render_preview, select_entries, DateRange, TimesheetHandoff},
    model::parse_date_bound,
    source::{GitLogReader, LogQuery},
    Config, TimesheetError,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gitlog-timesheet")]
#[command(about = "Compile commit logs into per-day timesheet reports")]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/gitlog-timesheet/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ticket prefix, e.g. MKIS for MKIS-869
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Hours written on each day's primary line
    #[arg(long, global = true)]
    hours: Option<u32>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Raw `DATE: message` log to canonical report
    Reformat {
        /// Log file, stdin when omitted or "-"
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read commits from a git repository and build the report
    Collect {
        /// Any path inside the repository
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Only commits whose author name or email contains this
        #[arg(long)]
        author: Option<String>,

        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,

        /// Emit the raw log instead of the report
        #[arg(long)]
        raw: bool,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show what a report would fill in
    Preview {
        /// Report file, stdin when omitted or "-"
        report: Option<PathBuf>,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,
    },

    /// Write selected entries as JSON for the timesheet filler
    Export {
        /// Report file, stdin when omitted or "-"
        report: Option<PathBuf>,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Re-emit a hand-edited report in canonical form
    Normalize {
        /// Report file, stdin when omitted or "-"
        report: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<TimesheetError>() {
            Some(err) => eprintln!("Error: {}", err.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let log_filter = match verbose {
        0 => "gitlog_timesheet=warn,gitlog_timesheet_lib=warn",
        1 => "gitlog_timesheet=info,gitlog_timesheet_lib=info",
        _ => "gitlog_timesheet=debug,gitlog_timesheet_lib=debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Reformat { input, output } => handle_reformat(&config, input, output),
        Command::Collect {
            repo,
            author,
            since,
            until,
            raw,
            output,
        } => {
            let query = LogQuery {
                author: author.or_else(|| config.git.author.clone()),
                since: date_bound(since)?,
                until: date_bound(until)?,
            };
            handle_collect(&config, &repo, &query, raw, output)
        }
        Command::Preview { report, from, to } => {
            let range = DateRange::new(date_bound(from)?, date_bound(to)?);
            handle_preview(&config, report, &range)
        }
        Command::Export {
            report,
            from,
            to,
            output,
        } => {
            let range = DateRange::new(date_bound(from)?, date_bound(to)?);
            handle_export(&config, report, &range, output)
        }
        Command::Normalize { report, output } => handle_normalize(&config, report, output),
    }
}

/// Config file and environment, then CLI flags on top
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(prefix) = &cli.prefix {
        config.ticket_prefix = prefix.trim().to_string();
    }
    if let Some(hours) = cli.hours {
        config.default_hours = hours;
    }

    config.validate()?;
    tracing::debug!(
        prefix = %config.ticket_prefix,
        hours = config.default_hours,
        "effective config"
    );
    Ok(config)
}

fn date_bound(value: Option<String>) -> Result<Option<String>> {
    Ok(value.map(|v| parse_date_bound(&v)).transpose()?)
}

fn handle_reformat(config: &Config, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let log = read_input(input.as_deref())?;
    let report = reformat(&log, &config.grouper()?, &config.formatter());

    if report.is_empty() {
        eprintln!("No dated commits found in the log.");
        return Ok(());
    }

    write_output(output.as_deref(), &report)
}

fn handle_collect(
    config: &Config,
    repo: &Path,
    query: &LogQuery,
    raw: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let reader = GitLogReader::discover(repo)
        .with_context(|| format!("Failed to open repository at {}", repo.display()))?;
    let log = reader.log_text(query)?;

    if log.is_empty() {
        eprintln!("No commits matched.");
        return Ok(());
    }

    if raw {
        return write_output(output.as_deref(), &format!("{}\n", log));
    }

    let report = reformat(&log, &config.grouper()?, &config.formatter());
    write_output(output.as_deref(), &report)
}

fn handle_preview(config: &Config, report: Option<PathBuf>, range: &DateRange) -> Result<()> {
    let text = read_input(report.as_deref())?;
    let selection = select_entries(&text, &config.parser()?, range);

    if let Some(notice) = selection.notice() {
        println!("{}", notice);
        return Ok(());
    }

    println!("{}", render_preview(selection.entries()));
    Ok(())
}

fn handle_export(
    config: &Config,
    report: Option<PathBuf>,
    range: &DateRange,
    output: Option<PathBuf>,
) -> Result<()> {
    let text = read_input(report.as_deref())?;
    let selection = select_entries(&text, &config.parser()?, range);

    if let Some(notice) = selection.notice() {
        eprintln!("{}", notice);
        return Ok(());
    }

    let handoff = TimesheetHandoff::new(selection.entries());
    tracing::info!(entries = handoff.entries.len(), "exporting entries");
    write_output(output.as_deref(), &format!("{}\n", handoff.to_json()?))
}

fn handle_normalize(config: &Config, report: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let text = read_input(report.as_deref())?;
    let entries = config.parser()?.parse(&text);

    if entries.is_empty() {
        eprintln!("No valid entries found in the report.");
        return Ok(());
    }

    write_output(output.as_deref(), &config.formatter().format_entries(&entries))
}

/// File contents, or all of stdin for no path or "-"
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
