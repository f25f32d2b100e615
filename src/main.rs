//! task-sorter - checklist priority grouping
//!
//! Prints the unchecked items of a checklist file grouped by priority and
//! ordered by due date.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, error};

use task_sorter::{RunConfig, TaskCollection, TaskError};

#[derive(Parser)]
#[command(name = "task-sorter")]
#[command(version)]
#[command(about = "Group unchecked checklist items by priority and sort them by due date", long_about = None)]
struct Cli {
    /// Checklist file to read
    #[arg(env = "TASK_SORTER_FILE")]
    file: PathBuf,

    /// Print tasks in file order without grouping
    #[arg(long)]
    raw: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig::new(self.file)
            .with_raw(self.raw)
            .with_verbose(self.verbose)
    }
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();

    // Initialize tracing; stdout is reserved for task lines
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&config) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(config: &RunConfig) -> Result<(), TaskError> {
    config.validate()?;

    let mut tasks = TaskCollection::new();
    match tasks.load_file(&config.input) {
        Ok(report) => debug!(
            tasks = report.tasks_added,
            skipped = report.malformed_lines,
            "Loaded {}",
            config.input.display()
        ),
        Err(e) if e.is_recoverable() => error!("{e}"),
        Err(e) => return Err(e),
    }

    if !config.raw {
        tasks.reorder();
    }

    for (priority, group) in tasks.groups() {
        debug!(priority, count = group.len(), "Priority group");
    }

    // A reader that stops early (`| head`) is a normal end of output
    match tasks.write_to(std::io::stdout().lock()) {
        Err(e) if e.is_broken_pipe() => Ok(()),
        result => result,
    }
}
