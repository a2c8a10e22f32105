use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::{add, categories, delete, edit, history, list, report, util, week};
use tl_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let store = config.store()?;
    let now = util::local_now();
    let today = now.date();
    let date = util::resolve_day(cli.day.as_deref(), today)?;
    let mut out = io::stdout().lock();

    match command {
        Commands::List => list::run(&mut out, &store, date)?,
        Commands::Add {
            category,
            description,
            at,
            new,
        } => {
            let args = add::AddArgs {
                category: category.clone(),
                description: description.join(" "),
                at: at.clone(),
                allow_new: *new,
            };
            add::run(&mut out, &store, date, &args, now)?;
        }
        Commands::Edit {
            number,
            at,
            category,
            description,
        } => {
            let args = edit::EditArgs {
                number: *number,
                at: at.clone(),
                category: category.clone(),
                description: description.clone(),
            };
            edit::run(&mut out, &store, date, &args)?;
        }
        Commands::Delete { number } => delete::run(&mut out, &store, date, *number)?,
        Commands::Categories { add } => categories::run(&mut out, &store, date, add.as_deref())?,
        Commands::Report { compact, json } => {
            let style = if *json {
                report::Style::Json
            } else if *compact {
                report::Style::Compact
            } else {
                report::Style::Detailed
            };
            let engine = config.report_engine()?;
            report::run(&mut out, &store, &engine, date, now, style)?;
        }
        Commands::History { days } => {
            let engine = config.report_engine()?;
            history::run(&mut out, &store, &engine, today, *days, now)?;
        }
        Commands::Week => week::run(&mut out, &store, today)?,
    }

    Ok(())
}
