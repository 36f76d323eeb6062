mod args;
mod render;
mod session;
mod transport;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands};
use session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::List);
    if let Commands::Health = command {
        println!("{}", session::health(&cli.api_url)?);
        return Ok(());
    }

    let mut session = Session::load(&cli.api_url)?;
    match command {
        Commands::List | Commands::Health => {}
        Commands::Add { title } => {
            let todo = session.add(&title.join(" "))?;
            println!("Added {}", render::todo_line(&todo));
        }
        Commands::Toggle { id } => {
            let todo = session.toggle(id)?;
            println!("Updated {}", render::todo_line(&todo));
        }
        Commands::Rename { id, title } => {
            let todo = session.rename(id, &title.join(" "))?;
            println!("Renamed {}", render::todo_line(&todo));
        }
        Commands::Delete { id } => {
            session.delete(id)?;
            println!("Deleted {id}");
        }
        Commands::ClearCompleted => {
            let deleted = session.clear_completed()?;
            println!("Cleared {deleted} completed");
        }
    }
    print!("{}", render::render(session.todos(), cli.filter));
    Ok(())
}
