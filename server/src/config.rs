//! Command-line and environment configuration.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo-server", about = "REST API for the todo list", version)]
pub struct Cli {
    /// Connection string of the todo store
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://todos.db?mode=rwc",
        global = true
    )]
    pub database_url: String,

    #[arg(long, env = "HOST", default_value = "127.0.0.1", global = true)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3001, global = true)]
    pub port: u16,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Apply the schema migration before listening
        #[arg(long)]
        migrate: bool,
    },

    /// Apply the schema migration and exit
    Migrate,
}

impl Cli {
    /// The subcommand to run; a bare invocation serves without migrating.
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { migrate: false })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
