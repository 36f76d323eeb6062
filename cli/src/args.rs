use clap::{Parser, Subcommand};
use todo_core::Filter;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Terminal client for the todo API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the todo API
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:3001", global = true)]
    pub api_url: String,

    /// Which todos to show: all, active or completed
    #[arg(short, long, default_value = "all", global = true)]
    pub filter: Filter,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the todo list
    #[command(alias = "ls")]
    List,

    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Title of the todo
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Flip a todo between active and completed
    #[command(alias = "t")]
    Toggle { id: i64 },

    /// Change the title of a todo
    Rename {
        id: i64,
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete { id: i64 },

    /// Delete every completed todo
    ClearCompleted,

    /// Check that the API is up
    Health,
}
