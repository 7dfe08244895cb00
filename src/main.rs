//! Todo CLI - Main Entry Point
//!
//! Each invocation is one dispatched user action: load state, validate input,
//! dispatch, save, render. The actual implementation is in the `todo_list`
//! library.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use todo_list::{FilterMode, TodoApp, formatting, validation};

/// Todo list manager with single-file JSON persistence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the todo data file
    #[arg(long, default_value = "todos.json")]
    file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new todo
    Add {
        /// Todo text (must not be empty)
        text: String,
    },
    /// Flip a todo between pending and completed
    Toggle {
        /// Todo id
        id: String,
    },
    /// Replace the text of a todo
    Edit {
        /// Todo id
        id: String,
        /// New text (must not be empty)
        text: String,
    },
    /// Remove a todo
    Delete {
        /// Todo id
        id: String,
    },
    /// Set the display filter
    Filter {
        /// Filter mode: all, completed, pending
        mode: String,
    },
    /// Show todos under the current filter
    List {
        /// One-off filter override (does not change the stored filter)
        #[arg(long)]
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut app = TodoApp::new(&args.file)?;

    match args.command {
        Command::Add { text } => {
            let Some(text) = validation::normalize_text(&text) else {
                bail!("Todo text must not be empty");
            };
            let id = app.add(text)?;
            println!("Todo created with ID: {}", id);
        }
        Command::Toggle { id } => {
            let id = validation::normalize_id(&id);
            if app.toggle(&id)? {
                let completed = app.state().find(&id).is_some_and(|t| t.completed);
                println!(
                    "Todo {} marked {}",
                    id,
                    if completed { "completed" } else { "pending" }
                );
            } else {
                println!("No todo with ID: {}", id);
            }
        }
        Command::Edit { id, text } => {
            let Some(text) = validation::normalize_text(&text) else {
                bail!("Todo text must not be empty");
            };
            let id = validation::normalize_id(&id);
            if app.edit(&id, text)? {
                println!("Todo {} updated", id);
            } else {
                println!("No todo with ID: {}", id);
            }
        }
        Command::Delete { id } => {
            let id = validation::normalize_id(&id);
            if app.delete(&id)? {
                println!("Todo {} deleted", id);
            } else {
                println!("No todo with ID: {}", id);
            }
        }
        Command::Filter { mode } => {
            let mode: FilterMode = mode.parse().map_err(anyhow::Error::msg)?;
            app.set_filter(mode)?;
            println!("Filter set to {:?}", mode);
        }
        Command::List { filter } => {
            let filter = match filter {
                Some(f) => f.parse().map_err(anyhow::Error::msg)?,
                None => app.state().filter,
            };
            let output = formatting::format_todos(&app.state().filtered(filter), filter);
            println!("{}", output.trim_end_matches('\n'));
        }
    }

    Ok(())
}
