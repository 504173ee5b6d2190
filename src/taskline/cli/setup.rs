use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tl", bin_name = "tl", version)]
#[command(about = "Tasks, boards & notes for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this directory instead of ~/.taskline
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a task
    #[command(visible_alias = "t")]
    Task {
        /// Description; words starting with @ are boards
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Board to put the task on (repeatable)
        #[arg(short, long = "board", value_name = "BOARD")]
        boards: Vec<String>,

        /// Priority: 1 (normal), 2 (medium) or 3 (high)
        #[arg(short, long)]
        priority: Option<String>,

        /// Due date, in the configured date format
        #[arg(short, long)]
        due: Option<String>,
    },

    /// Create a note
    #[command(visible_alias = "n")]
    Note {
        /// Description; words starting with @ are boards
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Board to put the note on (repeatable)
        #[arg(short, long = "board", value_name = "BOARD")]
        boards: Vec<String>,
    },

    /// Check/uncheck tasks
    #[command(visible_alias = "c")]
    Check {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Mark complete tasks as pending again
    Uncheck {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Start/pause tasks
    #[command(visible_alias = "b")]
    Begin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Pause started tasks
    Pause {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Cancel/revive tasks
    Cancel {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Star/unstar items
    #[command(visible_alias = "s")]
    Star {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Copy item descriptions to the clipboard
    #[command(visible_alias = "y")]
    Copy {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Move items to other boards
    #[command(visible_alias = "m")]
    Move {
        ids: String,

        /// New boards; none puts the items on the default board
        boards: Vec<String>,
    },

    /// Edit item descriptions
    #[command(visible_alias = "e")]
    Edit {
        ids: String,

        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Delete items
    #[command(visible_alias = "d")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Archive all complete and canceled tasks
    Clear,

    /// Restore items from the archive
    #[command(visible_alias = "r")]
    Restore {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Permanently remove items from the archive
    Purge {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Update task priority
    #[command(visible_alias = "p")]
    Priority { ids: String, priority: String },

    /// Update task due date
    Due { ids: String, date: String },

    /// Rearrange the IDs of all items
    Refactor,

    /// Search item descriptions
    #[command(visible_alias = "f")]
    Find {
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },

    /// List items by attributes or boards
    #[command(visible_alias = "l")]
    List { terms: Vec<String> },

    /// Display items grouped by creation date
    #[command(visible_alias = "i")]
    Timeline,

    /// Display archived items
    #[command(visible_alias = "a")]
    Archive,
}

/// Joins positional identifier words into one expression.
pub fn id_expression(words: &[String]) -> String {
    words.join(",")
}
