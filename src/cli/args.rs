// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the notes slot (overrides the config file)
    #[arg(short, long, value_name = "DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (add, delete, list, or view)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a note; blank title or content is ignored
    Add {
        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Delete a note by id
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// List notes with id, title and first line of content
    List {
        /// Output the stored JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render the notes page and open it in the browser
    View {
        /// Write the HTML to stdout instead of opening a browser
        #[arg(long)]
        print: bool,
    },
}
