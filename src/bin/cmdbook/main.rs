mod edit;
mod list;
mod style;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cmdbook::open_store;

#[derive(Parser, Debug)]
#[command(name = "cmdbook", about = "Catalog of named shell command recipes")]
struct Cli {
    /// Path to the catalog file (defaults to config.yaml next to the executable)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every command in the catalog
    List,
    /// Show the steps of a single command
    Show(list::ShowArgs),
    /// Add a new command to the catalog
    Add(edit::AddArgs),
    /// Remove the command at the given position
    Remove(edit::RemoveArgs),
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut store = open_store(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Show(ref args)) => Ok(list::show(&store, args)),
        Some(Commands::Add(args)) => edit::add(&mut store, args),
        Some(Commands::Remove(ref args)) => edit::remove(&mut store, args),
        Some(Commands::List) | None => Ok(list::run(&store)),
    }
}
