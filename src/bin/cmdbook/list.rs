use std::process::ExitCode;

use clap::Args;

use cmdbook::store::CommandStore;

use crate::style::Style;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Name of the command to display
    pub name: String,
}

pub fn run(store: &CommandStore) -> ExitCode {
    let style = Style::new();
    if store.commands().is_empty() {
        println!("Catalog is empty: {}", store.path().display());
        return ExitCode::SUCCESS;
    }
    for (index, command) in store.commands().iter().enumerate() {
        let steps = command.command.len();
        let noun = if steps == 1 { "step" } else { "steps" };
        println!("{index:>3}  {} ({steps} {noun})", style.bold(&command.name));
    }
    ExitCode::SUCCESS
}

pub fn show(store: &CommandStore, args: &ShowArgs) -> ExitCode {
    let style = Style::new();
    let Some(command) = store.find(&args.name) else {
        eprintln!(
            "No command named '{}' in {}",
            args.name,
            store.path().display()
        );
        return ExitCode::FAILURE;
    };
    println!("{}", style.bold(&command.name));
    for item in &command.command {
        println!("  {}", style.dim(&item.desc));
        println!("    {}", item.cmd);
    }
    ExitCode::SUCCESS
}
