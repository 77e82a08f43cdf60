use std::process::ExitCode;

use clap::Args;

use cmdbook::commands::command::Command;
use cmdbook::commands::item::CommandItem;
use cmdbook::store::CommandStore;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name of the new command
    pub name: String,

    /// Description of a step, paired with --cmd by position (repeatable)
    #[arg(long = "desc", required = true)]
    pub desc: Vec<String>,

    /// Command text of a step, paired with --desc by position (repeatable)
    #[arg(long = "cmd", required = true)]
    pub cmd: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Position of the command to remove, as shown by `list`
    pub index: usize,
}

pub fn add(
    store: &mut CommandStore,
    args: AddArgs,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if args.desc.len() != args.cmd.len() {
        eprintln!(
            "Each --desc needs a matching --cmd ({} descriptions, {} commands)",
            args.desc.len(),
            args.cmd.len()
        );
        return Ok(ExitCode::FAILURE);
    }
    let command = Command {
        name: args.name,
        command: args
            .desc
            .into_iter()
            .zip(args.cmd)
            .map(|(desc, cmd)| CommandItem { desc, cmd })
            .collect(),
    };
    let name = command.name.clone();
    store.add(command)?;
    println!("Added '{name}' ({} commands total)", store.commands().len());
    Ok(ExitCode::SUCCESS)
}

pub fn remove(
    store: &mut CommandStore,
    args: &RemoveArgs,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let removed = store.remove(args.index)?;
    println!("Removed '{}'", removed.name);
    Ok(ExitCode::SUCCESS)
}
