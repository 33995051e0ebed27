use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init, wrap::wrap},
};

/// Dispatch to the handler of the selected command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Wrap(cmd)) => wrap(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
