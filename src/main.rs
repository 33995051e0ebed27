use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use i18nexus::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitStatus::Success,
                _ => ExitStatus::Failure,
            }
            .into();
        }
    };

    match i18nexus::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Failure.into()
        }
    }
}
