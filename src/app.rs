use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        command,
        ..
    } = cli;

    let ctx = AppContext::bootstrap(profile, json)?;

    match command {
        Command::Encode(args) => commands::encode::run(&ctx, args),
        Command::Split(args) => commands::split::run(&ctx, args),
        Command::Account(args) => commands::account::run(&ctx, args),
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
