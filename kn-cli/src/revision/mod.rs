pub mod delete;

use std::io;

use clap::Subcommand;
use kn_core::prelude::*;

#[derive(Subcommand)]
pub enum RevisionSubcommand {
    #[command(
        about = "delete one or more revisions",
        visible_aliases = &["del", "rm"],
        after_help = "Examples:\n  # Delete a revision 'svc1-abcde' in the default namespace\n  kn revision delete svc1-abcde",
    )]
    Delete(delete::Args),
}

pub async fn cmd(subcommand: &RevisionSubcommand) -> EmptyResult {
    match subcommand {
        RevisionSubcommand::Delete(args) => delete::cmd(args, &mut io::stdout().lock()).await,
    }
}

#[cfg(test)]
mod tests;
