#![cfg_attr(coverage, feature(coverage_attribute))]
mod revision;

use clap::{
    crate_version,
    Parser,
    Subcommand,
};
use kn_core::logging;
use kn_core::prelude::*;

#[derive(Parser)]
#[command(about = "command-line client for Knative Serving", version, propagate_version = true)]
struct KnCommandRoot {
    #[command(subcommand)]
    subcommand: KnSubcommand,

    #[arg(short, long, global = true, default_value = DEFAULT_VERBOSITY)]
    verbosity: String,
}

#[derive(Subcommand)]
enum KnSubcommand {
    #[command(subcommand, about = "manage revisions", visible_alias = "rev")]
    Revision(revision::RevisionSubcommand),

    #[command(about = "kn version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = KnCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        KnSubcommand::Revision(subcommand) => revision::cmd(subcommand).await,
        KnSubcommand::Version => {
            println!("{KN_BINARY_NAME} {}", crate_version!());
            Ok(())
        },
    }
}
