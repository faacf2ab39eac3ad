use std::io::Write;

use kn_core::bulk;
use kn_core::deleter::NamespacedDeleter;
use kn_core::params::KubeParams;
use kn_core::prelude::*;
use kube::Resource;
use tracing::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(required = true, value_name = "NAME", long_help = "name(s) of the revision(s) to delete")]
    pub names: Vec<String>,

    #[command(flatten)]
    pub kube: KubeParams,
}

// Per-revision failures are printed to `out` and do not fail the command; only problems that stop
// us from starting the batch at all (no names, no namespace, no client) are returned as errors.
pub async fn cmd(args: &Args, out: &mut impl Write) -> EmptyResult {
    bulk::require_identifiers(&args.names, &Revision::kind(&()))?;

    let config = args.kube.load_config().await?;
    let namespace = args.kube.namespace(&config)?;
    let client = args.kube.client(config)?;

    let deleter = NamespacedDeleter::<Revision>::new(client, &namespace);
    let report = bulk::execute(&args.names, &namespace, &deleter, out).await?;
    if report.failure_count() > 0 {
        debug!("{} revision(s) could not be deleted", report.failure_count());
    }

    Ok(())
}
