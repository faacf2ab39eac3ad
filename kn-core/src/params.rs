use std::path::PathBuf;

use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};
use tracing::*;

use crate::bulk::BulkDeleteError;

/// Cluster-selection flags shared by every command that talks to the API server.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct KubeParams {
    #[arg(short, long, long_help = "namespace to operate in (defaults to the kubeconfig context's namespace)")]
    pub namespace: Option<String>,

    #[arg(long, long_help = "path to the kubeconfig file to use (defaults to $KUBECONFIG or ~/.kube/config)")]
    pub kubeconfig: Option<PathBuf>,

    #[arg(long, long_help = "name of the kubeconfig context to use")]
    pub context: Option<String>,
}

impl KubeParams {
    /// The namespace falls out of the kubeconfig context, so failing to load the config is
    /// reported as a namespace resolution failure.
    pub async fn load_config(&self) -> anyhow::Result<kube::Config> {
        self.try_load_config()
            .await
            .map_err(|err| BulkDeleteError::namespace_resolution_failed(&format!("{err:#}")))
    }

    pub fn namespace(&self, config: &kube::Config) -> anyhow::Result<String> {
        let ns = self.namespace.as_deref().unwrap_or(config.default_namespace.as_str());
        if ns.is_empty() {
            return Err(BulkDeleteError::namespace_resolution_failed("namespace must not be empty"));
        }

        debug!("using namespace {ns}");
        Ok(ns.into())
    }

    pub fn client(&self, config: kube::Config) -> anyhow::Result<kube::Client> {
        kube::Client::try_from(config).map_err(|err| BulkDeleteError::client_construction_failed(&err.to_string()))
    }

    async fn try_load_config(&self) -> anyhow::Result<kube::Config> {
        let options = KubeConfigOptions { context: self.context.clone(), ..Default::default() };
        let config = match &self.kubeconfig {
            Some(path) => {
                debug!("reading kubeconfig from {}", path.display());
                kube::Config::from_custom_kubeconfig(Kubeconfig::read_from(path)?, &options).await?
            },
            None if self.context.is_some() => kube::Config::from_kubeconfig(&options).await?,
            None => kube::Config::infer().await?,
        };
        Ok(config)
    }
}
