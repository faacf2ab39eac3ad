use std::fmt;

use async_trait::async_trait;
use k8s_openapi::NamespaceResourceScope;
use kube::api::DeleteParams;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use serde::de::DeserializeOwned;
use tracing::*;

use crate::errors::*;

/// A capability that deletes a single named object of some kind.  The bulk executor only ever
/// talks to this trait, so anything that can delete-by-name (a real API server, a mock, a
/// fixture) can be plugged in.
#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait DeleteByName {
    /// Human-readable kind of the objects being deleted, e.g. "Revision"
    fn kind(&self) -> String;

    /// Any error returned here is shown to the user as-is, so its `Display` output should be
    /// the message the user needs to see and nothing more.
    async fn delete(&self, name: &str) -> EmptyResult;
}

pub struct NamespacedDeleter<K> {
    api: kube::Api<K>,
    namespace: String,
}

impl<K> NamespacedDeleter<K>
where
    K: kube::Resource<Scope = NamespaceResourceScope, DynamicType = ()>,
{
    pub fn new(client: kube::Client, namespace: &str) -> NamespacedDeleter<K> {
        NamespacedDeleter {
            api: kube::Api::namespaced(client, namespace),
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl<K> DeleteByName for NamespacedDeleter<K>
where
    K: kube::Resource<DynamicType = ()> + Clone + DeserializeOwned + fmt::Debug + Send + Sync + 'static,
{
    fn kind(&self) -> String {
        K::kind(&()).into_owned()
    }

    async fn delete(&self, name: &str) -> EmptyResult {
        debug!(name, namespace = %self.namespace, "deleting {}", K::kind(&()));
        match self.api.delete(name, &DeleteParams::default()).await {
            Ok(_) => Ok(()),
            Err(err) => Err(anyhow!(api_error_message(&err))),
        }
    }
}

/// The API server already phrases its rejections for humans (`revisions.serving.knative.dev "foo"
/// not found`), so use that message directly instead of kube's wrapped Display output.
pub fn api_error_message(err: &kube::Error) -> String {
    match err {
        kube::Error::Api(status) if !status.message.is_empty() => status.message.clone(),
        _ => err.to_string(),
    }
}
