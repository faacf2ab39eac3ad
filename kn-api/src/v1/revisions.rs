use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

// Only the API coordinates of a Revision matter to the client; RevisionSpec and RevisionStatus carry
// the handful of fields that show up in `kn revision` output and are otherwise left opaque.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "serving.knative.dev", version = "v1", kind = "Revision", namespaced)]
#[kube(shortname = "rev")]
#[kube(status = "RevisionStatus")]
#[kube(
    printcolumn = r#"{"name":"service", "type":"string", "description":"owning service", "jsonPath":".status.serviceName"}"#,
    printcolumn = r#"{"name":"generation", "type":"string", "description":"configuration generation", "jsonPath":".metadata.labels['serving\\.knative\\.dev/configurationGeneration']"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct RevisionSpec {
    pub container_concurrency: Option<i64>,
    pub timeout_seconds: Option<i64>,
    pub service_account_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionStatus {
    pub observed_generation: Option<i64>,
    pub service_name: Option<String>,
    pub log_url: Option<String>,
}
