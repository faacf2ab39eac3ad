use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use kn_api::v1::*;
use rstest::fixture;

use crate::constants::*;

pub fn revision_path(ns: &str, name: &str) -> String {
    format!("/apis/serving.knative.dev/v1/namespaces/{ns}/revisions/{name}")
}

#[fixture]
pub fn test_revision(#[default(TEST_REVISION)] name: &str) -> Revision {
    Revision {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            namespace: Some(TEST_NAMESPACE.into()),
            uid: Some("1234-asdf".into()),
            ..Default::default()
        },
        spec: RevisionSpec {
            container_concurrency: Some(0),
            timeout_seconds: Some(300),
            ..Default::default()
        },
        status: Some(RevisionStatus {
            observed_generation: Some(1),
            service_name: Some("hello".into()),
            ..Default::default()
        }),
    }
}
