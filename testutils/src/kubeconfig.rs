use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use crate::constants::*;

// base64 of a PEM block whose body ("garbage") is not a DER certificate; it survives kubeconfig
// loading but can't be added to a TLS root store
pub const BAD_CA_BUNDLE_DATA: &str =
    "LS0tLS1CRUdJTiBDRVJUSUZJQ0FURS0tLS0tCloyRnlZbUZuWlE9PQotLS0tLUVORCBDRVJUSUZJQ0FURS0tLS0tCg==";

/// Write a single-context kubeconfig pointing at `server` into `dir`, returning its path.
pub fn write_fake_kubeconfig(dir: &Path, server: &str, namespace: &str) -> PathBuf {
    write_kubeconfig(dir, server, namespace, None)
}

/// Same as `write_fake_kubeconfig`, but the cluster's CA bundle is unusable, so building a client
/// from it fails.
pub fn write_fake_kubeconfig_with_bad_ca(dir: &Path, server: &str, namespace: &str) -> PathBuf {
    write_kubeconfig(dir, server, namespace, Some(BAD_CA_BUNDLE_DATA))
}

fn write_kubeconfig(dir: &Path, server: &str, namespace: &str, ca_data: Option<&str>) -> PathBuf {
    let path = dir.join("kubeconfig");
    let ca_line = ca_data
        .map(|data| format!("\n    certificate-authority-data: {data}"))
        .unwrap_or_default();
    let contents = format!(
        r#"apiVersion: v1
kind: Config
clusters:
- name: fake-cluster
  cluster:
    server: {server}{ca_line}
users:
- name: fake-user
  user: {{}}
contexts:
- name: {TEST_CONTEXT}
  context:
    cluster: fake-cluster
    user: fake-user
    namespace: {namespace}
current-context: {TEST_CONTEXT}
"#
    );
    fs::write(&path, contents).unwrap();
    path
}
