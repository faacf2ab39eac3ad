use assert_fs::TempDir;
use assertables::*;
use clap::Parser;
use kn_core::bulk::BulkDeleteError;
use kn_core::params::KubeParams;

use super::*;
use crate::KnCommandRoot;

fn args_for(names: &[&str], fake_apiserver: &MockServerBuilder, dir: &TempDir) -> delete::Args {
    let kubeconfig = write_fake_kubeconfig(dir.path(), &fake_apiserver.url().to_string(), TEST_NAMESPACE);
    delete::Args {
        names: names.iter().map(|n| n.to_string()).collect(),
        kube: KubeParams { kubeconfig: Some(kubeconfig), ..Default::default() },
    }
}

#[rstest]
#[tokio::test]
async fn test_delete_cmd_one_missing() {
    let dir = TempDir::new().unwrap();
    let mut fake_apiserver = MockServerBuilder::new();
    fake_apiserver
        .handle_delete(revision_path(TEST_NAMESPACE, TEST_REVISION))
        .handle_delete(revision_path(TEST_NAMESPACE, TEST_REVISION_2))
        .handle_not_found(
            revision_path(TEST_NAMESPACE, TEST_MISSING_REVISION),
            REVISIONS_GROUP_RESOURCE,
            TEST_MISSING_REVISION,
        );
    fake_apiserver.build();
    let args = args_for(&[TEST_REVISION, TEST_REVISION_2, TEST_MISSING_REVISION], &fake_apiserver, &dir);
    let mut out = vec![];

    delete::cmd(&args, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "Revision '{TEST_REVISION}' successfully deleted in namespace '{TEST_NAMESPACE}'.\n\
             Revision '{TEST_REVISION_2}' successfully deleted in namespace '{TEST_NAMESPACE}'.\n\
             {REVISIONS_GROUP_RESOURCE} \"{TEST_MISSING_REVISION}\" not found.\n"
        )
    );
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_delete_cmd_namespace_flag() {
    let dir = TempDir::new().unwrap();
    let mut fake_apiserver = MockServerBuilder::new();
    fake_apiserver.handle_delete(revision_path(TEST_OTHER_NAMESPACE, TEST_REVISION));
    fake_apiserver.build();
    let mut args = args_for(&[TEST_REVISION], &fake_apiserver, &dir);
    args.kube.namespace = Some(TEST_OTHER_NAMESPACE.into());
    let mut out = vec![];

    delete::cmd(&args, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Revision '{TEST_REVISION}' successfully deleted in namespace '{TEST_OTHER_NAMESPACE}'.\n")
    );
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_delete_cmd_all_missing_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let mut fake_apiserver = MockServerBuilder::new();
    fake_apiserver.handle_not_found(
        revision_path(TEST_NAMESPACE, TEST_MISSING_REVISION),
        REVISIONS_GROUP_RESOURCE,
        TEST_MISSING_REVISION,
    );
    fake_apiserver.build();
    let args = args_for(&[TEST_MISSING_REVISION], &fake_apiserver, &dir);
    let mut out = vec![];

    delete::cmd(&args, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{REVISIONS_GROUP_RESOURCE} \"{TEST_MISSING_REVISION}\" not found.\n")
    );
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_delete_cmd_no_names() {
    let args = delete::Args { names: vec![], kube: Default::default() };
    let mut out = vec![];

    let err = delete::cmd(&args, &mut out).await.unwrap_err();

    assert_eq!(err.to_string(), "'kn revision delete' requires the revision name(s)");
    assert!(out.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_delete_cmd_bad_kubeconfig() {
    let dir = TempDir::new().unwrap();
    let args = delete::Args {
        names: vec![TEST_REVISION.into()],
        kube: KubeParams {
            kubeconfig: Some(dir.path().join("missing")),
            ..Default::default()
        },
    };
    let mut out = vec![];

    let err = delete::cmd(&args, &mut out).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BulkDeleteError>(),
        Some(BulkDeleteError::NamespaceResolutionFailed(_))
    ));
    assert!(out.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_delete_cmd_bad_client_config() {
    let dir = TempDir::new().unwrap();
    let kubeconfig = write_fake_kubeconfig_with_bad_ca(dir.path(), "https://127.0.0.1:6443", TEST_NAMESPACE);
    let args = delete::Args {
        names: vec![TEST_REVISION.into(), TEST_REVISION_2.into()],
        kube: KubeParams { kubeconfig: Some(kubeconfig), ..Default::default() },
    };
    let mut out = vec![];

    let err = delete::cmd(&args, &mut out).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BulkDeleteError>(),
        Some(BulkDeleteError::ClientConstructionFailed(_))
    ));
    assert!(out.is_empty());
}

#[rstest]
fn test_parse_requires_names() {
    let res = KnCommandRoot::try_parse_from(["kn", "revision", "delete"]);
    assert!(res.is_err());
}

#[rstest]
#[case::full(&["kn", "revision", "delete", "a", "b", "-n", "ns"])]
#[case::aliases(&["kn", "rev", "rm", "a", "b", "--namespace", "ns"])]
fn test_parse_delete(#[case] argv: &[&str]) {
    let root = KnCommandRoot::try_parse_from(argv.iter().copied()).unwrap();
    let crate::KnSubcommand::Revision(RevisionSubcommand::Delete(args)) = root.subcommand else {
        panic!("expected revision delete");
    };
    assert_eq!(args.names, vec!["a", "b"]);
    assert_eq!(args.kube.namespace.as_deref(), Some("ns"));
    assert_none!(args.kube.kubeconfig);
}
