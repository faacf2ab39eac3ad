pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_OTHER_NAMESPACE: &str = "other-namespace";
pub const TEST_CONTEXT: &str = "fake-context";
pub const TEST_REVISION: &str = "hello-00001";
pub const TEST_REVISION_2: &str = "hello-00002";
pub const TEST_MISSING_REVISION: &str = "hello-nonexist";
pub const REVISIONS_GROUP_RESOURCE: &str = "revisions.serving.knative.dev";
