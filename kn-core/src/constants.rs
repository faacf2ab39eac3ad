pub const KN_BINARY_NAME: &str = "kn";

// Defaults
pub const DEFAULT_VERBOSITY: &str = "warn";
