use std::io;

// stdout is reserved for command output (scripts grep it), so all logs go to stderr
pub fn setup_for_cli(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}
