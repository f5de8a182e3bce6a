pub mod commands;
pub mod core;

use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr, leaving stdout for command output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,natives_redirect=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}
