use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static TRACING: OnceLock<()> = OnceLock::new();

/// Install a `tracing` fmt subscriber on first call. `RUST_LOG` picks the filter,
/// `info` otherwise. Later calls, or a subscriber the host already set, are left alone.
pub fn init_tracing_once() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

/// Strip trailing slashes from a base URL ("http://host/" -> "http://host").
pub fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
