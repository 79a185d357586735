use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log filter from `directives`, or from `RUST_LOG` when `None`. INFO unless told otherwise.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    match directives {
        Some(directives) => builder.parse_lossy(directives),
        None => builder.from_env_lossy(),
    }
}

pub fn init() {
    tracing_subscriber::fmt().with_env_filter(env_filter(None)).init();
}
