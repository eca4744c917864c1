static LOGGING: std::sync::OnceLock<()> = std::sync::OnceLock::new();

/// Installs the default logger. Only the first call has any effect, so
/// applications and tests may call this freely.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();
    });
}
