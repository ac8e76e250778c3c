use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to a file in the data directory.
///
/// Logs go to `{data_dir}/cltlab.log`. The level can be set via the `level`
/// parameter or overridden with the `RUST_LOG` environment variable. Writing
/// to stderr is not an option while the terminal is in raw mode.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::never(data_dir, "cltlab.log");

    let default_filter = format!("cltlab={level},cltlab_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(
        "CLT Lab logging initialized (log_path={})",
        data_dir.join("cltlab.log").display()
    );
    Ok(())
}
