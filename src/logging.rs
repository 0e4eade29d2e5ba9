use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialise logging.
///
/// With `debug` disabled the level is forced to `info` regardless of
/// `RUST_LOG`. When `log_file` is set, output goes to that file through a
/// non-blocking writer instead of stderr.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "quick_switcher.log".into());
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if builder.with_writer(writer).with_ansi(false).try_init().is_ok() {
                let _ = FILE_GUARD.set(guard);
            }
        }
        None => {
            let _ = builder.try_init();
        }
    }
}
