use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Route `tracing` output to `file_name` in the system temp directory so it
/// never interleaves with what the binaries print to stdout.
///
/// Logs at DEBUG when the `DEBUG` environment variable is `1`, INFO otherwise.
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init(file_name: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => Level::DEBUG,
        _ => Level::INFO,
    };
    // Another subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .try_init();
    guard
}
