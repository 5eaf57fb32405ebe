use std::fs::File;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file.
pub const LOG_ENV: &str = "STAFFDESK_LOG";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// File named by `STAFFDESK_LOG`, or nothing if it is unset.
    FileFromEnv,
    Stderr,
}

/// `{base}.{unix seconds}.{pid}`, so concurrent consoles never share a file.
fn unique_log_path(base: &str) -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, secs, std::process::id())
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// The console shares stdout with the table, so by default nothing is logged
/// unless `STAFFDESK_LOG` is set.
pub fn init_tracing(target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .init();
        }
        LogTarget::FileFromEnv => {
            let Ok(base) = std::env::var(LOG_ENV) else {
                return;
            };
            let path = unique_log_path(&base);
            let file = match File::create(&path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Warning: cannot create log file {}: {}", path, e);
                    return;
                }
            };
            tracing_subscriber::registry()
                .with(filter())
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_carries_pid() {
        let path = unique_log_path("/tmp/staffdesk.log");
        assert!(path.starts_with("/tmp/staffdesk.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
