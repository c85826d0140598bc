//! Subscriber setup. The subscriber is installed before config is read, so
//! config-load events are recorded; the `[logging].level` from the file is
//! applied afterwards through a reload handle.

use backdrop_config::LogLevel;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Targets that receive the configured level when no override is given.
const LOG_TARGETS: &[&str] = &[
    "backdrop",
    "backdrop_picker",
    "backdrop_config",
    "backdrop_common",
];

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` plus either the CLI directive or `level` for our own targets.
pub fn log_filter(directive: Option<&str>, level: LogLevel) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env();
    match directive {
        Some(directive) => match directive.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("ignoring invalid log directive '{directive}': {e}"),
        },
        None => {
            for target in LOG_TARGETS {
                if let Ok(d) = format!("{target}={}", level.directive()).parse() {
                    filter = filter.add_directive(d);
                }
            }
        }
    }
    filter
}

/// Build a fmt subscriber whose filter can be swapped later.
pub fn subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> (impl tracing::Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, handle)
}

/// Apply the level from the config file. A CLI directive wins, so the
/// filter is left alone when one was given.
pub fn apply_config_level(handle: &FilterHandle, directive: Option<&str>, level: LogLevel) {
    if directive.is_some() {
        return;
    }
    if let Err(e) = handle.reload(log_filter(None, level)) {
        tracing::warn!("Failed to apply configured log level: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn current_filter(handle: &FilterHandle) -> String {
        handle.with_current(|f| f.to_string()).unwrap()
    }

    #[test]
    fn log_filter_accepts_override_and_level() {
        let filter = log_filter(Some("backdrop_picker=debug"), LogLevel::Info);
        assert!(filter.to_string().contains("backdrop_picker=debug"));

        let filter = log_filter(None, LogLevel::Warning);
        assert!(filter.to_string().contains("backdrop_config=warn"));
    }

    #[test]
    fn config_load_is_logged_once_subscriber_is_installed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pexels]\nmax_page = 3\n").unwrap();

        let capture = Capture::default();
        let writer = capture.clone();
        let (subscriber, _handle) =
            subscriber(log_filter(None, LogLevel::default()), move || writer.clone());

        let loaded = tracing::subscriber::with_default(subscriber, || {
            crate::bootstrap::load_config(Some(path.clone()))
        });

        assert_eq!(loaded.unwrap().pexels.max_page, 3);
        assert!(capture.text().contains("loaded config from"));
    }

    #[test]
    fn configured_level_replaces_startup_filter() {
        let (_subscriber, handle) = subscriber(log_filter(None, LogLevel::Info), std::io::sink);
        assert!(current_filter(&handle).contains("backdrop_config=info"));

        apply_config_level(&handle, None, LogLevel::Warning);
        assert!(current_filter(&handle).contains("backdrop_config=warn"));
    }

    #[test]
    fn cli_directive_is_not_replaced_by_config_level() {
        let directive = Some("backdrop_picker=trace");
        let (_subscriber, handle) =
            subscriber(log_filter(directive, LogLevel::Info), std::io::sink);

        apply_config_level(&handle, directive, LogLevel::Error);
        let filter = current_filter(&handle);
        assert!(filter.contains("backdrop_picker=trace"));
        assert!(!filter.contains("backdrop_config=error"));
    }
}
