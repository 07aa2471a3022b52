use super::config::DEFAULT_LOG_LEVEL;
use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Initialize logging.
///
/// Browsers have no environment, so the filter comes from the configured
/// directive instead of `RUST_LOG`. Events go to the devtools console on wasm
/// and to stderr elsewhere.
///
/// # Errors
///
/// Returns an error if the directive does not parse or a subscriber is already set
pub fn init(directive: &str) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(directive)?)?;
    Ok(())
}

/// Builds the subscriber `init` installs, without installing it.
///
/// # Errors
///
/// Returns an error if the directive does not parse
pub fn subscriber(directive: &str) -> Result<impl Subscriber + Send + Sync + use<>> {
    let directive = normalize_directive(directive);
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log directive {directive:?}"))?;

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(make_writer());

    Ok(Registry::default().with(fmt_layer).with(filter))
}

fn normalize_directive(directive: &str) -> &str {
    let trimmed = directive.trim();
    if trimmed.is_empty() {
        DEFAULT_LOG_LEVEL
    } else {
        trimmed
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn make_writer() -> fn() -> std::io::Stderr {
    std::io::stderr
}

#[cfg(target_arch = "wasm32")]
fn make_writer() -> fn() -> console::ConsoleWriter {
    console::ConsoleWriter::default
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};

    // fmt writes one formatted event per writer; emit it when the writer drops.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if !self.buffer.is_empty() {
                let line = String::from_utf8_lossy(&self.buffer);
                web_sys::console::log_1(&line.trim_end().into());
                self.buffer.clear();
            }
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_directive_defaults_when_blank() {
        assert_eq!(normalize_directive(""), "info");
        assert_eq!(normalize_directive("   "), "info");
    }

    #[test]
    fn test_normalize_directive_trims() {
        assert_eq!(normalize_directive(" userdir=debug "), "userdir=debug");
    }

    #[test]
    fn test_init_rejects_bad_directive() {
        let result = init("userdir=notalevel");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid log directive")
        );
    }

    #[test]
    fn test_subscriber_scoped_to_closure() {
        let subscriber = subscriber("userdir=debug").expect("valid directive");
        tracing::subscriber::with_default(subscriber, || tracing::debug!("scoped event"));
        assert!(!tracing::dispatcher::has_been_set());
    }
}
