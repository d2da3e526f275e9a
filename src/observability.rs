//! Logging hooks for the transform.
//!
//! The library only talks to the `log` facade. Applications that want output
//! without wiring their own logger can call `enable_verbose_logging` once.

use std::fs::OpenOptions;
use std::sync::Once;

use log::LevelFilter;

use crate::error::HaarError;

/// Logs a structured key-value metric line at debug level.
///
/// # Example
/// ```ignore
/// log_metric!("event" = "forward", "level" = 3);
/// ```
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if log::log_enabled!(log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            log::debug!("HAAR_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` at debug level, writing `[LEVEL] message` lines to
/// stderr or, when `log_file` is given, appending to that file.
///
/// Only the first call has any effect. An unopenable log file is reported and
/// leaves logging uninstalled so a later call can retry.
pub fn enable_verbose_logging(log_file: Option<String>) -> Result<(), HaarError> {
    let target = match log_file {
        Some(filename) => {
            let file = OpenOptions::new().append(true).create(true).open(filename)?;
            Some(env_logger::Target::Pipe(Box::new(file)))
        }
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(target) = target {
            builder.target(target);
        }

        let _ = builder.try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_verbose_logging_is_idempotent() {
        assert!(enable_verbose_logging(None).is_ok());
        assert!(enable_verbose_logging(None).is_ok());
        log_metric!("event" = "test", "value" = 1);
    }

    #[test]
    fn test_unopenable_log_file_is_io_error() {
        let result = enable_verbose_logging(Some("/definitely/not/here/haar.log".to_string()));
        assert!(matches!(result, Err(HaarError::Io(_))));
    }
}
