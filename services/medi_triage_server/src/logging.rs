use std::io::Write;

use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};

/// Install the process-wide logger.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = Builder::new();
    builder.filter_level(level).format(|buf, record| {
        writeln!(
            buf,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    });
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.try_init()?;
    log::debug!("Logger initialized at {level}");
    Ok(())
}
