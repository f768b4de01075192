use crate::error::{Error, ErrorType, Result};

use simplelog::{
    ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};

/// Installs the global logger, writing to stderr.
pub fn init(level: LevelFilter) -> Result<()> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| {
            Error::convert(ErrorType::LogicError, "cannot set up logging", &e)
        })
}
