//! Logging options
//!
//! Turns user-facing options into a ready `Logger`:
//! - `file`: a path, `file://` URL, raw path bytes, or an already-open file
//! - `logger`: a custom sink; used even when `quiet` is set
//! - `quiet`: suppresses the default console sink only
//!
//! Config files and environment variables are read by `LoggingConfig`.

mod file;
mod config;
mod resolve;

pub use file::{FileOption, open_log_file};
pub use config::{LoggingConfig, ConfigFile, ENV_FILE, ENV_QUIET};
pub use resolve::{LoggingOptions, ResolvedOptions};
