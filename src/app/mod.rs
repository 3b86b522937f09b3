mod cli;
mod error;
mod file_handler;
mod logger;
mod orchestrator;

pub use cli::Cli;
pub use error::AppError;
pub use orchestrator::run_app;

// Run-log macros for the sibling modules; silent under `--quiet`.
macro_rules! log_info {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::record(super::logger::Severity::Info, format_args!($($arg)*));
        }
    };
}

macro_rules! log_error {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::record(super::logger::Severity::Error, format_args!($($arg)*));
        }
    };
}

use log_error;
use log_info;
