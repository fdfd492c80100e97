//! Error types

use snafu::{prelude::*, Backtrace};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum RcError {
    /// No rule accepted the command. Carries the command as typed.
    #[snafu(display("{command} is not a valid command"))]
    InvalidCommand {
        command: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Console I/O error: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}
