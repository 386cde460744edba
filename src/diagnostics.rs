//! User-facing message formatting for stderr.

use std::fmt::Display;

pub fn error_message(msg: impl Display) -> String {
    format!("error: {}", msg)
}

pub fn warning_message(msg: impl Display) -> String {
    format!("warning: {}", msg)
}
