//! Thin adapter over the runner's workflow commands and environment files.

mod input;
mod output;

pub use input::Inputs;
pub use output::set_output;

use std::fmt::Display;

/// Logs the error and raises an `::error::` annotation on the run.
pub fn error(err: impl Display) {
    let message = err.to_string();
    log::error!("{}", message);
    println!("::error::{}", escape_data(&message));
}

/// Hides `secret` from every subsequent line of the run log.
pub fn mask(secret: &str) {
    println!("::add-mask::{}", escape_data(secret));
}

fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
