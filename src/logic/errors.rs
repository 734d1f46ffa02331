//! Error rendering for the command line

use anyhow::Error;

use crate::error::BrowserError;

/// Message shown to the user for a failed command
///
/// Tree errors are already phrased for the user and are shown as-is, even
/// under added context. HTTP failures show the reqwest error, which names the
/// url and status. Anything else shows the deepest cause in the chain.
pub fn format_error_message(error: &Error) -> String {
    if let Some(browser_err) = error.downcast_ref::<BrowserError>() {
        return browser_err.to_string();
    }

    let mut deepest = error.to_string();
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        deepest = cause.to_string();
    }

    deepest
}
