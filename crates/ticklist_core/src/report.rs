//! User-visible error reporting collaborator.
//!
//! # Responsibility
//! - Decouple the store from how failure messages reach the user.
//!
//! # Invariants
//! - Reporting never fails and never panics; a reporter that cannot
//!   deliver a message drops it.

use log::error;

/// Receives short human-readable failure messages for transient display.
///
/// The store does not care where or for how long a message is shown; the
/// presentation side owns that.
pub trait ErrorReporter {
    fn report(&self, message: &str);
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &R {
    fn report(&self, message: &str) {
        (**self).report(message);
    }
}

/// Routes messages to the error log; useful where no UI surface exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, message: &str) {
        error!("event=user_error module=report message={message}");
    }
}
