//! Lifecycle logging shared by every entry point.

use tracing::{error, info, warn};

use crate::errors::AccError;

pub fn log_app_startup() {
    info!(
        event = "acctree.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "acctree.app.shutdown_started");
}

/// Log an error at the level its classification calls for.
pub fn log_app_error(error: &dyn AccError) {
    if error.is_user_error() {
        warn!(
            event = "acctree.app.user_error",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "acctree.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}
