// src/log.rs
//
// Debug log shared by the GUI and the CLI. Events go through `tracing`;
// the subscriber writes plain lines to `.store/debug.log` and falls back
// to stderr when the file cannot be opened.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

pub use tracing;

use crate::config::consts::{LOG_DIR, LOG_FILE};

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false);

    let path = Path::new(LOG_DIR).join(LOG_FILE);
    let file = fs::create_dir_all(LOG_DIR)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    let installed = match file {
        Ok(f) => builder.with_writer(Mutex::new(f)).try_init().is_ok(),
        Err(e) => {
            eprintln!("Debug log unavailable at {} ({e}); using stderr", path.display());
            builder.with_writer(std::io::stderr).try_init().is_ok()
        }
    };

    if installed {
        logf!("Log: started (verbose={verbose})");
    }
}
