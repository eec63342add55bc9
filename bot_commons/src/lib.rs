//! Bits shared by the bots in this workspace: logger setup, the runtime
//! they get driven by, and message splitting.

use std::future::Future;

/// Cutting long texts into pieces Telegram will take.
mod split_msg;
pub use split_msg::*;

/// Initialize logging and run `closure` to completion, returning its output.
/// Logging is enabled by default on level `info` unless overridden
/// by environment variable `RUST_LOG`. This uses the crate
/// [pretty_env_logger][] internally, see its documentation for more details.
///
/// The runtime is single-threaded: everything the future awaits happens
/// one after another on the calling thread.
///
/// # Panics
///
/// Panics if the tokio runtime can't be built.
///
/// [pretty_env_logger]: https://docs.rs/pretty_env_logger
pub fn start_everything<F: Future>(closure: F) -> F::Output {
    init_logger();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build the tokio runtime!")
        .block_on(closure)
}

fn init_logger() {
    let log_level = std::env::var_os("RUST_LOG")
        .unwrap_or_else(|| std::ffi::OsString::from("info"))
        .into_string()
        .unwrap_or_else(|_| String::from("info"));

    // journald timestamps lines on its own.
    let running_as_systemd_service = std::env::var_os("JOURNAL_STREAM").is_some();

    let mut builder = match running_as_systemd_service {
        true => pretty_env_logger::formatted_builder(),
        false => pretty_env_logger::formatted_timed_builder(),
    };

    builder.parse_filters(&log_level);

    if builder.try_init().is_err() {
        log::error!("Tried to init logger twice!");
    }
}
