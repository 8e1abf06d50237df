use crate::app_dir::{LOG_FILE_NAME, app_user_data_file_path};
use std::panic;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. The Solana client crates are chatty at `info`.
const DEFAULT_FILTER: &str = "info,solana_rpc_client=warn,solana_client=warn,reqwest=warn";

pub fn initialize_logger() {
    let log_path = app_user_data_file_path(LOG_FILE_NAME)
        .unwrap_or_else(|_| PathBuf::from(LOG_FILE_NAME));
    let log_file = std::fs::File::create(&log_path).expect("Failed to create log file");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .expect("Invalid default log filter");

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Unable to set global default subscriber");

    let default_panic_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| {
                panic_info
                    .payload()
                    .downcast_ref::<String>()
                    .map(String::as_str)
            })
            .unwrap_or("unknown");

        let location = panic_info
            .location()
            .unwrap_or_else(|| panic::Location::caller());

        error!(
            location = tracing::field::display(location),
            "Panic occurred: {}", message
        );

        default_panic_hook(panic_info);
    }));

    tracing::info!(log_file = %log_path.display(), "Logger initialized successfully");
}
