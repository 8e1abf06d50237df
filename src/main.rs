use sol_token_tool::app::AppState;
use sol_token_tool::app_dir::{
    DATABASE_FILE_NAME, ENV_FILE_NAME, app_user_data_file_path,
    create_app_user_data_directory_if_not_exists,
};
use sol_token_tool::config::Config;
use sol_token_tool::context::AppContext;
use sol_token_tool::database::Database;
use sol_token_tool::logging::initialize_logger;
use sol_token_tool::utils::tasks::TaskManager;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    let app_data_dir = create_app_user_data_directory_if_not_exists()
        .expect("Failed to create app user_data directory");
    initialize_logger();

    let env_file_path = app_data_dir.join(ENV_FILE_NAME);
    if !env_file_path.exists() {
        if let Err(e) = Config::default().save(&env_file_path) {
            tracing::warn!("Failed to write default configuration: {}", e);
        }
    }
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration, using defaults: {}", e);
        Config::default()
    });

    let db_path = app_user_data_file_path(DATABASE_FILE_NAME)
        .expect("Failed to get database file path");
    let db = Database::new(db_path).expect("Failed to open database");
    db.initialize().expect("Failed to initialize database");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("multi-threading runtime cannot be initialized");

    let task_manager = TaskManager::new();
    let result = runtime.block_on(async {
        let app_context = AppContext::new(config, Arc::new(db), task_manager.clone());

        let native_options = eframe::NativeOptions {
            persist_window: true,
            centered: true,
            persistence_path: Some(app_data_dir.join("app.ron")),
            ..Default::default()
        };
        eframe::run_native(
            &format!("Sol Token Tool v{}", env!("CARGO_PKG_VERSION")),
            native_options,
            Box::new(move |cc| Ok(Box::new(AppState::new(cc.egui_ctx.clone(), app_context)))),
        )
    });

    let _guard = runtime.enter();
    if let Err(e) = task_manager.shutdown() {
        tracing::error!("Background task shutdown failed: {}", e);
    }

    tracing::info!("Sol Token Tool exited");
    result
}
