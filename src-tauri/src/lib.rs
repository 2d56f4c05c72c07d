mod commands;
mod error;
mod models;
mod services;

use services::detector_client::DetectorClient;
use services::workflow::AnalysisEngine;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .setup(|app| {
            let client = DetectorClient::from_env();
            eprintln!("PADS detector base: {}", client.base_url());
            app.manage(AnalysisEngine::new(client));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::analysis::get_status,
            commands::analysis::get_api_base,
            commands::analysis::select_file,
            commands::analysis::select_dropped_file,
            commands::analysis::switch_mode,
            commands::analysis::run_analysis,
            commands::history::list_history,
            commands::history::load_history_entry,
            commands::verdict::classify_confidence,
            commands::verdict::resolve_verdict,
            commands::media::fetch_artifact,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
