#![allow(non_snake_case)]

mod cli;
mod clients;
mod config;
mod models;
mod runtime;
mod service;
mod state;
mod ui;

use std::env;

use crate::config::AppConfig;

const DEFAULT_RUN_MODE: &str = "cli";
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_MOCK_API_PORT: u16 = 8000;

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let base_url = get_prop("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL.to_string());
    let run_mode = get_prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());
    if run_mode == "cli" {
        cli::cli(base_url).await;
    } else if run_mode == "ui" {
        ui::run_ui(base_url).await;
    } else if run_mode == "mock-api" {
        let port = get_prop("MOCK_API_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_MOCK_API_PORT);
        runtime::run_mock_api(port).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
