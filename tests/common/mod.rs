//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use sampleapp::config::UiConfig;
use sampleapp::profile::ProfileSink;
use sampleapp::ui::app::App;
use sampleapp::ui::input::handle_key;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Sink that records every save call.
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

impl ProfileSink for RecordingSink {
    fn save(&self, name: &str, address: &str) {
        self.calls.lock().push((name.to_string(), address.to_string()));
    }
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> (App, Arc<RecordingSink>) {
    make_app_with(UiConfig::default())
}

pub fn make_app_with(config: UiConfig) -> (App, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let app = App::new(&config, sink.clone());
    (app, sink)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

// -- Config helpers -----------------------------------------------------------

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
