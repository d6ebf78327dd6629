use std::{fs, io::ErrorKind, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::LayoutId;
use tracing::warn;

pub const SETTINGS_FILE: &str = "videowall.toml";

/// Startup defaults for a fresh wall. Nothing here is written back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WallSettings {
    pub default_layout: LayoutId,
    pub chat_sidebar_visible: bool,
    pub hashtag_sidebar_visible: bool,
    pub default_chat_channel: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    default_layout: Option<usize>,
    chat_sidebar: Option<bool>,
    hashtag_sidebar: Option<bool>,
    chat_channel: Option<String>,
}

pub fn load_settings() -> WallSettings {
    let mut settings = match load_settings_from(SETTINGS_FILE) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, "ignoring invalid settings file");
            WallSettings::default()
        }
    };
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

/// Reads a settings file. A missing file yields the defaults.
pub fn load_settings_from(path: impl AsRef<Path>) -> anyhow::Result<WallSettings> {
    let path = path.as_ref();
    let mut settings = WallSettings::default();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(settings),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };
    let file_cfg: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;

    if let Some(v) = file_cfg.default_layout {
        settings.default_layout = LayoutId(v);
    }
    if let Some(v) = file_cfg.chat_sidebar {
        settings.chat_sidebar_visible = v;
    }
    if let Some(v) = file_cfg.hashtag_sidebar {
        settings.hashtag_sidebar_visible = v;
    }
    if let Some(v) = file_cfg.chat_channel {
        settings.default_chat_channel = Some(v);
    }

    Ok(settings)
}

pub fn apply_env_overrides(settings: &mut WallSettings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("VIDEOWALL__DEFAULT_LAYOUT") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.default_layout = LayoutId(parsed),
            Err(_) => warn!(value = %v, "ignoring unparseable VIDEOWALL__DEFAULT_LAYOUT"),
        }
    }
    if let Some(v) = var("VIDEOWALL__CHAT_SIDEBAR") {
        match parse_flag(&v) {
            Some(parsed) => settings.chat_sidebar_visible = parsed,
            None => warn!(value = %v, "ignoring unparseable VIDEOWALL__CHAT_SIDEBAR"),
        }
    }
    if let Some(v) = var("VIDEOWALL__HASHTAG_SIDEBAR") {
        match parse_flag(&v) {
            Some(parsed) => settings.hashtag_sidebar_visible = parsed,
            None => warn!(value = %v, "ignoring unparseable VIDEOWALL__HASHTAG_SIDEBAR"),
        }
    }
    if let Some(v) = var("VIDEOWALL__CHAT_CHANNEL") {
        settings.default_chat_channel = Some(v);
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
