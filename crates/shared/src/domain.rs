use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebcastKey(pub String);

impl WebcastKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebcastKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WebcastKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LayoutId(pub usize);

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Streaming vendor behind a webcast. Only the embed layer cares which one it
/// is; the grid treats every type the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebcastType {
    Youtube,
    Twitch,
    Ustream,
    Livestream,
    Iframe,
    Html5,
    Rtmp,
    DirectLink,
    Dacast,
    Mms,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webcast {
    pub key: WebcastKey,
    pub name: String,
    pub webcast_type: WebcastType,
    pub channel: String,
    pub file: Option<String>,
    pub priority: Option<i64>,
}

/// Cell rectangle in percent of the wall area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
}

impl CellRect {
    pub const FULL: CellRect = CellRect::new(100.0, 100.0, 0.0, 0.0);

    pub const fn new(width: f32, height: f32, top: f32, left: f32) -> Self {
        Self {
            width,
            height,
            top,
            left,
        }
    }
}
