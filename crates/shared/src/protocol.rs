use serde::{Deserialize, Serialize};

use crate::{
    domain::{LayoutId, Webcast, WebcastKey, WebcastType},
    error::SnapshotError,
};

/// One entry of a catalog push, as delivered by the polling collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWebcast {
    pub key: WebcastKey,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub webcast_type: WebcastType,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default, alias = "sort_order")]
    pub priority: Option<i64>,
}

impl RawWebcast {
    pub fn into_webcast(self) -> Webcast {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.channel.clone(),
        };
        Webcast {
            key: self.key,
            name,
            webcast_type: self.webcast_type,
            channel: self.channel,
            file: self.file.filter(|file| !file.is_empty()),
            priority: self.priority,
        }
    }
}

pub fn parse_snapshot(raw: &str) -> Result<Vec<RawWebcast>, SnapshotError> {
    let entries: Vec<RawWebcast> = serde_json::from_str(raw)?;
    if let Some(index) = entries.iter().position(|e| e.key.as_str().trim().is_empty()) {
        return Err(SnapshotError::EmptyKey { index });
    }
    Ok(entries)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WallIntent {
    SetWebcastsRaw {
        webcasts: Vec<RawWebcast>,
    },
    AddWebcast {
        key: WebcastKey,
    },
    AddWebcastAtPosition {
        key: WebcastKey,
        position: usize,
    },
    SwapWebcasts {
        first: usize,
        second: usize,
    },
    RemoveWebcast {
        key: WebcastKey,
    },
    ResetWebcasts,
    SetLayout {
        layout_id: LayoutId,
    },
    ToggleChatSidebar,
    ToggleHashtagSidebar,
    ToggleLayoutDrawer,
    SelectChatChannel {
        channel: Option<String>,
    },
}

impl WallIntent {
    pub fn name(&self) -> &'static str {
        match self {
            WallIntent::SetWebcastsRaw { .. } => "set_webcasts_raw",
            WallIntent::AddWebcast { .. } => "add_webcast",
            WallIntent::AddWebcastAtPosition { .. } => "add_webcast_at_position",
            WallIntent::SwapWebcasts { .. } => "swap_webcasts",
            WallIntent::RemoveWebcast { .. } => "remove_webcast",
            WallIntent::ResetWebcasts => "reset_webcasts",
            WallIntent::SetLayout { .. } => "set_layout",
            WallIntent::ToggleChatSidebar => "toggle_chat_sidebar",
            WallIntent::ToggleHashtagSidebar => "toggle_hashtag_sidebar",
            WallIntent::ToggleLayoutDrawer => "toggle_layout_drawer",
            WallIntent::SelectChatChannel { .. } => "select_chat_channel",
        }
    }
}
