use indexmap::IndexMap;
use shared::{
    domain::{Webcast, WebcastKey},
    protocol::RawWebcast,
};
use tracing::warn;

/// The set of currently known webcasts, in snapshot order. Built wholesale from
/// each catalog push and never edited afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebcastCatalog {
    webcasts: IndexMap<WebcastKey, Webcast>,
}

impl WebcastCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: Vec<RawWebcast>) -> Self {
        let mut webcasts = IndexMap::with_capacity(raw.len());
        for entry in raw {
            let webcast = entry.into_webcast();
            if let Some(previous) = webcasts.insert(webcast.key.clone(), webcast) {
                warn!(key = %previous.key, "duplicate webcast key in snapshot; keeping the last entry");
            }
        }
        Self { webcasts }
    }

    pub fn get(&self, key: &WebcastKey) -> Option<&Webcast> {
        self.webcasts.get(key)
    }

    pub fn contains(&self, key: &WebcastKey) -> bool {
        self.webcasts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.webcasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.webcasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Webcast> {
        self.webcasts.values()
    }

    /// Keys in snapshot order, with no priority or name sorting applied.
    pub fn webcast_ids(&self) -> Vec<WebcastKey> {
        self.webcasts.keys().cloned().collect()
    }
}

impl FromIterator<Webcast> for WebcastCatalog {
    fn from_iter<T: IntoIterator<Item = Webcast>>(iter: T) -> Self {
        Self {
            webcasts: iter
                .into_iter()
                .map(|webcast| (webcast.key.clone(), webcast))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::WebcastType;

    use super::*;

    fn raw(key: &str, channel: &str) -> RawWebcast {
        RawWebcast {
            key: WebcastKey::from(key),
            name: None,
            webcast_type: WebcastType::Twitch,
            channel: channel.to_string(),
            file: None,
            priority: None,
        }
    }

    #[test]
    fn webcast_ids_follow_snapshot_order() {
        let catalog = WebcastCatalog::from_raw(vec![raw("a", "x"), raw("b", "y"), raw("c", "z")]);
        assert_eq!(
            catalog.webcast_ids(),
            vec![
                WebcastKey::from("a"),
                WebcastKey::from("b"),
                WebcastKey::from("c")
            ]
        );
    }

    #[test]
    fn duplicate_key_keeps_first_position_and_last_entry() {
        let catalog = WebcastCatalog::from_raw(vec![
            raw("a", "first"),
            raw("b", "y"),
            raw("a", "second"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.webcast_ids()[0], WebcastKey::from("a"));
        assert_eq!(
            catalog.get(&WebcastKey::from("a")).map(|w| w.channel.as_str()),
            Some("second")
        );
    }
}
