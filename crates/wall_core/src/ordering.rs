//! Presentation order of the catalog for the "add a webcast" picker.

use std::{cmp::Ordering, sync::Arc};

use shared::domain::{Webcast, WebcastKey};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::catalog::WebcastCatalog;

/// Prioritized webcasts first (ascending priority, ties in snapshot order),
/// then the rest by display name.
pub fn display_order(catalog: &WebcastCatalog) -> Vec<WebcastKey> {
    let (mut prioritized, mut unprioritized): (Vec<&Webcast>, Vec<&Webcast>) =
        catalog.iter().partition(|webcast| webcast.priority.is_some());

    prioritized.sort_by_key(|webcast| webcast.priority);
    unprioritized.sort_by(|a, b| compare_display_names(&a.name, &b.name));

    prioritized
        .into_iter()
        .chain(unprioritized)
        .map(|webcast| webcast.key.clone())
        .collect()
}

/// Collation-style comparison of display names, in three levels: base letters
/// with accents and case folded away, then accents, then case with lowercase
/// first. Byte order only breaks ties between canonically equivalent names.
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded_marks(a).cmp(folded_marks(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded_marks(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfkd().flat_map(char::to_lowercase)
}

fn case_pattern(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Caches [`display_order`] per catalog snapshot. A new snapshot always arrives
/// as a new `Arc`, so pointer identity is enough to detect a change.
#[derive(Debug, Default)]
pub struct DisplayOrderMemo {
    source: Option<Arc<WebcastCatalog>>,
    order: Arc<Vec<WebcastKey>>,
}

impl DisplayOrderMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, catalog: &Arc<WebcastCatalog>) -> Arc<Vec<WebcastKey>> {
        let fresh = self
            .source
            .as_ref()
            .is_some_and(|source| Arc::ptr_eq(source, catalog));
        if !fresh {
            self.order = Arc::new(display_order(catalog));
            self.source = Some(Arc::clone(catalog));
        }
        Arc::clone(&self.order)
    }
}

#[cfg(test)]
#[path = "tests/ordering_tests.rs"]
mod tests;
