use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::ColorToken;

/// Tag name -> chosen color.
///
/// Entries for tags that are no longer known are kept; they are harmless and
/// come back into use if the tag reappears.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagColors(BTreeMap<String, ColorToken>);

impl TagColors {
    pub fn get(&self, tag: &str) -> Option<&ColorToken> {
        self.0.get(tag)
    }

    pub fn set(&mut self, tag: impl Into<String>, color: ColorToken) {
        self.0.insert(tag.into(), color);
    }

    pub fn remove(&mut self, tag: &str) -> Option<ColorToken> {
        self.0.remove(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorToken)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Assigned color, or a stable pick from `color_list` by the tag's
    /// position in `tags`.
    pub fn color_for(
        &self,
        tag: &str,
        tags: &[String],
        color_list: &[ColorToken],
    ) -> Option<ColorToken> {
        if let Some(c) = self.0.get(tag) {
            return Some(c.clone());
        }
        if color_list.is_empty() {
            return None;
        }
        let pos = tags.iter().position(|t| t == tag)?;
        Some(color_list[pos % color_list.len()].clone())
    }

    /// Gives every tag in `tags` an entry, keeping existing ones.
    ///
    /// Returns the number of entries added.
    pub fn fill_missing(&mut self, tags: &[String], color_list: &[ColorToken]) -> usize {
        let mut added = 0;
        for tag in tags {
            if self.0.contains_key(tag) {
                continue;
            }
            if let Some(c) = self.color_for(tag, tags, color_list) {
                self.0.insert(tag.clone(), c);
                added += 1;
            }
        }
        added
    }

    /// Tags with an entry that are not in `tags`.
    pub fn stale<'a>(&'a self, tags: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .keys()
            .filter(move |k| !tags.contains(*k))
            .map(String::as_str)
    }
}
