//! Viewport-intersection observer configuration
//!
//! The observer itself is a browser primitive; the embedder constructs it
//! from [`ObserverConfig`] and feeds its callbacks back into the engine as
//! [`Message::SectionIntersected`]. A section counts as current once 55% of
//! it is visible, inside a viewport window that excludes the top 10% and
//! bottom 35%, so a section becomes current slightly before it reaches
//! screen center.

use crate::message::Message;

/// Configuration handed to the viewport-intersection primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Visibility ratio at which a section counts as current
    pub threshold: f64,
    /// Margin cut off the top of the viewport, as a fraction (negative)
    pub top_margin: f64,
    /// Margin cut off the bottom of the viewport, as a fraction (negative)
    pub bottom_margin: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.55,
            top_margin: -0.10,
            bottom_margin: -0.35,
        }
    }
}

impl ObserverConfig {
    /// The margin in the CSS shorthand the browser API expects
    pub fn root_margin_css(&self) -> String {
        format!(
            "{}% 0px {}% 0px",
            (self.top_margin * 100.0).round(),
            (self.bottom_margin * 100.0).round()
        )
    }
}

/// One observer callback entry for a watched section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub section_id: String,
    pub is_intersecting: bool,
}

/// Translate an observer callback batch into dispatchable messages.
/// Entries that left the viewport produce nothing; the last intersecting
/// section in the batch wins, matching delivery order.
pub fn messages_from(entries: &[IntersectionEntry]) -> Vec<Message> {
    entries
        .iter()
        .filter(|entry| entry.is_intersecting)
        .map(|entry| Message::SectionIntersected {
            section_id: entry.section_id.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_page_tuning() {
        let config = ObserverConfig::default();
        assert_eq!(config.threshold, 0.55);
        assert_eq!(config.root_margin_css(), "-10% 0px -35% 0px");
    }

    #[test]
    fn test_only_intersecting_entries_dispatch() {
        let entries = vec![
            IntersectionEntry {
                section_id: "a".into(),
                is_intersecting: false,
            },
            IntersectionEntry {
                section_id: "b".into(),
                is_intersecting: true,
            },
        ];
        assert_eq!(
            messages_from(&entries),
            vec![Message::SectionIntersected {
                section_id: "b".into()
            }]
        );
    }
}
