//! Keyword classification of free-text notes into legend categories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotesCategory {
    Owner,
    Tenant,
    Widowed,
    Labourer,
    Shopkeeper,
    Other,
}

/// Rules are tried in order; the first category with a matching keyword wins.
const RULES: &[(NotesCategory, &[&str])] = &[
    (NotesCategory::Owner, &["owner"]),
    (NotesCategory::Tenant, &["tenant"]),
    (NotesCategory::Widowed, &["widow"]),
    (NotesCategory::Labourer, &["labourer", "laborer"]),
    (
        NotesCategory::Shopkeeper,
        &["shopkeeper", "shop keeper", "store", "grocer", "ran a shop"],
    ),
];

impl NotesCategory {
    pub const ALL: [NotesCategory; 6] = [
        Self::Owner,
        Self::Tenant,
        Self::Widowed,
        Self::Labourer,
        Self::Shopkeeper,
        Self::Other,
    ];

    /// Case-insensitive substring match against the keyword rules.
    pub fn classify(notes: &str) -> Self {
        let text = notes.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
            .map_or(Self::Other, |(category, _)| *category)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Tenant => "Tenant",
            Self::Widowed => "Widow/Widower",
            Self::Labourer => "Labourer",
            Self::Shopkeeper => "Shopkeeper / Grocer / Store",
            Self::Other => "Other / Default",
        }
    }

    /// Bar color as a CSS hex string. `Other` shares the owner color.
    pub fn color(self) -> &'static str {
        match self {
            Self::Owner | Self::Other => "#69b3a2",
            Self::Tenant => "#5B9BD5",
            Self::Widowed => "#FF6B6B",
            Self::Labourer => "#4ECDC4",
            Self::Shopkeeper => "#FFE66D",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub category: NotesCategory,
    pub label: &'static str,
    pub color: &'static str,
}

/// Legend rows in display order.
pub fn legend() -> Vec<LegendEntry> {
    NotesCategory::ALL
        .iter()
        .map(|&category| LegendEntry {
            category,
            label: category.label(),
            color: category.color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(NotesCategory::classify("Owner"), NotesCategory::Owner);
        assert_eq!(NotesCategory::classify("TENANT"), NotesCategory::Tenant);
        assert_eq!(NotesCategory::classify("widower"), NotesCategory::Widowed);
        assert_eq!(NotesCategory::classify("farm laborer"), NotesCategory::Labourer);
        assert_eq!(NotesCategory::classify("ran a shop"), NotesCategory::Shopkeeper);
        assert_eq!(NotesCategory::classify("general store"), NotesCategory::Shopkeeper);
        assert_eq!(NotesCategory::classify(""), NotesCategory::Other);
        assert_eq!(NotesCategory::classify("schoolteacher"), NotesCategory::Other);
    }

    #[test]
    fn test_rule_order() {
        // "owner" is checked before "store".
        assert_eq!(NotesCategory::classify("store owner"), NotesCategory::Owner);
    }

    #[test]
    fn test_legend_order() {
        let entries = legend();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].label, "Owner");
        assert_eq!(entries[5].category, NotesCategory::Other);
        assert_eq!(entries[5].color, entries[0].color);
    }
}
