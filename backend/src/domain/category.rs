//! Category identifiers and their display accents.
//!
//! The catalogue vocabulary is open: items may carry any category string.
//! The submission form only offers the configured identifiers below, and the
//! presentation layer resolves every identifier to a label and accent token.

use serde::Serialize;

/// Accent token used to colour category badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentToken {
    /// Primary brand colour.
    Primary,
    /// Secondary brand colour.
    Secondary,
    /// Highlight colour.
    Accent,
    /// Informational blue.
    Info,
    /// Success green.
    Success,
    /// Warning amber.
    Warning,
    /// Fallback for unknown categories.
    Neutral,
}

impl AccentToken {
    /// Token name as consumed by the stylesheet.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Neutral => "neutral",
        }
    }
}

/// Display metadata for one category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryAccent {
    /// Category slug as stored on items.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Badge colour.
    pub accent: AccentToken,
}

/// Configured categories offered by the submission form.
pub const CATEGORIES: [CategoryAccent; 6] = [
    CategoryAccent {
        id: "saas",
        label: "SaaS Tools",
        accent: AccentToken::Primary,
    },
    CategoryAccent {
        id: "design",
        label: "Design Assets",
        accent: AccentToken::Secondary,
    },
    CategoryAccent {
        id: "ai",
        label: "AI Tools",
        accent: AccentToken::Accent,
    },
    CategoryAccent {
        id: "components",
        label: "Components",
        accent: AccentToken::Info,
    },
    CategoryAccent {
        id: "marketing",
        label: "Marketing",
        accent: AccentToken::Success,
    },
    CategoryAccent {
        id: "security",
        label: "Security",
        accent: AccentToken::Warning,
    },
];

impl CategoryAccent {
    /// Look up a configured category by identifier.
    pub fn configured(id: &str) -> Option<&'static Self> {
        CATEGORIES.iter().find(|category| category.id == id)
    }

    /// Whether `id` is one of the configured category identifiers.
    pub fn is_configured(id: &str) -> bool {
        Self::configured(id).is_some()
    }
}

/// Resolved label and accent for any category string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBadge {
    /// Label to render.
    pub label: String,
    /// Badge colour.
    pub accent: AccentToken,
}

/// Resolve an arbitrary category identifier for display.
///
/// Unknown identifiers keep their raw text as the label and use the neutral
/// accent.
///
/// # Examples
/// ```
/// use product_hub::domain::{category_badge, AccentToken};
///
/// assert_eq!(category_badge("ai").accent, AccentToken::Accent);
/// assert_eq!(category_badge("hardware").accent, AccentToken::Neutral);
/// ```
pub fn category_badge(id: &str) -> CategoryBadge {
    match CategoryAccent::configured(id) {
        Some(category) => CategoryBadge {
            label: category.label.to_owned(),
            accent: category.accent,
        },
        None => CategoryBadge {
            label: id.to_owned(),
            accent: AccentToken::Neutral,
        },
    }
}
