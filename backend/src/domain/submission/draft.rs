//! Product draft fields and the payload assembled from them.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Which form is being filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormVariant {
    /// Single page with the core fields.
    #[default]
    Simple,
    /// Four-step wizard with links, pricing and stock fields.
    Extended,
}

/// Form field keys, in display order.
///
/// `Submit` carries the banner error raised when a submission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    /// Product name.
    Name,
    /// Description.
    Description,
    /// Price.
    Price,
    /// Category.
    Category,
    /// Image link or attachment.
    ImageUrl,
    /// Demo link.
    DemoUrl,
    /// Download link.
    FileUrl,
    /// Documentation link.
    DocumentationUrl,
    /// Support email address.
    SupportEmail,
    /// Stock choice.
    StockType,
    /// Discount percentage.
    Discount,
    /// Original price.
    OriginalPrice,
    /// Tag list.
    Tags,
    /// Feature list.
    Features,
    /// Submission banner.
    Submit,
}

impl DraftField {
    /// Key used in serialised error maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::Category => "category",
            Self::ImageUrl => "imageUrl",
            Self::DemoUrl => "demoUrl",
            Self::FileUrl => "fileUrl",
            Self::DocumentationUrl => "documentationUrl",
            Self::SupportEmail => "supportEmail",
            Self::StockType => "stockType",
            Self::Discount => "discount",
            Self::OriginalPrice => "originalPrice",
            Self::Tags => "tags",
            Self::Features => "features",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field errors keyed by field, iterated in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<DraftField, String>);

impl FieldErrors {
    /// Empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace the message for `field`.
    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clear the message for `field`, returning it.
    pub fn remove(&mut self, field: DraftField) -> Option<String> {
        self.0.remove(&field)
    }

    /// Message recorded for `field`.
    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` has an error.
    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields with errors, in display order.
    pub fn fields(&self) -> Vec<DraftField> {
        self.0.keys().copied().collect()
    }

    /// Field and message pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Stock choice offered by the extended form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockType {
    /// Never runs out.
    #[default]
    Unlimited,
    /// Available now.
    InStock,
    /// Not currently available.
    OutOfStock,
}

impl StockType {
    /// Stock text as stored on an item.
    pub fn stock_text(self) -> &'static str {
        match self {
            Self::Unlimited => "unlimited",
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

/// Field values as typed into the form.
///
/// Numeric fields stay text until submission so partially typed input is
/// preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Product name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Price as typed.
    pub price: String,
    /// Category slug.
    pub category: String,
    /// Tags, deduplicated.
    pub tags: Vec<String>,
    /// Feature bullet points; duplicates allowed.
    pub features: Vec<String>,
    /// Image link or data URI preview.
    pub image_url: String,
    /// Demo link.
    pub demo_url: String,
    /// Download link.
    pub file_url: String,
    /// Documentation link.
    pub documentation_url: String,
    /// Support email address.
    pub support_email: String,
    /// Featured listing flag.
    pub is_featured: bool,
    /// Premium listing flag.
    pub is_premium: bool,
    /// Stock choice.
    pub stock_type: StockType,
    /// Discount percentage as typed.
    pub discount: String,
    /// Original price as typed.
    pub original_price: String,
}

/// Parse a monetary or percentage input. Blank input yields `None`.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Submission handed to the [`crate::domain::ports::ProductSubmitter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Trimmed product name.
    pub name: String,
    /// Trimmed description.
    pub description: String,
    /// Parsed price.
    pub price: f64,
    /// Category slug.
    pub category: String,
    /// Tags, deduplicated.
    pub tags: Vec<String>,
    /// Feature bullet points.
    pub features: Vec<String>,
    /// Image link or data URI, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Demo link, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    /// Extended-form fields; absent for the simple form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<ExtendedPayload>,
}

/// Fields only collected by the extended form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedPayload {
    /// Download link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Documentation link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    /// Support email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    /// Featured listing flag.
    pub is_featured: bool,
    /// Premium listing flag.
    pub is_premium: bool,
    /// Stock text as stored on items.
    pub stock: &'static str,
    /// Discount percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Original price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
}

impl ProductPayload {
    /// Build the payload from a draft that passed validation.
    ///
    /// Text fields are trimmed, blank optional fields are omitted and
    /// features are kept in order without blank entries.
    pub(crate) fn from_valid_draft(draft: &ProductDraft, variant: FormVariant, price: f64) -> Self {
        let extended = match variant {
            FormVariant::Simple => None,
            FormVariant::Extended => Some(ExtendedPayload {
                file_url: non_blank(&draft.file_url),
                documentation_url: non_blank(&draft.documentation_url),
                support_email: non_blank(&draft.support_email),
                is_featured: draft.is_featured,
                is_premium: draft.is_premium,
                stock: draft.stock_type.stock_text(),
                discount: parse_number(&draft.discount),
                original_price: parse_number(&draft.original_price),
            }),
        };
        Self {
            name: draft.name.trim().to_owned(),
            description: draft.description.trim().to_owned(),
            price,
            category: draft.category.clone(),
            tags: draft.tags.clone(),
            features: draft
                .features
                .iter()
                .filter(|feature| !feature.trim().is_empty())
                .cloned()
                .collect(),
            image_url: non_blank(&draft.image_url),
            demo_url: non_blank(&draft.demo_url),
            extended,
        }
    }
}
