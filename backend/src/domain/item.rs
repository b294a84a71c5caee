//! Catalogue item read model.
//!
//! Items arrive from the document store as loosely shaped JSON. They are
//! parsed through [`ItemDraft`] and validated by [`Item::new`], so an `Item`
//! value always satisfies the catalogue invariants: non-blank name,
//! non-negative prices, a discount within `0..=100`, a rating within
//! `0..=5` and unique tags.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image shown whenever an item carries no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-product.svg";

/// Longest identifier accepted from a request path.
pub const ITEM_ID_MAX: usize = 64;

/// Sentinel stock value meaning the item never runs out.
const UNLIMITED_STOCK: &str = "unlimited";

/// Stock status that permits adding to the cart.
const IN_STOCK: &str = "in stock";

/// Validation errors raised while building catalogue items.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItemValidationError {
    /// The identifier is blank.
    #[error("item id must not be empty")]
    EmptyId,
    /// The identifier exceeds the length limit.
    #[error("item id must be at most {max} characters")]
    IdTooLong { max: usize },
    /// The identifier contains characters outside the allowed set.
    #[error("item id may only contain ASCII letters, digits, '-' or '_'")]
    InvalidId,
    /// The name is blank.
    #[error("item name must not be empty")]
    EmptyName,
    /// A price field is negative or not finite.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidAmount { field: &'static str, value: f64 },
    /// The discount is not a percentage.
    #[error("discount must be within 0..=100 (got {value})")]
    DiscountOutOfRange { value: f64 },
    /// The rating is outside the five-star scale.
    #[error("rating must be within 0..=5 (got {value})")]
    RatingOutOfRange { value: f32 },
    /// A tag appears more than once.
    #[error("duplicate tag: {tag}")]
    DuplicateTag { tag: String },
}

/// Opaque, store-assigned item identifier.
///
/// # Examples
/// ```
/// use product_hub::domain::ItemId;
///
/// let id = ItemId::new("65f1c0ffee0000000000abcd").expect("valid id");
/// assert_eq!(id.as_ref(), "65f1c0ffee0000000000abcd");
/// assert!(ItemId::new("not an id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Validate and construct an identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, ItemValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ItemValidationError::EmptyId);
        }
        if raw.len() > ITEM_ID_MAX {
            return Err(ItemValidationError::IdTooLong { max: ITEM_ID_MAX });
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ItemValidationError::InvalidId);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stock status as authored: free text or the `unlimited` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stock {
    /// Never runs out.
    Unlimited,
    /// Free-text status such as `In Stock`.
    Status(String),
}

impl Stock {
    /// Whether the item may be added to the cart.
    pub fn is_available(&self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Status(text) => text.trim().eq_ignore_ascii_case(IN_STOCK),
        }
    }
}

impl From<String> for Stock {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case(UNLIMITED_STOCK) {
            Self::Unlimited
        } else {
            Self::Status(value)
        }
    }
}

impl From<Stock> for String {
    fn from(value: Stock) -> Self {
        match value {
            Stock::Unlimited => UNLIMITED_STOCK.to_owned(),
            Stock::Status(text) => text,
        }
    }
}

/// Name/value pair shown in the specifications table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    /// Row label.
    pub name: String,
    /// Row value.
    pub value: String,
}

/// Unvalidated item document as stored.
///
/// Missing keys fall back to their defaults; [`Item::new`] decides whether
/// the result is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemDraft {
    /// Store identifier, read from `_id`.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Current price.
    pub price: f64,
    /// Category slug.
    pub category: String,
    /// Discount percentage.
    pub discount: Option<f64>,
    /// Price before the discount.
    pub original_price: Option<f64>,
    /// Stock marker.
    pub stock: Option<Stock>,
    /// Image reference.
    pub image: Option<String>,
    /// Search tags.
    pub tags: Vec<String>,
    /// Feature bullet points.
    pub features: Vec<String>,
    /// Average rating out of five.
    pub rating: Option<f32>,
    /// Review count.
    pub reviews: Option<u32>,
    /// Publisher or brand.
    pub brand: Option<String>,
    /// Specification rows.
    pub specifications: Vec<Specification>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Validated catalogue item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemDraft", rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    id: ItemId,
    name: String,
    description: String,
    price: f64,
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stock: Option<Stock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    tags: Vec<String>,
    features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reviews: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    specifications: Vec<Specification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

fn check_amount(field: &'static str, value: f64) -> Result<f64, ItemValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ItemValidationError::InvalidAmount { field, value })
    }
}

impl Item {
    /// Validate a draft into an item.
    ///
    /// # Examples
    /// ```
    /// use product_hub::domain::{Item, ItemDraft};
    ///
    /// let item = Item::new(ItemDraft {
    ///     id: "a1".into(),
    ///     name: "Pixel Pro".into(),
    ///     price: 49.0,
    ///     category: "design".into(),
    ///     ..ItemDraft::default()
    /// })
    /// .expect("valid item");
    /// assert_eq!(item.price(), 49.0);
    /// ```
    pub fn new(draft: ItemDraft) -> Result<Self, ItemValidationError> {
        let ItemDraft {
            id,
            name,
            description,
            price,
            category,
            discount,
            original_price,
            stock,
            image,
            tags,
            features,
            rating,
            reviews,
            brand,
            specifications,
            created_at,
        } = draft;

        let id = ItemId::new(id)?;
        if name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        let price = check_amount("price", price)?;
        let original_price = original_price
            .map(|value| check_amount("originalPrice", value))
            .transpose()?;
        if let Some(value) = discount.filter(|value| !(0.0..=100.0).contains(value)) {
            return Err(ItemValidationError::DiscountOutOfRange { value });
        }
        if let Some(value) = rating.filter(|value| !(0.0..=5.0).contains(value)) {
            return Err(ItemValidationError::RatingOutOfRange { value });
        }
        let mut seen = HashSet::with_capacity(tags.len());
        if let Some(tag) = tags.iter().find(|tag| !seen.insert(tag.as_str())) {
            return Err(ItemValidationError::DuplicateTag { tag: tag.clone() });
        }

        Ok(Self {
            id,
            name,
            description,
            price,
            category,
            discount,
            original_price,
            stock,
            image: image.filter(|value| !value.trim().is_empty()),
            tags,
            features,
            rating,
            reviews,
            brand,
            specifications,
            created_at,
        })
    }

    /// Catalogue identifier, serialised as `_id`.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Current price; never negative.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Category slug as stored, possibly unknown to the accent table.
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Discount percentage, when one is advertised.
    pub fn discount(&self) -> Option<f64> {
        self.discount
    }

    /// Price before the discount, when recorded.
    pub fn original_price(&self) -> Option<f64> {
        self.original_price
    }

    /// Stock marker; `None` when the record omits it.
    pub fn stock(&self) -> Option<&Stock> {
        self.stock.as_ref()
    }

    /// Whether stock permits adding the item to a cart. Missing stock is
    /// treated as unavailable.
    pub fn is_in_stock(&self) -> bool {
        self.stock.as_ref().is_some_and(Stock::is_available)
    }

    /// Stored image reference, without the placeholder fallback.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Image to render, falling back to [`PLACEHOLDER_IMAGE`].
    pub fn display_image(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Images available to the detail gallery. Never empty.
    pub fn gallery(&self) -> Vec<&str> {
        vec![self.display_image()]
    }

    /// Search tags in stored order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Feature bullet points in stored order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Average rating out of five.
    pub fn rating(&self) -> Option<f32> {
        self.rating
    }

    /// Number of reviews behind the rating.
    pub fn reviews(&self) -> Option<u32> {
        self.reviews
    }

    /// Publisher or brand name.
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Name/value specification rows.
    pub fn specifications(&self) -> &[Specification] {
        &self.specifications
    }

    /// Creation timestamp, used by the newest-first sort.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl TryFrom<ItemDraft> for Item {
    type Error = ItemValidationError;

    fn try_from(value: ItemDraft) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
