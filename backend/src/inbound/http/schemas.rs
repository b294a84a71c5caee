//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers below mirror their JSON shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with current state.
    #[schema(rename = "conflict")]
    Conflict,
    /// A backing store is unreachable or timed out.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Item not found")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Specification`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Specification)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SpecificationSchema {
    #[schema(example = "Format")]
    name: String,
    #[schema(example = "Figma")]
    value: String,
}

/// OpenAPI schema for [`crate::domain::Item`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Item)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ItemSchema {
    /// Store identifier.
    #[schema(rename = "_id", example = "65f1c0ffee0000000000abcd")]
    id: String,
    #[schema(example = "Pixel Pro UI Kit")]
    name: String,
    description: String,
    /// Price before discount.
    #[schema(example = 49.0, minimum = 0.0)]
    price: f64,
    #[schema(example = "design")]
    category: String,
    /// Percentage off `price`, within `0..=100`.
    #[schema(minimum = 0.0, maximum = 100.0)]
    discount: Option<f64>,
    #[schema(rename = "originalPrice")]
    original_price: Option<f64>,
    /// Free-form status such as `In Stock`, or `unlimited`.
    #[schema(example = "In Stock")]
    stock: Option<String>,
    image: Option<String>,
    tags: Vec<String>,
    features: Vec<String>,
    #[schema(minimum = 0.0, maximum = 5.0)]
    rating: Option<f32>,
    reviews: Option<u32>,
    brand: Option<String>,
    specifications: Vec<SpecificationSchema>,
    #[schema(rename = "createdAt", format = DateTime)]
    created_at: Option<String>,
}
