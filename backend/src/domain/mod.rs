//! Domain primitives, services and client-side state machines.
//!
//! Purpose: define the catalogue types and behaviour independently of the
//! HTTP and storage adapters. Adapters depend on this module, never the
//! other way around.
//!
//! Public surface:
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - Item, ItemId, Stock: validated catalogue records.
//! - CatalogueService: read service over the item store port.
//! - CatalogueBrowser, derive_visible_items: listing filters and sort.
//! - ItemDetail, ItemDetailController: detail page view model.
//! - SubmissionForm: product submission state machine.
//! - LoginCredentials, UserId: sign-in primitives.

pub mod auth;
pub mod browsing;
pub mod catalogue_service;
pub mod category;
pub mod error;
pub mod item;
pub mod item_detail;
pub mod ports;
pub mod submission;
pub mod trace_id;

pub use self::auth::{InvalidUserId, LoginCredentials, LoginValidationError, UserId};
pub use self::browsing::{
    ALL_CATEGORIES, BrowsingFilterState, CatalogueBrowser, CategoryFilter, DisplayState,
    ListingState, SortKey, UnknownSortKey, ViewMode, category_options, derive_visible_items,
};
pub use self::catalogue_service::{CatalogueService, DEFAULT_STORE_TIMEOUT, ITEM_NOT_FOUND};
pub use self::category::{AccentToken, CATEGORIES, CategoryAccent, CategoryBadge, category_badge};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::item::{
    ITEM_ID_MAX, Item, ItemDraft, ItemId, ItemValidationError, PLACEHOLDER_IMAGE, Specification,
    Stock,
};
pub use self::item_detail::{
    AddToCartRejected, CONFIRMATION_DURATION, CartConfirmation, ItemDetail, ItemDetailController,
    ItemDetailState, LoadTicket, Quantity, round_to_cents,
};
pub use self::submission::{
    DraftField, EXTENDED_DESCRIPTION_MIN, EXTENDED_NAME_MIN, ExtendedPayload, FieldErrors,
    FormPhase, FormVariant, ProductDraft, ProductPayload, SUBMIT_FAILED_MESSAGE,
    SUCCESS_RESET_DELAY, StockType, SubmissionForm, SubmitOutcome, UnsupportedImage, WizardStep,
    validate_draft,
};
pub use self::trace_id::TraceId;
