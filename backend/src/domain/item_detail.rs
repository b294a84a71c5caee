//! Item detail view model.
//!
//! [`ItemDetail`] derives pricing for a loaded item and tracks the purely
//! local interaction state of the detail page: selected image, quantity,
//! wishlist flag and the transient cart confirmation. Nothing here is
//! persisted.
//!
//! [`ItemDetailController`] owns the load lifecycle. Each load is issued a
//! [`LoadTicket`]; cancelling (unmount, navigating to another item) or
//! starting a newer load invalidates older tickets so late responses are
//! dropped instead of overwriting fresher state.

use std::time::Duration;

use crate::domain::{CatalogueService, Error, ErrorCode, Item};

/// How long the add-to-cart confirmation stays visible.
pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(3000);

/// Round a monetary value to two decimals for display.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Selected quantity; never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest selectable quantity.
    pub const ONE: Self = Self(1);

    /// Build a quantity, flooring at one.
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    /// Underlying count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// One more than `self`.
    #[must_use]
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer than `self`, floored at one.
    #[must_use]
    pub fn decremented(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

/// Why an add-to-cart action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddToCartRejected {
    /// Stock does not permit adding the item.
    #[error("item is out of stock")]
    OutOfStock,
}

/// Transient confirmation shown after adding to the cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartConfirmation {
    /// Quantity added.
    pub quantity: u32,
    /// Price of the added quantity.
    pub total: f64,
}

/// Loaded item plus local detail-page state.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    item: Item,
    selected_image_index: usize,
    quantity: Quantity,
    is_wishlisted: bool,
    confirmation: Option<CartConfirmation>,
}

impl ItemDetail {
    /// Fresh detail state: first image, quantity one, not wishlisted.
    pub fn new(item: Item) -> Self {
        Self {
            item,
            selected_image_index: 0,
            quantity: Quantity::ONE,
            is_wishlisted: false,
            confirmation: None,
        }
    }

    /// The loaded item.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Quantity selected for the cart.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Whether the wishlist toggle is on.
    pub fn is_wishlisted(&self) -> bool {
        self.is_wishlisted
    }

    /// Index of the selected gallery image.
    pub fn selected_image_index(&self) -> usize {
        self.selected_image_index
    }

    /// Image currently shown in the main gallery slot.
    pub fn selected_image(&self) -> &str {
        self.item
            .gallery()
            .get(self.selected_image_index)
            .copied()
            .unwrap_or_else(|| self.item.display_image())
    }

    /// Pending add-to-cart confirmation, if one is showing.
    pub fn confirmation(&self) -> Option<CartConfirmation> {
        self.confirmation
    }

    /// Positive discount percentage, if any.
    fn active_discount(&self) -> Option<f64> {
        self.item.discount().filter(|discount| *discount > 0.0)
    }

    /// Unit price after discount, at full precision.
    ///
    /// # Examples
    /// ```
    /// use product_hub::domain::{Item, ItemDetail, ItemDraft};
    ///
    /// let item = Item::new(ItemDraft {
    ///     id: "a1".into(),
    ///     name: "Kit".into(),
    ///     price: 80.0,
    ///     discount: Some(25.0),
    ///     ..ItemDraft::default()
    /// })
    /// .unwrap();
    /// assert_eq!(ItemDetail::new(item).discounted_price(), 60.0);
    /// ```
    pub fn discounted_price(&self) -> f64 {
        let price = self.item.price();
        match self.active_discount() {
            Some(discount) => price - price * discount / 100.0,
            None => price,
        }
    }

    /// Discounted unit price rounded to cents.
    pub fn display_price(&self) -> f64 {
        round_to_cents(self.discounted_price())
    }

    /// Discounted unit price times quantity.
    pub fn total_price(&self) -> f64 {
        self.discounted_price() * f64::from(self.quantity.get())
    }

    /// Per-unit saving from the discount; zero without one.
    pub fn savings(&self) -> f64 {
        self.item.price() - self.discounted_price()
    }

    /// Whether a positive discount applies.
    pub fn has_discount(&self) -> bool {
        self.active_discount().is_some()
    }

    /// Add one to the selected quantity.
    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.incremented();
    }

    /// Remove one from the selected quantity, never below one.
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.decremented();
    }

    /// Flip the wishlist toggle.
    pub fn toggle_wishlist(&mut self) {
        self.is_wishlisted = !self.is_wishlisted;
    }

    /// Select a gallery image, clamping to the last available one.
    pub fn select_image(&mut self, index: usize) {
        let last = self.item.gallery().len().saturating_sub(1);
        self.selected_image_index = index.min(last);
    }

    /// Record an add-to-cart action. Refused unless the item is in stock.
    pub fn add_to_cart(&mut self) -> Result<CartConfirmation, AddToCartRejected> {
        if !self.item.is_in_stock() {
            return Err(AddToCartRejected::OutOfStock);
        }
        let confirmation = CartConfirmation {
            quantity: self.quantity.get(),
            total: self.total_price(),
        };
        self.confirmation = Some(confirmation);
        Ok(confirmation)
    }

    /// Hide the cart confirmation, typically after [`CONFIRMATION_DURATION`].
    pub fn dismiss_confirmation(&mut self) {
        self.confirmation = None;
    }
}

/// Renderable state of the detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDetailState {
    /// The item request is outstanding.
    Loading,
    /// The item was found.
    Loaded(ItemDetail),
    /// Render "Product Not Found" with a way back to the listing.
    NotFound,
    /// Render the message with a retry affordance.
    Error { message: String },
}

/// Token identifying one issued load.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Controller owning the detail page load lifecycle.
#[derive(Debug, Clone)]
pub struct ItemDetailController {
    state: ItemDetailState,
    generation: u64,
}

impl Default for ItemDetailController {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemDetailController {
    /// Start loading with no request issued.
    pub fn new() -> Self {
        Self {
            state: ItemDetailState::Loading,
            generation: 0,
        }
    }

    /// Current load state of the detail page.
    pub fn state(&self) -> &ItemDetailState {
        &self.state
    }

    /// Mutable access to the loaded detail for user interactions.
    pub fn detail_mut(&mut self) -> Option<&mut ItemDetail> {
        match &mut self.state {
            ItemDetailState::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    /// Start a load, invalidating any earlier ticket.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.state = ItemDetailState::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Invalidate outstanding loads without issuing a new one.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Apply a load outcome. Returns `false` when the ticket is stale and
    /// the outcome was discarded.
    pub fn apply(&mut self, ticket: LoadTicket, outcome: Result<Item, Error>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale item detail response"
            );
            return false;
        }
        self.state = match outcome {
            Ok(item) => ItemDetailState::Loaded(ItemDetail::new(item)),
            Err(error) if error.code() == ErrorCode::NotFound => ItemDetailState::NotFound,
            Err(error) => ItemDetailState::Error {
                message: error.message().to_owned(),
            },
        };
        true
    }

    /// Fetch `id` and apply the result.
    pub async fn load(&mut self, service: &CatalogueService, id: &str) {
        let ticket = self.begin();
        let outcome = service.get_item(id).await;
        self.apply(ticket, outcome);
    }

    /// User-initiated retry: return to loading so the fetch can be reissued.
    pub fn retry(&mut self) -> LoadTicket {
        self.begin()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::Stock;
    use crate::test_support::{draft, item_from, sample_item};
    use rstest::{fixture, rstest};

    fn priced(price: f64, discount: Option<f64>) -> ItemDetail {
        let mut draft = draft("a1", "Kit", price, "design");
        draft.discount = discount;
        ItemDetail::new(item_from(draft))
    }

    #[fixture]
    fn detail() -> ItemDetail {
        priced(100.0, Some(20.0))
    }

    #[rstest]
    #[case(100.0, Some(20.0), 80.0)]
    #[case(100.0, Some(0.0), 100.0)]
    #[case(100.0, None, 100.0)]
    #[case(19.99, Some(100.0), 0.0)]
    fn discounted_price_applies_percentage(
        #[case] price: f64,
        #[case] discount: Option<f64>,
        #[case] expected: f64,
    ) {
        let detail = priced(price, discount);
        assert!((detail.discounted_price() - expected).abs() < f64::EPSILON);
        assert!(detail.discounted_price() <= price);
    }

    #[rstest]
    fn display_price_rounds_to_cents() {
        let detail = priced(9.99, Some(15.0));
        assert!((detail.discounted_price() - 8.4915).abs() < 1e-9);
        assert!((detail.display_price() - 8.49).abs() < 1e-9);
    }

    #[rstest]
    fn total_tracks_quantity(mut detail: ItemDetail) {
        detail.increment_quantity();
        detail.increment_quantity();
        assert_eq!(detail.quantity().get(), 3);
        assert!((detail.total_price() - 240.0).abs() < 1e-9);
        assert!((detail.savings() - 20.0).abs() < 1e-9);
    }

    #[rstest]
    fn quantity_never_drops_below_one(mut detail: ItemDetail) {
        detail.decrement_quantity();
        detail.decrement_quantity();
        assert_eq!(detail.quantity(), Quantity::ONE);
        detail.increment_quantity();
        detail.decrement_quantity();
        assert_eq!(detail.quantity().get(), 1);
    }

    #[rstest]
    fn quantity_saturates() {
        assert_eq!(Quantity::new(u32::MAX).incremented().get(), u32::MAX);
        assert_eq!(Quantity::new(0).get(), 1);
    }

    #[rstest]
    fn wishlist_toggles(mut detail: ItemDetail) {
        detail.toggle_wishlist();
        assert!(detail.is_wishlisted());
        detail.toggle_wishlist();
        assert!(!detail.is_wishlisted());
    }

    #[rstest]
    fn image_selection_clamps(mut detail: ItemDetail) {
        detail.select_image(7);
        assert_eq!(detail.selected_image_index(), 0);
        assert_eq!(detail.selected_image(), detail.item().display_image());
    }

    #[rstest]
    fn add_to_cart_records_confirmation(mut detail: ItemDetail) {
        detail.increment_quantity();
        let confirmation = detail.add_to_cart().expect("in stock");
        assert_eq!(confirmation.quantity, 2);
        assert!((confirmation.total - 160.0).abs() < 1e-9);
        assert_eq!(detail.confirmation(), Some(confirmation));

        detail.dismiss_confirmation();
        assert!(detail.confirmation().is_none());
    }

    #[rstest]
    #[case(Some(Stock::Status("Out of Stock".into())))]
    #[case(None)]
    fn add_to_cart_rejects_unavailable_stock(#[case] stock: Option<Stock>) {
        let mut draft = draft("a1", "Kit", 10.0, "design");
        draft.stock = stock;
        let mut detail = ItemDetail::new(item_from(draft));
        assert_eq!(detail.add_to_cart(), Err(AddToCartRejected::OutOfStock));
        assert!(detail.confirmation().is_none());
    }

    #[rstest]
    fn controller_maps_outcomes() {
        let mut controller = ItemDetailController::new();

        let ticket = controller.begin();
        assert!(controller.apply(ticket, Err(Error::not_found("Item not found"))));
        assert_eq!(controller.state(), &ItemDetailState::NotFound);

        let ticket = controller.retry();
        assert_eq!(controller.state(), &ItemDetailState::Loading);
        assert!(controller.apply(ticket, Err(Error::service_unavailable("store down"))));
        assert_eq!(
            controller.state(),
            &ItemDetailState::Error {
                message: "store down".into()
            }
        );

        let ticket = controller.begin();
        assert!(controller.apply(ticket, Ok(sample_item("a1", "Kit", 5.0, "ai"))));
        assert!(controller.detail_mut().is_some());
    }

    #[rstest]
    fn stale_responses_are_discarded() {
        let mut controller = ItemDetailController::new();
        let first = controller.begin();
        let second = controller.begin();

        assert!(!controller.apply(first, Ok(sample_item("old", "Old", 1.0, "ai"))));
        assert_eq!(controller.state(), &ItemDetailState::Loading);

        assert!(controller.apply(second, Ok(sample_item("new", "New", 1.0, "ai"))));
        match controller.state() {
            ItemDetailState::Loaded(detail) => assert_eq!(detail.item().id().as_ref(), "new"),
            other => panic!("expected loaded state, got {other:?}"),
        }
    }

    #[rstest]
    fn cancelled_loads_do_not_apply() {
        let mut controller = ItemDetailController::new();
        let ticket = controller.begin();
        controller.cancel();
        assert!(!controller.apply(ticket, Ok(sample_item("a1", "Kit", 1.0, "ai"))));
    }
}
