//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod item_repository;
mod login_service;
mod product_submitter;
mod sleeper;

#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{FixtureItemRepository, ItemRepository, ItemRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{LoginService, RejectingLoginService};
#[cfg(test)]
pub use product_submitter::MockProductSubmitter;
pub use product_submitter::{ProductSubmitter, ProductSubmitterError};
pub use sleeper::{Sleeper, TokioSleeper};
