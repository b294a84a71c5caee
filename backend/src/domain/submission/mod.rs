//! Product submission form: draft, validation, wizard steps and the form
//! state machine.

mod draft;
mod form;
mod validation;
mod wizard;

pub use draft::{
    DraftField, ExtendedPayload, FieldErrors, FormVariant, ProductDraft, ProductPayload, StockType,
};
pub use form::{
    FormPhase, SUBMIT_FAILED_MESSAGE, SUCCESS_RESET_DELAY, SubmissionForm, SubmitOutcome,
    UnsupportedImage,
};
pub use validation::{EXTENDED_DESCRIPTION_MIN, EXTENDED_NAME_MIN, validate_draft};
pub use wizard::WizardStep;
