//! Submission form state machine.
//!
//! ```text
//! Editing -> Validating -> Submitting -> Success -> (reset delay) -> Editing
//!                \-> Editing (field errors)
//!                              \-> Editing (submit banner, draft kept)
//! ```

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{info, warn};

use super::draft::{
    DraftField, FieldErrors, FormVariant, ProductDraft, ProductPayload, StockType, parse_number,
};
use super::validation::validate_draft;
use super::wizard::WizardStep;
use crate::domain::ports::{ProductSubmitter, Sleeper};

/// Delay before a successful form clears itself.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Banner message shown when the submitter fails.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to add product. Please try again.";

/// Current phase of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input.
    #[default]
    Editing,
    /// Checking the draft before submission.
    Validating,
    /// Waiting on the submitter.
    Submitting,
    /// Submitted; the form resets after a delay.
    Success,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are shown inline.
    Invalid(FieldErrors),
    /// The submitter failed; the draft is kept for another attempt.
    Failed { message: String },
    /// The payload was accepted.
    Submitted(ProductPayload),
    /// A submission is already in flight or just succeeded.
    Ignored,
}

/// Error returned when an attached file is not an image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported image type: {mime}")]
pub struct UnsupportedImage {
    /// MIME type of the rejected file.
    pub mime: String,
}

/// Client-side product submission form.
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    variant: FormVariant,
    draft: ProductDraft,
    errors: FieldErrors,
    phase: FormPhase,
    step: WizardStep,
    reset_delay: Duration,
}

impl SubmissionForm {
    /// Empty form of the given variant.
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            draft: ProductDraft::default(),
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
            step: WizardStep::BasicInfo,
            reset_delay: SUCCESS_RESET_DELAY,
        }
    }

    /// Override the delay before a successful form resets.
    #[must_use]
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Single-page or wizard layout.
    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Field values as typed.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Field errors from the last validation or submission.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Editing, submitting or success.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Current wizard step; always the first for the simple variant.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Characters typed into the description, for the live counter.
    pub fn description_length(&self) -> usize {
        self.draft.description.chars().count()
    }

    fn edit(&mut self, field: DraftField) -> &mut ProductDraft {
        self.errors.remove(field);
        &mut self.draft
    }

    /// Set the product name and clear its error.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.edit(DraftField::Name).name = value.into();
    }

    /// Set the description and clear its error.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.edit(DraftField::Description).description = value.into();
    }

    /// Set the price text and clear its error.
    pub fn set_price(&mut self, value: impl Into<String>) {
        self.edit(DraftField::Price).price = value.into();
    }

    /// Set the category slug and clear its error.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.edit(DraftField::Category).category = value.into();
    }

    /// Set the demo link and clear its error.
    pub fn set_demo_url(&mut self, value: impl Into<String>) {
        self.edit(DraftField::DemoUrl).demo_url = value.into();
    }

    /// Set the download link and clear its error.
    pub fn set_file_url(&mut self, value: impl Into<String>) {
        self.edit(DraftField::FileUrl).file_url = value.into();
    }

    /// Set the documentation link and clear its error.
    pub fn set_documentation_url(&mut self, value: impl Into<String>) {
        self.edit(DraftField::DocumentationUrl).documentation_url = value.into();
    }

    /// Set the support address and clear its error.
    pub fn set_support_email(&mut self, value: impl Into<String>) {
        self.edit(DraftField::SupportEmail).support_email = value.into();
    }

    /// Set the discount text and clear its error.
    pub fn set_discount(&mut self, value: impl Into<String>) {
        self.edit(DraftField::Discount).discount = value.into();
    }

    /// Set the original price text and clear its error.
    pub fn set_original_price(&mut self, value: impl Into<String>) {
        self.edit(DraftField::OriginalPrice).original_price = value.into();
    }

    /// Choose the stock kind and clear its error.
    pub fn set_stock_type(&mut self, value: StockType) {
        self.edit(DraftField::StockType).stock_type = value;
    }

    /// Toggle the featured flag.
    pub fn set_featured(&mut self, value: bool) {
        self.draft.is_featured = value;
    }

    /// Toggle the premium flag.
    pub fn set_premium(&mut self, value: bool) {
        self.draft.is_premium = value;
    }

    /// Use a direct image URL, replacing any attached file.
    pub fn set_image_url(&mut self, value: impl Into<String>) {
        self.edit(DraftField::ImageUrl).image_url = value.into();
    }

    /// Attach a local image as a `data:` URI for preview, replacing any URL.
    pub fn attach_image_file(&mut self, bytes: &[u8], mime: &str) -> Result<(), UnsupportedImage> {
        if !mime.starts_with("image/") {
            return Err(UnsupportedImage {
                mime: mime.to_owned(),
            });
        }
        let encoded = STANDARD.encode(bytes);
        self.set_image_url(format!("data:{mime};base64,{encoded}"));
        Ok(())
    }

    /// Add a tag. Blank and already-present tags are ignored.
    pub fn add_tag(&mut self, input: &str) -> bool {
        let tag = input.trim();
        if tag.is_empty() || self.draft.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.edit(DraftField::Tags).tags.push(tag.to_owned());
        true
    }

    /// Remove the matching tag, if present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.draft.tags.iter().position(|existing| existing == tag) {
            Some(index) => {
                self.draft.tags.remove(index);
                true
            }
            None => false,
        }
    }

    /// Append a feature. Blank input is ignored; duplicates are kept.
    pub fn add_feature(&mut self, input: &str) -> bool {
        let feature = input.trim();
        if feature.is_empty() {
            return false;
        }
        self.edit(DraftField::Features)
            .features
            .push(feature.to_owned());
        true
    }

    /// Remove the feature at `index`.
    pub fn remove_feature(&mut self, index: usize) -> Option<String> {
        (index < self.draft.features.len()).then(|| self.draft.features.remove(index))
    }

    /// Advance the wizard without validating.
    pub fn next_step(&mut self) -> WizardStep {
        self.step = self.step.next();
        self.step
    }

    /// Step back in the wizard without validating.
    pub fn previous_step(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Validate and, when clean, hand the payload to `submitter`.
    pub async fn submit(&mut self, submitter: &dyn ProductSubmitter) -> SubmitOutcome {
        if self.phase != FormPhase::Editing {
            return SubmitOutcome::Ignored;
        }

        self.phase = FormPhase::Validating;
        let errors = validate_draft(&self.draft, self.variant);
        let price = parse_number(&self.draft.price);
        let Some(price) = price.filter(|_| errors.is_empty()) else {
            self.errors = errors.clone();
            self.phase = FormPhase::Editing;
            return SubmitOutcome::Invalid(errors);
        };
        self.errors = FieldErrors::new();

        self.phase = FormPhase::Submitting;
        let payload = ProductPayload::from_valid_draft(&self.draft, self.variant, price);
        match submitter.submit(&payload).await {
            Ok(()) => {
                info!(name = %payload.name, category = %payload.category, "product submitted");
                self.phase = FormPhase::Success;
                SubmitOutcome::Submitted(payload)
            }
            Err(error) => {
                warn!(error = %error, "product submission failed");
                self.errors.insert(DraftField::Submit, SUBMIT_FAILED_MESSAGE);
                self.phase = FormPhase::Editing;
                SubmitOutcome::Failed {
                    message: SUBMIT_FAILED_MESSAGE.to_owned(),
                }
            }
        }
    }

    /// After a success, wait the reset delay then clear the form.
    pub async fn finish_success(&mut self, sleeper: &dyn Sleeper) {
        if self.phase != FormPhase::Success {
            return;
        }
        sleeper.sleep(self.reset_delay).await;
        self.reset();
    }

    /// Clear every field and return to the first step.
    pub fn reset(&mut self) {
        self.draft = ProductDraft::default();
        self.errors = FieldErrors::new();
        self.step = WizardStep::BasicInfo;
        self.phase = FormPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{MockProductSubmitter, ProductSubmitterError};
    use crate::test_support::RecordingSleeper;
    use rstest::{fixture, rstest};

    #[fixture]
    fn filled() -> SubmissionForm {
        let mut form = SubmissionForm::new(FormVariant::Simple);
        form.set_name("Icon Pack");
        form.set_description("Outline icons");
        form.set_price("12.50");
        form.set_category("design");
        form
    }

    fn accepting() -> MockProductSubmitter {
        let mut submitter = MockProductSubmitter::new();
        submitter.expect_submit().times(1).returning(|_| Ok(()));
        submitter
    }

    #[rstest]
    fn duplicate_tags_collapse_and_features_do_not(mut filled: SubmissionForm) {
        assert!(filled.add_tag(" icons "));
        assert!(!filled.add_tag("icons"));
        assert!(!filled.add_tag("   "));
        assert!(filled.add_feature("SVG"));
        assert!(filled.add_feature(" SVG "));
        assert!(!filled.add_feature(""));

        assert_eq!(filled.draft().tags, vec!["icons"]);
        assert_eq!(filled.draft().features, vec!["SVG", "SVG"]);
    }

    #[rstest]
    fn removing_list_entries(mut filled: SubmissionForm) {
        filled.add_tag("a");
        filled.add_tag("b");
        filled.add_feature("x");
        filled.add_feature("y");

        assert!(filled.remove_tag("a"));
        assert!(!filled.remove_tag("missing"));
        assert_eq!(filled.remove_feature(1), Some("y".to_owned()));
        assert_eq!(filled.remove_feature(5), None);
        assert_eq!(filled.draft().tags, vec!["b"]);
        assert_eq!(filled.draft().features, vec!["x"]);
    }

    #[rstest]
    fn attached_file_and_url_last_write_wins(mut filled: SubmissionForm) {
        filled
            .attach_image_file(b"png", "image/png")
            .expect("image mime");
        assert_eq!(filled.draft().image_url, "data:image/png;base64,cG5n");

        filled.set_image_url("https://example.com/a.png");
        assert_eq!(filled.draft().image_url, "https://example.com/a.png");

        let err = filled
            .attach_image_file(b"%PDF", "application/pdf")
            .expect_err("not an image");
        assert_eq!(err.mime, "application/pdf");
        assert_eq!(filled.draft().image_url, "https://example.com/a.png");
    }

    #[rstest]
    fn description_counter_counts_characters(mut filled: SubmissionForm) {
        filled.set_description("héllo");
        assert_eq!(filled.description_length(), 5);
    }

    #[rstest]
    fn wizard_navigation_skips_validation() {
        let mut form = SubmissionForm::new(FormVariant::Extended);
        assert_eq!(form.next_step(), WizardStep::MediaLinks);
        assert_eq!(form.next_step(), WizardStep::PricingStock);
        assert_eq!(form.previous_step(), WizardStep::MediaLinks);
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_submit_returns_to_editing_with_errors() {
        let mut form = SubmissionForm::new(FormVariant::Simple);
        form.set_description("Outline icons");
        form.set_price("3");
        form.set_category("design");
        let mut submitter = MockProductSubmitter::new();
        submitter.expect_submit().never();

        let outcome = form.submit(&submitter).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected validation failure, got {outcome:?}");
        };
        assert_eq!(errors.fields(), vec![DraftField::Name]);
        assert_eq!(form.phase(), FormPhase::Editing);

        form.set_name("Icons");
        assert!(form.errors().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn successful_submit_then_reset(mut filled: SubmissionForm) {
        let submitter = accepting();

        let outcome = filled.submit(&submitter).await;
        let SubmitOutcome::Submitted(payload) = outcome else {
            panic!("expected submission, got {outcome:?}");
        };
        assert!((payload.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(filled.phase(), FormPhase::Success);
        assert_eq!(filled.submit(&submitter).await, SubmitOutcome::Ignored);

        let sleeper = RecordingSleeper::default();
        filled.finish_success(&sleeper).await;
        assert_eq!(sleeper.recorded(), vec![SUCCESS_RESET_DELAY]);
        assert_eq!(filled.phase(), FormPhase::Editing);
        assert_eq!(filled.draft(), &ProductDraft::default());
    }

    #[rstest]
    #[tokio::test]
    async fn failed_submit_keeps_draft(mut filled: SubmissionForm) {
        let mut submitter = MockProductSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|_| Err(ProductSubmitterError::unavailable("offline")));

        let outcome = filled.submit(&submitter).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: SUBMIT_FAILED_MESSAGE.to_owned()
            }
        );
        assert_eq!(filled.phase(), FormPhase::Editing);
        assert_eq!(filled.errors().get(DraftField::Submit), Some(SUBMIT_FAILED_MESSAGE));
        assert_eq!(filled.draft().name, "Icon Pack");
    }

    #[rstest]
    #[tokio::test]
    async fn finish_success_is_a_no_op_while_editing(mut filled: SubmissionForm) {
        let sleeper = RecordingSleeper::default();
        filled.finish_success(&sleeper).await;
        assert!(sleeper.recorded().is_empty());
        assert_eq!(filled.draft().name, "Icon Pack");
    }
}
