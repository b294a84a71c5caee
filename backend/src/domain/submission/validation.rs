//! Submission rules, evaluated together when the user submits.

use url::Url;

use super::draft::{DraftField, FieldErrors, FormVariant, ProductDraft, parse_number};
use crate::domain::CategoryAccent;

/// Minimum name length in the extended form, in characters.
pub const EXTENDED_NAME_MIN: usize = 3;
/// Minimum description length in the extended form, in characters.
pub const EXTENDED_DESCRIPTION_MIN: usize = 20;

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn check_name(draft: &ProductDraft, variant: FormVariant, errors: &mut FieldErrors) {
    let len = char_len(&draft.name);
    if len == 0 {
        errors.insert(DraftField::Name, "Product name is required");
    } else if variant == FormVariant::Extended && len < EXTENDED_NAME_MIN {
        errors.insert(
            DraftField::Name,
            format!("Product name must be at least {EXTENDED_NAME_MIN} characters"),
        );
    }
}

fn check_description(draft: &ProductDraft, variant: FormVariant, errors: &mut FieldErrors) {
    let len = char_len(&draft.description);
    if len == 0 {
        errors.insert(DraftField::Description, "Description is required");
    } else if variant == FormVariant::Extended && len < EXTENDED_DESCRIPTION_MIN {
        errors.insert(
            DraftField::Description,
            format!("Description must be at least {EXTENDED_DESCRIPTION_MIN} characters"),
        );
    }
}

fn check_price(draft: &ProductDraft, errors: &mut FieldErrors) {
    if draft.price.trim().is_empty() {
        errors.insert(DraftField::Price, "Price is required");
        return;
    }
    match parse_number(&draft.price) {
        Some(price) if price >= 0.0 => {}
        _ => errors.insert(DraftField::Price, "Price must be a non-negative number"),
    }
}

fn check_category(draft: &ProductDraft, errors: &mut FieldErrors) {
    if draft.category.is_empty() {
        errors.insert(DraftField::Category, "Category is required");
    } else if !CategoryAccent::is_configured(&draft.category) {
        errors.insert(DraftField::Category, "Select one of the listed categories");
    }
}

fn is_web_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

fn is_image_data_uri(raw: &str) -> bool {
    raw.starts_with("data:image/")
}

fn check_link(raw: &str, field: DraftField, errors: &mut FieldErrors) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && !is_web_url(trimmed) {
        errors.insert(field, "Enter a valid http(s) URL");
    }
}

fn check_image(raw: &str, errors: &mut FieldErrors) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && !is_image_data_uri(trimmed) && !is_web_url(trimmed) {
        errors.insert(DraftField::ImageUrl, "Enter a valid image URL");
    }
}

fn is_plausible_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !raw.chars().any(char::is_whitespace)
}

fn check_extended(draft: &ProductDraft, errors: &mut FieldErrors) {
    check_link(&draft.file_url, DraftField::FileUrl, errors);
    check_link(&draft.documentation_url, DraftField::DocumentationUrl, errors);

    let email = draft.support_email.trim();
    if !email.is_empty() && !is_plausible_email(email) {
        errors.insert(DraftField::SupportEmail, "Enter a valid email address");
    }

    if !draft.discount.trim().is_empty() {
        match parse_number(&draft.discount) {
            Some(discount) if (0.0..=100.0).contains(&discount) => {}
            _ => errors.insert(DraftField::Discount, "Discount must be between 0 and 100"),
        }
    }

    if !draft.original_price.trim().is_empty() {
        match parse_number(&draft.original_price) {
            Some(price) if price >= 0.0 => {}
            _ => errors.insert(
                DraftField::OriginalPrice,
                "Original price must be a non-negative number",
            ),
        }
    }

    if draft.tags.is_empty() {
        errors.insert(DraftField::Tags, "Add at least one tag");
    }
    if draft.features.iter().all(|feature| feature.trim().is_empty()) {
        errors.insert(DraftField::Features, "Add at least one feature");
    }
}

/// Validate every field at once.
///
/// # Examples
/// ```
/// use product_hub::domain::{validate_draft, DraftField, FormVariant, ProductDraft};
///
/// let draft = ProductDraft {
///     description: "A tidy icon set".into(),
///     price: "5".into(),
///     category: "design".into(),
///     ..ProductDraft::default()
/// };
/// let errors = validate_draft(&draft, FormVariant::Simple);
/// assert_eq!(errors.fields(), vec![DraftField::Name]);
/// ```
pub fn validate_draft(draft: &ProductDraft, variant: FormVariant) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_name(draft, variant, &mut errors);
    check_description(draft, variant, &mut errors);
    check_price(draft, &mut errors);
    check_category(draft, &mut errors);
    check_image(&draft.image_url, &mut errors);
    check_link(&draft.demo_url, DraftField::DemoUrl, &mut errors);
    if variant == FormVariant::Extended {
        check_extended(draft, &mut errors);
    }
    errors
}
