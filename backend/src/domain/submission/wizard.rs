//! Step navigation for the extended submission form.
//!
//! Moving between steps never validates; the whole draft is validated on
//! submit.

/// Extended form steps, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Name, description, price and category.
    #[default]
    BasicInfo,
    /// Image and external links.
    MediaLinks,
    /// Stock, discount and original price.
    PricingStock,
    /// Feature and tag lists.
    FeaturesTags,
}

impl WizardStep {
    /// Steps in display order.
    pub const ALL: [Self; 4] = [
        Self::BasicInfo,
        Self::MediaLinks,
        Self::PricingStock,
        Self::FeaturesTags,
    ];

    /// Heading shown above the step.
    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::MediaLinks => "Media & Links",
            Self::PricingStock => "Pricing & Stock",
            Self::FeaturesTags => "Features & Tags",
        }
    }

    /// One-based position for the progress indicator.
    pub fn number(self) -> usize {
        match self {
            Self::BasicInfo => 1,
            Self::MediaLinks => 2,
            Self::PricingStock => 3,
            Self::FeaturesTags => 4,
        }
    }

    /// Following step; the last step stays put.
    pub fn next(self) -> Self {
        match self {
            Self::BasicInfo => Self::MediaLinks,
            Self::MediaLinks => Self::PricingStock,
            Self::PricingStock | Self::FeaturesTags => Self::FeaturesTags,
        }
    }

    /// Preceding step; the first step stays put.
    pub fn previous(self) -> Self {
        match self {
            Self::BasicInfo | Self::MediaLinks => Self::BasicInfo,
            Self::PricingStock => Self::MediaLinks,
            Self::FeaturesTags => Self::PricingStock,
        }
    }

    /// Whether this step submits instead of advancing.
    pub fn is_last(self) -> bool {
        self == Self::FeaturesTags
    }
}
