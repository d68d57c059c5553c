use serde::{Deserialize, Serialize};

/// The four metadata fields a page author controls. Empty strings mean "not
/// provided"; preview builders substitute placeholder copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub og_image: String,
}

impl PageMetadata {
    /// True when no field has been filled in at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.url.is_empty()
            && self.og_image.is_empty()
    }
}

/// Rich-result enhancements that alter the Google snippet's layout. Each
/// feature carries its own `enabled` toggle; a feature only renders when it
/// is enabled *and* has usable content (see the `is_active` methods).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichResults {
    pub product: Product,
    pub reviews: Reviews,
    pub sitelinks: Sitelinks,
    pub faq: Faq,
    pub breadcrumbs: Breadcrumbs,
    pub date: PublicationDate,
    pub video: Video,
}

/// Product availability states Google renders with distinct labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    InStock,
    OutOfStock,
    PreOrder,
}

impl Availability {
    pub fn label(self) -> &'static str {
        match self {
            Availability::InStock => "In stock",
            Availability::OutOfStock => "Out of stock",
            Availability::PreOrder => "Pre-order",
        }
    }
}

/// Product info line: price, availability, and an optional aggregate rating.
/// Takes precedence over a standalone [`Reviews`] block when both are on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub enabled: bool,
    /// Price as the author typed it, e.g. `"349.99"`.
    pub price: String,
    /// ISO currency code; unknown codes fall back to `$`.
    pub currency: String,
    pub availability: Availability,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
}

/// Standalone review stars, shown only when no product block is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reviews {
    pub enabled: bool,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sitelink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sitelinks {
    pub enabled: bool,
    pub links: Vec<Sitelink>,
}

impl Sitelinks {
    pub fn is_active(&self) -> bool {
        self.enabled && self.links.iter().any(|l| !l.text.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub enabled: bool,
    pub items: Vec<FaqItem>,
}

impl Faq {
    pub fn is_active(&self) -> bool {
        self.enabled && self.items.iter().any(|i| !i.question.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breadcrumbs {
    pub enabled: bool,
    /// Trail segments, e.g. `["Home", "Audio", "Headphones"]`. Blank
    /// segments are skipped when rendering.
    pub items: Vec<String>,
}

impl Breadcrumbs {
    pub fn is_active(&self) -> bool {
        self.enabled && self.items.iter().any(|i| !i.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationDate {
    pub enabled: bool,
    /// ISO date, `YYYY-MM-DD`.
    pub value: String,
}

impl PublicationDate {
    pub fn is_active(&self) -> bool {
        self.enabled && !self.value.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub enabled: bool,
    pub thumbnail_url: String,
    /// Display duration, e.g. `"3:42"`.
    pub duration: String,
}

impl Video {
    pub fn is_active(&self) -> bool {
        self.enabled && (!self.thumbnail_url.is_empty() || !self.duration.is_empty())
    }
}

/// Top-level input document: page metadata plus the rich-result
/// configuration. This is the schema of the CLI's `--input` JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(flatten)]
    pub page: PageMetadata,
    pub rich_results: RichResults,
}
