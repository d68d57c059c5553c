//! Facebook and Twitter/X link cards.
//!
//! Social platforms publish character budgets, not pixel budgets, so these
//! cards use plain character-count truncation. Deliberately a separate
//! policy from the Google snippets' pixel truncation.

use crate::models::PageMetadata;
use crate::preview::domain;
use crate::truncate::truncate_chars;

pub const FACEBOOK_TITLE_MAX: usize = 90;
pub const TWITTER_TITLE_MAX: usize = 70;
pub const SOCIAL_DESCRIPTION_MAX: usize = 200;

const TITLE_PLACEHOLDER: &str = "Page Title";
const FACEBOOK_DESCRIPTION_PLACEHOLDER: &str =
    "Add a meta description to see how it will appear when shared on Facebook.";
const TWITTER_DESCRIPTION_PLACEHOLDER: &str =
    "Add a meta description to see how it will appear when shared on Twitter/X.";
const URL_PLACEHOLDER: &str = "example.com";

/// The kind of Twitter card the metadata would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Summary,
    SummaryLargeImage,
}

/// Assembled link-card content for either platform.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialCard {
    /// Host name; upper-cased for Facebook, as-is for Twitter.
    pub domain: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub kind: CardKind,
    /// True when every metadata field is blank and the card is built
    /// entirely from placeholder copy; renderers dim such cards.
    pub is_placeholder: bool,
}

fn card_kind(page: &PageMetadata) -> CardKind {
    if page.og_image.is_empty() {
        CardKind::Summary
    } else {
        CardKind::SummaryLargeImage
    }
}

fn source_fields<'a>(page: &'a PageMetadata, desc_placeholder: &'a str) -> (&'a str, &'a str, &'a str) {
    let title = if page.title.is_empty() {
        TITLE_PLACEHOLDER
    } else {
        &page.title
    };
    let description = if page.description.is_empty() {
        desc_placeholder
    } else {
        &page.description
    };
    let url = if page.url.is_empty() {
        URL_PLACEHOLDER
    } else {
        &page.url
    };
    (title, description, url)
}

pub fn facebook_card(page: &PageMetadata) -> SocialCard {
    let (title, description, url) = source_fields(page, FACEBOOK_DESCRIPTION_PLACEHOLDER);
    SocialCard {
        domain: domain(url).to_uppercase(),
        title: truncate_chars(title, FACEBOOK_TITLE_MAX),
        description: truncate_chars(description, SOCIAL_DESCRIPTION_MAX),
        image_url: (!page.og_image.is_empty()).then(|| page.og_image.clone()),
        kind: card_kind(page),
        is_placeholder: page.is_empty(),
    }
}

pub fn twitter_card(page: &PageMetadata) -> SocialCard {
    let (title, description, url) = source_fields(page, TWITTER_DESCRIPTION_PLACEHOLDER);
    SocialCard {
        domain: domain(url),
        title: truncate_chars(title, TWITTER_TITLE_MAX),
        description: truncate_chars(description, SOCIAL_DESCRIPTION_MAX),
        image_url: (!page.og_image.is_empty()).then(|| page.og_image.clone()),
        kind: card_kind(page),
        is_placeholder: page.is_empty(),
    }
}
