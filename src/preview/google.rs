//! Google SERP snippets (desktop and mobile).
//!
//! Title and description are truncated by *pixel budget*, not character
//! count, using the documented approximate column widths. Rich-result
//! decorations (product line, review stars, sitelinks, FAQ, breadcrumb
//! trail, publication date, video badge) attach to the desktop snippet the
//! way Google lays them out.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

use crate::measure::{FontSpec, MeasureError, TextMeasurer};
use crate::models::{PageMetadata, RichResults};
use crate::preview::{CRUMB_SEP, breadcrumb_path, domain};
use crate::truncate::truncate_to_width;

/// Approximate pixel budgets of Google's result columns.
pub const DESKTOP_TITLE_WIDTH: f32 = 580.0;
pub const DESKTOP_DESCRIPTION_WIDTH: f32 = 920.0;
pub const MOBILE_TITLE_WIDTH: f32 = 600.0;
pub const MOBILE_DESCRIPTION_WIDTH: f32 = 680.0;

/// Font styles Google renders each snippet field in.
pub fn desktop_title_font() -> FontSpec {
    FontSpec::arial(20.0)
}
pub fn desktop_description_font() -> FontSpec {
    FontSpec::arial(14.0)
}
pub fn mobile_title_font() -> FontSpec {
    FontSpec::arial(20.0)
}
pub fn mobile_description_font() -> FontSpec {
    FontSpec::arial(14.0)
}

const TITLE_PLACEHOLDER: &str = "Page Title";
const DESKTOP_DESCRIPTION_PLACEHOLDER: &str =
    "Add a meta description to see how it will appear in search results.";
const MOBILE_DESCRIPTION_PLACEHOLDER: &str =
    "Add a meta description to see how it will appear in mobile search results.";
const URL_PLACEHOLDER: &str = "https://example.com";

/// Five stars with partial fills, plus stable gradient ids for renderers
/// that paint partial fills with an SVG gradient. Ids derive from the star
/// index and the fill quantized to whole percent, so equal ratings always
/// produce equal ids.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRating {
    fills: [f32; 5],
}

impl StarRating {
    pub fn new(rating: f64) -> Self {
        let mut fills = [0.0f32; 5];
        for (i, fill) in fills.iter_mut().enumerate() {
            *fill = (rating - i as f64).clamp(0.0, 1.0) as f32;
        }
        Self { fills }
    }

    /// Fill fraction of each star, left to right, in `0.0..=1.0`.
    pub fn fills(&self) -> [f32; 5] {
        self.fills
    }

    /// Deterministic gradient id for the star at `index` (0-based).
    pub fn gradient_id(&self, index: usize) -> String {
        let pct = (self.fills[index] * 100.0).round() as u32;
        format!("star-fill-{}-{pct}", index + 1)
    }

    /// Text rendering: `★` for stars at least half full, `☆` otherwise.
    pub fn glyphs(&self) -> String {
        self.fills
            .iter()
            .map(|&f| if f >= 0.5 { '★' } else { '☆' })
            .collect()
    }
}

/// Product info rendered under the description.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductLine {
    pub stars: Option<StarRating>,
    /// Rating as displayed, e.g. `"4.7"`.
    pub rating: Option<String>,
    /// Thousands-separated review count, e.g. `"2,841"`.
    pub review_count: Option<String>,
    /// Symbol-prefixed price, e.g. `"$349.99"`.
    pub price: Option<String>,
    pub availability: &'static str,
}

/// Standalone review line (only when no product block is active).
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewLine {
    pub stars: StarRating,
    pub rating: String,
    pub review_count: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitelinkEntry {
    pub text: String,
    /// Scheme-stripped link target; empty when the author gave none.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoBadge {
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
}

/// Fully assembled desktop search snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnippet {
    pub domain: String,
    /// URL line under the domain; an active breadcrumb trail replaces the
    /// path-derived one.
    pub path_line: String,
    pub title: String,
    pub description: String,
    /// Formatted date prefixed to the description, e.g. `"Jan 15, 2025"`.
    pub date_prefix: Option<String>,
    pub product: Option<ProductLine>,
    pub review: Option<ReviewLine>,
    pub sitelinks: Vec<SitelinkEntry>,
    /// "People also ask" questions.
    pub faq: Vec<String>,
    pub video: Option<VideoBadge>,
}

/// Mobile snippet: same truncation contract, narrower budgets, no
/// rich-result decorations.
#[derive(Debug, Clone, PartialEq)]
pub struct MobileSnippet {
    pub domain: String,
    pub title: String,
    pub description: String,
}

pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CAD" => "C$",
        "AUD" => "A$",
        _ => "$",
    }
}

fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}

fn format_date(value: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.format("%b %-d, %Y").to_string())
}

fn format_rating(rating: f64) -> String {
    // One decimal unless the rating is integral, matching typed form input.
    if rating.fract() == 0.0 {
        format!("{rating:.0}")
    } else {
        format!("{rating:.1}")
    }
}

fn build_product_line(rich: &RichResults) -> Option<ProductLine> {
    if !rich.product.enabled {
        return None;
    }
    let p = &rich.product;
    let (stars, rating, review_count) = match p.rating {
        Some(r) => (
            Some(StarRating::new(r)),
            Some(format_rating(r)),
            p.review_count.map(format_count),
        ),
        None => (None, None, None),
    };
    let price = if p.price.is_empty() {
        None
    } else {
        Some(format!("{}{}", currency_symbol(&p.currency), p.price))
    };
    Some(ProductLine {
        stars,
        rating,
        review_count,
        price,
        availability: p.availability.label(),
    })
}

fn build_review_line(rich: &RichResults) -> Option<ReviewLine> {
    // A product block outranks standalone reviews.
    if rich.product.enabled || !rich.reviews.enabled {
        return None;
    }
    let rating = rich.reviews.rating?;
    Some(ReviewLine {
        stars: StarRating::new(rating),
        rating: format_rating(rating),
        review_count: rich.reviews.review_count.map(format_count),
    })
}

fn build_path_line(url: &str, rich: &RichResults) -> String {
    if rich.breadcrumbs.is_active() {
        let trail: Vec<&str> = rich
            .breadcrumbs
            .items
            .iter()
            .filter(|i| !i.is_empty())
            .map(String::as_str)
            .collect();
        format!("{}{CRUMB_SEP}{}", domain(url), trail.join(CRUMB_SEP))
    } else {
        breadcrumb_path(url)
    }
}

/// Assemble the desktop snippet: pixel-truncate title and description, then
/// attach whichever rich-result decorations are active.
pub fn desktop_snippet<M: TextMeasurer + ?Sized>(
    measurer: &M,
    page: &PageMetadata,
    rich: &RichResults,
) -> Result<SearchSnippet, MeasureError> {
    let title_src = if page.title.is_empty() {
        TITLE_PLACEHOLDER
    } else {
        &page.title
    };
    let desc_src = if page.description.is_empty() {
        DESKTOP_DESCRIPTION_PLACEHOLDER
    } else {
        &page.description
    };
    let url = if page.url.is_empty() {
        URL_PLACEHOLDER
    } else {
        &page.url
    };

    let title = truncate_to_width(measurer, title_src, &desktop_title_font(), DESKTOP_TITLE_WIDTH)?;
    let description = truncate_to_width(
        measurer,
        desc_src,
        &desktop_description_font(),
        DESKTOP_DESCRIPTION_WIDTH,
    )?;

    let sitelinks = if rich.sitelinks.is_active() {
        rich.sitelinks
            .links
            .iter()
            .filter(|l| !l.text.is_empty())
            .map(|l| SitelinkEntry {
                text: l.text.clone(),
                url: super::strip_scheme(&l.url).to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let faq = if rich.faq.is_active() {
        rich.faq
            .items
            .iter()
            .filter(|i| !i.question.is_empty())
            .map(|i| i.question.clone())
            .collect()
    } else {
        Vec::new()
    };

    let video = if rich.video.is_active() {
        let v = &rich.video;
        Some(VideoBadge {
            thumbnail_url: (!v.thumbnail_url.is_empty()).then(|| v.thumbnail_url.clone()),
            duration: (!v.duration.is_empty()).then(|| v.duration.clone()),
        })
    } else {
        None
    };

    let date_prefix = if rich.date.is_active() {
        format_date(&rich.date.value)
    } else {
        None
    };

    Ok(SearchSnippet {
        domain: domain(url),
        path_line: build_path_line(url, rich),
        title,
        description,
        date_prefix,
        product: build_product_line(rich),
        review: build_review_line(rich),
        sitelinks,
        faq,
        video,
    })
}

/// Assemble the mobile snippet.
pub fn mobile_snippet<M: TextMeasurer + ?Sized>(
    measurer: &M,
    page: &PageMetadata,
) -> Result<MobileSnippet, MeasureError> {
    let title_src = if page.title.is_empty() {
        TITLE_PLACEHOLDER
    } else {
        &page.title
    };
    let desc_src = if page.description.is_empty() {
        MOBILE_DESCRIPTION_PLACEHOLDER
    } else {
        &page.description
    };
    let url = if page.url.is_empty() {
        URL_PLACEHOLDER
    } else {
        &page.url
    };

    Ok(MobileSnippet {
        domain: domain(url),
        title: truncate_to_width(measurer, title_src, &mobile_title_font(), MOBILE_TITLE_WIDTH)?,
        description: truncate_to_width(
            measurer,
            desc_src,
            &mobile_description_font(),
            MOBILE_DESCRIPTION_WIDTH,
        )?,
    })
}
