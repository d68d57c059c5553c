//! serpview
//!
//! A lightweight Rust library for previewing how a page's metadata will
//! appear in Google search results and social link cards, and for exporting
//! the matching HTML meta tags. Pairs with the `serpview` CLI.
//!
//! ### Features
//! - Pixel-accurate title/description truncation against Google's column
//!   budgets (glyph-metric measurement with a deterministic fallback)
//! - Character-count validation with per-field status classification
//! - Desktop/mobile SERP snippets with rich-result decorations (product,
//!   reviews, sitelinks, FAQ, breadcrumbs, date, video)
//! - Facebook and Twitter/X card assembly
//! - Meta-tag export with correct HTML escaping
//!
//! ### Example
//! ```
//! use serpview::measure::HeuristicMeasurer;
//! use serpview::models::{PageMetadata, RichResults};
//! use serpview::preview::google;
//!
//! let page = PageMetadata {
//!     title: "Best Wireless Headphones 2025 — Expert Reviews & Buyer's Guide".into(),
//!     url: "https://www.techreviews.com/audio/best-wireless-headphones".into(),
//!     ..Default::default()
//! };
//! let snippet = google::desktop_snippet(&HeuristicMeasurer, &page, &RichResults::default())?;
//! assert_eq!(snippet.domain, "www.techreviews.com");
//! # Ok::<(), serpview::measure::MeasureError>(())
//! ```

pub mod export;
pub mod measure;
pub mod models;
pub mod preview;
pub mod truncate;
pub mod validate;

pub use measure::{FontSpec, GlyphMeasurer, HeuristicMeasurer, MeasureError, Measurer, TextMeasurer};
pub use models::{Document, PageMetadata, RichResults};
pub use truncate::{ELLIPSIS, truncate_chars, truncate_to_width};
pub use validate::{CharLimits, CharStatus, classify};
