use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use serpview::measure::{GlyphMeasurer, Measurer};
use serpview::models::Document;
use serpview::preview::google::{self, SearchSnippet};
use serpview::preview::social::{self, CardKind, SocialCard};
use serpview::validate::{
    self, CharLimits, DESCRIPTION_LIMITS, OG_DESCRIPTION_LIMITS, OG_TITLE_LIMITS, TITLE_LIMITS,
};
use serpview::export;

#[derive(Parser, Debug)]
#[command(
    name = "serpview",
    version,
    about = "Preview page metadata as Google search snippets & social cards"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a platform's preview of the metadata to stdout.
    Preview(PreviewArgs),
    /// Report character-count status for each metadata field.
    Check(InputArgs),
    /// Generate the HTML meta tags (print or save).
    Export(ExportArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Platform {
    Desktop,
    Mobile,
    Facebook,
    Twitter,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Read metadata and rich-result config from a JSON file.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Page title (overrides the input file).
    #[arg(long)]
    title: Option<String>,
    /// Meta description (overrides the input file).
    #[arg(long)]
    description: Option<String>,
    /// Canonical URL (overrides the input file).
    #[arg(long)]
    url: Option<String>,
    /// Open Graph image URL (overrides the input file).
    #[arg(long)]
    image: Option<String>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Which platform to preview.
    #[arg(long, value_enum, default_value_t = Platform::Desktop)]
    platform: Platform,
    /// TrueType font file for pixel measurement (default: probe system
    /// fonts, then fall back to Arial-metric heuristic).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Write the tags to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Preview(args) => cmd_preview(args),
        Command::Check(args) => cmd_check(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn load_document(args: &InputArgs) -> Result<Document> {
    let mut doc = match &args.input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Document::default(),
    };
    if let Some(t) = &args.title {
        doc.page.title = t.clone();
    }
    if let Some(d) = &args.description {
        doc.page.description = d.clone();
    }
    if let Some(u) = &args.url {
        doc.page.url = u.clone();
    }
    if let Some(i) = &args.image {
        doc.page.og_image = i.clone();
    }
    Ok(doc)
}

fn build_measurer(font: Option<&PathBuf>) -> Result<Measurer> {
    match font {
        Some(path) => {
            let m = GlyphMeasurer::from_font_file(path)?;
            Ok(Measurer::Glyph(m))
        }
        None => Ok(Measurer::detect()),
    }
}

fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let doc = load_document(&args.input)?;
    match args.platform {
        Platform::Desktop => {
            let measurer = build_measurer(args.font.as_ref())?;
            let snippet = google::desktop_snippet(&measurer, &doc.page, &doc.rich_results)?;
            print_search_snippet(&snippet);
        }
        Platform::Mobile => {
            let measurer = build_measurer(args.font.as_ref())?;
            let snippet = google::mobile_snippet(&measurer, &doc.page)?;
            println!("{}", snippet.domain);
            println!("{}", snippet.title);
            println!("{}", snippet.description);
        }
        Platform::Facebook => print_social_card(&social::facebook_card(&doc.page)),
        Platform::Twitter => print_social_card(&social::twitter_card(&doc.page)),
    }
    Ok(())
}

fn print_search_snippet(s: &SearchSnippet) {
    println!("{}", s.domain);
    println!("{}", s.path_line);
    println!("{}", s.title);
    match &s.date_prefix {
        Some(date) => println!("{date} — {}", s.description),
        None => println!("{}", s.description),
    }
    if let Some(p) = &s.product {
        let mut line = String::new();
        if let Some(stars) = &p.stars {
            line.push_str(&stars.glyphs());
        }
        if let Some(r) = &p.rating {
            line.push_str(&format!(" {r}"));
        }
        if let Some(c) = &p.review_count {
            line.push_str(&format!(" ({c})"));
        }
        if let Some(price) = &p.price {
            line.push_str(&format!(" · {price}"));
        }
        line.push_str(&format!(" · {}", p.availability));
        println!("{}", line.trim_start());
    }
    if let Some(r) = &s.review {
        let mut line = format!("{} Rating: {}", r.stars.glyphs(), r.rating);
        if let Some(c) = &r.review_count {
            line.push_str(&format!(" · {c} reviews"));
        }
        println!("{line}");
    }
    if let Some(v) = &s.video {
        let mut line = String::from("Video");
        if let Some(t) = &v.thumbnail_url {
            line.push_str(&format!(" · {t}"));
        }
        if let Some(d) = &v.duration {
            line.push_str(&format!(" · {d}"));
        }
        println!("{line}");
    }
    if !s.sitelinks.is_empty() {
        println!("Sitelinks:");
        for link in &s.sitelinks {
            if link.url.is_empty() {
                println!("  {}", link.text);
            } else {
                println!("  {} ({})", link.text, link.url);
            }
        }
    }
    if !s.faq.is_empty() {
        println!("People also ask:");
        for q in &s.faq {
            println!("  {q}");
        }
    }
}

fn print_social_card(card: &SocialCard) {
    let kind = match card.kind {
        CardKind::Summary => "summary",
        CardKind::SummaryLargeImage => "summary_large_image",
    };
    if card.is_placeholder {
        println!("(placeholder preview: no metadata provided)");
    }
    println!("{}", card.domain);
    println!("{}", card.title);
    println!("{}", card.description);
    match &card.image_url {
        Some(url) => println!("[{kind}] {url}"),
        None => println!("[{kind}] no image provided"),
    }
}

fn cmd_check(args: InputArgs) -> Result<()> {
    let doc = load_document(&args)?;
    let rows: [(&str, &str, &CharLimits); 4] = [
        ("title", doc.page.title.as_str(), &TITLE_LIMITS),
        ("description", doc.page.description.as_str(), &DESCRIPTION_LIMITS),
        ("og:title", doc.page.title.as_str(), &OG_TITLE_LIMITS),
        ("og:description", doc.page.description.as_str(), &OG_DESCRIPTION_LIMITS),
    ];
    for (field, value, limits) in rows {
        let length = value.chars().count();
        let status = validate::classify(length, limits);
        let max = limits.max.or(limits.optimal_max).unwrap_or(0);
        match status.label() {
            Some(label) => println!("{field:<15} {length:>3} / {max}  {status} — {label}"),
            None => println!("{field:<15} {length:>3} / {max}  {status}"),
        }
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let doc = load_document(&args.input)?;
    let tags = export::meta_tags(&doc.page);
    match &args.out {
        Some(path) => {
            fs::write(path, format!("{tags}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Saved {} tags to {}", tags.lines().count(), path.display());
        }
        None => println!("{tags}"),
    }
    Ok(())
}
