//! Display text for book results
//!
//! Turns a [`Volume`] into the strings shown on a result card and in the
//! detail panel, applying the fallbacks for missing fields.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::Volume;
use crate::i18n::{Key, Locale};

/// Longest title shown on a card
pub const CARD_TITLE_CHARS: usize = 60;

/// Longest description excerpt shown on a card
pub const CARD_BLURB_CHARS: usize = 150;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Remove markup tags and decode the handful of entities the API emits
pub fn strip_html(html: &str) -> String {
    let text = TAG_RE.replace_all(html, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    SPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Cut `text` to `max` characters, appending `suffix` only when cut
pub fn truncate_chars(text: &str, max: usize, suffix: &str) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}{}", text[..end].trim_end(), suffix),
        None => text.to_string(),
    }
}

/// Text for one result card
#[derive(Debug, Clone, PartialEq)]
pub struct CardText {
    pub title: String,
    pub authors: String,
    pub blurb: String,
    pub link: Option<String>,
}

impl CardText {
    pub fn new(volume: &Volume, locale: &Locale) -> Self {
        let title = volume
            .title
            .as_deref()
            .unwrap_or(locale.get(Key::BookUnknownTitle));

        let blurb = description_text(volume)
            .map(|text| truncate_chars(&text, CARD_BLURB_CHARS, "..."))
            .unwrap_or_else(|| locale.get(Key::BookNoDescription).to_string());

        Self {
            title: truncate_chars(title, CARD_TITLE_CHARS, "…"),
            authors: authors_text(volume, locale),
            blurb,
            link: volume.external_link().map(str::to_string),
        }
    }
}

/// Text for the detail panel
#[derive(Debug, Clone, PartialEq)]
pub struct DetailText {
    pub title: String,
    pub authors: String,
    pub description: String,
    /// Labelled facts, only those the volume has
    pub facts: Vec<(Key, String)>,
    pub link: Option<String>,
}

impl DetailText {
    pub fn new(volume: &Volume, locale: &Locale) -> Self {
        let mut facts = Vec::new();

        if let Some(publisher) = &volume.publisher {
            facts.push((Key::DetailPublisher, publisher.clone()));
        }
        if let Some(date) = &volume.published_date {
            facts.push((Key::DetailPublished, date.clone()));
        }
        if let Some(pages) = volume.page_count {
            facts.push((Key::DetailPages, pages.to_string()));
        }
        if !volume.categories.is_empty() {
            facts.push((Key::DetailCategories, volume.categories.join(", ")));
        }
        if !volume.identifiers.is_empty() {
            let ids = volume
                .identifiers
                .iter()
                .map(|id| format!("{} {}", id.kind.replace('_', "-"), id.identifier))
                .collect::<Vec<_>>()
                .join(" · ");
            facts.push((Key::DetailIdentifiers, ids));
        }
        if let Some(language) = &volume.language {
            facts.push((Key::DetailLanguage, language.to_uppercase()));
        }

        Self {
            title: volume
                .title
                .clone()
                .unwrap_or_else(|| locale.get(Key::BookUnknownTitle).to_string()),
            authors: authors_text(volume, locale),
            description: description_text(volume)
                .unwrap_or_else(|| locale.get(Key::BookNoDescription).to_string()),
            facts,
            link: volume.external_link().map(str::to_string),
        }
    }
}

fn authors_text(volume: &Volume, locale: &Locale) -> String {
    if volume.authors.is_empty() {
        locale.get(Key::BookUnknownAuthor).to_string()
    } else {
        volume.authors.join(", ")
    }
}

fn description_text(volume: &Volume) -> Option<String> {
    volume
        .description
        .as_deref()
        .map(strip_html)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IndustryIdentifier;
    use crate::i18n::Language;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Una <b>historia</b></p>"), "Una historia");
        assert_eq!(strip_html("Tom &amp; Jerry<br/>again"), "Tom & Jerry again");
        assert_eq!(strip_html("<i></i>"), "");
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("short", 10, "…"), "short");
        assert_eq!(truncate_chars("ñandú ñandú", 5, "…"), "ñandú…");
        assert_eq!(truncate_chars("exactly10!", 10, "…"), "exactly10!");
    }

    #[test]
    fn test_card_fallbacks() {
        let locale = Locale::new(Language::English);
        let card = CardText::new(&Volume::default(), &locale);
        assert_eq!(card.title, "Unknown title");
        assert_eq!(card.authors, "Unknown author");
        assert_eq!(card.blurb, "No description available.");
        assert_eq!(card.link, None);

        let spanish = CardText::new(&Volume::default(), &Locale::new(Language::Spanish));
        assert_eq!(spanish.title, "Sin título");
        assert_eq!(spanish.authors, "Autor desconocido");
    }

    #[test]
    fn test_card_truncation() {
        let volume = Volume {
            title: Some("T".repeat(80)),
            authors: vec!["Ana".to_string(), "Luis".to_string()],
            description: Some(format!("<p>{}</p>", "d".repeat(200))),
            preview_link: Some("https://books.google.com/preview".to_string()),
            ..Volume::default()
        };
        let card = CardText::new(&volume, &Locale::default());

        assert_eq!(card.title.chars().count(), CARD_TITLE_CHARS + 1);
        assert!(card.title.ends_with('…'));
        assert_eq!(card.authors, "Ana, Luis");
        assert_eq!(card.blurb, format!("{}...", "d".repeat(CARD_BLURB_CHARS)));
        assert_eq!(card.link.as_deref(), Some("https://books.google.com/preview"));
    }

    #[test]
    fn test_detail_facts() {
        let volume = Volume {
            title: Some("Dune".to_string()),
            description: Some("<b>Spice</b>".to_string()),
            publisher: Some("Chilton".to_string()),
            page_count: Some(412),
            identifiers: vec![IndustryIdentifier {
                kind: "ISBN_13".to_string(),
                identifier: "9780441013593".to_string(),
            }],
            language: Some("en".to_string()),
            ..Volume::default()
        };
        let detail = DetailText::new(&volume, &Locale::default());

        assert_eq!(detail.description, "Spice");
        assert_eq!(
            detail.facts,
            vec![
                (Key::DetailPublisher, "Chilton".to_string()),
                (Key::DetailPages, "412".to_string()),
                (Key::DetailIdentifiers, "ISBN-13 9780441013593".to_string()),
                (Key::DetailLanguage, "EN".to_string()),
            ]
        );
    }
}
