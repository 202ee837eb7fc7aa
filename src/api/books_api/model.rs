//! Google Books API model types
//!
//! Data structures for `volumes` responses. Every volume field is read on its
//! own so a missing or malformed value only loses that field, never the item.

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

trait DeVal<'a>: Sized {
    fn dval(v: &'a Value) -> Result<Self>;
}

impl<'a> DeVal<'a> for u32 {
    fn dval(v: &Value) -> Result<Self> {
        Ok(Self::deserialize(v)?)
    }
}

impl<'a> DeVal<'a> for String {
    fn dval(v: &Value) -> Result<Self> {
        Ok(Self::deserialize(v)?)
    }
}

impl<'a> DeVal<'a> for &'a Vec<Value> {
    fn dval(v: &'a Value) -> Result<Self> {
        match v {
            Value::Array(v) => Ok(v),
            _ => Err(anyhow!("json not a array")),
        }
    }
}

fn get_val_chain<'a, T>(v: &'a Value, names: &[&str]) -> Result<T>
where
    T: DeVal<'a>,
{
    let v = names.iter().fold(Ok(v), |v: Result<&Value>, n| {
        v?.get(n)
            .ok_or_else(|| anyhow!("key '{}' not found, in chain {:?}", n, names))
    })?;
    T::dval(v)
}

macro_rules! get_val {
    (@as $t:ty, $v:expr, $($n:expr),+) => {
        get_val_chain::<$t>($v, &[$($n),+]).context(format!("at {}:{}", file!(), line!()))
    };
    ($v:expr, $($n:expr),+) => {
        get_val_chain($v, &[$($n),+]).context(format!("at {}:{}", file!(), line!()))
    };
}

/// Read a string field, treating blank strings as absent
fn opt_text(v: &Value, names: &[&str]) -> Option<String> {
    get_val_chain::<String>(v, names)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Read an array of strings, skipping elements that are not strings
fn text_list(v: &Value, names: &[&str]) -> Vec<String> {
    get_val_chain::<&Vec<Value>>(v, names)
        .map(|array| {
            array
                .iter()
                .filter_map(|item| item.as_str())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Rewrite a plain `http://` URL to `https://`
pub fn secure_url(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    }
}

/// ISBN or other identifier attached to a volume
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndustryIdentifier {
    pub kind: String,
    pub identifier: String,
}

/// One book search result
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Volume {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    /// Raw description as returned by the API (may contain HTML)
    pub description: Option<String>,
    /// Cover thumbnail, always `https`
    pub thumbnail: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub categories: Vec<String>,
    pub identifiers: Vec<IndustryIdentifier>,
    pub info_link: Option<String>,
    pub preview_link: Option<String>,
    pub publisher: Option<String>,
    pub language: Option<String>,
}

impl Volume {
    /// Build a volume from one element of the `items` array.
    ///
    /// `index` is used to synthesize an id when the item carries none.
    pub fn from_item(v: &Value, index: usize) -> Self {
        let info = v.get("volumeInfo").unwrap_or(&Value::Null);

        let id = opt_text(v, &["id"]).unwrap_or_else(|| format!("item-{}", index));

        let thumbnail = opt_text(info, &["imageLinks", "thumbnail"])
            .or_else(|| opt_text(info, &["imageLinks", "smallThumbnail"]))
            .map(|url| secure_url(&url));

        let identifiers = get_val!(@as &Vec<Value>, info, "industryIdentifiers")
            .map(|array| {
                array
                    .iter()
                    .filter_map(|item| {
                        Some(IndustryIdentifier {
                            kind: opt_text(item, &["type"]).unwrap_or_else(|| "OTHER".to_string()),
                            identifier: opt_text(item, &["identifier"])?,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id,
            title: opt_text(info, &["title"]),
            authors: text_list(info, &["authors"]),
            description: opt_text(info, &["description"]),
            thumbnail,
            published_date: opt_text(info, &["publishedDate"]),
            page_count: get_val!(@as u32, info, "pageCount").ok().filter(|n| *n > 0),
            categories: text_list(info, &["categories"]),
            identifiers,
            info_link: opt_text(info, &["infoLink"]),
            preview_link: opt_text(info, &["previewLink"]),
            publisher: opt_text(info, &["publisher"]),
            language: opt_text(info, &["language"]),
        }
    }

    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Preferred external link: the info page, else the preview page
    pub fn external_link(&self) -> Option<&str> {
        self.info_link.as_deref().or(self.preview_link.as_deref())
    }
}

/// Parse a `volumes` response body.
///
/// A missing or null `items` means zero results. A body that is not JSON,
/// carries an API `error` object, or has a non-array `items` is an error.
pub fn to_volumes(json: &str) -> Result<Vec<Volume>> {
    let value = serde_json::from_str::<Value>(json).context("response is not valid JSON")?;

    if let Some(error) = value.get("error") {
        let message: String = get_val!(error, "message").unwrap_or_else(|_| error.to_string());
        bail!("API error: {}", message);
    }

    let items = match value.get("items") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => bail!("'items' is not an array"),
    };

    Ok(items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_object())
        .map(|(i, item)| Volume::from_item(item, i))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "id": "abc123",
                "volumeInfo": {
                    "title": "El nombre del viento",
                    "authors": ["Patrick Rothfuss"],
                    "publisher": "Plaza & Janés",
                    "publishedDate": "2009-05-01",
                    "description": "<p>Una <b>historia</b></p>",
                    "industryIdentifiers": [
                        {"type": "ISBN_13", "identifier": "9788401337208"},
                        {"type": "ISBN_10"}
                    ],
                    "pageCount": 880,
                    "categories": ["Fiction"],
                    "imageLinks": {"thumbnail": "http://books.google.com/books?id=abc123&img=1"},
                    "language": "es",
                    "infoLink": "https://books.google.com/books?id=abc123"
                }
            },
            {
                "volumeInfo": {
                    "title": 42,
                    "authors": ["A", 7, ""],
                    "pageCount": "many"
                }
            }
        ]
    }"#;

    #[test]
    fn test_full_item_parsed() {
        let volumes = to_volumes(SAMPLE).unwrap();
        assert_eq!(volumes.len(), 2);

        let v = &volumes[0];
        assert_eq!(v.id, "abc123");
        assert_eq!(v.title.as_deref(), Some("El nombre del viento"));
        assert_eq!(v.authors, vec!["Patrick Rothfuss".to_string()]);
        assert_eq!(v.page_count, Some(880));
        assert_eq!(v.categories, vec!["Fiction".to_string()]);
        assert_eq!(v.language.as_deref(), Some("es"));
        assert_eq!(
            v.thumbnail.as_deref(),
            Some("https://books.google.com/books?id=abc123&img=1")
        );
        // Identifier without a value is dropped
        assert_eq!(v.identifiers.len(), 1);
        assert_eq!(v.identifiers[0].kind, "ISBN_13");
    }

    #[test]
    fn test_malformed_fields_fall_back_individually() {
        let volumes = to_volumes(SAMPLE).unwrap();
        let v = &volumes[1];
        assert_eq!(v.id, "item-1");
        assert_eq!(v.title, None);
        assert_eq!(v.authors, vec!["A".to_string()]);
        assert_eq!(v.page_count, None);
        assert_eq!(v.thumbnail, None);
        assert_eq!(v.external_link(), None);
    }

    #[test]
    fn test_missing_items_is_empty_result() {
        let volumes = to_volumes(r#"{"kind": "books#volumes", "totalItems": 0}"#).unwrap();
        assert!(volumes.is_empty());
    }

    #[test]
    fn test_invalid_bodies_are_errors() {
        assert!(to_volumes("<html>oops</html>").is_err());
        assert!(to_volumes(r#"{"items": {"id": "x"}}"#).is_err());
        let err = to_volumes(r#"{"error": {"code": 403, "message": "Daily limit exceeded"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Daily limit exceeded"));
    }

    #[test]
    fn test_secure_url() {
        assert_eq!(secure_url("http://x.org/a"), "https://x.org/a");
        assert_eq!(secure_url("https://x.org/a"), "https://x.org/a");
        assert_eq!(secure_url("/no-cover.png"), "/no-cover.png");
    }
}
