//! # Domain Model: Books, Reviews and Their Wire Shape
//!
//! Records arrive from the catalog source in the same JSON shape the REST API
//! serves them in:
//!
//! ```text
//! { "id": 7, "title": "The Hobbit", "author": "J.R.R. Tolkien",
//!   "description": "...", "pages": 310, "img": "https://...",
//!   "genres": "Fantasy", "releasedate": "1937-09-21T00:00:00.000Z" }
//! ```
//!
//! ## Lenient Fields
//!
//! Two fields are parsed leniently because the source does not guarantee them:
//!
//! - **`releasedate`**: accepted as `YYYY-MM-DD`, an RFC 3339 timestamp, or a
//!   naive `YYYY-MM-DDTHH:MM:SS`. Anything else (missing, `null`, a number,
//!   garbage) becomes `None`. The record still loads; it simply never matches
//!   a year-range filter.
//! - **`genres`**: matched case- and separator-insensitively against the fixed
//!   [`Genre`] set. A comma-separated list resolves to its first known entry.
//!   Unknown values become [`Genre::Other`].
//!
//! Everything else is required to have the documented type.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub type BookId = u64;
pub type ReviewId = u64;

/// Lowest and highest ratings a review may carry.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Genre {
    Fantasy,
    ScienceFiction,
    Mystery,
    Thriller,
    Romance,
    Horror,
    Historical,
    Biography,
    NonFiction,
    Poetry,
    Classic,
    Children,
    YoungAdult,
    #[default]
    Other,
}

impl Genre {
    pub const ALL: [Genre; 14] = [
        Genre::Fantasy,
        Genre::ScienceFiction,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Romance,
        Genre::Horror,
        Genre::Historical,
        Genre::Biography,
        Genre::NonFiction,
        Genre::Poetry,
        Genre::Classic,
        Genre::Children,
        Genre::YoungAdult,
        Genre::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::Romance => "Romance",
            Genre::Horror => "Horror",
            Genre::Historical => "Historical",
            Genre::Biography => "Biography",
            Genre::NonFiction => "Non-Fiction",
            Genre::Poetry => "Poetry",
            Genre::Classic => "Classic",
            Genre::Children => "Children",
            Genre::YoungAdult => "Young Adult",
            Genre::Other => "Other",
        }
    }

    /// Resolves a raw `genres` field: the first comma-separated entry that names
    /// a known genre wins, otherwise [`Genre::Other`].
    pub fn from_field(raw: &str) -> Genre {
        raw.split(',')
            .find_map(|part| part.parse().ok())
            .unwrap_or(Genre::Other)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        let genre = match key.as_str() {
            "fantasy" => Genre::Fantasy,
            "sciencefiction" | "scifi" | "sf" => Genre::ScienceFiction,
            "mystery" | "crime" => Genre::Mystery,
            "thriller" => Genre::Thriller,
            "romance" => Genre::Romance,
            "horror" => Genre::Horror,
            "historical" | "historicalfiction" | "history" => Genre::Historical,
            "biography" | "autobiography" | "memoir" => Genre::Biography,
            "nonfiction" => Genre::NonFiction,
            "poetry" => Genre::Poetry,
            "classic" | "classics" => Genre::Classic,
            "children" | "childrens" | "kids" => Genre::Children,
            "youngadult" | "ya" => Genre::YoungAdult,
            "other" => Genre::Other,
            _ => return Err(format!("Unknown genre: {}", s.trim())),
        };
        Ok(genre)
    }
}

impl Serialize for Genre {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Genre::from_field).unwrap_or_default())
    }
}

/// Derived bucket for a book's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// `< 200` pages is Small, `200..=399` Medium, `>= 400` Large.
    pub fn from_pages(pages: u32) -> Self {
        match pages {
            0..=199 => SizeClass::Small,
            200..=399 => SizeClass::Medium,
            _ => SizeClass::Large,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
        };
        f.write_str(name)
    }
}

impl FromStr for SizeClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Ok(SizeClass::Small),
            "medium" | "m" => Ok(SizeClass::Medium),
            "large" | "l" => Ok(SizeClass::Large),
            other => Err(format!("Unknown size class: {}", other)),
        }
    }
}

/// Parses a release date the way the catalog source may send it.
///
/// Returns `None` for anything that is not a recognizable calendar date.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => parse_release_date(&s),
        _ => None,
    })
}

fn lenient_genre<'de, D>(deserializer: D) -> Result<Genre, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Genre::from_field(&s),
        _ => Genre::Other,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub img: String,
    #[serde(rename = "genres", default, deserialize_with = "lenient_genre")]
    pub genre: Genre,
    #[serde(rename = "releasedate", default, deserialize_with = "lenient_date")]
    pub release_date: Option<NaiveDate>,
}

impl Book {
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            description: draft.description,
            pages: draft.pages,
            img: draft.img,
            genre: draft.genre,
            release_date: draft.release_date,
        }
    }

    pub fn size_class(&self) -> SizeClass {
        SizeClass::from_pages(self.pages)
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// A book that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub img: String,
    #[serde(rename = "genres", default, deserialize_with = "lenient_genre")]
    pub genre: Genre,
    #[serde(rename = "releasedate", default, deserialize_with = "lenient_date")]
    pub release_date: Option<NaiveDate>,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            description: book.description,
            pages: book.pages,
            img: book.img,
            genre: book.genre,
            release_date: book.release_date,
        }
    }
}

/// Field-wise edit of an existing book. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub pages: Option<u32>,
    pub img: Option<String>,
    pub genre: Option<Genre>,
    /// `Some(None)` makes the book undated.
    pub release_date: Option<Option<NaiveDate>>,
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        *self == BookUpdate::default()
    }

    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(description) = &self.description {
            book.description = description.clone();
        }
        if let Some(pages) = self.pages {
            book.pages = pages;
        }
        if let Some(img) = &self.img {
            book.img = img.clone();
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
        }
        if let Some(date) = self.release_date {
            book.release_date = date;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub book_id: BookId,
    pub name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

impl NewReview {
    pub fn new(name: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            comment: comment.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn size_class_boundaries() {
        assert_eq!(SizeClass::from_pages(0), SizeClass::Small);
        assert_eq!(SizeClass::from_pages(150), SizeClass::Small);
        assert_eq!(SizeClass::from_pages(199), SizeClass::Small);
        assert_eq!(SizeClass::from_pages(200), SizeClass::Medium);
        assert_eq!(SizeClass::from_pages(250), SizeClass::Medium);
        assert_eq!(SizeClass::from_pages(399), SizeClass::Medium);
        assert_eq!(SizeClass::from_pages(400), SizeClass::Large);
        assert_eq!(SizeClass::from_pages(450), SizeClass::Large);
    }

    #[test]
    fn genre_parsing_ignores_case_and_separators() {
        assert_eq!("science fiction".parse::<Genre>(), Ok(Genre::ScienceFiction));
        assert_eq!("ScienceFiction".parse::<Genre>(), Ok(Genre::ScienceFiction));
        assert_eq!("science-fiction".parse::<Genre>(), Ok(Genre::ScienceFiction));
        assert_eq!("Non-Fiction".parse::<Genre>(), Ok(Genre::NonFiction));
        assert!("cooking".parse::<Genre>().is_err());
    }

    #[test]
    fn genre_field_takes_first_known_entry() {
        assert_eq!(Genre::from_field("Adventure, Fantasy"), Genre::Fantasy);
        assert_eq!(Genre::from_field("Cooking"), Genre::Other);
        assert_eq!(Genre::from_field(""), Genre::Other);
    }

    #[test]
    fn release_date_formats() {
        assert_eq!(parse_release_date("2010-12-31"), Some(date(2010, 12, 31)));
        assert_eq!(
            parse_release_date("1937-09-21T00:00:00.000Z"),
            Some(date(1937, 9, 21))
        );
        assert_eq!(
            parse_release_date("2001-02-03T04:05:06"),
            Some(date(2001, 2, 3))
        );
        assert_eq!(parse_release_date("not a date"), None);
        assert_eq!(parse_release_date(""), None);
    }

    #[test]
    fn book_deserializes_api_shape() {
        let json = r#"{
            "id": 1,
            "title": "Harry Potter",
            "author": "J.K. Rowling",
            "description": "A boy wizard",
            "pages": 320,
            "img": "https://covers.example/hp.jpg",
            "genres": "Fantasy",
            "releasedate": "1997-06-26T00:00:00.000Z"
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.genre, Genre::Fantasy);
        assert_eq!(book.release_year(), Some(1997));
        assert_eq!(book.size_class(), SizeClass::Medium);
    }

    #[test]
    fn malformed_optional_fields_do_not_fail_the_record() {
        let json = r#"{"id": 2, "title": "T", "author": "A", "genres": 42, "releasedate": "soon"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.genre, Genre::Other);
        assert_eq!(book.release_date, None);
        assert_eq!(book.pages, 0);

        let json = r#"{"id": 3, "title": "T", "author": "A", "releasedate": null}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.release_date, None);
    }

    #[test]
    fn book_serializes_with_api_field_names() {
        let book = Book::from_draft(
            9,
            BookDraft::new("Dune", "Frank Herbert")
                .with_genre(Genre::ScienceFiction)
                .with_release_date(date(1965, 8, 1)),
        );
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["genres"], "Science Fiction");
        assert_eq!(value["releasedate"], "1965-08-01");

        let back: Book = serde_json::from_value(value).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn review_uses_camel_case_book_id() {
        let json = r#"{"id": 1, "bookId": 4, "name": "Ann", "rating": 5, "comment": "Great"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.book_id, 4);
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut book = Book::from_draft(1, BookDraft::new("Old", "Author").with_pages(100));
        let update = BookUpdate {
            title: Some("New".into()),
            pages: Some(500),
            ..Default::default()
        };
        assert!(!update.is_empty());
        update.apply(&mut book);
        assert_eq!(book.title, "New");
        assert_eq!(book.author, "Author");
        assert_eq!(book.pages, 500);
        assert!(BookUpdate::default().is_empty());
    }
}
