use colored::Colorize;
use shelf::api::{BookDetail, CmdMessage, Listing, MessageLevel};
use shelf::config::{ShelfConfig, KEYS};
use shelf::model::{Book, Genre, Review, MAX_RATING};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 6;
const AUTHOR_WIDTH: usize = 24;
const META_WIDTH: usize = 26;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_listing(listing: &Listing) {
    if listing.catalog_size == 0 {
        println!("The catalog is empty.");
        return;
    }
    if listing.books.is_empty() {
        println!("No books match.");
        return;
    }
    print_books(&listing.books);
}

pub(super) fn print_books<'a, I>(books: I)
where
    I: IntoIterator<Item = &'a Book>,
{
    for book in books {
        println!("{}", format_book_line(book));
    }
}

fn format_book_line(book: &Book) -> String {
    let id = format!("{:>width$}. ", book.id, width = ID_WIDTH - 2);
    let author = pad_to_width(&truncate_to_width(&book.author, AUTHOR_WIDTH), AUTHOR_WIDTH);
    let meta = format_meta(book);

    let available = LINE_WIDTH.saturating_sub(ID_WIDTH + AUTHOR_WIDTH + META_WIDTH + 2);
    let title = pad_to_width(&truncate_to_width(&book.title, available), available);

    format!(
        "{}{} {} {}",
        id.yellow(),
        title.bold(),
        author,
        format!("{:>width$}", meta, width = META_WIDTH).dimmed()
    )
}

/// "Fantasy · 1937 · 310p", leaving out what the record lacks.
fn format_meta(book: &Book) -> String {
    let mut parts = vec![book.genre.name().to_string()];
    if let Some(year) = book.release_year() {
        parts.push(year.to_string());
    }
    if book.pages > 0 {
        parts.push(format!("{}p", book.pages));
    }
    parts.join(" · ")
}

pub(super) fn print_detail(detail: &BookDetail, config: &ShelfConfig) {
    let book = &detail.book;
    println!("{} {}", format!("{}.", book.id).yellow(), book.title.bold());
    println!("by {}", book.author);
    println!("--------------------------------");
    println!("Genre:    {}", book.genre);
    println!("Size:     {} ({} pages)", book.size_class(), book.pages);
    match book.release_date {
        Some(date) => println!("Released: {}", date.format("%Y-%m-%d")),
        None => println!("Released: {}", "unknown".dimmed()),
    }
    if !book.img.is_empty() {
        println!("Cover:    {}", book.img);
    }
    if !book.description.is_empty() {
        println!();
        println!("{}", book.description);
    }
    println!();
    if detail.reviews.is_empty() {
        println!("{}", "No reviews yet.".dimmed());
        return;
    }
    println!(
        "Average rating: {} / {} ({} reviews)",
        config.format_rating(detail.average_rating).bold(),
        MAX_RATING,
        detail.reviews.len()
    );
    print_reviews(&detail.reviews);
}

pub(super) fn print_reviews(reviews: &[Review]) {
    for review in reviews {
        let filled = usize::from(review.rating.min(MAX_RATING));
        let stars = format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(usize::from(MAX_RATING) - filled)
        );
        println!(
            "  {} {} {}",
            format!("#{}", review.id).dimmed(),
            stars.yellow(),
            review.name.bold()
        );
        if !review.comment.is_empty() {
            println!("      {}", review.comment);
        }
    }
}

pub(super) fn print_genre_counts(counts: &[(Genre, usize)]) {
    let width = Genre::ALL
        .iter()
        .map(|g| g.name().width())
        .max()
        .unwrap_or(0);
    for (genre, count) in counts {
        let line = format!("{} {:>5}", pad_to_width(genre.name(), width), count);
        if *count == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_config(config: &ShelfConfig) {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::model::BookDraft;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // Wide characters take two columns each.
        assert_eq!(truncate_to_width("日本語の本", 5), "日本…");
    }

    #[test]
    fn meta_skips_missing_fields() {
        let book = shelf::model::Book::from_draft(1, BookDraft::new("T", "A"));
        assert_eq!(format_meta(&book), "Other");

        let book = shelf::model::Book::from_draft(
            2,
            BookDraft::new("T", "A")
                .with_genre(Genre::Fantasy)
                .with_pages(310)
                .with_release_date(chrono::NaiveDate::from_ymd_opt(1937, 9, 21).unwrap()),
        );
        assert_eq!(format_meta(&book), "Fantasy · 1937 · 310p");
    }

    #[test]
    fn padding_fills_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }
}
