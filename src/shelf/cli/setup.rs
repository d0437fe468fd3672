use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use shelf::engine::{FilterCriteria, YearRange};
use shelf::model::{parse_release_date, BookId, Genre, ReviewId, SizeClass};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Browse, filter and review a library catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog directory (defaults to $SHELF_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List books matching the filters
    #[command(alias = "ls", display_order = 1)]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of pages to reveal
        #[arg(short, long, value_name = "N", conflicts_with = "all")]
        pages: Option<usize>,

        /// Reveal every matching book
        #[arg(short, long)]
        all: bool,
    },

    /// Page through matching books interactively
    #[command(display_order = 2)]
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show a book with its reviews and average rating
    #[command(alias = "v", display_order = 10)]
    View { id: BookId },

    /// Add a book
    #[command(alias = "n", display_order = 11)]
    Add {
        title: String,
        author: String,

        #[command(flatten)]
        fields: BookFields,
    },

    /// Change fields of a book
    #[command(alias = "e", display_order = 12)]
    Edit {
        id: BookId,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// Forget the release date
        #[arg(long, conflicts_with = "released")]
        clear_released: bool,

        #[command(flatten)]
        fields: BookFields,
    },

    /// Delete one or more books and their reviews
    #[command(alias = "rm", display_order = 13)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<BookId>,
    },

    /// Manage reviews
    #[command(display_order = 20)]
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },

    /// Import books from JSON files or directories of them
    #[command(display_order = 30)]
    Import {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Count books per genre
    #[command(display_order = 31)]
    Genres,

    /// Get or set configuration
    #[command(display_order = 40)]
    Config {
        /// Configuration key (page-size, rating-precision)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// Review a book
    Add {
        book_id: BookId,

        /// Rating from 1 to 5
        rating: u8,

        /// Reviewer name
        #[arg(short, long)]
        name: String,

        /// Review text
        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// Delete a review
    #[command(alias = "rm")]
    Delete { id: ReviewId },

    /// List the reviews of a book
    #[command(alias = "ls")]
    List { book_id: BookId },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Text to find in titles and authors
    #[arg(short, long)]
    pub search: Option<String>,

    /// Genre to include (repeatable)
    #[arg(short, long = "genre", value_name = "GENRE")]
    pub genres: Vec<Genre>,

    /// Size class to include: small, medium, large (repeatable)
    #[arg(long = "size", value_name = "SIZE")]
    pub sizes: Vec<SizeClass>,

    /// Earliest release year
    #[arg(long, value_name = "YEAR", allow_negative_numbers = true)]
    pub from: Option<i32>,

    /// Latest release year
    #[arg(long, value_name = "YEAR", allow_negative_numbers = true)]
    pub to: Option<i32>,
}

impl FilterArgs {
    /// A missing year bound is open; giving either bound excludes undated books.
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_search(self.search.clone().unwrap_or_default())
            .with_genres(self.genres.iter().copied())
            .with_sizes(self.sizes.iter().copied());
        if self.from.is_some() || self.to.is_some() {
            criteria = criteria.with_years(YearRange::new(
                self.from.unwrap_or(i32::MIN),
                self.to.unwrap_or(i32::MAX),
            ));
        }
        criteria
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct BookFields {
    /// Page count
    #[arg(long)]
    pub pages: Option<u32>,

    /// Genre
    #[arg(short, long)]
    pub genre: Option<Genre>,

    /// Release date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub released: Option<NaiveDate>,

    /// Description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Cover image URL
    #[arg(long)]
    pub img: Option<String>,
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_release_date(raw).ok_or_else(|| format!("not a date: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shelf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn list_filters_build_criteria() {
        let cli = parse(&[
            "ls", "-s", "harry", "-g", "fantasy", "-g", "sci-fi", "--size", "medium", "--from",
            "1990",
        ]);
        let Some(Commands::List { filter, pages, all }) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(pages, None);
        assert!(!all);

        let criteria = filter.criteria();
        assert_eq!(criteria.search, "harry");
        assert!(criteria.genres.contains(&Genre::Fantasy));
        assert!(criteria.genres.contains(&Genre::ScienceFiction));
        assert!(criteria.sizes.contains(&SizeClass::Medium));
        assert_eq!(criteria.years, Some(YearRange::new(1990, i32::MAX)));
    }

    #[test]
    fn no_year_flags_means_no_year_restriction() {
        assert_eq!(FilterArgs::default().criteria(), FilterCriteria::default());
    }

    #[test]
    fn pages_and_all_conflict() {
        assert!(Cli::try_parse_from(["shelf", "list", "--pages", "2", "--all"]).is_err());
    }

    #[test]
    fn add_parses_fields() {
        let cli = parse(&[
            "--data-dir", "/tmp/x", "n", "Dune", "Frank Herbert", "--pages", "412", "-g",
            "science fiction", "--released", "1965-08-01",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        let Some(Commands::Add {
            title,
            author,
            fields,
        }) = cli.command
        else {
            panic!("expected add");
        };
        assert_eq!(title, "Dune");
        assert_eq!(author, "Frank Herbert");
        assert_eq!(fields.pages, Some(412));
        assert_eq!(fields.genre, Some(Genre::ScienceFiction));
        assert_eq!(fields.released, NaiveDate::from_ymd_opt(1965, 8, 1));
    }

    #[test]
    fn edit_can_clear_the_release_date() {
        let cli = parse(&["e", "4", "--clear-released"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Edit {
                id: 4,
                clear_released: true,
                ..
            })
        ));
        let both = [
            "shelf",
            "edit",
            "4",
            "--clear-released",
            "--released",
            "2001-01-01",
        ];
        assert!(Cli::try_parse_from(both).is_err());
    }

    #[test]
    fn unknown_genre_is_rejected() {
        assert!(Cli::try_parse_from(["shelf", "list", "-g", "cooking"]).is_err());
    }

    #[test]
    fn review_subcommands() {
        let cli = parse(&["review", "add", "3", "5", "--name", "Ann"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Review {
                action: ReviewCommands::Add {
                    book_id: 3,
                    rating: 5,
                    ..
                }
            })
        ));
    }
}
