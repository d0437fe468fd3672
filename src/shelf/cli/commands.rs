use super::print::{
    print_books, print_config, print_detail, print_genre_counts, print_listing, print_messages,
    print_reviews,
};
use super::setup::{BookFields, Cli, Commands, FilterArgs, ReviewCommands};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use shelf::api::{ConfigAction, Reveal, ShelfApi, ShelfPaths};
use shelf::browse::{BrowseSession, PageRequest};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::model::{BookDraft, BookId, BookUpdate, NewReview, ReviewId};
use shelf::store::fs::FileStore;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "SHELF_HOME";

struct AppContext {
    api: ShelfApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { filter, pages, all }) => {
            let reveal = if all {
                Reveal::All
            } else {
                Reveal::Pages(pages.unwrap_or(1))
            };
            handle_list(&ctx, &filter, reveal)
        }
        Some(Commands::Browse { filter }) => handle_browse(&ctx, &filter),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Add {
            title,
            author,
            fields,
        }) => handle_add(&mut ctx, title, author, fields),
        Some(Commands::Edit {
            id,
            title,
            author,
            clear_released,
            fields,
        }) => {
            let release_date = if clear_released {
                Some(None)
            } else {
                fields.released.map(Some)
            };
            let update = BookUpdate {
                title,
                author,
                description: fields.description,
                pages: fields.pages,
                img: fields.img,
                genre: fields.genre,
                release_date,
            };
            handle_edit(&mut ctx, id, &update)
        }
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Review { action }) => match action {
            ReviewCommands::Add {
                book_id,
                rating,
                name,
                comment,
            } => handle_review_add(&mut ctx, book_id, NewReview::new(name, rating, comment)),
            ReviewCommands::Delete { id } => handle_review_delete(&mut ctx, id),
            ReviewCommands::List { book_id } => handle_review_list(&ctx, book_id),
        },
        Some(Commands::Import { paths }) => handle_import(&mut ctx, paths),
        Some(Commands::Genres) => handle_genres(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, &FilterArgs::default(), Reveal::default()),
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default is warn.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    tracing::debug!(data_dir = %data_dir.display(), "using catalog directory");

    let config = ShelfConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable config, using defaults");
        ShelfConfig::default()
    });
    let store = FileStore::new(&data_dir);
    let api = ShelfApi::new(store, ShelfPaths { data_dir }, config);

    Ok(AppContext { api })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Api("Could not determine a data directory".into()))
}

fn handle_list(ctx: &AppContext, filter: &FilterArgs, reveal: Reveal) -> Result<()> {
    let criteria = filter.criteria();
    let result = ctx.api.list_books(&criteria, reveal)?;
    if let Some(listing) = &result.listing {
        print_listing(listing);
        if listing.books.is_empty() && criteria.years.is_some() {
            if let Some(span) = listing.year_span {
                println!("Catalog release years span {}-{}.", span.min, span.max);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_browse(ctx: &AppContext, filter: &FilterArgs) -> Result<()> {
    let mut session = ctx.api.browse(filter.criteria())?;
    let stdin = std::io::stdin();
    browse_loop(&mut session, stdin.lock())
}

/// Enter reveals the next page, `/text` searches anew, `q` or end of input quits.
/// The session outlives the end of the list so a later search can widen it again.
fn browse_loop<R: BufRead>(session: &mut BrowseSession, input: R) -> Result<()> {
    print_session_page(session, session.visible_len());
    let mut lines = input.lines();

    loop {
        let hint = if session.has_more() {
            "Enter for more"
        } else {
            "end of list"
        };
        print!(
            "{} ",
            format!(
                "-- {} of {} -- {}, /text to search, q to quit:",
                session.visible_len(),
                session.filtered_len(),
                hint
            )
            .dimmed()
        );
        std::io::stdout().flush().map_err(ShelfError::Io)?;

        let line = match lines.next() {
            Some(line) => line.map_err(ShelfError::Io)?,
            None => {
                println!();
                return Ok(());
            }
        };
        let command = line.trim();

        if command.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        if let Some(search) = command.strip_prefix('/') {
            let search = search.trim().to_string();
            session.update_criteria(|criteria| criteria.with_search(search));
            print_session_page(session, session.visible_len());
            continue;
        }

        let current = session.generation();
        match session.request_next_page(current) {
            PageRequest::Extended { added } => {
                print_session_page(session, added);
                if !session.has_more() {
                    println!("{}", "End of list.".dimmed());
                }
            }
            PageRequest::Exhausted => println!("{}", "End of list.".dimmed()),
            PageRequest::Stale => {}
        }
    }
}

fn print_session_page(session: &BrowseSession, added: usize) {
    if session.filtered_len() == 0 {
        println!("No books match.");
        return;
    }
    print_books(session.last_page(added));
}

fn handle_view(ctx: &AppContext, id: BookId) -> Result<()> {
    let result = ctx.api.view_book(id)?;
    if let Some(detail) = &result.detail {
        print_detail(detail, ctx.api.settings());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    fields: BookFields,
) -> Result<()> {
    let mut draft = BookDraft::new(title, author)
        .with_pages(fields.pages.unwrap_or_default())
        .with_genre(fields.genre.unwrap_or_default())
        .with_description(fields.description.unwrap_or_default())
        .with_img(fields.img.unwrap_or_default());
    if let Some(date) = fields.released {
        draft = draft.with_release_date(date);
    }

    let result = ctx.api.add_book(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: BookId, update: &BookUpdate) -> Result<()> {
    let result = ctx.api.update_book(id, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[BookId]) -> Result<()> {
    let result = ctx.api.delete_books(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_review_add(ctx: &mut AppContext, book_id: BookId, review: NewReview) -> Result<()> {
    let result = ctx.api.add_review(book_id, review)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_review_delete(ctx: &mut AppContext, id: ReviewId) -> Result<()> {
    let result = ctx.api.delete_review(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_review_list(ctx: &AppContext, book_id: BookId) -> Result<()> {
    let result = ctx.api.list_reviews(book_id)?;
    print_reviews(&result.reviews);
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: Vec<PathBuf>) -> Result<()> {
    let result = ctx.api.import_books(paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_genres(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.genres()?;
    print_genre_counts(&result.genre_counts);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
