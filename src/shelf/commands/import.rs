use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::BookDraft;
use crate::store::CatalogSource;
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::{normalize_draft, validate_draft};

const IMPORT_EXT: &str = "json";

/// Imports book records from JSON files, or from every `.json` file in a
/// directory. Each file holds an array of records in the API's book shape;
/// `id` fields are ignored and fresh identifiers are assigned.
pub fn run<S: CatalogSource>(store: &mut S, paths: Vec<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut imported_count = 0;

    for path in paths {
        if path.is_dir() {
            let mut files: Vec<PathBuf> = fs::read_dir(&path)
                .map_err(ShelfError::Io)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == IMPORT_EXT))
                .collect();
            files.sort();
            for file in files {
                imported_count += import_file(store, &file, &mut result)?;
            }
        } else if path.is_file() {
            imported_count += import_file(store, &path, &mut result)?;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        imported_count
    )));
    Ok(result)
}

/// Unreadable files and malformed records become warnings; store failures abort.
fn import_file<S: CatalogSource>(
    store: &mut S,
    path: &Path,
    result: &mut CmdResult,
) -> Result<usize> {
    let records = match read_records(path) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "skipping import file");
            result.add_message(CmdMessage::warning(format!(
                "Failed to import {}: {}",
                path.display(),
                e
            )));
            return Ok(0);
        }
    };

    let mut count = 0;
    for (position, record) in records.into_iter().enumerate() {
        let draft = serde_json::from_value::<BookDraft>(record)
            .map_err(|e| e.to_string())
            .map(normalize_draft)
            .and_then(|d| validate_draft(&d).map(|_| d).map_err(|e| e.to_string()));

        match draft {
            Ok(draft) => {
                let book = store.add_book(draft)?;
                result.affected_books.push(book);
                count += 1;
            }
            Err(reason) => {
                tracing::warn!(file = %path.display(), position, %reason, "skipping record");
                result.add_message(CmdMessage::warning(format!(
                    "Skipped record {} in {}: {}",
                    position + 1,
                    path.display(),
                    reason
                )));
            }
        }
    }

    result.add_message(CmdMessage::info(format!(
        "Imported {} from {}",
        count,
        path.display()
    )));
    Ok(count)
}

fn read_records(path: &Path) -> Result<Vec<serde_json::Value>> {
    let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
    let records = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
    Ok(records)
}
