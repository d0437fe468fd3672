//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic library catalog**. It keeps books and their reader
//! reviews, and its core is the catalog view engine: filter a collection by free
//! text, genre, size and release year, then reveal the result one page at a time.
//! The CLI is one client of that library, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, carries settings              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, cascading, messages                          │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                            │
//!                 ▼                            ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Engine (engine/, browse.rs)  │ │  Source (store/)          │
//! │  - Pure filter + windowing    │ │  - CatalogSource trait    │
//! │  - Per-view browse state      │ │  - FileStore, InMemory    │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types. It
//! never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; the binary decides whether and where they are shown.
//!
//! ## Testing
//!
//! 1. **Engine and commands**: thorough unit tests, against `InMemoryStore`.
//! 2. **API**: dispatch tests.
//! 3. **CLI**: end-to-end tests in `tests/`, against a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`engine`]: filter criteria, the filter pass and the visible window
//! - [`browse`]: stateful browse session over the engine
//! - [`commands`]: one module per operation
//! - [`store`]: the record source abstraction and its implementations
//! - [`model`]: `Book`, `Review`, `Genre`, `SizeClass`
//! - [`config`]: settings stored in the data directory
//! - [`error`]: error types

pub mod api;
pub mod browse;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod store;
