//! # CLI Layer
//!
//! One possible UI client for shelf, not the application itself. This is the
//! only place that parses arguments, touches stdout/stderr, reads the terminal
//! and installs the log subscriber.
//!
//! - `setup`: clap definitions and their conversion into criteria and drafts
//! - `commands`: `run()`, context setup, and one `handle_*` per subcommand
//! - `print`: turns `CmdResult` contents into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
