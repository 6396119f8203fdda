//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact-book library** with an interactive CLI
//! client. The same core could serve a TUI or a web front end; the binary
//! just happens to wire it to a read-eval-print loop on stdin.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Tokenizes input lines, formats output, owns the prompt   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - RoloApi: owns the AddressBook and the snapshot store     │
//! │  - Thin dispatch over commands, returns structured results  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the AddressBook                 │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain + Storage (field.rs, record.rs, book.rs, store/)    │
//! │  - Validated fields, Record, ordered AddressBook            │
//! │  - SnapshotStore trait: FileStore (prod), InMemoryStore     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal.
//!
//! ## Error Discipline
//!
//! Field validation rejects bad input without mutating ([`error::RoloError`]).
//! The interactive loop catches every core error, prints it, and resumes;
//! only the terminal commands (`good bye`, `close`, `exit`) end a session.
//! Persistence failures are reported and survived: a missing or unreadable
//! snapshot falls back to an empty book, a failed save keeps the session
//! running with its in-memory state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`book`]: The ordered, keyed record collection and its pagination
//! - [`record`]: One contact (name, phones, birthday)
//! - [`field`]: Validated value holders
//! - [`store`]: Snapshot storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Line parsing and terminal rendering for the binary

pub mod api;
pub mod book;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod record;
pub mod store;
