//! # Getflix Architecture
//!
//! Getflix is a personal movie catalog: a list of titles with year, rating,
//! poster, IMDb id and free-form notes, kept in a single JSON or CSV file.
//! The library is UI-agnostic; the numbered-menu terminal client in `cli/` is
//! one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, argument parsing, colored output     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / delete / update / list / stats / search / site     │
//! │  - Turns store outcomes into user-facing messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - MovieStorage trait (the catalog interface)               │
//! │  - MovieStore over JsonBackend / CsvBackend / MemBackend    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Non-fatal Outcomes
//!
//! Adding a title that already exists, or deleting / annotating one that does
//! not, changes nothing and is reported as a message. Only I/O failures while
//! flushing come back as errors, and even those leave the session running.
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`store/*.rs`): backend formats against temp files, store policy
//!    against `MemBackend`.
//! 2. **Commands** (`commands/*.rs`): messages and results over `MemBackend`.
//! 3. **CLI**: the menu loop is driven with scripted input; `tests/` runs the
//!    binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Catalog interface and file backends
//! - [`model`]: `Movie`, `Catalog`, rating normalization
//! - [`lookup`]: OMDb client for filling in movie details
//! - [`config`]: `config.json` handling
//! - [`init`]: Wiring config, store and lookup into a context
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod lookup;
pub mod model;
pub mod store;
