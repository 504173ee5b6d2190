//! # Taskline Architecture
//!
//! Taskline tracks tasks and notes on boards from the command line. The `tl` binary is
//! one client of a library that knows nothing about terminals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Supplies configuration and the clock                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, stats.rs, ids.rs)            │
//! │  - Load, resolve IDs, mutate, persist, return CmdResult     │
//! │  - Archive/renumber, statistics, grouping                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over two buckets (active, archive)       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Items are addressed by small integer IDs that stay dense (1..=n) in each bucket.
//! Commands accept identifier expressions such as `2,3-4`; see [`ids`]. Removing items
//! from a bucket (delete, clear, restore, purge) renumbers it, so an ID names a position
//! in the current listing rather than a permanent identity.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against [`store::memory::InMemoryStore`], built with the
//!    `StoreFixture` helper. Most tests live here.
//! 2. **API**: dispatch tests, checking that configuration reaches the commands.
//! 3. **CLI**: rendering tests on strings, plus end-to-end runs of the `tl` binary in
//!    `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`ids`]: Identifier expression parsing and resolution
//! - [`stats`]: Counters and board/date grouping
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `Task`, `TaskStatus`, `Priority`)
//! - [`clipboard`]: Copying descriptions to the system clipboard
//! - [`config`]: Configuration management
//! - [`init`]: Locating the taskline directory and building the API
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod init;
pub mod model;
pub mod stats;
pub mod store;
