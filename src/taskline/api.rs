//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every taskline operation, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the command function for each operation
//! - **Supplies context** the commands take as plain arguments: the configured default
//!   board and date format, and the current time for new items
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! Identifier expressions are passed through untouched; resolving them is the job of the
//! commands, against the bucket each command works on.
//!
//! ## Generic Over DataStore
//!
//! `TasklineApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TasklineApi<FileStore>`
//! - Testing: `TasklineApi<InMemoryStore>`

use crate::clipboard::copy_to_clipboard;
use crate::commands;
use crate::config::TasklineConfig;
use crate::error::Result;
use crate::model::Priority;
use crate::store::DataStore;
use chrono::Local;

pub struct TasklineApi<S: DataStore> {
    store: S,
    config: TasklineConfig,
}

impl<S: DataStore> TasklineApi<S> {
    pub fn new(store: S, config: TasklineConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &TasklineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_task(
        &mut self,
        draft: Draft,
        priority: Option<&str>,
        due_date: Option<&str>,
    ) -> Result<CmdResult> {
        let mut draft = draft;
        if let Some(raw) = priority {
            draft = draft.with_priority(Priority::parse(raw)?);
        }
        if let Some(raw) = due_date {
            let due = commands::update::parse_due_date(raw, &self.config.date_format)?;
            draft = draft.with_due_date(due);
        }
        commands::create::task(
            &mut self.store,
            draft,
            Local::now(),
            &self.config.default_board,
        )
    }

    pub fn create_note(&mut self, draft: Draft) -> Result<CmdResult> {
        commands::create::note(
            &mut self.store,
            draft,
            Local::now(),
            &self.config.default_board,
        )
    }

    pub fn check_tasks(&mut self, ids: &str) -> Result<CmdResult> {
        commands::lifecycle::check(&mut self.store, ids)
    }

    pub fn complete_tasks(&mut self, ids: &str) -> Result<CmdResult> {
        commands::lifecycle::complete(&mut self.store, ids)
    }

    pub fn uncheck_tasks(&mut self, ids: &str) -> Result<CmdResult> {
        commands::lifecycle::uncheck(&mut self.store, ids)
    }

    pub fn begin_tasks(&mut self, ids: &str) -> Result<CmdResult> {
        commands::lifecycle::begin(&mut self.store, ids)
    }

    pub fn pause_tasks(&mut self, ids: &str) -> Result<CmdResult> {
        commands::lifecycle::pause(&mut self.store, ids)
    }

    pub fn cancel_tasks(&mut self, ids: &str) -> Result<CmdResult> {
        commands::lifecycle::cancel(&mut self.store, ids)
    }

    pub fn star_items(&mut self, ids: &str) -> Result<CmdResult> {
        commands::star::toggle(&mut self.store, ids)
    }

    pub fn move_items(&mut self, ids: &str, boards: &[String]) -> Result<CmdResult> {
        commands::boards::move_items(&mut self.store, ids, boards, &self.config.default_board)
    }

    pub fn edit_description(&mut self, ids: &str, description: &str) -> Result<CmdResult> {
        commands::update::edit_description(&mut self.store, ids, description)
    }

    pub fn update_priority(&mut self, ids: &str, priority: &str) -> Result<CmdResult> {
        commands::update::priority(&mut self.store, ids, priority)
    }

    pub fn update_due_date(&mut self, ids: &str, date: &str) -> Result<CmdResult> {
        commands::update::due_date(&mut self.store, ids, date, &self.config.date_format)
    }

    pub fn delete_items(&mut self, ids: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::archive::clear(&mut self.store)
    }

    pub fn restore_items(&mut self, ids: &str) -> Result<CmdResult> {
        commands::restore::run(&mut self.store, ids)
    }

    pub fn purge_archive(&mut self, ids: &str) -> Result<CmdResult> {
        commands::purge::run(&mut self.store, ids)
    }

    /// Copies the descriptions of the targeted items to the system clipboard.
    pub fn copy_descriptions(&self, ids: &str) -> Result<CmdResult> {
        commands::copy::run(&self.store, ids, copy_to_clipboard)
    }

    pub fn rearrange_ids(&mut self) -> Result<CmdResult> {
        commands::archive::rearrange(&mut self.store)
    }

    pub fn display_by_board(&self) -> Result<CmdResult> {
        commands::list::by_board(&self.store, &self.config.default_board)
    }

    pub fn display_by_date(&self) -> Result<CmdResult> {
        commands::list::by_date(&self.store)
    }

    pub fn display_archive(&self) -> Result<CmdResult> {
        commands::list::archive(&self.store)
    }

    pub fn find_items<T: AsRef<str>>(&self, terms: &[T]) -> Result<CmdResult> {
        commands::list::find(&self.store, terms, &self.config.default_board)
    }

    pub fn list_by_attributes<T: AsRef<str>>(&self, terms: &[T]) -> Result<CmdResult> {
        commands::list::by_attributes(&self.store, terms, &self.config.default_board)
    }
}

pub use commands::create::Draft;
pub use commands::{Change, CmdMessage, CmdResult, IdReport, MessageLevel};
