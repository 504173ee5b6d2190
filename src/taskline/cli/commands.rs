//! # CLI Layer
//!
//! Command selection and context wiring. Each handler calls one API method and prints
//! what it returns; formatting itself lives in `render.rs`.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` from the `--dir` override and the config file
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    render_changes, render_groups, render_messages, render_overview, Layout, ListView,
};
use super::setup::{id_expression, Cli, Commands};
use clap::Parser;
use taskline::api::{CmdResult, Draft, TasklineApi};
use taskline::error::Result;
use taskline::init::initialize;
use taskline::store::fs::FileStore;

struct AppContext {
    api: TasklineApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Task {
            description,
            boards,
            priority,
            due,
        }) => handle_task(&mut ctx, description, boards, priority, due),
        Some(Commands::Note {
            description,
            boards,
        }) => handle_note(&mut ctx, description, boards),
        Some(Commands::Check { ids }) => {
            let result = ctx.api.check_tasks(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Uncheck { ids }) => {
            let result = ctx.api.uncheck_tasks(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Begin { ids }) => {
            let result = ctx.api.begin_tasks(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Pause { ids }) => {
            let result = ctx.api.pause_tasks(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Cancel { ids }) => {
            let result = ctx.api.cancel_tasks(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Star { ids }) => {
            let result = ctx.api.star_items(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Copy { ids }) => {
            let result = ctx.api.copy_descriptions(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Move { ids, boards }) => {
            let result = ctx.api.move_items(&ids, &boards)?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Edit { ids, description }) => {
            let result = ctx.api.edit_description(&ids, &description.join(" "))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Delete { ids }) => {
            let result = ctx.api.delete_items(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Clear) => {
            let result = ctx.api.clear()?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Restore { ids }) => {
            let result = ctx.api.restore_items(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Purge { ids }) => {
            let result = ctx.api.purge_archive(&id_expression(&ids))?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Priority { ids, priority }) => {
            let result = ctx.api.update_priority(&ids, &priority)?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Due { ids, date }) => {
            let result = ctx.api.update_due_date(&ids, &date)?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Refactor) => {
            let result = ctx.api.rearrange_ids()?;
            print_changes(&result);
            Ok(())
        }
        Some(Commands::Find { terms }) => {
            let result = ctx.api.find_items(&terms)?;
            print_listing(&ctx, &result, Screen::Search);
            Ok(())
        }
        Some(Commands::List { terms }) if !terms.is_empty() => {
            let result = ctx.api.list_by_attributes(&terms)?;
            print_listing(&ctx, &result, Screen::Search);
            Ok(())
        }
        Some(Commands::Timeline) => {
            let result = ctx.api.display_by_date()?;
            print_listing(&ctx, &result, Screen::Timeline);
            Ok(())
        }
        Some(Commands::Archive) => {
            let result = ctx.api.display_archive()?;
            print_listing(&ctx, &result, Screen::Archive);
            Ok(())
        }
        Some(Commands::List { .. }) | None => {
            let result = ctx.api.display_by_board()?;
            print_listing(&ctx, &result, Screen::Board);
            Ok(())
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.dir.as_deref())?;
    Ok(AppContext { api: ctx.api })
}

fn handle_task(
    ctx: &mut AppContext,
    description: Vec<String>,
    boards: Vec<String>,
    priority: Option<String>,
    due: Option<String>,
) -> Result<()> {
    let draft = Draft::from_words(&description).with_boards(boards);
    let result = ctx
        .api
        .create_task(draft, priority.as_deref(), due.as_deref())?;
    print_changes(&result);
    Ok(())
}

fn handle_note(ctx: &mut AppContext, description: Vec<String>, boards: Vec<String>) -> Result<()> {
    let draft = Draft::from_words(&description).with_boards(boards);
    let result = ctx.api.create_note(draft)?;
    print_changes(&result);
    Ok(())
}

fn print_changes(result: &CmdResult) {
    print!("{}", render_changes(&result.affected));
    print!("{}", render_messages(&result.messages));
}

/// The listing screens. Board and timeline views close with the progress overview; the
/// archive always shows complete tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Board,
    Timeline,
    Archive,
    Search,
}

fn print_listing(ctx: &AppContext, result: &CmdResult, screen: Screen) {
    let config = ctx.api.config();
    let layout = match screen {
        Screen::Timeline | Screen::Archive => Layout::Date,
        Screen::Board | Screen::Search => Layout::Board,
    };
    let view = ListView {
        layout,
        show_complete: screen == Screen::Archive || config.display_complete_tasks,
        default_board: &config.default_board,
    };
    print!("{}", render_groups(&result.groups, &view));

    let with_overview = matches!(screen, Screen::Board | Screen::Timeline);
    if with_overview && config.display_progress_overview {
        if let Some(overview) = &result.overview {
            print!("{}", render_overview(overview));
        }
    }
    print!("{}", render_messages(&result.messages));
}
