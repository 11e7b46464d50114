use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelfz::api::{CmdMessage, ConfigAction, MessageLevel, ShelfApi};
use shelfz::catalog;
use shelfz::config::ShelfConfig;
use shelfz::error::{Result, ShelfError};
use shelfz::model::Visibility;
use shelfz::order::DisplayBook;
use shelfz::store::fs::FileStore;
use std::path::PathBuf;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShelfApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { url, comment }) => handle_add(&mut ctx, url, comment),
        Some(Commands::List { all }) => handle_list(&ctx, all),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, from, to),
        Some(Commands::Export { all }) => handle_export(&ctx, all),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_context() -> Result<AppContext> {
    // SHELFZ_HOME overrides the data directory (used by integration tests).
    let data_dir = match std::env::var_os("SHELFZ_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs = ProjectDirs::from("com", "shelfz", "shelfz")
                .ok_or_else(|| ShelfError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = ShelfConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = ShelfApi::new(store, config, data_dir);

    Ok(AppContext { api })
}

fn visibility(all: bool) -> Visibility {
    if all {
        Visibility::Expanded
    } else {
        Visibility::Collapsed
    }
}

fn handle_add(ctx: &mut AppContext, url: String, comment: Option<String>) -> Result<()> {
    if url.trim().is_empty() {
        return Err(ShelfError::Api("URL cannot be empty".into()));
    }

    let result = ctx.api.add_book(url, comment.unwrap_or_default())?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, all: bool) -> Result<()> {
    let result = ctx.api.list_shelf(visibility(all))?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: usize, to: usize) -> Result<()> {
    let result = ctx.api.move_book(from, to)?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, all: bool) -> Result<()> {
    let result = ctx.api.export_snapshot(visibility(all))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("collapsed-rows = {}", config.collapsed_rows);
        println!("snapshot-file = {}", config.snapshot_file);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const IDENT_WIDTH: usize = 12;

fn print_books(books: &[DisplayBook]) {
    if books.is_empty() {
        println!("The shelf is empty.");
        return;
    }

    for db in books {
        let idx_str = format!("{:>3}. ", db.position);

        let ident = catalog::extract_identifier(&db.book.url).unwrap_or("-");
        let ident_str = format!("{:<width$}", ident, width = IDENT_WIDTH);

        let label = if db.book.comment.is_empty() {
            db.book.url.clone()
        } else {
            format!("{} {}", db.book.comment, db.book.url)
        };

        let fixed_width = idx_str.width() + ident_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        let time_ago = format_time_ago(db.book.created_at);

        println!(
            "{}{}{}{}{}",
            idx_str,
            ident_str.yellow(),
            label_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(at: DateTime<Utc>) -> String {
    let elapsed = (Utc::now() - at).to_std().unwrap_or_default();
    Formatter::new().convert(elapsed)
}
