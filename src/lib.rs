//! Memo calendar: a month grid with one free-text memo per day, kept in a
//! flat `data.txt` file.
//!
//! The core is [`controller::CalendarController`]; this module wires it to
//! the command line.

pub mod args;
pub mod calendar;
pub mod controller;
pub mod date_key;
pub mod formatting;
mod help;
pub mod logging;
pub mod render;
pub mod session;
pub mod shared;
pub mod store;

use crate::args::{ArgParser, parse_date, parse_month};
use crate::calendar::MonthCursor;
use crate::controller::{CalendarController, memo_preview};
use crate::formatting::FormatContext;
use crate::render::{cell_width, render_month, terminal_columns};
use crate::session::Session;
use crate::shared::table::{render_table, truncate_with_ellipsis};
use crate::store::STORE_FILE_NAME;
use chrono::{Local, NaiveDate};
use std::env;
use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;

pub const DIR_ENV: &str = "MEMO_CALENDAR_DIR";
const LIST_PREVIEW_MAX: usize = 60;

pub fn entry() -> Result<(), Box<dyn Error>> {
    let _logger = logging::init_logging(&logging::level_from_env())?;

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        args.push("show".to_string());
    }

    let cmd = args.remove(0);
    let today = Local::now().date_naive();

    match cmd.as_str() {
        "show" | "month" => show_month(args, today)?,
        "view" | "open" => view_memo(args, today)?,
        "set" => set_memo(args, today)?,
        "clear" | "delete" => clear_memo(args, today)?,
        "list" => list_memos(args, today)?,
        "interactive" | "ui" => interactive()?,
        "path" => println!("{}", store_path()?.display()),
        "help" | "-h" | "--help" => help::run(args)?,
        other => {
            help::run(Vec::new())?;
            return Err(format!("Unknown command: {other}").into());
        }
    }

    Ok(())
}

/// Directory holding the store: `MEMO_CALENDAR_DIR`, else the directory
/// of the running executable.
pub fn data_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = env::var(DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = env::current_exe()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        io::Error::other(format!(
            "cannot locate the executable directory; set {DIR_ENV} explicitly"
        ))
    })
}

pub fn store_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(STORE_FILE_NAME))
}

fn open_controller(
    today: NaiveDate,
) -> Result<CalendarController, Box<dyn Error>> {
    Ok(CalendarController::init(today, &store_path()?)?)
}

fn show_month(args: Vec<String>, today: NaiveDate) -> Result<(), Box<dyn Error>> {
    let mut parser = ArgParser::new(args, "show");
    let target = match parser.next() {
        Some(raw) => parse_month(&raw)?,
        None => MonthCursor::from_date(today),
    };
    if parser.has_more() {
        return Err("Usage: mcal show [YYYY-MM]".into());
    }

    let mut controller = open_controller(today)?;
    let delta = controller.cursor().months_until(target);
    let model = controller.navigate(delta);
    println!("{}", render_month(&model, &FormatContext::from_env()));
    Ok(())
}

fn view_memo(args: Vec<String>, today: NaiveDate) -> Result<(), Box<dyn Error>> {
    let mut parser = ArgParser::new(args, "view");
    let raw = parser.next().ok_or("Usage: mcal view <date>")?;
    let date = parse_date(&raw, today)?;
    let controller = open_controller(today)?;
    let text = controller.open_memo(date);
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

fn set_memo(args: Vec<String>, today: NaiveDate) -> Result<(), Box<dyn Error>> {
    let mut parser = ArgParser::new(args, "set");
    let raw = parser
        .next()
        .ok_or("Usage: mcal set <date> <text...> | mcal set <date> --stdin")?;
    let date = parse_date(&raw, today)?;

    let rest = parser.collect_remaining();
    let text = if rest.iter().any(|a| a == "--stdin") {
        if rest.len() > 1 {
            return Err("--stdin cannot be combined with memo text".into());
        }
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if rest.is_empty() {
            return Err(
                "Provide the memo text, e.g. `mcal set 2024-03-19 dentist`"
                    .into(),
            );
        }
        rest.join(" ")
    };

    let mut controller = open_controller(today)?;
    controller.commit_memo(date, &text)?;
    if controller.open_memo(date).is_empty() {
        println!("Cleared {date}");
    } else {
        println!("Saved {date}");
    }
    Ok(())
}

fn clear_memo(args: Vec<String>, today: NaiveDate) -> Result<(), Box<dyn Error>> {
    let mut parser = ArgParser::new(args, "clear");
    let raw = parser.next().ok_or("Usage: mcal clear <date>")?;
    let date = parse_date(&raw, today)?;
    let mut controller = open_controller(today)?;
    let existed = !controller.open_memo(date).is_empty();
    controller.commit_memo(date, "")?;
    if existed {
        println!("Cleared {date}");
    } else {
        println!("No memo for {date}");
    }
    Ok(())
}

fn list_memos(args: Vec<String>, today: NaiveDate) -> Result<(), Box<dyn Error>> {
    let mut parser = ArgParser::new(args, "list");
    let mut month: Option<MonthCursor> = None;
    while let Some(arg) = parser.next() {
        match arg.as_str() {
            "-m" | "--month" => month = Some(parser.extract_month("--month")?),
            other => {
                return Err(format!("Unknown flag for list: {other}").into());
            }
        }
    }

    let controller = open_controller(today)?;
    let ctx = FormatContext::from_env();
    let prefix = month.map(|m| format!("{m}-"));
    let rows: Vec<Vec<String>> = controller
        .store()
        .iter()
        .filter(|(key, _)| prefix.as_ref().is_none_or(|p| key.starts_with(p)))
        .map(|(key, text)| {
            let preview =
                truncate_with_ellipsis(&memo_preview(text), LIST_PREVIEW_MAX);
            vec![ctx.format_date_key(key), ctx.format_memo(&preview)]
        })
        .collect();

    if rows.is_empty() {
        println!("No memos yet. Try `mcal set today \"text\"`.");
        return Ok(());
    }

    let headers = vec![ctx.format_header("Date"), ctx.format_header("Memo")];
    println!("{}", render_table(&headers, &rows));
    Ok(())
}

fn interactive() -> Result<(), Box<dyn Error>> {
    let mut controller = open_controller(Local::now().date_naive())?;
    let width = cell_width(terminal_columns().unwrap_or(80));
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut session = Session::new(
        &mut controller,
        FormatContext::from_env(),
        width,
        || Local::now().date_naive(),
    );
    session.run(stdin.lock(), &mut stdout)
}
