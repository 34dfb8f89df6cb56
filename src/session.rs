//! Line-driven front end over the controller's event surface.
//!
//! Every `:command` becomes one [`CalendarEvent`]; the render model that
//! comes back is printed as the next frame. Plain lines are only accepted
//! while the memo popup is open and build up the draft text; a leading
//! `::` stands for one literal `:` so such lines can still be typed.

use crate::args::parse_date;
use crate::calendar::MonthCursor;
use crate::controller::{CalendarController, CalendarEvent, RenderModel};
use crate::formatting::FormatContext;
use crate::render::{render_month_with_width, render_popup};
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::io::{BufRead, Write};

const SESSION_HELP: &str = "\
:prev, :next                 change month
:open <day|YYYY-MM-DD>       open the memo popup for a date (moves to its month)
:save, :cancel, :close       commit or discard the open memo
:clear                       empty the draft (save then deletes)
::text                       draft line starting with a literal ':'
:quit                        leave the session";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Prev,
    Next,
    Open(String),
    Save,
    Cancel,
    Close,
    Clear,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let body = line.trim().trim_start_matches(':');
    let (name, arg) = match body.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (body, ""),
    };
    let cmd = match name.to_ascii_lowercase().as_str() {
        "prev" | "p" => Command::Prev,
        "next" | "n" => Command::Next,
        "open" | "o" => {
            if arg.is_empty() {
                return Err("Provide a day after :open".to_string());
            }
            Command::Open(arg.to_string())
        }
        "save" | "w" => Command::Save,
        "cancel" => Command::Cancel,
        "close" => Command::Close,
        "clear" => Command::Clear,
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command: :{other}")),
    };
    Ok(cmd)
}

/// Interactive loop. `clock` is asked for the current date before every
/// input line so the today marker follows midnight.
pub struct Session<'a, C> {
    controller: &'a mut CalendarController,
    ctx: FormatContext,
    cell_width: usize,
    clock: C,
    today: NaiveDate,
    draft: Option<Vec<String>>,
}

impl<'a, C> Session<'a, C>
where
    C: FnMut() -> NaiveDate,
{
    pub fn new(
        controller: &'a mut CalendarController,
        ctx: FormatContext,
        cell_width: usize,
        mut clock: C,
    ) -> Self {
        let today = clock();
        controller.set_today(today);
        Self { controller, ctx, cell_width, clock, today, draft: None }
    }

    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
    ) -> Result<(), Box<dyn Error>> {
        let model = self.controller.render_model();
        self.print_frame(&model, out)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            self.refresh_today();

            let draft_line = match line.strip_prefix("::") {
                Some(rest) => Some(format!(":{rest}")),
                None if !line.starts_with(':') => Some(line.to_string()),
                None => None,
            };
            if let Some(text) = draft_line {
                if self.controller.render_model().popup_visible() {
                    self.draft.get_or_insert_with(Vec::new).push(text);
                } else if !text.trim().is_empty() {
                    writeln!(out, "Commands start with ':' (try :help)")?;
                }
                continue;
            }

            let cmd = match parse_command(line) {
                Ok(cmd) => cmd,
                Err(msg) => {
                    writeln!(out, "{msg}")?;
                    continue;
                }
            };
            debug!("event=session_command command={cmd:?}");

            let event = match cmd {
                Command::Quit => break,
                Command::Help => {
                    writeln!(out, "{SESSION_HELP}")?;
                    continue;
                }
                Command::Clear => {
                    if self.controller.render_model().popup_visible() {
                        self.draft = Some(Vec::new());
                        writeln!(out, "Draft cleared.")?;
                    } else {
                        writeln!(out, "No memo open.")?;
                    }
                    continue;
                }
                Command::Prev => CalendarEvent::MonthPrevRequested,
                Command::Next => CalendarEvent::MonthNextRequested,
                Command::Open(arg) => {
                    match resolve_day(&arg, self.controller.cursor(), self.today)
                    {
                        Ok(date) => {
                            self.draft = None;
                            self.show_month_of(date);
                            CalendarEvent::DayClicked(date)
                        }
                        Err(err) => {
                            writeln!(out, "{err}")?;
                            continue;
                        }
                    }
                }
                Command::Save => {
                    let model = self.controller.render_model();
                    let Some(popup) = model.popup else {
                        writeln!(out, "No memo open.")?;
                        continue;
                    };
                    let text = match &self.draft {
                        Some(lines) => lines.join("\n"),
                        None => popup.text,
                    };
                    CalendarEvent::MemoSaveRequested(text)
                }
                Command::Cancel => CalendarEvent::MemoCancelRequested,
                Command::Close => CalendarEvent::PopupCloseRequested,
            };

            match self.controller.handle(event) {
                Ok(model) => {
                    if !model.popup_visible() {
                        self.draft = None;
                    }
                    self.print_frame(&model, out)?;
                }
                Err(err) => {
                    // Popup and draft stay as they were so :save can retry.
                    writeln!(out, "error: {err}")?;
                }
            }
        }
        Ok(())
    }

    fn refresh_today(&mut self) {
        let now = (self.clock)();
        if now != self.today {
            debug!("event=today_rollover from={} to={now}", self.today);
            self.today = now;
            self.controller.set_today(now);
        }
    }

    /// Move the grid so the popup's date is on screen.
    fn show_month_of(&mut self, date: NaiveDate) {
        let cursor = self.controller.cursor();
        if !cursor.contains(date) {
            self.controller
                .navigate(cursor.months_until(MonthCursor::from_date(date)));
        }
    }

    fn print_frame(
        &self,
        model: &RenderModel,
        out: &mut impl Write,
    ) -> Result<(), Box<dyn Error>> {
        let grid = render_month_with_width(model, &self.ctx, self.cell_width);
        writeln!(out, "{grid}")?;
        if let Some(popup) = &model.popup {
            writeln!(out)?;
            writeln!(out, "{}", render_popup(popup, &self.ctx))?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// A bare number is a day of the displayed month; anything else must be
/// a full date.
fn resolve_day(
    arg: &str,
    cursor: MonthCursor,
    today: NaiveDate,
) -> Result<NaiveDate, Box<dyn Error>> {
    if !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit()) {
        let day: u32 = arg.parse()?;
        return NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), day)
            .ok_or_else(|| {
                format!("{} has no day {day}", cursor.label()).into()
            });
    }
    parse_date(arg, today)
}
