use crate::calendar::{CalendarCell, WEEKDAY_LABELS};
use crate::controller::{Popup, RenderModel};
use crate::formatting::FormatContext;
use crate::shared::table::{format_row, truncate_with_ellipsis};
use chrono::Datelike;
use terminal_size::{Width, terminal_size};

const MIN_CELL_WIDTH: usize = 6;
const MAX_CELL_WIDTH: usize = 18;
const DEFAULT_COLUMNS: usize = 80;
const CELL_GAP: &str = " ";

/// Terminal width from `COLUMNS`, falling back to the tty size.
pub fn terminal_columns() -> Option<usize> {
    if let Some(cols) = std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|c| *c > 0)
    {
        return Some(cols);
    }
    terminal_size().map(|(Width(w), _)| w as usize)
}

pub fn cell_width(columns: usize) -> usize {
    let usable = columns.saturating_sub(CELL_GAP.len() * 6);
    (usable / 7).clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
}

/// Project a render model onto text: month label, weekday header, then
/// one or two lines per week (day numbers, then memo previews when the
/// week has any). Today carries a `*` when color is off.
pub fn render_month(model: &RenderModel, ctx: &FormatContext) -> String {
    let width = cell_width(terminal_columns().unwrap_or(DEFAULT_COLUMNS));
    render_month_with_width(model, ctx, width)
}

pub fn render_month_with_width(
    model: &RenderModel,
    ctx: &FormatContext,
    width: usize,
) -> String {
    let widths = [width; 7];
    let mut lines = vec![ctx.format_header(&model.month_label)];

    let header: Vec<String> =
        WEEKDAY_LABELS.iter().map(|d| ctx.format_muted(d)).collect();
    lines.push(trim_row(format_row(&header, &widths, CELL_GAP)));

    for week in model.cells.chunks(7) {
        let mut days = Vec::with_capacity(7);
        let mut previews = Vec::with_capacity(7);
        for (cell, preview) in week {
            match cell {
                CalendarCell::Blank => {
                    days.push(String::new());
                    previews.push(String::new());
                }
                CalendarCell::Day { date, is_today } => {
                    let mut label = date.day().to_string();
                    if *is_today && !ctx.use_color {
                        label.push('*');
                    }
                    days.push(ctx.format_day(&label, *is_today));
                    let text = preview
                        .as_deref()
                        .map(|p| truncate_with_ellipsis(p.trim(), width))
                        .unwrap_or_default();
                    previews.push(ctx.format_memo(&text));
                }
            }
        }
        lines.push(trim_row(format_row(&days, &widths, CELL_GAP)));
        if week.iter().any(|(_, preview)| preview.is_some()) {
            lines.push(trim_row(format_row(&previews, &widths, CELL_GAP)));
        }
    }

    lines.join("\n")
}

/// Memo edit surface shown under the grid.
pub fn render_popup(popup: &Popup, ctx: &FormatContext) -> String {
    let mut out = Vec::new();
    out.push(ctx.format_header(&format!("-- {} --", popup.title)));
    if popup.text.is_empty() {
        out.push(ctx.format_muted("(no memo)"));
    } else {
        out.extend(popup.text.lines().map(str::to_string));
    }
    out.push(ctx.format_muted(
        "type to replace, then :save | :cancel | :clear | :close",
    ));
    out.join("\n")
}

fn trim_row(row: String) -> String {
    row.trim_end().to_string()
}
