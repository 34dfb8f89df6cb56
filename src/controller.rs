//! Composes the memo store and the month model behind one event surface.
//!
//! Front ends never touch the store or model directly: they feed
//! [`CalendarEvent`]s in and print the [`RenderModel`] that comes back.

use crate::calendar::{CalendarCell, CalendarModel, MonthCursor};
use crate::date_key::DateKey;
use crate::store::{MemoStore, StoreError};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Abstract input from whatever surface is hosting the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarEvent {
    MonthPrevRequested,
    MonthNextRequested,
    DayClicked(NaiveDate),
    MemoSaveRequested(String),
    MemoCancelRequested,
    PopupCloseRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Closed,
    Editing { date: NaiveDate, loaded_text: String },
}

/// Content of the memo edit surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub date: NaiveDate,
    pub title: String,
    pub text: String,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub month_label: String,
    pub cursor: MonthCursor,
    pub cells: Vec<(CalendarCell, Option<String>)>,
    pub popup: Option<Popup>,
}

impl RenderModel {
    pub fn popup_visible(&self) -> bool {
        self.popup.is_some()
    }
}

pub struct CalendarController {
    model: CalendarModel,
    store: MemoStore,
    store_path: PathBuf,
    today: NaiveDate,
    edit: EditState,
}

impl CalendarController {
    /// Point the cursor at `today`'s month and load the store file.
    pub fn init(today: NaiveDate, store_path: &Path) -> Result<Self, StoreError> {
        let store = MemoStore::load(store_path)?;
        info!(
            "event=controller_init status=ok month={} entries={}",
            MonthCursor::from_date(today),
            store.len()
        );
        Ok(Self {
            model: CalendarModel::new(today),
            store,
            store_path: store_path.to_path_buf(),
            today,
            edit: EditState::Closed,
        })
    }

    pub fn store(&self) -> &MemoStore {
        &self.store
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn cursor(&self) -> MonthCursor {
        self.model.cursor()
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn navigate(&mut self, delta: i32) -> RenderModel {
        self.model.advance_month(delta);
        debug!("event=navigate delta={delta} month={}", self.model.cursor());
        self.render_model()
    }

    /// Stored memo for `date`, or an empty string.
    pub fn open_memo(&self, date: NaiveDate) -> String {
        self.store
            .get(DateKey::from(date).as_str())
            .unwrap_or_default()
            .to_string()
    }

    /// Trim `raw_text`, store it (blank deletes), write the file and close
    /// the edit surface. On a write failure memory keeps the new text and
    /// the surface stays open.
    pub fn commit_memo(
        &mut self,
        date: NaiveDate,
        raw_text: &str,
    ) -> Result<(), StoreError> {
        let key = DateKey::from(date);
        let text = normalize_memo(raw_text);
        self.store.set(key.as_str(), &text);
        if let Err(err) = self.store.save(&self.store_path) {
            warn!("event=memo_commit status=error key={key} error={err}");
            return Err(err);
        }
        info!(
            "event=memo_commit status=ok key={key} action={}",
            if text.is_empty() { "delete" } else { "upsert" }
        );
        self.edit = EditState::Closed;
        Ok(())
    }

    pub fn handle(
        &mut self,
        event: CalendarEvent,
    ) -> Result<RenderModel, StoreError> {
        match event {
            CalendarEvent::MonthPrevRequested => return Ok(self.navigate(-1)),
            CalendarEvent::MonthNextRequested => return Ok(self.navigate(1)),
            CalendarEvent::DayClicked(date) => {
                let loaded_text = self.open_memo(date);
                self.edit = EditState::Editing { date, loaded_text };
            }
            CalendarEvent::MemoSaveRequested(text) => match self.edit {
                EditState::Editing { date, .. } => {
                    self.commit_memo(date, &text)?;
                }
                EditState::Closed => {
                    debug!("event=memo_commit status=ignored reason=closed");
                }
            },
            CalendarEvent::MemoCancelRequested
            | CalendarEvent::PopupCloseRequested => {
                self.edit = EditState::Closed;
            }
        }
        Ok(self.render_model())
    }

    pub fn render_model(&self) -> RenderModel {
        let cells = self
            .model
            .cells_for_current_month(self.today)
            .into_iter()
            .map(|cell| {
                let preview = cell.date().and_then(|date| {
                    self.store.get(DateKey::from(date).as_str()).map(memo_preview)
                });
                (cell, preview)
            })
            .collect();

        let popup = match &self.edit {
            EditState::Closed => None,
            EditState::Editing { date, loaded_text } => Some(Popup {
                date: *date,
                title: popup_title(*date),
                text: loaded_text.clone(),
            }),
        };

        RenderModel {
            month_label: self.model.cursor().label(),
            cursor: self.model.cursor(),
            cells,
            popup,
        }
    }
}

/// Collapse a memo onto one display line.
pub fn memo_preview(text: &str) -> String {
    text.replace('\n', " ")
}

pub fn popup_title(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn normalize_memo(raw: &str) -> String {
    raw.replace("\r\n", "\n").trim().to_string()
}
