//! Month grid for the dashboard calendar.

use chrono::{Datelike, NaiveDate};
use kku_core::error::GatewayError;
use kku_i18n::Translator;
use serde::Serialize;

/// Event category; drives the dot colour and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Important,
    Event,
    Academic,
    Social,
}

impl EventKind {
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Important => "calendar.types.important",
            Self::Event => "calendar.types.event",
            Self::Academic => "calendar.types.academic",
            Self::Social => "calendar.types.social",
        }
    }
}

/// A dated entry. `date` is `YYYY-MM-DD` and matched by string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub date: String,
    pub title: String,
    pub kind: EventKind,
}

const SAMPLE_EVENTS: &[(&str, &str, EventKind)] = &[
    ("2025-11-01", "calendar.events.foreignRegistration", EventKind::Important),
    ("2025-11-05", "calendar.events.orientation", EventKind::Event),
    ("2025-11-10", "calendar.events.courseRegistration", EventKind::Academic),
    ("2025-11-15", "calendar.events.dormMeeting", EventKind::Social),
    ("2025-11-20", "calendar.events.midterms", EventKind::Academic),
    ("2025-11-25", "calendar.events.festival", EventKind::Event),
];

/// The fixed academic calendar, titles translated.
pub fn sample_events(t: &Translator) -> Vec<CalendarEvent> {
    SAMPLE_EVENTS
        .iter()
        .map(|(date, key, kind)| CalendarEvent {
            date: (*date).to_string(),
            title: t.text(key).to_string(),
            kind: *kind,
        })
        .collect()
}

/// The first `n` events in list order.
pub fn upcoming(events: &[CalendarEvent], n: usize) -> &[CalendarEvent] {
    &events[..n.min(events.len())]
}

/// Events whose date string equals `date`.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    let iso = iso_date(date);
    events.iter().filter(|e| e.date == iso).cloned().collect()
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub events: Vec<CalendarEvent>,
    pub is_today: bool,
    pub is_selected: bool,
}

/// A grid slot: padding before the 1st, or a day.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    Blank,
    Day(DayCell),
}

/// One month laid out Sunday-first.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based.
    pub month: u32,
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub cells: Vec<Cell>,
}

impl MonthGrid {
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|c| match c {
            Cell::Day(d) => Some(d),
            Cell::Blank => None,
        })
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|d| d.day == day)
    }

    /// `(year, month)` of the previous month.
    pub fn previous(&self) -> (i32, u32) {
        if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }

    /// `(year, month)` of the next month.
    pub fn next(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        // Only reachable at the very end of chrono's supported range.
        .unwrap_or(31)
}

/// Build the grid for `year`/`month` (1-based).
pub fn build_month(
    year: i32,
    month: u32,
    events: &[CalendarEvent],
    today: Option<NaiveDate>,
    selected: Option<NaiveDate>,
) -> Result<MonthGrid, GatewayError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| GatewayError::InvalidInput(format!("no such month: {year}-{month}")))?;
    let leading_blanks = first.weekday().num_days_from_sunday();
    let total_days = days_in_month(first);

    let mut cells = Vec::with_capacity((leading_blanks + total_days) as usize);
    cells.extend((0..leading_blanks).map(|_| Cell::Blank));

    for date in first.iter_days().take(total_days as usize) {
        cells.push(Cell::Day(DayCell {
            day: date.day(),
            date: iso_date(date),
            events: events_on(events, date),
            is_today: today == Some(date),
            is_selected: selected == Some(date),
        }));
    }

    Ok(MonthGrid {
        year,
        month,
        leading_blanks,
        days_in_month: total_days,
        cells,
    })
}
