//! The ToDo sample record.
//!
//! Exercises every schema feature: an enum column, a renamed column, an
//! ignored field, a computed read-only field and a value type that only
//! offers a fallible parse.

use chrono::{NaiveDate, NaiveDateTime};
use csv_helper_codec::{csv_enum, Converter, CsvRecord, FromCsvText, Schema, ToCsvText};
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;

csv_enum! {
    #[derive(Debug, Default, Serialize)]
    pub enum Priority {
        High,
        #[default]
        Middle,
        Low,
    }
}

/// A number of days. Only offers a parse that fails with an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySpan(pub i32);

impl DaySpan {
    pub fn parse(text: &str) -> Result<Self, ParseIntError> {
        text.parse().map(DaySpan)
    }
}

impl fmt::Display for DaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToCsvText for DaySpan {
    fn to_csv_text(&self) -> String {
        self.to_string()
    }
}

impl FromCsvText for DaySpan {
    fn converter() -> Converter<Self> {
        Converter::generic().fallible(DaySpan::parse)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ToDo {
    pub id: i32,
    pub title: String,
    pub deadline: NaiveDateTime,
    pub done: bool,
    pub priority: Priority,
    /// Written under the column `Details`
    pub detail: String,
    pub day_span: DaySpan,
    /// Never written or read
    pub option: String,
}

impl ToDo {
    pub fn version(&self) -> &'static str {
        "1.0"
    }
}

impl CsvRecord for ToDo {
    fn schema() -> Schema<Self> {
        Schema::<Self>::builder()
            .field("Id", |r| &r.id, |r| &mut r.id)
            .field("Title", |r| &r.title, |r| &mut r.title)
            .field("Deadline", |r| &r.deadline, |r| &mut r.deadline)
            .field("Done", |r| &r.done, |r| &mut r.done)
            .field("Priority", |r| &r.priority, |r| &mut r.priority)
            .field("Detail", |r| &r.detail, |r| &mut r.detail)
            .column_name("Details")
            .field("DaySpan", |r| &r.day_span, |r| &mut r.day_span)
            .field("Option", |r| &r.option, |r| &mut r.option)
            .ignore()
            .read_only("Version", |r: &ToDo| r.version().to_string())
            .build()
    }
}

impl fmt::Display for ToDo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Title: {}, Deadline: {}, Done: {}, Priority: {}, Detail: {}, DaySpan: {}",
            self.id, self.title, self.deadline, self.done, self.priority, self.detail, self.day_span
        )
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .unwrap_or_default()
}

/// The sample list written by `csv-helper sample`.
pub fn sample_todos() -> Vec<ToDo> {
    let written = at(2017, 7, 6, 18, 8, 13);
    vec![
        ToDo {
            id: 1,
            title: "filing tax returns".to_string(),
            deadline: at(2018, 12, 1, 0, 0, 0),
            ..ToDo::default()
        },
        ToDo {
            id: 2,
            title: "report of a business trip".to_string(),
            deadline: written,
            detail: "\"ASAP\"".to_string(),
            day_span: DaySpan(3),
            priority: Priority::High,
            ..ToDo::default()
        },
        ToDo {
            id: 3,
            title: "expense slips".to_string(),
            deadline: written,
            detail: "book expenses: \"C# 6.0 and the .NET 4.6 Framework\",\"The C# Programming\""
                .to_string(),
            priority: Priority::Low,
            done: true,
            ..ToDo::default()
        },
    ]
}
