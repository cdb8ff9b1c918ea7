//! Forward conversion: value → CSV field text.
//!
//! The text produced here is the value's canonical display representation.
//! Quoting is applied later by the codec, never here.

use base64::Engine;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::ValueKind;

/// Canonical field text of a value.
pub trait ToCsvText {
    /// Kind reported by schema descriptors for fields of this type.
    const KIND: ValueKind = ValueKind::Generic;

    fn to_csv_text(&self) -> String;
}

macro_rules! display_to_csv_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToCsvText for $ty {
                fn to_csv_text(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

display_to_csv_text!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    uuid::Uuid, ulid::Ulid, NaiveDate, NaiveTime,
);

impl ToCsvText for String {
    const KIND: ValueKind = ValueKind::String;

    fn to_csv_text(&self) -> String {
        self.clone()
    }
}

// ISO 8601 with a `T` separator; `Display` would use a space.
impl ToCsvText for NaiveDateTime {
    fn to_csv_text(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

impl ToCsvText for DateTime<Utc> {
    fn to_csv_text(&self) -> String {
        self.to_rfc3339()
    }
}

impl ToCsvText for DateTime<FixedOffset> {
    fn to_csv_text(&self) -> String {
        self.to_rfc3339()
    }
}

// Binary - base64
impl ToCsvText for Vec<u8> {
    fn to_csv_text(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self)
    }
}

// JSON - compact
impl ToCsvText for serde_json::Value {
    fn to_csv_text(&self) -> String {
        self.to_string()
    }
}

// None - empty string
impl<T: ToCsvText> ToCsvText for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn to_csv_text(&self) -> String {
        match self {
            Some(value) => value.to_csv_text(),
            None => String::new(),
        }
    }
}
