//! Reverse conversion: CSV field text → value.
//!
//! This is the reverse of [`ToCsvText`](crate::ToCsvText). Each type supplies
//! a [`Converter`] whose candidates are tried in order.

use base64::Engine;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::Converter;

/// A type that can be read from a CSV field.
pub trait FromCsvText: Sized {
    /// Build the converter for this type.
    ///
    /// Called once per field when a schema is built.
    fn converter() -> Converter<Self>;
}

/// Error type for CSV field parsing failures.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Failed to parse '{value}' as {expected_type}: {message}")]
pub struct ConvertError {
    pub message: String,
    pub value: String,
    pub expected_type: String,
}

impl ConvertError {
    pub fn new(
        value: impl Into<String>,
        expected_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            value: value.into(),
            expected_type: expected_type.into(),
        }
    }
}

macro_rules! from_str_converter {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromCsvText for $ty {
                fn converter() -> Converter<Self> {
                    Converter::generic().strict(|text: &str| text.parse::<$ty>().ok())
                }
            }
        )+
    };
}

from_str_converter!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
    NaiveDate, NaiveTime,
);

impl FromCsvText for String {
    fn converter() -> Converter<Self> {
        Converter::string()
    }
}

impl FromCsvText for bool {
    fn converter() -> Converter<Self> {
        Converter::generic()
            .strict(|text: &str| text.parse::<bool>().ok())
            .strict(parse_lenient_bool)
    }
}

/// Lenient boolean parsing for values written by other tools.
pub fn parse_lenient_bool(text: &str) -> Option<bool> {
    match text.to_lowercase().as_str() {
        "true" | "1" | "yes" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "f" | "n" => Some(false),
        _ => None,
    }
}

impl FromCsvText for uuid::Uuid {
    fn converter() -> Converter<Self> {
        Converter::generic().fallible(uuid::Uuid::parse_str)
    }
}

impl FromCsvText for ulid::Ulid {
    fn converter() -> Converter<Self> {
        Converter::generic().fallible(ulid::Ulid::from_string)
    }
}

impl FromCsvText for NaiveDateTime {
    fn converter() -> Converter<Self> {
        Converter::generic()
            .strict(|text: &str| text.parse::<NaiveDateTime>().ok())
            .fallible(|text: &str| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
    }
}

impl FromCsvText for DateTime<Utc> {
    fn converter() -> Converter<Self> {
        // RFC3339 first, then chrono's own parser which also takes a `UTC` suffix
        Converter::generic()
            .fallible(|text: &str| {
                DateTime::parse_from_rfc3339(text).map(|dt| dt.with_timezone(&Utc))
            })
            .strict(|text: &str| text.parse::<DateTime<Utc>>().ok())
    }
}

impl FromCsvText for DateTime<FixedOffset> {
    fn converter() -> Converter<Self> {
        Converter::generic().fallible(DateTime::parse_from_rfc3339)
    }
}

impl FromCsvText for Vec<u8> {
    fn converter() -> Converter<Self> {
        Converter::generic().fallible(|text: &str| {
            base64::engine::general_purpose::STANDARD
                .decode(text)
                .map_err(|e| ConvertError::new(text, "Bytes", e.to_string()))
        })
    }
}

impl FromCsvText for serde_json::Value {
    fn converter() -> Converter<Self> {
        Converter::generic().fallible(|text: &str| {
            serde_json::from_str::<serde_json::Value>(text)
                .map_err(|e| ConvertError::new(text, "Json", e.to_string()))
        })
    }
}

/// Empty text is always `None`, for every inner type. `Some("")` of a string
/// encodes to the same empty field and therefore reads back as `None`.
impl<T: FromCsvText + 'static> FromCsvText for Option<T> {
    fn converter() -> Converter<Self> {
        let inner = T::converter();
        let mut converter = Converter::new(inner.kind())
            .strict(|text: &str| text.is_empty().then_some(None));
        for candidate in inner.map(Some).into_candidates() {
            converter = converter.candidate(candidate);
        }
        converter
    }
}
