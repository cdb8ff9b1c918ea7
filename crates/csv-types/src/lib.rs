//! CSV field text conversions for csv-helper records.
//!
//! This crate provides bidirectional conversions between typed record
//! attributes and the text of a single CSV field.
//!
//! # Modules
//!
//! - [`forward`] - value → CSV field text
//! - [`reverse`] - CSV field text → value
//! - [`converter`] - ranked candidate converters resolved once per field
//! - [`enums`] - enum lookup by member name
//!
//! # Example
//!
//! ```ignore
//! use csv_types::{FromCsvText, ToCsvText};
//!
//! // Forward: value → field text
//! assert_eq!(42i32.to_csv_text(), "42");
//!
//! // Reverse: field text → value (None means "leave the default")
//! let converter = i32::converter();
//! assert_eq!(converter.convert("42"), Some(42));
//! assert_eq!(converter.convert("notanumber"), None);
//! ```

pub mod converter;
pub mod enums;
pub mod forward;
pub mod reverse;

pub use converter::{BoxError, Candidate, Converter};
pub use enums::CsvEnum;
pub use forward::ToCsvText;
pub use reverse::{ConvertError, FromCsvText};

/// How a field's text is turned back into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Text is taken as-is.
    String,
    /// Text names an enum member.
    Enum,
    /// Text is parsed by the type's own candidate converters.
    Generic,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Enum => write!(f, "enum"),
            ValueKind::Generic => write!(f, "generic"),
        }
    }
}

/// A type that can be written to and read back from a CSV field.
pub trait CsvValue: ToCsvText + FromCsvText {}

impl<T: ToCsvText + FromCsvText> CsvValue for T {}

/// Implement [`ToCsvText`] and [`FromCsvText`] for types with `Display` and
/// `FromStr`, using `FromStr` as the strict candidate.
///
/// ```ignore
/// csv_types::csv_value!(MyId, OtherId);
/// ```
#[macro_export]
macro_rules! csv_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ToCsvText for $ty {
                fn to_csv_text(&self) -> String {
                    self.to_string()
                }
            }

            impl $crate::FromCsvText for $ty {
                fn converter() -> $crate::Converter<Self> {
                    $crate::Converter::generic().strict(|text: &str| text.parse::<$ty>().ok())
                }
            }
        )+
    };
}
