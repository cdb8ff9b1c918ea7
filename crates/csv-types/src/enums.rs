//! Enum conversions.
//!
//! Enum fields are written as their member name and read back by looking up
//! the first member whose name equals the field text exactly.

use crate::{Converter, ValueKind};

/// An enum whose members can be named in a CSV field.
pub trait CsvEnum: Sized + Copy + Send + Sync + 'static {
    /// Members in declaration order.
    const MEMBERS: &'static [(&'static str, Self)];

    /// The declared name of this member.
    fn name(&self) -> &'static str;

    /// First member whose declared name equals `text`.
    fn from_name(text: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .find(|(name, _)| *name == text)
            .map(|(_, member)| *member)
    }

    /// Converter performing the name lookup.
    fn enum_converter() -> Converter<Self> {
        Converter::new(ValueKind::Enum).strict(|text: &str| Self::from_name(text))
    }
}

/// Declare a fieldless enum together with its CSV conversions.
///
/// The first member is the enum's `Default` unless the invocation marks
/// another member with `#[default]`.
///
/// ```ignore
/// csv_types::csv_enum! {
///     #[derive(Debug, Default)]
///     pub enum Priority {
///         High,
///         #[default]
///         Middle,
///         Low,
///     }
/// }
/// ```
#[macro_export]
macro_rules! csv_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::CsvEnum for $name {
            const MEMBERS: &'static [(&'static str, Self)] =
                &[ $( (stringify!($variant), $name::$variant) ),+ ];

            fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::CsvEnum::name(self))
            }
        }

        impl $crate::ToCsvText for $name {
            const KIND: $crate::ValueKind = $crate::ValueKind::Enum;

            fn to_csv_text(&self) -> String {
                $crate::CsvEnum::name(self).to_string()
            }
        }

        impl $crate::FromCsvText for $name {
            fn converter() -> $crate::Converter<Self> {
                <$name as $crate::CsvEnum>::enum_converter()
            }
        }
    };
}
