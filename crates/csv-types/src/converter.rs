//! Ranked candidate converters.
//!
//! A [`Converter`] is resolved once per field when a schema is built and is
//! then reused for every line. Conversion is best-effort: the candidates are
//! tried in order and the first success wins. When every candidate fails the
//! caller keeps the field's default value.

use crate::ValueKind;
use tracing::trace;

/// Error type reported by fallible candidates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

type StrictFn<T> = Box<dyn Fn(&str) -> Option<T> + Send + Sync>;
type FallibleFn<T> = Box<dyn Fn(&str) -> Result<T, BoxError> + Send + Sync>;

/// One way of turning field text into a value.
pub enum Candidate<T> {
    /// Reports success or failure without an error value.
    Strict(StrictFn<T>),
    /// Reports failure through an error value, which is logged and dropped.
    Fallible(FallibleFn<T>),
}

impl<T> Candidate<T> {
    fn attempt(&self, text: &str) -> Option<T> {
        match self {
            Candidate::Strict(parse) => parse(text),
            Candidate::Fallible(parse) => match parse(text) {
                Ok(value) => Some(value),
                Err(e) => {
                    trace!("Fallible conversion of '{text}' failed: {e}");
                    None
                }
            },
        }
    }
}

impl<T: 'static> Candidate<T> {
    fn map<U: 'static, F>(self, f: F) -> Candidate<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        match self {
            Candidate::Strict(parse) => {
                Candidate::Strict(Box::new(move |text: &str| parse(text).map(&f)))
            }
            Candidate::Fallible(parse) => {
                Candidate::Fallible(Box::new(move |text: &str| parse(text).map(&f)))
            }
        }
    }
}

impl<T> std::fmt::Debug for Candidate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::Strict(_) => write!(f, "Strict"),
            Candidate::Fallible(_) => write!(f, "Fallible"),
        }
    }
}

/// A value kind plus an ordered list of candidates.
#[derive(Debug)]
pub struct Converter<T> {
    kind: ValueKind,
    candidates: Vec<Candidate<T>>,
}

impl<T> Converter<T> {
    /// Create an empty converter of the given kind.
    ///
    /// A converter with no candidates skips every field.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            candidates: Vec::new(),
        }
    }

    /// Create an empty generic converter.
    pub fn generic() -> Self {
        Self::new(ValueKind::Generic)
    }

    /// Append a candidate that reports success as `Some`.
    pub fn strict<F>(mut self, parse: F) -> Self
    where
        F: Fn(&str) -> Option<T> + Send + Sync + 'static,
    {
        self.candidates.push(Candidate::Strict(Box::new(parse)));
        self
    }

    /// Append a candidate that reports failure as an error.
    pub fn fallible<F, E>(mut self, parse: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.candidates
            .push(Candidate::Fallible(Box::new(move |text: &str| {
                parse(text).map_err(Into::into)
            })));
        self
    }

    /// Append an already-built candidate.
    pub fn candidate(mut self, candidate: Candidate<T>) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// The kind this converter was built for.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The candidates in the order they are tried.
    pub fn candidates(&self) -> &[Candidate<T>] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<Candidate<T>> {
        self.candidates
    }

    /// Convert `text`, returning `None` when no candidate accepts it.
    pub fn convert(&self, text: &str) -> Option<T> {
        let value = self
            .candidates
            .iter()
            .find_map(|candidate| candidate.attempt(text));
        if value.is_none() {
            trace!(
                "No {} candidate accepted '{text}' ({} tried)",
                self.kind,
                self.candidates.len()
            );
        }
        value
    }
}

impl<T: 'static> Converter<T> {
    /// Transform every candidate's output, keeping kind and order.
    pub fn map<U: 'static, F>(self, f: F) -> Converter<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
    {
        Converter {
            kind: self.kind,
            candidates: self
                .candidates
                .into_iter()
                .map(|candidate| candidate.map(f.clone()))
                .collect(),
        }
    }
}

impl Converter<String> {
    /// Passthrough converter for string fields. Always succeeds.
    pub fn string() -> Self {
        Self::new(ValueKind::String).strict(|text: &str| Some(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Days(u32);

    fn parse_days(text: &str) -> Result<Days, std::num::ParseIntError> {
        text.parse().map(Days)
    }

    #[test]
    fn test_string_passthrough() {
        let converter = Converter::string();
        assert_eq!(converter.kind(), ValueKind::String);
        assert_eq!(converter.convert(""), Some(String::new()));
        assert_eq!(converter.convert("a,b"), Some("a,b".to_string()));
    }

    #[test]
    fn test_strict_before_fallible() {
        let converter = Converter::generic()
            .strict(|text: &str| (text == "one").then_some(Days(1)))
            .fallible(parse_days);
        assert_eq!(converter.candidates().len(), 2);
        assert_eq!(converter.convert("one"), Some(Days(1)));
        assert_eq!(converter.convert("3"), Some(Days(3)));
    }

    #[test]
    fn test_all_candidates_fail() {
        let converter = Converter::generic().fallible(parse_days);
        assert_eq!(converter.convert("notanumber"), None);
    }

    #[test]
    fn test_empty_converter_skips() {
        let converter: Converter<Days> = Converter::generic();
        assert_eq!(converter.convert("1"), None);
    }

    #[test]
    fn test_map_keeps_kind_and_order() {
        let converter = Converter::generic().fallible(parse_days).map(Some);
        assert_eq!(converter.kind(), ValueKind::Generic);
        assert_eq!(converter.convert("7"), Some(Some(Days(7))));
        assert_eq!(converter.convert("x"), None);
    }
}
