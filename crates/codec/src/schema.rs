//! Record schemas.
//!
//! A [`Schema`] is the ordered list of [`FieldDescriptor`]s of a record type,
//! declared once with a [`SchemaBuilder`]. Declaration order is column order
//! for header lines and position order for headerless decoding.
//!
//! ## Inclusion
//!
//! A field takes part in encoding and decoding iff it can be both read and
//! written and it was not ignored. Read-only and write-only fields stay in
//! the schema for inspection but are always excluded.
//!
//! ## Example
//!
//! ```ignore
//! impl CsvRecord for ToDo {
//!     fn schema() -> Schema<Self> {
//!         Schema::<Self>::builder()
//!             .field("Id", |r| &r.id, |r| &mut r.id)
//!             .field("Detail", |r| &r.detail, |r| &mut r.detail)
//!             .column_name("Details")
//!             .field("Option", |r| &r.option, |r| &mut r.option)
//!             .ignore()
//!             .read_only("Version", |r| r.version().to_string())
//!             .build()
//!     }
//! }
//! ```

use std::sync::Arc;

use csv_types::{CsvValue, FromCsvText, ToCsvText, ValueKind};
use tracing::debug;

type ReadFn<R> = Box<dyn Fn(&R) -> String + Send + Sync>;
type WriteFn<R> = Box<dyn Fn(&mut R, &str) -> bool + Send + Sync>;

/// Static metadata and accessors for one attribute of a record type.
pub struct FieldDescriptor<R> {
    field_name: String,
    display_name: String,
    value_kind: ValueKind,
    included: bool,
    read: Option<ReadFn<R>>,
    write: Option<WriteFn<R>>,
}

impl<R> FieldDescriptor<R> {
    /// The attribute's own name.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The column name used in header lines.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// Whether this field is encoded and decoded.
    pub fn is_included(&self) -> bool {
        self.included
    }

    pub fn is_readable(&self) -> bool {
        self.read.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.write.is_some()
    }

    /// Canonical text of this field in `record`.
    pub(crate) fn read_text(&self, record: &R) -> Option<String> {
        self.read.as_ref().map(|read| read(record))
    }

    /// Convert `text` and assign it. Returns false when the text was
    /// unconvertible and the field kept its value.
    pub(crate) fn write_text(&self, record: &mut R, text: &str) -> bool {
        self.write.as_ref().is_some_and(|write| write(record, text))
    }
}

impl<R> std::fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("field_name", &self.field_name)
            .field("display_name", &self.display_name)
            .field("value_kind", &self.value_kind)
            .field("included", &self.included)
            .finish()
    }
}

/// Ordered field descriptors of a record type.
///
/// Immutable once built. Cloning shares the descriptors, so callers that
/// want to reuse a schema across calls keep a clone.
pub struct Schema<R> {
    descriptors: Arc<[FieldDescriptor<R>]>,
}

impl<R> Clone for Schema<R> {
    fn clone(&self) -> Self {
        Self {
            descriptors: Arc::clone(&self.descriptors),
        }
    }
}

impl<R> std::fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.descriptors.iter()).finish()
    }
}

impl<R: 'static> Schema<R> {
    /// Start declaring a schema.
    pub fn builder() -> SchemaBuilder<R> {
        SchemaBuilder::new()
    }
}

impl<R: CsvRecord> Schema<R> {
    /// Build the schema declared by `R`.
    pub fn of() -> Self {
        R::schema()
    }
}

impl<R> Schema<R> {
    /// All descriptors in declaration order, excluded ones included.
    pub fn descriptors(&self) -> &[FieldDescriptor<R>] {
        &self.descriptors
    }

    /// Descriptors that take part in encoding and decoding.
    pub fn included(&self) -> impl Iterator<Item = &FieldDescriptor<R>> + '_ {
        self.descriptors.iter().filter(|d| d.included)
    }

    /// Number of included fields.
    pub fn len(&self) -> usize {
        self.included().count()
    }

    /// Whether no field is included.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display names of the included fields, in column order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.included().map(FieldDescriptor::display_name)
    }

    /// Look up a descriptor by its attribute name.
    pub fn get(&self, field_name: &str) -> Option<&FieldDescriptor<R>> {
        self.descriptors.iter().find(|d| d.field_name == field_name)
    }
}

/// A record type with a statically declared schema.
pub trait CsvRecord: Default + Sized + 'static {
    /// Declare this type's fields.
    fn schema() -> Schema<Self>;
}

struct PendingField<R> {
    field_name: String,
    column_name: Option<String>,
    ignored: bool,
    value_kind: ValueKind,
    read: Option<ReadFn<R>>,
    write: Option<WriteFn<R>>,
}

/// Declares the fields of a record type in order.
pub struct SchemaBuilder<R> {
    fields: Vec<PendingField<R>>,
}

impl<R: 'static> Default for SchemaBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> SchemaBuilder<R> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Register a readable and writable field.
    ///
    /// The value's converter is resolved here, once.
    pub fn field<T>(self, name: &str, get: fn(&R) -> &T, get_mut: fn(&mut R) -> &mut T) -> Self
    where
        T: CsvValue + 'static,
    {
        let converter = T::converter();
        let value_kind = converter.kind();
        self.push(PendingField {
            field_name: name.to_string(),
            column_name: None,
            ignored: false,
            value_kind,
            read: Some(Box::new(move |record: &R| get(record).to_csv_text())),
            write: Some(Box::new(move |record: &mut R, text: &str| {
                match converter.convert(text) {
                    Some(value) => {
                        *get_mut(record) = value;
                        true
                    }
                    None => false,
                }
            })),
        })
    }

    /// Register a computed field. It is never encoded or decoded.
    pub fn read_only<T>(self, name: &str, get: fn(&R) -> T) -> Self
    where
        T: ToCsvText + 'static,
    {
        self.push(PendingField {
            field_name: name.to_string(),
            column_name: None,
            ignored: false,
            value_kind: T::KIND,
            read: Some(Box::new(move |record: &R| get(record).to_csv_text())),
            write: None,
        })
    }

    /// Register a field that can only be assigned. It is never encoded or
    /// decoded.
    pub fn write_only<T>(self, name: &str, set: fn(&mut R, T)) -> Self
    where
        T: FromCsvText + 'static,
    {
        let converter = T::converter();
        let value_kind = converter.kind();
        self.push(PendingField {
            field_name: name.to_string(),
            column_name: None,
            ignored: false,
            value_kind,
            read: None,
            write: Some(Box::new(move |record: &mut R, text: &str| {
                match converter.convert(text) {
                    Some(value) => {
                        set(record, value);
                        true
                    }
                    None => false,
                }
            })),
        })
    }

    /// Override the column name of the most recently registered field.
    pub fn column_name(mut self, display_name: &str) -> Self {
        if let Some(field) = self.fields.last_mut() {
            field.column_name = Some(display_name.to_string());
        }
        self
    }

    /// Exclude the most recently registered field.
    pub fn ignore(mut self) -> Self {
        if let Some(field) = self.fields.last_mut() {
            field.ignored = true;
        }
        self
    }

    pub fn build(self) -> Schema<R> {
        let descriptors: Vec<FieldDescriptor<R>> = self
            .fields
            .into_iter()
            .map(|field| FieldDescriptor {
                included: field.read.is_some() && field.write.is_some() && !field.ignored,
                display_name: field.column_name.unwrap_or_else(|| field.field_name.clone()),
                field_name: field.field_name,
                value_kind: field.value_kind,
                read: field.read,
                write: field.write,
            })
            .collect();

        debug!(
            "Built schema with {} fields ({} included)",
            descriptors.len(),
            descriptors.iter().filter(|d| d.included).count()
        );

        Schema {
            descriptors: descriptors.into(),
        }
    }

    fn push(mut self, field: PendingField<R>) -> Self {
        self.fields.push(field);
        self
    }
}
