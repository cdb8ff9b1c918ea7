//! End-to-end encode/decode tests over a record exercising every schema feature

use csv_helper_codec::{
    csv_enum, csv_value, decode, encode, from_csv, to_csv, Converter, CsvConfig, CsvRecord,
    FromCsvText, Schema, ToCsvText, ValueKind,
};
use std::fmt;
use std::str::FromStr;

csv_enum! {
    #[derive(Debug, Default)]
    enum Priority {
        High,
        #[default]
        Middle,
        Low,
    }
}

/// Only offers a parse that reports failure through an error.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct DaySpan(i32);

impl DaySpan {
    fn parse(text: &str) -> Result<Self, std::num::ParseIntError> {
        text.parse().map(DaySpan)
    }
}

impl ToCsvText for DaySpan {
    fn to_csv_text(&self) -> String {
        self.0.to_string()
    }
}

impl FromCsvText for DaySpan {
    fn converter() -> Converter<Self> {
        Converter::generic().fallible(DaySpan::parse)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Task {
    id: i32,
    title: String,
    done: bool,
    priority: Priority,
    detail: String,
    span: DaySpan,
    option: String,
}

impl Task {
    fn version(&self) -> String {
        "1.0".to_string()
    }
}

impl CsvRecord for Task {
    fn schema() -> Schema<Self> {
        Schema::<Self>::builder()
            .field("Id", |r| &r.id, |r| &mut r.id)
            .field("Title", |r| &r.title, |r| &mut r.title)
            .field("Done", |r| &r.done, |r| &mut r.done)
            .field("Priority", |r| &r.priority, |r| &mut r.priority)
            .field("Detail", |r| &r.detail, |r| &mut r.detail)
            .column_name("Details")
            .field("DaySpan", |r| &r.span, |r| &mut r.span)
            .field("Option", |r| &r.option, |r| &mut r.option)
            .ignore()
            .read_only("Version", Task::version)
            .build()
    }
}

fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "filing tax returns".to_string(),
            ..Task::default()
        },
        Task {
            id: 2,
            title: "report of a business trip".to_string(),
            detail: "\"ASAP\"".to_string(),
            span: DaySpan(3),
            priority: Priority::High,
            ..Task::default()
        },
        Task {
            id: 3,
            title: "expense slips".to_string(),
            detail: "book expenses: \"C# 6.0\",\"The C# Programming\"".to_string(),
            priority: Priority::Low,
            done: true,
            ..Task::default()
        },
    ]
}

#[test]
fn test_encode_matches_expected_document() {
    let csv = to_csv(&tasks(), &CsvConfig::default()).unwrap();
    let expected = "Id,Title,Done,Priority,Details,DaySpan\n\
                    1,filing tax returns,false,Middle,,0\n\
                    2,report of a business trip,false,High,\"\"\"ASAP\"\"\",3\n\
                    3,expense slips,true,Low,\"book expenses: \"\"C# 6.0\"\",\"\"The C# Programming\"\"\",0\n";
    assert_eq!(csv, expected);
}

#[test]
fn test_round_trip_with_header() {
    let config = CsvConfig::default();
    let csv = to_csv(&tasks(), &config).unwrap();
    let decoded: Vec<Task> = from_csv(&csv, &config).unwrap().collect();
    assert_eq!(decoded, tasks());
}

#[test]
fn test_round_trip_without_header() {
    let config = CsvConfig::default().with_header(false);
    let csv = to_csv(&tasks(), &config).unwrap();
    assert!(csv.starts_with("1,filing tax returns,"));
    let decoded: Vec<Task> = from_csv(&csv, &config).unwrap().collect();
    assert_eq!(decoded, tasks());
}

#[test]
fn test_round_trip_with_semicolon_separator() {
    let config = CsvConfig::default().with_separator(';');
    let csv = to_csv(&tasks(), &config).unwrap();
    assert!(csv.starts_with("Id;Title;Done;Priority;Details;DaySpan\n"));
    let decoded: Vec<Task> = from_csv(&csv, &config).unwrap().collect();
    assert_eq!(decoded, tasks());
}

#[test]
fn test_excluded_field_left_at_default() {
    let mut with_option = tasks();
    with_option[0].option = "secret".to_string();

    let csv = to_csv(&with_option, &CsvConfig::default()).unwrap();
    assert!(!csv.contains("Option"));
    assert!(!csv.contains("secret"));
    assert!(!csv.contains("Version"));

    let decoded: Vec<Task> = from_csv(&csv, &CsvConfig::default()).unwrap().collect();
    assert_eq!(decoded[0].option, "");
}

#[test]
fn test_header_rename_maps_back() {
    let csv = "Details,Id\nsome detail,4\n";
    let decoded: Vec<Task> = from_csv(csv, &CsvConfig::default()).unwrap().collect();
    assert_eq!(decoded[0].detail, "some detail");
    assert_eq!(decoded[0].id, 4);

    // The attribute name is not a column name
    let csv = "Detail\nignored\n";
    let decoded: Vec<Task> = from_csv(csv, &CsvConfig::default()).unwrap().collect();
    assert_eq!(decoded[0].detail, "");
}

#[test]
fn test_headerless_positional_assignment() {
    let config = CsvConfig::default().with_header(false);
    let decoded: Vec<Task> = from_csv("1,\"x\",true\n", &config).unwrap().collect();
    assert_eq!(decoded[0].id, 1);
    assert_eq!(decoded[0].title, "x");
    assert!(decoded[0].done);
    assert_eq!(decoded[0].priority, Priority::Middle);
}

#[test]
fn test_unconvertible_fields_keep_defaults() {
    let csv = "Id,Priority,DaySpan,Done\nnotanumber,Urgent,soon,perhaps\n";
    let decoded: Vec<Task> = from_csv(csv, &CsvConfig::default()).unwrap().collect();
    assert_eq!(decoded, vec![Task::default()]);
}

#[test]
fn test_multi_line_quoted_field() {
    let config = CsvConfig::default().with_header(false);
    let csv = "7,\"line1\nline2\"\r\n8,next\r\n";
    let decoded: Vec<Task> = from_csv(csv, &config).unwrap().collect();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0].title, "line1\nline2");
    assert_eq!(decoded[1].title, "next");
}

#[test]
fn test_embedded_line_breaks_round_trip() {
    let records = vec![Task {
        id: 9,
        title: "first\r\nsecond".to_string(),
        detail: "tab\tand \"quote\"".to_string(),
        ..Task::default()
    }];
    let csv = to_csv(&records, &CsvConfig::default()).unwrap();
    let decoded: Vec<Task> = from_csv(&csv, &CsvConfig::default()).unwrap().collect();
    assert_eq!(decoded, records);
}

#[test]
fn test_cached_schema_reused_across_calls() {
    let schema = Task::schema();
    let config = CsvConfig::default();
    let first = encode(&tasks(), &schema, &config).unwrap();
    let second = encode(&tasks(), &schema.clone(), &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(decode::<Task>(&first, &schema, &config).unwrap().count(), 3);
}

#[test]
fn test_descriptor_metadata() {
    let schema = Task::schema();
    let kinds: Vec<(&str, ValueKind, bool)> = schema
        .descriptors()
        .iter()
        .map(|d| (d.display_name(), d.value_kind(), d.is_included()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("Id", ValueKind::Generic, true),
            ("Title", ValueKind::String, true),
            ("Done", ValueKind::Generic, true),
            ("Priority", ValueKind::Enum, true),
            ("Details", ValueKind::String, true),
            ("DaySpan", ValueKind::Generic, true),
            ("Option", ValueKind::String, false),
            ("Version", ValueKind::String, false),
        ]
    );
}

#[test]
fn test_concurrent_calls_use_their_own_config() {
    let handles: Vec<_> = [',', ';', '\t', '|']
        .into_iter()
        .map(|separator| {
            std::thread::spawn(move || {
                let config = CsvConfig::default().with_separator(separator);
                let csv = to_csv(&tasks(), &config).unwrap();
                let decoded: Vec<Task> = from_csv(&csv, &config).unwrap().collect();
                decoded == tasks()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

/// A `Display` + `FromStr` newtype declared through `csv_value!`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Meters(u32);

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl FromStr for Meters {
    type Err = std::num::ParseIntError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.trim_end_matches('m').parse().map(Meters)
    }
}

csv_value!(Meters);

#[derive(Debug, Default, Clone, PartialEq)]
struct Leg {
    id: i32,
    distance: Meters,
    note: Option<String>,
}

impl CsvRecord for Leg {
    fn schema() -> Schema<Self> {
        Schema::<Self>::builder()
            .field("Id", |r| &r.id, |r| &mut r.id)
            .field("Distance", |r| &r.distance, |r| &mut r.distance)
            .field("Note", |r| &r.note, |r| &mut r.note)
            .build()
    }
}

#[test]
fn test_csv_value_newtype_round_trip() {
    let legs = vec![
        Leg {
            id: 1,
            distance: Meters(5),
            note: Some("a\rb".to_string()),
        },
        Leg {
            id: 2,
            distance: Meters(120),
            note: None,
        },
    ];
    let csv = to_csv(&legs, &CsvConfig::default()).unwrap();
    assert_eq!(csv, "Id,Distance,Note\n1,5m,\"a\rb\"\n2,120m,\n");

    let decoded: Vec<Leg> = from_csv(&csv, &CsvConfig::default()).unwrap().collect();
    assert_eq!(decoded, legs);
    assert_eq!(Leg::schema().get("Distance").unwrap().value_kind(), ValueKind::Generic);
}

#[test]
fn test_csv_value_unparsable_keeps_default() {
    let csv = "Id,Distance\n3,far\n";
    let decoded: Vec<Leg> = from_csv(csv, &CsvConfig::default()).unwrap().collect();
    assert_eq!(decoded[0].id, 3);
    assert_eq!(decoded[0].distance, Meters::default());
}

#[test]
fn test_empty_optional_string_reads_as_none() {
    let legs = vec![Leg {
        id: 5,
        distance: Meters(1),
        note: Some(String::new()),
    }];
    let csv = to_csv(&legs, &CsvConfig::default()).unwrap();
    assert_eq!(csv, "Id,Distance,Note\n5,1m,\n");

    // None and Some("") share the empty field; it always decodes as None
    let decoded: Vec<Leg> = from_csv(&csv, &CsvConfig::default()).unwrap().collect();
    assert_eq!(decoded[0].note, None);
    assert_eq!(decoded[0].id, 5);
}
