/*!
This module holds the annotation records of the two input files, the fixed
pronoun table and the reader turning a tab-delimited file into a map of
annotations keyed by example ID.
*/
use ahash::HashMap as AHashMap;
use enum_iterator::Sequence;
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::Display;
use std::io;
use std::path::Path;

/// Column order of the gold annotation files. The first line of a gold file
/// repeats these names and is skipped when reading.
pub const GOLD_FIELDNAMES: [&str; 11] = [
    "ID",
    "Text",
    "Pronoun",
    "Pronoun-offset",
    "A",
    "A-offset",
    "A-coref",
    "B",
    "B-offset",
    "B-coref",
    "URL",
];

/// Column order of the system annotation files. System files have no header
/// line.
pub const SYSTEM_FIELDNAMES: [&str; 3] = ["ID", "A-coref", "B-coref"];

/// Mapping of the GAP pronouns to the gender of their referent. Lookups go
/// through `Gender::from_pronoun`, which lowercases first.
const PRONOUNS: [(&str, Gender); 6] = [
    ("she", Gender::Feminine),
    ("her", Gender::Feminine),
    ("hers", Gender::Feminine),
    ("he", Gender::Masculine),
    ("his", Gender::Masculine),
    ("him", Gender::Masculine),
];

/// The gender of the referent of an example's target pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Sequence)]
pub enum Gender {
    /// Gender was not determined for the example. Gold annotations never
    /// carry this variant; reading fails instead.
    Unknown,
    Masculine,
    Feminine,
}

impl Default for Gender {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Gender {
    /// Gender of the referent of `pronoun`, looked up case-insensitively in
    /// the pronoun table. Pronouns outside the table map to `Unknown`.
    pub fn from_pronoun(pronoun: &str) -> Self {
        let lowercased = pronoun.to_lowercase();
        PRONOUNS
            .iter()
            .find(|(known, _)| *known == lowercased)
            .map_or(Self::Unknown, |(_, gender)| *gender)
    }
}

/// Coreference annotations of a single example.
///
/// A judgment of `None` indicates that no usable annotation was found for
/// that name, either because the example never showed up or because its
/// label could not be parsed. The default annotation is entirely absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Gender of the example's target pronoun. Filled from the `Pronoun`
    /// column when reading gold data, `Unknown` for system data.
    pub gender: Gender,
    /// Whether name A was recorded as coreferential with the target pronoun.
    pub name_a_coref: Option<bool>,
    /// Whether name B was recorded as coreferential with the target pronoun.
    pub name_b_coref: Option<bool>,
}

/// Annotations keyed by example ID.
pub type AnnotationMap = AHashMap<String, Annotation>;

/// Which of the two fixed file schemas a file is read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationSource {
    /// Eleven columns with a header line; the pronoun determines gender.
    Gold,
    /// Three columns, no header line, no gender information.
    System,
}

impl Display for AnnotationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gold => write!(f, "gold"),
            Self::System => write!(f, "system"),
        }
    }
}

/// A gold row carried a pronoun outside the fixed pronoun table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPronounError {
    example_id: String,
    pronoun: String,
}

impl Display for UnknownPronounError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown pronoun ({}) in gold example {}",
            self.pronoun, self.example_id
        )
    }
}
impl Error for UnknownPronounError {}

/// Enum error encompassing the failures that stop the reading of an
/// annotation file. Duplicate IDs and unparseable labels are not errors;
/// they are logged and the reading continues.
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be opened or a row did not match the schema.
    Csv(csv::Error),
    /// A gold row carried a pronoun with no known gender.
    UnknownPronoun(UnknownPronounError),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(csv_err) => std::fmt::Display::fmt(csv_err, f),
            Self::UnknownPronoun(pronoun_err) => std::fmt::Display::fmt(pronoun_err, f),
        }
    }
}
impl Error for ReadError {}

impl From<csv::Error> for ReadError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<UnknownPronounError> for ReadError {
    fn from(value: UnknownPronounError) -> Self {
        Self::UnknownPronoun(value)
    }
}

/// One row of a gold file, in `GOLD_FIELDNAMES` order. Only the ID, the
/// pronoun and the two coreference labels take part in scoring.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct GoldRow {
    id: String,
    text: String,
    pronoun: String,
    pronoun_offset: String,
    name_a: String,
    a_offset: String,
    a_coref: String,
    name_b: String,
    b_offset: String,
    b_coref: String,
    url: String,
}

impl GoldRow {
    fn into_annotation(self) -> Result<(String, Annotation), UnknownPronounError> {
        let gender = Gender::from_pronoun(&self.pronoun);
        if gender == Gender::Unknown {
            return Err(UnknownPronounError {
                example_id: self.id,
                pronoun: self.pronoun,
            });
        }
        let annotation = Annotation {
            gender,
            name_a_coref: parse_coref(&self.a_coref),
            name_b_coref: parse_coref(&self.b_coref),
        };
        Ok((self.id, annotation))
    }
}

/// One row of a system file, in `SYSTEM_FIELDNAMES` order.
#[derive(Debug, Deserialize)]
struct SystemRow {
    id: String,
    a_coref: String,
    b_coref: String,
}

impl SystemRow {
    fn into_annotation(self) -> (String, Annotation) {
        let annotation = Annotation {
            gender: Gender::Unknown,
            name_a_coref: parse_coref(&self.a_coref),
            name_b_coref: parse_coref(&self.b_coref),
        };
        (self.id, annotation)
    }
}

/// Parses one coreference label. Case variants of `true` and `false` are
/// accepted; any other value is logged and read as an absent judgment.
fn parse_coref(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => {
            warn!("Unexpected label: {}", value);
            None
        }
    }
}

fn tsv_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.delimiter(b'\t').has_headers(false);
    builder
}

/// Reads the coreference annotations of every example in the given file.
/// Returns a map from example ID to its `Annotation`. When reading gold,
/// the `Pronoun` column is used to determine gender and the first line is
/// skipped as the header.
///
/// The first row of each example ID wins; later rows with the same ID are
/// dropped with a warning.
pub fn read_annotations(
    path: &Path,
    source: AnnotationSource,
) -> Result<AnnotationMap, ReadError> {
    let reader = tsv_reader_builder().from_path(path)?;
    read_annotations_inner(reader, source)
}

fn read_annotations_inner<R: io::Read>(
    mut reader: csv::Reader<R>,
    source: AnnotationSource,
) -> Result<AnnotationMap, ReadError> {
    let mut records = reader.records();
    if source == AnnotationSource::Gold {
        // The header line is consumed without being validated.
        records.next();
    }
    let mut annotations = AnnotationMap::default();
    for record in records {
        let record = record?;
        // Repeated IDs are dropped before their labels are parsed, so a
        // dropped row never warns about its labels or fails the read.
        let (example_id, annotation) = match source {
            AnnotationSource::Gold => {
                let row: GoldRow = record.deserialize(None)?;
                if annotations.contains_key(&row.id) {
                    warn!("Multiple annotations for {}", row.id);
                    continue;
                }
                row.into_annotation()?
            }
            AnnotationSource::System => {
                let row: SystemRow = record.deserialize(None)?;
                if annotations.contains_key(&row.id) {
                    warn!("Multiple annotations for {}", row.id);
                    continue;
                }
                row.into_annotation()
            }
        };
        annotations.insert(example_id, annotation);
    }
    Ok(annotations)
}
