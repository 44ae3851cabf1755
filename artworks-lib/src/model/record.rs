//! Catalog record type

use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Identity of a catalog record.
///
/// This is the only part of a [`Record`] that selection and equality look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Returns the raw integer identity.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable snapshot of one artwork in the catalog.
///
/// Text attributes that the API reports as `null` (or leaves out) are
/// normalized to empty strings on deserialization. Equality and hashing use
/// [`RecordId`] only; the display attributes are opaque payload.
///
/// # Example
///
/// ```
/// use artworks_lib::model::Record;
///
/// let record: Record = serde_json::from_str(
///     r#"{"id": 7, "title": "Nighthawks", "inscriptions": null}"#,
/// ).unwrap();
///
/// assert_eq!(record.id.get(), 7);
/// assert_eq!(record.inscriptions, "");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique identity.
    pub id: RecordId,
    /// Artwork title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Where the artwork was made.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub place_of_origin: String,
    /// Artist name with nationality and life dates, as displayed by the catalog.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    /// Inscriptions on the work, empty when the catalog has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inscriptions: String,
    /// Year the work was started.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Year the work was finished.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Record {
    /// Creates a record with the given identity and title and no other attributes.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: RecordId(id),
            title: title.into(),
            place_of_origin: String::new(),
            artist_display: String::new(),
            inscriptions: String::new(),
            date_start: None,
            date_end: None,
        }
    }

    /// Sets the place of origin.
    pub fn with_place_of_origin(mut self, place: impl Into<String>) -> Self {
        self.place_of_origin = place.into();
        self
    }

    /// Sets the artist display string.
    pub fn with_artist_display(mut self, artist: impl Into<String>) -> Self {
        self.artist_display = artist.into();
        self
    }

    /// Sets the inscriptions.
    pub fn with_inscriptions(mut self, inscriptions: impl Into<String>) -> Self {
        self.inscriptions = inscriptions.into();
        self
    }

    /// Sets the start and end years.
    pub fn with_dates(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.date_start = start;
        self.date_end = end;
        self
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
