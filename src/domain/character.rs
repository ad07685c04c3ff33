//! Character and episode domain models.
//!
//! These types mirror the JSON documents served by the character API closely
//! enough to be deserialized directly, while tolerating the sparser shapes
//! some deployments return (missing optional fields, string identifiers,
//! opaque episode codes instead of URLs).

use serde::{Deserialize, Deserializer, Serialize};

/// A named link to another API resource (origin or last known location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A character as returned by the character endpoints.
///
/// Optional attributes are `None` when absent from the response. The
/// `episode` list holds episode references in API order: full URLs such as
/// `https://rickandmortyapi.com/api/episode/1`, or opaque codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub origin: Option<NamedResource>,
    #[serde(default)]
    pub location: Option<NamedResource>,
    #[serde(default)]
    pub episode: Vec<String>,
}

impl Character {
    /// Labelled attributes for the detail view, in display order.
    ///
    /// Attributes whose value is absent or empty are skipped.
    ///
    /// ```
    /// use charbrowser::domain::Character;
    ///
    /// let rick: Character = serde_json::from_str(
    ///     r#"{"id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human", "type": ""}"#,
    /// ).unwrap();
    /// let labels: Vec<_> = rick.attributes().into_iter().map(|(label, _)| label).collect();
    /// assert_eq!(labels, ["ID", "Name", "Species", "Status"]);
    /// ```
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        let candidates = [
            ("ID", Some(self.id.as_str())),
            ("Name", Some(self.name.as_str())),
            ("Species", Some(self.species.as_str())),
            ("Status", Some(self.status.as_str())),
            ("Gender", self.gender.as_deref()),
            ("Origin", self.origin.as_ref().map(|o| o.name.as_str())),
            ("Location", self.location.as_ref().map(|l| l.name.as_str())),
            ("Type", self.kind.as_deref()),
        ];

        candidates
            .into_iter()
            .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
            .collect()
    }

    /// Identifiers of the referenced episodes, one per reference.
    ///
    /// Each identifier is the trailing path segment of the reference, so
    /// `".../episode/2"` yields `"2"` and an opaque code is kept as-is.
    #[must_use]
    pub fn episode_ids(&self) -> Vec<String> {
        self.episode.iter().map(|r| trailing_segment(r).to_string()).collect()
    }
}

/// Extracts the trailing path segment of a resource reference.
///
/// ```
/// use charbrowser::domain::trailing_segment;
///
/// assert_eq!(trailing_segment("https://rickandmortyapi.com/api/episode/2"), "2");
/// assert_eq!(trailing_segment("https://rickandmortyapi.com/api/character/avatar/1.jpeg"), "1.jpeg");
/// assert_eq!(trailing_segment("S01E01"), "S01E01");
/// ```
#[must_use]
pub fn trailing_segment(reference: &str) -> &str {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(reference)
}

/// An episode as returned by the episode endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub air_date: String,
    #[serde(default)]
    pub episode: String,
}

impl Episode {
    /// One-line summary, e.g. `S01E01: Pilot (December 2, 2013)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}: {} ({})", self.episode, self.name, self.air_date)
    }
}

/// A page of items plus next/previous availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page_count: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PagedResult<T> {
    /// An empty page with both directions unavailable.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            page_count: 0,
            has_next: false,
            has_prev: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rick() -> Character {
        serde_json::from_value(json!({
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
            "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": [
                "https://rickandmortyapi.com/api/episode/1",
                "https://rickandmortyapi.com/api/episode/2"
            ],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_full_character() {
        let character = rick();
        assert_eq!(character.id, "1");
        assert_eq!(character.kind.as_deref(), Some(""));
        assert_eq!(character.origin.unwrap().name, "Earth (C-137)");
    }

    #[test]
    fn deserializes_sparse_character_with_string_id() {
        let character: Character = serde_json::from_value(json!({
            "id": "1",
            "name": "Rick Sanchez",
            "image": "/rick.png",
            "episode": ["S01E01", "S01E02"]
        }))
        .unwrap();

        assert_eq!(character.id, "1");
        assert!(character.gender.is_none());
        assert_eq!(character.episode_ids(), vec!["S01E01", "S01E02"]);
    }

    #[test]
    fn attributes_skip_empty_type() {
        let labels: Vec<&str> = rick().attributes().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["ID", "Name", "Species", "Status", "Gender", "Origin", "Location"]);
    }

    #[test]
    fn episode_ids_take_trailing_segment() {
        assert_eq!(rick().episode_ids(), vec!["1", "2"]);
        assert_eq!(trailing_segment("https://rickandmortyapi.com/api/episode/28/"), "28");
    }

    #[test]
    fn episode_summary_format() {
        let episode = Episode {
            id: "1".into(),
            name: "Pilot".into(),
            air_date: "December 2, 2013".into(),
            episode: "S01E01".into(),
        };
        assert_eq!(episode.summary(), "S01E01: Pilot (December 2, 2013)");
    }
}
