use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of `retrieved_at`, both on disk and in the gallery.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A project scraped from the listing page.
///
/// `link` identifies the project: a collection never holds two records with
/// the same link. Records are never updated once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub link: String,
    pub image: String,
    #[serde(with = "timestamp")]
    pub retrieved_at: NaiveDateTime,
}

impl ProjectRecord {
    pub fn retrieved_at_display(&self) -> String {
        self.retrieved_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_second_precision_text() {
        let record = ProjectRecord {
            title: "Blink".to_owned(),
            link: "https://wokwi.com/projects/1".to_owned(),
            image: "https://img/1.png".to_owned(),
            retrieved_at: NaiveDateTime::parse_from_str("2024-03-05 07:08:09", TIMESTAMP_FORMAT)
                .unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["retrieved_at"], "2024-03-05 07:08:09");
        assert_eq!(record.retrieved_at_display(), "2024-03-05 07:08:09");
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let json = r#"{"title":"t","link":"l","image":"i","retrieved_at":"yesterday"}"#;
        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }
}
