use serde::{Deserialize, Deserializer, Serialize};

/// A game record as returned by the IGDB `games` endpoint with the expanded
/// fields requested by `GameQuery`. Every field is optional upstream.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbGame {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<IgdbImage>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<IgdbImage>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<IgdbPlatform>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<IgdbNamed>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub release_dates: Vec<IgdbReleaseDate>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IgdbStatus>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<IgdbVideo>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub language_supports: Vec<IgdbLanguageSupport>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub involved_companies: Vec<IgdbInvolvedCompany>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub game_modes: Vec<IgdbNamed>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub age_ratings: Vec<IgdbAgeRating>,
}

impl IgdbGame {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Image reference (cover, screenshot, logo). IGDB returns protocol-relative
/// urls such as `//images.igdb.com/igdb/image/upload/t_thumb/abc123.jpg`.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbImage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_id: String,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbNamed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbPlatform {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_logo: Option<IgdbImage>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbReleaseDate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub human: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
}

/// Lifecycle status of a game. Older feeds carry a string tag while the
/// current API returns a numeric code, so both are accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum IgdbStatus {
    Tag(String),
    Code(i64),
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbVideo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_id: String,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbLanguageSupport {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<IgdbNamed>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbInvolvedCompany {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<IgdbNamed>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub developer: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: bool,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbAgeRating {
    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_descriptions: Vec<IgdbContentDescription>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct IgdbContentDescription {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_parses_to_defaults() {
        let game: IgdbGame = serde_json::from_value(json!({})).unwrap();
        assert_eq!(game.id, None);
        assert_eq!(game.name, None);
        assert!(game.cover.is_none());
        assert!(game.release_dates.is_empty());
        assert!(game.summary.is_empty());
        assert_eq!(game.display_name(), "Unknown");
    }

    #[test]
    fn parse_expanded_game() {
        let game: IgdbGame = serde_json::from_value(json!({
            "id": 1942,
            "name": "The Witcher 3: Wild Hunt",
            "cover": {"id": 89386, "url": "//images.igdb.com/igdb/image/upload/t_thumb/co1wyy.jpg"},
            "release_dates": [{"id": 1, "human": "May 19, 2015", "date": 1431993600}],
            "status": "pre_sale",
            "platforms": [{"id": 6, "name": "PC (Microsoft Windows)", "platform_logo": {"url": "//images.igdb.com/igdb/image/upload/t_thumb/plim.jpg"}}],
            "involved_companies": [{"id": 1, "company": {"id": 908, "name": "CD Projekt RED"}, "developer": true}],
        }))
        .unwrap();

        assert_eq!(game.id, Some(1942));
        assert_eq!(game.display_name(), "The Witcher 3: Wild Hunt");
        assert_eq!(game.release_dates[0].human, "May 19, 2015");
        assert_eq!(game.status, Some(IgdbStatus::Tag("pre_sale".to_owned())));
        assert_eq!(game.platforms[0].name, "PC (Microsoft Windows)");
        assert!(game.involved_companies[0].developer);
    }

    #[test]
    fn numeric_status_is_accepted() {
        let game: IgdbGame = serde_json::from_value(json!({"status": 4})).unwrap();
        assert_eq!(game.status, Some(IgdbStatus::Code(4)));
    }

    #[test]
    fn null_fields_parse_to_defaults() {
        let game: IgdbGame = serde_json::from_str(
            r#"{"summary":null,"release_dates":[{"human":null}],"cover":{"url":null},"screenshots":null,"involved_companies":[{"company":{"name":null},"developer":null}]}"#,
        )
        .unwrap();
        assert!(game.summary.is_empty());
        assert_eq!(game.release_dates[0].human, "");
        assert_eq!(game.cover.unwrap().url, "");
        assert!(game.screenshots.is_empty());
        assert_eq!(game.involved_companies[0].company.as_ref().unwrap().name, "");
        assert!(!game.involved_companies[0].developer);
    }

    #[test]
    fn null_summary_does_not_reject_batch() {
        let games: Vec<IgdbGame> =
            serde_json::from_str(r#"[{"name":"A"},{"name":"B","summary":null}]"#).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[1].display_name(), "B");
    }
}
