use serde::{Deserialize, Serialize};

/// Normalized game row stored as a JSON blob in the `description` column of
/// the `service` table. Field order matches the consuming table's readers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceDescription {
    #[serde(default)]
    pub text_button: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub label_link: String,

    /// `YYYY-MM-DD`, `Mon 01, YYYY` for approximate dates, or empty.
    #[serde(default)]
    pub release_date: String,

    #[serde(default)]
    pub technical_specifications: TechnicalSpecifications,

    #[serde(default)]
    pub activation_description: String,

    #[serde(default)]
    pub parental_rating: String,

    #[serde(default)]
    pub pre_sale: bool,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub steps: Vec<String>,

    #[serde(default)]
    pub description: String,
}

impl Default for ServiceDescription {
    fn default() -> Self {
        ServiceDescription {
            text_button: String::default(),
            link: String::default(),
            label_link: String::default(),
            release_date: String::default(),
            technical_specifications: TechnicalSpecifications::default(),
            activation_description: String::default(),
            parental_rating: PARENTAL_RATING.to_owned(),
            pre_sale: false,
            languages: vec![],
            steps: vec![String::default()],
            description: String::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct TechnicalSpecifications {
    /// Translated age rating content descriptions joined with ", ".
    #[serde(default)]
    pub age_ratings: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub developed: String,

    #[serde(default)]
    pub game_modes: Vec<String>,
}

const PARENTAL_RATING: &str = "14";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placeholders() {
        let row = ServiceDescription::default();
        assert_eq!(row.parental_rating, "14");
        assert_eq!(row.steps, vec![String::new()]);
        assert!(!row.pre_sale);
    }

    #[test]
    fn serialized_key_order() {
        let json = serde_json::to_string(&ServiceDescription::default()).unwrap();
        assert_eq!(
            json,
            r#"{"text_button":"","link":"","label_link":"","release_date":"","technical_specifications":{"age_ratings":"","company":"","developed":"","game_modes":[]},"activation_description":"","parental_rating":"14","pre_sale":false,"languages":[],"steps":[""],"description":""}"#
        );
    }
}
