use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::Status;

/// Filters applied to the IGDB `games` request.
#[derive(Default, Debug, Clone)]
pub struct GameQuery {
    /// Platform id, or a parenthesised list of ids such as `(6,13)`.
    pub platform: Option<String>,
    pub game_name: Option<String>,
    /// Only games created in IGDB before this unix timestamp.
    pub created_before: Option<u64>,
    pub limit: Option<u32>,
}

impl GameQuery {
    /// Returns the APIcalypse body for this query.
    pub fn body(&self) -> Result<String, Status> {
        let mut clauses = vec![format!("fields {GAME_FIELDS}")];

        if let Some(name) = &self.game_name {
            clauses.push(format!("search \"{}\"", name.replace('"', "")));
        }

        let mut conditions = vec![];
        if let Some(platform) = &self.platform {
            lazy_static! {
                static ref PLATFORM_RE: Regex = Regex::new(r"^(\d+|\(\s*\d+(\s*,\s*\d+)*\s*\))$").unwrap();
            }
            let platform = platform.trim();
            if !PLATFORM_RE.is_match(platform) {
                return Err(Status::invalid_argument(format!(
                    "'{platform}' is not a platform id"
                )));
            }
            conditions.push(format!("platforms = {platform}"));
        }
        if let Some(timestamp) = self.created_before {
            conditions.push(format!("created_at < {timestamp}"));
        }
        if !conditions.is_empty() {
            clauses.push(format!("where {}", conditions.iter().join(" & ")));
        }

        if let Some(limit) = self.limit {
            clauses.push(format!("limit {limit}"));
        }

        Ok(clauses.into_iter().map(|clause| format!("{clause};")).join(" "))
    }
}

const GAME_FIELDS: &str = "name,cover.url,screenshots.url,genres.name,release_dates.human,release_dates.date,status,videos.video_id,language_supports.language.name,summary,platforms.name,platforms.platform_logo.url,involved_companies.company.name,involved_companies.developer,involved_companies.publisher,game_modes.name,age_ratings.content_descriptions.description";
