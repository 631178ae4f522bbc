use std::collections::HashSet;

use crate::api::igdb::{IgdbGame, IgdbStatus};

use super::format_date;

/// Normalized date of the first release date entry.
pub fn release_date(game: &IgdbGame) -> String {
    match game.release_dates.first() {
        Some(release_date) => format_date(&release_date.human),
        None => String::new(),
    }
}

/// Supported language names without duplicates, in first-seen order.
pub fn languages(game: &IgdbGame) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut languages = vec![];
    for support in &game.language_supports {
        if let Some(language) = &support.language {
            if !language.name.is_empty() && seen.insert(language.name.as_str()) {
                languages.push(language.name.clone());
            }
        }
    }
    languages
}

pub fn pre_sale(game: &IgdbGame) -> bool {
    matches!(&game.status, Some(IgdbStatus::Tag(tag)) if tag == PRE_SALE)
}

pub fn game_modes(game: &IgdbGame) -> Vec<String> {
    game.game_modes.iter().map(|mode| mode.name.clone()).collect()
}

/// Name of the company in the first involved company entry.
pub fn company(game: &IgdbGame) -> String {
    game.involved_companies
        .first()
        .and_then(|involved| involved.company.as_ref())
        .map(|company| company.name.clone())
        .unwrap_or_default()
}

/// Name of the company in the first involved company entry if that entry is
/// credited as developer. An empty name when the first entry lacks the
/// developer role, even if a later entry has it.
pub fn developer(game: &IgdbGame) -> String {
    match game.involved_companies.first() {
        Some(involved) if involved.developer => company(game),
        _ => String::new(),
    }
}

/// Age rating content descriptions across all ratings, in order.
pub fn content_descriptions(game: &IgdbGame) -> Vec<&str> {
    game.age_ratings
        .iter()
        .flat_map(|rating| rating.content_descriptions.iter())
        .map(|content| content.description.as_str())
        .collect()
}

const PRE_SALE: &str = "pre_sale";
