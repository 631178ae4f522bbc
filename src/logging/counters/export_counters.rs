use crate::{api::igdb::IgdbGame, Status};

use super::counters::*;

pub struct ExportCounters;

impl ExportCounters {
    pub fn statement(game: &IgdbGame) {
        counter(
            "export_statement",
            &format!("Insert statement: {}", game_description(game)),
        )
    }

    pub fn statement_fail(game: &IgdbGame, status: &Status) {
        error_counter(
            "export_statement_fail",
            &format!("Insert statement failed: {}", game_description(game)),
            status,
        )
    }
}

fn game_description(game: &IgdbGame) -> String {
    format!(
        "'{}', igdb: {}",
        game.display_name(),
        match game.id {
            Some(id) => id.to_string(),
            None => "none".to_owned(),
        }
    )
}
