use std::{fs, path::Path};

use tracing::{info, instrument};

use crate::Status;

use super::{backend::post, GameQuery, IgdbConnection, IgdbGame};

pub struct IgdbApi {
    connection: IgdbConnection,
}

impl IgdbApi {
    pub fn new(connection: IgdbConnection) -> IgdbApi {
        IgdbApi { connection }
    }

    /// Returns the IgdbGames matching `query`.
    #[instrument(level = "trace", skip(self))]
    pub async fn fetch_games(&self, query: &GameQuery) -> Result<Vec<IgdbGame>, Status> {
        let games = post::<Vec<IgdbGame>>(&self.connection, GAMES_ENDPOINT, &query.body()?).await?;
        info!("Retrieved {} games from IGDB.", games.len());
        Ok(games)
    }
}

/// Reads IgdbGames from a JSON array previously saved from the games endpoint.
#[instrument(level = "trace")]
pub fn load_games(path: &Path) -> Result<Vec<IgdbGame>, Status> {
    let text = fs::read_to_string(path)?;
    let games = serde_json::from_str::<Vec<IgdbGame>>(&text)?;
    info!("Loaded {} games from '{}'.", games.len(), path.display());
    Ok(games)
}

const GAMES_ENDPOINT: &str = "games";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_games_from_file() {
        let path = std::env::temp_dir().join("igdb_inserts_load_games.json");
        fs::write(&path, r#"[{"id": 1, "name": "Alpha"}, {"id": 2}]"#).unwrap();

        let games = load_games(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].display_name(), "Alpha");
        assert_eq!(games[1].name, None);
    }

    #[test]
    fn load_games_missing_file() {
        let path = std::env::temp_dir().join("igdb_inserts_no_such_file.json");
        assert!(matches!(load_games(&path), Err(Status::NotFound(_))));
    }

    #[test]
    fn load_games_rejects_non_array() {
        let path = std::env::temp_dir().join("igdb_inserts_not_array.json");
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        let result = load_games(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Status::Internal(_))));
    }
}
