use std::{fs, path::Path};

use serde::Deserialize;

use crate::Status;

/// Application keys loaded from a JSON key store.
#[derive(Deserialize, Default, Debug)]
pub struct Keys {
    pub igdb: IgdbKeys,
}

#[derive(Deserialize, Default, Debug)]
pub struct IgdbKeys {
    pub client_id: String,
    pub secret: String,
}

impl Keys {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Status> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Status::invalid_argument(format!(
                "failed to read key store '{}': {e}",
                path.display()
            ))
        })?;
        Keys::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, Status> {
        let keys = serde_json::from_str::<Keys>(text)?;
        if keys.igdb.client_id.is_empty() || keys.igdb.secret.is_empty() {
            return Err(Status::invalid_argument(
                "key store is missing igdb.client_id or igdb.secret",
            ));
        }
        Ok(keys)
    }
}
