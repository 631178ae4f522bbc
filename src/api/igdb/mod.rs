mod backend;
mod connection;
mod docs;
mod query;
mod service;

pub use connection::IgdbConnection;
pub use docs::*;
pub use query::GameQuery;
pub use service::{load_games, IgdbApi};
