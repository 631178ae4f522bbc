use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use igdb_inserts::{
    api::{
        igdb::{load_games, GameQuery, IgdbApi, IgdbConnection},
        GoogleTranslate, PassThrough, Translator,
    },
    export::SqlExporter,
    normalize::GameNormalizer,
    util, Tracing,
};
use tracing::info;

/// Retrieves games from IGDB and generates SQL insert statements for the
/// service table.
#[derive(Parser)]
struct Opts {
    /// IGDB platform id (or a list such as `(6,13)`) to filter games by.
    #[clap(long)]
    platform: Option<String>,

    /// Game title to search for in IGDB.
    #[clap(long, alias = "game_name")]
    game_name: Option<String>,

    /// Only games created in IGDB before this unix timestamp.
    #[clap(long)]
    timestamp: Option<u64>,

    /// Maximum number of games returned by IGDB.
    #[clap(long)]
    limit: Option<u32>,

    /// Service id inserted in every generated statement.
    #[clap(long, alias = "service_id")]
    service_id: String,

    /// File that receives the generated statements.
    #[clap(long, default_value = "insert_commands.sql")]
    output: PathBuf,

    /// JSON file that contains application keys for IGDB.
    #[clap(long, default_value = "keys.json")]
    key_store: String,

    /// JSON file with an array of IGDB games to convert instead of querying
    /// IGDB.
    #[clap(long)]
    input: Option<PathBuf>,

    #[clap(long, default_value = "en")]
    source_lang: String,

    #[clap(long, default_value = "pt")]
    target_lang: String,

    /// Keep summaries and age ratings untranslated.
    #[clap(long)]
    no_translate: bool,

    /// Hide the progress bar.
    #[clap(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("generate_inserts")?;

    let opts: Opts = Opts::parse();

    let games = match &opts.input {
        Some(input) => load_games(input)?,
        None => {
            let keys = util::keys::Keys::from_file(&opts.key_store)?;
            let connection = IgdbConnection::new(&keys.igdb.client_id, &keys.igdb.secret).await?;
            let igdb = IgdbApi::new(connection);

            let query = GameQuery {
                platform: opts.platform.clone(),
                game_name: opts.game_name.clone(),
                created_before: opts.timestamp,
                limit: opts.limit,
            };
            igdb.fetch_games(&query).await?
        }
    };
    info!("Generating insert statements for {} games.", games.len());

    let translator: Arc<dyn Translator> = match opts.no_translate {
        true => Arc::new(PassThrough),
        false => Arc::new(GoogleTranslate::new()),
    };
    let normalizer = GameNormalizer::new(translator, &opts.source_lang, &opts.target_lang);
    let exporter = SqlExporter::new(normalizer, &opts.service_id).with_progress(!opts.quiet);

    let count = exporter.export_to_file(&games, &opts.output).await?;

    println!(
        "Saved {count} insert statements in '{}'.",
        opts.output.display()
    );

    Ok(())
}
