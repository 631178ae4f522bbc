use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, instrument};

use crate::{
    api::igdb::IgdbGame, logging::ExportCounters, normalize::GameNormalizer,
    render::render_insert, Status,
};

/// Writes one `INSERT` statement per game, in input order.
pub struct SqlExporter {
    normalizer: GameNormalizer,
    service_id: String,
    show_progress: bool,
}

impl SqlExporter {
    pub fn new(normalizer: GameNormalizer, service_id: &str) -> Self {
        SqlExporter {
            normalizer,
            service_id: service_id.to_owned(),
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Creates `output` and writes the statements of `games` into it.
    /// Returns the number of statements written.
    #[instrument(level = "trace", skip(self, games), fields(games = games.len()))]
    pub async fn export_to_file(&self, games: &[IgdbGame], output: &Path) -> Result<usize, Status> {
        let file = File::create(output).map_err(|e| {
            Status::invalid_argument(format!(
                "failed to create '{}': {e}",
                output.display()
            ))
        })?;

        let mut writer = BufWriter::new(file);
        let count = self.export(games, &mut writer).await?;
        writer.flush()?;

        info!("Wrote {count} insert statements in '{}'.", output.display());
        Ok(count)
    }

    /// Writes the statements of `games` into `writer` as each one is
    /// rendered. The first failure aborts the export.
    pub async fn export<W: Write>(&self, games: &[IgdbGame], writer: &mut W) -> Result<usize, Status> {
        let progress = self.progress_bar(games.len() as u64)?;

        let mut count = 0;
        for game in games {
            progress.set_message(game.display_name().to_owned());

            let statement = match self.statement(game).await {
                Ok(statement) => statement,
                Err(status) => {
                    ExportCounters::statement_fail(game, &status);
                    progress.abandon();
                    return Err(status);
                }
            };
            writer.write_all(statement.as_bytes())?;
            ExportCounters::statement(game);

            count += 1;
            progress.inc(1);
        }

        progress.finish_and_clear();
        Ok(count)
    }

    async fn statement(&self, game: &IgdbGame) -> Result<String, Status> {
        let normalized = self.normalizer.normalize(game).await?;
        render_insert(game, &normalized, &self.service_id)
    }

    fn progress_bar(&self, len: u64) -> Result<ProgressBar, Status> {
        if !self.show_progress {
            return Ok(ProgressBar::hidden());
        }

        let style = ProgressStyle::with_template(
            "Generating statements {percent:>3}%|{bar:10}| {pos}/{len} [{elapsed_precise}] {msg}",
        )
        .map_err(|e| Status::new("invalid progress template", e))?;

        let progress = ProgressBar::new(len);
        progress.set_style(style);
        Ok(progress)
    }
}
