use std::sync::Arc;

use itertools::Itertools;
use tracing::instrument;

use crate::{
    api::{igdb::IgdbGame, Translator},
    documents::{ServiceDescription, ServiceImages, TechnicalSpecifications},
    Status,
};

use super::{fields, images};

/// The derived documents for a single IGDB game.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGame {
    pub description: ServiceDescription,
    pub images: ServiceImages,
}

/// Turns IGDB games into service rows, translating free text through the
/// injected `Translator`.
pub struct GameNormalizer {
    translator: Arc<dyn Translator>,
    source_lang: String,
    target_lang: String,
}

impl GameNormalizer {
    pub fn new(translator: Arc<dyn Translator>, source_lang: &str, target_lang: &str) -> Self {
        GameNormalizer {
            translator,
            source_lang: source_lang.to_owned(),
            target_lang: target_lang.to_owned(),
        }
    }

    #[instrument(
        level = "trace",
        skip(self, game),
        fields(title = %game.display_name())
    )]
    pub async fn normalize(&self, game: &IgdbGame) -> Result<NormalizedGame, Status> {
        Ok(NormalizedGame {
            description: self.description(game).await?,
            images: ServiceImages {
                links: images::image_links(game),
                files: images::screenshot_links(game),
                platforms: images::platform_links(game),
            },
        })
    }

    pub async fn description(&self, game: &IgdbGame) -> Result<ServiceDescription, Status> {
        Ok(ServiceDescription {
            release_date: fields::release_date(game),
            technical_specifications: self.technical_specifications(game).await?,
            pre_sale: fields::pre_sale(game),
            languages: fields::languages(game),
            description: self.translate(&game.summary).await?,
            ..Default::default()
        })
    }

    pub async fn technical_specifications(
        &self,
        game: &IgdbGame,
    ) -> Result<TechnicalSpecifications, Status> {
        let mut age_ratings = vec![];
        for description in fields::content_descriptions(game) {
            age_ratings.push(self.translate(description).await?);
        }

        Ok(TechnicalSpecifications {
            age_ratings: age_ratings.into_iter().join(", "),
            company: fields::company(game),
            developed: fields::developer(game),
            game_modes: fields::game_modes(game),
        })
    }

    async fn translate(&self, text: &str) -> Result<String, Status> {
        if text.is_empty() {
            return Ok(String::new());
        }
        self.translator
            .translate(text, &self.source_lang, &self.target_lang)
            .await
    }
}
