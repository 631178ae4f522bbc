use async_trait::async_trait;
use itertools::Itertools;
use serde_json::Value;
use tracing::instrument;

use crate::{logging::TranslateCounter, Status};

use super::Translator;

/// Client for the public Google Translate web endpoint.
pub struct GoogleTranslate {
    client: reqwest::Client,
}

impl GoogleTranslate {
    pub fn new() -> Self {
        GoogleTranslate {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    #[instrument(level = "trace", skip(self, text), fields(len = text.len()))]
    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String, Status> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let counter = TranslateCounter::new(src, dest);
        let resp = self
            .client
            .get(GOOGLE_TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", src),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .and_then(|resp| resp.error_for_status());

        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                let status = Status::new("Translation request failed", e);
                counter.log_error(&status);
                return Err(status);
            }
        };

        let body = resp.text().await?;
        match parse_translation(&body) {
            Ok(translated) => {
                counter.log();
                Ok(translated)
            }
            Err(status) => {
                counter.log_error(&status);
                Err(status)
            }
        }
    }
}

/// Extracts the translated text from a `translate_a/single` response. The
/// payload is a nested array whose first element lists translated segments
/// as `[translated, original, ...]`.
fn parse_translation(body: &str) -> Result<String, Status> {
    let value = serde_json::from_str::<Value>(body)?;
    let segments = value
        .get(0)
        .and_then(|segments| segments.as_array())
        .ok_or_else(|| Status::internal(format!("Unexpected translation response: {body}")))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|text| text.as_str()))
        .join(""))
}

const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_segment() {
        let body = r#"[[["Violência","Violence",null,null,10]],null,"en",null,null,null,null,[]]"#;
        assert_eq!(parse_translation(body).unwrap(), "Violência");
    }

    #[test]
    fn parse_multiple_segments() {
        let body = r#"[[["Um jogo. ","A game. ",null,null,10],["Com espadas.","With swords.",null,null,10]],null,"en"]"#;
        assert_eq!(parse_translation(body).unwrap(), "Um jogo. Com espadas.");
    }

    #[test]
    fn parse_unexpected_shape() {
        assert!(matches!(
            parse_translation(r#"{"error": "quota"}"#),
            Err(Status::Internal(_))
        ));
    }

    #[tokio::test]
    async fn empty_text_skips_request() {
        let translator = GoogleTranslate::new();
        assert_eq!(translator.translate("", "en", "pt").await.unwrap(), "");
    }
}
