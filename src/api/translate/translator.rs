use async_trait::async_trait;

use crate::Status;

/// Text translation between two languages given as ISO-639-1 codes.
///
/// Implementations must return an empty string for empty input without
/// reaching out to a remote service.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String, Status>;
}

/// Translator that returns its input unchanged.
#[derive(Default, Debug, Clone, Copy)]
pub struct PassThrough;

#[async_trait]
impl Translator for PassThrough {
    async fn translate(&self, text: &str, _src: &str, _dest: &str) -> Result<String, Status> {
        Ok(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pass_through_returns_input() {
        let text = PassThrough.translate("Violence", "en", "pt").await.unwrap();
        assert_eq!(text, "Violence");
    }
}
