use std::sync::Mutex;

use async_trait::async_trait;

use crate::{api::Translator, Status};

/// Translator double that prefixes the destination language and records
/// every text it was asked to translate.
#[derive(Default)]
pub struct FakeTranslator {
    calls: Mutex<Vec<String>>,
}

impl FakeTranslator {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, _src: &str, dest: &str) -> Result<String, Status> {
        self.calls.lock().unwrap().push(text.to_owned());
        Ok(format!("[{dest}] {text}"))
    }
}

pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str, _src: &str, _dest: &str) -> Result<String, Status> {
        Err(Status::internal("translation service unavailable"))
    }
}
