mod google;
mod translator;

pub use google::GoogleTranslate;
pub use translator::{PassThrough, Translator};
