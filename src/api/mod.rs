pub mod igdb;
mod translate;

pub use translate::{GoogleTranslate, PassThrough, Translator};
