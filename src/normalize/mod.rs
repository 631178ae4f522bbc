mod dates;
mod fields;
mod images;
mod normalizer;

#[cfg(test)]
pub(crate) mod fake;

pub use dates::format_date;
pub use fields::*;
pub use images::{image_links, platform_links, screenshot_links};
pub use normalizer::{GameNormalizer, NormalizedGame};
