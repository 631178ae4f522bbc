mod service_description;
mod service_images;

pub use service_description::{ServiceDescription, TechnicalSpecifications};
pub use service_images::{FileLink, ImageBackground, ImageLinks, PlatformLink, ServiceImages};
