pub mod api;
pub mod documents;
pub mod export;
pub mod logging;
pub mod normalize;
pub mod render;
pub mod util;

mod status;
pub use status::Status;

mod tracing;
pub use crate::tracing::Tracing;
