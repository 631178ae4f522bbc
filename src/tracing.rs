use crate::Status;
use tracing::Level;
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

pub struct Tracing;

impl Tracing {
    /// Installs a stdout subscriber at INFO level. `RUST_LOG` overrides the
    /// default filter.
    pub fn setup(name: &str) -> Result<(), Status> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        match tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_target(false)
                    .with_writer(std::io::stdout.with_max_level(Level::INFO)),
            )
            .try_init()
        {
            Ok(()) => {
                tracing::debug!("tracing ready for '{name}'");
                Ok(())
            }
            Err(e) => {
                eprintln!("{e}");
                Err(Status::new("Failed to setup tracing", e))
            }
        }
    }
}
