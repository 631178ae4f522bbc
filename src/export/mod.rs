mod exporter;

pub use exporter::SqlExporter;
