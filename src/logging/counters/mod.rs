mod counters;
mod export_counters;
mod igdb_counters;
mod translate_counters;

pub use export_counters::ExportCounters;
pub use igdb_counters::IgdbRequestCounter;
pub use translate_counters::TranslateCounter;
