//! Output collaborators: sinks that persist fault counts and writers that
//! render results. Nothing here feeds back into the simulation.

mod format;
mod sink;

pub use format::{write_events, write_json, write_metrics_csv, write_summary};
pub use sink::{record_all, FileSink, MemorySink, ResultSink};
