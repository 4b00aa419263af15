//! Benchmark snapshot model, its JSON document and the subset read back by
//! the summary aggregator.
mod model;
mod reader;
mod serializer;


pub use model::{Environment, ServerInfo, Snapshot, StageSamples};
pub use reader::SummaryFields;
pub use serializer::{to_json, to_value};
