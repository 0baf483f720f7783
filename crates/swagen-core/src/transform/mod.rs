pub mod dto_names;
pub mod ingest;
pub mod naming;
pub mod schema_index;

pub use ingest::ingest;
pub use schema_index::SchemaIndex;
