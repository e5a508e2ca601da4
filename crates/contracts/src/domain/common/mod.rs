//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod entity_metadata;
pub mod lenient;

// Re-exports
pub use aggregate_id::AggregateId;
pub use entity_metadata::EntityMetadata;
