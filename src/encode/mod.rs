//! Frame consumers.

/// JSON-lines frame sink.
pub mod jsonl;
/// Sink contract and the in-memory sink.
pub mod sink;
