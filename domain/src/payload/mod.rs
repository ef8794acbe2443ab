//! Aggregated payloads
//!
//! Each workflow assembles one fixed-shape payload. Capabilities that were
//! unavailable or failed are `None` and serialize as `null`, so consumers can
//! always read every key.

pub mod impact;
pub mod object;
pub mod summary;

pub use impact::ImpactPayload;
pub use object::{OBJECT_ID_KEYS, OBJECT_PROBE_KEYS, object_identifier};
pub use summary::SummaryPayload;
