#![deny(missing_docs)]
#![doc = "Core data types, error surface and canonical serialization for the Fermat near-solution search."]

pub mod errors;
/// Stable hashing of serializable payloads.
pub mod hash;
pub mod provenance;
/// Canonical JSON and YAML helpers.
pub mod serde;
mod types;

pub use errors::{ErrorInfo, FermatError};
pub use hash::stable_hash_string;
pub use provenance::{RunProvenance, SchemaVersion};
pub use crate::serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_canonical_json_pretty};
pub use types::{Excess, Residual, Triple, PRECISION_CUTOFF};
