//! RbxBin — a pure-Rust codec for the Roblox binary place format.
//!
//! This crate implements the typed property-value layer of the `rbxl`/`rbxm`
//! container: the bidirectional mapping between structured property values
//! and the packed byte blobs stored per property column inside the chunked
//! file.
//!
//! # Architecture
//!
//! - **`types`** — the closed set of wire value kinds (`RbxType`, `RbxValue`)
//! - **`codec`** — per-kind single-value codecs and the homogeneous array
//!   packer with its pre-compression transforms (zigzag integers,
//!   sign-rotated floats, byte-column interleaving, reference deltas)
//! - **`error`** — the codec error taxonomy
//!
//! The chunked outer container, the XML codec, and the reflection metadata
//! that disambiguates property types are separate collaborators; this crate
//! only packs and unpacks value arrays for a declared type tag.

pub mod codec;
pub mod error;
pub mod types;

pub use codec::{decode_value, encode_value, values_from_bytes, values_to_bytes};
pub use error::RbxError;
pub use types::{RbxType, RbxValue};
