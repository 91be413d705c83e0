//! Save-document decoding
//!
//! Turns YAML text into a generic [`serde_yaml::Value`] tree. Custom tags are
//! resolved to their underlying scalar, sequence or mapping according to an
//! explicit [`TagPolicy`]; nothing is registered globally.

pub mod decoder;

pub use decoder::{decode_document_str, load_document, DecodeOptions, TagPolicy};
