//! YAML decoder with tag flattening

use crate::errors::{
    document_malformed, document_unreadable, invalid_input, unsupported_tag, Result,
};
use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// How custom YAML tags (e.g. `!tags`) are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Every tag decodes to the node underneath it
    #[default]
    FlattenAll,
    /// Only the listed tags are flattened; any other tag fails decoding
    FlattenOnly(Vec<String>),
}

impl TagPolicy {
    /// Restrict flattening to `tags`. Names may be given with or without `!`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: a tag name is empty
    pub fn flatten_only<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        for tag in tags {
            let tag = tag.into();
            let name = normalize(&tag);
            if name.is_empty() {
                return Err(invalid_input(&format!("tag name {:?} is empty", tag)));
            }
            names.push(name.to_string());
        }
        Ok(TagPolicy::FlattenOnly(names))
    }

    /// Whether `tag` may be flattened under this policy
    pub fn admits(&self, tag: &str) -> bool {
        match self {
            TagPolicy::FlattenAll => true,
            TagPolicy::FlattenOnly(names) => {
                names.iter().any(|name| normalize(name) == normalize(tag))
            }
        }
    }
}

fn normalize(tag: &str) -> &str {
    tag.trim_start_matches('!')
}

/// Decoder configuration, passed explicitly to every decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub tag_policy: TagPolicy,
}

/// Read and decode a save document from disk.
///
/// # Errors
///
/// - `DocumentUnreadable`: the file cannot be read as UTF-8 text
/// - `InvalidDocument`: the text is not valid YAML
/// - `UnsupportedTag`: a tag is outside [`TagPolicy::FlattenOnly`]
pub fn load_document(path: &Path, options: &DecodeOptions) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| document_unreadable(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read document");

    decode_document_str(&content, options).map_err(|e| e.with_path(path.display().to_string()))
}

/// Decode save-document text into a tag-free value tree.
///
/// Empty or whitespace-only input decodes to `Value::Null`. Merge keys
/// (`<<`) are applied.
///
/// # Errors
///
/// - `InvalidDocument`: the text is not valid YAML
/// - `UnsupportedTag`: a tag is outside [`TagPolicy::FlattenOnly`]
pub fn decode_document_str(content: &str, options: &DecodeOptions) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    let raw: Value = serde_yaml::from_str(content).map_err(document_malformed)?;
    let mut document = flatten_tags(raw, &options.tag_policy)?;
    document.apply_merge().map_err(document_malformed)?;
    Ok(document)
}

fn flatten_tags(value: Value, policy: &TagPolicy) -> Result<Value> {
    match value {
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            let tag = tag.to_string();
            if !policy.admits(&tag) {
                return Err(unsupported_tag(&tag));
            }
            flatten_tags(value, policy)
        }
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|v| flatten_tags(v, policy))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Value::Mapping(map) => {
            let mut flat = Mapping::with_capacity(map.len());
            for (k, v) in map {
                flat.insert(flatten_tags(k, policy)?, flatten_tags(v, policy)?);
            }
            Ok(Value::Mapping(flat))
        }
        other => Ok(other),
    }
}
