//! Document layout used by the extractor.

/// Key names locating serials inside a save document.
///
/// Defaults match the save layout:
///
/// ```yaml
/// state:
///   inventory:
///     items:
///       backpack:
///         slot_0:
///           serial: "@Ugr..."
///           state_flags: 3
///   unknown_items:
///     - "@Ugr..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Top-level key holding the save state
    pub root_key: String,
    /// Keys below `root_key` leading to the item container
    pub backpack_path: Vec<String>,
    /// Identity field of an item entry
    pub serial_field: String,
    /// Status field of an item entry
    pub state_field: String,
    /// Key below `root_key` listing unknown serials
    pub unknown_key: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            root_key: "state".to_string(),
            backpack_path: vec![
                "inventory".to_string(),
                "items".to_string(),
                "backpack".to_string(),
            ],
            serial_field: "serial".to_string(),
            state_field: "state_flags".to_string(),
            unknown_key: "unknown_items".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Full key path from the document root to the item container
    pub fn backpack_keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.root_key.as_str())
            .chain(self.backpack_path.iter().map(String::as_str))
    }

    /// Full key path from the document root to the unknown-serial listing
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        [self.root_key.as_str(), self.unknown_key.as_str()].into_iter()
    }
}
