// src/config.rs
//
// Classification constants and wrapper shape. Everything the restructuring pass
// needs to know about the passage provider's markup lives here so the core stays
// a function of its input string plus this value.

/// Class token on `<a>` elements that start a verse.
pub const DEFAULT_ANCHOR_CLASS: &str = "va";
/// Class token on `<b>` elements that render a verse numeral.
pub const DEFAULT_NUMBER_CLASS: &str = "verse-num";
/// Prefix a `rel` value must carry to count as a verse identifier.
pub const DEFAULT_ID_PREFIX: &str = "v";
pub const DEFAULT_WRAPPER_TAG: &str = "span";
pub const DEFAULT_WRAPPER_CLASS: &str = "verse";
pub const DEFAULT_ID_ATTRIBUTE: &str = "data-verse";

/// Class token marking a paragraph as an indented (poetic) block.
pub const INDENT_BLOCK_CLASS: &str = "block-indent";
/// Class token marking a line span inside an indented block.
pub const LINE_CLASS: &str = "line";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseConfig {
    pub anchor_class: String,
    pub number_class: String,
    pub id_prefix: String,
    pub wrapper_tag: String,
    pub wrapper_class: String,
    pub id_attribute: String,
}

impl Default for VerseConfig {
    fn default() -> Self {
        Self {
            anchor_class: DEFAULT_ANCHOR_CLASS.to_string(),
            number_class: DEFAULT_NUMBER_CLASS.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            wrapper_tag: DEFAULT_WRAPPER_TAG.to_string(),
            wrapper_class: DEFAULT_WRAPPER_CLASS.to_string(),
            id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
        }
    }
}

impl VerseConfig {
    pub fn with_anchor_class(mut self, token: impl Into<String>) -> Self {
        self.anchor_class = token.into();
        self
    }

    pub fn with_number_class(mut self, token: impl Into<String>) -> Self {
        self.number_class = token.into();
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Shape of the synthesized container: `<tag class="class" attribute="id">`.
    pub fn with_wrapper(
        mut self,
        tag: impl Into<String>,
        class: impl Into<String>,
        id_attribute: impl Into<String>,
    ) -> Self {
        self.wrapper_tag = tag.into();
        self.wrapper_class = class.into();
        self.id_attribute = id_attribute.into();
        self
    }
}
