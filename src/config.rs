//! Reader and writer configuration

/// Options for reading feed documents
///
/// # Example
///
/// ```
/// use synd_rs::InputConfig;
///
/// // Recommended: start from a preset
/// let config = InputConfig::lenient();
///
/// // Or construct manually
/// let config = InputConfig {
///     preserve_wire_feed: true,
///     allow_doctypes: false,
///     xml_healer: true,
/// };
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputConfig {
    /// Keep the parsed wire feed and wire entries on the synd feed
    ///
    /// Default: `false`
    #[cfg_attr(feature = "serde", serde(default))]
    pub preserve_wire_feed: bool,

    /// Accept documents that carry a DOCTYPE declaration
    ///
    /// Netscape RSS 0.91 documents are only recognized with this enabled.
    ///
    /// Default: `false`
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_doctypes: bool,

    /// Repair common well-formedness errors before parsing
    ///
    /// HTML entities unknown to XML (such as `&nbsp;`) are replaced by
    /// numeric references and stray `&` characters are escaped.
    ///
    /// Default: `true`
    #[cfg_attr(feature = "serde", serde(default = "default_xml_healer"))]
    pub xml_healer: bool,
}

#[cfg(feature = "serde")]
fn default_xml_healer() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            preserve_wire_feed: false,
            allow_doctypes: false,
            xml_healer: true,
        }
    }
}

impl InputConfig {
    /// Reject anything that is not well-formed as given
    pub fn strict() -> Self {
        Self {
            xml_healer: false,
            ..Self::default()
        }
    }

    /// Heal markup and accept DOCTYPE declarations
    pub fn lenient() -> Self {
        Self {
            allow_doctypes: true,
            ..Self::default()
        }
    }

    /// Default reading, keeping the wire feed for inspection
    pub fn preserving() -> Self {
        Self {
            preserve_wire_feed: true,
            ..Self::default()
        }
    }
}

/// Options for writing feed documents
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputConfig {
    /// Indent nested elements
    ///
    /// Default: `true`
    #[cfg_attr(feature = "serde", serde(default = "default_pretty_print"))]
    pub pretty_print: bool,

    /// Spaces per nesting level when pretty printing
    ///
    /// Default: `2`
    #[cfg_attr(feature = "serde", serde(default = "default_indent"))]
    pub indent: usize,
}

#[cfg(feature = "serde")]
fn default_pretty_print() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_indent() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            indent: 2,
        }
    }
}

impl OutputConfig {
    /// Everything on one line
    pub fn compact() -> Self {
        Self {
            pretty_print: false,
            ..Self::default()
        }
    }

    /// Pretty printing with the given indent width
    pub fn pretty(indent: usize) -> Self {
        Self {
            pretty_print: true,
            indent,
        }
    }

    /// Indent width to pass to the XML writer, if any
    pub(crate) fn indent(&self) -> Option<usize> {
        self.pretty_print.then_some(self.indent)
    }
}
