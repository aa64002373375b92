// Business rules - Text overlay filter construction
//
// FFmpeg's drawtext filter takes its options as a single `key=value:key=value`
// string. `:` separates options, `'` delimits the text value and `\` escapes
// either of them, so all three must be escaped in anything we splice in.

use std::fmt;
use std::path::Path;

use crate::domain::model::DrawtextStyle;


/// Name of the text overlay filter
pub const DRAWTEXT_FILTER: &str = "drawtext";

/// Escape text for use as a drawtext option value.
///
/// Backslashes are doubled first, then colons and single quotes are prefixed
/// with a backslash. Reordering these steps would escape the backslashes
/// introduced by the later ones.
pub fn escape_drawtext(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(':', "\\:")
        .replace('\'', "\\'")
}

/// One `key=value` option of a filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub key: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered option list for a single filter. Values must already be escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptionList {
    options: Vec<FilterOption>,
}

impl FilterOptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.push(FilterOption::new(key, value));
    }

    /// Insert an option ahead of all others
    pub fn prepend(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(0, FilterOption::new(key, value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.key == key)
            .map(|option| option.value.as_str())
    }

    pub fn first(&self) -> Option<&FilterOption> {
        self.options.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Join as `name=k1=v1:k2=v2:...`
    pub fn to_filter_expression(&self, filter_name: &str) -> String {
        let joined = self
            .options
            .iter()
            .map(FilterOption::to_string)
            .collect::<Vec<_>>()
            .join(":");
        format!("{}={}", filter_name, joined)
    }
}

/// Build the drawtext option list for a watermark.
///
/// The font file, when given, always comes first; the remaining options keep
/// the same order whether or not a font is set.
pub fn drawtext_options(text: &str, font: Option<&Path>, style: &DrawtextStyle) -> FilterOptionList {
    let mut options = FilterOptionList::new();

    options.push("text", format!("'{}'", escape_drawtext(text)));
    options.push("fontcolor", style.font_color.as_str());
    options.push("fontsize", style.font_size.to_string());

    if style.box_enabled {
        options.push("box", "1");
        options.push("boxcolor", style.box_color.as_str());
        options.push("boxborderw", style.box_border_width.to_string());
    }

    // Bottom-right anchor
    options.push("x", format!("w-tw-{}", style.margin));
    options.push("y", format!("h-th-{}", style.margin));

    if let Some(font) = font {
        options.prepend("fontfile", escape_drawtext(&font.to_string_lossy()));
    }

    options
}

/// Build the complete `drawtext=...` filter expression
pub fn build_drawtext_filter(text: &str, font: Option<&Path>, style: &DrawtextStyle) -> String {
    drawtext_options(text, font, style).to_filter_expression(DRAWTEXT_FILTER)
}
