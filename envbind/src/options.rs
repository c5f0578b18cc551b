/// Separator used to join the segments of a key, matching viper's env key
/// replacer convention.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Tag name looked up on each field, the same one `mapstructure` decoding uses.
pub const DEFAULT_TAG_NAME: &str = "mapstructure";

/// Resolved settings for a walk.
///
/// Built by folding [`BindOption`]s left to right over [`Options::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub separator: String,
    pub tag_name: String,
    /// Deepest record nesting the walk will enter. `None` leaves the depth
    /// bounded only by the schema itself.
    pub max_depth: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            tag_name: DEFAULT_TAG_NAME.to_owned(),
            max_depth: None,
        }
    }
}

impl Options {
    pub fn apply(&mut self, option: BindOption) {
        match option {
            BindOption::Separator(separator) => self.separator = separator,
            BindOption::TagName(tag_name) => self.tag_name = tag_name,
            BindOption::MaxDepth(max_depth) => self.max_depth = Some(max_depth),
        }
    }
}

impl FromIterator<BindOption> for Options {
    fn from_iter<I: IntoIterator<Item = BindOption>>(iter: I) -> Self {
        let mut options = Self::default();
        for option in iter {
            options.apply(option);
        }
        options
    }
}

/// A single modification of [`Options`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindOption {
    Separator(String),
    TagName(String),
    MaxDepth(usize),
}

/// Sets the separator used to join key segments, use this if the binder was
/// configured with something other than `_`.
pub fn with_separator(separator: impl Into<String>) -> BindOption {
    BindOption::Separator(separator.into())
}

/// Sets the tag name looked up on each field.
pub fn with_tag_name(tag_name: impl Into<String>) -> BindOption {
    BindOption::TagName(tag_name.into())
}

pub fn with_max_depth(max_depth: usize) -> BindOption {
    BindOption::MaxDepth(max_depth)
}
