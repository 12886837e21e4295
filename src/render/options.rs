//! Rendering options.

/// Options for rendering pages to markdown.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include the YAML front matter header
    pub include_frontmatter: bool,

    /// Character to use for unordered list markers
    pub list_marker: char,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable front matter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: true,
            list_marker: '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.include_frontmatter);
        assert_eq!(options.list_marker, '-');
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_frontmatter(false)
            .with_list_marker('*');
        assert!(!options.include_frontmatter);
        assert_eq!(options.list_marker, '*');
    }
}
