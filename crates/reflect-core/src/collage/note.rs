/// Free-text note attached to a collage.
///
/// Stored verbatim: no trimming and no length limit. An empty note is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftNote {
    text: String,
}

impl DraftNote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_is_verbatim() {
        let mut note = DraftNote::new();
        note.set_text("  first line\n\tsecond line  ");
        assert_eq!(note.as_str(), "  first line\n\tsecond line  ");
    }

    #[test]
    fn test_set_text_replaces() {
        let mut note = DraftNote::new();
        note.set_text("old");
        note.set_text("new");
        assert_eq!(note.as_str(), "new");
    }

    #[test]
    fn test_long_note_is_kept() {
        let mut note = DraftNote::new();
        let long = "feeling ".repeat(10_000);
        note.set_text(long.clone());
        assert_eq!(note.as_str().len(), long.len());
    }

    #[test]
    fn test_clear() {
        let mut note = DraftNote::new();
        note.set_text("ok");
        note.clear();
        assert!(note.is_empty());
    }
}
