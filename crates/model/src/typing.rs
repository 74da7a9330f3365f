//! Character-by-character reveal for the hero title

/// Yields successive prefixes of a text, one character longer each step.
/// Characters are Unicode scalar values, so multi-byte text never splits.
#[derive(Clone, Debug)]
pub struct TypingSequence {
    text: String,
    // byte offset of the end of the current prefix
    end: usize,
}

impl TypingSequence {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.end >= self.text.len()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Iterator for TypingSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let ch = self.text[self.end..].chars().next()?;
        self.end += ch.len_utf8();
        Some(self.text[..self.end].to_string())
    }
}
