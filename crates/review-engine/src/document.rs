//! Raw drawing text as an ordered sequence of lines

/// One revision of a drawing, already decoded to text.
///
/// Lines are split on `'\n'` only; a trailing `'\r'` stays part of the line
/// and is removed by the trimming every rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    text: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.text.split('\n')
    }

    /// Lines paired with their 1-based line number
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        self.lines().enumerate().map(|(idx, line)| (idx + 1, line))
    }

    /// Lines that are not whitespace-only
    pub fn content_lines(&self) -> impl Iterator<Item = &'a str> {
        self.lines().filter(|line| !line.trim().is_empty())
    }
}

impl<'a> From<&'a str> for Document<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}
