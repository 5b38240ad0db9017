//! Whitespace and comment trivia.
//!
//! A [`Space`] is the leading trivia of a tree element. The `whitespace`
//! field holds everything before the first comment; each [`Comment`] then
//! carries the trivia that follows it as its `suffix`, so the full trivia run
//! is `whitespace + comments[0] + comments[0].suffix + ...`.

use std::fmt;

/// Leading trivia of a tree element.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space {
    /// Whitespace before the first comment (or before the element when there
    /// are no comments).
    pub whitespace: String,

    /// Comments in source order, each with its trailing trivia.
    pub comments: Vec<Comment>,
}

impl Space {
    /// A space with the given whitespace and no comments.
    pub fn new(whitespace: impl Into<String>) -> Self {
        Space {
            whitespace: whitespace.into(),
            comments: Vec::new(),
        }
    }

    /// The empty space: the element follows the previous token directly.
    pub fn none() -> Self {
        Space::default()
    }

    /// A single horizontal space, as between a signature and its `{`.
    pub fn inline() -> Self {
        Space::new(" ")
    }

    /// A newline followed by `indent`: the element starts a fresh line with
    /// no blank lines above it.
    pub fn newline(indent: &str) -> Self {
        Space::new(format!("\n{indent}"))
    }

    /// `blanks` blank lines, then the element indented by `indent`.
    pub fn blank_lines(blanks: usize, indent: &str) -> Self {
        Space::new(format!("{}{indent}", "\n".repeat(blanks + 1)))
    }

    /// Attach comments to this space.
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// The policy-governed gap immediately before the element: the last
    /// comment's suffix when comments are present, the whitespace otherwise.
    pub fn gap(&self) -> &str {
        match self.comments.last() {
            Some(comment) => &comment.suffix,
            None => &self.whitespace,
        }
    }

    /// Mutable access to the policy-governed gap. See [`Space::gap`].
    pub fn gap_mut(&mut self) -> &mut String {
        match self.comments.last_mut() {
            Some(comment) => &mut comment.suffix,
            None => &mut self.whitespace,
        }
    }

    /// The indentation of the element: the text after the last newline in the
    /// gap, or the whole gap when it contains no newline.
    pub fn indent(&self) -> &str {
        let gap = self.gap();
        match gap.rfind('\n') {
            Some(pos) => &gap[pos + 1..],
            None => gap,
        }
    }
}

impl fmt::Debug for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Space({:?}", self.whitespace)?;
        for comment in &self.comments {
            write!(f, ", {:?} {:?}", comment.text, comment.suffix)?;
        }
        write!(f, ")")
    }
}

/// A comment with the trivia that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    /// Verbatim comment text, delimiters included.
    pub text: String,

    /// Trivia between this comment and the next comment or the element.
    pub suffix: String,
}

impl Comment {
    /// A comment followed by the given trivia.
    pub fn new(text: impl Into<String>, suffix: impl Into<String>) -> Self {
        Comment {
            text: text.into(),
            suffix: suffix.into(),
        }
    }
}
