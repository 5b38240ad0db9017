//! Blocks, statements, and anonymous class expressions.

use crate::space::Space;

use super::TypeBody;

/// A braced statement block: a method body, initializer body, or a
/// free-standing block nested inside code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Gap before the opening brace.
    pub prefix: Space,

    pub statements: Vec<Statement>,

    /// Gap before the closing brace.
    pub end: Space,
}

impl Block {
    pub fn new(prefix: Space, statements: Vec<Statement>, end: Space) -> Self {
        Block {
            prefix,
            statements,
            end,
        }
    }

    /// An empty block, `{` and `}` separated by `end`.
    pub fn empty(prefix: Space, end: Space) -> Self {
        Block::new(prefix, Vec::new(), end)
    }
}

/// A statement inside a block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// Any statement with no structure this crate models, stored verbatim.
    Source { prefix: Space, source: String },

    /// An anonymous class expression statement.
    New(NewClass),

    /// A free-standing nested block.
    Block(Block),
}

impl Statement {
    pub fn source(prefix: Space, source: impl Into<String>) -> Self {
        Statement::Source {
            prefix,
            source: source.into(),
        }
    }

    /// Leading trivia of this statement.
    pub fn prefix(&self) -> &Space {
        match self {
            Statement::Source { prefix, .. } => prefix,
            Statement::New(new_class) => &new_class.prefix,
            Statement::Block(block) => &block.prefix,
        }
    }

    /// Mutable access to this statement's leading trivia.
    pub fn prefix_mut(&mut self) -> &mut Space {
        match self {
            Statement::Source { prefix, .. } => prefix,
            Statement::New(new_class) => &mut new_class.prefix,
            Statement::Block(block) => &mut block.prefix,
        }
    }
}

/// A `new` expression, possibly with an anonymous class body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewClass {
    pub prefix: Space,

    /// Verbatim expression head, e.g. `new Runnable()`.
    pub header: String,

    /// Anonymous class body, when present.
    pub body: Option<TypeBody>,

    /// Verbatim text after the body, e.g. the statement's `;`.
    pub trailer: String,
}

impl NewClass {
    pub fn new(
        prefix: Space,
        header: impl Into<String>,
        body: Option<TypeBody>,
        trailer: impl Into<String>,
    ) -> Self {
        NewClass {
            prefix,
            header: header.into(),
            body,
            trailer: trailer.into(),
        }
    }
}
