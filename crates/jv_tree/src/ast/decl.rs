//! Type declarations and their members.

use crate::space::Space;

use super::Block;

/// Kind of a type declaration.
///
/// Interfaces are distinguished because member spacing rules differ between
/// interface bodies and class bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

impl TypeKind {
    pub fn is_interface(self) -> bool {
        matches!(self, TypeKind::Interface)
    }
}

/// A class, interface, or enum declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    pub prefix: Space,
    pub kind: TypeKind,

    /// Verbatim header up to (not including) the opening brace,
    /// e.g. `public class Foo`.
    pub header: String,

    pub body: TypeBody,
}

impl TypeDecl {
    pub fn new(prefix: Space, kind: TypeKind, header: impl Into<String>, body: TypeBody) -> Self {
        TypeDecl {
            prefix,
            kind,
            header: header.into(),
            body,
        }
    }
}

/// The braced body of a type declaration or anonymous class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeBody {
    /// Gap between the header and the opening brace.
    pub prefix: Space,

    pub members: Vec<Member>,

    /// Gap before the closing brace.
    pub end: Space,
}

impl TypeBody {
    pub fn new(members: Vec<Member>, end: Space) -> Self {
        TypeBody {
            prefix: Space::inline(),
            members,
            end,
        }
    }

    /// An empty body, `{` and `}` separated by `end`.
    pub fn empty(end: Space) -> Self {
        TypeBody::new(Vec::new(), end)
    }
}

/// A member of a type body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Member {
    /// A field declaration, stored verbatim, e.g. `private int field1;`.
    Field { prefix: Space, source: String },

    /// A method or constructor declaration.
    Method(MethodDecl),

    /// An instance or static initializer block. The block's own prefix is the
    /// member's leading trivia.
    Initializer(Block),

    /// A nested type declaration.
    Nested(TypeDecl),
}

impl Member {
    pub fn field(prefix: Space, source: impl Into<String>) -> Self {
        Member::Field {
            prefix,
            source: source.into(),
        }
    }

    /// Leading trivia of this member.
    pub fn prefix(&self) -> &Space {
        match self {
            Member::Field { prefix, .. } => prefix,
            Member::Method(method) => &method.prefix,
            Member::Initializer(block) => &block.prefix,
            Member::Nested(decl) => &decl.prefix,
        }
    }

    /// Mutable access to this member's leading trivia.
    pub fn prefix_mut(&mut self) -> &mut Space {
        match self {
            Member::Field { prefix, .. } => prefix,
            Member::Method(method) => &mut method.prefix,
            Member::Initializer(block) => &mut block.prefix,
            Member::Nested(decl) => &mut decl.prefix,
        }
    }
}

/// A method or constructor declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDecl {
    pub prefix: Space,

    /// Verbatim signature. For bodiless methods this includes the terminating
    /// semicolon, e.g. `void method1();`.
    pub signature: String,

    /// `None` for abstract and interface methods without a body.
    pub body: Option<Block>,
}

impl MethodDecl {
    pub fn new(prefix: Space, signature: impl Into<String>, body: Option<Block>) -> Self {
        MethodDecl {
            prefix,
            signature: signature.into(),
            body,
        }
    }
}
