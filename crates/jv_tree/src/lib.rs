//! Lossless Structural Tree for Java Compilation Units
//!
//! Node types for an already-parsed Java source file, built for whitespace
//! rewriting passes: every element carries its leading trivia as a [`Space`],
//! and all element text is stored verbatim so a tree can be reconstructed
//! char-for-char with [`ast::CompilationUnit::to_source`].
//!
//! # Trivia model
//!
//! Trivia is attached to the element it precedes. Within a [`Space`] the
//! whitespace comes first, then comments, each comment carrying the trivia
//! between it and whatever follows as its `suffix`. The gap a formatting pass
//! governs at an element boundary is therefore the last comment's suffix when
//! comments are present, and the `Space`'s own whitespace otherwise.
//!
//! # Modules
//!
//! - [`space`]: whitespace and comment trivia
//! - [`ast`]: compilation unit, declaration, and statement nodes

pub mod ast;
pub mod space;

mod print;

pub use ast::{
    Block, CompilationUnit, Import, Member, MethodDecl, NewClass, PackageDecl, Statement,
    TypeBody, TypeDecl, TypeKind,
};
pub use space::{Comment, Space};
