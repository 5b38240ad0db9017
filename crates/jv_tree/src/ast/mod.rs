//! Tree node types.
//!
//! # Modules
//!
//! - [`unit`]: compilation unit, package clause, imports
//! - [`decl`]: type declarations and their members
//! - [`stmt`]: blocks, statements, anonymous classes

mod decl;
mod stmt;
mod unit;

pub use decl::{Member, MethodDecl, TypeBody, TypeDecl, TypeKind};
pub use stmt::{Block, NewClass, Statement};
pub use unit::{CompilationUnit, Import, PackageDecl};
