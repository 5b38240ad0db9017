//! Compilation unit, package clause, and imports.

use crate::space::Space;

use super::TypeDecl;

/// A parsed Java source file.
///
/// Leading file trivia, header comments included, lives in the prefix of the
/// first element present (package clause, first import, or first type).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationUnit {
    pub package: Option<PackageDecl>,
    pub imports: Vec<Import>,
    pub types: Vec<TypeDecl>,

    /// Trailing whitespace after the last element.
    pub eof: String,
}

impl CompilationUnit {
    /// A unit holding only type declarations.
    pub fn of_types(types: Vec<TypeDecl>) -> Self {
        CompilationUnit {
            types,
            eof: "\n".into(),
            ..CompilationUnit::default()
        }
    }
}

/// A `package` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageDecl {
    pub prefix: Space,

    /// Qualified package name, e.g. `com.intellij.samples`.
    pub name: String,
}

impl PackageDecl {
    pub fn new(prefix: Space, name: impl Into<String>) -> Self {
        PackageDecl {
            prefix,
            name: name.into(),
        }
    }
}

/// An `import` clause, stored verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Import {
    pub prefix: Space,

    /// Verbatim clause text, e.g. `import java.util.Vector;`.
    pub source: String,
}

impl Import {
    pub fn new(prefix: Space, source: impl Into<String>) -> Self {
        Import {
            prefix,
            source: source.into(),
        }
    }
}
