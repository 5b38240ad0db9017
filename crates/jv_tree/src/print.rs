//! Verbatim source reconstruction.
//!
//! Every node stores its text and trivia verbatim, so printing is plain
//! concatenation in document order. A tree that no pass has touched prints
//! back to exactly the source it was built from.

use crate::ast::{Block, CompilationUnit, Member, Statement, TypeBody, TypeDecl};
use crate::space::Space;

impl CompilationUnit {
    /// Reconstruct the source text of this unit.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        if let Some(package) = &self.package {
            package.prefix.print(&mut out);
            out.push_str("package ");
            out.push_str(&package.name);
            out.push(';');
        }
        for import in &self.imports {
            import.prefix.print(&mut out);
            out.push_str(&import.source);
        }
        for decl in &self.types {
            decl.print(&mut out);
        }
        out.push_str(&self.eof);
        out
    }
}

impl Space {
    fn print(&self, out: &mut String) {
        out.push_str(&self.whitespace);
        for comment in &self.comments {
            out.push_str(&comment.text);
            out.push_str(&comment.suffix);
        }
    }
}

impl TypeDecl {
    fn print(&self, out: &mut String) {
        self.prefix.print(out);
        out.push_str(&self.header);
        self.body.print(out);
    }
}

impl TypeBody {
    fn print(&self, out: &mut String) {
        self.prefix.print(out);
        out.push('{');
        for member in &self.members {
            member.print(out);
        }
        self.end.print(out);
        out.push('}');
    }
}

impl Member {
    fn print(&self, out: &mut String) {
        match self {
            Member::Field { prefix, source } => {
                prefix.print(out);
                out.push_str(source);
            }
            Member::Method(method) => {
                method.prefix.print(out);
                out.push_str(&method.signature);
                if let Some(body) = &method.body {
                    body.print(out);
                }
            }
            Member::Initializer(block) => block.print(out),
            Member::Nested(decl) => decl.print(out),
        }
    }
}

impl Block {
    fn print(&self, out: &mut String) {
        self.prefix.print(out);
        out.push('{');
        for statement in &self.statements {
            statement.print(out);
        }
        self.end.print(out);
        out.push('}');
    }
}

impl Statement {
    fn print(&self, out: &mut String) {
        match self {
            Statement::Source { prefix, source } => {
                prefix.print(out);
                out.push_str(source);
            }
            Statement::New(new_class) => {
                new_class.prefix.print(out);
                out.push_str(&new_class.header);
                if let Some(body) = &new_class.body {
                    body.print(out);
                }
                out.push_str(&new_class.trailer);
            }
            Statement::Block(block) => block.print(out),
        }
    }
}
