//! The blank-line normalization pass.
//!
//! One synchronous pre-order walk over a compilation unit. At every element
//! boundary: classify the position, measure the gap, resolve against the
//! style, rewrite the whitespace in place. Container kind is passed down
//! explicitly during descent; no state survives the walk.

use jv_tree::{Block, CompilationUnit, Member, MethodDecl, Statement, TypeBody, TypeDecl};
use tracing::trace;

use crate::boundary::{resolve, Boundary, Target};
use crate::classify::{
    classify_block_end, classify_first_import, classify_first_type, classify_member,
    classify_package, classify_statement, classify_type, classify_type_body_end, ContainerKind,
    ContextSet, MemberKind,
};
use crate::rewrite::{apply_target, blank_lines};
use crate::style::BlankLineStyle;

/// Rewrite every policy-governed gap in `unit` to satisfy `style`.
///
/// Total over any well-formed tree: positions with no applicable rule are
/// left untouched, and nothing outside whitespace is ever modified. The pass
/// is idempotent, so running it over its own output changes nothing.
pub fn normalize_blank_lines(mut unit: CompilationUnit, style: &BlankLineStyle) -> CompilationUnit {
    BlankLines { style }.visit_unit(&mut unit);
    tracing::debug!("blank line pass complete");
    unit
}

struct BlankLines<'a> {
    style: &'a BlankLineStyle,
}

impl BlankLines<'_> {
    fn apply(&self, gap: &mut String, contexts: ContextSet) {
        if contexts.is_empty() {
            return;
        }
        let boundary = Boundary::new(blank_lines(gap), contexts);
        let target = resolve(&boundary, self.style);
        if target != Target::Unchanged {
            trace!(current = boundary.current, ?target, "boundary resolved");
        }
        apply_target(gap, target);
    }

    fn visit_unit(&self, unit: &mut CompilationUnit) {
        let has_package = unit.package.is_some();
        let has_imports = !unit.imports.is_empty();

        if let Some(package) = &mut unit.package {
            let has_header = !package.prefix.comments.is_empty();
            self.apply(package.prefix.gap_mut(), classify_package(has_header));
        }

        if let Some(import) = unit.imports.first_mut() {
            if has_package {
                // Comments here belong to the import itself; the governed gap
                // is the whitespace above them.
                let contexts = classify_first_import(true, false);
                self.apply(&mut import.prefix.whitespace, contexts);
            } else {
                let has_header = !import.prefix.comments.is_empty();
                let contexts = classify_first_import(false, has_header);
                self.apply(import.prefix.gap_mut(), contexts);
            }
        }

        for (ordinal, decl) in unit.types.iter_mut().enumerate() {
            if ordinal == 0 {
                if has_package || has_imports {
                    let contexts = classify_first_type(has_package, has_imports, false);
                    self.apply(&mut decl.prefix.whitespace, contexts);
                } else if !decl.prefix.comments.is_empty() {
                    let contexts = classify_first_type(false, false, true);
                    self.apply(decl.prefix.gap_mut(), contexts);
                }
            } else {
                self.apply(&mut decl.prefix.whitespace, classify_type(ordinal));
            }
            self.visit_type_decl(decl);
        }
    }

    fn visit_type_decl(&self, decl: &mut TypeDecl) {
        let container = if decl.kind.is_interface() {
            ContainerKind::Interface
        } else {
            ContainerKind::Class
        };
        self.visit_type_body(&mut decl.body, container);
    }

    fn visit_type_body(&self, body: &mut TypeBody, container: ContainerKind) {
        let mut prev = None;
        for (ordinal, member) in body.members.iter_mut().enumerate() {
            let kind = member_kind(member);
            let contexts = classify_member(container, kind, ordinal, prev);
            self.apply(&mut member.prefix_mut().whitespace, contexts);
            prev = Some(kind);

            match member {
                Member::Method(method) => self.visit_method(method),
                Member::Initializer(block) => self.visit_code_block(block, false),
                Member::Nested(nested) => self.visit_type_decl(nested),
                Member::Field { .. } => {}
            }
        }

        if container != ContainerKind::AnonymousClass {
            self.apply(&mut body.end.whitespace, classify_type_body_end());
        }
    }

    fn visit_method(&self, method: &mut MethodDecl) {
        let Some(body) = &mut method.body else {
            return;
        };
        if body.statements.is_empty() {
            // The gap between `{` and `}` is the whole body.
            self.apply(&mut body.end.whitespace, classify_block_end(true));

            // Lines inserted into an inline `{}` leave the closing brace at
            // column zero; give it the method's own indentation.
            let wants_body_line = self.style.minimum.before_method_body.unwrap_or(0) > 0;
            if wants_body_line && body.end.whitespace.ends_with('\n') {
                let indent = method.prefix.indent().to_string();
                body.end.whitespace.push_str(&indent);
            }
        } else {
            self.visit_code_block(body, true);
        }
    }

    fn visit_code_block(&self, block: &mut Block, is_method_body: bool) {
        for (ordinal, statement) in block.statements.iter_mut().enumerate() {
            let contexts = classify_statement(is_method_body && ordinal == 0);
            self.apply(&mut statement.prefix_mut().whitespace, contexts);

            match statement {
                Statement::New(new_class) => {
                    if let Some(body) = &mut new_class.body {
                        self.visit_type_body(body, ContainerKind::AnonymousClass);
                    }
                }
                Statement::Block(inner) => self.visit_code_block(inner, false),
                Statement::Source { .. } => {}
            }
        }
        self.apply(&mut block.end.whitespace, classify_block_end(false));
    }
}

fn member_kind(member: &Member) -> MemberKind {
    match member {
        Member::Field { .. } => MemberKind::Field,
        Member::Method(_) => MemberKind::Method,
        Member::Initializer(_) => MemberKind::Initializer,
        Member::Nested(_) => MemberKind::NestedType,
    }
}
