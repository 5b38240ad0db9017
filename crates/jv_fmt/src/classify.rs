//! Boundary classification.
//!
//! Maps a structural position to the set of named contexts whose rules may
//! govern the blank-line gap at that position. Classification is pure: it
//! looks only at position facts (container kind, sibling ordinal, what
//! precedes the boundary), never at the style, so the same context set can be
//! resolved against any policy.
//!
//! A boundary may carry both minimum and maximum contexts at once; precedence
//! between them is the resolver's concern. Minimum contexts carry a
//! `precondition` flag: a floor whose structural precondition failed (nothing
//! precedes the package clause, say) is not merely inactive, it forces the
//! gap empty.

use smallvec::SmallVec;

/// Contexts carrying a configurable floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MinimumKind {
    BeforePackage,
    AfterPackage,
    BeforeImports,
    AfterImports,
    AroundClass,
    AfterClassHeader,
    BeforeClassEnd,
    AfterAnonymousClassHeader,
    AroundFieldInInterface,
    AroundField,
    AroundMethodInInterface,
    AroundMethod,
    BeforeMethodBody,
    AroundInitializer,
}

/// Contexts carrying a configurable ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeepMaximumKind {
    InDeclarations,
    InCode,
    BeforeEndOfBlock,
    BetweenHeaderAndPackage,
}

/// A minimum context attached to a boundary, with its precondition resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimumContext {
    pub kind: MinimumKind,

    /// Whether the structural precondition of this floor holds. `false` for
    /// the edge floors (`BeforePackage`, `BeforeImports`) when nothing
    /// precedes the boundary.
    pub precondition: bool,
}

/// The ordered set of contexts governing one boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextSet {
    minimums: SmallVec<[MinimumContext; 2]>,
    maximums: SmallVec<[KeepMaximumKind; 2]>,
}

impl ContextSet {
    pub fn new() -> Self {
        ContextSet::default()
    }

    /// Add a floor context whose precondition holds.
    pub fn with_minimum(self, kind: MinimumKind) -> Self {
        self.with_guarded_minimum(kind, true)
    }

    /// Add a floor context with an explicit precondition fact.
    pub fn with_guarded_minimum(mut self, kind: MinimumKind, precondition: bool) -> Self {
        self.minimums.push(MinimumContext { kind, precondition });
        self
    }

    /// Add a ceiling context.
    pub fn with_maximum(mut self, kind: KeepMaximumKind) -> Self {
        self.maximums.push(kind);
        self
    }

    pub fn minimums(&self) -> &[MinimumContext] {
        &self.minimums
    }

    pub fn maximums(&self) -> &[KeepMaximumKind] {
        &self.maximums
    }

    /// True when no rule can govern this boundary: the gap is left alone.
    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty() && self.maximums.is_empty()
    }
}

/// Kind of the container whose body a member sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Class,
    Interface,
    AnonymousClass,
}

/// Kind of a type-body member, as far as classification cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Method,
    Initializer,
    NestedType,
}

/// The gap before the package clause. A file header comment is the only
/// thing that can precede it.
pub fn classify_package(has_header_comments: bool) -> ContextSet {
    let cx =
        ContextSet::new().with_guarded_minimum(MinimumKind::BeforePackage, has_header_comments);
    if has_header_comments {
        cx.with_maximum(KeepMaximumKind::BetweenHeaderAndPackage)
    } else {
        cx
    }
}

/// The gap before the first import. Preceded by the package clause when one
/// exists, otherwise by a header comment or nothing.
pub fn classify_first_import(has_package: bool, has_header_comments: bool) -> ContextSet {
    let cx = ContextSet::new()
        .with_guarded_minimum(MinimumKind::BeforeImports, has_package || has_header_comments);
    if has_package {
        cx.with_minimum(MinimumKind::AfterPackage)
    } else {
        cx
    }
}

/// The gap before the first type declaration. Both region floors can apply:
/// `AfterImports` whenever anything precedes, and `AfterPackage` when the
/// package clause is the immediate predecessor (no imports between).
pub fn classify_first_type(
    has_package: bool,
    has_imports: bool,
    has_header_comments: bool,
) -> ContextSet {
    let mut cx = ContextSet::new();
    if has_package || has_imports || has_header_comments {
        cx = cx.with_minimum(MinimumKind::AfterImports);
    }
    if has_package && !has_imports {
        cx = cx.with_minimum(MinimumKind::AfterPackage);
    }
    cx
}

/// The gap before a sibling type declaration other than the first.
pub fn classify_type(ordinal: usize) -> ContextSet {
    if ordinal == 0 {
        ContextSet::new()
    } else {
        ContextSet::new().with_minimum(MinimumKind::AroundClass)
    }
}

/// The gap before a member of a type body.
///
/// Every member gap is a declarations gap for the ceiling. The first member
/// sits under the header floor; later members take the floor matching their
/// kind and container. An initializer block raises the `AroundInitializer`
/// floor on both of its sides, and consecutive sibling nested types fall
/// under `AroundClass`.
pub fn classify_member(
    container: ContainerKind,
    kind: MemberKind,
    ordinal: usize,
    prev: Option<MemberKind>,
) -> ContextSet {
    let mut cx = ContextSet::new().with_maximum(KeepMaximumKind::InDeclarations);

    if ordinal == 0 {
        let header = match container {
            ContainerKind::AnonymousClass => MinimumKind::AfterAnonymousClassHeader,
            ContainerKind::Class | ContainerKind::Interface => MinimumKind::AfterClassHeader,
        };
        return cx.with_minimum(header);
    }

    let in_interface = container == ContainerKind::Interface;
    if container != ContainerKind::AnonymousClass {
        match kind {
            MemberKind::Field if in_interface => {
                cx = cx.with_minimum(MinimumKind::AroundFieldInInterface);
            }
            MemberKind::Field => cx = cx.with_minimum(MinimumKind::AroundField),
            MemberKind::Method if in_interface => {
                cx = cx.with_minimum(MinimumKind::AroundMethodInInterface);
            }
            MemberKind::Method => cx = cx.with_minimum(MinimumKind::AroundMethod),
            MemberKind::Initializer => cx = cx.with_minimum(MinimumKind::AroundInitializer),
            MemberKind::NestedType => {
                if prev == Some(MemberKind::NestedType) {
                    cx = cx.with_minimum(MinimumKind::AroundClass);
                }
            }
        }
        if prev == Some(MemberKind::Initializer) && kind != MemberKind::Initializer {
            cx = cx.with_minimum(MinimumKind::AroundInitializer);
        }
    }

    cx
}

/// The gap before a statement inside a code block.
pub fn classify_statement(is_first_in_method_body: bool) -> ContextSet {
    let cx = ContextSet::new().with_maximum(KeepMaximumKind::InCode);
    if is_first_in_method_body {
        cx.with_minimum(MinimumKind::BeforeMethodBody)
    } else {
        cx
    }
}

/// The gap before the closing brace of a named type body.
pub fn classify_type_body_end() -> ContextSet {
    ContextSet::new().with_minimum(MinimumKind::BeforeClassEnd)
}

/// The gap before the closing brace of a code block. An empty method body
/// also carries the `BeforeMethodBody` floor, the gap between `{` and `}`
/// being the whole body.
pub fn classify_block_end(is_empty_method_body: bool) -> ContextSet {
    let cx = ContextSet::new().with_maximum(KeepMaximumKind::BeforeEndOfBlock);
    if is_empty_method_body {
        cx.with_minimum(MinimumKind::BeforeMethodBody)
    } else {
        cx
    }
}
