//! Blank-line style: the policy a pass enforces.
//!
//! Two independent rule groups, both keyed by structural context:
//!
//! - [`Minimum`]: floors. A boundary governed by a configured floor must keep
//!   at least that many blank lines.
//! - [`KeepMaximum`]: ceilings. Existing blank lines beyond a configured
//!   ceiling are removed; lines below it are left alone.
//!
//! `None` means the rule is not configured: no floor, or current blank lines
//! pass through a missing ceiling unchanged. A style is constructed once and
//! shared read-only across a whole pass.

use crate::classify::{KeepMaximumKind, MinimumKind};

/// Blank-line policy for one normalization pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlankLineStyle {
    pub minimum: Minimum,
    pub keep_maximum: KeepMaximum,
}

/// Minimum blank lines to enforce at each context. `None` = no floor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Minimum {
    pub before_package: Option<usize>,
    pub after_package: Option<usize>,
    pub before_imports: Option<usize>,
    pub after_imports: Option<usize>,
    pub around_class: Option<usize>,
    pub after_class_header: Option<usize>,
    pub before_class_end: Option<usize>,
    pub after_anonymous_class_header: Option<usize>,
    pub around_field_in_interface: Option<usize>,
    pub around_field: Option<usize>,
    pub around_method_in_interface: Option<usize>,
    pub around_method: Option<usize>,
    pub before_method_body: Option<usize>,
    pub around_initializer: Option<usize>,
}

/// Maximum blank lines to retain at each context. `None` = no ceiling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeepMaximum {
    pub in_declarations: Option<usize>,
    pub in_code: Option<usize>,
    pub before_end_of_block: Option<usize>,
    pub between_header_and_package: Option<usize>,
}

impl BlankLineStyle {
    /// The IDE default profile this rule set ships with: keep at most two
    /// blank lines everywhere, and require one blank line around the package
    /// region, between members, and around initializers.
    pub fn intellij() -> Self {
        BlankLineStyle {
            minimum: Minimum {
                before_package: Some(0),
                after_package: Some(1),
                before_imports: Some(1),
                after_imports: Some(1),
                around_class: Some(1),
                after_class_header: Some(0),
                before_class_end: Some(0),
                after_anonymous_class_header: Some(0),
                around_field_in_interface: Some(0),
                around_field: Some(0),
                around_method_in_interface: Some(1),
                around_method: Some(1),
                before_method_body: Some(0),
                around_initializer: Some(1),
            },
            keep_maximum: KeepMaximum {
                in_declarations: Some(2),
                in_code: Some(2),
                before_end_of_block: Some(2),
                between_header_and_package: Some(2),
            },
        }
    }

    /// The configured floor for a minimum context, if any.
    pub fn minimum_for(&self, kind: MinimumKind) -> Option<usize> {
        let m = &self.minimum;
        match kind {
            MinimumKind::BeforePackage => m.before_package,
            MinimumKind::AfterPackage => m.after_package,
            MinimumKind::BeforeImports => m.before_imports,
            MinimumKind::AfterImports => m.after_imports,
            MinimumKind::AroundClass => m.around_class,
            MinimumKind::AfterClassHeader => m.after_class_header,
            MinimumKind::BeforeClassEnd => m.before_class_end,
            MinimumKind::AfterAnonymousClassHeader => m.after_anonymous_class_header,
            MinimumKind::AroundFieldInInterface => m.around_field_in_interface,
            MinimumKind::AroundField => m.around_field,
            MinimumKind::AroundMethodInInterface => m.around_method_in_interface,
            MinimumKind::AroundMethod => m.around_method,
            MinimumKind::BeforeMethodBody => m.before_method_body,
            MinimumKind::AroundInitializer => m.around_initializer,
        }
    }

    /// The configured ceiling for a keep-maximum context, if any.
    pub fn keep_maximum_for(&self, kind: KeepMaximumKind) -> Option<usize> {
        let k = &self.keep_maximum;
        match kind {
            KeepMaximumKind::InDeclarations => k.in_declarations,
            KeepMaximumKind::InCode => k.in_code,
            KeepMaximumKind::BeforeEndOfBlock => k.before_end_of_block,
            KeepMaximumKind::BetweenHeaderAndPackage => k.between_header_and_package,
        }
    }
}
