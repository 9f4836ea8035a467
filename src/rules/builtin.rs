//! Built-in fixups for the free-positioning dashboard canvas.
//!
//! The table is applied top to bottom. Several rules only make sense in this
//! order (`control-radius` must run before `control-hover`), and no rule
//! matches text produced by itself or by a later rule, so running the table
//! twice leaves the file unchanged.

use lazy_static::lazy_static;

use super::rule::RuleSpec;

/// File rewritten when no target is given, relative to the working directory
pub const DEFAULT_TARGET: &str = "src/components/dashboard/FreeDragDrop.tsx";

lazy_static! {
    static ref BUILTIN_RULES: Vec<RuleSpec> = vec![
        RuleSpec::literal(
            "canvas-surface",
            r#"className="relative bg-gradient-to-br from-gray-50 to-gray-100 rounded-xl border border-gray-200 overflow-hidden touch-none mx-auto""#,
            r#"className="relative bg-white rounded-2xl shadow-lg border border-gray-100 overflow-hidden touch-none mx-auto""#,
        ),
        RuleSpec::literal("grid-dots", "rgba(0,0,0,0.05)", "rgba(147,51,234,0.06)"),
        RuleSpec::literal("grid-dots-edit", "rgba(0,0,0,0.08)", "rgba(147,51,234,0.08)"),
        RuleSpec::literal(
            "grid-spacing",
            "backgroundSize: layout.isEditMode ? '40px 40px' : 'auto'",
            "backgroundSize: layout.isEditMode ? '32px 32px' : 'auto'",
        ),
        RuleSpec::literal(
            "panel-surface",
            "bg-white p-4 rounded-xl border border-gray-200",
            "bg-white p-4 rounded-2xl shadow-sm border border-gray-100",
        ),
        RuleSpec::literal(
            "module-frame",
            "rounded-lg overflow-hidden shadow-lg bg-white border-2 transition-all",
            "rounded-xl overflow-hidden shadow-md bg-white border-2 transition-all duration-300",
        ),
        RuleSpec::regex(
            "drag-border",
            r"isDragging\s*\?\s*'border-primary-300'",
            "isDragging\n          ? 'border-primary-400 shadow-2xl'",
        ),
        RuleSpec::literal(
            "drag-lift",
            "'z-50 scale-105 shadow-2xl cursor-grabbing'",
            "'z-50 scale-[1.02] shadow-2xl ring-2 ring-primary-200 cursor-grabbing'",
        ),
        RuleSpec::literal(
            "hover-shadow",
            "hover:shadow-lg transition-shadow duration-200",
            "hover:shadow-xl transition-shadow duration-300",
        ),
        RuleSpec::literal(
            "edit-mode-border",
            "'border-primary-200 border-opacity-50'",
            "'border-primary-200 border-dashed'",
        ),
        RuleSpec::regex(
            "drag-transition",
            r"'transform 0\.2s ease,\s*box-shadow 0\.2s ease'",
            "'transform 0.3s cubic-bezier(0.4, 0, 0.2, 1), box-shadow 0.3s cubic-bezier(0.4, 0, 0.2, 1)'",
        ),
        RuleSpec::regex(
            "control-radius",
            r"\brounded shadow-md (opacity-0|hover:bg-gray-50)",
            "rounded-lg shadow-md ${1}",
        ),
        RuleSpec::literal(
            "control-hover",
            "hover:bg-gray-50 transition-colors",
            "hover:bg-primary-50 transition-colors",
        ),
        RuleSpec::regex(
            "lock-overlay",
            r"bg-gray-100\s+bg-opacity-50",
            "bg-white/60 backdrop-blur-sm",
        ),
        RuleSpec::literal(
            "lock-badge",
            r#"<div className="bg-white p-2 rounded-lg shadow-md">"#,
            r#"<div className="bg-white p-2 rounded-xl shadow-lg">"#,
        ),
    ];
}

/// The ordered built-in rule table
pub fn builtin_rules() -> &'static [RuleSpec] {
    &BUILTIN_RULES
}
