// src/codegen/emit.rs

//! Rust source emission for generated records and kernels.

use super::{Generator, Kernel, KernelOp};
use crate::blade::{Axis, Metric};

/// Words that cannot be plain field names.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that are not valid raw identifiers either.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super"];

/// Field name for a blade: its label, or `scalar` for grade 0.
pub fn field_name(metric: &Metric, blade: &[Axis]) -> String {
    if blade.is_empty() {
        return "scalar".to_string();
    }
    let label = metric.label(blade);
    if NON_RAW_KEYWORDS.contains(&label.as_str()) {
        format!("{}_", label)
    } else if RUST_KEYWORDS.contains(&label.as_str()) {
        format!("r#{}", label)
    } else {
        label
    }
}

fn record_name(generator: &Generator, grade: usize) -> String {
    format!("{}{}", generator.config().record_prefix, grade)
}

pub(super) fn emit_module(generator: &Generator, kernels: &[Kernel]) -> String {
    let config = generator.config();
    let metric = generator.metric();
    let mut out = String::new();

    out.push_str(&format!(
        "//! Blade multiplication kernels for {} dimensions.\n//!\n",
        config.dimensions
    ));
    out.push_str(&format!(
        "//! Basis `{}`: `{}` squares to -1, every other axis to +1.\n",
        metric.symbols().iter().collect::<String>(),
        config.negative_axis
    ));
    out.push_str("//! Generated by cga-codegen; do not edit.\n");

    for grade in 0..=generator.max_grade() {
        out.push('\n');
        emit_record(generator, grade, &mut out);
    }
    for kernel in kernels {
        out.push('\n');
        emit_kernel(generator, kernel, &mut out);
    }
    out
}

fn emit_record(generator: &Generator, grade: usize, out: &mut String) {
    let metric = generator.metric();
    out.push_str(&format!("/// Grade-{} blade coefficients.\n", grade));
    out.push_str("#[derive(Debug, Default, Copy, Clone, PartialEq)]\n");
    out.push_str(&format!("pub struct {} {{\n", record_name(generator, grade)));
    for blade in generator.basis().grade(grade) {
        out.push_str(&format!(
            "    pub {}: {},\n",
            field_name(metric, blade),
            generator.config().scalar_type
        ));
    }
    out.push_str("}\n");
}

fn emit_kernel(generator: &Generator, kernel: &Kernel, out: &mut String) {
    let metric = generator.metric();
    let description = match kernel.op {
        KernelOp::Wedge => "Outer product",
        KernelOp::LeftContraction => "Left contraction",
    };
    out.push_str(&format!(
        "/// {} of grade-{} and grade-{} blades.\n",
        description, kernel.lhs_grade, kernel.rhs_grade
    ));
    out.push_str(&format!(
        "pub fn {}(lhs: &{}, rhs: &{}) -> {} {{\n",
        kernel.function_name(),
        record_name(generator, kernel.lhs_grade),
        record_name(generator, kernel.rhs_grade),
        record_name(generator, kernel.out_grade)
    ));
    out.push_str(&format!(
        "    let mut out = {}::default();\n",
        record_name(generator, kernel.out_grade)
    ));
    for term in &kernel.terms {
        let op = if term.sign.is_negative() { "-=" } else { "+=" };
        out.push_str(&format!(
            "    out.{} {} lhs.{} * rhs.{};\n",
            field_name(metric, &term.out),
            op,
            field_name(metric, &term.lhs),
            field_name(metric, &term.rhs)
        ));
    }
    out.push_str("    out\n}\n");
}
