// src/codegen/tests.rs

//! Unit tests for blade enumeration, kernel derivation and emission.

use super::{field_name, BasisEnumeration, Generator, GeneratorConfig, KernelOp};
use crate::blade::{Metric, Sign};
use crate::error::AlgebraError;

// --- Test Helpers ---

fn generator(dimensions: usize) -> Generator {
    Generator::new(GeneratorConfig {
        dimensions,
        ..GeneratorConfig::default()
    })
    .expect("default alphabet covers the dimension")
}

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

// --- Configuration ---

#[test_log::test]
fn test_config_validation() {
    let invalid = [
        GeneratorConfig {
            dimensions: 0,
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            dimensions: 4,
            symbols: "mpxyz".to_string(),
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            symbols: "mpXyz".to_string(),
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            negative_axis: 'x',
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            symbols: "mpxxz".to_string(),
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            scalar_type: " ".to_string(),
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            dimensions: usize::MAX,
            ..GeneratorConfig::default()
        },
        GeneratorConfig {
            dimensions: usize::MAX - 1,
            ..GeneratorConfig::default()
        },
    ];
    for config in invalid {
        assert!(
            matches!(Generator::new(config.clone()), Err(AlgebraError::InvalidConfig(_))),
            "{:?} should be rejected",
            config
        );
    }
}

#[test_log::test]
fn test_huge_dimension_from_json_is_rejected() {
    let config =
        crate::config::Config::from_json_str(r#"{"codegen":{"dimensions":18446744073709551615}}"#)
            .expect("valid json");
    assert!(matches!(
        Generator::new(config.codegen),
        Err(AlgebraError::InvalidConfig(_))
    ));
}

#[test_log::test]
fn test_only_needed_symbols_are_used() {
    let gen = generator(2);
    assert_eq!(gen.metric().symbols(), &['m', 'p', 'x', 'y']);
    assert_eq!(gen.metric().square(0), Sign::Negative);
    assert_eq!(gen.metric().square(1), Sign::Positive);
}

// --- Enumeration ---

#[test_log::test]
fn test_basis_sizes_are_binomial() {
    for dimensions in 1..=5 {
        let gen = generator(dimensions);
        let n = dimensions + 2;
        assert_eq!(gen.max_grade(), n);
        for grade in 0..=n {
            assert_eq!(gen.basis().grade(grade).len(), binomial(n, grade));
        }
        assert!(gen.basis().grade(n + 1).is_empty());
    }
}

#[test_log::test]
fn test_basis_order_and_lookup() {
    let metric = Metric::conformal("mpxyz", 'm').expect("valid");
    let basis = BasisEnumeration::new(&metric);
    let labels: Vec<String> = basis.grade(2).iter().map(|b| metric.label(b)).collect();
    assert_eq!(
        labels,
        ["mp", "mx", "my", "mz", "px", "py", "pz", "xy", "xz", "yz"]
    );
    assert_eq!(basis.index_of(&[2, 3]), Some(7));
    assert_eq!(basis.index_of(&[3, 2]), None);
}

// --- Kernels ---

#[test_log::test]
fn test_wedge_1_1() {
    let gen = generator(3);
    let kernel = gen
        .kernel(KernelOp::Wedge, 1, 1)
        .expect("well-formed")
        .expect("grade 2 exists");
    assert_eq!(kernel.out_grade, 2);
    assert_eq!(kernel.terms.len(), 20);
    assert_eq!(kernel.function_name(), "wedge_1_1");

    let metric = gen.metric();
    let pm = kernel
        .terms
        .iter()
        .find(|t| metric.label(&t.lhs) == "p" && metric.label(&t.rhs) == "m")
        .expect("p ^ m is generated");
    assert_eq!(metric.label(&pm.out), "mp");
    assert_eq!(pm.sign, Sign::Negative);
}

#[test_log::test]
fn test_wedge_term_counts() {
    let gen = generator(3);
    for lhs in 1..=5 {
        for rhs in 1..=(5 - lhs) {
            let kernel = gen
                .kernel(KernelOp::Wedge, lhs, rhs)
                .expect("well-formed")
                .expect("in range");
            assert_eq!(kernel.terms.len(), binomial(5, lhs) * binomial(5 - lhs, rhs));
        }
    }
}

#[test_log::test]
fn test_left_contraction_uses_metric() {
    let gen = generator(3);
    let metric = gen.metric();
    let kernel = gen
        .kernel(KernelOp::LeftContraction, 1, 2)
        .expect("well-formed")
        .expect("grade 1 exists");
    assert_eq!(kernel.out_grade, 1);
    // Each bivector contains two vectors.
    assert_eq!(kernel.terms.len(), 20);

    let find = |lhs: &str, rhs: &str| {
        kernel
            .terms
            .iter()
            .find(|t| metric.label(&t.lhs) == lhs && metric.label(&t.rhs) == rhs)
            .map(|t| (metric.label(&t.out), t.sign))
    };
    // m squares to -1: m (m p) = -p
    assert_eq!(find("m", "mp"), Some(("p".to_string(), Sign::Negative)));
    // p (m p) = -m p p = -m
    assert_eq!(find("p", "mp"), Some(("m".to_string(), Sign::Negative)));
    assert_eq!(find("x", "xy"), Some(("y".to_string(), Sign::Positive)));
    assert_eq!(find("x", "yz"), None);
}

#[test_log::test]
fn test_out_of_range_kernels_are_skipped() {
    let gen = generator(3);
    assert_eq!(gen.kernel(KernelOp::LeftContraction, 1, 1), Ok(None));
    assert_eq!(gen.kernel(KernelOp::LeftContraction, 2, 1), Ok(None));
    assert_eq!(gen.kernel(KernelOp::Wedge, 3, 3), Ok(None));
}

#[test_log::test]
fn test_kernel_inventory() {
    let kernels = generator(3).kernels().expect("well-formed");
    let wedges = kernels.iter().filter(|k| k.op == KernelOp::Wedge).count();
    let contractions = kernels
        .iter()
        .filter(|k| k.op == KernelOp::LeftContraction)
        .count();
    assert_eq!(wedges, 10);
    assert_eq!(contractions, 10);
    assert!(kernels.iter().all(|k| k.out_grade > 0 && k.out_grade <= 5));
    assert!(kernels.iter().all(|k| !k.terms.is_empty()));
}

// --- Emission ---

#[test_log::test]
fn test_emitted_module() {
    let source = generator(3).emit().expect("well-formed");
    assert!(source.starts_with("//! Blade multiplication kernels for 3 dimensions."));
    assert!(source.contains(
        "#[derive(Debug, Default, Copy, Clone, PartialEq)]\npub struct Grade0 {\n    pub scalar: f64,\n}\n"
    ));
    assert!(source.contains("pub struct Grade5 {\n    pub mpxyz: f64,\n}\n"));
    assert!(source.contains("pub fn wedge_1_1(lhs: &Grade1, rhs: &Grade1) -> Grade2 {\n"));
    assert!(source.contains("    let mut out = Grade2::default();\n    out.mp += lhs.m * rhs.p;\n"));
    assert!(source.contains("    out.mp -= lhs.p * rhs.m;\n"));
    assert!(source.contains("pub fn left_contract_1_2(lhs: &Grade1, rhs: &Grade2) -> Grade1 {\n"));
    assert!(!source.contains("left_contract_1_1"));
    assert!(!source.contains("wedge_3_3"));
}

#[test_log::test]
fn test_emission_respects_naming_config() {
    let gen = Generator::new(GeneratorConfig {
        dimensions: 1,
        scalar_type: "f32".to_string(),
        record_prefix: "Blade".to_string(),
        ..GeneratorConfig::default()
    })
    .expect("valid");
    let source = gen.emit().expect("well-formed");
    assert!(source.contains("pub struct Blade3 {\n    pub mpx: f32,\n}\n"));
    assert!(source.contains("pub fn wedge_1_2(lhs: &Blade1, rhs: &Blade2) -> Blade3 {\n"));
}

#[test_log::test]
fn test_field_names_avoid_keywords() {
    let metric = Metric::conformal("ifxy", 'i').expect("valid");
    assert_eq!(field_name(&metric, &[]), "scalar");
    assert_eq!(field_name(&metric, &[0, 1]), "r#if");
    assert_eq!(field_name(&metric, &[2, 3]), "xy");
    let metric = Metric::conformal("selfx", 's').expect("valid");
    assert_eq!(field_name(&metric, &[0, 1, 2, 3]), "self_");
}
