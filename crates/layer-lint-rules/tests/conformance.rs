//! Integration test: layer conformance end-to-end.
//!
//! Uses fixture manifests under `tests/fixtures/` to verify the full
//! TOML → module graph → rule set → report pipeline against the
//! built-in rules.

use std::path::PathBuf;

use layer_lint_core::{CheckError, Checker, Manifest, ViolationReport};
use layer_lint_rules::{all_rules, rule_set_from_names};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn check(manifest: &Manifest) -> Result<ViolationReport, CheckError> {
    let rules = match manifest.enabled_rules.as_deref() {
        Some(names) => rule_set_from_names(names).expect("rule selection should resolve"),
        None => all_rules(),
    };
    Checker::new(rules).check(&manifest.graph)
}

fn check_fixture(name: &str) -> ViolationReport {
    let manifest = Manifest::from_file(&fixture(name)).expect("fixture manifest should load");
    check(&manifest).expect("check should run")
}

// ── Happy path: conforming graphs ──

#[test]
fn hexagonal_graph_is_clean() {
    let report = check_fixture("hexagonal.toml");

    assert!(
        report.is_empty(),
        "expected no violations, got: {}",
        report.render_text()
    );
}

#[test]
fn empty_manifest_is_clean() {
    let manifest = Manifest::parse("").expect("empty manifest should load");

    let report = check(&manifest).expect("empty graph is valid input");

    assert!(report.is_empty());
    assert_eq!(report.render_text(), "No layer violations found\n");
}

// ── Violating graphs ──

#[test]
fn domain_to_infrastructure_is_flagged_once() {
    let manifest = Manifest::parse(
        r#"
[[modules]]
name = "Domain.Order"
layer = "domain"

[[modules]]
name = "App.PlaceOrder"
layer = "application"

[[modules]]
name = "Infra.OrderRepo"
layer = "infrastructure"

[[dependencies]]
from = "App.PlaceOrder"
to = "Domain.Order"

[[dependencies]]
from = "Infra.OrderRepo"
to = "App.PlaceOrder"

[[dependencies]]
from = "Domain.Order"
to = "Infra.OrderRepo"
"#,
    )
    .expect("manifest should load");

    let report = check(&manifest).expect("check should run");

    assert_eq!(report.len(), 1);
    let violation = &report.violations()[0];
    assert_eq!(violation.rule, "no-domain-to-infrastructure");
    assert_eq!(violation.from, "Domain.Order");
    assert_eq!(violation.to, "Infra.OrderRepo");
}

#[test]
fn cycle_flags_every_edge_of_the_triangle() {
    let report = check_fixture("cycle.toml");

    assert_eq!(report.len(), 3);
    assert!(report
        .violations()
        .iter()
        .all(|v| v.rule == "no-cyclic-dependency"));

    // Canonical order: sorted by depending module within the rule.
    let edges: Vec<_> = report
        .violations()
        .iter()
        .map(|v| (v.from.as_str(), v.to.as_str()))
        .collect();
    assert_eq!(edges, vec![("A", "B"), ("B", "C"), ("C", "A")]);
}

#[test]
fn one_violation_per_offended_rule() {
    let report = check_fixture("layered_violations.toml");

    assert_eq!(
        report.len(),
        3,
        "expected 3 violations, got: {}",
        report.render_text()
    );

    let codes: Vec<_> = report.violations().iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["LL003", "LL004", "LL002"]);
}

#[test]
fn report_text_is_stable() {
    let report = check_fixture("layered_violations.toml");

    insta::assert_snapshot!(report.render_text(), @r"
LL003 no-application-to-infrastructure: App.PlaceOrder -> Infra.OrderRepo
  application module `App.PlaceOrder` must not depend on infrastructure module `Infra.OrderRepo`
LL004 no-bootstrap-dependency: Scripts.Migrate -> Boot.Main
  module `Scripts.Migrate` must not depend on bootstrap module `Boot.Main`
LL002 no-domain-to-infrastructure: Domain.Order -> Infra.OrderRepo
  domain module `Domain.Order` must not depend on infrastructure module `Infra.OrderRepo`

Found 3 violation(s)
");
}

#[test]
fn an_edge_may_offend_several_rules() {
    let manifest = Manifest::parse(
        r#"
[[modules]]
name = "Domain.Order"
layer = "domain"

[[modules]]
name = "Boot.Main"
layer = "bootstrap"

[[dependencies]]
from = "Domain.Order"
to = "Boot.Main"
"#,
    )
    .expect("manifest should load");

    let report = check(&manifest).expect("check should run");

    // Both the domain rule and the bootstrap rule flag the same edge.
    let rules: Vec<_> = report.violations().iter().map(|v| v.rule.as_str()).collect();
    assert_eq!(
        rules,
        vec!["no-bootstrap-dependency", "no-domain-to-infrastructure"]
    );
}

// ── Rule selection ──

#[test]
fn manifest_rule_selection_limits_the_check() {
    let manifest = Manifest::parse(
        r#"
[[modules]]
name = "Domain.Order"
layer = "domain"

[[modules]]
name = "Infra.OrderRepo"
layer = "infrastructure"

[[dependencies]]
from = "Domain.Order"
to = "Infra.OrderRepo"

[rules]
enabled = ["no-cyclic-dependency"]
"#,
    )
    .expect("manifest should load");

    let report = check(&manifest).expect("check should run");

    assert!(
        report.is_empty(),
        "the only enabled rule does not cover this edge"
    );
}

#[test]
fn empty_rule_selection_is_a_configuration_error() {
    let manifest = Manifest::parse(
        r#"
[[modules]]
name = "Domain.Order"
layer = "domain"

[rules]
enabled = []
"#,
    )
    .expect("manifest should load");

    let err = check(&manifest).unwrap_err();

    assert_eq!(err, CheckError::EmptyRuleSet);
}

// ── Determinism ──

#[test]
fn checking_twice_renders_identical_text() {
    let manifest =
        Manifest::from_file(&fixture("layered_violations.toml")).expect("fixture should load");

    let first = Checker::new(all_rules())
        .check(&manifest.graph)
        .expect("check should run");
    let second = Checker::new(all_rules())
        .check(&manifest.graph)
        .expect("check should run");

    assert_eq!(first, second);
    assert_eq!(first.render_text(), second.render_text());
}
