//! Violation values and the report that aggregates them.
//!
//! Violations are plain data: a rule that fired, the offending edge, and
//! a human-readable explanation. A [`ViolationReport`] sorts them once at
//! construction and is never mutated afterwards, so rendering the same
//! graph against the same rules always produces byte-identical output.

use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────
// Violation
// ────────────────────────────────────────────

/// A single rule violation on a dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Stable rule code, e.g. `LL002`.
    pub code: String,
    /// Kebab-case rule name, e.g. `no-domain-to-infrastructure`.
    pub rule: String,
    /// Name of the depending module.
    pub from: String,
    /// Name of the depended-upon module.
    pub to: String,
    /// Explanation of why the edge violates the rule.
    pub message: String,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            from: from.into(),
            to: to.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: [{}] {}",
            self.from, self.to, self.code, self.message
        )
    }
}

// ────────────────────────────────────────────
// ViolationReport
// ────────────────────────────────────────────

/// Outcome of checking a module graph against a rule set.
///
/// Violations are sorted by rule name, then depending module, then
/// depended-upon module. The report is immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationReport {
    violations: Vec<Violation>,
}

impl ViolationReport {
    /// Creates a report from raw violations, sorting them into canonical
    /// order.
    #[must_use]
    pub fn new(mut violations: Vec<Violation>) -> Self {
        violations.sort_by(|a, b| {
            a.rule
                .cmp(&b.rule)
                .then_with(|| a.from.cmp(&b.from))
                .then_with(|| a.to.cmp(&b.to))
        });
        Self { violations }
    }

    /// Creates an empty report.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The violations, in canonical order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` if the graph conformed to every rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Renders the report as plain deterministic text, one block per
    /// violation followed by a summary line.
    #[must_use]
    pub fn render_text(&self) -> String {
        use std::fmt::Write;

        if self.violations.is_empty() {
            return "No layer violations found\n".to_string();
        }

        let mut out = String::new();
        for violation in &self.violations {
            let _ = writeln!(
                out,
                "{} {}: {} -> {}",
                violation.code, violation.rule, violation.from, violation.to
            );
            let _ = writeln!(out, "  {}", violation.message);
        }
        let _ = writeln!(out, "\nFound {} violation(s)", self.violations.len());
        out
    }
}

impl<'a> IntoIterator for &'a ViolationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(rule: &str, from: &str, to: &str) -> Violation {
        Violation::new(
            "LL000",
            rule,
            from,
            to,
            format!("`{from}` must not depend on `{to}`"),
        )
    }

    // -- ordering --

    #[test]
    fn report_sorts_by_rule_then_from_then_to() {
        let report = ViolationReport::new(vec![
            violation("z-rule", "A", "B"),
            violation("a-rule", "B", "A"),
            violation("a-rule", "A", "Z"),
            violation("a-rule", "A", "B"),
        ]);

        let order: Vec<_> = report
            .violations()
            .iter()
            .map(|v| (v.rule.as_str(), v.from.as_str(), v.to.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![
                ("a-rule", "A", "B"),
                ("a-rule", "A", "Z"),
                ("a-rule", "B", "A"),
                ("z-rule", "A", "B"),
            ]
        );
    }

    #[test]
    fn same_violations_in_any_order_build_equal_reports() {
        let a = ViolationReport::new(vec![
            violation("r", "A", "B"),
            violation("r", "B", "C"),
        ]);
        let b = ViolationReport::new(vec![
            violation("r", "B", "C"),
            violation("r", "A", "B"),
        ]);

        assert_eq!(a, b);
    }

    // -- rendering --

    #[test]
    fn render_text_empty_report() {
        assert_eq!(
            ViolationReport::empty().render_text(),
            "No layer violations found\n"
        );
    }

    #[test]
    fn render_text_lists_violations_and_summary() {
        let report = ViolationReport::new(vec![Violation::new(
            "LL002",
            "no-domain-to-infrastructure",
            "Domain.Order",
            "Infra.OrderRepo",
            "domain module `Domain.Order` must not depend on infrastructure module `Infra.OrderRepo`",
        )]);

        assert_eq!(
            report.render_text(),
            "LL002 no-domain-to-infrastructure: Domain.Order -> Infra.OrderRepo\n  \
             domain module `Domain.Order` must not depend on infrastructure module `Infra.OrderRepo`\n\
             \nFound 1 violation(s)\n"
        );
    }

    #[test]
    fn render_text_snapshot() {
        let report = ViolationReport::new(vec![
            Violation::new(
                "LL003",
                "no-application-to-infrastructure",
                "App.PlaceOrder",
                "Infra.Db",
                "application module `App.PlaceOrder` must not depend on infrastructure module `Infra.Db`",
            ),
            Violation::new(
                "LL001",
                "no-domain-to-application",
                "Domain.Order",
                "App.PlaceOrder",
                "domain module `Domain.Order` must not depend on application module `App.PlaceOrder`",
            ),
        ]);

        insta::assert_snapshot!(report.render_text(), @r"
LL001 no-domain-to-application: Domain.Order -> App.PlaceOrder
  domain module `Domain.Order` must not depend on application module `App.PlaceOrder`
LL003 no-application-to-infrastructure: App.PlaceOrder -> Infra.Db
  application module `App.PlaceOrder` must not depend on infrastructure module `Infra.Db`

Found 2 violation(s)
");
    }

    #[test]
    fn violation_display_is_compact() {
        let v = Violation::new("LL004", "no-bootstrap-dependency", "A", "Boot", "msg");

        assert_eq!(v.to_string(), "A -> Boot: [LL004] msg");
    }

    // -- serialization --

    #[test]
    fn report_serializes_violation_fields() {
        let report = ViolationReport::new(vec![violation("some-rule", "A", "B")]);

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["violations"][0]["rule"], "some-rule");
        assert_eq!(json["violations"][0]["from"], "A");
        assert_eq!(json["violations"][0]["to"], "B");
        assert_eq!(json["violations"][0]["code"], "LL000");
    }
}
