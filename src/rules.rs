use crate::model::pollutants::{Pollutant, PollutantVector};

// ---------------------------------------------------------------------------
// Threshold rules
// ---------------------------------------------------------------------------

/// How a pollutant level violates its limit.
///
/// The drinkable/usable standards use inclusive upper limits (a level equal to
/// the limit already violates); the legacy general-safety table uses strict
/// comparisons. Oxygen is the one lower-bounded pollutant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Bad if value ≥ limit.
    AtOrAbove(f64),
    /// Bad if value > limit.
    Above(f64),
    /// Bad if value < limit.
    Below(f64),
}

/// One (pollutant, bound) pair within a rule set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule {
    pub pollutant: Pollutant,
    pub bound: Bound,
}

impl ThresholdRule {
    pub fn violated_by(&self, value: f64) -> bool {
        match self.bound {
            Bound::AtOrAbove(limit) => value >= limit,
            Bound::Above(limit) => value > limit,
            Bound::Below(limit) => value < limit,
        }
    }

    /// Human-readable issue text, e.g. `"NH4 too high"` or `"O2 below 6 mg/L"`.
    pub fn description(&self) -> String {
        match self.bound {
            Bound::Below(limit) => format!("{} below {} mg/L", self.pollutant, limit),
            Bound::AtOrAbove(_) | Bound::Above(_) => format!("{} too high", self.pollutant),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule sets and assessment
// ---------------------------------------------------------------------------

/// A named safety standard: the list of threshold rules it checks.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub name: &'static str,
    rules: Vec<ThresholdRule>,
}

/// Outcome of evaluating one rule set against one pollutant vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Descriptions of every violated rule, in rule order.
    pub issues: Vec<String>,
}

impl Assessment {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

impl RuleSet {
    /// Evaluate every rule against the given levels. Pure: no short-circuiting,
    /// issues accumulate in rule order.
    pub fn evaluate(&self, levels: &PollutantVector) -> Assessment {
        let issues = self
            .rules
            .iter()
            .filter(|rule| rule.violated_by(levels.get(rule.pollutant)))
            .map(ThresholdRule::description)
            .collect();
        Assessment { issues }
    }
}

fn rule(pollutant: Pollutant, bound: Bound) -> ThresholdRule {
    ThresholdRule { pollutant, bound }
}

/// Strictest standard: water fit for direct human consumption.
pub fn drinkable() -> RuleSet {
    RuleSet {
        name: "Drinkable",
        rules: vec![
            rule(Pollutant::O2, Bound::Below(6.0)),
            rule(Pollutant::Nh4, Bound::AtOrAbove(0.5)),
            rule(Pollutant::Bsk5, Bound::AtOrAbove(3.0)),
            rule(Pollutant::No3, Bound::AtOrAbove(50.0)),
            rule(Pollutant::No2, Bound::AtOrAbove(1.0)),
        ],
    }
}

/// Looser standard: water fit for washing and irrigation. Uniformly more
/// permissive than [`drinkable`] on every shared pollutant; BSK5 is not checked.
pub fn usable() -> RuleSet {
    RuleSet {
        name: "Usable",
        rules: vec![
            rule(Pollutant::O2, Bound::Below(4.0)),
            rule(Pollutant::Nh4, Bound::AtOrAbove(1.0)),
            rule(Pollutant::No3, Bound::AtOrAbove(100.0)),
            rule(Pollutant::No2, Bound::AtOrAbove(2.0)),
        ],
    }
}

/// Legacy general-use table from an earlier revision of the standards. Covers
/// all nine pollutants with strict comparisons; kept as its own named set
/// rather than folded into Drinkable/Usable.
pub fn general_safety() -> RuleSet {
    RuleSet {
        name: "General safety",
        rules: vec![
            rule(Pollutant::Nh4, Bound::Above(1.5)),
            rule(Pollutant::Bsk5, Bound::Above(5.0)),
            rule(Pollutant::Suspended, Bound::Above(10.0)),
            rule(Pollutant::O2, Bound::Below(5.0)),
            rule(Pollutant::No3, Bound::Above(50.0)),
            rule(Pollutant::No2, Bound::Above(3.0)),
            rule(Pollutant::So4, Bound::Above(250.0)),
            rule(Pollutant::Po4, Bound::Above(0.5)),
            rule(Pollutant::Cl, Bound::Above(250.0)),
        ],
    }
}

/// All built-in rule sets, strictest first.
pub fn builtin_sets() -> Vec<RuleSet> {
    vec![drinkable(), usable(), general_safety()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(values: [f64; 9]) -> PollutantVector {
        PollutantVector::from_array(values)
    }

    #[test]
    fn low_oxygen_fails_drinkable_but_passes_usable() {
        // NH4, BSK5, Suspended, O2, NO3, NO2, SO4, PO4, CL
        let v = levels([0.4, 2.5, 10.0, 5.0, 10.0, 0.5, 100.0, 1.0, 120.0]);

        let d = drinkable().evaluate(&v);
        assert!(!d.passed());
        assert_eq!(d.issues, vec!["O2 below 6 mg/L".to_string()]);

        let u = usable().evaluate(&v);
        assert!(u.passed());
        assert!(u.issues.is_empty());
    }

    #[test]
    fn high_ammonium_fails_drinkable_but_passes_usable() {
        let v = levels([0.6, 2.0, 5.0, 7.0, 10.0, 0.5, 50.0, 0.2, 50.0]);

        let d = drinkable().evaluate(&v);
        assert_eq!(d.issues, vec!["NH4 too high".to_string()]);

        assert!(usable().evaluate(&v).passed());
    }

    #[test]
    fn issues_accumulate_in_rule_order() {
        let v = levels([0.9, 4.0, 0.0, 2.0, 60.0, 1.5, 0.0, 0.0, 0.0]);
        let d = drinkable().evaluate(&v);
        assert_eq!(
            d.issues,
            vec![
                "O2 below 6 mg/L",
                "NH4 too high",
                "BSK5 too high",
                "NO3 too high",
                "NO2 too high",
            ]
        );
    }

    #[test]
    fn evaluation_is_pure() {
        let v = levels([0.6, 2.0, 5.0, 7.0, 10.0, 0.5, 50.0, 0.2, 50.0]);
        let set = drinkable();
        assert_eq!(set.evaluate(&v), set.evaluate(&v));
    }

    #[test]
    fn drinkable_upper_limits_are_inclusive() {
        let mut v = levels([0.0, 0.0, 0.0, 8.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        v.nh4 = 0.5;
        assert_eq!(drinkable().evaluate(&v).issues, vec!["NH4 too high"]);
        v.nh4 = 0.49;
        assert!(drinkable().evaluate(&v).passed());

        v.no2 = 1.0;
        assert!(!drinkable().evaluate(&v).passed());
    }

    #[test]
    fn general_safety_limits_are_strict() {
        let mut v = levels([1.5, 5.0, 10.0, 5.0, 50.0, 3.0, 250.0, 0.5, 250.0]);
        assert!(general_safety().evaluate(&v).passed());
        v.nh4 = 1.51;
        assert_eq!(general_safety().evaluate(&v).issues, vec!["NH4 too high"]);
        v.nh4 = 1.5;
        v.o2 = 4.99;
        assert_eq!(
            general_safety().evaluate(&v).issues,
            vec!["O2 below 5 mg/L"]
        );
    }

    #[test]
    fn drinkable_pass_implies_usable_pass() {
        // Sweep a grid around the drinkable limits; wherever drinkable passes,
        // usable must too (its limits are uniformly looser, BSK5 unchecked).
        for nh4 in [0.0, 0.49, 0.5, 0.99, 1.0] {
            for o2 in [3.9, 4.0, 5.9, 6.0, 8.0] {
                for no2 in [0.5, 0.99, 1.0, 1.9, 2.0] {
                    let v = levels([nh4, 2.0, 5.0, o2, 10.0, no2, 50.0, 0.2, 50.0]);
                    if drinkable().evaluate(&v).passed() {
                        assert!(
                            usable().evaluate(&v).passed(),
                            "drinkable passed but usable failed at {v:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn builtin_sets_order_and_names() {
        let names: Vec<&str> = builtin_sets().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Drinkable", "Usable", "General safety"]);
    }
}
