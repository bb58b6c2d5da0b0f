use crate::models::quiz::QuizSubmission;
use crate::models::scheme::{Scheme, SchemeResponse};

/// Display tag for schemes whose every constraint passed.
pub const TAG_ELIGIBLE: &str = "Eligible";
/// Display tag for fallback suggestions.
pub const TAG_FALLBACK: &str = "May be eligible - Check details";

/// Minimum number of results the engine tries to surface. When fewer
/// schemes match exactly, the remainder is backfilled from the catalog.
const MIN_RESULTS: usize = 3;

/// Outcome of evaluating a quiz submission against the catalog.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub eligible: Vec<SchemeResponse>,
    pub fallback: Vec<SchemeResponse>,
}

fn allows(accepted: &Option<Vec<String>>, value: &str) -> bool {
    match accepted {
        Some(values) => values.iter().any(|v| v == value),
        None => true,
    }
}

/// Whether a quiz submission satisfies every constrained attribute of a
/// scheme. Age bounds are inclusive; unconstrained attributes always pass.
pub fn check_eligibility(quiz: &QuizSubmission, scheme: &Scheme) -> bool {
    let rules = &scheme.eligibility;

    if rules.age_min.is_some_and(|min| quiz.age < min) {
        return false;
    }
    if rules.age_max.is_some_and(|max| quiz.age > max) {
        return false;
    }

    allows(&rules.gender, &quiz.gender)
        && allows(&rules.occupation, &quiz.occupation)
        && allows(&rules.category, &quiz.category)
        && allows(&rules.income, &quiz.income)
        && allows(&rules.area, &quiz.area)
        && allows(&rules.has_land, &quiz.has_land)
        && allows(&rules.is_disabled, &quiz.is_disabled)
}

/// Evaluate a submission against the catalog in definition order. If fewer
/// than three schemes match, non-matching schemes are appended as fallback
/// suggestions (in catalog order) until three suggestions exist or the
/// catalog is exhausted, so the result set is non-empty even for users who
/// satisfy no scheme exactly.
pub fn evaluate(quiz: &QuizSubmission, schemes: &[Scheme]) -> MatchOutcome {
    let mut eligible = Vec::new();
    for scheme in schemes {
        if check_eligibility(quiz, scheme) {
            eligible.push(scheme.to_response(Some(TAG_ELIGIBLE)));
        }
    }

    let mut fallback = Vec::new();
    if eligible.len() < MIN_RESULTS {
        for scheme in schemes {
            if eligible.iter().any(|s| s.id == scheme.id) {
                continue;
            }
            fallback.push(scheme.to_response(Some(TAG_FALLBACK)));
            if fallback.len() >= MIN_RESULTS {
                break;
            }
        }
    }

    MatchOutcome { eligible, fallback }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SchemeCatalog;

    fn quiz() -> QuizSubmission {
        QuizSubmission {
            age: 30,
            gender: "Male".to_string(),
            state: "Karnataka".to_string(),
            area: "Rural".to_string(),
            income: "Above ₹8,00,000".to_string(),
            occupation: "Salaried".to_string(),
            education: "Graduate".to_string(),
            category: "General".to_string(),
            has_land: "No".to_string(),
            is_disabled: "No".to_string(),
        }
    }

    #[test]
    fn test_unconstrained_attributes_always_pass() {
        let catalog = SchemeCatalog::load();
        // PM-KISAN constrains only occupation and has_land.
        let pm_kisan = catalog.get("scheme_3").unwrap();
        let mut q = quiz();
        q.occupation = "Farmer".to_string();
        q.has_land = "Yes".to_string();
        q.age = 99;
        assert!(check_eligibility(&q, pm_kisan));
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let catalog = SchemeCatalog::load();
        let pm_scholarship = catalog.get("scheme_1").unwrap();
        let mut q = quiz();
        q.occupation = "Student".to_string();
        q.income = "Below ₹1,00,000".to_string();

        q.age = 18;
        assert!(check_eligibility(&q, pm_scholarship));
        q.age = 25;
        assert!(check_eligibility(&q, pm_scholarship));
        q.age = 17;
        assert!(!check_eligibility(&q, pm_scholarship));
        q.age = 26;
        assert!(!check_eligibility(&q, pm_scholarship));
    }

    #[test]
    fn test_string_constraint_requires_exact_membership() {
        let catalog = SchemeCatalog::load();
        let post_matric = catalog.get("scheme_2").unwrap();
        let mut q = quiz();
        q.age = 20;
        q.occupation = "Student".to_string();
        q.income = "Below ₹1,00,000".to_string();

        q.category = "OBC".to_string();
        assert!(check_eligibility(&q, post_matric));
        q.category = "obc".to_string();
        assert!(!check_eligibility(&q, post_matric));
        q.category = "General".to_string();
        assert!(!check_eligibility(&q, post_matric));
    }

    #[test]
    fn test_student_scenario_matches_expected_schemes() {
        let catalog = SchemeCatalog::load();
        let q = QuizSubmission {
            age: 22,
            gender: "Female".to_string(),
            state: "Karnataka".to_string(),
            area: "Urban".to_string(),
            income: "₹1,00,000 – ₹3,00,000".to_string(),
            occupation: "Student".to_string(),
            education: "Undergraduate".to_string(),
            category: "OBC".to_string(),
            has_land: "No".to_string(),
            is_disabled: "No".to_string(),
        };

        let outcome = evaluate(&q, catalog.list());
        let ids: Vec<&str> = outcome.eligible.iter().map(|s| s.id.as_str()).collect();
        assert!(ids.contains(&"scheme_2"));
        assert!(ids.contains(&"scheme_9"));
        assert!(!ids.contains(&"scheme_3"));
        // More than three matches, so no fallback is surfaced.
        assert!(outcome.eligible.len() >= 3);
        assert!(outcome.fallback.is_empty());
        for scheme in &outcome.eligible {
            assert_eq!(scheme.eligibility_match.as_deref(), Some(TAG_ELIGIBLE));
        }
    }

    #[test]
    fn test_senior_citizen_scenario() {
        let catalog = SchemeCatalog::load();
        let mut q = quiz();
        q.age = 70;
        q.income = "Below ₹1,00,000".to_string();

        let outcome = evaluate(&q, catalog.list());
        let ids: Vec<&str> = outcome.eligible.iter().map(|s| s.id.as_str()).collect();
        assert!(ids.contains(&"scheme_5"));
    }

    #[test]
    fn test_no_match_backfills_three_fallbacks_in_catalog_order() {
        let catalog = SchemeCatalog::load();
        let mut q = quiz();
        q.age = 10;

        let outcome = evaluate(&q, catalog.list());
        assert!(outcome.eligible.is_empty());
        let ids: Vec<&str> = outcome.fallback.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["scheme_1", "scheme_2", "scheme_3"]);
        for scheme in &outcome.fallback {
            assert_eq!(scheme.eligibility_match.as_deref(), Some(TAG_FALLBACK));
        }
    }

    #[test]
    fn test_partial_match_tops_up_fallback() {
        let catalog = SchemeCatalog::load();
        // Senior citizen quiz matches scheme_4 and scheme_5 only.
        let mut q = quiz();
        q.age = 70;
        q.income = "Below ₹1,00,000".to_string();

        let outcome = evaluate(&q, catalog.list());
        assert_eq!(outcome.eligible.len(), 2);
        assert_eq!(outcome.fallback.len(), 3);
        // Fallback never repeats an eligible scheme.
        for fb in &outcome.fallback {
            assert!(outcome.eligible.iter().all(|e| e.id != fb.id));
        }
    }

    #[test]
    fn test_result_counts_bounded_by_catalog() {
        let catalog = SchemeCatalog::load();
        let outcome = evaluate(&quiz(), catalog.list());
        assert!(outcome.eligible.len() + outcome.fallback.len() <= catalog.len());
    }

    #[test]
    fn test_eligible_preserves_catalog_order() {
        let catalog = SchemeCatalog::load();
        let q = QuizSubmission {
            age: 22,
            gender: "Female".to_string(),
            state: "Karnataka".to_string(),
            area: "Urban".to_string(),
            income: "₹1,00,000 – ₹3,00,000".to_string(),
            occupation: "Student".to_string(),
            education: "Undergraduate".to_string(),
            category: "OBC".to_string(),
            has_land: "No".to_string(),
            is_disabled: "No".to_string(),
        };

        let outcome = evaluate(&q, catalog.list());
        let positions: Vec<usize> = outcome
            .eligible
            .iter()
            .map(|s| {
                catalog
                    .list()
                    .iter()
                    .position(|c| c.id == s.id)
                    .unwrap()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
