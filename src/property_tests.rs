//! Property-based tests for the aggregation functions

#[cfg(test)]
mod tests {
    use crate::activity::host_percentages;
    use crate::salary::{department_averages, rank_departments};
    use proptest::prelude::*;

    fn departments_strategy() -> impl Strategy<Value = Vec<(String, Vec<(String, f64)>)>> {
        prop::collection::vec(
            (
                "[A-Z][a-z]{2,8}",
                prop::collection::vec(("[a-z]{3,6}", 0.0f64..100_000.0), 0..6),
            ),
            0..12,
        )
    }

    // Property test: lowest three are bounded and non-decreasing
    proptest! {
        #[test]
        fn test_lowest_three_bounded_and_sorted(
            departments in departments_strategy(),
            min_salary in prop::option::of(0.0f64..50_000.0),
        ) {
            let non_empty = departments.iter().filter(|(_, e)| !e.is_empty()).count();
            let averages = department_averages(departments.clone(), min_salary);
            let ranking = rank_departments(departments, min_salary);

            prop_assert!(ranking.lowest.len() <= 3);
            prop_assert!(ranking.lowest.len() <= non_empty);
            prop_assert_eq!(ranking.lowest.len(), ranking.highest.len());
            prop_assert_eq!(averages.len(), non_empty);

            for pair in averages.windows(2) {
                prop_assert!(pair[0].average <= pair[1].average);
            }
        }
    }

    // Property test: highest three mirror the tail of the ascending order
    proptest! {
        #[test]
        fn test_highest_three_are_reversed_tail(departments in departments_strategy()) {
            let ordered: Vec<String> = department_averages(departments.clone(), None)
                .into_iter()
                .map(|entry| entry.department)
                .collect();
            let ranking = rank_departments(departments, None);

            let expected: Vec<String> = ordered.iter().rev().take(3).cloned().collect();
            prop_assert_eq!(ranking.highest, expected);
        }
    }

    // Property test: host shares add up to 100
    proptest! {
        #[test]
        fn test_host_percentages_sum_to_hundred(
            hosts in prop::collection::vec("(gmail\\.com|mail\\.ru|yahoo\\.com|[a-z]{1,5}\\.org)", 1..40),
        ) {
            let percentages = host_percentages(&hosts);

            let total: f64 = percentages
                .values()
                .map(|value| {
                    value
                        .as_str()
                        .and_then(|s| s.strip_suffix(" %"))
                        .and_then(|s| s.parse::<f64>().ok())
                        .unwrap_or(f64::NAN)
                })
                .sum();

            prop_assert!((total - 100.0).abs() < 1e-6);
        }
    }
}
