//! Category aggregation over the upstream payload.
//!
//! # Responsibilities
//! - Turn the upstream's grouped-by-category payload into per-category totals
//! - Preserve the order categories first appear in the payload
//!
//! # Design Decisions
//! - Pure function: no I/O, no mutation of the input, deterministic for a
//!   fixed input iteration order
//! - Grouping is presence-based: an empty (or non-array) group still yields
//!   a total of 0 rather than being dropped
//! - Only invoked on 2xx upstream responses; error payloads are passed
//!   through untouched by the caller

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One aggregated output item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: u64,
}

/// Shape of a successful upstream payload.
///
/// The todo service answers with an object keyed by category name, each
/// value the list of todos in that category. An ungrouped list of items,
/// each carrying its own `category` field, is accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DashboardPayload {
    Grouped(serde_json::Map<String, Value>),
    Items(Vec<Value>),
}

/// Count members per category.
///
/// Output order is the order each distinct category first appears in the
/// payload; no sorting is applied.
pub fn aggregate(payload: &DashboardPayload) -> Vec<CategoryTotal> {
    match payload {
        DashboardPayload::Grouped(groups) => groups
            .iter()
            .map(|(category, members)| CategoryTotal {
                category: category.clone(),
                total: members.as_array().map(|a| a.len() as u64).unwrap_or(0),
            })
            .collect(),
        DashboardPayload::Items(items) => {
            let mut totals: Vec<CategoryTotal> = Vec::new();
            for item in items {
                let Some(category) = item.get("category").and_then(Value::as_str) else {
                    continue;
                };
                match totals.iter_mut().find(|t| t.category == category) {
                    Some(entry) => entry.total += 1,
                    None => totals.push(CategoryTotal {
                        category: category.to_string(),
                        total: 1,
                    }),
                }
            }
            totals
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> DashboardPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_grouped_counts_and_keeps_empty_groups() {
        let payload = parse(json!({
            "Food": [{"name": "a"}, {"name": "b"}, {"name": "c"}],
            "Travel": []
        }));
        assert_eq!(
            aggregate(&payload),
            vec![
                CategoryTotal { category: "Food".into(), total: 3 },
                CategoryTotal { category: "Travel".into(), total: 0 },
            ]
        );
    }

    #[test]
    fn test_grouped_preserves_first_appearance_order() {
        let payload = parse(json!({
            "Zeta": [{"name": "z"}],
            "Alpha": [{"name": "a"}, {"name": "b"}]
        }));
        let totals = aggregate(&payload);
        // Insertion order, not lexicographic.
        assert_eq!(totals[0].category, "Zeta");
        assert_eq!(totals[1].category, "Alpha");
    }

    #[test]
    fn test_grouped_non_array_value_counts_zero() {
        let payload = parse(json!({ "Food": null, "Travel": [{"name": "t"}] }));
        assert_eq!(
            aggregate(&payload),
            vec![
                CategoryTotal { category: "Food".into(), total: 0 },
                CategoryTotal { category: "Travel".into(), total: 1 },
            ]
        );
    }

    #[test]
    fn test_empty_object_yields_empty_sequence() {
        let payload = parse(json!({}));
        assert!(aggregate(&payload).is_empty());
    }

    #[test]
    fn test_items_grouped_by_first_appearance() {
        let payload = parse(json!([
            {"name": "a", "category": "Food"},
            {"name": "b", "category": "Travel"},
            {"name": "c", "category": "Food"},
        ]));
        assert_eq!(
            aggregate(&payload),
            vec![
                CategoryTotal { category: "Food".into(), total: 2 },
                CategoryTotal { category: "Travel".into(), total: 1 },
            ]
        );
    }

    #[test]
    fn test_items_without_category_are_skipped() {
        let payload = parse(json!([
            {"name": "a", "category": "Food"},
            {"name": "b"},
            {"name": "c", "category": 7},
        ]));
        assert_eq!(
            aggregate(&payload),
            vec![CategoryTotal { category: "Food".into(), total: 1 }]
        );
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let payload = parse(json!({
            "Food": [{"name": "a"}],
            "Travel": [{"name": "b"}, {"name": "c"}]
        }));
        assert_eq!(aggregate(&payload), aggregate(&payload));
    }

    #[test]
    fn test_totals_serialize_to_expected_shape() {
        let total = CategoryTotal { category: "Food".into(), total: 3 };
        assert_eq!(
            serde_json::to_value(&total).unwrap(),
            json!({"category": "Food", "total": 3})
        );
    }
}
