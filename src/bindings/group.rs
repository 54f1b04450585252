//! Category grouping for display.

use super::Binding;
use std::collections::BTreeMap;

/// Bindings sharing one category, in their original relative order.
///
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub bindings: Vec<&'a Binding>,
}

/// Stable partition of `bindings` by category. Groups are ordered by
/// category in ascending lexicographic order.
///
pub fn group_by_category(bindings: &[Binding]) -> Vec<CategoryGroup<'_>> {
    let mut groups: BTreeMap<&str, Vec<&Binding>> = BTreeMap::new();
    for binding in bindings {
        groups
            .entry(binding.category.as_str())
            .or_default()
            .push(binding);
    }
    groups
        .into_iter()
        .map(|(category, bindings)| CategoryGroup { category, bindings })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn groups_sorted_by_category() {
        let bindings = Binding::from_table(&[
            ("1", "a", "Workspaces"),
            ("2", "b", "Applications"),
            ("3", "c", "System"),
            ("4", "d", "Applications"),
        ]);
        let groups = group_by_category(&bindings);
        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Applications", "System", "Workspaces"]);
        let apps: Vec<&str> = groups[0].bindings.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(apps, vec!["2", "4"]);
    }

    #[test]
    fn empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn duplicates_kept_as_separate_rows() {
        let bindings = Binding::from_table(&[("gd", "Go", "Nav"), ("gd", "Go", "Nav")]);
        let groups = group_by_category(&bindings);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].bindings.len(), 2);
    }

    #[test]
    fn stable_partition() {
        let categories = ["Panes", "Applications", "System", "Tabs"];
        let bindings: Vec<Binding> = (0..60)
            .map(|i| Binding {
                category: categories[i % categories.len()].to_string(),
                ..Faker.fake::<Binding>()
            })
            .collect();
        let groups = group_by_category(&bindings);

        // Every record appears exactly once
        let total: usize = groups.iter().map(|g| g.bindings.len()).sum();
        assert_eq!(total, bindings.len());

        // Category order is ascending
        assert!(groups.windows(2).all(|w| w[0].category < w[1].category));

        // Relative order within each group matches the input
        for group in &groups {
            let positions: Vec<usize> = group
                .bindings
                .iter()
                .filter_map(|b| bindings.iter().position(|x| std::ptr::eq(x, *b)))
                .collect();
            assert_eq!(positions.len(), group.bindings.len());
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
