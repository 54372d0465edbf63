//! Apriori candidate generation: joining frequent (k-1)-itemsets into
//! k-itemset candidates.

use basket_core::types::FxHashSet;

use super::IdSet;

/// Join frequent (k-1)-itemsets into k-itemset candidates.
///
/// Iterates all unordered pairs of the previous level's itemsets (each
/// already in canonical sorted form). For k = 2 every pair joins; for
/// k > 2 a pair joins only when the first k-2 items agree (the classic
/// prefix-equality prune — every subset of a frequent itemset was itself
/// frequent at the prior level, so the prune cannot hide a truly frequent
/// candidate). The sorted union is accepted when its size is exactly `k`
/// and it has not been produced before.
pub fn generate_candidates(previous: &[IdSet], k: usize) -> Vec<IdSet> {
    debug_assert!(k >= 2);

    let mut seen: FxHashSet<IdSet> = FxHashSet::default();
    let mut candidates = Vec::new();

    for i in 0..previous.len() {
        for j in (i + 1)..previous.len() {
            let a = &previous[i];
            let b = &previous[j];

            if k > 2 && a[..k - 2] != b[..k - 2] {
                continue;
            }

            let union = sorted_union(a, b);
            if union.len() == k && seen.insert(union.clone()) {
                candidates.push(union);
            }
        }
    }

    candidates
}

/// Merge two sorted id sets into their sorted, deduplicated union.
fn sorted_union(a: &IdSet, b: &IdSet) -> IdSet {
    let mut union = IdSet::new();
    let (mut x, mut y) = (0, 0);
    while x < a.len() && y < b.len() {
        match a[x].cmp(&b[y]) {
            std::cmp::Ordering::Less => {
                union.push(a[x]);
                x += 1;
            }
            std::cmp::Ordering::Greater => {
                union.push(b[y]);
                y += 1;
            }
            std::cmp::Ordering::Equal => {
                union.push(a[x]);
                x += 1;
                y += 1;
            }
        }
    }
    union.extend_from_slice(&a[x..]);
    union.extend_from_slice(&b[y..]);
    union
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::types::ItemId;

    fn ids(raw: &[u32]) -> IdSet {
        raw.iter().map(|&i| ItemId(i)).collect()
    }

    #[test]
    fn test_level_two_joins_all_pairs() {
        let singles = vec![ids(&[0]), ids(&[1]), ids(&[2])];
        let candidates = generate_candidates(&singles, 2);
        assert_eq!(
            candidates,
            vec![ids(&[0, 1]), ids(&[0, 2]), ids(&[1, 2])]
        );
    }

    #[test]
    fn test_level_three_prefix_prune() {
        let pairs = vec![ids(&[0, 1]), ids(&[0, 2]), ids(&[1, 2])];
        // Only {0,1} + {0,2} share the length-1 prefix; {0,1,2} results.
        let candidates = generate_candidates(&pairs, 3);
        assert_eq!(candidates, vec![ids(&[0, 1, 2])]);
    }

    #[test]
    fn test_oversized_unions_rejected() {
        let pairs = vec![ids(&[0, 1]), ids(&[2, 3])];
        // Union would have 4 items; no prefix match either way.
        assert!(generate_candidates(&pairs, 3).is_empty());
    }

    #[test]
    fn test_level_four_prefix_join() {
        let triples = vec![ids(&[0, 1, 2]), ids(&[0, 1, 3]), ids(&[0, 2, 3]), ids(&[1, 2, 3])];
        let candidates = generate_candidates(&triples, 4);
        // {0,1,2}+{0,1,3} is the only prefix-matching join.
        assert_eq!(candidates, vec![ids(&[0, 1, 2, 3])]);
    }

    #[test]
    fn test_duplicate_previous_itemsets_do_not_duplicate_candidates() {
        let singles = vec![ids(&[0]), ids(&[1]), ids(&[0])];
        let candidates = generate_candidates(&singles, 2);
        assert_eq!(candidates, vec![ids(&[0, 1])]);
    }

    #[test]
    fn test_empty_previous_level() {
        assert!(generate_candidates(&[], 2).is_empty());
    }

    #[test]
    fn test_sorted_union_merges() {
        let union = sorted_union(&ids(&[0, 2]), &ids(&[1, 2]));
        assert_eq!(union, ids(&[0, 1, 2]));
    }
}
