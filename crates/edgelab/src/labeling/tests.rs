//! Unit and property tests for the labeling search and its analyses.

use super::*;
use crate::error::LabelingError;
use crate::extended_four_star;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

fn set(labels: &[Label]) -> LabelSet {
    labels.iter().copied().collect()
}

fn no_constraints() -> AllowedLabels {
    AllowedLabels::new()
}

#[test]
fn line_graph_of_four_star() {
    let g = LineGraph::new(&extended_four_star());
    assert_eq!(g.direct[0], vec![1, 2, 3, 4]);
    assert_eq!(g.direct[1], vec![0, 2, 3, 5]);
    assert_eq!(g.direct[4], vec![0]);
    assert_eq!(g.square[0], vec![5, 6, 7]);
    assert_eq!(g.square[4], vec![1, 2, 3]);
    // leaves of different arms are three edges apart
    assert!(!g.square[4].contains(&5));
}

#[test]
fn squared_adjacency_deduplicates() {
    // Triangle plus a pendant: (2,3) reaches (0,1) through both (1,2) and (0,2).
    let es = edges(&[(0, 1), (1, 2), (0, 2), (2, 3)]);
    let g = LineGraph::new(&es);
    assert_eq!(g.direct[3], vec![1, 2]);
    assert_eq!(g.square[3], vec![0]);
    assert_eq!(g.square[0], vec![3]);
}

#[test]
fn satisfies_ignores_unlabeled_neighbours() {
    let adj = vec![vec![1, 2], vec![0], vec![0]];
    assert!(satisfies(&adj, &[Some(1), None, None], 5, 0));
    assert!(satisfies(&adj, &[Some(1), Some(3), None], 2, 0));
    assert!(!satisfies(&adj, &[Some(1), Some(3), Some(2)], 2, 0));
    // threshold zero never rejects
    assert!(satisfies(&adj, &[Some(1), Some(1), Some(1)], 0, 0));
}

#[test]
fn four_star_has_exactly_two_labelings() {
    let sols = labelings(&extended_four_star(), LabelParams::new(0, 1, 2), &no_constraints())
        .unwrap();
    assert_eq!(
        sols,
        vec![vec![0, 0, 0, 0, 1, 1, 1, 1], vec![1, 1, 1, 1, 0, 0, 0, 0]]
    );
}

#[test]
fn four_star_possibilities_reduced_and_unreduced() {
    let es = extended_four_star();
    let params = LabelParams::new(0, 1, 2);
    let reduced = possibilities(&es, params, SearchCfg::default(), &no_constraints()).unwrap();
    let expected: PossibilityTable = [0, 0, 0, 0, 1, 1, 1, 1].iter().map(|&l| set(&[l])).collect();
    assert_eq!(reduced, expected);

    let full = possibilities(
        &es,
        params,
        SearchCfg {
            remove_symmetry: false,
        },
        &no_constraints(),
    )
    .unwrap();
    assert_eq!(full, vec![set(&[0, 1]); 8]);
}

#[test]
fn pinned_edge_disables_symmetry_reduction() {
    let es = extended_four_star();
    let params = LabelParams::new(0, 1, 2);
    let allowed = AllowedLabels::from([(Edge(0, 1), set(&[1]))]);
    let reduced = possibilities(&es, params, SearchCfg::default(), &allowed).unwrap();
    let unreduced = possibilities(
        &es,
        params,
        SearchCfg {
            remove_symmetry: false,
        },
        &allowed,
    )
    .unwrap();
    assert_eq!(reduced, unreduced);
    let expected: PossibilityTable = [1, 1, 1, 1, 0, 0, 0, 0].iter().map(|&l| set(&[l])).collect();
    assert_eq!(reduced, expected);
}

#[test]
fn constraint_keys_match_either_orientation() {
    let es = extended_four_star();
    let params = LabelParams::new(0, 1, 2);
    let forward = AllowedLabels::from([(Edge(0, 1), set(&[1]))]);
    let reversed = AllowedLabels::from([(Edge(1, 0), set(&[1]))]);
    assert_eq!(
        labelings(&es, params, &forward).unwrap(),
        labelings(&es, params, &reversed).unwrap()
    );
}

#[test]
fn range_branch_on_four_star_leaves() {
    let res = range_branch(
        &extended_four_star(),
        LabelParams::new(0, 1, 2),
        Edge(3, 7),
        Edge(4, 8),
    )
    .unwrap();
    let expected = BTreeMap::from([(0, set(&[0])), (1, set(&[1]))]);
    assert_eq!(res, expected);
}

#[test]
fn range_branch_omits_labels_without_extension() {
    // Path of two edges, labels 0..3, adjacent edges at distance >= 2:
    // the middle label 1 fits nowhere.
    let es = edges(&[(0, 1), (1, 2)]);
    let res = range_branch(&es, LabelParams::new(2, 0, 3), Edge(0, 1), Edge(1, 2)).unwrap();
    let expected = BTreeMap::from([(0, set(&[2])), (2, set(&[0]))]);
    assert_eq!(res, expected);
}

#[test]
fn single_label_with_zero_thresholds_forces_zero() {
    let es = extended_four_star();
    let table = possibilities(
        &es,
        LabelParams::new(0, 0, 1),
        SearchCfg::default(),
        &no_constraints(),
    )
    .unwrap();
    assert_eq!(table, vec![set(&[0]); es.len()]);
}

#[test]
fn infeasible_instance_yields_empty_sets() {
    let es = edges(&[(0, 1), (1, 2)]);
    let params = LabelParams::new(1, 0, 1);
    assert!(labelings(&es, params, &no_constraints()).unwrap().is_empty());
    let table = possibilities(&es, params, SearchCfg::default(), &no_constraints()).unwrap();
    assert_eq!(table, vec![LabelSet::new(); 2]);
}

#[test]
fn empty_edge_list_has_one_empty_labeling() {
    let sols = labelings(&[], LabelParams::new(1, 1, 3), &no_constraints()).unwrap();
    assert_eq!(sols, vec![Vec::<Label>::new()]);
}

#[test]
fn single_edge_is_cut_to_lower_half() {
    let es = edges(&[(0, 1)]);
    let table = possibilities(
        &es,
        LabelParams::new(0, 0, 3),
        SearchCfg::default(),
        &no_constraints(),
    )
    .unwrap();
    assert_eq!(table, vec![set(&[0, 1])]);
}

#[test]
fn search_stats_count_nodes_and_prunes() {
    let es = edges(&[(0, 1), (1, 2)]);
    let g = LineGraph::new(&es);
    let (sols, stats) = search_with_stats(&g, LabelParams::new(2, 0, 3), &IndexedAllowed::new());
    assert_eq!(sols, vec![vec![0, 2], vec![2, 0]]);
    assert_eq!(
        stats,
        SearchStats {
            nodes: 12,
            pruned: 7,
            solutions: 2,
        }
    );
}

#[test]
fn pivot_prefers_smallest_then_first() {
    let table = vec![set(&[0]), set(&[0, 1, 2]), set(&[0, 1]), set(&[1, 2])];
    assert_eq!(pivot_edge(&table), Some(2));
    assert_eq!(pivot_edge(&vec![set(&[0]), set(&[1])]), None);
    assert_eq!(pivot_edge(&Vec::new()), None);
}

#[test]
fn all_forced_table_is_not_reduced() {
    // Forced to the upper label: a reduction would wrongly drop the only labeling.
    let es = edges(&[(0, 1)]);
    let sols = vec![vec![1]];
    let table = project_with_symmetry_reduction(&es, &sols, LabelParams::new(0, 0, 2));
    assert_eq!(table, vec![set(&[1])]);
}

#[test]
fn reduction_with_zero_labels_does_not_underflow() {
    assert_eq!(LabelParams::new(0, 0, 0).lower_half_max(), 0);
    assert_eq!(LabelParams::new(0, 0, 4).lower_half_max(), 1);
    // Reachable without validation through the public projection helper.
    let es = edges(&[(0, 1)]);
    let sols = vec![vec![0], vec![1]];
    let table = project_with_symmetry_reduction(&es, &sols, LabelParams::new(0, 0, 0));
    assert_eq!(table, vec![set(&[0])]);
}

#[test]
fn invalid_inputs_fail_fast() {
    let es = extended_four_star();
    assert!(matches!(
        labelings(&es, LabelParams::new(0, 1, 0), &no_constraints()),
        Err(LabelingError::InvalidParams { .. })
    ));
    let unknown = AllowedLabels::from([(Edge(5, 6), set(&[0]))]);
    assert_eq!(
        labelings(&es, LabelParams::new(0, 1, 2), &unknown),
        Err(LabelingError::UnknownEdge { edge: Edge(5, 6) })
    );
    let out_of_range = AllowedLabels::from([(Edge(0, 1), set(&[2]))]);
    assert!(matches!(
        possibilities(&es, LabelParams::new(0, 1, 2), SearchCfg::default(), &out_of_range),
        Err(LabelingError::InvalidParams { .. })
    ));
    let looped = edges(&[(0, 1), (2, 2)]);
    assert_eq!(
        labelings(&looped, LabelParams::new(0, 1, 2), &no_constraints()),
        Err(LabelingError::SelfLoop {
            index: 1,
            edge: Edge(2, 2)
        })
    );
    assert_eq!(
        range_branch(&es, LabelParams::new(0, 1, 2), Edge(0, 1), Edge(7, 9)),
        Err(LabelingError::UnknownEdge { edge: Edge(7, 9) })
    );
}

#[test]
fn label_set_formatting() {
    assert_eq!(format_label_set(&set(&[0, 1])), "{0, 1}");
    assert_eq!(format_label_set(&LabelSet::new()), "{}");
}

// ---- property tests --------------------------------------------------------

fn arb_edges() -> impl Strategy<Value = Vec<Edge>> {
    prop::collection::vec(
        (0usize..5, 1usize..4).prop_map(|(u, d)| Edge(u, u + d)),
        0..7,
    )
}

fn arb_params() -> impl Strategy<Value = LabelParams> {
    (0usize..3, 0usize..3, 1usize..4).prop_map(|(a, b, k)| LabelParams::new(a, b, k))
}

fn at_distance_two(es: &[Edge], i: usize, j: usize) -> bool {
    i != j
        && !es[i].shares_vertex(&es[j])
        && (0..es.len())
            .any(|m| m != i && m != j && es[m].shares_vertex(&es[i]) && es[m].shares_vertex(&es[j]))
}

fn is_valid(es: &[Edge], params: LabelParams, s: &[Label]) -> bool {
    (0..es.len()).all(|i| {
        (0..es.len()).all(|j| {
            if i == j {
                true
            } else if es[i].shares_vertex(&es[j]) {
                s[i].abs_diff(s[j]) >= params.a
            } else if at_distance_two(es, i, j) {
                s[i].abs_diff(s[j]) >= params.b
            } else {
                true
            }
        })
    })
}

/// Every valid labeling in lexicographic order, by plain enumeration.
fn brute_force(es: &[Edge], params: LabelParams) -> Vec<Labeling> {
    let n = es.len();
    let total = params.k.pow(n as u32);
    (0..total)
        .map(|code| {
            (0..n)
                .map(|i| (code / params.k.pow((n - 1 - i) as u32)) % params.k)
                .collect::<Labeling>()
        })
        .filter(|s| is_valid(es, params, s))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn search_matches_brute_force(es in arb_edges(), params in arb_params()) {
        let sols = labelings(&es, params, &no_constraints()).unwrap();
        for s in &sols {
            prop_assert!(is_valid(&es, params, s));
        }
        prop_assert_eq!(sols, brute_force(&es, params));
    }

    #[test]
    fn squared_adjacency_is_symmetric_and_disjoint(es in arb_edges()) {
        let g = LineGraph::new(&es);
        for (i, sq) in g.square.iter().enumerate() {
            prop_assert!(!sq.contains(&i));
            for &j in sq {
                prop_assert!(!g.direct[i].contains(&j));
                prop_assert!(g.square[j].contains(&i));
                prop_assert!(at_distance_two(&es, i, j));
            }
        }
    }

    #[test]
    fn reduction_only_removes_labels(es in arb_edges(), params in arb_params()) {
        let full = possibilities(&es, params, SearchCfg { remove_symmetry: false }, &no_constraints()).unwrap();
        let reduced = possibilities(&es, params, SearchCfg::default(), &no_constraints()).unwrap();
        prop_assert_eq!(full.len(), es.len());
        for (r, f) in reduced.iter().zip(&full) {
            prop_assert!(r.is_subset(f));
            prop_assert!(f.iter().all(|&l| l < params.k));
        }
    }

    #[test]
    fn projection_is_idempotent(es in arb_edges(), params in arb_params()) {
        let sols = labelings(&es, params, &no_constraints()).unwrap();
        prop_assert_eq!(project(&es, &sols), project(&es, &sols));
    }

    #[test]
    fn pinned_queries_skip_reduction(es in arb_edges(), params in arb_params()) {
        prop_assume!(!es.is_empty());
        let allowed = AllowedLabels::from([(es[0], (0..params.k).collect::<LabelSet>())]);
        let reduced = possibilities(&es, params, SearchCfg::default(), &allowed).unwrap();
        let plain = possibilities(&es, params, SearchCfg { remove_symmetry: false }, &allowed).unwrap();
        prop_assert_eq!(reduced, plain);
    }

    #[test]
    fn range_branch_on_itself_is_identity(es in arb_edges(), params in arb_params()) {
        prop_assume!(!es.is_empty());
        let e = es[es.len() - 1];
        let res = range_branch(&es, params, e, e).unwrap();
        for (label, possible) in res {
            prop_assert_eq!(possible, set(&[label]));
        }
    }
}
