use linkrank::{
    CsrGraph, GraphBuilder, IterationLog, Page, PageRankAnalyzer, PageRankConfig,
    StandardPageRank,
};
use proptest::prelude::*;

/// Pages p0..p{n-1}; edge targets >= n point outside the collection.
fn pages_from_edges(n: usize, edges: &[(usize, usize)]) -> Vec<Page> {
    (0..n)
        .map(|u| {
            let links = edges
                .iter()
                .filter(|(from, _)| *from == u)
                .map(|(_, to)| format!("p{to}"));
            Page::with_links(format!("p{u}"), links)
        })
        .collect()
}

fn assert_prob_like(xs: &[f64]) {
    assert!(!xs.is_empty());
    for &x in xs {
        assert!(x.is_finite(), "non-finite score: {x}");
        assert!(x >= 0.0, "negative score: {x}");
    }
    let s: f64 = xs.iter().sum();
    assert!((s - 1.0).abs() <= 1e-9, "sum={s} not ~1");
}

proptest! {
    #[test]
    fn prop_graph_is_self_contained(n in 1usize..12, edges in proptest::collection::vec((0usize..12, 0usize..16), 0..60)) {
        let pages = pages_from_edges(n, &edges);
        let adjacency = GraphBuilder::from_pages(&pages).adjacency();

        prop_assert_eq!(adjacency.len(), n);
        for (page, links) in &adjacency {
            prop_assert!(!links.contains(page), "self-loop on {}", page);
            for target in links {
                prop_assert!(adjacency.contains_key(target), "external link {}", target);
            }
        }
    }

    #[test]
    fn prop_mass_conserved_every_iteration(
        n in 1usize..12,
        edges in proptest::collection::vec((0usize..12, 0usize..16), 0..60),
        decay in 0.0f64..=1.0,
    ) {
        let pages = pages_from_edges(n, &edges);
        let graph = CsrGraph::from_builder(&GraphBuilder::from_pages(&pages));
        let mut log = IterationLog::new();
        let result = StandardPageRank::new()
            .with_decay(decay)
            .with_limit(30)
            .run_observed(&graph, &mut log);

        prop_assert!(log.max_mass_error() < 1e-9, "mass error {}", log.max_mass_error());
        prop_assert!(result.scores.iter().all(|x| *x >= 0.0));
    }

    #[test]
    fn prop_input_order_irrelevant(n in 1usize..12, edges in proptest::collection::vec((0usize..12, 0usize..16), 0..60), shift in 0usize..12) {
        let pages = pages_from_edges(n, &edges);
        let mut shuffled = pages.clone();
        shuffled.rotate_left(shift % n);
        shuffled.reverse();

        let config = PageRankConfig::default();
        let a = PageRankAnalyzer::new(&pages, &config).unwrap();
        let b = PageRankAnalyzer::new(&shuffled, &config).unwrap();

        for page in &pages {
            prop_assert_eq!(a.score(&page.id).unwrap().to_bits(), b.score(&page.id).unwrap().to_bits());
        }
        prop_assert_eq!(a.iterations(), b.iterations());
    }

    #[test]
    fn prop_extra_iterations_after_convergence_change_nothing(n in 1usize..12, edges in proptest::collection::vec((0usize..12, 0usize..16), 0..60), extra in 1usize..20) {
        let pages = pages_from_edges(n, &edges);
        let graph = CsrGraph::from_builder(&GraphBuilder::from_pages(&pages));
        let limit = 50;

        let short = StandardPageRank::new().with_limit(limit).run(&graph);
        prop_assume!(short.converged);

        let long = StandardPageRank::new().with_limit(limit + extra).run(&graph);
        prop_assert_eq!(short, long);
    }

    #[test]
    fn prop_zero_decay_is_uniform(n in 1usize..12, edges in proptest::collection::vec((0usize..12, 0usize..16), 0..60)) {
        let pages = pages_from_edges(n, &edges);
        let config = PageRankConfig::default().with_decay(0.0);
        let analyzer = PageRankAnalyzer::new(&pages, &config).unwrap();

        prop_assert!(analyzer.converged());
        prop_assert_eq!(analyzer.iterations(), 1);
        for page in &pages {
            prop_assert!((analyzer.score(&page.id).unwrap() - 1.0 / n as f64).abs() < 1e-15);
        }
    }
}

#[test]
fn analyzer_ranks_are_probability_like() {
    let pages = pages_from_edges(5, &[(0, 1), (1, 2), (2, 0), (3, 0), (3, 9), (4, 4)]);
    let analyzer = PageRankAnalyzer::new(&pages, &PageRankConfig::default()).unwrap();

    let ranks: Vec<f64> = pages
        .iter()
        .map(|p| analyzer.score(&p.id).unwrap())
        .collect();
    assert_prob_like(&ranks);
}

#[test]
fn single_page_holds_all_mass() {
    let pages = vec![Page::with_links("solo", ["solo", "https://outside.example"])];

    for limit in [1, 2, 50] {
        let config = PageRankConfig::default().with_limit(limit);
        let analyzer = PageRankAnalyzer::new(&pages, &config).unwrap();
        assert!((analyzer.score("solo").unwrap() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn dangling_page_gains_from_links_and_its_own_mass() {
    let pages = vec![
        Page::new("a"),
        Page::with_links("b", ["a"]),
        Page::with_links("c", ["a"]),
    ];
    let config = PageRankConfig::default().with_limit(1);
    let analyzer = PageRankAnalyzer::new(&pages, &config).unwrap();

    let uniform = 1.0 / 3.0;
    let a = analyzer.score("a").unwrap();
    let b = analyzer.score("b").unwrap();
    let c = analyzer.score("c").unwrap();

    assert!(a > uniform);
    assert!(b < uniform);
    assert_eq!(b.to_bits(), c.to_bits());
    // b receives no link share: only a's dangling spread plus teleport
    assert!((b - (uniform * 0.85 / 3.0 + 0.05)).abs() < 1e-12);
    assert!(!analyzer.converged());
}

#[test]
fn querying_unknown_page_fails_loudly() {
    let pages = vec![Page::with_links("a", ["b"]), Page::new("b")];
    let analyzer = PageRankAnalyzer::new(&pages, &PageRankConfig::default()).unwrap();

    assert!(analyzer.score("c").is_err());
    assert!(analyzer.score("b").is_ok());
}
