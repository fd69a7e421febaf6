//! Properties of the algorithms over the demo graph, checked against brute
//! force and against each other.

use std::collections::VecDeque;
use std::rc::Rc;

use algo_graph_canvas::engine::algorithms::{replay, start};
use algo_graph_canvas::engine::{
	AlgorithmKind, AnimationConfig, AnimationScheduler, EdgePair, GraphModel, HighlightState,
	NodeId, Outcome, RunOutcome, RunRequest,
};

fn sample() -> Rc<GraphModel> {
	Rc::new(GraphModel::sample())
}

fn final_state(kind: AlgorithmKind, from: NodeId, to: Option<NodeId>) -> (HighlightState, Outcome, Option<f64>) {
	let mut run = start(kind, sample(), from, to).unwrap();
	let (snapshots, outcome) = replay(run.as_mut());
	let last = snapshots.last().cloned().unwrap_or_default();
	(last, outcome, run.total_weight())
}

/// Cheapest simple path weight by exhaustive search.
fn brute_force_distance(graph: &GraphModel, from: NodeId, to: NodeId) -> Option<f64> {
	fn walk(graph: &GraphModel, at: NodeId, to: NodeId, seen: &mut Vec<bool>, cost: f64, best: &mut Option<f64>) {
		if at == to {
			if best.is_none_or(|b| cost < b) {
				*best = Some(cost);
			}
			return;
		}
		for edge in graph.neighbors(at) {
			if !seen[edge.to] {
				seen[edge.to] = true;
				walk(graph, edge.to, to, seen, cost + edge.weight, best);
				seen[edge.to] = false;
			}
		}
	}
	let mut seen = vec![false; graph.node_count()];
	seen[from] = true;
	let mut best = None;
	walk(graph, from, to, &mut seen, 0.0, &mut best);
	best
}

fn tree_weight(graph: &GraphModel, edges: &[EdgePair]) -> f64 {
	edges.iter().map(|e| graph.weight(e.from, e.to).unwrap()).sum()
}

/// True when `edges` connect all `n` nodes without a cycle.
fn is_spanning_tree(n: usize, edges: &[EdgePair]) -> bool {
	if edges.len() + 1 != n {
		return false;
	}
	let mut adjacency = vec![Vec::new(); n];
	for e in edges {
		adjacency[e.from].push(e.to);
		adjacency[e.to].push(e.from);
	}
	let mut seen = vec![false; n];
	let mut queue = VecDeque::from([0]);
	seen[0] = true;
	while let Some(u) = queue.pop_front() {
		for &v in &adjacency[u] {
			if !seen[v] {
				seen[v] = true;
				queue.push_back(v);
			}
		}
	}
	// n - 1 edges reaching every node cannot contain a cycle
	seen.iter().all(|&s| s)
}

/// Minimum spanning weight over every 5-edge subset of the 7 edges.
fn brute_force_mst_weight(graph: &GraphModel) -> f64 {
	let edges: Vec<EdgePair> = graph.undirected_edges().map(|e| e.pair()).collect();
	let n = graph.node_count();
	let mut best = f64::INFINITY;
	for mask in 0u32..(1 << edges.len()) {
		if mask.count_ones() as usize != n - 1 {
			continue;
		}
		let subset: Vec<EdgePair> = edges
			.iter()
			.enumerate()
			.filter(|(i, _)| mask & (1 << i) != 0)
			.map(|(_, e)| *e)
			.collect();
		if is_spanning_tree(n, &subset) {
			best = best.min(tree_weight(graph, &subset));
		}
	}
	best
}

#[test]
fn shortest_path_zero_to_five_is_exact() {
	let (state, outcome, distance) = final_state(AlgorithmKind::ShortestPath, 0, Some(5));
	assert_eq!(outcome, Outcome::Complete);
	assert_eq!(distance, Some(4.0));
	let path: Vec<(NodeId, NodeId)> = state.path_edges.iter().map(|e| (e.from, e.to)).collect();
	assert_eq!(path, vec![(0, 3), (3, 4), (4, 5)]);
}

#[test]
fn shortest_distances_match_brute_force() {
	let graph = GraphModel::sample();
	for from in 0..graph.node_count() {
		for to in 0..graph.node_count() {
			let (state, _, distance) = final_state(AlgorithmKind::ShortestPath, from, Some(to));
			assert_eq!(distance, brute_force_distance(&graph, from, to), "{from}->{to}");
			assert_eq!(Some(tree_weight(&graph, &state.path_edges)), distance);
		}
	}
}

#[test]
fn both_spanning_trees_are_minimal() {
	let graph = GraphModel::sample();
	let optimum = brute_force_mst_weight(&graph);
	assert_eq!(optimum, 9.0);

	for kind in [AlgorithmKind::PrimMst, AlgorithmKind::KruskalMst] {
		let (state, outcome, weight) = final_state(kind, 0, None);
		assert_eq!(outcome, Outcome::Complete, "{kind}");
		assert_eq!(state.mst_edges.len(), graph.node_count() - 1, "{kind}");
		assert!(is_spanning_tree(graph.node_count(), &state.mst_edges), "{kind}");
		assert_eq!(tree_weight(&graph, &state.mst_edges), optimum, "{kind}");
		assert_eq!(weight, Some(optimum), "{kind}");
	}
}

#[test]
fn traversal_order_is_breadth_first() {
	let graph = GraphModel::sample();
	for from in 0..graph.node_count() {
		let (state, outcome, _) = final_state(AlgorithmKind::Traversal, from, None);
		assert_eq!(outcome, Outcome::Complete);

		// recompute the FIFO order independently
		let mut expected = vec![from];
		let mut i = 0;
		while i < expected.len() {
			for edge in graph.neighbors(expected[i]) {
				if !expected.contains(&edge.to) {
					expected.push(edge.to);
				}
			}
			i += 1;
		}
		assert_eq!(state.visited_order, expected, "from {from}");
		assert_eq!(state.path_edges.len(), graph.node_count() - 1);
	}
}

#[test]
fn scheduler_runs_are_reproducible() {
	let mut scheduler = AnimationScheduler::new(sample(), AnimationConfig::default());
	let mut reports = Vec::new();
	let mut sequences = Vec::new();
	for _ in 0..2 {
		let mut frames: Vec<HighlightState> = Vec::new();
		scheduler
			.request_run(RunRequest::new(AlgorithmKind::ShortestPath, 0).to(5))
			.unwrap()
			.unwrap();
		let report = scheduler
			.run_to_completion(&mut |_: &GraphModel, h: &HighlightState| frames.push(h.clone()))
			.unwrap();
		reports.push((report.outcome, report.total_weight, report.steps));
		sequences.push(frames);
	}
	assert_eq!(reports[0], (RunOutcome::Complete, Some(4.0), 9));
	assert_eq!(reports[0], reports[1]);
	assert_eq!(sequences[0], sequences[1]);
}
