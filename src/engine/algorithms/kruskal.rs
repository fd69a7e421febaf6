use std::rc::Rc;

use super::disjoint_set::DisjointSet;
use super::{AlgorithmRun, Outcome, Step};
use crate::engine::model::{Edge, GraphModel};

/// Kruskal's algorithm; one step per accepted edge.
pub struct Kruskal {
	node_count: usize,
	edges: std::vec::IntoIter<Edge>,
	sets: DisjointSet,
	accepted: usize,
	weight: f64,
	outcome: Option<Outcome>,
}

impl Kruskal {
	/// Collects each undirected edge once and sorts them by weight. The sort
	/// is stable, so equal weights keep adjacency scan order.
	pub fn new(graph: Rc<GraphModel>) -> Self {
		let mut edges: Vec<Edge> = graph.undirected_edges().collect();
		edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
		let node_count = graph.node_count();

		Self {
			node_count,
			edges: edges.into_iter(),
			sets: DisjointSet::new(node_count),
			accepted: 0,
			weight: 0.0,
			outcome: None,
		}
	}
}

impl Iterator for Kruskal {
	type Item = Step;

	fn next(&mut self) -> Option<Step> {
		for edge in self.edges.by_ref() {
			if self.sets.union(edge.from, edge.to) {
				self.accepted += 1;
				self.weight += edge.weight;
				return Some(Step::mst_edge(edge.pair()));
			}
		}
		if self.outcome.is_none() {
			let spanning = self.accepted + 1 >= self.node_count;
			self.outcome = Some(if spanning {
				Outcome::Complete
			} else {
				Outcome::Incomplete
			});
		}
		None
	}
}

impl AlgorithmRun for Kruskal {
	fn outcome(&self) -> Option<Outcome> {
		self.outcome
	}

	fn total_weight(&self) -> Option<f64> {
		self.outcome.map(|_| self.weight)
	}
}
