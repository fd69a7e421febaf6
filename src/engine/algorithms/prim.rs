use std::rc::Rc;

use super::{AlgorithmRun, Outcome, Step};
use crate::engine::model::{Edge, GraphModel};

/// Prim's algorithm grown from node 0, one accepted edge per step.
pub struct Prim {
	graph: Rc<GraphModel>,
	selected: Vec<bool>,
	accepted: usize,
	weight: f64,
	outcome: Option<Outcome>,
}

impl Prim {
	/// Prepares a run over `graph`.
	pub fn new(graph: Rc<GraphModel>) -> Self {
		let mut selected = vec![false; graph.node_count()];
		if let Some(first) = selected.first_mut() {
			*first = true;
		}
		Self {
			graph,
			selected,
			accepted: 0,
			weight: 0.0,
			outcome: None,
		}
	}

	/// Cheapest edge leaving the selected set. Ties keep the first edge
	/// found scanning selected ids upwards, then adjacency order.
	fn cheapest_crossing(&self) -> Option<Edge> {
		let mut best: Option<Edge> = None;
		for (u, _) in self.selected.iter().enumerate().filter(|(_, s)| **s) {
			for edge in self.graph.neighbors(u) {
				if self.selected[edge.to] {
					continue;
				}
				if best.is_none_or(|b| edge.weight < b.weight) {
					best = Some(*edge);
				}
			}
		}
		best
	}
}

impl Iterator for Prim {
	type Item = Step;

	fn next(&mut self) -> Option<Step> {
		if self.outcome.is_some() {
			return None;
		}
		if self.accepted + 1 >= self.graph.node_count() {
			self.outcome = Some(Outcome::Complete);
			return None;
		}
		match self.cheapest_crossing() {
			Some(edge) => {
				self.selected[edge.to] = true;
				self.accepted += 1;
				self.weight += edge.weight;
				Some(Step::mst_edge(edge.pair()))
			}
			None => {
				log::debug!(
					"prim stopped after {} of {} edges: graph is disconnected",
					self.accepted,
					self.graph.node_count() - 1
				);
				self.outcome = Some(Outcome::Incomplete);
				None
			}
		}
	}
}

impl AlgorithmRun for Prim {
	fn outcome(&self) -> Option<Outcome> {
		self.outcome
	}

	fn total_weight(&self) -> Option<f64> {
		self.outcome.map(|_| self.weight)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::algorithms::replay;
	use crate::engine::model::{EdgePair, NodeId, Point};

	#[test]
	fn sample_tree_in_acceptance_order() {
		let mut prim = Prim::new(Rc::new(GraphModel::sample()));
		let (snapshots, outcome) = replay(&mut prim);
		let edges: Vec<(NodeId, NodeId)> = snapshots
			.last()
			.unwrap()
			.mst_edges
			.iter()
			.map(|e| (e.from, e.to))
			.collect();

		assert_eq!(outcome, Outcome::Complete);
		assert_eq!(edges, vec![(0, 3), (0, 1), (1, 4), (4, 5), (5, 2)]);
		assert_eq!(prim.total_weight(), Some(9.0));
	}

	#[test]
	fn disconnected_graph_keeps_partial_tree() {
		let positions = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
		let graph = GraphModel::from_undirected(positions, &[(0, 1, 3.0), (2, 3, 1.0)]).unwrap();
		let mut prim = Prim::new(Rc::new(graph));
		let (snapshots, outcome) = replay(&mut prim);

		assert_eq!(outcome, Outcome::Incomplete);
		assert_eq!(snapshots.last().unwrap().mst_edges, vec![EdgePair::new(0, 1)]);
		assert_eq!(prim.total_weight(), Some(3.0));
	}

	#[test]
	fn trivial_graphs_complete_without_steps() {
		for n in 0..2 {
			let positions = (0..n).map(|i| Point::new(i as f64, 0.0)).collect();
			let graph = GraphModel::from_undirected(positions, &[]).unwrap();
			let mut prim = Prim::new(Rc::new(graph));
			assert_eq!(prim.next(), None);
			assert_eq!(prim.outcome(), Some(Outcome::Complete));
		}
	}

	#[test]
	fn first_found_wins_on_equal_weights() {
		// 0-1 and 0-2 both weigh 1; adjacency order puts 0-2 first
		let positions = (0..3).map(|i| Point::new(i as f64, 0.0)).collect();
		let graph = GraphModel::from_undirected(positions, &[(0, 2, 1.0), (0, 1, 1.0)]).unwrap();
		let first = Prim::new(Rc::new(graph)).next().unwrap();
		assert_eq!(first, Step::mst_edge(EdgePair::new(0, 2)));
	}
}
