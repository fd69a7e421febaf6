use std::collections::VecDeque;
use std::rc::Rc;

use super::{AlgorithmRun, Change, Outcome, Step, TRAVERSAL_COLOR};
use crate::engine::model::{GraphModel, NodeId};
use crate::error::Result;

/// Breadth-first traversal from a start node.
///
/// Yields the start visit, then one animated step per discovered tree edge,
/// and a settle step after each node's neighbors are exhausted.
pub struct BreadthFirst {
	graph: Rc<GraphModel>,
	visited: Vec<bool>,
	queue: VecDeque<NodeId>,
	/// Node being expanded and the index of its next adjacency entry.
	expanding: Option<(NodeId, usize)>,
	pending_start: Option<NodeId>,
	finished: bool,
}

impl BreadthFirst {
	/// Prepares a traversal; fails when `start` is not a node of `graph`.
	pub fn new(graph: Rc<GraphModel>, start: NodeId) -> Result<Self> {
		let start = graph.check_node(start)?;
		let mut visited = vec![false; graph.node_count()];
		visited[start] = true;

		Ok(Self {
			graph,
			visited,
			queue: VecDeque::from([start]),
			expanding: None,
			pending_start: Some(start),
			finished: false,
		})
	}
}

impl Iterator for BreadthFirst {
	type Item = Step;

	fn next(&mut self) -> Option<Step> {
		if let Some(start) = self.pending_start.take() {
			return Some(Step::visit(start));
		}

		let (u, cursor) = match self.expanding {
			Some(current) => current,
			None => match self.queue.pop_front() {
				Some(next) => (next, 0),
				None => {
					self.finished = true;
					return None;
				}
			},
		};

		for (index, edge) in self.graph.neighbors(u).iter().enumerate().skip(cursor) {
			let v = edge.to;
			if self.visited[v] {
				continue;
			}
			self.visited[v] = true;
			self.queue.push_back(v);
			self.expanding = Some((u, index + 1));
			let pair = edge.pair();
			return Some(Step::travel(
				vec![Change::Visit(v), Change::PathEdge(pair)],
				pair,
				TRAVERSAL_COLOR,
			));
		}

		self.expanding = None;
		Some(Step::settle())
	}
}

impl AlgorithmRun for BreadthFirst {
	fn outcome(&self) -> Option<Outcome> {
		self.finished.then_some(Outcome::Complete)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::algorithms::replay;
	use crate::engine::model::{EdgePair, Point};

	fn run(graph: GraphModel, start: NodeId) -> Vec<Step> {
		BreadthFirst::new(Rc::new(graph), start).unwrap().collect()
	}

	#[test]
	fn sample_traversal_from_zero() {
		let mut bfs = BreadthFirst::new(Rc::new(GraphModel::sample()), 0).unwrap();
		let (snapshots, outcome) = replay(&mut bfs);
		let last = snapshots.last().unwrap();

		assert_eq!(outcome, Outcome::Complete);
		assert_eq!(last.visited_order, vec![0, 1, 3, 2, 4, 5]);
		let tree: Vec<(NodeId, NodeId)> =
			last.path_edges.iter().map(|e| (e.from, e.to)).collect();
		assert_eq!(tree, vec![(0, 1), (0, 3), (1, 2), (1, 4), (2, 5)]);
	}

	#[test]
	fn emits_settle_after_each_expansion() {
		let steps = run(GraphModel::sample(), 0);
		let shape: Vec<&str> = steps
			.iter()
			.map(|step| match (&step.traversal, step.changes.is_empty()) {
				(Some(_), _) => "edge",
				(None, true) => "settle",
				(None, false) => "visit",
			})
			.collect();

		assert_eq!(
			shape,
			vec![
				"visit", "edge", "edge", "settle", // 0
				"edge", "edge", "settle", // 1
				"settle", // 3
				"edge", "settle", // 2
				"settle", // 4
				"settle", // 5
			]
		);
	}

	#[test]
	fn traversal_markers_follow_discovery_direction() {
		let steps = run(GraphModel::sample(), 5);
		let first = steps.iter().find_map(|s| s.traversal).unwrap();
		assert_eq!((first.edge.from, first.edge.to), (5, 2));
		assert_eq!(first.color, TRAVERSAL_COLOR);
		assert_eq!(steps[0], Step::visit(5));
	}

	#[test]
	fn stays_inside_the_start_component() {
		let positions = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
		let graph = GraphModel::from_undirected(positions, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
		let mut bfs = BreadthFirst::new(Rc::new(graph), 2).unwrap();
		let (snapshots, outcome) = replay(&mut bfs);
		let last = snapshots.last().unwrap();

		assert_eq!(outcome, Outcome::Complete);
		assert_eq!(last.visited_order, vec![2, 3]);
		assert_eq!(last.path_edges, vec![EdgePair::new(2, 3)]);
	}

	#[test]
	fn every_reachable_node_visited_once() {
		for start in 0..6 {
			let mut bfs = BreadthFirst::new(Rc::new(GraphModel::sample()), start).unwrap();
			let (snapshots, _) = replay(&mut bfs);
			let mut order = snapshots.last().unwrap().visited_order.clone();
			assert_eq!(order[0], start);
			order.sort_unstable();
			assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
		}
	}

	#[test]
	fn outcome_only_after_exhaustion() {
		let mut bfs = BreadthFirst::new(Rc::new(GraphModel::sample()), 0).unwrap();
		assert_eq!(bfs.outcome(), None);
		bfs.next();
		assert_eq!(bfs.outcome(), None);
		// the final settle step has been yielded but next() has not said None yet
		let steps: Vec<Step> = bfs.by_ref().take(11).collect();
		assert_eq!(steps.last(), Some(&Step::settle()));
		assert_eq!(bfs.outcome(), None);
		assert_eq!(bfs.next(), None);
		assert_eq!(bfs.outcome(), Some(Outcome::Complete));
	}

	#[test]
	fn rejects_unknown_start() {
		assert!(BreadthFirst::new(Rc::new(GraphModel::sample()), 6).is_err());
	}
}
