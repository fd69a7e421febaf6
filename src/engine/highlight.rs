//! Visual state the renderer paints on top of the graph.

use super::algorithms::{Change, Step};
use super::model::{EdgePair, NodeId, Point};

/// A token moving along an edge while a traversal animates.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
	/// Current interpolated position.
	pub position: Point,
	/// CSS color the marker is drawn with.
	pub color: &'static str,
}

/// Snapshot of everything highlighted on the canvas.
///
/// Runs start from [`HighlightState::default`] and fold each step in with
/// [`HighlightState::reduce`]; the final value stays on screen until the next
/// run clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightState {
	/// Nodes in the order they were visited.
	pub visited_order: Vec<NodeId>,
	/// Traversal tree or shortest-path chain, in discovery order.
	pub path_edges: Vec<EdgePair>,
	/// Edges of the spanning tree built so far.
	pub mst_edges: Vec<EdgePair>,
	/// In-flight markers; at most one while a run animates.
	pub markers: Vec<Marker>,
}

impl HighlightState {
	/// Applies every change of `step`. The traversal part is the scheduler's
	/// business and is ignored here.
	pub fn reduce(mut self, step: &Step) -> Self {
		for change in &step.changes {
			self.apply(change);
		}
		self
	}

	/// Applies a single change in place.
	pub fn apply(&mut self, change: &Change) {
		match *change {
			Change::Visit(id) => {
				if !self.visited_order.contains(&id) {
					self.visited_order.push(id);
				}
			}
			Change::PathEdge(pair) => {
				if !self.path_edges.contains(&pair) {
					self.path_edges.push(pair);
				}
			}
			Change::MstEdge(pair) => {
				if !self.mst_edges.contains(&pair) {
					self.mst_edges.push(pair);
				}
			}
		}
	}

	/// Whether `id` has been visited.
	pub fn is_visited(&self, id: NodeId) -> bool {
		self.visited_order.contains(&id)
	}

	/// Whether the undirected edge `u`-`v` is part of the path.
	pub fn is_path_edge(&self, u: NodeId, v: NodeId) -> bool {
		self.path_edges.iter().any(|pair| pair.connects(u, v))
	}

	/// Whether the undirected edge `u`-`v` is part of the spanning tree.
	pub fn is_mst_edge(&self, u: NodeId, v: NodeId) -> bool {
		self.mst_edges.iter().any(|pair| pair.connects(u, v))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::algorithms::Traversal;

	#[test]
	fn reduce_appends_in_order() {
		let step = Step {
			changes: vec![Change::Visit(3), Change::PathEdge(EdgePair::new(0, 3))],
			traversal: Some(Traversal {
				edge: EdgePair::new(0, 3),
				color: "#fff",
			}),
		};
		let state = HighlightState::default()
			.reduce(&Step::visit(0))
			.reduce(&step);

		assert_eq!(state.visited_order, vec![0, 3]);
		assert_eq!(state.path_edges, vec![EdgePair::new(0, 3)]);
		assert!(state.markers.is_empty());
	}

	#[test]
	fn edge_sets_ignore_orientation_duplicates() {
		let mut state = HighlightState::default();
		state.apply(&Change::MstEdge(EdgePair::new(4, 5)));
		state.apply(&Change::MstEdge(EdgePair::new(5, 4)));
		state.apply(&Change::Visit(2));
		state.apply(&Change::Visit(2));

		assert_eq!(state.mst_edges.len(), 1);
		assert_eq!(state.visited_order, vec![2]);
		assert!(state.is_mst_edge(5, 4));
		assert!(!state.is_path_edge(4, 5));
		assert!(state.is_visited(2));
	}

	#[test]
	fn settle_step_changes_nothing() {
		let before = HighlightState::default().reduce(&Step::visit(1));
		let after = before.clone().reduce(&Step::settle());
		assert_eq!(before, after);
	}
}
