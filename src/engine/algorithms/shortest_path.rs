use std::rc::Rc;

use super::{AlgorithmRun, Change, Outcome, PATH_COLOR, Step};
use crate::engine::model::{EdgePair, GraphModel, NodeId};
use crate::error::Result;

enum Phase {
	Settling,
	Tracing(std::vec::IntoIter<EdgePair>),
	Done(Outcome),
}

/// Dijkstra's algorithm with a linear minimum scan.
///
/// Every settled node is one step. Once settling stops, the path to `end` is
/// replayed edge by edge from the start, each with a marker traversal.
pub struct ShortestPath {
	graph: Rc<GraphModel>,
	start: NodeId,
	end: NodeId,
	dist: Vec<f64>,
	parent: Vec<Option<NodeId>>,
	visited: Vec<bool>,
	phase: Phase,
}

impl ShortestPath {
	/// Prepares a search; both endpoints must be nodes of `graph`.
	pub fn new(graph: Rc<GraphModel>, start: NodeId, end: NodeId) -> Result<Self> {
		let start = graph.check_node(start)?;
		let end = graph.check_node(end)?;
		let n = graph.node_count();
		let mut dist = vec![f64::INFINITY; n];
		dist[start] = 0.0;

		Ok(Self {
			graph,
			start,
			end,
			dist,
			parent: vec![None; n],
			visited: vec![false; n],
			phase: Phase::Settling,
		})
	}

	/// Tentative distances; final once the run is exhausted.
	pub fn distances(&self) -> &[f64] {
		&self.dist
	}

	/// Lowest-id unvisited node with the smallest finite distance.
	fn closest_unvisited(&self) -> Option<NodeId> {
		let mut best: Option<NodeId> = None;
		for (id, &d) in self.dist.iter().enumerate() {
			if self.visited[id] || !d.is_finite() {
				continue;
			}
			if best.is_none_or(|b| d < self.dist[b]) {
				best = Some(id);
			}
		}
		best
	}

	fn relax(&mut self, u: NodeId) {
		for edge in self.graph.neighbors(u) {
			let v = edge.to;
			let candidate = self.dist[u] + edge.weight;
			if !self.visited[v] && candidate < self.dist[v] {
				self.dist[v] = candidate;
				self.parent[v] = Some(u);
			}
		}
	}

	fn trace_path(&self) -> Phase {
		if self.parent[self.end].is_none() && self.end != self.start {
			return Phase::Done(Outcome::NoPathFound);
		}
		let mut path = Vec::new();
		let mut current = self.end;
		while let Some(prev) = self.parent[current] {
			path.push(EdgePair::new(prev, current));
			current = prev;
		}
		path.reverse();
		Phase::Tracing(path.into_iter())
	}
}

impl Iterator for ShortestPath {
	type Item = Step;

	fn next(&mut self) -> Option<Step> {
		loop {
			match self.phase {
				Phase::Settling => match self.closest_unvisited() {
					Some(u) => {
						self.visited[u] = true;
						self.relax(u);
						return Some(Step::visit(u));
					}
					None => self.phase = self.trace_path(),
				},
				Phase::Tracing(ref mut path) => match path.next() {
					Some(edge) => {
						return Some(Step::travel(vec![Change::PathEdge(edge)], edge, PATH_COLOR));
					}
					None => self.phase = Phase::Done(Outcome::Complete),
				},
				Phase::Done(_) => return None,
			}
		}
	}
}

impl AlgorithmRun for ShortestPath {
	fn outcome(&self) -> Option<Outcome> {
		match self.phase {
			Phase::Done(outcome) => Some(outcome),
			_ => None,
		}
	}

	fn total_weight(&self) -> Option<f64> {
		match self.phase {
			Phase::Done(Outcome::Complete) => Some(self.dist[self.end]),
			_ => None,
		}
	}
}
