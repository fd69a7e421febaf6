//! The static weighted graph every algorithm runs over.

use std::hash::{Hash, Hasher};

use crate::error::{GraphError, Result};

/// Dense node index, `0..node_count`.
pub type NodeId = usize;

/// A position in graph space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Linear interpolation towards `to`; `t = 0` is `self`, `t = 1` is `to`.
	pub fn lerp(self, to: Point, t: f64) -> Point {
		Point {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
		}
	}
}

/// A fixed graph node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Index of the node, equal to its position in [`GraphModel::nodes`].
	pub id: NodeId,
	/// Where the node is drawn.
	pub position: Point,
}

/// One directed adjacency entry. Undirected edges are stored as two entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// Owner of the adjacency list this entry lives in.
	pub from: NodeId,
	/// Neighbor.
	pub to: NodeId,
	/// Strictly positive weight.
	pub weight: f64,
}

impl Edge {
	/// The undirected pair this entry belongs to, oriented `from -> to`.
	pub fn pair(&self) -> EdgePair {
		EdgePair::new(self.from, self.to)
	}
}

/// An undirected edge. `(u, v)` and `(v, u)` compare equal; the orientation
/// is kept for drawing direction only.
#[derive(Clone, Copy, Debug, Eq)]
pub struct EdgePair {
	/// Endpoint the edge was reached from.
	pub from: NodeId,
	/// Endpoint the edge leads to.
	pub to: NodeId,
}

impl EdgePair {
	/// Creates a pair oriented `from -> to`.
	pub const fn new(from: NodeId, to: NodeId) -> Self {
		Self { from, to }
	}

	/// Endpoints ordered low to high.
	pub fn canonical(&self) -> (NodeId, NodeId) {
		(self.from.min(self.to), self.from.max(self.to))
	}

	/// Whether the pair connects `u` and `v` in either direction.
	pub fn connects(&self, u: NodeId, v: NodeId) -> bool {
		self.canonical() == EdgePair::new(u, v).canonical()
	}
}

impl PartialEq for EdgePair {
	fn eq(&self, other: &Self) -> bool {
		self.canonical() == other.canonical()
	}
}

impl Hash for EdgePair {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.canonical().hash(state);
	}
}

/// Immutable weighted undirected graph with ordered adjacency lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
	nodes: Vec<Node>,
	adjacency: Vec<Vec<Edge>>,
}

impl GraphModel {
	/// Builds a graph from node positions and per-node `(neighbor, weight)`
	/// lists. Every entry must have a mirror entry with the same weight.
	pub fn new(positions: Vec<Point>, adjacency: Vec<Vec<(NodeId, f64)>>) -> Result<Self> {
		if positions.len() != adjacency.len() {
			return Err(GraphError::invalid_graph(format!(
				"{} nodes but {} adjacency lists",
				positions.len(),
				adjacency.len()
			)));
		}

		let nodes = positions
			.into_iter()
			.enumerate()
			.map(|(id, position)| Node { id, position })
			.collect();
		let adjacency = adjacency
			.into_iter()
			.enumerate()
			.map(|(from, list)| {
				list.into_iter()
					.map(|(to, weight)| Edge { from, to, weight })
					.collect()
			})
			.collect();

		let graph = Self { nodes, adjacency };
		graph.validate()?;
		Ok(graph)
	}

	/// Builds a graph from undirected `(u, v, weight)` triples, appending the
	/// two mirrored entries in triple order.
	pub fn from_undirected(positions: Vec<Point>, edges: &[(NodeId, NodeId, f64)]) -> Result<Self> {
		let n = positions.len();
		let mut adjacency = vec![Vec::new(); n];
		for &(u, v, w) in edges {
			if u >= n || v >= n {
				return Err(GraphError::invalid_graph(format!(
					"edge {u}-{v} references a node outside 0..{n}"
				)));
			}
			adjacency[u].push((v, w));
			if u != v {
				adjacency[v].push((u, w));
			}
		}
		Self::new(positions, adjacency)
	}

	/// The six-node demo graph.
	pub fn sample() -> Self {
		let positions = [
			(100.0, 100.0),
			(300.0, 80.0),
			(500.0, 100.0),
			(150.0, 300.0),
			(350.0, 320.0),
			(550.0, 300.0),
		];
		let adjacency: [&[(NodeId, f64)]; 6] = [
			&[(1, 2.0), (3, 1.0)],
			&[(0, 2.0), (2, 4.0), (4, 2.0)],
			&[(1, 4.0), (5, 3.0)],
			&[(0, 1.0), (4, 2.0)],
			&[(1, 2.0), (3, 2.0), (5, 1.0)],
			&[(2, 3.0), (4, 1.0)],
		];

		Self {
			nodes: positions
				.iter()
				.enumerate()
				.map(|(id, &(x, y))| Node {
					id,
					position: Point::new(x, y),
				})
				.collect(),
			adjacency: adjacency
				.iter()
				.enumerate()
				.map(|(from, list)| {
					list.iter()
						.map(|&(to, weight)| Edge { from, to, weight })
						.collect()
				})
				.collect(),
		}
	}

	fn validate(&self) -> Result<()> {
		let n = self.nodes.len();
		for edge in self.adjacency.iter().flatten() {
			if edge.to >= n {
				return Err(GraphError::invalid_graph(format!(
					"edge {}->{} references a node outside 0..{n}",
					edge.from, edge.to
				)));
			}
			if !edge.weight.is_finite() || edge.weight <= 0.0 {
				return Err(GraphError::invalid_graph(format!(
					"edge {}->{} has non-positive weight {}",
					edge.from, edge.to, edge.weight
				)));
			}
			let mirrored = self.adjacency[edge.to]
				.iter()
				.any(|back| back.to == edge.from && back.weight == edge.weight);
			if !mirrored {
				return Err(GraphError::invalid_graph(format!(
					"edge {}->{} (weight {}) has no matching {}->{}",
					edge.from, edge.to, edge.weight, edge.to, edge.from
				)));
			}
		}
		Ok(())
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// All nodes, indexed by id.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Position of `id`, if it exists.
	pub fn position(&self, id: NodeId) -> Option<Point> {
		self.nodes.get(id).map(|node| node.position)
	}

	/// Adjacency entries of `id` in insertion order; empty for unknown ids.
	pub fn neighbors(&self, id: NodeId) -> &[Edge] {
		self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Weight of the first `u -> v` entry.
	pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
		self.neighbors(u)
			.iter()
			.find(|edge| edge.to == v)
			.map(|edge| edge.weight)
	}

	/// Returns `id` back when it names a node of this graph.
	pub fn check_node(&self, id: NodeId) -> Result<NodeId> {
		if id < self.nodes.len() {
			Ok(id)
		} else {
			Err(GraphError::InvalidNode {
				id,
				node_count: self.nodes.len(),
			})
		}
	}

	/// Every undirected edge once, as its `u < v` entry, in adjacency scan order.
	pub fn undirected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
		self.adjacency
			.iter()
			.flatten()
			.filter(|edge| edge.from < edge.to)
			.copied()
	}

	/// Bounding box of all node positions as `(min, max)`.
	pub fn bounds(&self) -> Option<(Point, Point)> {
		let mut positions = self.nodes.iter().map(|node| node.position);
		let first = positions.next()?;
		Some(positions.fold((first, first), |(lo, hi), p| {
			(
				Point::new(lo.x.min(p.x), lo.y.min(p.y)),
				Point::new(hi.x.max(p.x), hi.y.max(p.y)),
			)
		}))
	}
}
