//! Graph algorithms expressed as lazy step iterators.
//!
//! Each algorithm yields [`Step`]s describing what changed and, optionally,
//! which edge a marker should travel along. Timing lives entirely in the
//! [`AnimationScheduler`](super::AnimationScheduler); iterating a run by hand
//! (see [`replay`]) executes it synchronously.

mod bfs;
mod disjoint_set;
mod kruskal;
mod prim;
mod shortest_path;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

pub use bfs::BreadthFirst;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use shortest_path::ShortestPath;

use super::highlight::HighlightState;
use super::model::{EdgePair, GraphModel, NodeId};
use crate::error::{GraphError, Result};

/// Marker color for edges discovered by the traversal.
pub const TRAVERSAL_COLOR: &str = "#ff5722";
/// Marker color for edges of a reconstructed shortest path.
pub const PATH_COLOR: &str = "#00ff00";

/// One highlight delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Change {
	/// Node joins the visited order.
	Visit(NodeId),
	/// Edge joins the traversal tree or shortest path.
	PathEdge(EdgePair),
	/// Edge joins the spanning tree.
	MstEdge(EdgePair),
}

/// Instruction to animate a marker from `edge.from` to `edge.to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Traversal {
	/// Edge to travel, in travel direction.
	pub edge: EdgePair,
	/// Marker color.
	pub color: &'static str,
}

/// One discrete algorithm step.
///
/// A step without changes or traversal is a pure redraw boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step {
	/// Deltas to fold into the highlight state, in order.
	pub changes: Vec<Change>,
	/// Marker animation to play after the changes are applied.
	pub traversal: Option<Traversal>,
}

impl Step {
	/// A node was visited or settled.
	pub fn visit(id: NodeId) -> Self {
		Self {
			changes: vec![Change::Visit(id)],
			traversal: None,
		}
	}

	/// Redraw-and-wait boundary with no state change.
	pub fn settle() -> Self {
		Self::default()
	}

	/// A spanning-tree edge was accepted.
	pub fn mst_edge(edge: EdgePair) -> Self {
		Self {
			changes: vec![Change::MstEdge(edge)],
			traversal: None,
		}
	}

	/// A path edge that a marker travels along.
	pub fn travel(changes: Vec<Change>, edge: EdgePair, color: &'static str) -> Self {
		Self {
			changes,
			traversal: Some(Traversal { edge, color }),
		}
	}
}

/// How an algorithm finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// Ran to its natural end.
	Complete,
	/// Shortest path target is unreachable.
	NoPathFound,
	/// Spanning tree could not reach every node.
	Incomplete,
}

/// The four algorithms the canvas can animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
	/// Breadth-first traversal.
	Traversal,
	/// Dijkstra single-source shortest path.
	ShortestPath,
	/// Prim's minimum spanning tree.
	PrimMst,
	/// Kruskal's minimum spanning tree.
	KruskalMst,
}

impl AlgorithmKind {
	/// Every kind, in menu order.
	pub const ALL: [AlgorithmKind; 4] = [
		AlgorithmKind::Traversal,
		AlgorithmKind::ShortestPath,
		AlgorithmKind::PrimMst,
		AlgorithmKind::KruskalMst,
	];

	/// Short machine name, as used by the page controls.
	pub fn as_str(self) -> &'static str {
		match self {
			AlgorithmKind::Traversal => "bfs",
			AlgorithmKind::ShortestPath => "dijkstra",
			AlgorithmKind::PrimMst => "prim",
			AlgorithmKind::KruskalMst => "kruskal",
		}
	}

	/// Human label.
	pub fn label(self) -> &'static str {
		match self {
			AlgorithmKind::Traversal => "BFS",
			AlgorithmKind::ShortestPath => "Dijkstra",
			AlgorithmKind::PrimMst => "Prim MST",
			AlgorithmKind::KruskalMst => "Kruskal MST",
		}
	}
}

impl fmt::Display for AlgorithmKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for AlgorithmKind {
	type Err = GraphError;

	fn from_str(s: &str) -> Result<Self> {
		AlgorithmKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| GraphError::UnknownAlgorithm(s.to_string()))
	}
}

/// A running algorithm: a stream of steps plus its terminal result.
pub trait AlgorithmRun: Iterator<Item = Step> {
	/// Terminal outcome, available once the iterator is exhausted.
	fn outcome(&self) -> Option<Outcome>;

	/// Shortest-path distance or spanning-tree weight, where meaningful.
	fn total_weight(&self) -> Option<f64> {
		None
	}
}

/// Validates the parameters for `kind` and returns the step stream.
///
/// Prim always grows from node 0, so `start` is only checked for the
/// traversal and shortest-path runs.
pub fn start(
	kind: AlgorithmKind,
	graph: Rc<GraphModel>,
	start: NodeId,
	end: Option<NodeId>,
) -> Result<Box<dyn AlgorithmRun>> {
	Ok(match kind {
		AlgorithmKind::Traversal => Box::new(BreadthFirst::new(graph, start)?),
		AlgorithmKind::ShortestPath => {
			let end = end.ok_or(GraphError::MissingEndNode)?;
			Box::new(ShortestPath::new(graph, start, end)?)
		}
		AlgorithmKind::PrimMst => Box::new(Prim::new(graph)),
		AlgorithmKind::KruskalMst => Box::new(Kruskal::new(graph)),
	})
}

/// Runs `run` to the end without any timing, returning the highlight state
/// after every step and the outcome.
pub fn replay(run: &mut dyn AlgorithmRun) -> (Vec<HighlightState>, Outcome) {
	let mut snapshots = Vec::new();
	let mut state = HighlightState::default();
	for step in &mut *run {
		state = state.reduce(&step);
		snapshots.push(state.clone());
	}
	(snapshots, run.outcome().unwrap_or(Outcome::Complete))
}
