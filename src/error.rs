//! Error types shared by the graph engine and the canvas wiring.

use thiserror::Error;

use crate::engine::NodeId;

/// Errors raised while building a graph or starting an algorithm run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// The graph handed to [`GraphModel::new`](crate::engine::GraphModel::new) is malformed.
	#[error("invalid graph: {reason}")]
	InvalidGraph {
		/// What was wrong with it.
		reason: String,
	},

	/// A start or end node is outside the graph.
	#[error("invalid node {id} (graph has {node_count} nodes)")]
	InvalidNode {
		/// Offending id.
		id: NodeId,
		/// Number of nodes in the graph.
		node_count: usize,
	},

	/// Shortest path was requested without a target.
	#[error("shortest path needs an end node")]
	MissingEndNode,

	/// An algorithm name coming from the page controls was not recognised.
	#[error("unknown algorithm: {0} (expected: bfs, dijkstra, prim or kruskal)")]
	UnknownAlgorithm(String),
}

impl GraphError {
	pub(crate) fn invalid_graph(reason: impl Into<String>) -> Self {
		Self::InvalidGraph {
			reason: reason.into(),
		}
	}
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GraphError>;
