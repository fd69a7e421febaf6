//! Browser-independent core: graph model, highlight state, algorithms and
//! the animation scheduler.

pub mod algorithms;
mod highlight;
mod model;
mod scheduler;

pub use algorithms::{AlgorithmKind, AlgorithmRun, Change, Outcome, Step, Traversal};
pub use highlight::{HighlightState, Marker};
pub use model::{Edge, EdgePair, GraphModel, Node, NodeId, Point};
pub use scheduler::{
	AnimationConfig, AnimationScheduler, Renderer, RunHandle, RunOutcome, RunReport, RunRequest,
	RunState,
};
