//! Turns algorithm steps into timed, observable highlight changes.
//!
//! The scheduler never sleeps. Whoever owns the frame loop calls
//! [`AnimationScheduler::tick`] with the elapsed time; every step or marker
//! frame that has come due is applied and handed to the [`Renderer`] in
//! emission order. Between due points the run is suspended, which is also
//! where cancellation and deadlines are honoured.

use std::rc::Rc;
use std::time::Duration;

use log::{debug, info};

use super::algorithms::{self, AlgorithmKind, AlgorithmRun, Outcome, Traversal};
use super::highlight::{HighlightState, Marker};
use super::model::{GraphModel, NodeId};
use crate::error::Result;

/// Paint sink. Called once per applied step and once per marker frame.
pub trait Renderer {
	/// Draws `highlight` over `graph`.
	fn render(&mut self, graph: &GraphModel, highlight: &HighlightState);
}

impl<F> Renderer for F
where
	F: FnMut(&GraphModel, &HighlightState),
{
	fn render(&mut self, graph: &GraphModel, highlight: &HighlightState) {
		self(graph, highlight)
	}
}

/// Timing knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
	/// Pause after every step that does not animate a marker.
	pub step_delay_ms: u64,
	/// Interpolation segments per traversed edge; `frame_count + 1` frames
	/// are shown, both endpoints included.
	pub animation_frame_count: u32,
	/// Pause after every marker frame.
	pub frame_delay_ms: u64,
}

impl Default for AnimationConfig {
	fn default() -> Self {
		Self {
			step_delay_ms: 300,
			animation_frame_count: 30,
			frame_delay_ms: 30,
		}
	}
}

impl AnimationConfig {
	fn step_delay(&self) -> Duration {
		Duration::from_millis(self.step_delay_ms)
	}

	fn frame_delay(&self) -> Duration {
		Duration::from_millis(self.frame_delay_ms)
	}
}

/// What to run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunRequest {
	/// Algorithm to animate.
	pub kind: AlgorithmKind,
	/// Start node (traversal and shortest path).
	pub start: NodeId,
	/// Target node (shortest path only).
	pub end: Option<NodeId>,
	/// Give up with [`RunOutcome::TimedOut`] once this much scheduler time
	/// has passed since the request.
	pub timeout: Option<Duration>,
}

impl RunRequest {
	/// A request without end node or deadline.
	pub fn new(kind: AlgorithmKind, start: NodeId) -> Self {
		Self {
			kind,
			start,
			end: None,
			timeout: None,
		}
	}

	/// Sets the target node.
	pub fn to(mut self, end: NodeId) -> Self {
		self.end = Some(end);
		self
	}

	/// Sets an external deadline.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// Identifies one accepted run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunHandle(u64);

/// Terminal state of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
	/// The algorithm ran to its end.
	Complete,
	/// Shortest path target unreachable.
	NoPathFound,
	/// Spanning tree stopped short on a disconnected graph.
	Incomplete,
	/// Cancelled through [`AnimationScheduler::cancel`].
	Aborted,
	/// The request's deadline passed.
	TimedOut,
}

impl From<Outcome> for RunOutcome {
	fn from(outcome: Outcome) -> Self {
		match outcome {
			Outcome::Complete => RunOutcome::Complete,
			Outcome::NoPathFound => RunOutcome::NoPathFound,
			Outcome::Incomplete => RunOutcome::Incomplete,
		}
	}
}

/// Summary handed back when a run ends.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
	/// The finished run.
	pub handle: RunHandle,
	/// Which algorithm ran.
	pub kind: AlgorithmKind,
	/// How it ended.
	pub outcome: RunOutcome,
	/// Path distance or tree weight; absent for traversals and interrupted runs.
	pub total_weight: Option<f64>,
	/// Number of steps applied.
	pub steps: usize,
}

/// Scheduler state token; at most one run is `Running`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RunState {
	/// Nothing has run yet.
	#[default]
	Idle,
	/// A run is in progress.
	Running(RunHandle),
	/// The last run finished.
	Completed(RunReport),
}

enum Phase {
	NextStep,
	Animating { traversal: Traversal, frame: u32 },
}

struct ActiveRun {
	handle: RunHandle,
	kind: AlgorithmKind,
	steps: Box<dyn AlgorithmRun>,
	phase: Phase,
	ready_at: Duration,
	deadline: Option<Duration>,
	cancelled: bool,
	applied: usize,
}

enum Advance {
	Continue,
	Suspend,
	Finish(RunOutcome),
}

/// Single-flight driver that owns timing, the highlight state and the run
/// guard.
pub struct AnimationScheduler {
	graph: Rc<GraphModel>,
	config: AnimationConfig,
	highlight: HighlightState,
	state: RunState,
	active: Option<ActiveRun>,
	clock: Duration,
	next_handle: u64,
}

impl AnimationScheduler {
	/// Creates an idle scheduler for `graph`.
	pub fn new(graph: Rc<GraphModel>, config: AnimationConfig) -> Self {
		Self {
			graph,
			config,
			highlight: HighlightState::default(),
			state: RunState::Idle,
			active: None,
			clock: Duration::ZERO,
			next_handle: 1,
		}
	}

	/// The graph runs operate on.
	pub fn graph(&self) -> &GraphModel {
		&self.graph
	}

	/// Current highlight snapshot.
	pub fn highlight(&self) -> &HighlightState {
		&self.highlight
	}

	/// Current state token.
	pub fn state(&self) -> &RunState {
		&self.state
	}

	/// Timing in use.
	pub fn config(&self) -> AnimationConfig {
		self.config
	}

	/// Whether a run currently holds the guard.
	pub fn is_running(&self) -> bool {
		self.active.is_some()
	}

	/// Starts a run unless one is already active.
	///
	/// Returns `Ok(None)` and changes nothing while another run is active.
	/// Invalid nodes are reported before the guard is taken.
	pub fn request_run(&mut self, request: RunRequest) -> Result<Option<RunHandle>> {
		if let Some(active) = &self.active {
			debug!(
				"dropping {} request: {} run {:?} still animating",
				request.kind, active.kind, active.handle
			);
			return Ok(None);
		}

		let steps = algorithms::start(
			request.kind,
			Rc::clone(&self.graph),
			request.start,
			request.end,
		)?;

		let handle = RunHandle(self.next_handle);
		self.next_handle += 1;
		self.highlight = HighlightState::default();
		self.active = Some(ActiveRun {
			handle,
			kind: request.kind,
			steps,
			phase: Phase::NextStep,
			ready_at: self.clock,
			deadline: request.timeout.and_then(|t| self.clock.checked_add(t)),
			cancelled: false,
			applied: 0,
		});
		self.state = RunState::Running(handle);
		info!("{} run {:?} started from node {}", request.kind, handle, request.start);
		Ok(Some(handle))
	}

	/// Requests cancellation of `handle`; it takes effect at the next tick.
	pub fn cancel(&mut self, handle: RunHandle) -> bool {
		match &mut self.active {
			Some(active) if active.handle == handle => {
				active.cancelled = true;
				true
			}
			_ => false,
		}
	}

	/// Time until the next due event, `None` when idle.
	pub fn time_until_ready(&self) -> Option<Duration> {
		let active = self.active.as_ref()?;
		if active.cancelled {
			return Some(Duration::ZERO);
		}
		let due = match active.deadline {
			Some(deadline) => active.ready_at.min(deadline),
			None => active.ready_at,
		};
		Some(due.saturating_sub(self.clock))
	}

	/// Advances the clock by `dt` and processes everything that came due.
	/// Returns the report when the run ended during this tick.
	pub fn tick(&mut self, dt: Duration, renderer: &mut dyn Renderer) -> Option<RunReport> {
		self.clock += dt;
		loop {
			match self.advance(renderer) {
				Advance::Continue => {}
				Advance::Suspend => return None,
				Advance::Finish(outcome) => return self.finish(outcome, renderer),
			}
		}
	}

	/// Drives the active run to its end without waiting on real time.
	pub fn run_to_completion(&mut self, renderer: &mut dyn Renderer) -> Option<RunReport> {
		while let Some(wait) = self.time_until_ready() {
			if let Some(report) = self.tick(wait, renderer) {
				return Some(report);
			}
		}
		None
	}

	fn advance(&mut self, renderer: &mut dyn Renderer) -> Advance {
		let Some(active) = self.active.as_mut() else {
			return Advance::Suspend;
		};
		if active.cancelled {
			return Advance::Finish(RunOutcome::Aborted);
		}
		// events due before the deadline still run when one tick jumps past it
		if active
			.deadline
			.is_some_and(|deadline| self.clock >= deadline && active.ready_at >= deadline)
		{
			return Advance::Finish(RunOutcome::TimedOut);
		}
		if self.clock < active.ready_at {
			return Advance::Suspend;
		}

		match std::mem::replace(&mut active.phase, Phase::NextStep) {
			Phase::NextStep => {
				let Some(step) = active.steps.next() else {
					let outcome = active.steps.outcome().unwrap_or(Outcome::Complete);
					return Advance::Finish(outcome.into());
				};
				active.applied += 1;
				self.highlight = std::mem::take(&mut self.highlight).reduce(&step);
				match step.traversal {
					Some(traversal) => {
						active.phase = Phase::Animating { traversal, frame: 0 };
					}
					None => {
						renderer.render(&self.graph, &self.highlight);
						active.ready_at += self.config.step_delay();
					}
				}
			}
			Phase::Animating { traversal, frame } => {
				let frames = self.config.animation_frame_count;
				if frame > frames {
					self.highlight.markers.clear();
					renderer.render(&self.graph, &self.highlight);
					return Advance::Continue;
				}
				let t = if frames == 0 {
					1.0
				} else {
					f64::from(frame) / f64::from(frames)
				};
				let ends = (
					self.graph.position(traversal.edge.from),
					self.graph.position(traversal.edge.to),
				);
				if let (Some(from), Some(to)) = ends {
					self.highlight.markers = vec![Marker {
						position: from.lerp(to, t),
						color: traversal.color,
					}];
					renderer.render(&self.graph, &self.highlight);
				}
				active.ready_at += self.config.frame_delay();
				active.phase = Phase::Animating {
					traversal,
					frame: frame + 1,
				};
			}
		}
		Advance::Continue
	}

	fn finish(&mut self, outcome: RunOutcome, renderer: &mut dyn Renderer) -> Option<RunReport> {
		let active = self.active.take()?;
		self.highlight.markers.clear();
		renderer.render(&self.graph, &self.highlight);

		let total_weight = match outcome {
			RunOutcome::Aborted | RunOutcome::TimedOut => None,
			_ => active.steps.total_weight(),
		};
		let report = RunReport {
			handle: active.handle,
			kind: active.kind,
			outcome,
			total_weight,
			steps: active.applied,
		};
		info!(
			"{} run {:?} finished: {:?} after {} steps",
			report.kind, report.handle, report.outcome, report.steps
		);
		self.state = RunState::Completed(report.clone());
		Some(report)
	}
}
