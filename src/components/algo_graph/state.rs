use std::rc::Rc;
use std::time::Duration;

use web_sys::CanvasRenderingContext2d;

use super::background::Background;
use super::render::{self, Viewport};
use super::types::ViewTransform;
use crate::engine::{
	AnimationConfig, AnimationScheduler, GraphModel, HighlightState, RunOutcome, RunReport,
	RunState,
};

pub const NODE_RADIUS: f64 = 25.0;
pub const MARKER_RADIUS: f64 = 8.0;
pub const VIEW_PADDING: f64 = 60.0;
/// Longer gaps (hidden tab, debugger) are clamped so a run never skips ahead.
const MAX_FRAME_MS: f64 = 100.0;

pub struct CanvasState {
	pub scheduler: AnimationScheduler,
	pub background: Background,
	pub transform: ViewTransform,
	pub width: f64,
	pub height: f64,
	last_frame_ms: Option<f64>,
}

impl CanvasState {
	pub fn new(graph: GraphModel, config: AnimationConfig, width: f64, height: f64) -> Self {
		let transform = ViewTransform::fit(&graph, width, height, VIEW_PADDING);
		Self {
			scheduler: AnimationScheduler::new(Rc::new(graph), config),
			background: Background::new(width, height, js_sys::Math::random),
			transform,
			width,
			height,
			last_frame_ms: None,
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.transform = ViewTransform::fit(self.scheduler.graph(), width, height, VIEW_PADDING);
		self.background.resize(width, height);
	}

	/// Advances every animation to `now_ms` and repaints. Returns the report
	/// of a run that ended during this frame.
	pub fn frame(&mut self, now_ms: f64, ctx: &CanvasRenderingContext2d) -> Option<RunReport> {
		let dt_ms = self
			.last_frame_ms
			.map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_FRAME_MS));
		self.last_frame_ms = Some(now_ms);
		self.background.tick(dt_ms);

		let view = Viewport {
			width: self.width,
			height: self.height,
			transform: self.transform,
		};
		let background = &self.background;
		let mut painted = false;
		let report = self.scheduler.tick(
			Duration::from_secs_f64(dt_ms / 1000.0),
			&mut |graph: &GraphModel, highlight: &HighlightState| {
				render::render(ctx, &view, background, graph, highlight);
				painted = true;
			},
		);
		if !painted {
			render::render(
				ctx,
				&view,
				&self.background,
				self.scheduler.graph(),
				self.scheduler.highlight(),
			);
		}
		report
	}

	/// Cancels whatever run is animating.
	pub fn stop(&mut self) -> bool {
		let running = match self.scheduler.state() {
			RunState::Running(handle) => Some(*handle),
			_ => None,
		};
		running.is_some_and(|handle| self.scheduler.cancel(handle))
	}
}

/// One-line summary for the status bar.
pub fn status_line(report: &RunReport) -> String {
	let kind = report.kind;
	match report.outcome {
		RunOutcome::Complete => match report.total_weight {
			Some(weight) => format!("{kind} complete! Total weight {weight}."),
			None => format!("{kind} complete!"),
		},
		RunOutcome::NoPathFound => "No path found!".to_string(),
		RunOutcome::Incomplete => match report.total_weight {
			Some(weight) => format!("{kind} incomplete: graph is disconnected (forest weight {weight})."),
			None => format!("{kind} incomplete: graph is disconnected."),
		},
		RunOutcome::Aborted => format!("{kind} stopped."),
		RunOutcome::TimedOut => format!("{kind} timed out."),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::{AlgorithmKind, RunRequest};

	fn finished(request: RunRequest) -> RunReport {
		let mut scheduler =
			AnimationScheduler::new(Rc::new(GraphModel::sample()), AnimationConfig::default());
		scheduler.request_run(request).unwrap();
		scheduler
			.run_to_completion(&mut |_: &GraphModel, _: &HighlightState| {})
			.unwrap()
	}

	#[test]
	fn status_lines_name_the_result() {
		let report = finished(RunRequest::new(AlgorithmKind::ShortestPath, 0).to(5));
		assert_eq!(status_line(&report), "Dijkstra complete! Total weight 4.");

		let report = finished(RunRequest::new(AlgorithmKind::Traversal, 0));
		assert_eq!(status_line(&report), "BFS complete!");

		let report = finished(RunRequest::new(AlgorithmKind::KruskalMst, 0));
		assert_eq!(status_line(&report), "Kruskal MST complete! Total weight 9.");
	}

	#[test]
	fn status_line_for_interrupted_runs() {
		let report = finished(
			RunRequest::new(AlgorithmKind::PrimMst, 0).with_timeout(Duration::from_millis(10)),
		);
		assert_eq!(report.outcome, RunOutcome::TimedOut);
		assert_eq!(status_line(&report), "Prim MST timed out.");
	}
}
