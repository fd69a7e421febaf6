use crate::engine::{GraphModel, RunRequest};

/// Instructions the page sends to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
	Run(RunRequest),
	Stop,
}

/// Graph-space to screen-space mapping: `screen = graph * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Centers the graph's bounding box in the canvas, scaled uniformly so
	/// `padding` pixels stay free on the tighter side.
	pub fn fit(graph: &GraphModel, width: f64, height: f64, padding: f64) -> Self {
		let Some((lo, hi)) = graph.bounds() else {
			return Self::default();
		};
		let (gw, gh) = ((hi.x - lo.x).max(1.0), (hi.y - lo.y).max(1.0));
		let (aw, ah) = ((width - 2.0 * padding).max(1.0), (height - 2.0 * padding).max(1.0));
		let k = (aw / gw).min(ah / gh).clamp(0.1, 10.0);
		let center = lo.lerp(hi, 0.5);
		Self {
			x: width / 2.0 - center.x * k,
			y: height / 2.0 - center.y * k,
			k,
		}
	}
}
