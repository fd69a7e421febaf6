const FLOATER_COUNT: usize = 30;
/// Velocities are expressed per frame of this length.
const REFERENCE_FRAME_MS: f64 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Floater {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub dx: f64,
	pub dy: f64,
}

/// Decorative dots drifting behind the graph.
#[derive(Clone, Debug, Default)]
pub struct Background {
	floaters: Vec<Floater>,
	width: f64,
	height: f64,
}

impl Background {
	/// `random` must return values in `[0, 1)`.
	pub fn new(width: f64, height: f64, mut random: impl FnMut() -> f64) -> Self {
		let floaters = (0..FLOATER_COUNT)
			.map(|_| Floater {
				x: random() * width,
				y: random() * height,
				radius: random() * 3.0 + 1.0,
				dx: random() * 0.5 - 0.25,
				dy: random() * 0.5 - 0.25,
			})
			.collect();
		Self {
			floaters,
			width,
			height,
		}
	}

	pub fn floaters(&self) -> &[Floater] {
		&self.floaters
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn tick(&mut self, dt_ms: f64) {
		let scale = dt_ms / REFERENCE_FRAME_MS;
		for f in &mut self.floaters {
			f.x += f.dx * scale;
			f.y += f.dy * scale;
			if f.x < 0.0 || f.x > self.width {
				f.dx = -f.dx;
			}
			if f.y < 0.0 || f.y > self.height {
				f.dy = -f.dy;
			}
		}
	}
}
