use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::background::Background;
use super::state::{MARKER_RADIUS, NODE_RADIUS};
use super::types::ViewTransform;
use crate::engine::{GraphModel, HighlightState};

const CANVAS_FILL: &str = "#1a1a2e";
const EDGE_COLOR: &str = "#888";
const MST_COLOR: &str = "#ffeb3b";
const PATH_COLOR: &str = "#ff6347";
const FLOATER_FILL: &str = "rgba(255,255,255,0.2)";

pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub transform: ViewTransform,
}

pub fn render(
	ctx: &CanvasRenderingContext2d,
	view: &Viewport,
	background: &Background,
	graph: &GraphModel,
	highlight: &HighlightState,
) {
	ctx.set_fill_style_str(CANVAS_FILL);
	ctx.fill_rect(0.0, 0.0, view.width, view.height);
	draw_background(ctx, background);

	ctx.save();
	let _ = ctx.translate(view.transform.x, view.transform.y);
	let _ = ctx.scale(view.transform.k, view.transform.k);
	draw_edges(ctx, graph, highlight);
	draw_nodes(ctx, graph, highlight);
	draw_markers(ctx, highlight);
	ctx.restore();
}

fn draw_background(ctx: &CanvasRenderingContext2d, background: &Background) {
	ctx.set_fill_style_str(FLOATER_FILL);
	for f in background.floaters() {
		ctx.begin_path();
		let _ = ctx.arc(f.x, f.y, f.radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_edges(ctx: &CanvasRenderingContext2d, graph: &GraphModel, highlight: &HighlightState) {
	ctx.set_line_width(3.0);
	ctx.set_font("14px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for edge in graph.undirected_edges() {
		let (Some(a), Some(b)) = (graph.position(edge.from), graph.position(edge.to)) else {
			continue;
		};
		// path wins over spanning tree
		let color = if highlight.is_path_edge(edge.from, edge.to) {
			PATH_COLOR
		} else if highlight.is_mst_edge(edge.from, edge.to) {
			MST_COLOR
		} else {
			EDGE_COLOR
		};

		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.set_stroke_style_str(color);
		ctx.stroke();

		let mid = a.lerp(b, 0.5);
		ctx.set_fill_style_str(CANVAS_FILL);
		ctx.begin_path();
		let _ = ctx.arc(mid.x, mid.y, 11.0, 0.0, 2.0 * PI);
		ctx.fill();
		ctx.set_fill_style_str(color);
		let _ = ctx.fill_text(&edge.weight.to_string(), mid.x, mid.y);
	}
}

fn draw_nodes(ctx: &CanvasRenderingContext2d, graph: &GraphModel, highlight: &HighlightState) {
	ctx.set_font("16px sans-serif");
	for node in graph.nodes() {
		let (x, y) = (node.position.x, node.position.y);
		let (inner, outer) = if highlight.is_visited(node.id) {
			("#ffeb3b", "#ff9800")
		} else {
			("#00bfff", "#1e90ff")
		};

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		match ctx.create_radial_gradient(x, y, 5.0, x, y, NODE_RADIUS) {
			Ok(gradient) => {
				let _ = gradient.add_color_stop(0.0, inner);
				let _ = gradient.add_color_stop(1.0, outer);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
			}
			Err(_) => ctx.set_fill_style_str(outer),
		}
		ctx.fill();

		ctx.set_fill_style_str("white");
		let _ = ctx.fill_text(&node.id.to_string(), x, y);
	}
}

fn draw_markers(ctx: &CanvasRenderingContext2d, highlight: &HighlightState) {
	for marker in &highlight.markers {
		ctx.begin_path();
		let _ = ctx.arc(
			marker.position.x,
			marker.position.y,
			MARKER_RADIUS,
			0.0,
			2.0 * PI,
		);
		ctx.set_fill_style_str(marker.color);
		ctx.fill();
	}
}
