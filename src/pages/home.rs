use leptos::prelude::*;
use log::warn;

use crate::components::algo_graph::{AlgoGraphCanvas, Command};
use crate::engine::{AlgorithmKind, GraphModel, NodeId, RunRequest};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = GraphModel::sample();
	let node_count = graph.node_count();
	let last = node_count.saturating_sub(1);

	let (start, set_start) = signal::<NodeId>(0);
	let (end, set_end) = signal::<NodeId>(last);
	let (kind, set_kind) = signal(AlgorithmKind::Traversal);
	let (command, set_command) = signal(None::<Command>);
	let (status, set_status) = signal(String::from("Pick an algorithm and press Run."));

	let node_options = move |selected: NodeId| {
		(0..node_count)
			.map(|i| {
				let is_selected = i == selected;
				view! {
					<option value=i.to_string() selected=is_selected>
						{i}
					</option>
				}
			})
			.collect_view()
	};

	let on_algorithm = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<AlgorithmKind>() {
		Ok(k) => set_kind.set(k),
		Err(err) => {
			warn!("{err}");
			set_status.set(err.to_string());
		}
	};

	let run = move |_: leptos::ev::MouseEvent| {
		let request = RunRequest::new(kind.get(), start.get()).to(end.get());
		set_command.set(Some(Command::Run(request)));
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<AlgoGraphCanvas graph=graph commands=command status=set_status fullscreen=true />
				<div class="graph-overlay">
					<h1>"Graph Algorithms"</h1>
					<p class="subtitle">"Watch BFS, Dijkstra, Prim and Kruskal work step by step."</p>
					<div class="controls">
						<label>
							"Start "
							<select on:change=move |ev| {
								set_start.set(event_target_value(&ev).parse().unwrap_or(0))
							}>{node_options(0)}</select>
						</label>
						<label>
							"End "
							<select on:change=move |ev| {
								set_end.set(event_target_value(&ev).parse().unwrap_or(last))
							}>{node_options(last)}</select>
						</label>
						<label>
							"Algorithm "
							<select on:change=on_algorithm>
								{AlgorithmKind::ALL
									.into_iter()
									.map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
									.collect_view()}
							</select>
						</label>
						<button on:click=run>"Run"</button>
						<button on:click=move |_| set_command.set(Some(Command::Stop))>"Stop"</button>
					</div>
					<p class="status">{move || status.get()}</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
