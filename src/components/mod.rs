pub mod algo_graph;
