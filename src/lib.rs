pub mod config;
pub mod edge_list;
pub mod graph;
