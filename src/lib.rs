//! Exact network-flow primitives over integer capacities and costs: maximum flow
//! (Edmonds-Karp or Dinic), successive-shortest-path min-cost flow, and min-cost
//! circulation with lower and upper bounds.
//!
//! ```
//! use netflow::{FlowGraph, MaxFlowStrategy};
//!
//! let mut graph: FlowGraph = FlowGraph::new(3)?;
//! graph.add_edge_with_cost(0, 1, 4, 2)?;
//! graph.add_edge_with_cost(1, 2, 3, 1)?;
//! assert_eq!(graph.clone().max_flow(0, 2, MaxFlowStrategy::Dinic)?, 3);
//! assert_eq!(graph.min_cost_max_flow(0, 2, None)?, (3, 9));
//! # Ok::<(), netflow::FlowError>(())
//! ```

mod circulation;
mod cost;
mod edge;
mod error;
mod flow;
mod graph;
mod max_flow;
mod min_cost_flow;
mod search;
mod shortest_path;

pub use circulation::{BoundedEdge, Circulation, min_cost_feasible_circulation};
pub use cost::Cost;
pub use edge::*;
pub use error::FlowError;
pub use flow::Flow;
pub use graph::*;
pub use max_flow::MaxFlowStrategy;
