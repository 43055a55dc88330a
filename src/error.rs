use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("a flow graph needs at least one vertex")]
    InvalidVertexCount,

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("edge capacity must be non-negative")]
    NegativeCapacity,

    /// The residual graph holds a negative-cost cycle reachable from the source, so
    /// the cost is unbounded below.
    #[error("negative cost cycle reachable from the source")]
    NegativeCycle,
}
