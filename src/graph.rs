use crate::{EdgeHandle, FlowEdge, FlowError, cost::Cost, flow::Flow};

/// Residual graph over a fixed set of vertices `0..n`.
///
/// Every call to [`FlowGraph::add_edge`] appends a forward arc and its zero-capacity reverse
/// arc with negated cost. Flow algorithms mutate the stored flows in place and never reset
/// them; use [`FlowGraph::reset_flows`] between independent runs.
#[derive(Clone, Debug)]
pub struct FlowGraph<F = i64, C = i64>
where
    F: Flow,
    C: Cost,
{
    edges: Vec<FlowEdge<F, C>>,
    adjacency: Vec<Vec<EdgeHandle>>,
}

impl<F, C> FlowGraph<F, C>
where
    F: Flow,
    C: Cost,
{
    pub fn new(vertex_count: usize) -> Result<Self, FlowError> {
        if vertex_count == 0 {
            return Err(FlowError::InvalidVertexCount);
        }

        Ok(FlowGraph {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of forward edges added by the caller.
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(FlowError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    pub fn add_edge(
        &mut self,
        from: usize,
        to: usize,
        capacity: F,
    ) -> Result<EdgeHandle, FlowError> {
        self.add_edge_with_cost(from, to, capacity, C::zero())
    }

    pub fn add_edge_with_cost(
        &mut self,
        from: usize,
        to: usize,
        capacity: F,
        cost: C,
    ) -> Result<EdgeHandle, FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity < F::zero() {
            return Err(FlowError::NegativeCapacity);
        }

        let handle = EdgeHandle {
            index: self.edges.len(),
        };

        self.edges.push(FlowEdge::new(to, capacity, cost));
        // Initially zero capacity on the backward edge
        self.edges.push(FlowEdge::new(from, F::zero(), -cost));

        self.adjacency[from].push(handle);
        self.adjacency[to].push(handle.reverse());

        Ok(handle)
    }

    /// Arcs leaving `vertex`, forward and reverse, in the order they were added.
    pub fn edges_of(&self, vertex: usize) -> Result<&[EdgeHandle], FlowError> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// # Panics
    ///
    /// Panics if `edge` was not returned by this graph. The same holds for
    /// [`FlowGraph::flow`] and [`FlowGraph::tail`].
    pub fn edge(&self, edge: EdgeHandle) -> &FlowEdge<F, C> {
        &self.edges[edge.index]
    }

    pub fn flow(&self, edge: EdgeHandle) -> F {
        self.edges[edge.index].flow
    }

    /// Vertex an arc starts from. Panics on a handle from another graph.
    pub fn tail(&self, edge: EdgeHandle) -> usize {
        self.edges[edge.index ^ 1].to
    }

    /// Flow leaving `vertex` minus flow entering it.
    pub fn net_outflow(&self, vertex: usize) -> Result<F, FlowError> {
        self.check_vertex(vertex)?;
        // Reverse arcs hold the negated flow of the arc entering `vertex`
        Ok(self.adjacency[vertex]
            .iter()
            .fold(F::zero(), |sum, &edge| sum + self.edges[edge.index].flow))
    }

    pub fn reset_flows(&mut self) {
        for edge in self.edges.iter_mut() {
            edge.flow = F::zero();
        }
    }

    pub(crate) fn adjacent(&self, vertex: usize) -> &[EdgeHandle] {
        &self.adjacency[vertex]
    }

    pub(crate) fn handles(&self) -> impl Iterator<Item = EdgeHandle> + use<F, C> {
        (0..self.edges.len()).map(|index| EdgeHandle { index })
    }

    pub(crate) fn push(&mut self, edge: EdgeHandle, amount: F) {
        let forward = &mut self.edges[edge.index];
        forward.flow = forward.flow + amount;
        let backward = &mut self.edges[edge.index ^ 1];
        backward.flow = backward.flow - amount;
    }

    pub(crate) fn bottleneck(&self, path: &[EdgeHandle]) -> F {
        path.iter()
            .map(|&edge| self.edge(edge).residual_capacity())
            .min()
            .unwrap_or_else(F::zero)
    }

    pub(crate) fn augment(&mut self, path: &[EdgeHandle], amount: F) {
        for &edge in path {
            self.push(edge, amount);
        }
    }
}
