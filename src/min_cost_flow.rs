use log::{debug, trace};

use crate::{
    Cost, Flow, FlowError, FlowGraph,
    shortest_path::{Potentials, bellman_ford, dijkstra},
};

impl<F, C> FlowGraph<F, C>
where
    F: Flow,
    C: Cost + From<F>,
{
    /// Maximize flow from `source` to `sink` while minimizing cost, using successive shortest
    /// paths. Returns the flow pushed by this call and its total cost.
    ///
    /// The first path comes from Bellman-Ford so negative arc costs are allowed; after that the
    /// search runs Dijkstra on reduced costs. With `flow_limit` set, at most that much flow is
    /// routed; without it the run stops only once the sink is unreachable.
    ///
    /// Fails with [`FlowError::NegativeCycle`] when a negative-cost cycle is reachable from
    /// `source`, since the cost would then be unbounded.
    pub fn min_cost_max_flow(
        &mut self,
        source: usize,
        sink: usize,
        flow_limit: Option<F>,
    ) -> Result<(F, C), FlowError> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;

        let mut total_flow = F::zero();
        let mut total_cost = C::zero();
        if source == sink || flow_limit.is_some_and(|limit| limit <= F::zero()) {
            return Ok((total_flow, total_cost));
        }

        let mut paths = bellman_ford(self, source)?;
        let mut potentials = Potentials::from_distances(&paths);

        while let Some(path) = paths.path_to(self, sink) {
            let mut amount = self.bottleneck(&path);
            if let Some(limit) = flow_limit {
                amount = amount.min(limit - total_flow);
            }

            let path_cost: C = path.iter().map(|&edge| self.edge(edge).cost).sum();
            trace!(
                "Augmenting {:?} at unit cost {:?} along {} arcs",
                amount,
                path_cost,
                path.len()
            );

            self.augment(&path, amount);
            total_flow = total_flow + amount;
            total_cost = total_cost + C::from(amount) * path_cost;

            if flow_limit.is_some_and(|limit| total_flow >= limit) {
                break;
            }

            paths = dijkstra(self, source, &potentials);
            potentials.absorb(&paths);
        }

        debug!(
            "Min cost flow {} -> {}: flow {:?}, cost {:?}",
            source, sink, total_flow, total_cost
        );
        Ok((total_flow, total_cost))
    }
}
