use std::collections::VecDeque;

use log::{debug, trace};

use crate::{
    Cost, EdgeHandle, Flow, FlowError, FlowGraph,
    search::{LevelGraph, shortest_augmenting_path},
};

/// Augmentation strategy used by [`FlowGraph::max_flow`]. Both compute the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaxFlowStrategy {
    /// One BFS shortest augmenting path per round, `O(V E^2)`.
    EdmondsKarp,
    /// Level graph phases with current-arc blocking flows, `O(V^2 E)`.
    #[default]
    Dinic,
}

impl<F, C> FlowGraph<F, C>
where
    F: Flow,
    C: Cost,
{
    /// Saturates flow from `source` to `sink` on top of whatever flow the graph already
    /// carries and returns the amount pushed by this call.
    pub fn max_flow(
        &mut self,
        source: usize,
        sink: usize,
        strategy: MaxFlowStrategy,
    ) -> Result<F, FlowError> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        if source == sink {
            return Ok(F::zero());
        }

        let total = match strategy {
            MaxFlowStrategy::EdmondsKarp => self.edmonds_karp(source, sink),
            MaxFlowStrategy::Dinic => self.dinic(source, sink),
        };

        debug!("Max flow {} -> {} with {:?}: {:?}", source, sink, strategy, total);
        Ok(total)
    }

    fn edmonds_karp(&mut self, source: usize, sink: usize) -> F {
        let mut total = F::zero();
        while let Some(path) = shortest_augmenting_path(self, source, sink) {
            let amount = self.bottleneck(&path);
            trace!("Augmenting {:?} along {} arcs", amount, path.len());
            self.augment(&path, amount);
            total = total + amount;
        }
        total
    }

    fn dinic(&mut self, source: usize, sink: usize) -> F {
        let mut levels = LevelGraph::new(self.vertex_count());
        let mut total = F::zero();
        let mut phase = 0;
        while levels.rebuild(self, source, sink) {
            let pushed = levels.blocking_flow(self, source, sink);
            trace!("Phase {}: blocking flow {:?}", phase, pushed);
            total = total + pushed;
            phase += 1;
        }
        total
    }

    /// Forward edges leaving the set of vertices reachable from `source` in the residual
    /// graph. After a max-flow run their capacities sum to the flow value.
    pub fn min_cut(&self, source: usize) -> Result<Vec<EdgeHandle>, FlowError> {
        self.check_vertex(source)?;

        let mut reachable = vec![false; self.vertex_count()];
        reachable[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for &edge in self.adjacent(u) {
                let arc = self.edge(edge);
                if !reachable[arc.to] && arc.has_residual_capacity() {
                    reachable[arc.to] = true;
                    queue.push_back(arc.to);
                }
            }
        }

        Ok(self
            .handles()
            .filter(|edge| edge.is_forward())
            .filter(|&edge| reachable[self.tail(edge)] && !reachable[self.edge(edge).to])
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_util::{assert_flow_invariants, init_logging};
    use proptest::prelude::*;

    const STRATEGIES: [MaxFlowStrategy; 2] = [MaxFlowStrategy::EdmondsKarp, MaxFlowStrategy::Dinic];

    fn textbook_network() -> FlowGraph {
        let mut graph = FlowGraph::new(6).unwrap();
        for (u, v, capacity) in [
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ] {
            graph.add_edge(u, v, capacity).unwrap();
        }
        graph
    }

    #[test]
    fn test_textbook_network() {
        init_logging();
        for strategy in STRATEGIES {
            let mut graph = textbook_network();
            assert_eq!(graph.max_flow(0, 5, strategy).unwrap(), 23);
            assert_flow_invariants(&graph, &[0, 5]);
            assert_eq!(graph.net_outflow(0).unwrap(), 23);
        }
    }

    #[test]
    fn test_min_cut_matches_flow() {
        let mut graph = textbook_network();
        let flow = graph.max_flow(0, 5, MaxFlowStrategy::Dinic).unwrap();
        let cut = graph.min_cut(0).unwrap();
        let capacity: i64 = cut.iter().map(|&edge| graph.edge(edge).capacity()).sum();
        assert_eq!(capacity, flow);
        for edge in cut {
            assert_eq!(graph.edge(edge).residual_capacity(), 0);
        }
    }

    #[test]
    fn test_source_equals_sink() {
        for strategy in STRATEGIES {
            let mut graph = textbook_network();
            assert_eq!(graph.max_flow(3, 3, strategy).unwrap(), 0);
            assert_eq!(graph.flow(EdgeHandle { index: 0 }), 0);
        }
    }

    #[test]
    fn test_out_of_range_terminals() {
        for strategy in STRATEGIES {
            let mut graph = textbook_network();
            assert_eq!(
                graph.max_flow(0, 6, strategy).unwrap_err(),
                FlowError::VertexOutOfRange {
                    vertex: 6,
                    vertex_count: 6
                }
            );
            assert!(graph.max_flow(usize::MAX, 5, strategy).is_err());
        }
        assert!(textbook_network().min_cut(9).is_err());
    }

    #[test]
    fn test_disconnected_nodes() {
        for strategy in STRATEGIES {
            let mut graph: FlowGraph = FlowGraph::new(4).unwrap();
            graph.add_edge(0, 1, 5).unwrap();
            graph.add_edge(2, 3, 5).unwrap();
            assert_eq!(graph.max_flow(0, 3, strategy).unwrap(), 0);
        }
    }

    #[test]
    fn test_parallel_edges_and_self_loop() {
        for strategy in STRATEGIES {
            let mut graph: FlowGraph = FlowGraph::new(2).unwrap();
            let a = graph.add_edge(0, 1, 4).unwrap();
            let b = graph.add_edge(0, 1, 3).unwrap();
            graph.add_edge(1, 1, 10).unwrap();
            assert_eq!(graph.max_flow(0, 1, strategy).unwrap(), 7);
            assert_eq!(graph.flow(a), 4);
            assert_eq!(graph.flow(b), 3);
        }
    }

    #[test]
    fn test_diamond_with_cross_arc() {
        for strategy in STRATEGIES {
            let mut graph: FlowGraph = FlowGraph::new(4).unwrap();
            graph.add_edge(0, 1, 1).unwrap();
            graph.add_edge(0, 2, 1).unwrap();
            graph.add_edge(1, 2, 1).unwrap();
            graph.add_edge(1, 3, 1).unwrap();
            graph.add_edge(2, 3, 1).unwrap();
            assert_eq!(graph.max_flow(0, 3, strategy).unwrap(), 2);
            assert_flow_invariants(&graph, &[0, 3]);
        }
    }

    #[test]
    fn test_second_run_adds_nothing_until_reset() {
        let mut graph = textbook_network();
        assert_eq!(graph.max_flow(0, 5, MaxFlowStrategy::EdmondsKarp).unwrap(), 23);
        assert_eq!(graph.max_flow(0, 5, MaxFlowStrategy::Dinic).unwrap(), 0);
        graph.reset_flows();
        assert_eq!(graph.max_flow(0, 5, MaxFlowStrategy::Dinic).unwrap(), 23);
    }

    #[test]
    fn test_narrow_integer_types() {
        let mut graph: FlowGraph<i32, i32> = FlowGraph::new(3).unwrap();
        graph.add_edge(0, 1, i32::MAX).unwrap();
        graph.add_edge(1, 2, 12).unwrap();
        assert_eq!(graph.max_flow(0, 2, MaxFlowStrategy::Dinic).unwrap(), 12);
    }

    #[test]
    fn test_long_path() {
        for strategy in STRATEGIES {
            let n = 100_000;
            let mut graph: FlowGraph = FlowGraph::new(n).unwrap();
            for u in 0..n - 1 {
                graph.add_edge(u, u + 1, 1).unwrap();
            }
            assert_eq!(graph.max_flow(0, n - 1, strategy).unwrap(), 1);
            assert_eq!(graph.net_outflow(n - 1).unwrap(), -1);
        }
    }

    fn arb_network() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
        (2usize..8).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0i64..20), 0..30),
            )
        })
    }

    proptest! {
        #[test]
        fn test_strategies_agree((n, arcs) in arb_network()) {
            let mut graphs = [FlowGraph::<i64, i64>::new(n).unwrap(), FlowGraph::new(n).unwrap()];
            for graph in graphs.iter_mut() {
                for &(u, v, capacity) in &arcs {
                    graph.add_edge(u, v, capacity).unwrap();
                }
            }

            let [ek, dinic] = &mut graphs;
            let ek_flow = ek.max_flow(0, n - 1, MaxFlowStrategy::EdmondsKarp).unwrap();
            let dinic_flow = dinic.max_flow(0, n - 1, MaxFlowStrategy::Dinic).unwrap();
            prop_assert_eq!(ek_flow, dinic_flow);

            for graph in [&*ek, &*dinic] {
                assert_flow_invariants(graph, &[0, n - 1]);
                let cut: i64 = graph
                    .min_cut(0)
                    .unwrap()
                    .iter()
                    .map(|&edge| graph.edge(edge).capacity())
                    .sum();
                prop_assert_eq!(cut, ek_flow);
            }
        }
    }
}
