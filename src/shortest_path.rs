//! Cheapest residual paths for successive shortest path min-cost flow.
//!
//! The first search runs Bellman-Ford on the original (possibly negative) costs. Its
//! distances seed the vertex potentials, after which every arc with residual capacity has a
//! non-negative reduced cost and the remaining searches run Dijkstra.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{Cost, EdgeHandle, Flow, FlowError, FlowGraph};

// Unreachable vertices have no distance.
pub(crate) struct ShortestPaths<C> {
    distances: Vec<Option<C>>,
    predecessors: Vec<Option<EdgeHandle>>,
}

impl<C> ShortestPaths<C>
where
    C: Cost,
{
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(C::zero());
        ShortestPaths {
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    #[cfg(test)]
    pub(crate) fn distance(&self, vertex: usize) -> Option<C> {
        self.distances[vertex]
    }

    pub(crate) fn path_to<F: Flow>(
        &self,
        graph: &FlowGraph<F, C>,
        target: usize,
    ) -> Option<Vec<EdgeHandle>> {
        self.distances[target]?;

        let mut path = Vec::new();
        let mut current = target;
        while let Some(edge) = self.predecessors[current] {
            path.push(edge);
            current = graph.tail(edge);
        }
        path.reverse();

        Some(path)
    }
}

pub(crate) fn bellman_ford<F, C>(
    graph: &FlowGraph<F, C>,
    source: usize,
) -> Result<ShortestPaths<C>, FlowError>
where
    F: Flow,
    C: Cost,
{
    let mut paths = ShortestPaths::new(graph.vertex_count(), source);
    relax(graph, &mut paths)?;
    Ok(paths)
}

// Unlike `bellman_ford`, also catches cycles no single source reaches.
pub(crate) fn check_negative_cycles<F, C>(graph: &FlowGraph<F, C>) -> Result<(), FlowError>
where
    F: Flow,
    C: Cost,
{
    // Every vertex starts at distance zero, as if fed by a virtual source
    let mut paths = ShortestPaths {
        distances: vec![Some(C::zero()); graph.vertex_count()],
        predecessors: vec![None; graph.vertex_count()],
    };
    relax(graph, &mut paths)
}

fn relax<F, C>(graph: &FlowGraph<F, C>, paths: &mut ShortestPaths<C>) -> Result<(), FlowError>
where
    F: Flow,
    C: Cost,
{
    let vertex_count = graph.vertex_count();

    // Relax edges |V| times (an extra iteration to detect negative cycles)
    for round in 0..vertex_count {
        let mut updated = false;

        for edge in graph.handles() {
            let arc = graph.edge(edge);
            if arc.has_residual_capacity()
                && let Some(distance) = paths.distances[graph.tail(edge)]
                && paths.distances[arc.to].is_none_or(|current| distance + arc.cost < current)
            {
                if round == vertex_count - 1 {
                    return Err(FlowError::NegativeCycle);
                }

                paths.distances[arc.to] = Some(distance + arc.cost);
                paths.predecessors[arc.to] = Some(edge);
                updated = true;
            }
        }

        if !updated {
            break;
        }
    }

    Ok(())
}

// Distances come back reduced by `potentials`.
pub(crate) fn dijkstra<F, C>(
    graph: &FlowGraph<F, C>,
    source: usize,
    potentials: &Potentials<C>,
) -> ShortestPaths<C>
where
    F: Flow,
    C: Cost,
{
    let mut paths = ShortestPaths::new(graph.vertex_count(), source);
    let mut queue = BinaryHeap::from([Reverse((C::zero(), source))]);

    while let Some(Reverse((distance, u))) = queue.pop() {
        if paths.distances[u].is_some_and(|best| distance > best) {
            continue;
        }

        for &edge in graph.adjacent(u) {
            let arc = graph.edge(edge);
            if !arc.has_residual_capacity() {
                continue;
            }

            let candidate = distance + potentials.reduced_cost(u, arc.to, arc.cost);
            if paths.distances[arc.to].is_none_or(|current| candidate < current) {
                paths.distances[arc.to] = Some(candidate);
                paths.predecessors[arc.to] = Some(edge);
                queue.push(Reverse((candidate, arc.to)));
            }
        }
    }

    paths
}

pub(crate) struct Potentials<C> {
    values: Vec<C>,
}

impl<C> Potentials<C>
where
    C: Cost,
{
    // Unreachable vertices start at zero
    pub(crate) fn from_distances(paths: &ShortestPaths<C>) -> Self {
        Potentials {
            values: paths
                .distances
                .iter()
                .map(|distance| distance.unwrap_or_else(C::zero))
                .collect(),
        }
    }

    pub(crate) fn reduced_cost(&self, from: usize, to: usize, cost: C) -> C {
        cost + self.values[from] - self.values[to]
    }

    pub(crate) fn absorb(&mut self, paths: &ShortestPaths<C>) {
        for (value, distance) in self.values.iter_mut().zip(paths.distances.iter()) {
            if let Some(distance) = distance {
                *value = *value + *distance;
            }
        }
    }
}
