//! Augmenting-path searches over the residual graph.

use std::collections::VecDeque;

use crate::{Cost, EdgeHandle, Flow, FlowGraph};

// Fewest-arc augmenting path from `source` to `sink`, in path order.
pub(crate) fn shortest_augmenting_path<F, C>(
    graph: &FlowGraph<F, C>,
    source: usize,
    sink: usize,
) -> Option<Vec<EdgeHandle>>
where
    F: Flow,
    C: Cost,
{
    let mut incoming: Vec<Option<EdgeHandle>> = vec![None; graph.vertex_count()];
    let mut visited = vec![false; graph.vertex_count()];
    visited[source] = true;

    let mut queue = VecDeque::from([source]);
    'search: while let Some(u) = queue.pop_front() {
        for &edge in graph.adjacent(u) {
            let arc = graph.edge(edge);
            if visited[arc.to] || !arc.has_residual_capacity() {
                continue;
            }

            visited[arc.to] = true;
            incoming[arc.to] = Some(edge);
            if arc.to == sink {
                break 'search;
            }
            queue.push_back(arc.to);
        }
    }

    if !visited[sink] {
        return None;
    }

    let mut path = Vec::new();
    let mut current = sink;
    while let Some(edge) = incoming[current] {
        path.push(edge);
        current = graph.tail(edge);
    }
    path.reverse();

    Some(path)
}

// Level graph of one Dinic phase with its current-arc cursors
pub(crate) struct LevelGraph {
    level: Vec<Option<usize>>,
    cursor: Vec<usize>,
}

impl LevelGraph {
    pub(crate) fn new(vertex_count: usize) -> Self {
        LevelGraph {
            level: vec![None; vertex_count],
            cursor: vec![0; vertex_count],
        }
    }

    // Returns whether `sink` is still reachable.
    pub(crate) fn rebuild<F, C>(
        &mut self,
        graph: &FlowGraph<F, C>,
        source: usize,
        sink: usize,
    ) -> bool
    where
        F: Flow,
        C: Cost,
    {
        self.level.fill(None);
        self.cursor.fill(0);
        self.level[source] = Some(0);

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            let next = self.level[u].map(|level| level + 1);
            for &edge in graph.adjacent(u) {
                let arc = graph.edge(edge);
                if self.level[arc.to].is_none() && arc.has_residual_capacity() {
                    self.level[arc.to] = next;
                    queue.push_back(arc.to);
                }
            }
        }

        self.level[sink].is_some()
    }

    fn is_live<F, C>(&self, graph: &FlowGraph<F, C>, u: usize, edge: EdgeHandle) -> bool
    where
        F: Flow,
        C: Cost,
    {
        let arc = graph.edge(edge);
        if !arc.has_residual_capacity() {
            return false;
        }
        match (self.level[u], self.level[arc.to]) {
            (Some(from), Some(to)) => to == from + 1,
            _ => false,
        }
    }

    pub(crate) fn blocking_flow<F, C>(
        &mut self,
        graph: &mut FlowGraph<F, C>,
        source: usize,
        sink: usize,
    ) -> F
    where
        F: Flow,
        C: Cost,
    {
        let mut total = F::zero();
        let mut path = Vec::new();
        loop {
            let pushed = self.advance(graph, source, sink, &mut path);
            if pushed == F::zero() {
                return total;
            }
            total = total + pushed;
        }
    }

    // Walks live arcs from `source`, retreating out of dead ends, until it reaches `sink` and
    // saturates the walked path. `path` is the arc stack of the walk.
    fn advance<F, C>(
        &mut self,
        graph: &mut FlowGraph<F, C>,
        source: usize,
        sink: usize,
        path: &mut Vec<EdgeHandle>,
    ) -> F
    where
        F: Flow,
        C: Cost,
    {
        path.clear();
        let mut u = source;
        while u != sink {
            if let Some(edge) = self.current_arc(graph, u) {
                path.push(edge);
                u = graph.edge(edge).to;
                continue;
            }

            // Dead end: nothing reaches the sink through `u` in this phase
            let Some(edge) = path.pop() else {
                return F::zero();
            };
            u = graph.tail(edge);
            self.cursor[u] += 1;
        }

        let amount = graph.bottleneck(path);
        graph.augment(path, amount);
        amount
    }

    // First live arc at or after the cursor of `u`. The cursor stays on it.
    fn current_arc<F, C>(&mut self, graph: &FlowGraph<F, C>, u: usize) -> Option<EdgeHandle>
    where
        F: Flow,
        C: Cost,
    {
        while let Some(&edge) = graph.adjacent(u).get(self.cursor[u]) {
            if self.is_live(graph, u, edge) {
                return Some(edge);
            }
            self.cursor[u] += 1;
        }
        None
    }
}
