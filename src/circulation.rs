//! Min-cost circulation with lower and upper flow bounds, reduced to min-cost flow between
//! an auxiliary super source and super sink.

use std::collections::HashMap;

use log::debug;

use crate::{Cost, Flow, FlowError, FlowGraph, shortest_path::check_negative_cycles};

/// Arc of a circulation instance; every feasible circulation routes between `lower` and
/// `upper` units over it at `cost` per unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedEdge<F = i64, C = i64> {
    pub from: usize,
    pub to: usize,
    pub lower: F,
    pub upper: F,
    pub cost: C,
}

impl<F, C> BoundedEdge<F, C> {
    pub fn new(from: usize, to: usize, lower: F, upper: F, cost: C) -> Self {
        BoundedEdge {
            from,
            to,
            lower,
            upper,
            cost,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Circulation<F = i64, C = i64> {
    /// Cheapest circulation meeting every bound. `flows[i]` belongs to the `i`-th input edge.
    Feasible { cost: C, flows: Vec<F> },
    /// No assignment satisfies the bounds and conservation at once.
    Infeasible,
}

impl<F, C> Circulation<F, C>
where
    C: Copy,
{
    pub fn is_feasible(&self) -> bool {
        matches!(self, Circulation::Feasible { .. })
    }

    /// Total cost, including the cost of the flow forced by lower bounds.
    pub fn cost(&self) -> Option<C> {
        match self {
            Circulation::Feasible { cost, .. } => Some(*cost),
            Circulation::Infeasible => None,
        }
    }
}

/// Finds a minimum-cost circulation satisfying `lower <= flow <= upper` on every edge.
///
/// Vertices are whatever `usize` labels the endpoints carry; only labels that occur take
/// part. Every edge first carries its lower bound; the leftover imbalance is routed from a
/// super source to a super sink through arcs of capacity `upper - lower`. The instance is
/// feasible exactly when all of that imbalance can be routed. Fails with
/// [`FlowError::NegativeCycle`] if the slack arcs hold a negative-cost cycle anywhere, since
/// no circulation is then minimal.
pub fn min_cost_feasible_circulation<F, C>(
    edges: &[BoundedEdge<F, C>],
) -> Result<Circulation<F, C>, FlowError>
where
    F: Flow,
    C: Cost + From<F>,
{
    if edges.iter().any(|edge| edge.lower > edge.upper) {
        debug!("Circulation infeasible: an edge has lower bound above upper bound");
        return Ok(Circulation::Infeasible);
    }

    // Dense indices in order of first appearance
    let mut labels: HashMap<usize, usize> = HashMap::new();
    let mut dense = |vertex: usize| {
        let next = labels.len();
        *labels.entry(vertex).or_insert(next)
    };
    let arcs: Vec<(usize, usize)> = edges
        .iter()
        .map(|edge| (dense(edge.from), dense(edge.to)))
        .collect();
    let vertex_count = labels.len();
    let (super_source, super_sink) = (vertex_count, vertex_count + 1);
    let mut graph = FlowGraph::new(vertex_count + 2)?;

    let mut excess = vec![F::zero(); vertex_count];
    let mut fixed_cost = C::zero();
    let mut handles = Vec::with_capacity(edges.len());
    for (edge, &(from, to)) in edges.iter().zip(&arcs) {
        excess[to] = excess[to] + edge.lower;
        excess[from] = excess[from] - edge.lower;
        fixed_cost = fixed_cost + C::from(edge.lower) * edge.cost;
        let slack = edge.upper - edge.lower;
        handles.push(graph.add_edge_with_cost(from, to, slack, edge.cost)?);
    }
    check_negative_cycles(&graph)?;

    let mut demand = F::zero();
    for (vertex, &balance) in excess.iter().enumerate() {
        if balance > F::zero() {
            graph.add_edge(super_source, vertex, balance)?;
            demand = demand + balance;
        } else if balance < F::zero() {
            graph.add_edge(vertex, super_sink, -balance)?;
        }
    }

    let (routed, routing_cost) = graph.min_cost_max_flow(super_source, super_sink, None)?;
    if routed != demand {
        debug!("Circulation infeasible: routed {:?} of {:?} forced units", routed, demand);
        return Ok(Circulation::Infeasible);
    }

    let cost = fixed_cost + routing_cost;
    debug!("Circulation over {} edges feasible at cost {:?}", edges.len(), cost);

    let flows = edges
        .iter()
        .zip(handles)
        .map(|(edge, handle)| edge.lower + graph.flow(handle))
        .collect();
    Ok(Circulation::Feasible { cost, flows })
}
