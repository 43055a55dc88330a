use crate::{Cost, Flow};

#[derive(Clone, Debug)]
pub struct FlowEdge<F, C>
where
    F: Flow,
    C: Cost,
{
    pub(crate) to: usize,
    pub(crate) capacity: F,
    pub(crate) flow: F,
    pub(crate) cost: C,
}

impl<F, C> FlowEdge<F, C>
where
    F: Flow,
    C: Cost,
{
    pub(crate) fn new(to: usize, capacity: F, cost: C) -> Self {
        FlowEdge {
            to,
            capacity,
            flow: F::zero(),
            cost,
        }
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn capacity(&self) -> F {
        self.capacity
    }

    pub fn flow(&self) -> F {
        self.flow
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    pub fn residual_capacity(&self) -> F {
        self.capacity - self.flow
    }

    pub fn has_residual_capacity(&self) -> bool {
        self.residual_capacity() > F::zero()
    }
}

/// Index of an arc in the graph's edge list. Forward arcs sit at even indices and
/// their reverse arc at `index ^ 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeHandle {
    pub(crate) index: usize,
}

impl EdgeHandle {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reverse(&self) -> EdgeHandle {
        EdgeHandle {
            index: self.index ^ 1,
        }
    }

    pub fn is_forward(&self) -> bool {
        self.index & 1 == 0
    }
}
