//! Canonical rings with their expected structure and search results.
//!
//! Neighbour pairs are listed in visit order, next vertex first. Search
//! results assume vertex 0 as the origin.

/// Expected observations for one ring order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingScenario {
    /// Number of vertices.
    pub order: usize,
    /// Edges in enumeration order as `(source, target)`.
    pub edges: &'static [(usize, usize)],
    /// Neighbours of each vertex, next then previous.
    pub neighbours: &'static [[usize; 2]],
    /// Shortest distances from vertex 0.
    pub distances: &'static [f32],
    /// Shortest-path parents from vertex 0.
    pub parents: &'static [usize],
}

/// Single vertex carrying a self-loop.
pub const SELF_LOOP: RingScenario = RingScenario {
    order: 1,
    edges: &[(0, 0)],
    neighbours: &[[0, 0]],
    distances: &[0.0],
    parents: &[0],
};

/// Two vertices joined by a doubled connection.
pub const DIGON: RingScenario = RingScenario {
    order: 2,
    edges: &[(0, 1), (1, 0)],
    neighbours: &[[1, 1], [0, 0]],
    distances: &[0.0, 1.0],
    parents: &[0, 0],
};

/// Smallest simple ring.
pub const TRIANGLE: RingScenario = RingScenario {
    order: 3,
    edges: &[(0, 1), (1, 2), (2, 0)],
    neighbours: &[[1, 2], [2, 0], [0, 1]],
    distances: &[0.0, 1.0, 1.0],
    parents: &[0, 0, 0],
};

/// The five-vertex ring used throughout the documentation.
pub const PENTAGON: RingScenario = RingScenario {
    order: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
    neighbours: &[[1, 4], [2, 0], [3, 1], [4, 2], [0, 3]],
    distances: &[0.0, 1.0, 2.0, 2.0, 1.0],
    parents: &[0, 0, 1, 4, 0],
};

/// Every canonical scenario in ascending order.
pub const ALL: [RingScenario; 4] = [SELF_LOOP, DIGON, TRIANGLE, PENTAGON];
