//! Lazy enumeration of the vertex ids of a ring.

use std::iter::FusedIterator;
use std::ops::Range;

/// Iterator over the vertex ids `0..order` in ascending order.
///
/// Obtained from [`crate::VertexListGraph::vertices`]. Each call builds a
/// fresh iterator, so enumeration can be restarted any number of times with
/// identical results.
///
/// # Examples
/// ```
/// use ringgraph_core::{RingGraph, VertexListGraph};
///
/// let graph = RingGraph::new(4)?;
/// assert_eq!(graph.vertices().collect::<Vec<_>>(), [0, 1, 2, 3]);
/// assert_eq!(graph.vertices().len(), 4);
/// # Ok::<(), ringgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VertexIter {
    range: Range<usize>,
}

impl VertexIter {
    pub(crate) const fn new(order: usize) -> Self {
        Self { range: 0..order }
    }
}

impl Iterator for VertexIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for VertexIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back()
    }
}

impl ExactSizeIterator for VertexIter {}

impl FusedIterator for VertexIter {}
