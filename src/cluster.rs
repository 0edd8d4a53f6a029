use super::*;

/// One group of a k-means partition.
///
/// Borrows its members from the input set and owns its center. Clusters are
/// rebuilt from scratch every iteration rather than edited in place, so a
/// cluster always describes exactly one assignment pass.
///
/// The center's weight is the total weight of the members. It plays no part
/// in clustering and is kept only for consumers ranking the results.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<'a, const N: usize> {
    /// Points assigned in the pass that produced this cluster.
    points: Vec<&'a Point<N>>,
    /// Weighted centroid of `points`.
    center: Point<N>,
}

impl<'a, const N: usize> Cluster<'a, N> {
    /// A cluster seeded by a single point, which is both member and center.
    pub fn seed(point: &'a Point<N>) -> Self {
        Self {
            points: vec![point],
            center: *point,
        }
    }
    pub fn new(points: Vec<&'a Point<N>>, center: Point<N>) -> Self {
        Self { points, center }
    }
    /// Members assigned in the producing pass.
    pub fn points(&self) -> &[&'a Point<N>] {
        &self.points
    }
    /// Weighted centroid of the members.
    pub fn center(&self) -> &Point<N> {
        &self.center
    }
    /// Dimension shared by members and center.
    pub const fn n(&self) -> usize {
        N
    }
    /// Total weight of the members.
    pub fn weight(&self) -> Weight {
        self.points.iter().map(|p| p.ct()).sum()
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<const N: usize> std::fmt::Display for Cluster<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} points)", self.center, self.points.len())
    }
}
