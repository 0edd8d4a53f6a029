use super::*;

/// Trait for k-means centroid computation via incremental aggregation.
///
/// The "absorb" pattern generalizes mean computation: partial results can be
/// combined in any grouping without losing information, so the same
/// accumulator serves a sequential fold or a parallel reduction.
///
/// # Required Methods
///
/// - `identity()` — Returns the neutral element for absorption
/// - `absorb()` — Combines two partial results (associative, commutative)
pub trait Absorb {
    /// Returns the identity element.
    fn identity() -> Self;
    /// Combines this partial result with another.
    fn absorb(self, other: &Self) -> Self;
}

/// Running weighted mean of a set of points.
///
/// Tracks the weight-scaled coordinate sums and the total weight; the
/// centroid is their quotient. An empty accumulator has no centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid<const N: usize> {
    /// Sum of `coord[i] * ct` over absorbed points.
    sums: [Energy; N],
    /// Sum of `ct` over absorbed points.
    weight: Weight,
}

impl<const N: usize> Centroid<N> {
    /// Total weight absorbed so far.
    pub fn weight(&self) -> Weight {
        self.weight
    }
    /// Whether nothing has been absorbed.
    pub fn is_empty(&self) -> bool {
        self.weight == 0
    }
    /// Weighted mean of everything absorbed, carrying the total weight.
    /// None for an empty accumulator, whose mean is undefined.
    pub fn center(&self) -> Option<Point<N>> {
        match self.weight {
            0 => None,
            w => Some(Point::new(self.sums.map(|s| s / w as Energy), w)),
        }
    }
}

impl<const N: usize> Absorb for Centroid<N> {
    fn identity() -> Self {
        Self {
            sums: [0.; N],
            weight: 0,
        }
    }
    fn absorb(mut self, other: &Self) -> Self {
        self.sums
            .iter_mut()
            .zip(other.sums.iter())
            .for_each(|(a, b)| *a += b);
        self.weight += other.weight;
        self
    }
}

impl<const N: usize> From<&Point<N>> for Centroid<N> {
    fn from(point: &Point<N>) -> Self {
        let ct = point.ct() as Energy;
        Self {
            sums: point.coords().map(|c| c * ct),
            weight: point.ct(),
        }
    }
}

impl<'a, const N: usize> FromIterator<&'a Point<N>> for Centroid<N> {
    fn from_iter<I: IntoIterator<Item = &'a Point<N>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Centroid::from)
            .fold(Self::identity(), |acc, ref x| acc.absorb(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_center() {
        let centroid = Centroid::<3>::identity();
        assert!(centroid.is_empty());
        assert_eq!(centroid.center(), None);
    }

    #[test]
    fn weighted_mean() {
        let points = [
            Point::new([0., 10., 100.], 1),
            Point::new([10., 20., 200.], 3),
        ];
        let center = points.iter().collect::<Centroid<3>>().center().unwrap();
        assert!((center.coords()[0] - 7.5).abs() < 1e-9);
        assert!((center.coords()[1] - 17.5).abs() < 1e-9);
        assert!((center.coords()[2] - 175.).abs() < 1e-9);
        assert_eq!(center.ct(), 4);
    }

    #[test]
    fn absorb_is_associative() {
        let points = [
            Point::new([1., 2.], 2),
            Point::new([5., 7.], 9),
            Point::new([4., 0.], 1),
        ];
        let all = points.iter().collect::<Centroid<2>>();
        let left = points[..1].iter().collect::<Centroid<2>>();
        let right = points[1..].iter().collect::<Centroid<2>>();
        let merged = left.absorb(&right);
        assert_eq!(merged.weight(), all.weight());
        let a = merged.center().unwrap();
        let b = all.center().unwrap();
        assert!(a.distance(&b) < 1e-9);
    }
}
