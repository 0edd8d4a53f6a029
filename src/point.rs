use super::*;

/// A weighted position in N-dimensional colour space.
///
/// For dominant-colour extraction this is one distinct colour of the image
/// (`N = 3`, one coordinate per RGB channel) weighted by the number of
/// pixels that carry it. Points are produced once and never mutated; the
/// clustering engine only ever borrows them.
///
/// The dimension is a const parameter so that every point and center in a
/// run shares it by construction, and the distance and centroid loops are
/// monomorphized over plain arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    /// Position along each channel.
    coords: [Energy; N],
    /// Pixel occurrence count.
    ct: Weight,
}

/// A point in RGB space.
pub type Color = Point<3>;

impl<const N: usize> Point<N> {
    pub fn new(coords: [Energy; N], ct: Weight) -> Self {
        Self { coords, ct }
    }
    /// Position along each channel.
    pub fn coords(&self) -> &[Energy; N] {
        &self.coords
    }
    /// Pixel occurrence count.
    pub fn ct(&self) -> Weight {
        self.ct
    }
    /// Dimension shared by every point of a run.
    pub const fn n(&self) -> usize {
        N
    }
    /// Euclidean distance, not squared.
    pub fn distance(&self, other: &Self) -> Energy {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a - b)
            .map(|d| d * d)
            .sum::<Energy>()
            .sqrt()
    }
}

impl From<([u8; 3], Weight)> for Color {
    fn from((rgb, ct): ([u8; 3], Weight)) -> Self {
        Self::new(rgb.map(Energy::from), ct)
    }
}

impl<const N: usize> std::fmt::Display for Point<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let coords = self
            .coords
            .iter()
            .map(|c| format!("{:.2}", c))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "({}) x{}", coords, self.ct)
    }
}
