use super::*;

/// What to do with a cluster that receives no points in an iteration.
///
/// The weighted mean of an empty set is undefined, so an empty cluster
/// needs an explicit rule before the next assignment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Vacancy {
    /// Keep the previous center for this iteration.
    #[default]
    Retain,
    /// Move the center onto a random input point.
    Reseed,
    /// Abort with [`ClusterError::DegenerateCluster`].
    Fail,
}

/// Parameters of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Number of clusters.
    pub k: usize,
    /// Stop once no center moves this far in one iteration.
    pub min_diff: Energy,
    /// Upper bound on assignment/update passes.
    pub max_iterations: usize,
    /// Pins the initial sampling; fresh OS entropy when absent.
    pub seed: Option<u64>,
    /// Rule for clusters left empty by an assignment pass.
    pub vacancy: Vacancy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            k: KMEANS_CLUSTER_COUNT,
            min_diff: KMEANS_MIN_DIFF,
            max_iterations: KMEANS_MAX_ITERATIONS,
            seed: None,
            vacancy: Vacancy::default(),
        }
    }
}

impl Settings {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }
    pub fn with_min_diff(mut self, min_diff: Energy) -> Self {
        self.min_diff = min_diff;
        self
    }
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_vacancy(mut self, vacancy: Vacancy) -> Self {
        self.vacancy = vacancy;
        self
    }

    /// Checks these settings against the points they will cluster.
    pub fn validate<const N: usize>(&self, points: &[Point<N>]) -> Result<(), ClusterError> {
        let invalid = |msg: String| Err(ClusterError::InvalidArgument(msg));
        if points.is_empty() {
            return invalid("no points to cluster".to_string());
        }
        if self.k == 0 {
            return invalid("k must be positive".to_string());
        }
        if self.k > points.len() {
            return invalid(format!(
                "k = {} exceeds the {} available points",
                self.k,
                points.len()
            ));
        }
        if !self.min_diff.is_finite() || self.min_diff < 0. {
            return invalid(format!(
                "min_diff must be finite and non-negative, got {}",
                self.min_diff
            ));
        }
        if self.max_iterations == 0 {
            return invalid("max_iterations must be positive".to_string());
        }
        if let Some(i) = points.iter().position(|p| p.ct() == 0) {
            return invalid(format!("point {} has zero weight", i));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(n: u8) -> Vec<Color> {
        (0..n).map(|i| Color::from(([i, i, i], 1))).collect()
    }

    #[test]
    fn defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.k, 3);
        assert_eq!(settings.min_diff, 1.0);
        assert_eq!(settings.max_iterations, KMEANS_MAX_ITERATIONS);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.vacancy, Vacancy::Retain);
    }

    #[test]
    fn builder_overrides() {
        let settings = Settings::new(5)
            .with_min_diff(0.5)
            .with_max_iterations(10)
            .with_seed(42)
            .with_vacancy(Vacancy::Fail);
        assert_eq!(settings.k, 5);
        assert_eq!(settings.min_diff, 0.5);
        assert_eq!(settings.max_iterations, 10);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.vacancy, Vacancy::Fail);
    }

    #[test]
    fn accepts_k_equal_to_len() {
        assert_eq!(Settings::new(4).validate(&colors(4)), Ok(()));
    }

    #[test]
    fn rejects_bad_arguments() {
        let points = colors(4);
        let rejected = |settings: Settings, points: &[Color]| {
            matches!(
                settings.validate(points),
                Err(ClusterError::InvalidArgument(_))
            )
        };
        assert!(rejected(Settings::new(1), &[]));
        assert!(rejected(Settings::new(0), &points));
        assert!(rejected(Settings::new(5), &points));
        assert!(rejected(Settings::new(2).with_min_diff(-1.), &points));
        assert!(rejected(Settings::new(2).with_min_diff(Energy::NAN), &points));
        assert!(rejected(Settings::new(2).with_max_iterations(0), &points));
        assert!(rejected(
            Settings::new(1),
            &[Color::from(([0, 0, 0], 3)), Color::from(([1, 1, 1], 0))]
        ));
    }
}
