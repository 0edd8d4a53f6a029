use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Weighted Lloyd's k-means over borrowed points.
///
/// # Algorithm
///
/// 1. Sample `k` distinct points uniformly as seed centers
/// 2. Assign every point to its nearest center (lowest index wins ties)
/// 3. Move every center to the weighted mean of its members
/// 4. Stop once the largest center movement falls below `min_diff`
///
/// The assignment pass runs on the rayon pool; centers are read-only while
/// it runs and results are collected in input order, so the outcome is the
/// same as a sequential pass. The update pass folds members in input order,
/// making a seeded run reproducible bit for bit.
///
/// Iterations are capped by `max_iterations`. Reaching the cap is reported
/// through [`Clustering::converged`] rather than as an error.
#[derive(Debug, Clone)]
pub struct KMeans<'a, const N: usize> {
    points: &'a [Point<N>],
    settings: Settings,
}

impl<'a, const N: usize> KMeans<'a, N> {
    /// Validates the input against the settings.
    pub fn new(points: &'a [Point<N>], settings: Settings) -> Result<Self, ClusterError> {
        settings.validate(points)?;
        Ok(Self { points, settings })
    }

    pub fn points(&self) -> &'a [Point<N>] {
        self.points
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs with the configured seed, or with fresh entropy if none is set.
    pub fn run(&self) -> Result<Clustering<'a, N>, ClusterError> {
        match self.settings.seed {
            Some(seed) => self.run_with(&mut SmallRng::seed_from_u64(seed)),
            None => self.run_with(&mut SmallRng::from_os_rng()),
        }
    }

    /// Runs with an injected source of randomness.
    pub fn run_with<R>(&self, rng: &mut R) -> Result<Clustering<'a, N>, ClusterError>
    where
        R: Rng + ?Sized,
    {
        log::debug!(
            "{:<32}{:<32}",
            "kmeans initializing",
            format!("k={} points={}", self.settings.k, self.points.len())
        );
        let mut clusters = self.init_clusters(rng);
        let mut drifts = Vec::new();
        for iteration in 1..=self.settings.max_iterations {
            let assignments = self.assign(&clusters);
            let (next, diff) = self.update(&clusters, &assignments, iteration, rng)?;
            clusters = next;
            drifts.push(diff);
            log::debug!("{:<32}{:<32}", format!("kmeans iteration {}", iteration), diff);
            if diff < self.settings.min_diff {
                log::info!(
                    "{:<32}{:<32}",
                    "kmeans converged",
                    format!("{} iterations", iteration)
                );
                return Ok(Clustering::new(clusters, drifts, true));
            }
        }
        log::warn!(
            "{:<32}{:<32}",
            "kmeans did not converge",
            format!("{} iterations", self.settings.max_iterations)
        );
        Ok(Clustering::new(clusters, drifts, false))
    }

    /// Seeds `k` clusters on distinct points sampled without replacement.
    pub fn init_clusters<R>(&self, rng: &mut R) -> Vec<Cluster<'a, N>>
    where
        R: Rng + ?Sized,
    {
        rand::seq::index::sample(rng, self.points.len(), self.settings.k)
            .into_iter()
            .map(|i| Cluster::seed(&self.points[i]))
            .collect()
    }

    /// Index of and distance to the strictly nearest center.
    /// Equidistant centers resolve to the lowest index.
    pub fn neighbor(point: &Point<N>, clusters: &[Cluster<'a, N>]) -> (usize, Energy) {
        clusters
            .iter()
            .map(|c| point.distance(c.center()))
            .enumerate()
            .fold((0, Energy::INFINITY), |(j, min), (i, d)| match d < min {
                true => (i, d),
                false => (j, min),
            })
    }

    /// Nearest cluster index for every point, in input order.
    pub fn assign(&self, clusters: &[Cluster<'a, N>]) -> Vec<usize> {
        self.points
            .par_iter()
            .map(|p| Self::neighbor(p, clusters).0)
            .collect()
    }

    /// Rebuilds every cluster from an assignment pass.
    /// Returns the new clusters and the largest center movement.
    fn update<R>(
        &self,
        olds: &[Cluster<'a, N>],
        assignments: &[usize],
        iteration: usize,
        rng: &mut R,
    ) -> Result<(Vec<Cluster<'a, N>>, Energy), ClusterError>
    where
        R: Rng + ?Sized,
    {
        let mut members = vec![Vec::new(); olds.len()];
        self.points
            .iter()
            .zip(assignments.iter())
            .for_each(|(p, &j)| members[j].push(p));
        let mut diff: Energy = 0.;
        let mut news = Vec::with_capacity(olds.len());
        for (index, (old, points)) in olds.iter().zip(members).enumerate() {
            let centroid = points.iter().copied().collect::<Centroid<N>>();
            let center = match centroid.center() {
                Some(center) => center,
                None => self.vacate(old, index, iteration, rng)?,
            };
            diff = diff.max(old.center().distance(&center));
            news.push(Cluster::new(points, center));
        }
        Ok((news, diff))
    }

    /// Center for a cluster that received no points.
    fn vacate<R>(
        &self,
        old: &Cluster<'a, N>,
        index: usize,
        iteration: usize,
        rng: &mut R,
    ) -> Result<Point<N>, ClusterError>
    where
        R: Rng + ?Sized,
    {
        log::debug!(
            "{:<32}{:<32}",
            "kmeans empty cluster",
            format!("cluster {} iteration {}", index, iteration)
        );
        match self.settings.vacancy {
            Vacancy::Retain => Ok(*old.center()),
            Vacancy::Reseed => Ok(self.points[rng.random_range(0..self.points.len())]),
            Vacancy::Fail => Err(ClusterError::DegenerateCluster { index, iteration }),
        }
    }
}

/// Terminal state of a k-means run.
#[derive(Debug, Clone)]
pub struct Clustering<'a, const N: usize> {
    /// Clusters from the final assignment pass.
    clusters: Vec<Cluster<'a, N>>,
    /// Largest center movement of every pass, in order.
    drifts: Vec<Energy>,
    /// Whether the last drift fell below `min_diff`.
    converged: bool,
}

impl<'a, const N: usize> Clustering<'a, N> {
    fn new(clusters: Vec<Cluster<'a, N>>, drifts: Vec<Energy>, converged: bool) -> Self {
        Self {
            clusters,
            drifts,
            converged,
        }
    }
    pub fn clusters(&self) -> &[Cluster<'a, N>] {
        &self.clusters
    }
    pub fn into_clusters(self) -> Vec<Cluster<'a, N>> {
        self.clusters
    }
    pub fn centers(&self) -> Vec<Point<N>> {
        self.clusters.iter().map(|c| *c.center()).collect()
    }
    pub fn drifts(&self) -> &[Energy] {
        &self.drifts
    }
    /// Number of assignment/update passes performed.
    pub fn iterations(&self) -> usize {
        self.drifts.len()
    }
    /// False when the iteration cap stopped the run first.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Clusters `points` into `k` groups, stopping once no center moves by
/// `min_diff` or more. Seeds are drawn from fresh entropy.
pub fn cluster<const N: usize>(
    points: &[Point<N>],
    k: usize,
    min_diff: Energy,
) -> Result<Vec<Cluster<'_, N>>, ClusterError> {
    let settings = Settings::new(k).with_min_diff(min_diff);
    KMeans::new(points, settings)?
        .run()
        .map(Clustering::into_clusters)
}
