//! Rent's-rule locality model and the cumulative distance distribution.
//!
//! The model assigns each Manhattan hop distance a probability from a
//! discrete locality-decay kernel, then weights it by an estimate of how many
//! node pairs sit at that distance. The normalized result (the CDD) is what
//! the table builders scale per source router.

use itertools::izip;

use crate::config::{ConfigError, PairCount};
use crate::mesh::Mesh;

/// Locality-decay probability for each hop distance `d` in `0..=max_hop`.
///
/// Index 0 is a sentinel 0 (no self-traffic is modeled). For `d >= 1`:
///
/// ```text
/// P[d] = 1/(4d) * ( (1+d(d-1))^p - (d(d-1))^p + (d(d+1))^p - (1+d(d+1))^p )
/// ```
pub fn hop_probabilities(mesh: Mesh, exponent: f64) -> Vec<f64> {
    let mut probs = vec![0.0; mesh.max_hop() + 1];
    for (d, prob) in probs.iter_mut().enumerate().skip(1) {
        let d = d as f64;
        *prob = 1.0 / (4.0 * d)
            * ((1.0 + d * (d - 1.0)).powf(exponent) - (d * (d - 1.0)).powf(exponent)
                + (d * (d + 1.0)).powf(exponent)
                - (1.0 + d * (d + 1.0)).powf(exponent));
    }
    probs
}

/// Normalized distribution of traffic over hop distance.
///
/// Computed once per mesh; the same-distance pair counts are treated as
/// mesh-invariant, independent of which source router is chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceDistribution {
    weights: Vec<f64>,
}

impl DistanceDistribution {
    /// Builds the distribution from the decay model and a pair-count estimate.
    ///
    /// Fails with [`ConfigError::ZeroMass`] if every distance ends up
    /// weightless (e.g. exponent 0 cancels the whole kernel), so the caller
    /// never divides by zero or emits NaN.
    pub fn build(mesh: Mesh, exponent: f64, pair_count: PairCount) -> Result<Self, ConfigError> {
        let probs = hop_probabilities(mesh, exponent);
        let pairs = match pair_count {
            PairCount::SquareApprox => square_approx_pair_counts(mesh),
            PairCount::Exact3d => exact_pair_counts(mesh),
        };

        let mut weights: Vec<f64> = izip!(probs, pairs).map(|(prob, count)| prob * count).collect();
        let total: f64 = weights.iter().sum();
        if !(total > 0.0) {
            return Err(ConfigError::ZeroMass);
        }
        weights.iter_mut().for_each(|weight| *weight /= total);

        tracing::debug!(max_hop = weights.len() - 1, ?pair_count, "built distance distribution");
        Ok(DistanceDistribution { weights })
    }

    /// Weight of the given hop distance.
    pub fn weight(&self, hops: usize) -> f64 { self.weights[hops] }

    /// Weights indexed by hop distance, summing to 1.
    pub fn weights(&self) -> &[f64] { &self.weights }
}

/// Same-distance pair count per the 2D square-root heuristic.
///
/// Approximates the 3D pair count with the closed form of a `sqrt(N) x
/// sqrt(N)` grid. The summation runs in floating point, bounds included; the
/// emitted tables depend on the exact rounding.
fn square_approx_pair_counts(mesh: Mesh) -> Vec<f64> {
    let sqrt_n = (mesh.node_count() as f64).sqrt();
    let upper = (2.0 * sqrt_n - 2.0) as usize;
    (0..=mesh.max_hop())
        .map(|d| {
            let d = d as f64;
            (1..upper)
                .map(|i| i as f64)
                .filter(|i| sqrt_n + i - d > 0.0 && sqrt_n + i - d <= sqrt_n)
                .map(|i| (sqrt_n - i) * (sqrt_n + i - d))
                .sum()
        })
        .collect()
}

/// Exact count of ordered node pairs at each Manhattan distance.
fn exact_pair_counts(mesh: Mesh) -> Vec<f64> {
    let mut counts = vec![0.0; mesh.max_hop() + 1];
    for src in mesh.nodes() {
        for dst in mesh.nodes() {
            counts[mesh.hop_distance(src, dst)] += 1.0;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn probabilities_for_radix3_half_exponent() {
        let probs = hop_probabilities(Mesh::new(3), 0.5);
        assert_eq!(probs.len(), 7);
        assert_eq!(probs[0], 0.0);
        assert!(probs[1] > 0.0);
        assert!(probs[6] > 0.0);
        for d in 2..6 {
            assert!(probs[d] > probs[d + 1], "P[{}] = {} should exceed P[{}] = {}", d, probs[d], d + 1, probs[d + 1]);
        }
    }

    #[test]
    fn probabilities_are_nonnegative_over_exponent_range() {
        for radix in 2..5 {
            for exponent in [0.0, 0.25, 0.5, 0.75, 1.0] {
                for (d, prob) in hop_probabilities(Mesh::new(radix), exponent).iter().enumerate() {
                    assert!(*prob >= 0.0, "P[{}] = {} for radix {} exponent {}", d, prob, radix, exponent);
                }
            }
        }
    }

    #[test]
    fn distribution_normalizes_to_one() {
        for radix in 2..6 {
            for exponent in [0.25, 0.5, 1.0] {
                for pair_count in [PairCount::SquareApprox, PairCount::Exact3d] {
                    let cdd = DistanceDistribution::build(Mesh::new(radix), exponent, pair_count).unwrap();
                    let total: f64 = cdd.weights().iter().sum();
                    assert!(
                        (total - 1.0).abs() < TOLERANCE,
                        "sum {} for radix {} exponent {} {:?}",
                        total,
                        radix,
                        exponent,
                        pair_count
                    );
                    assert!(cdd.weights().iter().all(|w| *w >= 0.0));
                    assert_eq!(cdd.weight(0), 0.0);
                }
            }
        }
    }

    #[test]
    fn zero_exponent_has_no_mass() {
        assert_eq!(
            DistanceDistribution::build(Mesh::new(3), 0.0, PairCount::SquareApprox),
            Err(ConfigError::ZeroMass)
        );
    }

    #[test]
    fn exact_pair_counts_for_radix2() {
        // 2x2x2 mesh: of the 64 ordered pairs, 8 coincide, 24 differ in one
        // coordinate, 24 in two and 8 in all three.
        assert_eq!(exact_pair_counts(Mesh::new(2)), vec![8.0, 24.0, 24.0, 8.0]);
    }
}
