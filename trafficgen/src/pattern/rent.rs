//! RENT (locality) traffic pattern.
//!
//! For every source router the normalized distance distribution is scaled to
//! the configured array size, each destination is emitted the floor of its
//! proportional share of slots, and the truncation shortfall is filled by the
//! configured remainder policy.

use crate::apportion;
use crate::config::{ConfigError, RemainderPolicy, RentConfig};
use crate::mesh::{Coord, Mesh};
use crate::pattern::DestinationTable;
use crate::rent::DistanceDistribution;

/// Builder of the per-source RENT destination table.
#[derive(Debug, Clone)]
pub struct RentPattern {
    config: RentConfig,
}

impl RentPattern {
    /// Creates a builder for the given configuration.
    pub fn new(config: RentConfig) -> Self { RentPattern { config } }

    /// Builds the destination table.
    ///
    /// The output is fully determined by the configuration: the mesh is
    /// walked in canonical `(z, y, x)` order for every pass and no step draws
    /// randomness.
    pub fn build(&self) -> Result<DestinationTable, ConfigError> {
        self.config.validate()?;

        let mesh = Mesh::new(self.config.radix);
        let cdd = DistanceDistribution::build(mesh, self.config.exponent, self.config.pair_count)?;

        let rows = mesh
            .nodes()
            .map(|source| self.build_row(mesh, &cdd, source))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        tracing::debug!(
            radix = self.config.radix,
            size = self.config.size,
            exponent = self.config.exponent,
            "built RENT destination table"
        );
        Ok(DestinationTable::new(self.config.radix, rows))
    }

    fn build_row(&self, mesh: Mesh, cdd: &DistanceDistribution, source: Coord) -> Result<Vec<u32>, ConfigError> {
        let size = self.config.size;
        match self.config.remainder {
            RemainderPolicy::ConsecutiveIds => {
                let factor_sum: f64 = mesh.nodes().map(|dst| cdd.weight(mesh.hop_distance(source, dst))).sum();
                if !(factor_sum > 0.0) {
                    return Err(ConfigError::UnreachableMass { node: mesh.node_id(source) });
                }
                let scale = size as f64 / factor_sum;
                let counts = apportion::floor_shares(cdd.weights(), scale);

                let mut row = Vec::with_capacity(size);
                for dst in mesh.nodes() {
                    let hops = mesh.hop_distance(source, dst);
                    let id = mesh.node_id(dst) as u32;
                    row.extend(std::iter::repeat(id).take(counts[hops]));
                }
                apportion::fill_consecutive(&mut row, size, mesh.node_count(), Some(mesh.node_id(source)));
                Ok(row)
            }
            RemainderPolicy::LargestRemainder => {
                let weights: Vec<f64> =
                    mesh.nodes().map(|dst| cdd.weight(mesh.hop_distance(source, dst))).collect();
                if !(weights.iter().sum::<f64>() > 0.0) {
                    return Err(ConfigError::UnreachableMass { node: mesh.node_id(source) });
                }
                let shares = apportion::hamilton(&weights, size);

                let mut row = Vec::with_capacity(size);
                for dst in mesh.nodes() {
                    let id = mesh.node_id(dst) as u32;
                    row.extend(std::iter::repeat(id).take(shares[mesh.node_id(dst)]));
                }
                Ok(row)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PairCount;

    fn config(radix: usize, size: usize) -> RentConfig { RentConfig::new(radix, size, 0.5) }

    #[test]
    fn every_row_has_exactly_size_valid_entries() {
        let table = RentPattern::new(config(3, 2000)).build().unwrap();
        let node_count = 27;
        assert_eq!(table.rows().len(), node_count);
        for row in table.rows() {
            assert_eq!(row.len(), 2000);
            assert!(row.iter().all(|id| (*id as usize) < node_count));
        }
    }

    #[test]
    fn shipped_parameters_produce_the_full_table() {
        let table = RentPattern::new(RentConfig::default()).build().unwrap();
        assert_eq!(table.rows().len(), 27);
        assert!(table.rows().iter().all(|row| row.len() == 32768));
    }

    #[test]
    fn identical_inputs_build_identical_tables() {
        let first = RentPattern::new(config(3, 512)).build().unwrap();
        let second = RentPattern::new(config(3, 512)).build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn size_below_node_count_still_terminates() {
        let table = RentPattern::new(config(4, 10)).build().unwrap();
        assert_eq!(table.rows().len(), 64);
        assert!(table.rows().iter().all(|row| row.len() == 10));
    }

    #[test]
    fn floored_prefix_is_topped_up_with_consecutive_ids() {
        // With a tiny array the floor counts all truncate to zero and the
        // whole row is remainder fill: consecutive ids skipping the source.
        let table = RentPattern::new(config(3, 4)).build().unwrap();
        let mesh = Mesh::new(3);
        let cdd = DistanceDistribution::build(mesh, 0.5, PairCount::SquareApprox).unwrap();
        let source = Coord { x: 0, y: 0, z: 0 };
        let factor_sum: f64 = mesh.nodes().map(|dst| cdd.weight(mesh.hop_distance(source, dst))).sum();
        let counts = apportion::floor_shares(cdd.weights(), 4.0 / factor_sum);
        assert!(counts.iter().all(|count| *count == 0));
        assert_eq!(table.rows()[0], vec![1, 2, 3, 4]);
    }

    #[test]
    fn largest_remainder_policy_needs_no_fill() {
        let mut config = config(3, 500);
        config.remainder = RemainderPolicy::LargestRemainder;
        let table = RentPattern::new(config).build().unwrap();
        for (source, row) in table.rows().iter().enumerate() {
            assert_eq!(row.len(), 500);
            assert!(row.iter().all(|id| (*id as usize) != source), "source {} generated self-traffic", source);
        }
    }

    #[test]
    fn exact_pair_count_variant_builds() {
        let mut config = config(3, 256);
        config.pair_count = PairCount::Exact3d;
        let table = RentPattern::new(config).build().unwrap();
        assert!(table.rows().iter().all(|row| row.len() == 256));
    }
}
