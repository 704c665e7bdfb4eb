//! Generator configuration.
//!
//! All inputs are plain configuration constants; nothing is parsed from
//! files. Each pattern validates its configuration before any table is built
//! so that invalid parameters fail fast, before output is written.

use thiserror::Error;

/// Configuration error, reported before any output file is created.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Degenerate mesh.
    #[error("mesh radix must be at least 2, got {radix}")]
    Radix {
        /// Rejected edge length.
        radix: usize,
    },

    /// Empty destination array.
    #[error("destination array size must be nonzero")]
    Size,

    /// Decay exponent out of the model's domain.
    #[error("decay exponent must lie in [0, 1], got {exponent}")]
    Exponent {
        /// Rejected exponent.
        exponent: f64,
    },

    /// Hotspot weight multiplier must keep the hotspot at least as likely as a normal node.
    #[error("hotspot factor must be nonzero")]
    HotspotFactor,

    /// Every hop distance ended up with zero weight, so the distribution cannot be normalized.
    #[error("distance distribution has zero total mass")]
    ZeroMass,

    /// A source router cannot realize any hop distance that carries weight.
    #[error("node {node} cannot reach any hop distance with nonzero weight")]
    UnreachableMass {
        /// Flattened id of the offending source node.
        node: usize,
    },
}

/// Pair-count estimator used to weight the distance distribution.
///
/// The square-root heuristic matches the tables already deployed in the
/// testbench; the exact count enumerates every ordered pair of the 3D mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairCount {
    /// 2D square-root approximation of the same-distance pair count.
    #[default]
    SquareApprox,

    /// Exact enumeration of ordered pairs by Manhattan distance.
    Exact3d,
}

/// Policy for distributing the slots left over by floor truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    /// Append consecutive node ids from 0, wrapping modulo the node count and
    /// skipping the source itself.
    #[default]
    ConsecutiveIds,

    /// Hamilton's apportionment: award the leftover slots one at a time to the
    /// destinations with the largest fractional shares.
    LargestRemainder,
}

/// Configuration of the RENT (locality) pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct RentConfig {
    /// Mesh edge length.
    pub radix: usize,

    /// Length of the destination array emitted per source router.
    pub size: usize,

    /// Locality-decay exponent, in [0, 1].
    pub exponent: f64,

    /// Pair-count estimator for the distance distribution.
    pub pair_count: PairCount,

    /// Remainder policy for the scaled destination counts.
    pub remainder: RemainderPolicy,
}

impl Default for RentConfig {
    fn default() -> Self {
        RentConfig {
            radix: 3,
            size: 32768,
            exponent: 0.5,
            pair_count: PairCount::default(),
            remainder: RemainderPolicy::default(),
        }
    }
}

impl RentConfig {
    /// Creates a configuration with the default estimator and remainder policy.
    pub fn new(radix: usize, size: usize, exponent: f64) -> Self {
        RentConfig { radix, size, exponent, ..Self::default() }
    }

    /// Checks the configuration, failing fast on degenerate parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radix < 2 {
            return Err(ConfigError::Radix { radix: self.radix });
        }
        if self.size == 0 {
            return Err(ConfigError::Size);
        }
        if !(0.0..=1.0).contains(&self.exponent) {
            return Err(ConfigError::Exponent { exponent: self.exponent });
        }
        Ok(())
    }
}

/// Configuration of the hotspot pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotConfig {
    /// Mesh edge length.
    pub radix: usize,

    /// Length of the shared destination array.
    pub size: usize,

    /// Weight multiplier of the hotspot node relative to a normal node.
    pub hotspot_factor: usize,
}

impl Default for HotspotConfig {
    fn default() -> Self { HotspotConfig { radix: 10, size: 32768, hotspot_factor: 10 } }
}

impl HotspotConfig {
    /// Creates a hotspot configuration.
    pub fn new(radix: usize, size: usize, hotspot_factor: usize) -> Self { HotspotConfig { radix, size, hotspot_factor } }

    /// Checks the configuration, failing fast on degenerate parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radix < 2 {
            return Err(ConfigError::Radix { radix: self.radix });
        }
        if self.size == 0 {
            return Err(ConfigError::Size);
        }
        if self.hotspot_factor == 0 {
            return Err(ConfigError::HotspotFactor);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_default_matches_shipped_parameters() {
        let config = RentConfig::default();
        assert_eq!(config.radix, 3);
        assert_eq!(config.size, 32768);
        assert_eq!(config.exponent, 0.5);
    }

    #[test]
    fn rent_rejects_degenerate_parameters() {
        assert_eq!(RentConfig::new(1, 32768, 0.5).validate(), Err(ConfigError::Radix { radix: 1 }));
        assert_eq!(RentConfig::new(3, 0, 0.5).validate(), Err(ConfigError::Size));
        assert_eq!(RentConfig::new(3, 32768, 1.5).validate(), Err(ConfigError::Exponent { exponent: 1.5 }));
        assert_eq!(RentConfig::new(3, 32768, -0.1).validate(), Err(ConfigError::Exponent { exponent: -0.1 }));
        assert!(RentConfig::default().validate().is_ok());
    }

    #[test]
    fn hotspot_rejects_degenerate_parameters() {
        assert_eq!(HotspotConfig::new(0, 32768, 10).validate(), Err(ConfigError::Radix { radix: 0 }));
        assert_eq!(HotspotConfig::new(10, 32768, 0).validate(), Err(ConfigError::HotspotFactor));
        assert!(HotspotConfig::default().validate().is_ok());
    }
}
