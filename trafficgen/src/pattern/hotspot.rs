//! Hotspot traffic pattern.
//!
//! Two-class degenerate sibling of the RENT pattern: the mesh midpoint gets
//! `hotspot_factor` times the weight of every other node and the pattern is
//! not locality-sensitive, so one shared array serves every source router.

use crate::apportion;
use crate::config::{ConfigError, HotspotConfig};
use crate::mesh::Mesh;
use crate::pattern::DestinationList;

/// Builder of the shared hotspot destination array.
#[derive(Debug, Clone)]
pub struct HotspotPattern {
    config: HotspotConfig,
}

impl HotspotPattern {
    /// Creates a builder for the given configuration.
    pub fn new(config: HotspotConfig) -> Self { HotspotPattern { config } }

    /// Node id of the designated hotspot, the mesh midpoint.
    pub fn hotspot_node(&self) -> usize { (Mesh::new(self.config.radix).node_count() - 1) / 2 }

    /// Builds the destination array.
    pub fn build(&self) -> Result<DestinationList, ConfigError> {
        self.config.validate()?;

        let mesh = Mesh::new(self.config.radix);
        let node_count = mesh.node_count();
        let size = self.config.size;

        let normal_nodes = node_count - 1;
        let base_weight = 1.0 / (normal_nodes as f64 + self.config.hotspot_factor as f64);
        let hotspot_weight = self.config.hotspot_factor as f64 * base_weight;

        let base_slots = (base_weight * size as f64) as usize;
        let hotspot_slots = (hotspot_weight * size as f64) as usize;
        let hotspot = self.hotspot_node();

        let mut entries = Vec::with_capacity(size);
        for id in 0..node_count {
            let slots = if id == hotspot { hotspot_slots } else { base_slots };
            entries.extend(std::iter::repeat(id as u32).take(slots));
        }
        apportion::fill_consecutive(&mut entries, size, node_count, None);

        tracing::debug!(
            radix = self.config.radix,
            size = size,
            hotspot = hotspot,
            hotspot_slots = hotspot_slots,
            "built hotspot destination array"
        );
        Ok(DestinationList::new(self.config.radix, entries))
    }
}
