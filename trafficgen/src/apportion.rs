//! Proportional slot allocation.
//!
//! The table builders turn real-valued weights into integer slot counts by
//! floor truncation, which leaves a shortfall. The remainder policies that
//! make up the difference live here as named, separately testable units.

/// Floors each weight scaled by `scale` into an integer share.
///
/// The truncation is deliberate: the sum of the shares never exceeds the
/// target the scale was computed from, so the caller tops the allocation up
/// with a remainder policy.
pub fn floor_shares(weights: &[f64], scale: f64) -> Vec<usize> {
    weights.iter().map(|weight| (weight * scale) as usize).collect()
}

/// Hamilton's (largest-remainder) apportionment of `total` slots over `weights`.
///
/// Every class first receives the floor of its proportional share; the
/// leftover slots go one each to the classes with the largest fractional
/// parts. Ties break toward the lower index, keeping the result
/// deterministic. The weights must have a positive sum.
pub fn hamilton(weights: &[f64], total: usize) -> Vec<usize> {
    let sum: f64 = weights.iter().sum();
    let scale = total as f64 / sum;
    let mut shares = floor_shares(weights, scale);

    let fractions: Vec<f64> = weights.iter().zip(&shares).map(|(weight, share)| weight * scale - *share as f64).collect();
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| fractions[b].total_cmp(&fractions[a]).then(a.cmp(&b)));

    let assigned: usize = shares.iter().sum();
    for &class in order.iter().take(total.saturating_sub(assigned)) {
        shares[class] += 1;
    }
    shares
}

/// Appends consecutive node ids until `row` holds `target` entries.
///
/// Ids start at 0 and wrap modulo `node_count`; `skip` (the source router in
/// the RENT pattern) is stepped over on every encounter. Wrapping keeps the
/// loop finite even when `target` exceeds the number of usable ids.
pub fn fill_consecutive(row: &mut Vec<u32>, target: usize, node_count: usize, skip: Option<usize>) {
    let mut id = 0;
    while row.len() < target {
        if Some(id) == skip {
            id = (id + 1) % node_count;
        }
        row.push(id as u32);
        id = (id + 1) % node_count;
    }
}
