//! 3D mesh topology.

use itertools::iproduct;

/// Coordinates of a node in the cubic mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    /// Position along the innermost dimension.
    pub x: usize,

    /// Position along the middle dimension.
    pub y: usize,

    /// Position along the outermost dimension.
    pub z: usize,
}

/// Cubic mesh of `radix * radix * radix` routers.
///
/// Nodes are identified either by coordinates or by the flattened id
/// `x + radix*y + radix*radix*z`. The node count is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mesh {
    radix: usize,
}

impl Mesh {
    /// Creates a mesh with the given edge length.
    pub fn new(radix: usize) -> Self { Mesh { radix } }

    /// Edge length of the mesh.
    pub fn radix(&self) -> usize { self.radix }

    /// Number of nodes.
    pub fn node_count(&self) -> usize { self.radix * self.radix * self.radix }

    /// Largest realizable Manhattan distance, `3 * (radix - 1)`.
    pub fn max_hop(&self) -> usize { 3 * (self.radix - 1) }

    /// Flattened id of the node at the given coordinates.
    pub fn node_id(&self, coord: Coord) -> usize {
        coord.x + self.radix * coord.y + self.radix * self.radix * coord.z
    }

    /// Coordinates of the node with the given flattened id.
    pub fn coord(&self, id: usize) -> Coord {
        Coord { x: id % self.radix, y: id / self.radix % self.radix, z: id / (self.radix * self.radix) }
    }

    /// Manhattan (L1) distance between two nodes.
    pub fn hop_distance(&self, a: Coord, b: Coord) -> usize {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y) + a.z.abs_diff(b.z)
    }

    /// Nodes in canonical row-major `(z, y, x)` order.
    ///
    /// The iteration order matches ascending flattened id; every
    /// table-construction pass walks the mesh in this order.
    pub fn nodes(&self) -> impl Iterator<Item = Coord> {
        iproduct!(0..self.radix, 0..self.radix, 0..self.radix).map(|(z, y, x)| Coord { x, y, z })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_coord_roundtrip() {
        let mesh = Mesh::new(3);
        for id in 0..mesh.node_count() {
            assert_eq!(mesh.node_id(mesh.coord(id)), id);
        }
        assert_eq!(mesh.node_id(Coord { x: 1, y: 2, z: 0 }), 7);
        assert_eq!(mesh.node_id(Coord { x: 0, y: 0, z: 1 }), 9);
    }

    #[test]
    fn canonical_order_is_ascending_id() {
        let mesh = Mesh::new(4);
        let ids: Vec<usize> = mesh.nodes().map(|c| mesh.node_id(c)).collect();
        assert_eq!(ids, (0..mesh.node_count()).collect::<Vec<_>>());
    }

    #[test]
    fn hop_distance_is_manhattan() {
        let mesh = Mesh::new(3);
        let a = Coord { x: 0, y: 0, z: 0 };
        let b = Coord { x: 2, y: 2, z: 2 };
        assert_eq!(mesh.hop_distance(a, b), 6);
        assert_eq!(mesh.hop_distance(b, a), 6);
        assert_eq!(mesh.hop_distance(a, a), 0);
        assert_eq!(mesh.max_hop(), 6);
    }

    #[test]
    fn max_hop_is_realized_by_opposite_corners() {
        for radix in 2..6 {
            let mesh = Mesh::new(radix);
            let far = Coord { x: radix - 1, y: radix - 1, z: radix - 1 };
            assert_eq!(mesh.hop_distance(Coord { x: 0, y: 0, z: 0 }, far), mesh.max_hop());
        }
    }
}
