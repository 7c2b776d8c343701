//! Geometry factory: the scattered point cloud and the shared wireframe
//! icosahedron.
//!
//! Both shapes are built exactly once per engine. The wireframe geometry is
//! shared by reference across all instances and never mutated after
//! creation; the point scatter is immutable in X and Z for the life of the
//! cloud (the frame updater rewrites Y only).

use rand::Rng;

/// Edge-only polyhedron: vertex positions plus unique undirected edges
/// referencing them, suitable for a line-list index buffer.
#[derive(Debug, Clone)]
pub struct WireframeGeometry {
    /// Vertex positions, one `[x, y, z]` per vertex.
    pub vertices: Vec<[f32; 3]>,
    /// Unique undirected edges as vertex index pairs.
    pub edges: Vec<[u16; 2]>,
}

impl WireframeGeometry {
    /// Flatten the edge pairs into a line-list index buffer.
    #[must_use]
    pub fn line_indices(&self) -> Vec<u16> {
        self.edges.iter().flat_map(|e| [e[0], e[1]]).collect()
    }
}

/// Scatter `count` points uniformly inside a cube of side `2 * spread`
/// centered at the origin. Returns a flat buffer of `3 * count` floats,
/// each coordinate sampled independently. A non-positive spread collapses
/// every point to the origin.
pub fn scatter_points<R: Rng + ?Sized>(
    count: usize,
    spread: f32,
    rng: &mut R,
) -> Vec<f32> {
    if spread <= 0.0 {
        return vec![0.0; count * 3];
    }
    let mut positions = Vec::with_capacity(count * 3);
    for _ in 0..count {
        positions.push(rng.random_range(-spread..spread));
        positions.push(rng.random_range(-spread..spread));
        positions.push(rng.random_range(-spread..spread));
    }
    positions
}

/// Build the edge-only unit icosahedron: 12 vertices, 30 unique edges.
///
/// Vertices come from the three mutually orthogonal golden rectangles;
/// edges are the vertex pairs at the minimal inter-vertex distance. The
/// result is normalized to a circumscribed radius of 1.
#[must_use]
pub fn icosahedron_wireframe() -> WireframeGeometry {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let raw: [[f32; 3]; 12] = [
        [-1.0, phi, 0.0],
        [1.0, phi, 0.0],
        [-1.0, -phi, 0.0],
        [1.0, -phi, 0.0],
        [0.0, -1.0, phi],
        [0.0, 1.0, phi],
        [0.0, -1.0, -phi],
        [0.0, 1.0, -phi],
        [phi, 0.0, -1.0],
        [phi, 0.0, 1.0],
        [-phi, 0.0, -1.0],
        [-phi, 0.0, 1.0],
    ];

    // Icosahedron edge length for this construction is exactly 2.
    let edge_sq = 4.0;
    let tolerance = 1e-3;

    let mut edges = Vec::with_capacity(30);
    for i in 0..raw.len() {
        for j in (i + 1)..raw.len() {
            let dx = raw[i][0] - raw[j][0];
            let dy = raw[i][1] - raw[j][1];
            let dz = raw[i][2] - raw[j][2];
            let d_sq = dx * dx + dy * dy + dz * dz;
            if (d_sq - edge_sq).abs() < tolerance {
                edges.push([i as u16, j as u16]);
            }
        }
    }

    // Normalize to unit circumscribed radius.
    let inv_len = 1.0 / (1.0 + phi * phi).sqrt();
    let vertices = raw
        .iter()
        .map(|v| [v[0] * inv_len, v[1] * inv_len, v[2] * inv_len])
        .collect();

    WireframeGeometry { vertices, edges }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn scatter_buffer_length_is_three_per_point() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 4, 3000] {
            let positions = scatter_points(count, 10.0, &mut rng);
            assert_eq!(positions.len(), 3 * count);
        }
    }

    #[test]
    fn scatter_stays_within_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        let spread = 10.0;
        let positions = scatter_points(1000, spread, &mut rng);
        assert!(positions.iter().all(|&c| (-spread..spread).contains(&c)));
    }

    #[test]
    fn zero_spread_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(11);
        let positions = scatter_points(5, 0.0, &mut rng);
        assert_eq!(positions, vec![0.0; 15]);
    }

    #[test]
    fn icosahedron_has_twelve_vertices_and_thirty_edges() {
        let geo = icosahedron_wireframe();
        assert_eq!(geo.vertices.len(), 12);
        assert_eq!(geo.edges.len(), 30);
        assert_eq!(geo.line_indices().len(), 60);
    }

    #[test]
    fn icosahedron_every_vertex_has_degree_five() {
        let geo = icosahedron_wireframe();
        let mut degree = [0u32; 12];
        for e in &geo.edges {
            degree[e[0] as usize] += 1;
            degree[e[1] as usize] += 1;
        }
        assert!(degree.iter().all(|&d| d == 5));
    }

    #[test]
    fn icosahedron_vertices_are_unit_length() {
        let geo = icosahedron_wireframe();
        for v in &geo.vertices {
            let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "vertex length {len}");
        }
    }

    #[test]
    fn icosahedron_edges_are_unique_and_ordered() {
        let geo = icosahedron_wireframe();
        let mut seen = std::collections::HashSet::new();
        for e in &geo.edges {
            assert!(e[0] < e[1]);
            assert!(seen.insert(*e));
        }
    }
}
