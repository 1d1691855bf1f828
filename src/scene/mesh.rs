//! Triangle-soup mesh with per-vertex normals

use glam::Vec3;
use thiserror::Error;

/// Errors from mesh validation at session setup.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("vertex count {0} is not a positive multiple of 3")]
    VertexCount(usize),
    #[error("{positions} positions but {normals} normals; counts must match")]
    AttributeMismatch { positions: usize, normals: usize },
}

/// An ordered triangle soup: consecutive vertex triples form triangles,
/// and every vertex carries a normal. Immutable once validated.
#[derive(Debug, Clone)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl Mesh {
    /// Validate and take ownership of vertex data.
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>) -> Result<Self, MeshError> {
        if positions.len() != normals.len() {
            return Err(MeshError::AttributeMismatch {
                positions: positions.len(),
                normals: normals.len(),
            });
        }
        if positions.is_empty() || positions.len() % 3 != 0 {
            return Err(MeshError::VertexCount(positions.len()));
        }
        Ok(Self { positions, normals })
    }

    /// Build a mesh from flat xyz arrays, as supplied by a host loader.
    pub fn from_arrays(positions: &[f32], normals: &[f32]) -> Result<Self, MeshError> {
        if positions.len() != normals.len() {
            return Err(MeshError::AttributeMismatch {
                positions: positions.len() / 3,
                normals: normals.len() / 3,
            });
        }
        if positions.len() % 3 != 0 {
            return Err(MeshError::VertexCount(positions.len() / 3));
        }
        let to_vecs = |data: &[f32]| -> Vec<Vec3> {
            data.chunks_exact(3)
                .map(|c| Vec3::new(c[0], c[1], c[2]))
                .collect()
        };
        Self::new(to_vecs(positions), to_vecs(normals))
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Iterate (position, normal) pairs in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.normals.iter().copied())
    }

    /// Iterate triangles as vertex and normal triples.
    pub fn triangles(&self) -> impl Iterator<Item = ([Vec3; 3], [Vec3; 3])> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.normals.chunks_exact(3))
            .map(|(p, n)| ([p[0], p[1], p[2]], [n[0], n[1], n[2]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_triple_counts() {
        let v = vec![Vec3::ZERO; 4];
        assert!(matches!(
            Mesh::new(v.clone(), v),
            Err(MeshError::VertexCount(4))
        ));
        assert!(matches!(
            Mesh::new(vec![], vec![]),
            Err(MeshError::VertexCount(0))
        ));
    }

    #[test]
    fn rejects_attribute_mismatch() {
        let res = Mesh::new(vec![Vec3::ZERO; 3], vec![Vec3::ZERO; 6]);
        assert!(matches!(res, Err(MeshError::AttributeMismatch { .. })));
    }

    #[test]
    fn from_arrays_groups_xyz() {
        let positions = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let normals = [0.0f32; 9];
        let mesh = Mesh::from_arrays(&positions, &normals).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        let (p, _) = mesh.vertices().nth(1).unwrap();
        assert_eq!(p, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn triangles_follow_insertion_order() {
        let positions: Vec<Vec3> = (0..6).map(|i| Vec3::splat(i as f32)).collect();
        let normals = vec![Vec3::Z; 6];
        let mesh = Mesh::new(positions, normals).unwrap();
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1].0[0], Vec3::splat(3.0));
    }
}
