//! Mesh data: validated triangle soups and procedural test shapes

mod mesh;
pub mod shapes;

pub use mesh::{Mesh, MeshError};
