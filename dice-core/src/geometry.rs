//! Die geometry: vertex, face, normal, and color tables per shape.
//!
//! Face normals are computed once at construction from the first three
//! vertices of each face. The tables reproduce the windings the settling
//! and result conventions were validated against; several cube and
//! tetrahedron faces therefore carry inward-pointing computed normals.
//! Reorienting the windings changes observable results.

use crate::types::{constants, DieShape, Vec3};
use std::fmt;

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Geometry tables for one die: local-space vertices, faces as vertex index
/// lists (3 per tetrahedron face, 4 per cube face), one unit normal per
/// face, and one cosmetic color per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct DieGeometry {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Vec<usize>>,
    pub normals: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
}

/// Error type for geometry construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A face produced a zero-length normal from its first three vertices.
    DegenerateFace(usize),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DegenerateFace(i) => {
                write!(f, "face {} has a degenerate (zero-length) normal", i)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Unit normal of a face from its first three vertices.
///
/// Returns the zero vector when the cross product has zero length; the
/// builder turns that into a `DegenerateFace` error so a zero normal can
/// never silently reach the stability/result classifier.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(&(v2 - v0)).normalized()
}

/// Build the geometry tables for a shape at the given size.
pub fn build(shape: DieShape, size: f64) -> Result<DieGeometry, GeometryError> {
    let (vertices, faces, colors) = match shape {
        DieShape::Tetrahedron => {
            let s = size;
            let vertices = vec![
                Vec3::new(s, s, s),
                Vec3::new(s, -s, -s),
                Vec3::new(-s, s, -s),
                Vec3::new(-s, -s, s),
            ];
            // each face omits exactly one vertex
            let faces = vec![
                vec![0, 1, 2],
                vec![0, 1, 3],
                vec![0, 2, 3],
                vec![1, 2, 3],
            ];
            let colors = vec![RED, GREEN, BLUE, WHITE];
            (vertices, faces, colors)
        }
        DieShape::Cube => {
            let s = size / 2.0;
            let vertices = vec![
                Vec3::new(s, s, -s),
                Vec3::new(s, -s, -s),
                Vec3::new(-s, -s, -s),
                Vec3::new(-s, s, -s),
                Vec3::new(s, s, s),
                Vec3::new(s, -s, s),
                Vec3::new(-s, -s, s),
                Vec3::new(-s, s, s),
            ];
            let faces = vec![
                vec![0, 1, 2, 3],
                vec![4, 5, 6, 7],
                vec![0, 1, 5, 4],
                vec![2, 3, 7, 6],
                vec![0, 3, 7, 4],
                vec![1, 2, 6, 5],
            ];
            let colors = vec![
                RED,
                GREEN,
                BLUE,
                WHITE,
                [1.0, 0.5, 0.0],
                [0.0, 0.5, 1.0],
                [0.5, 0.0, 1.0],
                [1.0, 1.0, 0.0],
            ];
            (vertices, faces, colors)
        }
    };

    let mut normals = Vec::with_capacity(faces.len());
    for (i, face) in faces.iter().enumerate() {
        let normal = face_normal(vertices[face[0]], vertices[face[1]], vertices[face[2]]);
        if normal.magnitude_squared() < constants::EPSILON {
            return Err(GeometryError::DegenerateFace(i));
        }
        normals.push(normal);
    }

    Ok(DieGeometry {
        vertices,
        faces,
        normals,
        colors,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetrahedron_tables() {
        let geo = build(DieShape::Tetrahedron, 1.5).unwrap();
        assert_eq!(geo.vertices.len(), 4);
        assert_eq!(geo.faces.len(), 4);
        assert_eq!(geo.normals.len(), 4);
        assert_eq!(geo.colors.len(), 4);
        for face in &geo.faces {
            assert_eq!(face.len(), 3);
        }
    }

    #[test]
    fn test_cube_tables() {
        let geo = build(DieShape::Cube, 1.5).unwrap();
        assert_eq!(geo.vertices.len(), 8);
        assert_eq!(geo.faces.len(), 6);
        assert_eq!(geo.normals.len(), 6);
        assert_eq!(geo.colors.len(), 8);
        for face in &geo.faces {
            assert_eq!(face.len(), 4);
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for shape in [DieShape::Tetrahedron, DieShape::Cube] {
            let geo = build(shape, 2.0).unwrap();
            for normal in &geo.normals {
                assert!(
                    (normal.magnitude() - 1.0).abs() < 1e-10,
                    "{:?} normal not unit: {:?}",
                    shape,
                    normal
                );
            }
        }
    }

    #[test]
    fn test_tetrahedron_each_face_omits_one_vertex() {
        let geo = build(DieShape::Tetrahedron, 1.0).unwrap();
        for face in &geo.faces {
            let mut present = [false; 4];
            for &idx in face {
                present[idx] = true;
            }
            let omitted = present.iter().filter(|&&p| !p).count();
            assert_eq!(omitted, 1, "face {:?} should omit exactly one vertex", face);
        }
    }

    #[test]
    fn test_cube_normals_axis_aligned() {
        let geo = build(DieShape::Cube, 1.5).unwrap();
        for normal in &geo.normals {
            let components = [normal.x.abs(), normal.y.abs(), normal.z.abs()];
            let ones = components.iter().filter(|c| (*c - 1.0).abs() < 1e-10).count();
            let zeros = components.iter().filter(|c| c.abs() < 1e-10).count();
            assert_eq!(ones, 1);
            assert_eq!(zeros, 2);
        }
    }

    #[test]
    fn test_cube_winding_is_preserved() {
        // The result conventions depend on these exact windings: the first
        // up-pointing computed normal is face 4 (1-based 5), and the -Z and
        // +Z faces share the computed normal (0, 0, -1).
        let geo = build(DieShape::Cube, 1.5).unwrap();
        assert!((geo.normals[0] - Vec3::new(0.0, 0.0, -1.0)).magnitude() < 1e-10);
        assert!((geo.normals[1] - Vec3::new(0.0, 0.0, -1.0)).magnitude() < 1e-10);
        assert!((geo.normals[4] - Vec3::new(0.0, 1.0, 0.0)).magnitude() < 1e-10);
        assert!((geo.normals[5] - Vec3::new(0.0, 1.0, 0.0)).magnitude() < 1e-10);
    }

    #[test]
    fn test_degenerate_face_normal_is_zero() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(face_normal(v, v, v), Vec3::ZERO);
        // collinear vertices
        let normal = face_normal(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(normal, Vec3::ZERO);
    }
}
