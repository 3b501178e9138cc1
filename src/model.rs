//! Triangle mesh representation.
//!
//! A [`Model`] holds four parallel arrays: vertex positions, texture
//! coordinates, normals and faces. Each [`Face`] refers to the other three
//! arrays by zero-based index, one index triple per corner.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{IndexKind, LoadError, ModelError, ParseError};
use crate::obj;
use crate::primitives::{Point3d, Triangle3d};

/// One triangle of a mesh.
///
/// For corner `i`, `coords[i]` indexes the vertex positions, `texture[i]`
/// the texture coordinates and `normals[i]` the normals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    pub coords: [usize; 3],
    pub texture: [usize; 3],
    pub normals: [usize; 3],
}

impl Face {
    pub const fn new(coords: [usize; 3], texture: [usize; 3], normals: [usize; 3]) -> Self {
        Self {
            coords,
            texture,
            normals,
        }
    }
}

/// A mesh whose face indices are all known to be in range.
///
/// Construction validates every index, so rendering code can dereference
/// faces without checks. The model is read-only afterwards.
///
/// Texture coordinates and normals are optional: when a model has none of
/// one kind, the matching face indices are carried but never checked or
/// dereferenced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    vertices: Vec<Point3d>,
    texture_coords: Vec<Point3d>,
    normals: Vec<Point3d>,
    faces: Vec<Face>,
}

// Unit cube in [-1, 1]^3, faces counter-clockwise seen from outside
const CUBE_VERTICES: [Point3d; 8] = [
    Point3d::new(-1.0, -1.0, -1.0),
    Point3d::new(-1.0, 1.0, -1.0),
    Point3d::new(1.0, 1.0, -1.0),
    Point3d::new(1.0, -1.0, -1.0),
    Point3d::new(1.0, 1.0, 1.0),
    Point3d::new(1.0, -1.0, 1.0),
    Point3d::new(-1.0, 1.0, 1.0),
    Point3d::new(-1.0, -1.0, 1.0),
];

const CUBE_NORMALS: [Point3d; 6] = [
    Point3d::new(0.0, 0.0, -1.0),
    Point3d::new(1.0, 0.0, 0.0),
    Point3d::new(0.0, 0.0, 1.0),
    Point3d::new(-1.0, 0.0, 0.0),
    Point3d::new(0.0, 1.0, 0.0),
    Point3d::new(0.0, -1.0, 0.0),
];

// (corners, normal index)
const CUBE_FACES: [([usize; 3], usize); 12] = [
    // Front
    ([0, 1, 2], 0),
    ([0, 2, 3], 0),
    // Right
    ([3, 2, 4], 1),
    ([3, 4, 5], 1),
    // Back
    ([5, 4, 6], 2),
    ([5, 6, 7], 2),
    // Left
    ([7, 6, 1], 3),
    ([7, 1, 0], 3),
    // Top
    ([1, 6, 4], 4),
    ([1, 4, 2], 4),
    // Bottom
    ([5, 7, 0], 5),
    ([5, 0, 3], 5),
];

impl Model {
    /// Build a model, checking that every face index is in range.
    ///
    /// Texture and normal indices are only checked when the model has at
    /// least one texture coordinate or normal respectively.
    ///
    /// # Errors
    /// [`ModelError::IndexOutOfRange`] for the first index that does not
    /// refer to an existing entry.
    pub fn new(
        vertices: Vec<Point3d>,
        texture_coords: Vec<Point3d>,
        normals: Vec<Point3d>,
        faces: Vec<Face>,
    ) -> Result<Self, ModelError> {
        let model = Self {
            vertices,
            texture_coords,
            normals,
            faces,
        };
        model.validate()?;
        Ok(model)
    }

    /// Read a model from OBJ text.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        obj::read_model(reader)
    }

    /// Load a model from an OBJ file.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The built-in unit cube, 8 vertices and 12 faces.
    pub fn cube() -> Self {
        let faces = CUBE_FACES
            .iter()
            .map(|&(coords, normal)| Face::new(coords, [0; 3], [normal; 3]))
            .collect();
        let model = Self {
            vertices: CUBE_VERTICES.to_vec(),
            texture_coords: Vec::new(),
            normals: CUBE_NORMALS.to_vec(),
            faces,
        };
        debug_assert!(model.validate().is_ok());
        model
    }

    fn validate(&self) -> Result<(), ModelError> {
        for (face_index, face) in self.faces.iter().enumerate() {
            let checks = [
                (IndexKind::Vertex, &face.coords, self.vertices.len()),
                (IndexKind::Texture, &face.texture, self.texture_coords.len()),
                (IndexKind::Normal, &face.normals, self.normals.len()),
            ];
            for (kind, indices, len) in checks {
                if len == 0 && kind != IndexKind::Vertex {
                    continue;
                }
                if let Some(&index) = indices.iter().find(|&&i| i >= len) {
                    return Err(ModelError::IndexOutOfRange {
                        face: face_index,
                        kind,
                        index,
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    // ============ Accessors ============

    pub fn vertices(&self) -> &[Point3d] {
        &self.vertices
    }

    pub fn texture_coords(&self) -> &[Point3d] {
        &self.texture_coords
    }

    pub fn normals(&self) -> &[Point3d] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex(&self, index: usize) -> Option<&Point3d> {
        self.vertices.get(index)
    }

    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    // ============ Geometry ============

    /// Vertex positions of every face, in face order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle3d> + '_ {
        self.faces
            .iter()
            .map(|face| face.coords.map(|i| self.vertices[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_model(faces: Vec<Face>) -> Result<Model, ModelError> {
        Model::new(
            vec![
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(1.0, 0.0, 0.0),
                Point3d::new(0.0, 1.0, 0.0),
            ],
            vec![Point3d::ZERO],
            vec![Point3d::FORWARD],
            faces,
        )
    }

    #[test]
    fn valid_indices_are_accepted() {
        let model = triangle_model(vec![Face::new([0, 1, 2], [0; 3], [0; 3])]).unwrap();
        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.face_count(), 1);
        let tri: Vec<_> = model.triangles().collect();
        assert_eq!(tri[0][1], Point3d::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let err = triangle_model(vec![
            Face::new([0, 1, 2], [0; 3], [0; 3]),
            Face::new([0, 3, 2], [0; 3], [0; 3]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::IndexOutOfRange {
                face: 1,
                kind: IndexKind::Vertex,
                index: 3,
                len: 3,
            }
        );
    }

    #[test]
    fn out_of_range_normal_is_rejected() {
        let err = triangle_model(vec![Face::new([0, 1, 2], [0; 3], [0, 0, 1])]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::IndexOutOfRange {
                kind: IndexKind::Normal,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn missing_attributes_are_not_checked() {
        let model = Model::new(
            vec![Point3d::ZERO, Point3d::RIGHT, Point3d::UP],
            Vec::new(),
            Vec::new(),
            vec![Face::new([0, 1, 2], [0; 3], [5; 3])],
        )
        .unwrap();
        assert_eq!(model.face_count(), 1);

        let err = Model::new(Vec::new(), Vec::new(), Vec::new(), model.faces().to_vec()).unwrap_err();
        assert!(matches!(
            err,
            ModelError::IndexOutOfRange {
                kind: IndexKind::Vertex,
                len: 0,
                ..
            }
        ));
    }

    #[test]
    fn cube_is_closed_and_valid() {
        let cube = Model::cube();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.face_count(), 12);
        assert!(cube.validate().is_ok());
    }

    #[test]
    fn cube_faces_wind_counter_clockwise() {
        let cube = Model::cube();
        for (tri, face) in cube.triangles().zip(cube.faces()) {
            let n = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
            let expected = cube.normals()[face.normals[0]];
            assert!(n.dot(&expected) > 0.0, "face {face:?} winds clockwise");
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Model::from_obj("/definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.obj"));
    }
}
