//! Reader for the subset of Wavefront OBJ that describes triangle meshes.
//!
//! Supported records are `v`, `vt`, `vn` and `f`. Every other directive is
//! skipped so that files exported with materials, groups or smoothing
//! information still load. Numeric fields are checked strictly: a bad token
//! fails the whole read instead of producing a half-defined mesh.

use std::io::BufRead;

use log::{debug, trace};

use crate::error::ParseError;
use crate::model::{Face, Model};
use crate::primitives::Point3d;

/// Read a model from OBJ text, line by line until end of stream.
///
/// # Errors
/// [`ParseError::Io`] when the stream fails (including invalid UTF-8),
/// [`ParseError::Malformed`] for a record with bad fields and
/// [`ParseError::Model`] when a face refers past the end of an array.
pub fn read_model<R: BufRead>(reader: R) -> Result<Model, ParseError> {
    let mut builder = ModelBuilder::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        builder.parse_line(index + 1, &line)?;
    }
    builder.finish()
}

/// Read a model from an in-memory OBJ string.
pub fn parse_str(text: &str) -> Result<Model, ParseError> {
    read_model(text.as_bytes())
}

#[derive(Default)]
struct ModelBuilder {
    vertices: Vec<Point3d>,
    texture_coords: Vec<Point3d>,
    normals: Vec<Point3d>,
    faces: Vec<Face>,
    skipped: usize,
}

/// One `v/t/n` face corner, already zero-based.
#[derive(Clone, Copy)]
struct Corner {
    vertex: usize,
    texture: usize,
    normal: usize,
}

impl ModelBuilder {
    fn parse_line(&mut self, line: usize, text: &str) -> Result<(), ParseError> {
        let content = text.split('#').next().unwrap_or_default();
        let mut tokens = content.split_whitespace();
        let Some(directive) = tokens.next() else {
            return Ok(());
        };
        let fields: Vec<&str> = tokens.collect();

        match directive {
            "v" => {
                if !(3..=4).contains(&fields.len()) {
                    return Err(malformed(line, "v", format!("expected 3 coordinates, found {}", fields.len())));
                }
                // the optional fourth `w` component is not used
                let p = parse_point(line, "v", &fields[..3])?;
                self.vertices.push(p);
            }
            "vt" => {
                if fields.len() > 3 {
                    return Err(malformed(line, "vt", format!("expected at most 3 coordinates, found {}", fields.len())));
                }
                let p = parse_point(line, "vt", &fields)?;
                self.texture_coords.push(p);
            }
            "vn" => {
                if fields.len() != 3 {
                    return Err(malformed(line, "vn", format!("expected 3 components, found {}", fields.len())));
                }
                let p = parse_point(line, "vn", &fields)?;
                self.normals.push(p);
            }
            "f" => self.parse_face(line, &fields)?,
            other => {
                trace!("line {line}: ignoring `{other}` record");
                self.skipped += 1;
            }
        }
        Ok(())
    }

    fn parse_face(&mut self, line: usize, fields: &[&str]) -> Result<(), ParseError> {
        if fields.len() < 3 {
            return Err(malformed(line, "f", format!("a face needs at least 3 corners, found {}", fields.len())));
        }
        let corners = fields
            .iter()
            .map(|field| self.parse_corner(line, field))
            .collect::<Result<Vec<_>, _>>()?;

        // Polygons become a fan around the first corner
        let first = corners[0];
        for pair in corners[1..].windows(2) {
            let tri = [first, pair[0], pair[1]];
            self.faces.push(Face::new(
                tri.map(|c| c.vertex),
                tri.map(|c| c.texture),
                tri.map(|c| c.normal),
            ));
        }
        Ok(())
    }

    fn parse_corner(&self, line: usize, field: &str) -> Result<Corner, ParseError> {
        let parts: Vec<&str> = field.split('/').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(malformed(line, "f", format!("corner `{field}` is not a `v/t/n` triple")));
        }
        Ok(Corner {
            vertex: resolve_index(line, parts[0], self.vertices.len())?,
            texture: resolve_index(line, parts[1], self.texture_coords.len())?,
            normal: resolve_index(line, parts[2], self.normals.len())?,
        })
    }

    fn finish(self) -> Result<Model, ParseError> {
        debug!(
            "parsed model: {} vertices, {} texture coords, {} normals, {} faces ({} records skipped)",
            self.vertices.len(),
            self.texture_coords.len(),
            self.normals.len(),
            self.faces.len(),
            self.skipped
        );
        Model::new(self.vertices, self.texture_coords, self.normals, self.faces).map_err(ParseError::from)
    }
}

fn malformed(line: usize, directive: &'static str, reason: String) -> ParseError {
    ParseError::Malformed {
        line,
        directive,
        reason,
    }
}

/// Parse up to three floats into a point; missing components are zero.
fn parse_point(line: usize, directive: &'static str, fields: &[&str]) -> Result<Point3d, ParseError> {
    let mut p = Point3d::ZERO;
    for (i, field) in fields.iter().enumerate() {
        let value = field
            .parse::<f32>()
            .map_err(|e| malformed(line, directive, format!("`{field}` is not a number: {e}")))?;
        if !value.is_finite() {
            return Err(malformed(line, directive, format!("`{field}` is not a finite number")));
        }
        p[i] = value;
    }
    Ok(p)
}

/// Convert a one-based (or negative, relative) OBJ index to zero-based.
///
/// Positive indices past the current count are accepted here and checked
/// once the whole file has been read.
fn resolve_index(line: usize, field: &str, count: usize) -> Result<usize, ParseError> {
    let raw = field
        .parse::<i64>()
        .map_err(|e| malformed(line, "f", format!("`{field}` is not an index: {e}")))?;
    if raw == 0 {
        return Err(malformed(line, "f", "index 0 is invalid, indices start at 1".to_string()));
    }
    if raw > 0 {
        return usize::try_from(raw - 1).map_err(|_| malformed(line, "f", format!("index {raw} is too large")));
    }
    let back = usize::try_from(raw.unsigned_abs()).unwrap_or(usize::MAX);
    count.checked_sub(back).ok_or_else(|| {
        malformed(line, "f", format!("relative index {raw} reaches before the first of {count} records"))
    })
}
