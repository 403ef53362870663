//! Reduced OBJ loader
//!
//! Understands `v`, `vt`, `vn` and `f` lines. Faces are expanded reference by
//! reference into a non-indexed [`MeshBuffer`]; shared vertices are not merged.
//! Every leading token is matched independently, so a face line is never
//! swallowed by a preceding branch.

use std::path::Path;
use std::str::SplitWhitespace;

use glam::{Vec2, Vec3};

use super::mesh::{MeshBuffer, Vertex, VertexLayout};
use crate::error::{LoadError, LoadResult};

/// Options controlling how a mesh file is expanded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshLoadOptions {
    /// Emit texcoord + normal (stride 11) instead of position + color (stride 6)
    pub include_texcoord_normal: bool,
    /// Color written into every vertex
    pub color: Vec3,
}

impl Default for MeshLoadOptions {
    fn default() -> Self {
        Self {
            include_texcoord_normal: true,
            color: Vec3::new(1.0, 0.0, 0.0),
        }
    }
}

impl MeshLoadOptions {
    pub fn position_color() -> Self {
        Self {
            include_texcoord_normal: false,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn layout(&self) -> VertexLayout {
        VertexLayout::from_texcoord_normal(self.include_texcoord_normal)
    }
}

/// Load a mesh file from disk
pub fn load_mesh<P: AsRef<Path>>(path: P, options: &MeshLoadOptions) -> LoadResult<MeshBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| {
        log::error!("Failed to open mesh {}: {source}", path.display());
        LoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    // Comments and names may be in any 8-bit encoding; only the parsed
    // keywords and numbers need to be ASCII.
    let source = String::from_utf8_lossy(&bytes);
    let mesh = parse_mesh_at(&source, path, options)?;
    log::info!(
        "Loaded mesh {}: {} vertices, stride {}",
        path.display(),
        mesh.vertex_count(),
        mesh.stride()
    );
    Ok(mesh)
}

/// Parse mesh text that did not come from a file
///
/// `name` is used as the mesh name and as the path reported in errors.
pub fn parse_mesh(source: &str, name: &str, options: &MeshLoadOptions) -> LoadResult<MeshBuffer> {
    parse_mesh_at(source, Path::new(name), options)
}

fn parse_mesh_at(source: &str, path: &Path, options: &MeshLoadOptions) -> LoadResult<MeshBuffer> {
    let name = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("mesh");
    let mut parser = ObjParser::new(path, options);

    for (index, line) in source.lines().enumerate() {
        parser.parse_line(index + 1, line)?;
    }

    Ok(parser.finish(name))
}

/// Position, texcoord and normal tables plus the expanded output
struct ObjParser<'a> {
    path: &'a Path,
    options: &'a MeshLoadOptions,
    positions: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
    vertices: Vec<Vertex>,
}

impl<'a> ObjParser<'a> {
    fn new(path: &'a Path, options: &'a MeshLoadOptions) -> Self {
        Self {
            path,
            options,
            positions: Vec::new(),
            texcoords: Vec::new(),
            normals: Vec::new(),
            vertices: Vec::new(),
        }
    }

    fn parse_line(&mut self, line_number: usize, line: &str) -> LoadResult<()> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(());
        };

        match keyword {
            "v" => {
                let [x, y, z] = self.floats::<3>(line_number, line, &mut tokens)?;
                self.positions.push(Vec3::new(x, y, z));
            }
            "vt" => {
                let [s, t] = self.floats::<2>(line_number, line, &mut tokens)?;
                self.texcoords.push(Vec2::new(s, t));
            }
            "vn" => {
                let [x, y, z] = self.floats::<3>(line_number, line, &mut tokens)?;
                self.normals.push(Vec3::new(x, y, z));
            }
            "f" => {
                for reference in tokens {
                    let vertex = self.resolve(line_number, line, reference)?;
                    self.vertices.push(vertex);
                }
            }
            other => {
                log::debug!(
                    "{}:{line_number}: ignoring {other:?}",
                    self.path.display()
                );
            }
        }

        Ok(())
    }

    /// Read exactly `N` leading floats; extra trailing values (e.g. `w`) are ignored
    fn floats<const N: usize>(
        &self,
        line_number: usize,
        line: &str,
        tokens: &mut SplitWhitespace<'_>,
    ) -> LoadResult<[f32; N]> {
        let mut values = [0.0; N];
        for value in values.iter_mut() {
            *value = tokens
                .next()
                .and_then(|token| token.parse::<f32>().ok())
                .ok_or_else(|| self.malformed_line(line_number, line))?;
        }
        Ok(values)
    }

    /// Expand one `pos/tex/norm` reference into a vertex
    fn resolve(&self, line_number: usize, line: &str, reference: &str) -> LoadResult<Vertex> {
        let mut parts = reference.split('/');
        let position = parts
            .next()
            .and_then(|p| self.lookup(&self.positions, p))
            .ok_or_else(|| self.malformed_reference(line_number, line))?;

        let mut vertex = Vertex {
            position,
            color: self.options.color,
            uv: Vec2::ZERO,
            normal: Vec3::ZERO,
        };

        if self.options.include_texcoord_normal {
            vertex.uv = parts
                .next()
                .and_then(|p| self.lookup(&self.texcoords, p))
                .ok_or_else(|| self.malformed_reference(line_number, line))?;
            vertex.normal = parts
                .next()
                .and_then(|p| self.lookup(&self.normals, p))
                .ok_or_else(|| self.malformed_reference(line_number, line))?;
        }

        Ok(vertex)
    }

    /// 1-based lookup; zero, negative or out-of-range indices yield `None`
    fn lookup<T: Copy>(&self, table: &[T], index: &str) -> Option<T> {
        let index: usize = index.parse().ok()?;
        table.get(index.checked_sub(1)?).copied()
    }

    fn malformed_reference(&self, line: usize, text: &str) -> LoadError {
        LoadError::MalformedReference {
            path: self.path.to_path_buf(),
            line,
            text: text.to_string(),
        }
    }

    fn malformed_line(&self, line: usize, text: &str) -> LoadError {
        LoadError::MalformedLine {
            path: self.path.to_path_buf(),
            line,
            text: text.to_string(),
        }
    }

    fn finish(self, name: &str) -> MeshBuffer {
        let mut mesh = MeshBuffer::new(name, self.options.layout());
        mesh.vertices = self.vertices;
        mesh
    }
}
