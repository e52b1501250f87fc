// ==============================================================================
// mesh.rs — TRIANGLE MESH + MESH LOADER SEAM
// ------------------------------------------------------------------------------
// The tire never parses mesh formats itself: it asks a MeshLoader for a
// TriangleMesh and wraps the result in a VisualAsset.
//
// ObjMeshLoader is the stock loader:
// - resolves the file against DataConfig (data dir)
// - reads "v" and "f" records of a Wavefront OBJ file
// - fan-triangulates polygons, accepts "v/vt/vn" tokens and negative indices
// - ignores everything else (vt, vn, o, g, usemtl, s, comments)
// ==============================================================================

use std::path::Path;

use crate::config::DataConfig;
use crate::error::MeshLoadError;

/// Immutable triangle soup used by visualization assets.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub vertices: Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// External mesh-loading collaborator.
pub trait MeshLoader {
    fn load(&self, file: &str) -> Result<TriangleMesh, MeshLoadError>;
}

#[derive(Debug, Clone, Default)]
pub struct ObjMeshLoader {
    data: DataConfig,
}

impl ObjMeshLoader {
    pub fn new(data: DataConfig) -> Self {
        Self { data }
    }
}

impl MeshLoader for ObjMeshLoader {
    fn load(&self, file: &str) -> Result<TriangleMesh, MeshLoadError> {
        let path = self.data.resolve(file);
        let text = std::fs::read_to_string(&path)
            .map_err(|source| MeshLoadError::Io { path: path.clone(), source })?;

        let mesh = parse_obj(&text, &path)?;
        log::debug!(
            "loaded mesh {} ({} vertices, {} triangles)",
            path.display(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }
}

pub fn parse_obj(text: &str, path: &Path) -> Result<TriangleMesh, MeshLoadError> {
    let mut mesh = TriangleMesh::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let err = |message: String| MeshLoadError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            message,
        };

        let line = raw.split('#').next().unwrap_or("").trim();
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut p = [0.0f32; 3];
                for slot in p.iter_mut() {
                    let tok = tokens.next().ok_or_else(|| err("vertex needs 3 coordinates".into()))?;
                    *slot = tok
                        .parse()
                        .map_err(|_| err(format!("bad vertex coordinate `{tok}`")))?;
                }
                mesh.vertices.push(p);
            }
            Some("f") => {
                let mut corners = Vec::with_capacity(4);
                for tok in tokens {
                    corners.push(resolve_index(tok, mesh.vertices.len()).map_err(err)?);
                }
                if corners.len() < 3 {
                    return Err(err("face needs at least 3 vertices".into()));
                }
                // fan triangulation
                for k in 1..corners.len() - 1 {
                    mesh.triangles.push([corners[0], corners[k], corners[k + 1]]);
                }
            }
            _ => {}
        }
    }

    if mesh.triangles.is_empty() {
        return Err(MeshLoadError::Empty(path.to_path_buf()));
    }
    Ok(mesh)
}

/// OBJ indices are 1-based; negatives count back from the last vertex read so far.
fn resolve_index(token: &str, vertex_count: usize) -> Result<u32, String> {
    let head = token.split('/').next().unwrap_or("");
    let raw: i64 = head
        .parse()
        .map_err(|_| format!("bad face index `{token}`"))?;

    let zero_based = match raw {
        0 => return Err("face index 0 is not valid".into()),
        r if r > 0 => r - 1,
        r => vertex_count as i64 + r,
    };

    if zero_based < 0 || zero_based >= vertex_count as i64 {
        return Err(format!("face index `{token}` out of range ({vertex_count} vertices)"));
    }
    Ok(zero_based as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> Result<TriangleMesh, MeshLoadError> {
        parse_obj(text, &PathBuf::from("test.obj"))
    }

    #[test]
    fn quad_is_fan_triangulated() {
        let mesh = parse(
            "# quad\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 1 1 0\n\
             v 0 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1 4//1\n",
        )
        .unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn negative_indices_are_relative() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n").unwrap();
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn out_of_range_index_reports_line() {
        let err = parse("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, MeshLoadError::Parse { line: 3, .. }));
    }

    #[test]
    fn no_faces_is_empty() {
        let err = parse("v 0 0 0\n").unwrap_err();
        assert!(matches!(err, MeshLoadError::Empty(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let loader = ObjMeshLoader::new(DataConfig::new("/definitely/not/here"));
        let err = loader.load("sedan/tire.obj").unwrap_err();
        assert!(matches!(err, MeshLoadError::Io { .. }));
    }
}
