//! OFF (Object File Format) support.
//!
//! An ASCII OFF file starts with the `OFF` keyword, followed by the vertex,
//! face, and edge counts, one `x y z` line per vertex, and one
//! `n v0 .. v(n-1)` line per face. Text after `#` is a comment. The edge
//! count is informational and ignored. Polygons with more than three corners
//! are fan-triangulated; trailing tokens on a line (such as colors) are
//! ignored.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};
use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::MeshStore;

/// Non-empty lines with comments stripped, as `(line number, tokens)`.
fn tokenize(text: &str) -> Vec<(usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let content = line.split('#').next().unwrap_or("");
            let tokens: Vec<&str> = content.split_whitespace().collect();
            (!tokens.is_empty()).then_some((i + 1, tokens))
        })
        .collect()
}

fn parse_token<T: std::str::FromStr>(line: usize, token: Option<&&str>, what: &str) -> Result<T> {
    let token = token.ok_or_else(|| MeshError::parse(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| MeshError::parse(line, format!("invalid {what} '{token}'")))
}

/// Read a mesh in OFF format.
///
/// # Errors
/// [`MeshError::Parse`] with the offending line for malformed input, faces
/// with fewer than three corners, or vertex indices out of range.
///
/// # Example
///
/// ```
/// use meshring::io::off;
///
/// let text = "OFF\n4 2 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n3 0 1 3\n3 1 2 3\n";
/// let store = off::read(text.as_bytes()).unwrap();
/// assert_eq!(store.num_vertices(), 4);
/// assert_eq!(store.faces(), &[[0, 1, 3], [1, 2, 3]]);
/// ```
pub fn read<R: Read>(mut reader: R) -> Result<MeshStore> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let tokenized = tokenize(&text);
    let mut lines = tokenized.iter();

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| MeshError::parse(1, "empty file"))?;
    if header[0] != "OFF" {
        return Err(MeshError::parse(
            *header_line,
            format!("expected 'OFF' header, found '{}'", header[0]),
        ));
    }

    // Counts may share the header line
    let (count_line, counts) = if header.len() > 1 {
        (*header_line, &header[1..])
    } else {
        let (line, tokens) = lines
            .next()
            .ok_or_else(|| MeshError::parse(*header_line, "missing element counts"))?;
        (*line, &tokens[..])
    };
    let num_vertices: usize = parse_token(count_line, counts.first(), "vertex count")?;
    let num_faces: usize = parse_token(count_line, counts.get(1), "face count")?;

    // Header counts are untrusted; never reserve more than the file can hold
    let mut positions = Vec::with_capacity(num_vertices.min(tokenized.len()));
    for v in 0..num_vertices {
        let (line, tokens) = lines
            .next()
            .ok_or_else(|| MeshError::parse(count_line, format!("expected {num_vertices} vertices, found {v}")))?;
        let x: f64 = parse_token(*line, tokens.first(), "x coordinate")?;
        let y: f64 = parse_token(*line, tokens.get(1), "y coordinate")?;
        let z: f64 = parse_token(*line, tokens.get(2), "z coordinate")?;
        positions.push(Point3::new(x, y, z));
    }

    let mut faces: Vec<[usize; 3]> = Vec::with_capacity(num_faces.min(tokenized.len()));
    for f in 0..num_faces {
        let (line, tokens) = lines
            .next()
            .ok_or_else(|| MeshError::parse(count_line, format!("expected {num_faces} faces, found {f}")))?;
        let line = *line;

        let n: usize = parse_token(line, tokens.first(), "corner count")?;
        if n < 3 {
            return Err(MeshError::parse(line, format!("face has {n} corners, need at least 3")));
        }

        let mut corners = Vec::with_capacity(n.min(tokens.len()));
        for k in 0..n {
            let v: usize = parse_token(line, tokens.get(k + 1), "vertex index")?;
            if v >= num_vertices {
                return Err(MeshError::parse(
                    line,
                    format!("vertex index {v} out of range ({num_vertices} vertices)"),
                ));
            }
            corners.push(v);
        }

        if n > 3 {
            debug!("line {}: fan-triangulating {}-gon", line, n);
        }
        for i in 1..n - 1 {
            faces.push([corners[0], corners[i], corners[i + 1]]);
        }
    }

    Ok(MeshStore::new(positions, faces))
}

/// Write a mesh in OFF format.
pub fn write<W: Write>(store: &MeshStore, mut writer: W) -> Result<()> {
    writeln!(writer, "OFF")?;
    writeln!(writer, "{} {} 0", store.num_vertices(), store.num_faces())?;

    for p in store.positions() {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }

    for f in store.faces() {
        writeln!(writer, "3 {} {} {}", f[0], f[1], f[2])?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a mesh from an OFF file.
///
/// # Example
///
/// ```no_run
/// use meshring::io::off;
///
/// let store = off::load("bunny.off").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<MeshStore> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let store = read(BufReader::new(file)).map_err(|e| match e {
        MeshError::Parse { .. } => MeshError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        other => other,
    })?;

    info!(
        "loaded {}: {} vertices, {} faces",
        path.display(),
        store.num_vertices(),
        store.num_faces()
    );
    Ok(store)
}

/// Save a mesh to an OFF file.
///
/// # Example
///
/// ```no_run
/// use meshring::io::off;
/// use meshring::mesh::MeshStore;
///
/// off::save(&MeshStore::default(), "empty.off").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(store: &MeshStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;

    write(store, BufWriter::new(file)).map_err(|e| MeshError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
