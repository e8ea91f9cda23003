// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::{geometry::point::Point3, mesh::soup::TriangleSoup, numeric::scalar::Scalar};

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("OFF: {}", msg.into()))
}

fn next_parsed<V: FromStr>(it: &mut impl Iterator<Item = String>, what: &str) -> io::Result<V> {
    it.next()
        .ok_or_else(|| invalid(format!("missing {what}")))?
        .parse()
        .map_err(|_| invalid(format!("bad {what}")))
}

/// Non-empty, non-comment tokens across all lines.
fn tokenize<R: BufRead>(r: R) -> io::Result<Vec<String>> {
    let mut toks = Vec::new();
    for line in r.lines() {
        let l = line?;
        let trimmed = l.split('#').next().unwrap_or("").trim();
        toks.extend(trimmed.split_whitespace().map(|s| s.to_string()));
    }
    Ok(toks)
}

/// Write a soup to OFF.
/// Format:
///   OFF
///   <numVertices> <numFaces> 0
///   x y z
///   ...
///   3 i j k   (zero-based indices)
pub fn write_off<T: Scalar, P: AsRef<Path>>(soup: &TriangleSoup<T>, path: P) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_off_to(soup, &mut out)?;
    out.flush()
}

pub fn write_off_to<T: Scalar, W: Write>(soup: &TriangleSoup<T>, out: &mut W) -> io::Result<()> {
    writeln!(out, "OFF")?;
    writeln!(out, "{} {} 0", soup.vertex_count(), soup.face_count())?;
    for v in &soup.vertices {
        let [x, y, z] = v.to_f64();
        writeln!(out, "{x:?} {y:?} {z:?}")?;
    }
    for [a, b, c] in &soup.faces {
        writeln!(out, "3 {a} {b} {c}")?;
    }
    Ok(())
}

/// Read a soup from OFF. Polygons other than triangles are skipped.
pub fn read_off<T: Scalar, P: AsRef<Path>>(path: P) -> io::Result<TriangleSoup<T>> {
    read_off_from(BufReader::new(File::open(path)?))
}

pub fn read_off_from<T: Scalar, R: BufRead>(reader: R) -> io::Result<TriangleSoup<T>> {
    let mut it = tokenize(reader)?.into_iter();

    let header = it.next().ok_or_else(|| invalid("empty file"))?;
    if header != "OFF" {
        return Err(invalid(format!("expected 'OFF', got '{header}'")));
    }

    let vcount: usize = next_parsed(&mut it, "vertex count")?;
    let fcount: usize = next_parsed(&mut it, "face count")?;
    let _ecount: usize = next_parsed(&mut it, "edge count")?;

    let mut vertices = Vec::with_capacity(vcount);
    for _ in 0..vcount {
        let x: f64 = next_parsed(&mut it, "vertex x")?;
        let y: f64 = next_parsed(&mut it, "vertex y")?;
        let z: f64 = next_parsed(&mut it, "vertex z")?;
        vertices.push(Point3::from_vals([x, y, z]));
    }

    let mut faces = Vec::with_capacity(fcount);
    for _ in 0..fcount {
        let poly_size: usize = next_parsed(&mut it, "face vertex count")?;
        if poly_size == 3 {
            let a: usize = next_parsed(&mut it, "index a")?;
            let b: usize = next_parsed(&mut it, "index b")?;
            let c: usize = next_parsed(&mut it, "index c")?;
            faces.push([a, b, c]);
        } else {
            for _ in 0..poly_size {
                let _ = it.next();
            }
        }
    }

    TriangleSoup::new(vertices, faces).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD_AND_TRI: &str = "OFF\n# comment\n4 2 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n3 0 1 2\n";

    #[test]
    fn non_triangles_are_skipped() {
        let soup: TriangleSoup<f64> = read_off_from(QUAD_AND_TRI.as_bytes()).unwrap();
        assert_eq!(soup.vertex_count(), 4);
        assert_eq!(soup.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn write_then_read() {
        let soup: TriangleSoup<f64> = read_off_from(QUAD_AND_TRI.as_bytes()).unwrap();
        let mut buf = Vec::new();
        write_off_to(&soup, &mut buf).unwrap();
        let back: TriangleSoup<f64> = read_off_from(buf.as_slice()).unwrap();
        assert_eq!(back, soup);
    }

    #[test]
    fn bad_input_is_invalid_data() {
        let err = read_off_from::<f64, _>("PLY\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err = read_off_from::<f64, _>("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 5\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
