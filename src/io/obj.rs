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
};

use crate::{geometry::point::Point3, mesh::soup::TriangleSoup, numeric::scalar::Scalar};

fn invalid(line: usize, msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("OBJ line {line}: {msg}"))
}

pub fn write_obj<T: Scalar, P: AsRef<Path>>(soup: &TriangleSoup<T>, path: P) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj_to(soup, &mut out)?;
    out.flush()
}

pub fn write_obj_to<T: Scalar, W: Write>(soup: &TriangleSoup<T>, out: &mut W) -> io::Result<()> {
    for v in &soup.vertices {
        let [x, y, z] = v.to_f64();
        writeln!(out, "v {x:?} {y:?} {z:?}")?;
    }
    // OBJ is 1-based
    for [a, b, c] in &soup.faces {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

/// Read a soup from a Wavefront OBJ file.
/// Only `v x y z` and triangular `f i j k` lines are read; `i/t/n` face
/// references keep their vertex index, other lines are ignored.
pub fn read_obj<T: Scalar, P: AsRef<Path>>(path: P) -> io::Result<TriangleSoup<T>> {
    read_obj_from(BufReader::new(File::open(path)?))
}

pub fn read_obj_from<T: Scalar, R: BufRead>(reader: R) -> io::Result<TriangleSoup<T>> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let l = line?;
        let lineno = n + 1;
        let mut parts = l.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut c = [0.0; 3];
                for slot in &mut c {
                    *slot = parts
                        .next()
                        .and_then(|s| s.parse().ok())
                        .ok_or_else(|| invalid(lineno, "bad vertex"))?;
                }
                vertices.push(Point3::from_vals(c));
            }
            Some("f") => {
                let idx = parts
                    .map(|p| {
                        p.split('/')
                            .next()
                            .and_then(|s| s.parse::<usize>().ok())
                            .filter(|&i| i > 0)
                            .map(|i| i - 1)
                    })
                    .collect::<Option<Vec<usize>>>()
                    .ok_or_else(|| invalid(lineno, "bad face index"))?;
                let [a, b, c] = idx[..] else {
                    return Err(invalid(lineno, "only triangular faces are supported"));
                };
                faces.push([a, b, c]);
            }
            _ => {}
        }
    }

    TriangleSoup::new(vertices, faces)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_slashed_references() {
        let text = "# tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
        let soup: TriangleSoup<f64> = read_obj_from(text.as_bytes()).unwrap();
        assert_eq!(soup.faces, vec![[0, 1, 2]]);
        assert_eq!(soup.vertices[1], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn write_then_read() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\nf 1 3 2\nf 1 2 4\n";
        let soup: TriangleSoup<f64> = read_obj_from(text.as_bytes()).unwrap();
        let mut buf = Vec::new();
        write_obj_to(&soup, &mut buf).unwrap();
        let back: TriangleSoup<f64> = read_obj_from(buf.as_slice()).unwrap();
        assert_eq!(back, soup);
    }

    #[test]
    fn quads_are_rejected() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let err = read_obj_from::<f64, _>(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 5"));
    }
}
