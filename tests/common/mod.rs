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

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use outer_hull::{
    OuterHull, Point3, TriangleSoup,
    hull::{PointInSolid, WindingNumber},
    kernel::orient3d,
};

/// Outward-wound faces over the corners
/// 0:(0,0,0) 1:(1,0,0) 2:(1,1,0) 3:(0,1,0) 4:(0,0,1) 5:(1,0,1) 6:(1,1,1) 7:(0,1,1).
pub const CUBE_FACES: [[usize; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [3, 7, 6],
    [3, 6, 2],
    [0, 4, 7],
    [0, 7, 3],
    [1, 2, 6],
    [1, 6, 5],
];

/// Axis-aligned box with outward faces.
pub fn box_soup(min: [f64; 3], max: [f64; 3]) -> TriangleSoup<f64> {
    let mut v = Vec::with_capacity(8);
    for z in [min[2], max[2]] {
        for (x, y) in [
            (min[0], min[1]),
            (max[0], min[1]),
            (max[0], max[1]),
            (min[0], max[1]),
        ] {
            v.push([x, y, z]);
        }
    }
    TriangleSoup::from_f64(&v, &CUBE_FACES).unwrap()
}

pub fn cube(min: [f64; 3], size: f64) -> TriangleSoup<f64> {
    box_soup(min, [min[0] + size, min[1] + size, min[2] + size])
}

pub fn inverted(soup: &TriangleSoup<f64>) -> TriangleSoup<f64> {
    TriangleSoup {
        vertices: soup.vertices.clone(),
        faces: soup.faces.iter().map(|&[a, b, c]| [c, b, a]).collect(),
    }
}

/// Concatenation of soups, vertices not shared.
pub fn concat(parts: &[TriangleSoup<f64>]) -> TriangleSoup<f64> {
    let mut out = TriangleSoup {
        vertices: Vec::new(),
        faces: Vec::new(),
    };
    for p in parts {
        out.append(p);
    }
    out
}

/// Merges vertices with identical coordinates, keeping first occurrences.
pub fn weld(soup: &TriangleSoup<f64>) -> TriangleSoup<f64> {
    let mut seen: HashMap<[u64; 3], usize> = HashMap::new();
    let mut vertices = Vec::new();
    let remap: Vec<usize> = soup
        .vertices
        .iter()
        .map(|p| {
            let key = p.to_f64().map(f64::to_bits);
            *seen.entry(key).or_insert_with(|| {
                vertices.push(p.clone());
                vertices.len() - 1
            })
        })
        .collect();
    TriangleSoup {
        vertices,
        faces: soup.faces.iter().map(|f| f.map(|v| remap[v])).collect(),
    }
}

/// Rotate so the smallest index leads; keeps the winding.
pub fn canonical_triangle([a, b, c]: [usize; 3]) -> [usize; 3] {
    if a <= b && a <= c {
        [a, b, c]
    } else if b <= a && b <= c {
        [b, c, a]
    } else {
        [c, a, b]
    }
}

pub fn triangle_set(faces: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let mut out: Vec<[usize; 3]> = faces.iter().map(|&f| canonical_triangle(f)).collect();
    out.sort_unstable();
    out
}

/// Every hull face of a convex hull sees the hull's vertex centroid behind it.
pub fn assert_convex_outward(soup: &TriangleSoup<f64>, hull: &OuterHull) {
    let used: Vec<usize> = {
        let mut v: Vec<usize> = hull.faces.iter().flatten().copied().collect();
        v.sort_unstable();
        v.dedup();
        v
    };
    let n = used.len() as f64;
    let mut sum = [0.0; 3];
    for &v in &used {
        let p = soup.vertices[v].to_f64();
        for i in 0..3 {
            sum[i] += p[i] / n;
        }
    }
    let centroid = Point3::from_vals(sum);
    for &[a, b, c] in &hull.faces {
        let vol = orient3d(
            &soup.vertices[a],
            &soup.vertices[b],
            &soup.vertices[c],
            &centroid,
        );
        assert!(vol < 0.0, "face [{a}, {b}, {c}] is not outward");
    }
}

/// Winding-number containment that counts the point queries it answers.
#[derive(Default)]
pub struct CountingSolid {
    pub calls: AtomicUsize,
}

impl CountingSolid {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PointInSolid<f64> for CountingSolid {
    fn inside(&self, soup: &TriangleSoup<f64>, surface: &[[usize; 3]], point: &Point3<f64>) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        WindingNumber::default().inside(soup, surface, point)
    }
}

/// Every undirected edge is traversed as often in each direction.
pub fn assert_consistently_oriented(faces: &[[usize; 3]]) {
    let mut count: HashMap<(usize, usize), i64> = HashMap::new();
    for f in faces {
        for i in 0..3 {
            let (a, b) = (f[i], f[(i + 1) % 3]);
            let key = if a < b { (a, b) } else { (b, a) };
            *count.entry(key).or_default() += if a < b { 1 } else { -1 };
        }
    }
    for (edge, balance) in count {
        assert_eq!(balance, 0, "edge {edge:?} is not consistently oriented");
    }
}
