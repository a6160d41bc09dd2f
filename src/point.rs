/*
 * The $Q Super-Quick Recognizer (rust version)
 *
 * Original authors:
 *
 * 	    Radu-Daniel Vatavu, Ph.D.
 *	    University Stefan cel Mare of Suceava
 *	    Suceava 720229, Romania
 *	    radu.vatavu@usm.ro
 *
 *	    Lisa Anthony, Ph.D.
 *      Department of CISE
 *      University of Florida
 *      Gainesville, FL, USA 32611
 *      lanthony@cise.ufl.edu
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School | DUB Group
 *	    University of Washington
 *	    Seattle, WA, USA 98195-2840
 *	    wobbrock@uw.edu
 *
 * The academic publication for the $Q recognizer, and what should be
 * used to cite it, is:
 *
 *	Vatavu, R.-D., Anthony, L. and Wobbrock, J.O. (2018). $Q: A super-quick,
 *	  articulation-invariant stroke-gesture recognizer for low-resource devices.
 *	  Proceedings of the ACM Conference on Human-Computer Interaction with Mobile
 *	  Devices and Services (MobileHCI '18). Barcelona, Spain (September 3-6, 2018).
 *	  New York: ACM Press. Article No. 23.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2018-2019, Nathan Magrofuoco, Jacob O. Wobbrock, Radu-Daniel Vatavu,
 * and Lisa Anthony. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University Stefan cel Mare of Suceava,
 *	    University of Washington, nor UMBC, nor the names of its contributors
 *	    may be used to endorse or promote products derived from this software
 *	    without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Radu-Daniel Vatavu OR Lisa Anthony
 * OR Jacob O. Wobbrock OR Ferran Pujol Camins BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use serde_derive::{Deserialize, Serialize};

/// Each indexed point has two additional x and y integer coordinates in the interval
/// [0..MAX_INT_COORDINATES-1] used to operate the LUT table efficiently (O(1))
pub const MAX_INT_COORDINATES: i32 = 1024;

/// A 2D sample of a stroke path, tagged with the id of the stroke it belongs to.
/// Stroke ids start at 1 and do not decrease along a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "id")]
    pub stroke_id: u32,
}

impl Point {
    pub fn new(x: f64, y: f64, stroke_id: u32) -> Self {
        Self { x, y, stroke_id }
    }

    /// Concatenates per-stroke `(x, y)` paths into a single stroke-tagged sequence.
    /// The first stroke gets id 1.
    pub fn from_strokes<S, P>(strokes: S) -> Vec<Point>
    where
        S: IntoIterator<Item = P>,
        P: IntoIterator<Item = (f64, f64)>,
    {
        strokes
            .into_iter()
            .zip(1..)
            .flat_map(|(stroke, id)| stroke.into_iter().map(move |(x, y)| Point::new(x, y, id)))
            .collect()
    }
}

/// A normalized point with its coordinates quantized to the integer grid.
/// The integer coordinates are only ever derived from `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedPoint {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "id")]
    pub stroke_id: u32,
    pub int_x: i32,
    pub int_y: i32,
}

impl IndexedPoint {
    pub fn new(x: f64, y: f64, stroke_id: u32) -> Self {
        Self {
            x,
            y,
            stroke_id,
            int_x: quantize_coordinate(x),
            int_y: quantize_coordinate(y),
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y, self.stroke_id)
    }
}

impl From<Point> for IndexedPoint {
    fn from(p: Point) -> Self {
        IndexedPoint::new(p.x, p.y, p.stroke_id)
    }
}

/// Maps a normalized coordinate in [-1..1] to [0..MAX_INT_COORDINATES-1]
fn quantize_coordinate(c: f64) -> i32 {
    let max = f64::from(MAX_INT_COORDINATES - 1);
    ((c + 1.0) / 2.0 * max).round().clamp(0.0, max) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_the_normalized_range() {
        assert_eq!(IndexedPoint::new(-1.0, -1.0, 1).int_x, 0);
        assert_eq!(IndexedPoint::new(0.0, 0.0, 1).int_x, 512);
        let p = IndexedPoint::new(1.0, 0.5, 1);
        assert_eq!(p.int_x, 1023);
        assert_eq!(p.int_y, 767);
    }

    #[test]
    fn strokes_are_numbered_from_one() {
        let points = Point::from_strokes(vec![
            vec![(0.0, 0.0), (10.0, 0.0)],
            vec![(5.0, -5.0), (5.0, 5.0), (5.0, 10.0)],
        ]);
        assert_eq!(points.len(), 5);
        assert_eq!(points[1], Point::new(10.0, 0.0, 1));
        assert_eq!(points[2].stroke_id, 2);
        assert_eq!(points[4].stroke_id, 2);
    }

    #[test]
    fn indexed_point_uses_the_precomputed_wire_names() {
        let json = r#"{"x":0.5,"y":-0.25,"id":1,"intX":767,"intY":384}"#;
        let p: IndexedPoint = serde_json::from_str(json).unwrap();
        assert_eq!(p, IndexedPoint::new(0.5, -0.25, 1));
        assert_eq!(p.point(), Point::new(0.5, -0.25, 1));
    }
}
