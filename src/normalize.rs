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

//! The $-family normalization steps, applied in order: resample, scale, translate to
//! origin and quantize.

use crate::{
    error::{RecognizeError, RecognizeResult},
    geometry,
    point::{IndexedPoint, Point},
};

/// Default number of points on the gesture path
pub const SAMPLING_RESOLUTION: usize = 32;

/// Computes the path length for an array of points.
/// Distance is not accumulated across a stroke boundary.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .filter(|w| w[0].stroke_id == w[1].stroke_id)
        .map(|w| geometry::euclidean_distance(&w[0], &w[1]))
        .sum()
}

/// Resamples the array of points into n equally-distanced points.
///
/// Each interpolated point becomes the start of the remaining part of its segment,
/// so distance keeps accumulating from it. Segments joining two strokes are skipped.
/// When rounding leaves the path one point short, the last input point is appended.
/// A path with no measurable length resamples to its first point alone.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let mut new_points = Vec::with_capacity(n);
    new_points.push(first);

    let interval = path_length(points) / (n as f64 - 1.0);
    if interval <= 0.0 {
        return new_points;
    }

    let mut d = 0.0;
    let mut prev = first;
    for &current in &points[1..] {
        if current.stroke_id != prev.stroke_id {
            prev = current;
            continue;
        }
        loop {
            let dist = geometry::euclidean_distance(&prev, &current);
            if d + dist < interval {
                d += dist;
                prev = current;
                break;
            }
            let t = (interval - d) / dist;
            let q = Point::new(
                prev.x + t * (current.x - prev.x),
                prev.y + t * (current.y - prev.y),
                current.stroke_id,
            );
            new_points.push(q);
            prev = q;
            d = 0.0;
        }
    }

    // sometimes we fall a rounding-error short of adding the last point, so add it if so
    if new_points.len() + 1 == n {
        if let Some(&last) = points.last() {
            new_points.push(last);
        }
    }
    new_points
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let init = BoundingBox {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };
    points.iter().fold(init, |b, p| BoundingBox {
        min_x: b.min_x.min(p.x),
        min_y: b.min_y.min(p.y),
        max_x: b.max_x.max(p.x),
        max_y: b.max_y.max(p.y),
    })
}

/// Performs scale normalization with shape preservation into [0..1]x[0..1].
/// Fails with [`RecognizeError::DegenerateInput`] when all points coincide.
pub fn scale(points: &[Point]) -> RecognizeResult<Vec<Point>> {
    let bbox = bounding_box(points);
    let size = bbox.width().max(bbox.height());
    if size.is_nan() || size <= 0.0 {
        return Err(RecognizeError::DegenerateInput);
    }
    Ok(points
        .iter()
        .map(|p| {
            Point::new((p.x - bbox.min_x) / size, (p.y - bbox.min_y) / size, p.stroke_id)
        })
        .collect())
}

/// Computes the centroid for an array of points
pub fn centroid(points: &[Point]) -> (f64, f64) {
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    (sx / n, sy / n)
}

/// Translates the points so that their centroid lands on `target`
pub fn translate_to(points: &[Point], target: (f64, f64)) -> Vec<Point> {
    let (cx, cy) = centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x + target.0 - cx, p.y + target.1 - cy, p.stroke_id))
        .collect()
}

/// Scales point coordinates to the integer domain [0..MAXINT-1] x [0..MAXINT-1]
pub fn quantize(points: &[Point]) -> Vec<IndexedPoint> {
    points.iter().copied().map(IndexedPoint::from).collect()
}
