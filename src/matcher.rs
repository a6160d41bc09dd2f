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

use crate::{
    geometry::sqr_euclidean_distance, lookup::SpatialLookupTable, point::IndexedPoint,
    template::Template,
};
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchParameters {
    // $Q's two major optimization layers (Early Abandoning and Lower Bounding)
    // can be activated / deactivated as desired
    pub use_early_abandoning: bool,
    pub use_lower_bounding: bool,
}

impl Default for MatchParameters {
    fn default() -> Self {
        MatchParameters {
            use_early_abandoning: true,
            use_lower_bounding: true,
        }
    }
}

/// Number of greedy search trials stride: floor(sqrt(n))
pub fn search_step(n: usize) -> usize {
    ((n as f64).sqrt().floor() as usize).max(1)
}

/// Implements greedy search for a minimum-distance matching between two point clouds.
/// Implements Early Abandoning and Lower Bounding (LUT) optimizations.
///
/// Returns the smallest distance found, or `min_so_far` when no alignment beats it.
pub fn cloud_match(
    candidate: &Template,
    template: &Template,
    mut min_so_far: f64,
    params: &MatchParameters,
) -> f64 {
    let points1 = candidate.points();
    let points2 = template.points();
    // the two clouds should have the same number of points by now
    let n = points1.len();
    let step = search_step(n);

    if params.use_lower_bounding {
        // direction of matching: candidate --> template
        let lb1 = compute_lower_bound(points1, points2, template.lut(), step);
        // direction of matching: template --> candidate
        let lb2 = compute_lower_bound(points2, points1, candidate.lut(), step);

        for (index_lb, i) in (0..n).step_by(step).enumerate() {
            if lb1[index_lb] < min_so_far {
                min_so_far = min_so_far.min(cloud_distance(points1, points2, i, min_so_far, params));
            }
            if lb2[index_lb] < min_so_far {
                min_so_far = min_so_far.min(cloud_distance(points2, points1, i, min_so_far, params));
            }
        }
    } else {
        for i in (0..n).step_by(step) {
            min_so_far = min_so_far.min(cloud_distance(points1, points2, i, min_so_far, params));
            min_so_far = min_so_far.min(cloud_distance(points2, points1, i, min_so_far, params));
        }
    }

    min_so_far
}

/// Computes lower bounds for each starting point and the direction of matching from points1 to points2.
///
/// `lb[0]` weights the LUT nearest-point distances from n down to 1; the bound for the
/// start index `i = j * step` is derived from it in O(1) with the prefix sums `sat`.
pub fn compute_lower_bound(
    points1: &[IndexedPoint],
    points2: &[IndexedPoint],
    lut: &SpatialLookupTable,
    step: usize,
) -> Vec<f64> {
    let n = points1.len();
    let mut lb = vec![0.0; n / step + 1];
    let mut sat = vec![0.0; n];

    for (i, p) in points1.iter().enumerate() {
        let index = lut.nearest(p);
        let dist = sqr_euclidean_distance(p, &points2[index]);
        sat[i] = if i == 0 { dist } else { sat[i - 1] + dist };
        lb[0] += (n - i) as f64 * dist;
    }

    for (index_lb, i) in (step..n).step_by(step).enumerate() {
        lb[index_lb + 1] = lb[0] + (i as f64) * sat[n - 1] - (n as f64) * sat[i - 1];
    }
    lb
}

/// Computes the distance between two point clouds by performing a minimum-distance greedy matching
/// starting with point `start_index`.
///
/// With early abandoning the walk stops as soon as the partial sum reaches `min_so_far`,
/// returning that partial sum.
pub fn cloud_distance(
    points1: &[IndexedPoint],
    points2: &[IndexedPoint],
    start_index: usize,
    min_so_far: f64,
    params: &MatchParameters,
) -> f64 {
    // the two point clouds should have the same number of points by now
    let n = points1.len();
    debug_assert_eq!(n, points2.len());
    // matched[j] signals whether point j from the 2nd cloud has been already matched
    let mut matched = vec![false; n];

    let mut sum = 0.0;
    let mut i = start_index;
    // implements weights, decreasing from n to 1
    let mut weight = n;
    loop {
        let mut index = 0;
        let mut min_distance = f64::INFINITY;
        for (j, q) in points2.iter().enumerate() {
            if matched[j] {
                continue;
            }
            let dist = sqr_euclidean_distance(&points1[i], q);
            if dist < min_distance {
                min_distance = dist;
                index = j;
            }
        }
        // point `index` from the 2nd cloud is now matched to point i of the 1st cloud
        matched[index] = true;
        sum += weight as f64 * min_distance;
        if params.use_early_abandoning && sum >= min_so_far {
            return sum;
        }
        weight -= 1;

        i = (i + 1) % n;
        if i == start_index {
            break;
        }
    }
    sum
}
