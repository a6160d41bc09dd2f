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

use crate::point::{IndexedPoint, MAX_INT_COORDINATES};

/// The default size of the lookup table is 64 x 64
pub const LUT_SIZE: usize = 64;
/// Scale factor to convert between integer x and y coordinates and the size of the LUT
pub const LUT_SCALE_FACTOR: i32 = MAX_INT_COORDINATES / LUT_SIZE as i32;

/// Maps every cell of a coarse grid over the quantized plane to the index of the
/// template point closest to that cell, for O(1) approximate nearest-point queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatialLookupTable {
    cells: Vec<usize>,
}

impl SpatialLookupTable {
    /// Constructs a Lookup Table that maps grid points to the closest point from the gesture path.
    /// Ties go to the lowest point index.
    pub fn new(points: &[IndexedPoint]) -> Self {
        let point_cells: Vec<(i64, i64)> = points
            .iter()
            .map(|p| (grid_coordinate(p.int_x), grid_coordinate(p.int_y)))
            .collect();

        let mut cells = vec![0; LUT_SIZE * LUT_SIZE];
        for x in 0..LUT_SIZE {
            for y in 0..LUT_SIZE {
                let mut min_dist = i64::MAX;
                let mut idx_min = 0;
                for (t, &(px, py)) in point_cells.iter().enumerate() {
                    let dx = px - x as i64;
                    let dy = py - y as i64;
                    let dist = dx * dx + dy * dy;
                    if dist < min_dist {
                        min_dist = dist;
                        idx_min = t;
                    }
                }
                cells[x * LUT_SIZE + y] = idx_min;
            }
        }
        Self { cells }
    }

    /// Index of the (approximately) nearest table point to `p`
    pub fn nearest(&self, p: &IndexedPoint) -> usize {
        let (x, y) = cell_of(p);
        self.cells[x * LUT_SIZE + y]
    }

    /// Index of the table point stored for grid cell `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        if x < LUT_SIZE && y < LUT_SIZE {
            Some(self.cells[x * LUT_SIZE + y])
        } else {
            None
        }
    }
}

fn grid_coordinate(c: i32) -> i64 {
    (f64::from(c) / f64::from(LUT_SCALE_FACTOR)).round() as i64
}

/// Grid cell of a quantized point. Quantized coordinates near the upper edge
/// round to LUT_SIZE and are clamped back into the grid.
fn cell_of(p: &IndexedPoint) -> (usize, usize) {
    let to_cell = |c: i32| grid_coordinate(c).clamp(0, LUT_SIZE as i64 - 1) as usize;
    (to_cell(p.int_x), to_cell(p.int_y))
}
