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
    error::{RecognizeError, RecognizeResult},
    lookup::SpatialLookupTable,
    normalize::{self, SAMPLING_RESOLUTION},
    point::{IndexedPoint, Point, MAX_INT_COORDINATES},
};
use serde_derive::{Deserialize, Serialize};

/// Implements a gesture as a cloud of points (i.e., an unordered set of points).
/// Points are resampled into a fixed number of 32 points, normalized with respect to scale,
/// translated to origin and quantized for the LUT, which is computed once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "TemplateData", try_from = "TemplateData")]
pub struct Template {
    name: String,
    points: Vec<IndexedPoint>,
    lut: SpatialLookupTable,
}

/// Serialized form of a [`Template`]: its name and normalized points.
/// The look-up table is rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    pub name: String,
    pub points: Vec<IndexedPoint>,
}

/// A named raw point set, normalized when turned into a [`Template`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTemplate {
    pub name: String,
    pub points: Vec<Point>,
}

impl Template {
    /// Constructs a new template from a raw stroke-tagged point sequence and a name
    pub fn from_raw_points(name: impl Into<String>, points: &[Point]) -> RecognizeResult<Self> {
        validate(points)?;
        let resampled = normalize::resample(points, SAMPLING_RESOLUTION);
        let scaled = normalize::scale(&resampled)?;
        if scaled.len() != SAMPLING_RESOLUTION {
            return Err(RecognizeError::ResampleShortfall {
                expected: SAMPLING_RESOLUTION,
                actual: scaled.len(),
            });
        }
        let translated = normalize::translate_to(&scaled, (0.0, 0.0));
        Ok(Self::with_points(name.into(), normalize::quantize(&translated)))
    }

    /// Constructs a template from points that were normalized ahead of time, skipping
    /// resampling and scaling
    pub fn from_precomputed(
        name: impl Into<String>,
        points: Vec<IndexedPoint>,
    ) -> RecognizeResult<Self> {
        let name = name.into();
        if points.len() != SAMPLING_RESOLUTION {
            return Err(RecognizeError::InvalidTemplate {
                reason: format!("expected {SAMPLING_RESOLUTION} points, found {}", points.len()),
                name,
            });
        }
        let in_range = |c: i32| (0..MAX_INT_COORDINATES).contains(&c);
        if let Some(p) = points.iter().find(|p| !in_range(p.int_x) || !in_range(p.int_y)) {
            return Err(RecognizeError::InvalidTemplate {
                reason: format!("quantized coordinate ({}, {}) out of range", p.int_x, p.int_y),
                name,
            });
        }
        Ok(Self::with_points(name, points))
    }

    fn with_points(name: String, points: Vec<IndexedPoint>) -> Self {
        let lut = SpatialLookupTable::new(&points);
        Self { name, points, lut }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[IndexedPoint] {
        &self.points
    }

    pub fn lut(&self) -> &SpatialLookupTable {
        &self.lut
    }
}

impl TryFrom<TemplateData> for Template {
    type Error = RecognizeError;

    fn try_from(data: TemplateData) -> RecognizeResult<Self> {
        Template::from_precomputed(data.name, data.points)
    }
}

impl TryFrom<RawTemplate> for Template {
    type Error = RecognizeError;

    fn try_from(raw: RawTemplate) -> RecognizeResult<Self> {
        Template::from_raw_points(raw.name, &raw.points)
    }
}

impl From<Template> for TemplateData {
    fn from(template: Template) -> Self {
        TemplateData {
            name: template.name,
            points: template.points,
        }
    }
}

/// Rejects point sequences the normalization steps have no meaning for
fn validate(points: &[Point]) -> RecognizeResult<()> {
    if points.is_empty() {
        return Err(RecognizeError::InvalidInput("empty point sequence".into()));
    }
    let mut last_id = 1;
    for (i, p) in points.iter().enumerate() {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(RecognizeError::InvalidInput(format!("point {i} is not finite")));
        }
        if p.stroke_id < last_id {
            return Err(RecognizeError::InvalidInput(format!(
                "point {i} has stroke id {} after stroke {last_id}",
                p.stroke_id
            )));
        }
        last_id = p.stroke_id;
    }
    Ok(())
}
