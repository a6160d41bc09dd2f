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

//! Compiled-in template libraries.
//!
//! The uni-stroke set ships already normalized, so loading it only rebuilds the lookup
//! tables. The multi-stroke set ships as raw strokes and is normalized on load.

use crate::{
    error::RecognizeResult,
    recognizer::{Recognizer, RecognizerConfig},
    template::{RawTemplate, Template, TemplateData},
};
use tracing::debug;

const UNISTROKE_TEMPLATES: &str = include_str!("../templates/unistroke.json");
const MULTISTROKE_TEMPLATES: &str = include_str!("../templates/multistroke.json");

/// Single-stroke symbols: S, vortex, w, lighting, o, <, >, ^, v, - and |
pub fn unistroke() -> RecognizeResult<Recognizer> {
    unistroke_with_config(RecognizerConfig::default())
}

pub fn unistroke_with_config(config: RecognizerConfig) -> RecognizeResult<Recognizer> {
    let data: Vec<TemplateData> = serde_json::from_str(UNISTROKE_TEMPLATES)?;
    let templates = data
        .into_iter()
        .map(Template::try_from)
        .collect::<RecognizeResult<Vec<_>>>()?;
    debug!(templates = templates.len(), "loaded uni-stroke library");
    Ok(Recognizer::with_config(templates, config))
}

/// Multi-stroke symbols: T, N, D, P, X, H, I, exclamation, five-point star, null,
/// arrowhead, pitchfork, six-point star, asterisk and half-note
pub fn multistroke() -> RecognizeResult<Recognizer> {
    multistroke_with_config(RecognizerConfig::default())
}

pub fn multistroke_with_config(config: RecognizerConfig) -> RecognizeResult<Recognizer> {
    let raw: Vec<RawTemplate> = serde_json::from_str(MULTISTROKE_TEMPLATES)?;
    let templates = raw
        .into_iter()
        .map(Template::try_from)
        .collect::<RecognizeResult<Vec<_>>>()?;
    debug!(templates = templates.len(), "loaded multi-stroke library");
    Ok(Recognizer::with_config(templates, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        matcher::{cloud_match, MatchParameters},
        normalize::SAMPLING_RESOLUTION,
    };

    #[test]
    fn unistroke_library_loads() {
        let recognizer = unistroke().unwrap();
        assert_eq!(recognizer.len(), 12);
        assert_eq!(recognizer.names().filter(|n| *n == "vortex").count(), 2);
        assert!(recognizer.names().any(|n| n == "-"));
        assert!(recognizer.names().any(|n| n == "|"));
    }

    #[test]
    fn multistroke_library_loads() {
        let recognizer = multistroke().unwrap();
        assert_eq!(recognizer.len(), 15);
        assert_eq!(recognizer.names().next(), Some("T"));
        assert!(recognizer
            .templates()
            .iter()
            .all(|t| t.points().len() == SAMPLING_RESOLUTION));
    }

    #[test]
    fn multistroke_templates_keep_their_strokes() {
        let recognizer = multistroke().unwrap();
        let h = recognizer.templates().iter().find(|t| t.name() == "H").unwrap();
        let strokes: Vec<u32> = h.points().iter().map(|p| p.stroke_id).collect();
        assert_eq!(strokes.first(), Some(&1));
        assert_eq!(strokes.last(), Some(&3));
        assert!(strokes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn every_template_matches_itself_at_zero_distance() {
        for recognizer in [unistroke().unwrap(), multistroke().unwrap()] {
            for template in recognizer.templates() {
                let d = cloud_match(template, template, f64::INFINITY, &MatchParameters::default());
                assert!(d.abs() < 1e-12, "{} at {d}", template.name());
            }
        }
    }

    #[test]
    fn redrawn_templates_rank_themselves_first() {
        for recognizer in [unistroke().unwrap(), multistroke().unwrap()] {
            for template in recognizer.templates() {
                let points: Vec<_> = template.points().iter().map(|p| p.point()).collect();
                let results = recognizer.recognize_all(&points).unwrap();
                assert_eq!(results[0].name, template.name());
                assert!(results[0].score > 0.5, "{} scored {}", template.name(), results[0].score);
            }
        }
    }
}
