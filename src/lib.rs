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

//! Stroke-gesture recognition with the $Q point-cloud recognizer.
//!
//! A candidate is a sequence of [`Point`]s tagged with stroke ids. It is resampled to 32
//! points, scaled, centered and quantized into a [`Template`], then greedily matched against
//! every template of a [`Recognizer`] with lower-bound pruning and early abandoning.
//!
//! ```no_run
//! use q_symbol_recognizer::{library, Point};
//!
//! let recognizer = library::unistroke()?;
//! let stroke: Vec<Point> = (0..30).map(|i| Point::new(i as f64 * 10.0, 100.0, 1)).collect();
//! let results = recognizer.recognize_all(&stroke)?;
//! assert_eq!(results[0].name, "-");
//! # Ok::<(), q_symbol_recognizer::RecognizeError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod library;
pub mod lookup;
pub mod matcher;
pub mod normalize;
pub mod point;
pub mod recognizer;
pub mod template;

pub use error::{RecognizeError, RecognizeResult};
pub use matcher::MatchParameters;
pub use point::{IndexedPoint, Point};
pub use recognizer::{RankedResult, Recognizer, RecognizerConfig};
pub use template::{RawTemplate, Template, TemplateData};

#[cfg(test)]
mod tests {
    const SOURCES: [(&str, &str); 10] = [
        ("error.rs", include_str!("error.rs")),
        ("geometry.rs", include_str!("geometry.rs")),
        ("lib.rs", include_str!("lib.rs")),
        ("library.rs", include_str!("library.rs")),
        ("lookup.rs", include_str!("lookup.rs")),
        ("matcher.rs", include_str!("matcher.rs")),
        ("normalize.rs", include_str!("normalize.rs")),
        ("point.rs", include_str!("point.rs")),
        ("recognizer.rs", include_str!("recognizer.rs")),
        ("template.rs", include_str!("template.rs")),
    ];

    #[test]
    fn license_headers_are_plain_comments() {
        for (file, source) in SOURCES {
            let first = source.lines().next().unwrap_or_default();
            assert_eq!(first, "/*", "{file} must not open with a doc comment");
        }
    }
}
