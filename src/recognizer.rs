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
    error::RecognizeResult,
    matcher::{cloud_match, MatchParameters},
    point::Point,
    template::Template,
};
use serde_derive::{Deserialize, Serialize};
use std::{borrow::Borrow, collections::HashSet, hash::Hash};
use tracing::{debug, trace};

/// A recognized template name and its confidence in (0..1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    pub score: f64,
}

/// Tuning of the recognition loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    pub matching: MatchParameters,
    /// Added to the best distance so far when bounding the next template's search,
    /// so near-ties are still evaluated in full
    pub abandon_slack: f64,
    /// Once the top result scores above this, weak results are dropped
    pub confident_score: f64,
    /// Results at or below this score are dropped after a confident match
    pub min_score: f64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            matching: MatchParameters::default(),
            abandon_slack: 5.0,
            confident_score: 0.5,
            min_score: 0.1,
        }
    }
}

/// Classifies candidate gestures against a fixed set of templates.
/// The template set never changes after construction, so one recognizer can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Recognizer {
    templates: Vec<Template>,
    config: RecognizerConfig,
}

impl Recognizer {
    pub fn new(templates: Vec<Template>) -> Self {
        Self::with_config(templates, RecognizerConfig::default())
    }

    pub fn with_config(templates: Vec<Template>, config: RecognizerConfig) -> Self {
        Self { templates, config }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template names in library order; a name repeats when several templates share it.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(Template::name)
    }

    /// Recognizes a stroke-tagged point sequence against every template.
    pub fn recognize_all(&self, points: &[Point]) -> RecognizeResult<Vec<RankedResult>> {
        self.recognize(points, &HashSet::<&str>::new())
    }

    /// Main function of the recognizer.
    ///
    /// Normalizes `points` into a candidate and matches it against every template whose name
    /// is not in `ignore_names`, in library order. A template enters the result list only when
    /// it improves on the best distance seen so far. Results are sorted by descending score;
    /// when the top score is above `confident_score`, results at or below `min_score` are dropped.
    pub fn recognize<S>(
        &self,
        points: &[Point],
        ignore_names: &HashSet<S>,
    ) -> RecognizeResult<Vec<RankedResult>>
    where
        S: Borrow<str> + Hash + Eq,
    {
        let candidate = Template::from_raw_points("", points)?;

        let mut results = Vec::new();
        let mut best_distance = f64::INFINITY;
        let mut best_index = None;
        let mut skipped = 0;
        for (i, template) in self.templates.iter().enumerate() {
            if ignore_names.contains(template.name()) {
                skipped += 1;
                continue;
            }
            let bound = best_distance + self.config.abandon_slack;
            let d = cloud_match(&candidate, template, bound, &self.config.matching);
            if d < best_distance {
                best_distance = d;
                best_index = Some(i);
                let score = if d > 1.0 { 1.0 / d } else { 1.0 };
                trace!(template = template.name(), distance = d, score, "improved best match");
                results.push(RankedResult {
                    name: template.name().to_owned(),
                    score,
                });
            }
        }

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        if results.first().is_some_and(|top| top.score > self.config.confident_score) {
            results.retain(|r| r.score > self.config.min_score);
        }

        debug!(
            points = points.len(),
            templates = self.templates.len(),
            skipped,
            best = best_index.map(|i| self.templates[i].name()),
            distance = best_distance,
            results = results.len(),
            "recognized gesture"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecognizeError;

    fn horizontal(len: f64) -> Vec<Point> {
        (0..20)
            .map(|i| Point::new(i as f64 * len / 19.0, 0.2 * (i % 3) as f64, 1))
            .collect()
    }

    fn circle() -> Vec<Point> {
        (0..40)
            .map(|i| {
                let a = i as f64 / 39.0 * std::f64::consts::TAU;
                Point::new(50.0 * a.cos(), 50.0 * a.sin(), 1)
            })
            .collect()
    }

    fn library(order: &[&str]) -> Vec<Template> {
        order
            .iter()
            .map(|name| match *name {
                "line" => Template::from_raw_points("line", &horizontal(100.0)).unwrap(),
                _ => Template::from_raw_points("circle", &circle()).unwrap(),
            })
            .collect()
    }

    #[test]
    fn empty_library_recognizes_nothing() {
        let recognizer = Recognizer::new(Vec::new());
        assert!(recognizer.is_empty());
        assert!(recognizer.recognize_all(&horizontal(50.0)).unwrap().is_empty());
    }

    #[test]
    fn best_match_comes_first() {
        let recognizer = Recognizer::new(library(&["circle", "line"]));
        let results = recognizer.recognize_all(&horizontal(300.0)).unwrap();
        assert_eq!(results[0].name, "line");
        assert!(results[0].score > 0.5 && results[0].score <= 1.0);
        assert_eq!(recognizer.names().collect::<Vec<_>>(), ["circle", "line"]);
    }

    #[test]
    fn only_improving_templates_are_recorded() {
        let config = RecognizerConfig {
            min_score: 0.0,
            ..RecognizerConfig::default()
        };
        let circle_first = Recognizer::with_config(library(&["circle", "line"]), config);
        let names: Vec<String> = circle_first
            .recognize_all(&horizontal(300.0))
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["line", "circle"]);

        let line_first = Recognizer::with_config(library(&["line", "circle"]), config);
        let names: Vec<String> = line_first
            .recognize_all(&horizontal(300.0))
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["line"]);
    }

    #[test]
    fn ignored_names_are_never_returned() {
        let recognizer = Recognizer::new(library(&["circle", "line"]));
        let ignore: HashSet<String> = ["line".to_owned()].into();
        let results = recognizer.recognize(&horizontal(300.0), &ignore).unwrap();
        assert!(results.iter().all(|r| r.name != "line"));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn weak_top_match_keeps_weak_results() {
        let recognizer = Recognizer::new(library(&["circle"]));
        let results = recognizer.recognize_all(&horizontal(300.0)).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].score < 0.5);
    }

    #[test]
    fn degenerate_candidates_fail() {
        let recognizer = Recognizer::new(library(&["line"]));
        let dot = vec![Point::new(4.0, 4.0, 1); 10];
        assert!(matches!(
            recognizer.recognize_all(&dot),
            Err(RecognizeError::DegenerateInput)
        ));
        assert!(matches!(recognizer.recognize_all(&[]), Err(RecognizeError::InvalidInput(_))));
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: RecognizerConfig = serde_json::from_str(r#"{"abandon_slack": 2.5}"#).unwrap();
        assert_eq!(config.abandon_slack, 2.5);
        assert_eq!(config.confident_score, 0.5);
        assert!(config.matching.use_lower_bounding);
    }
}
