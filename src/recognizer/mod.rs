//! The recognizer: an ordered template library plus the matching loop.

mod collector;

use crate::config::RecognizerConfig;
use crate::errors::RecognitionError;
use crate::float_types::Real;
use crate::geometry::{Point, path_length};
use crate::matcher::distance_at_best_angle;
use crate::pipeline::{candidate_bounds, canonical_bounds, is_nearly_flat, normalize_candidate};
use crate::shapes::DefaultTemplate;
use crate::template::Template;
use collector::MatchCollector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A recognition outcome: the matched template name and a score in `(-∞, 1]`.
///
/// [`Recognizer::recognize`] reports failure with an empty name and a score of
/// `-∞`; [`Recognizer::classify`] reports it as a [`RecognitionError`].
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub name: String,
    pub score: Real,
}

impl Match {
    /// The sentinel [`Recognizer::recognize`] returns when nothing matched.
    pub fn none() -> Self {
        Match {
            name: String::new(),
            score: Real::NEG_INFINITY,
        }
    }

    pub fn is_match(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Classifies single strokes against an ordered set of templates.
///
/// Templates are matched in insertion order and the first one to reach the
/// smallest distance wins ties. `recognize` only reads the template set, so a
/// recognizer shared between threads needs a lock only around `add_template`
/// (e.g. `RwLock<Recognizer>`).
#[derive(Debug, Clone)]
pub struct Recognizer {
    config: RecognizerConfig,
    templates: Vec<Template>,
}

impl Default for Recognizer {
    /// Default configuration with the sixteen built-in shapes.
    fn default() -> Self {
        Self::with_default_templates(RecognizerConfig::default())
    }
}

impl Recognizer {
    /// A recognizer without templates.
    pub fn new(config: RecognizerConfig) -> Self {
        Recognizer {
            config,
            templates: Vec::new(),
        }
    }

    /// A recognizer pre-populated with [`DefaultTemplate::ALL`].
    pub fn with_default_templates(config: RecognizerConfig) -> Self {
        let templates = DefaultTemplate::ALL
            .iter()
            .map(|&shape| Template::from_default(shape, &config))
            .collect();
        Recognizer { config, templates }
    }

    pub const fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// First template registered under `name`.
    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name() == name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Normalize `points` into a new template and append it.
    pub fn add_template(&mut self, name: impl Into<String>, points: Vec<Point>) {
        let template = Template::new(name, points, &self.config);
        if !template.is_comparable(&self.config) {
            log::warn!(
                "template {:?} is degenerate and will never match",
                template.name()
            );
        } else if is_nearly_flat(&canonical_bounds(template.raw_points(), &self.config)) {
            log::warn!(
                "template {:?} is nearly one-dimensional, its scores are unreliable",
                template.name()
            );
        }
        log::debug!(
            "added template {:?} ({} raw points), {} templates total",
            template.name(),
            template.raw_points().len(),
            self.templates.len() + 1
        );
        self.templates.push(template);
    }

    /// Append an already built template.
    ///
    /// The template should have been normalized with this recognizer's
    /// configuration; one built for a different point count never matches.
    pub fn push_template(&mut self, template: Template) {
        if template.normalized_points().len() != self.config.point_count() {
            log::warn!(
                "template {:?} has {} normalized points, expected {}",
                template.name(),
                template.normalized_points().len(),
                self.config.point_count()
            );
        }
        self.templates.push(template);
    }

    /// Recognize a stroke, reporting failure through sentinel values.
    ///
    /// Returns the best template's name and `1 - distance / half_diagonal`.
    /// When no template yields a finite distance (too few points, a
    /// zero-length or perfectly flat stroke, an empty template set) the name is
    /// empty and the score is `-∞`.
    pub fn recognize(&self, points: &[Point]) -> Match {
        let candidate = normalize_candidate(points, &self.config);
        let result = match self.best_match(&candidate) {
            Some((ix, distance)) => Match {
                name: self.templates[ix].name().to_string(),
                score: self.score(distance),
            },
            None => Match::none(),
        };
        log::debug!(
            "recognized {} points as {:?} (score {:.4})",
            points.len(),
            result.name,
            result.score
        );
        result
    }

    /// Recognize a stroke, naming the reason when nothing matches.
    ///
    /// Succeeds exactly when [`recognize`](Self::recognize) returns a non-empty
    /// name, with the same name and score.
    pub fn classify(&self, points: &[Point]) -> Result<Match, RecognitionError> {
        if points.len() < 2 {
            return Err(RecognitionError::TooFewPoints(points.len()));
        }
        if !(path_length(points) > 0.0) {
            return Err(RecognitionError::ZeroLengthPath);
        }
        if self.templates.is_empty() {
            return Err(RecognitionError::NoTemplates);
        }

        let candidate = normalize_candidate(points, &self.config);
        if candidate.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            let bb = candidate_bounds(points, &self.config);
            return Err(RecognitionError::DegenerateBoundingBox {
                width: bb.width,
                height: bb.height,
            });
        }

        let (ix, distance) = self
            .best_match(&candidate)
            .ok_or(RecognitionError::NoMatch)?;
        Ok(Match {
            name: self.templates[ix].name().to_string(),
            score: self.score(distance),
        })
    }

    /// The `limit` best-scoring templates, best first, one entry per name.
    ///
    /// Templates that cannot be compared are left out, so the result may be
    /// shorter than `limit` and is empty whenever `recognize` finds no match.
    pub fn rank(&self, points: &[Point], limit: usize) -> Vec<Match> {
        let candidate = normalize_candidate(points, &self.config);
        let mut collector = MatchCollector::new(limit);
        for (template, distance) in self.templates.iter().zip(self.distances(&candidate)) {
            collector.file(Match {
                name: template.name().to_string(),
                score: self.score(distance),
            });
        }
        collector.into_matches()
    }

    fn score(&self, distance: Real) -> Real {
        1.0 - distance / self.config.half_diagonal()
    }

    fn distance_to(&self, candidate: &[Point], template: &Template) -> Real {
        distance_at_best_angle(
            candidate,
            template,
            -self.config.angle_range(),
            self.config.angle_range(),
            self.config.angle_precision(),
        )
    }

    #[cfg(not(feature = "parallel"))]
    fn distances(&self, candidate: &[Point]) -> Vec<Real> {
        self.templates
            .iter()
            .map(|template| self.distance_to(candidate, template))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn distances(&self, candidate: &[Point]) -> Vec<Real> {
        self.templates
            .par_iter()
            .map(|template| self.distance_to(candidate, template))
            .collect()
    }

    /// Index and distance of the first template with the smallest distance.
    /// Non-finite distances never win.
    fn best_match(&self, candidate: &[Point]) -> Option<(usize, Real)> {
        let mut best: Option<(usize, Real)> = None;
        let mut best_distance = Real::INFINITY;
        for (ix, distance) in self.distances(candidate).into_iter().enumerate() {
            if distance < best_distance {
                best_distance = distance;
                best = Some((ix, distance));
            }
        }
        best
    }
}
