//! Batch validation engine.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::problem::{Problem, ProblemKind, ValidateError, ValidationFailure};
use crate::catalog::SceneCatalog;
use crate::coverage::CoverageMap;
use crate::scene_id::NamePattern;

/// Accepts or rejects a batch of scene identifiers.
///
/// Every identifier ends up in exactly one state: not found in the
/// catalog, found but outside DEM coverage, or found and covered (plus
/// malformed, when a [`NamePattern`] is configured). A batch passes only if
/// every identifier is found and covered.
///
/// The engine holds no mutable state; `validate` can be called
/// concurrently from any number of tasks.
pub struct ValidationEngine<C: SceneCatalog> {
    catalog: C,
    coverage: Arc<CoverageMap>,
    name_pattern: Option<NamePattern>,
}

impl<C: SceneCatalog> ValidationEngine<C> {
    /// Creates an engine over a catalog and a shared coverage map.
    pub fn new(catalog: C, coverage: Arc<CoverageMap>) -> Self {
        Self {
            catalog,
            coverage,
            name_pattern: None,
        }
    }

    /// Rejects identifiers that do not match `pattern` before querying the catalog.
    pub fn with_name_pattern(mut self, pattern: NamePattern) -> Self {
        self.name_pattern = Some(pattern);
        self
    }

    /// The coverage map scenes are checked against.
    pub fn coverage(&self) -> &CoverageMap {
        &self.coverage
    }

    /// Validates a batch.
    ///
    /// Issues one catalog query for the whole batch, then runs the existence
    /// and coverage checks independently so a rejection lists every problem
    /// at once.
    ///
    /// # Errors
    ///
    /// - [`ValidateError::Rejected`] if any scene is missing, uncovered or malformed
    /// - [`ValidateError::Catalog`] if the catalog could not be queried or
    ///   returned unusable data
    pub async fn validate(&self, scene_ids: &[String]) -> Result<(), ValidateError> {
        let mut problems = Vec::new();

        let (well_formed, malformed) = self.partition_names(scene_ids);
        problems.extend(malformed.into_iter().map(|scene| Problem {
            kind: ProblemKind::MalformedName,
            scene,
        }));

        let metadata = match self.catalog.query(&well_formed).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(error = %e, scenes = well_formed.len(), "Catalog lookup failed");
                return Err(e.into());
            }
        };

        // Only entries for requested scenes take part in either check
        let requested: HashSet<&str> = well_formed.iter().map(String::as_str).collect();
        let metadata: Vec<_> = metadata
            .into_iter()
            .filter(|m| {
                let wanted = requested.contains(m.name.as_str());
                if !wanted {
                    debug!(scene = %m.name, "Ignoring catalog entry that was not requested");
                }
                wanted
            })
            .collect();

        // Existence check
        let found: HashSet<&str> = metadata.iter().map(|m| m.name.as_str()).collect();
        problems.extend(
            unique(well_formed.iter().map(String::as_str))
                .filter(|id| !found.contains(id))
                .map(|id| Problem {
                    kind: ProblemKind::NotFound,
                    scene: id.to_string(),
                }),
        );

        // Coverage check, independent of the existence outcome
        let mut checked = HashSet::new();
        for scene in &metadata {
            if !checked.insert(scene.name.as_str()) {
                continue;
            }
            let covered = self.coverage.covers(&scene.footprint);
            debug!(scene = %scene.name, covered, "Checked DEM coverage");
            if !covered {
                problems.push(Problem {
                    kind: ProblemKind::NoCoverage,
                    scene: scene.name.clone(),
                });
            }
        }

        match ValidationFailure::from_problems(problems) {
            None => {
                info!(scenes = scene_ids.len(), "Scene batch accepted");
                Ok(())
            }
            Some(failure) => {
                info!(
                    scenes = scene_ids.len(),
                    malformed = failure.scenes(ProblemKind::MalformedName).len(),
                    not_found = failure.scenes(ProblemKind::NotFound).len(),
                    no_coverage = failure.scenes(ProblemKind::NoCoverage).len(),
                    "Scene batch rejected"
                );
                Err(ValidateError::Rejected(failure))
            }
        }
    }

    /// Splits identifiers into those sent to the catalog and the distinct
    /// malformed ones.
    fn partition_names(&self, scene_ids: &[String]) -> (Vec<String>, Vec<String>) {
        let Some(pattern) = &self.name_pattern else {
            return (scene_ids.to_vec(), Vec::new());
        };

        let (well_formed, malformed): (Vec<&String>, Vec<&String>) =
            scene_ids.iter().partition(|id| pattern.matches(id));
        let malformed = unique(malformed.into_iter().map(String::as_str))
            .map(str::to_string)
            .collect();
        (well_formed.into_iter().cloned().collect(), malformed)
    }
}

/// Yields each item once, in order of first appearance.
fn unique<'a>(items: impl Iterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    let mut seen = HashSet::new();
    items.filter(move |item| seen.insert(*item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, SceneMetadata};
    use geo::{polygon, Polygon};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory catalog keyed by scene name.
    struct FakeCatalog {
        scenes: HashMap<String, Polygon<f64>>,
        failure: Option<CatalogError>,
        return_everything: bool,
        queries: AtomicUsize,
    }

    impl FakeCatalog {
        fn new(scenes: &[(&str, Polygon<f64>)]) -> Self {
            Self {
                scenes: scenes
                    .iter()
                    .map(|(name, footprint)| (name.to_string(), footprint.clone()))
                    .collect(),
                failure: None,
                return_everything: false,
                queries: AtomicUsize::new(0),
            }
        }

        /// Answers every query with all known scenes, requested or not.
        fn returning_everything(scenes: &[(&str, Polygon<f64>)]) -> Self {
            Self {
                return_everything: true,
                ..Self::new(scenes)
            }
        }

        fn failing(error: CatalogError) -> Self {
            Self {
                failure: Some(error),
                ..Self::new(&[])
            }
        }
    }

    impl SceneCatalog for FakeCatalog {
        async fn query(&self, scene_ids: &[String]) -> Result<Vec<SceneMetadata>, CatalogError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = &self.failure {
                return Err(error.clone());
            }
            if self.return_everything {
                return Ok(self
                    .scenes
                    .iter()
                    .map(|(name, footprint)| SceneMetadata {
                        name: name.clone(),
                        footprint: footprint.clone(),
                    })
                    .collect());
            }
            let mut names: Vec<&String> = scene_ids.iter().collect();
            names.sort();
            names.dedup();
            Ok(names
                .into_iter()
                .filter_map(|name| {
                    self.scenes.get(name).map(|footprint| SceneMetadata {
                        name: name.clone(),
                        footprint: footprint.clone(),
                    })
                })
                .collect())
        }
    }

    fn square(x0: f64, y0: f64, size: f64) -> Polygon<f64> {
        polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
        ]
    }

    /// Coverage over [0, 10] x [0, 10].
    fn coverage() -> Arc<CoverageMap> {
        Arc::new(CoverageMap::from_polygons(vec![square(0.0, 0.0, 10.0)]).unwrap())
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn engine(scenes: &[(&str, Polygon<f64>)]) -> ValidationEngine<FakeCatalog> {
        ValidationEngine::new(FakeCatalog::new(scenes), coverage())
    }

    fn rejected(result: Result<(), ValidateError>) -> ValidationFailure {
        match result {
            Err(ValidateError::Rejected(failure)) => failure,
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_all_found_and_covered_passes() {
        let engine = engine(&[("A", square(1.0, 1.0, 1.0)), ("B", square(5.0, 5.0, 2.0))]);
        assert!(engine.validate(&ids(&["A", "B"])).await.is_ok());
        assert_eq!(engine.catalog.queries.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_scenes_are_listed() {
        let engine = engine(&[("A", square(1.0, 1.0, 1.0))]);
        let failure = rejected(engine.validate(&ids(&["X", "A", "Y"])).await);

        assert_eq!(failure.scenes(ProblemKind::NotFound), vec!["X", "Y"]);
        assert!(!failure.has(ProblemKind::NoCoverage));
        assert_eq!(
            failure.to_string(),
            "Some requested scenes could not be found: X, Y"
        );
    }

    #[tokio::test]
    async fn test_missing_scenes_independent_of_input_order() {
        let engine = engine(&[("A", square(1.0, 1.0, 1.0))]);
        let forward = rejected(engine.validate(&ids(&["X", "A", "Y"])).await);
        let reverse = rejected(engine.validate(&ids(&["Y", "A", "X"])).await);

        let mut a = forward.scenes(ProblemKind::NotFound);
        let mut b = reverse.scenes(ProblemKind::NotFound);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_uncovered_scenes_are_listed() {
        let engine = engine(&[
            ("A", square(1.0, 1.0, 1.0)),
            ("FAR", square(50.0, 50.0, 1.0)),
        ]);
        let failure = rejected(engine.validate(&ids(&["A", "FAR"])).await);

        assert_eq!(failure.scenes(ProblemKind::NoCoverage), vec!["FAR"]);
        assert_eq!(
            failure.to_string(),
            "Some requested scenes do not have DEM coverage: FAR"
        );
    }

    #[tokio::test]
    async fn test_unrequested_entries_are_ignored() {
        let engine = ValidationEngine::new(
            FakeCatalog::returning_everything(&[
                ("A", square(1.0, 1.0, 1.0)),
                ("NOT_REQUESTED", square(50.0, 50.0, 1.0)),
            ]),
            coverage(),
        );
        assert!(engine.validate(&ids(&["A"])).await.is_ok());

        let failure = rejected(engine.validate(&ids(&["A", "B"])).await);
        assert_eq!(failure.problems().len(), 1);
        assert_eq!(failure.scenes(ProblemKind::NotFound), vec!["B"]);
    }

    #[tokio::test]
    async fn test_boundary_touch_is_covered() {
        let engine = engine(&[("EDGE", square(10.0, 10.0, 1.0))]);
        assert!(engine.validate(&ids(&["EDGE"])).await.is_ok());
    }

    #[tokio::test]
    async fn test_both_problem_classes_reported_together() {
        let engine = engine(&[("FAR", square(-20.0, -20.0, 1.0))]);
        let failure = rejected(engine.validate(&ids(&["MISSING", "FAR"])).await);

        assert_eq!(failure.scenes(ProblemKind::NotFound), vec!["MISSING"]);
        assert_eq!(failure.scenes(ProblemKind::NoCoverage), vec!["FAR"]);
        assert_eq!(
            failure.to_string(),
            "Some requested scenes could not be found: MISSING \
             Some requested scenes do not have DEM coverage: FAR"
        );
    }

    #[tokio::test]
    async fn test_duplicates_reported_once() {
        let engine = engine(&[("FAR", square(50.0, 50.0, 1.0))]);
        let failure = rejected(engine.validate(&ids(&["M", "FAR", "M", "FAR"])).await);

        assert_eq!(failure.scenes(ProblemKind::NotFound), vec!["M"]);
        assert_eq!(failure.scenes(ProblemKind::NoCoverage), vec!["FAR"]);
    }

    #[tokio::test]
    async fn test_duplicate_valid_scene_passes() {
        let engine = engine(&[("A", square(1.0, 1.0, 1.0))]);
        assert!(engine.validate(&ids(&["A", "A"])).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_batch_passes() {
        let engine = engine(&[]);
        assert!(engine.validate(&[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_catalog_failure_is_not_a_rejection() {
        let engine = ValidationEngine::new(
            FakeCatalog::failing(CatalogError::Unavailable("timeout".into())),
            coverage(),
        );
        let result = engine.validate(&ids(&["A"])).await;
        assert!(matches!(
            result,
            Err(ValidateError::Catalog(CatalogError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn test_malformed_names_skip_catalog() {
        let pattern = NamePattern::new("^S1[AB]_").unwrap();
        let engine = ValidationEngine::new(
            FakeCatalog::new(&[("S1A_OK", square(1.0, 1.0, 1.0))]),
            coverage(),
        )
        .with_name_pattern(pattern);

        let failure = rejected(engine.validate(&ids(&["foo", "S1A_OK", "bar", "foo"])).await);
        assert_eq!(failure.problems().len(), 2);
        assert_eq!(failure.scenes(ProblemKind::MalformedName), vec!["foo", "bar"]);
        assert!(!failure.has(ProblemKind::NotFound));
        assert_eq!(
            failure.to_string(),
            "Some requested scenes have malformed names: foo, bar"
        );
    }

    #[tokio::test]
    async fn test_concurrent_validations_are_independent() {
        let engine = engine(&[("A", square(1.0, 1.0, 1.0)), ("FAR", square(50.0, 50.0, 1.0))]);
        let good = ids(&["A"]);
        let bad = ids(&["FAR"]);

        let (first, second) = tokio::join!(engine.validate(&good), engine.validate(&bad));
        assert!(first.is_ok());
        assert_eq!(rejected(second).scenes(ProblemKind::NoCoverage), vec!["FAR"]);
    }
}
