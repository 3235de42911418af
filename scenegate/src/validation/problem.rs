//! Validation outcome types.

use std::fmt;

use thiserror::Error;

use crate::catalog::CatalogError;

/// Why a scene was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProblemKind {
    /// Identifier failed the configured name pattern
    MalformedName,
    /// Catalog has no entry for the identifier
    NotFound,
    /// Footprint does not intersect the DEM coverage map
    NoCoverage,
}

impl ProblemKind {
    /// All kinds in reporting order.
    pub const ALL: [ProblemKind; 3] = [Self::MalformedName, Self::NotFound, Self::NoCoverage];

    /// Message prefix used when reporting this kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MalformedName => "Some requested scenes have malformed names",
            Self::NotFound => "Some requested scenes could not be found",
            Self::NoCoverage => "Some requested scenes do not have DEM coverage",
        }
    }
}

/// One rejected scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub kind: ProblemKind,
    pub scene: String,
}

/// A rejected batch.
///
/// Holds every problem found, grouped by kind in [`ProblemKind::ALL`]
/// order. Each scene appears at most once per kind. The `Display` form is
/// the user-facing message, e.g.
/// `Some requested scenes could not be found: A, B Some requested scenes do not have DEM coverage: C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    problems: Vec<Problem>,
}

impl ValidationFailure {
    /// Builds a failure, or `None` if there are no problems.
    pub(super) fn from_problems(mut problems: Vec<Problem>) -> Option<Self> {
        if problems.is_empty() {
            return None;
        }
        // Stable sort keeps per-kind scene order
        problems.sort_by_key(|p| p.kind);
        Some(Self { problems })
    }

    /// All problems, grouped by kind.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Scenes rejected for `kind`, in reporting order.
    pub fn scenes(&self, kind: ProblemKind) -> Vec<&str> {
        self.problems
            .iter()
            .filter(|p| p.kind == kind)
            .map(|p| p.scene.as_str())
            .collect()
    }

    /// True if any scene was rejected for `kind`.
    pub fn has(&self, kind: ProblemKind) -> bool {
        self.problems.iter().any(|p| p.kind == kind)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = ProblemKind::ALL
            .iter()
            .filter_map(|kind| {
                let scenes = self.scenes(*kind);
                (!scenes.is_empty())
                    .then(|| format!("{}: {}", kind.description(), scenes.join(", ")))
            })
            .collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Errors returned by [`super::ValidationEngine::validate`].
///
/// `Rejected` is user-correctable and maps to a rejected request;
/// `Catalog` is an infrastructure or catalog-data failure.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Catalog lookup failed; no decision was made
    #[error("scene catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    /// The batch was checked and rejected
    #[error(transparent)]
    Rejected(ValidationFailure),
}

impl ValidateError {
    /// The rejection details, if the batch was rejected.
    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Rejected(failure) => Some(failure),
            Self::Catalog(_) => None,
        }
    }
}
