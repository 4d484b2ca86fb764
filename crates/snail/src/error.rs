use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input data: {message}")]
    InputFormat { message: String },

    #[error("item {index}: missing or non-numeric `{field}`")]
    MissingValue { index: usize, field: String },

    #[error("item {index}: value must be a non-negative finite number, got {value}")]
    InvalidValue { index: usize, value: f64 },

    #[error("item {index}: cannot place circle ({reason})")]
    GeometryContract { index: usize, reason: GeometryFailure },

    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn input_format(message: impl Into<String>) -> Self {
        Self::InputFormat {
            message: message.into(),
        }
    }

    /// Item index the error refers to, when there is one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::MissingValue { index, .. }
            | Self::InvalidValue { index, .. }
            | Self::GeometryContract { index, .. } => Some(*index),
            Self::InputFormat { .. } | Self::Json(_) => None,
        }
    }
}

/// Why the packer could not pick a single position for a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFailure {
    /// Every intersection point was rejected by the collision or adjacency filters.
    NoCandidate,
    /// The initial direction rule matched more than one point.
    AmbiguousCandidates { count: usize },
    /// Two enlarged adjacency circles share a center and radius.
    CoincidentCenters,
    /// The adjacency set collapsed to a single circle.
    TooFewAdjacentCircles,
}

impl fmt::Display for GeometryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidate => write!(f, "no tangent position survives the filters"),
            Self::AmbiguousCandidates { count } => {
                write!(f, "{count} positions match the start direction, expected exactly one")
            }
            Self::CoincidentCenters => write!(f, "adjacent circles are coincident"),
            Self::TooFewAdjacentCircles => write!(f, "fewer than two distinct adjacent circles"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
