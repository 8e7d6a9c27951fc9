//! Crate-level error types.

use std::fmt;

use glam::DVec3;

/// Errors produced by the orbitcam crate.
#[derive(Debug)]
pub enum OrbitError {
    /// A scene was built without an input processor to drive its camera.
    InputNotWired,
    /// Configuration values failed validation.
    InvalidConfig(String),
    /// The view direction is parallel to the up vector, so no basis can be
    /// built for the view matrix.
    DegenerateView {
        /// Eye position that produced the degenerate view.
        eye: DVec3,
        /// Look-at target at the time of the failure.
        target: DVec3,
    },
    /// Eye and target coincide (zero-length view vector).
    ZeroLengthView {
        /// Eye position, equal to the target.
        eye: DVec3,
    },
    /// Eye or target has a NaN or infinite component.
    NonFiniteView {
        /// Eye position derived from the rejected pose.
        eye: DVec3,
        /// Look-at target of the rejected pose.
        target: DVec3,
    },
    /// The upper 3×3 of the model-view matrix has no inverse.
    SingularModelView,
    /// A composed matrix contains NaN or infinite entries.
    NonFiniteTransform,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotWired => {
                write!(f, "camera has no input processor wired to it")
            }
            Self::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            Self::DegenerateView { eye, target } => write!(
                f,
                "degenerate view: direction from {eye} to {target} is \
                 parallel to up"
            ),
            Self::ZeroLengthView { eye } => {
                write!(f, "degenerate view: eye {eye} coincides with target")
            }
            Self::NonFiniteView { eye, target } => {
                write!(f, "non-finite view: eye {eye}, target {target}")
            }
            Self::SingularModelView => {
                write!(f, "model-view matrix is singular, no normal matrix")
            }
            Self::NonFiniteTransform => {
                write!(f, "composed transform has non-finite entries")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl OrbitError {
    /// Whether this error reports a camera pose that cannot be viewed (as
    /// opposed to a setup or I/O failure).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::DegenerateView { .. } | Self::ZeroLengthView { .. } | Self::NonFiniteView { .. }
        )
    }
}
