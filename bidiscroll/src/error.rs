use thiserror::Error;

/// Why a host surface could not hand out its deceleration animation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CapabilityError {
    /// The surface has no inspectable deceleration animation.
    #[error("deceleration animation is not exposed by this surface")]
    Unavailable,
    /// The surface exposes something, but not an animation this crate understands.
    #[error("deceleration animation has an unexpected shape: {found}")]
    UnexpectedShape { found: &'static str },
    /// The animation exists but access to it is refused.
    #[error("access to the deceleration animation was denied: {reason}")]
    AccessDenied { reason: &'static str },
}

impl CapabilityError {
    /// Absent data is recoverable; refused access is not.
    pub fn is_degradable(&self) -> bool {
        !matches!(self, Self::AccessDenied { .. })
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    #[error("cannot re-drive deceleration: {0}")]
    AccessDenied(#[source] CapabilityError),
}

pub type Result<T, E = AnchorError> = core::result::Result<T, E>;
