//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CoolingError`] via `From`. Collaborator transport failures travel
//! unchanged inside [`CoolingError::Storage`].

/// Base error for every cooling-plant operation.
#[derive(Debug, thiserror::Error)]
pub enum CoolingError {
    /// No configuration exists for a zone number the caller expected.
    #[error("failed to load zone {zone_no}")]
    ZoneLoadFailure { zone_no: u32 },

    /// A zone record was found but its type code is not 1, 2 or 3.
    #[error("unknown zone type: {code}")]
    UnknownZoneType { code: i32 },

    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The underlying data source failed (connectivity, malformed rows, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The expected zone count must be a positive integer.
    #[error("expected zone count must be positive, got {0}")]
    InvalidZoneCount(u32),

    /// A container already holds its maximum number of children.
    #[error("{container} {side} is full (max {max})")]
    CapacityExceeded {
        container: &'static str,
        side: &'static str,
        max: usize,
    },

    /// A vertical position code other than `+10` / `-10`.
    #[error("invalid vertical position code: {0}")]
    InvalidPosition(i32),

    /// A device type code other than `1`, `2` or `3`.
    #[error("invalid device type code: {0}")]
    InvalidDeviceType(i32),

    /// A plant layout with overlapping, empty or out-of-range bank ranges.
    #[error("invalid plant layout: {0}")]
    InvalidLayout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_zone_number_in_load_failure_message() {
        let err = CoolingError::ZoneLoadFailure { zone_no: 1 };
        assert_eq!(err.to_string(), "failed to load zone 1");
    }

    #[test]
    fn should_name_code_in_unknown_zone_type_message() {
        let err = CoolingError::UnknownZoneType { code: 99 };
        assert_eq!(err.to_string(), "unknown zone type: 99");
    }

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: CoolingError = ValidationError::InvalidZoneCount(0).into();
        assert!(matches!(
            err,
            CoolingError::Validation(ValidationError::InvalidZoneCount(0))
        ));
    }

    #[test]
    fn should_describe_capacity_exceeded() {
        let err = ValidationError::CapacityExceeded {
            container: "intensive bank",
            side: "top devices",
            max: 4,
        };
        assert_eq!(err.to_string(), "intensive bank top devices is full (max 4)");
    }
}
