// Copyright 2025 Cowboy AI, LLC.

//! Error types for conformance checking

use thiserror::Error;

use crate::conformance::MissingOperation;

/// Errors that can surface from a structural conformance check
///
/// The check itself is a predicate and cannot fail; this error exists so
/// callers who treat non-conformance as fatal can propagate it with `?` via
/// [`crate::conformance::ConformanceReport::into_result`].
#[derive(Debug, Clone, Error)]
pub enum ConformanceError {
    /// Candidate lacks one or more required operations
    #[error("candidate is missing {} required operation(s): {}", .missing.len(), list(.missing))]
    NonConforming {
        /// Every required operation the candidate does not expose
        missing: Vec<MissingOperation>,
    },
}

fn list(missing: &[MissingOperation]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance::Operation;

    #[test]
    fn error_lists_every_missing_operation() {
        let err = ConformanceError::NonConforming {
            missing: vec![
                MissingOperation {
                    capability: "HubbleParameter",
                    operation: Operation::method("h"),
                },
                MissingOperation {
                    capability: "BaryonComponent",
                    operation: Operation::property("omega_b0"),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "candidate is missing 2 required operation(s): \
             HubbleParameter::h/1, BaryonComponent::omega_b0/0"
        );
    }
}
