//! Project pipeline stages and board navigation.
//!
//! The delivery pipeline is a fixed ordered walk from `Inquiry` to
//! `Closed`. Board navigation only ever moves a project to the immediate
//! neighbour of its current stage; stepping past either end of the
//! sequence is a clamp, not an error. `OnHold` and `Cancelled` sit
//! outside the ordered sequence and never move.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a project.
///
/// Wire strings match the persisted snapshot format, including the two
/// long-form delivery labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Inquiry,
    Quoted,
    Confirmed,
    Scheduled,
    Shot,
    #[serde(rename = "Post-Production")]
    PostProduction,
    #[serde(rename = "Delivery 1: Raw files")]
    RawDelivery,
    #[serde(rename = "Delivery 2: Edited Output")]
    FinalDelivery,
    Delivered,
    Closed,
    #[serde(rename = "On Hold")]
    OnHold,
    Cancelled,
}

/// The ordered delivery pipeline. `OnHold` and `Cancelled` are
/// deliberately absent; they are parked states, not stages.
pub const PIPELINE_STAGES: [ProjectStatus; 10] = [
    ProjectStatus::Inquiry,
    ProjectStatus::Quoted,
    ProjectStatus::Confirmed,
    ProjectStatus::Scheduled,
    ProjectStatus::Shot,
    ProjectStatus::PostProduction,
    ProjectStatus::RawDelivery,
    ProjectStatus::FinalDelivery,
    ProjectStatus::Delivered,
    ProjectStatus::Closed,
];

impl ProjectStatus {
    /// Return the wire-format string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inquiry => "Inquiry",
            Self::Quoted => "Quoted",
            Self::Confirmed => "Confirmed",
            Self::Scheduled => "Scheduled",
            Self::Shot => "Shot",
            Self::PostProduction => "Post-Production",
            Self::RawDelivery => "Delivery 1: Raw files",
            Self::FinalDelivery => "Delivery 2: Edited Output",
            Self::Delivered => "Delivered",
            Self::Closed => "Closed",
            Self::OnHold => "On Hold",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parse from a wire-format string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        PIPELINE_STAGES
            .iter()
            .chain([ProjectStatus::OnHold, ProjectStatus::Cancelled].iter())
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid project status: '{s}'")))
    }

    /// Position of this status within [`PIPELINE_STAGES`], or `None` for
    /// the parked states.
    pub fn stage_index(&self) -> Option<usize> {
        PIPELINE_STAGES.iter().position(|stage| stage == self)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Board navigation
// ---------------------------------------------------------------------------

/// Direction of a single board move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageDirection {
    Forward,
    Backward,
}

/// Stages rendered as board columns. `Closed` is reachable by stepping
/// forward out of `Delivered` but is not shown as a column.
pub fn board_columns() -> &'static [ProjectStatus] {
    &PIPELINE_STAGES[..PIPELINE_STAGES.len() - 1]
}

/// Compute the status one step away from `status` in the given direction.
///
/// Returns `status` unchanged when the move would leave the sequence
/// (boundary clamp) or when `status` is a parked state with no index.
pub fn step(status: ProjectStatus, direction: StageDirection) -> ProjectStatus {
    let Some(index) = status.stage_index() else {
        return status;
    };
    let target = match direction {
        StageDirection::Forward => index as isize + 1,
        StageDirection::Backward => index as isize - 1,
    };
    if target < 0 || target >= PIPELINE_STAGES.len() as isize {
        status
    } else {
        PIPELINE_STAGES[target as usize]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn forward_moves_one_stage() {
        assert_eq!(
            step(ProjectStatus::Shot, StageDirection::Forward),
            ProjectStatus::PostProduction
        );
    }

    #[test]
    fn backward_moves_one_stage() {
        assert_eq!(
            step(ProjectStatus::Quoted, StageDirection::Backward),
            ProjectStatus::Inquiry
        );
    }

    #[test]
    fn backward_clamps_at_inquiry() {
        assert_eq!(
            step(ProjectStatus::Inquiry, StageDirection::Backward),
            ProjectStatus::Inquiry
        );
    }

    #[test]
    fn forward_clamps_at_closed() {
        assert_eq!(
            step(ProjectStatus::Closed, StageDirection::Forward),
            ProjectStatus::Closed
        );
    }

    #[test]
    fn parked_states_never_move() {
        for direction in [StageDirection::Forward, StageDirection::Backward] {
            assert_eq!(step(ProjectStatus::OnHold, direction), ProjectStatus::OnHold);
            assert_eq!(
                step(ProjectStatus::Cancelled, direction),
                ProjectStatus::Cancelled
            );
        }
    }

    #[test]
    fn every_step_stays_within_enumeration() {
        for stage in PIPELINE_STAGES {
            for direction in [StageDirection::Forward, StageDirection::Backward] {
                let next = step(stage, direction);
                assert!(next.stage_index().is_some());
                let delta = next.stage_index().unwrap() as isize
                    - stage.stage_index().unwrap() as isize;
                assert!(delta.abs() <= 1, "moved more than one step from {stage}");
            }
        }
    }

    #[test]
    fn shot_walks_forward_to_closed_and_clamps() {
        let mut status = ProjectStatus::Shot;
        status = step(status, StageDirection::Forward);
        assert_eq!(status, ProjectStatus::PostProduction);
        for _ in 0..6 {
            status = step(status, StageDirection::Forward);
        }
        assert_eq!(status, ProjectStatus::Closed);
        status = step(status, StageDirection::Forward);
        assert_eq!(status, ProjectStatus::Closed);
    }

    #[test]
    fn board_columns_exclude_closed() {
        let columns = board_columns();
        assert_eq!(columns.len(), 9);
        assert!(!columns.contains(&ProjectStatus::Closed));
        assert_eq!(columns[0], ProjectStatus::Inquiry);
        assert_eq!(columns[8], ProjectStatus::Delivered);
    }

    #[test]
    fn wire_strings_round_trip() {
        for status in PIPELINE_STAGES
            .iter()
            .chain([ProjectStatus::OnHold, ProjectStatus::Cancelled].iter())
        {
            assert_eq!(ProjectStatus::from_str(status.as_str()).unwrap(), *status);
        }
    }

    #[test]
    fn delivery_stages_use_long_form_labels() {
        assert_eq!(ProjectStatus::RawDelivery.as_str(), "Delivery 1: Raw files");
        assert_eq!(
            ProjectStatus::FinalDelivery.as_str(),
            "Delivery 2: Edited Output"
        );
    }

    #[test]
    fn unknown_status_string_rejected() {
        assert_matches!(
            ProjectStatus::from_str("Archived"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&ProjectStatus::RawDelivery).unwrap();
        assert_eq!(json, "\"Delivery 1: Raw files\"");
        let back: ProjectStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectStatus::RawDelivery);
    }
}
