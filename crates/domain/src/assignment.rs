//! Assignment: the loan of a device to an employee.
//!
//! An assignment is active while `released_at` is null. Nothing else tracks
//! the state.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::id::AssignmentId;
use crate::time::Timestamp;

/// A persisted assignment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub assignment_id: AssignmentId,
    pub user_id: Option<Field>,
    pub device_id: Option<Field>,
    pub assigned_at: Timestamp,
    pub released_at: Option<Field>,
    pub note: Option<Field>,
}

/// Body of an assignment creation. The store generates the id and the
/// service stamps `assigned_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAssignment {
    pub user_id: Option<Field>,
    pub device_id: Option<Field>,
    pub note: Option<Field>,
}

/// Body of an assignment update. Only these two columns are ever written;
/// absent keys clear the column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRelease {
    pub released_at: Option<Field>,
    pub note: Option<Field>,
}

/// An [`Assignment`] decorated with the employee and device names, as listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentListing {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub user_name: Option<Field>,
    pub device_name: Option<Field>,
}
