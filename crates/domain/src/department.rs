//! Department: an organisational unit employees belong to.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::id::DepartmentId;

/// A department row. Departments can be created and read, never changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: DepartmentId,
    pub department_name: Option<Field>,
}

/// Body of a department creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDepartment {
    pub department_id: Option<Field>,
    pub department_name: Option<Field>,
}
