//! Employee: a person who can hold devices and accounts.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::id::EmployeeId;

/// An employee row.
///
/// `user_id` is the table's integer key; every other column holds whatever
/// was last written to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub user_id: EmployeeId,
    #[serde(flatten)]
    pub details: EmployeeDetails,
}

/// Body of an employee creation.
///
/// Without a `user_id` the store picks the next free key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub user_id: Option<Field>,
    #[serde(flatten)]
    pub details: EmployeeDetails,
}

/// The mutable columns of an [`Employee`].
///
/// This is also the body of a full-overwrite update: every column is written,
/// missing ones as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    pub user_name: Option<Field>,
    pub gender: Option<Field>,
    pub department_id: Option<Field>,
    pub join_date: Option<Field>,
    pub leave_date: Option<Field>,
    pub remark: Option<Field>,
}

/// An [`Employee`] decorated with the name of its department, as listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeListing {
    #[serde(flatten)]
    pub employee: Employee,
    pub department_name: Option<Field>,
}
