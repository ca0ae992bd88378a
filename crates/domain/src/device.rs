//! Device: a piece of hardware that can be lent to an employee.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::id::DeviceId;

/// A device row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: DeviceId,
    #[serde(flatten)]
    pub details: DeviceDetails,
}

/// Body of a device creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDevice {
    pub device_id: Option<Field>,
    #[serde(flatten)]
    pub details: DeviceDetails,
}

/// The mutable columns of a [`Device`], written in full on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceDetails {
    pub device_name: Option<Field>,
    pub description: Option<Field>,
}
