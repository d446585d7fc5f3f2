use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::registration::{Gender, Location, PaymentStatus, TrainingType};

/// One child of a [`GroupRecord`](crate::registration::GroupRecord), built by
/// flattening. Carries the group level attributes it was registered with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Individual {
    /// `{group id}-{position}`
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub training_type: Option<TrainingType>,
    pub location: Option<Location>,
    pub ages: String,
    pub gender: Option<Gender>,
    pub payment_status: PaymentStatus,
    pub created_at: Option<DateTime<Utc>>,
}
