use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DefaultOnNull};
use strum::{AsRefStr, Display};

use crate::decimal::Decimal;

/// One submitted registration. A single record may cover several
/// co-registered children who share the training, the location and the
/// payment. `first_names` and `last_names` are parallel by position but are
/// allowed to differ in length.
#[serde_as]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub training_type: Option<TrainingType>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub ages: String,
    /// Anything other than a known gender reads as unspecified.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub payment_amount: Decimal,
    #[serde_as(as = "DefaultOnNull<Vec<DefaultOnNull>>")]
    #[serde(default)]
    pub first_names: Vec<String>,
    #[serde_as(as = "DefaultOnNull<Vec<DefaultOnNull>>")]
    #[serde(default)]
    pub last_names: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub contact_phone: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub school_name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub teacher_name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub invoice_id: Option<String>,
}

impl GroupRecord {
    /// Number of individuals this record stands for.
    pub fn individual_count(&self) -> usize {
        self.first_names.len().max(self.last_names.len())
    }

    pub fn first_name(&self, index: usize) -> &str {
        self.first_names.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn last_name(&self, index: usize) -> &str {
        self.last_names.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location
            .as_ref()
            .map(|location| location.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn training_type_name(&self) -> Option<&str> {
        self.training_type
            .as_ref()
            .map(|training| training.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Amount attributed to the individual at `index`. Only paid records
    /// carry money; the first individual also takes the cents left over by
    /// the split so the shares add up to the record amount.
    pub fn payment_share(&self, index: usize) -> Decimal {
        if !self.is_paid() {
            return Decimal::zero();
        }
        self.payment_amount.share(self.individual_count(), index)
    }
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrainingType {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    /// Number of participants the training admits per registration.
    #[serde(default)]
    pub student_number: Option<u32>,
    /// Price of the training.
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub age_limit_min: Option<u32>,
    #[serde(default)]
    pub age_limit_max: Option<u32>,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Location {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
}

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
    Pending,
}

impl PaymentStatus {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Төлсөн",
            PaymentStatus::Unpaid => "Төлөөгүй",
            PaymentStatus::Pending => "Хүлээгдэж буй",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}
