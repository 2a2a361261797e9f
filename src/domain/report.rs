use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, ReportId, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub uid: ReportId,
    /// When set, the report only covers this customer's orders.
    pub customer_id: Option<CustomerId>,
    pub status: ReportStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Report {
    /// Validates raw values loaded from storage.
    pub fn try_new(
        uid: &str,
        customer_id: Option<i32>,
        status: &str,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            uid: uid.parse()?,
            customer_id: customer_id.map(CustomerId::new).transpose()?,
            status: status.parse()?,
            created_at,
            updated_at,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Ready,
    Failed,
}

impl ReportStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Ready => "ready",
            ReportStatus::Failed => "failed",
        }
    }
}

impl Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReportStatus::Pending),
            "ready" => Ok(ReportStatus::Ready),
            "failed" => Ok(ReportStatus::Failed),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown report status {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewReport {
    pub uid: ReportId,
    pub customer_id: Option<CustomerId>,
}

impl NewReport {
    /// Allocates a fresh report identifier.
    pub fn new(customer_id: Option<CustomerId>) -> Self {
        Self {
            uid: ReportId::new(),
            customer_id,
        }
    }
}
