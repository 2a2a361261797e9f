use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::report::{NewReport as DomainNewReport, Report as DomainReport};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reports)]
#[diesel(primary_key(uid))]
/// Diesel model for [`crate::domain::report::Report`].
pub struct Report {
    pub uid: String,
    pub customer_id: Option<i32>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reports)]
pub struct NewReport {
    pub uid: String,
    pub customer_id: Option<i32>,
}

impl TryFrom<Report> for DomainReport {
    type Error = TypeConstraintError;

    fn try_from(report: Report) -> Result<Self, Self::Error> {
        DomainReport::try_new(
            &report.uid,
            report.customer_id,
            &report.status,
            report.created_at,
            report.updated_at,
        )
    }
}

impl From<&DomainNewReport> for NewReport {
    fn from(report: &DomainNewReport) -> Self {
        Self {
            uid: report.uid.to_string(),
            customer_id: report.customer_id.map(|id| id.get()),
        }
    }
}
