use chrono::Utc;
use diesel::prelude::*;

use crate::domain::report::{NewReport, Report, ReportStatus};
use crate::domain::types::ReportId;
use crate::models::report::{NewReport as DbNewReport, Report as DbReport};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ReportReader, ReportWriter};

impl ReportReader for DieselRepository {
    fn get_report(&self, uid: ReportId) -> RepositoryResult<Option<Report>> {
        use crate::schema::reports;

        let mut conn = self.conn()?;
        let report = reports::table
            .find(uid.to_string())
            .first::<DbReport>(&mut conn)
            .optional()?;

        report
            .map(Report::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl ReportWriter for DieselRepository {
    fn create_report(&self, new_report: &NewReport) -> RepositoryResult<Report> {
        use crate::schema::reports;

        let mut conn = self.conn()?;
        let insertable: DbNewReport = new_report.into();

        let report = diesel::insert_into(reports::table)
            .values(&insertable)
            .get_result::<DbReport>(&mut conn)?;

        Report::try_from(report).map_err(RepositoryError::from)
    }

    fn update_report_status(
        &self,
        uid: ReportId,
        status: ReportStatus,
    ) -> RepositoryResult<Report> {
        use crate::schema::reports;

        let mut conn = self.conn()?;
        let report = diesel::update(reports::table.find(uid.to_string()))
            .set((
                reports::status.eq(status.as_str()),
                reports::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbReport>(&mut conn)?;

        Report::try_from(report).map_err(RepositoryError::from)
    }
}
