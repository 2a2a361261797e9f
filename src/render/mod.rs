//! Turning order data into report documents.
//!
//! A Tera text template lays the report out, the [`pdf`] module typesets the
//! resulting text onto A4 pages.

use chrono::{DateTime, FixedOffset, Utc};
use tera::{Context, Tera};
use thiserror::Error;

use crate::dto::reports::ReportContext;

pub mod filters;
pub mod pdf;

/// Template rendered for every report.
pub const REPORT_TEMPLATE: &str = "report/base.txt";
pub const REPORT_TITLE: &str = "Orders report";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("pdf error: {0}")]
    Pdf(String),

    #[error("invalid utc offset: {0} hours")]
    InvalidOffset(i32),
}

/// Converts an hour offset from configuration into a [`FixedOffset`].
pub fn offset_from_hours(hours: i32) -> Result<FixedOffset, RenderError> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or(RenderError::InvalidOffset(hours))
}

/// Registers the report filters on a Tera instance.
fn register_filters(tera: &mut Tera, offset: FixedOffset) {
    tera.register_filter("dt_format", filters::dt_format);
    tera.register_filter("ts_format", filters::ts_format(offset));
    tera.register_filter("handle_none", filters::handle_none);
    tera.register_filter("ljust", filters::ljust);
}

/// Renders report contexts to text and PDF.
#[derive(Clone)]
pub struct ReportRenderer {
    tera: Tera,
    offset: FixedOffset,
}

impl ReportRenderer {
    /// Wraps a Tera instance, registering the report filters on it.
    pub fn new(mut tera: Tera, offset: FixedOffset) -> Self {
        register_filters(&mut tera, offset);
        Self { tera, offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local report time for the configured offset.
    pub fn report_time(&self, now: DateTime<Utc>) -> chrono::NaiveDateTime {
        now.with_timezone(&self.offset).naive_local()
    }

    pub fn render_text(&self, context: &ReportContext) -> Result<String, RenderError> {
        let context = Context::from_serialize(context)?;
        Ok(self.tera.render(REPORT_TEMPLATE, &context)?)
    }

    pub fn render_pdf(&self, context: &ReportContext) -> Result<Vec<u8>, RenderError> {
        let text = self.render_text(context)?;
        pdf::text_to_pdf(REPORT_TITLE, &text).map_err(|e| RenderError::Pdf(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use crate::domain::order::Order;

    fn shipped_renderer() -> ReportRenderer {
        let tera = Tera::new("templates/**/*").unwrap();
        ReportRenderer::new(tera, offset_from_hours(3).unwrap())
    }

    fn epoch() -> chrono::NaiveDateTime {
        DateTime::from_timestamp(0, 0).unwrap().naive_utc()
    }

    #[test]
    fn report_template_prints_rows_and_totals() {
        let customer = Customer::try_new(1, "Makis".into(), "Zita".into(), None, None).unwrap();
        let orders = vec![
            (
                Order::try_new(1, 1_700_000_000, Some(1000), "EUR", None, Some(1)).unwrap(),
                Some(customer),
            ),
            (
                Order::try_new(2, 1_700_000_000, Some(250), "EUR", None, None).unwrap(),
                None,
            ),
            (
                Order::try_new(3, 1_700_000_000, None, "USD", None, None).unwrap(),
                None,
            ),
        ];

        let text = shipped_renderer()
            .render_text(&ReportContext::new(epoch(), &orders))
            .unwrap();

        assert!(text.contains("Generated: 01/01/1970 @ 00:00:00"));
        let first = text.lines().find(|l| l.starts_with("1 ")).unwrap();
        assert!(first.contains("Makis Zita"));
        // 2023-11-14 22:13:20 UTC shifted by three hours.
        assert!(first.contains("15/11/2023 @ 01:13:20"));
        assert!(first.ends_with("10.00 EUR"));

        let anonymous = text.lines().find(|l| l.starts_with("2 ")).unwrap();
        assert!(anonymous.starts_with(&format!("{:<6} {:<24}", "2", "-")));

        let unpriced = text.lines().find(|l| l.starts_with("3 ")).unwrap();
        assert!(unpriced.ends_with(" -"));

        assert!(text.contains("Totals"));
        assert!(text.contains("12.50 (2 orders)"));
        assert!(!text.contains("USD    "));
        assert!(!text.contains("No orders."));
    }

    #[test]
    fn report_template_handles_no_orders() {
        let text = shipped_renderer()
            .render_text(&ReportContext::new(epoch(), &[]))
            .unwrap();

        assert!(text.contains("No orders."));
        assert!(!text.contains("Totals"));
    }

    #[test]
    fn offset_from_hours_accepts_valid_range() {
        assert_eq!(offset_from_hours(3).unwrap().local_minus_utc(), 3 * 3600);
        assert_eq!(offset_from_hours(-5).unwrap().local_minus_utc(), -5 * 3600);
        assert!(matches!(
            offset_from_hours(30),
            Err(RenderError::InvalidOffset(30))
        ));
    }
}
