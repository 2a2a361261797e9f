//! DTOs shared by the report pipeline, its template and the JSON API.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::customer::Customer;
use crate::domain::order::Order;
use crate::domain::report::{Report, ReportStatus};

/// One order as printed in a report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub uid: i32,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub customer: Option<String>,
    pub initialized: i64,
    pub amount: Option<String>,
    pub currency: &'static str,
    pub finalized: Option<i64>,
}

impl From<&(Order, Option<Customer>)> for ReportRow {
    fn from((order, customer): &(Order, Option<Customer>)) -> Self {
        Self {
            uid: order.id.get(),
            name: customer.as_ref().map(|c| c.name.to_string()),
            surname: customer.as_ref().map(|c| c.surname.to_string()),
            customer: customer.as_ref().map(Customer::full_name),
            initialized: order.initialized,
            amount: order.amount.map(|a| a.to_string()),
            currency: order.currency.code(),
            finalized: order.finalized,
        }
    }
}

/// Sum of order amounts in one currency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrencyTotal {
    pub currency: &'static str,
    pub amount: String,
    pub orders: usize,
}

/// Context handed to the report template.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    /// Generation time in the report offset.
    pub when: NaiveDateTime,
    pub data: Vec<ReportRow>,
    pub totals: Vec<CurrencyTotal>,
}

impl ReportContext {
    pub fn new(when: NaiveDateTime, orders: &[(Order, Option<Customer>)]) -> Self {
        let mut sums: BTreeMap<&'static str, (Decimal, usize)> = BTreeMap::new();
        for (order, _) in orders {
            if let Some(amount) = order.amount {
                let entry = sums
                    .entry(order.currency.code())
                    .or_insert((Decimal::ZERO, 0));
                entry.0 += amount.get();
                entry.1 += 1;
            }
        }

        Self {
            when,
            data: orders.iter().map(ReportRow::from).collect(),
            totals: sums
                .into_iter()
                .map(|(currency, (amount, orders))| CurrencyTotal {
                    currency,
                    amount: amount.round_dp(2).to_string(),
                    orders,
                })
                .collect(),
        }
    }
}

/// Query parameters accepted by `POST /queue-report/`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QueueReportQuery {
    /// Restrict the report to this customer's orders.
    pub customer_id: Option<i32>,
}

/// JSON representation of a report record.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct ReportResponse {
    #[schema(example = "0b7a3c2e-0d7c-4f61-9a0e-3b0d4f6b2c11")]
    pub uid: String,
    pub customer_id: Option<i32>,
    #[schema(value_type = String, example = "pending")]
    pub status: ReportStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            uid: report.uid.to_string(),
            customer_id: report.customer_id.map(|id| id.get()),
            status: report.status,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn order(id: i32, cents: Option<i64>, currency: &str, customer: Option<i32>) -> Order {
        Order::try_new(id, 1_700_000_000, cents, currency, None, customer).unwrap()
    }

    fn customer(id: i32) -> Customer {
        Customer::try_new(id, "Makis".into(), "Zita".into(), None, None).unwrap()
    }

    #[test]
    fn row_includes_customer_details() {
        let row = ReportRow::from(&(order(1, Some(1999), "USD", Some(3)), Some(customer(3))));
        assert_eq!(row.customer.as_deref(), Some("Makis Zita"));
        assert_eq!(row.name.as_deref(), Some("Makis"));
        assert_eq!(row.amount.as_deref(), Some("19.99"));
        assert_eq!(row.currency, "USD");
    }

    #[test]
    fn row_without_customer_has_no_names() {
        let row = ReportRow::from(&(order(2, None, "EUR", None), None));
        assert!(row.customer.is_none());
        assert!(row.amount.is_none());
    }

    #[test]
    fn totals_are_grouped_by_currency() {
        let when = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        let orders = vec![
            (order(1, Some(1000), "EUR", None), None),
            (order(2, Some(250), "EUR", None), None),
            (order(3, Some(-100), "TRY", None), None),
            (order(4, None, "USD", None), None),
        ];

        let context = ReportContext::new(when, &orders);

        assert_eq!(context.data.len(), 4);
        assert_eq!(
            context.totals,
            vec![
                CurrencyTotal {
                    currency: "EUR",
                    amount: "12.50".to_string(),
                    orders: 2,
                },
                CurrencyTotal {
                    currency: "TRY",
                    amount: "-1.00".to_string(),
                    orders: 1,
                },
            ]
        );
    }
}
