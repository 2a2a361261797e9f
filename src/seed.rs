//! Demo data written to an empty database.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use crate::domain::customer::NewCustomer;
use crate::domain::order::NewOrder;
use crate::domain::types::{Amount, Currency};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerOrder, CustomerReader, OrderReader, SampleDataWriter};

pub const SAMPLE_ORDER_COUNT: usize = 20;
const MAX_ORDER_AGE_DAYS: i64 = 50;

const SAMPLE_CUSTOMERS: [(&str, &str, &str); 4] = [
    ("Giorikas", "Alpha", "giorikas@alpha.com"),
    ("Kostikas", "Giota", "kostikas@giota.com"),
    ("Makis", "Zita", "makis@zita.com"),
    ("Fotis", "ParaPente", "fotis@parapente.com"),
];

/// Summary of what [`append_sample_data`] wrote.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub customers: usize,
    pub orders: usize,
}

/// Writes sample customers and orders when no customers exist yet.
///
/// Customers and orders are written in one transaction, so a failed run
/// leaves the database empty and the next run seeds again. Returns an empty
/// outcome on a database that already holds customers.
pub fn append_sample_data<R, G>(repo: &R, rng: &mut G) -> RepositoryResult<SeedOutcome>
where
    R: CustomerReader + OrderReader + SampleDataWriter + ?Sized,
    G: Rng + ?Sized,
{
    if repo.count_customers()? > 0 {
        log::info!("Database already holds customers, skipping sample data");
        return Ok(SeedOutcome::default());
    }

    let customers = sample_customers()?;
    let orders = sample_orders(customers.len(), rng)?;
    let (created, inserted) = repo.create_customers_with_orders(&customers, &orders)?;

    if repo.count_customers()? == 0 || repo.count_orders()? == 0 {
        return Err(RepositoryError::Unexpected(
            "sample data was not persisted".to_string(),
        ));
    }

    log::info!("Seeded {} customers and {inserted} orders", created.len());
    Ok(SeedOutcome {
        customers: created.len(),
        orders: inserted,
    })
}

fn sample_customers() -> RepositoryResult<Vec<NewCustomer>> {
    let customers = SAMPLE_CUSTOMERS
        .iter()
        .map(|(name, surname, email)| {
            NewCustomer::try_new(*name, *surname, Some(email.to_string()), None)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(customers)
}

/// Random orders, each assigned to one of `customer_count` new customers.
fn sample_orders<G>(customer_count: usize, rng: &mut G) -> RepositoryResult<Vec<CustomerOrder>>
where
    G: Rng + ?Sized,
{
    let now = Utc::now();

    let orders = (0..SAMPLE_ORDER_COUNT)
        .map(|_| -> RepositoryResult<CustomerOrder> {
            let age = Duration::days(rng.random_range(0..=MAX_ORDER_AGE_DAYS));
            let initialized = (now - age).timestamp();
            // Uniform in [-1, 99), rounded to cents.
            let raw = rng.random::<f64>() * 100.0 - 1.0;
            let cents = (raw * 100.0).round() as i64;
            let amount = Amount::new(Decimal::new(cents, 2))?;
            let currency = *Currency::ALL.choose(rng).unwrap_or(&Currency::Eur);
            let customer = if customer_count > 0 {
                Some(rng.random_range(0..customer_count))
            } else {
                None
            };
            let order = NewOrder::try_new(initialized, Some(amount), currency, None, None)?;
            Ok(CustomerOrder { order, customer })
        })
        .collect::<RepositoryResult<Vec<_>>>()?;

    Ok(orders)
}
