use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};
use crate::domain::types::TypeConstraintError;
use crate::models::customer::Customer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(table_name = crate::schema::orders)]
/// Diesel model for [`crate::domain::order::Order`].
pub struct Order {
    pub id: i32,
    pub initialized: i64,
    pub amount_cents: Option<i64>,
    pub currency: String,
    pub finalized: Option<i64>,
    pub customer_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
/// Insertable form of [`Order`].
pub struct NewOrder {
    pub initialized: i64,
    pub amount_cents: Option<i64>,
    pub currency: &'static str,
    pub finalized: Option<i64>,
    pub customer_id: Option<i32>,
}

impl TryFrom<Order> for DomainOrder {
    type Error = TypeConstraintError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        DomainOrder::try_new(
            order.id,
            order.initialized,
            order.amount_cents,
            &order.currency,
            order.finalized,
            order.customer_id,
        )
    }
}

impl From<&DomainNewOrder> for NewOrder {
    fn from(order: &DomainNewOrder) -> Self {
        Self {
            initialized: order.initialized,
            amount_cents: order.amount.map(|a| a.cents()),
            currency: order.currency.code(),
            finalized: order.finalized,
            customer_id: order.customer_id.map(|id| id.get()),
        }
    }
}
