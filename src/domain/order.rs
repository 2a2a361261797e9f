use serde::{Deserialize, Serialize};

use crate::domain::types::{Amount, Currency, CustomerId, OrderId, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Unix timestamp (seconds) of when the order was opened.
    pub initialized: i64,
    pub amount: Option<Amount>,
    pub currency: Currency,
    /// Unix timestamp (seconds) of when the order was closed.
    pub finalized: Option<i64>,
    pub customer_id: Option<CustomerId>,
}

impl Order {
    /// Validates raw values loaded from storage.
    pub fn try_new(
        id: i32,
        initialized: i64,
        amount_cents: Option<i64>,
        currency: &str,
        finalized: Option<i64>,
        customer_id: Option<i32>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: OrderId::new(id)?,
            initialized,
            amount: amount_cents.map(Amount::from_cents).transpose()?,
            currency: currency.parse()?,
            finalized,
            customer_id: customer_id.map(CustomerId::new).transpose()?,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOrder {
    pub initialized: i64,
    pub amount: Option<Amount>,
    pub currency: Currency,
    pub finalized: Option<i64>,
    pub customer_id: Option<CustomerId>,
}

impl NewOrder {
    /// Builds an order payload ensuring it is not closed before it was opened.
    pub fn try_new(
        initialized: i64,
        amount: Option<Amount>,
        currency: Currency,
        finalized: Option<i64>,
        customer_id: Option<CustomerId>,
    ) -> Result<Self, TypeConstraintError> {
        if let Some(finalized) = finalized
            && finalized < initialized
        {
            return Err(TypeConstraintError::InvalidValue(
                "order cannot be finalized before it is initialized".to_string(),
            ));
        }
        Ok(Self {
            initialized,
            amount,
            currency,
            finalized,
            customer_id,
        })
    }
}
