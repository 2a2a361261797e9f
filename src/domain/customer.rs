use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CustomerEmail, CustomerId, CustomerName, CustomerSurname, PhoneNumber, TypeConstraintError,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: CustomerName,
    pub surname: CustomerSurname,
    pub contact_email: Option<CustomerEmail>,
    pub contact_phone: Option<PhoneNumber>,
}

impl Customer {
    /// Validates raw values loaded from storage.
    pub fn try_new(
        id: i32,
        name: String,
        surname: String,
        contact_email: Option<String>,
        contact_phone: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: CustomerId::new(id)?,
            name: CustomerName::new(name)?,
            surname: CustomerSurname::new(surname)?,
            contact_email: contact_email.map(CustomerEmail::new).transpose()?,
            contact_phone: contact_phone.map(PhoneNumber::new).transpose()?,
        })
    }

    /// Full name as shown in reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub surname: CustomerSurname,
    pub contact_email: Option<CustomerEmail>,
    pub contact_phone: Option<PhoneNumber>,
}

impl NewCustomer {
    /// Builds a customer payload, treating blank contacts as absent.
    pub fn try_new(
        name: impl Into<String>,
        surname: impl Into<String>,
        contact_email: Option<String>,
        contact_phone: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: CustomerName::new(name)?,
            surname: CustomerSurname::new(surname)?,
            contact_email: contact_email
                .filter(|s| !s.trim().is_empty())
                .map(CustomerEmail::new)
                .transpose()?,
            contact_phone: contact_phone
                .filter(|s| !s.trim().is_empty())
                .map(PhoneNumber::new)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_drops_blank_contacts() {
        let customer = NewCustomer::try_new(
            "Makis",
            "Zita",
            Some("  ".to_string()),
            Some(String::new()),
        )
        .unwrap();
        assert!(customer.contact_email.is_none());
        assert!(customer.contact_phone.is_none());
    }

    #[test]
    fn new_customer_rejects_invalid_email() {
        let result = NewCustomer::try_new("Makis", "Zita", Some("zita".to_string()), None);
        assert_eq!(result.unwrap_err(), TypeConstraintError::InvalidEmail);
    }

    #[test]
    fn full_name_joins_parts() {
        let customer = Customer::try_new(
            1,
            "Fotis".to_string(),
            "ParaPente".to_string(),
            Some("fotis@parapente.com".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(customer.full_name(), "Fotis ParaPente");
    }
}
