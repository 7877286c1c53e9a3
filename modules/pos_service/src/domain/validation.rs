//! Input validation for products, orders and accounts

use crate::contract::{NewAccount, NewOrder, PosError};

/// Validate product name and price
pub fn validate_product(name: &str, price: f64) -> Result<(), PosError> {
    if name.trim().is_empty() {
        return Err(PosError::validation("Product name cannot be empty"));
    }

    if !price.is_finite() || price <= 0.0 {
        return Err(PosError::validation(format!(
            "Product price must be greater than zero, got {}",
            price
        )));
    }

    Ok(())
}

/// Validate an order creation request
///
/// An order without items is legal.
pub fn validate_new_order(order: &NewOrder) -> Result<(), PosError> {
    if let Some(total) = order.total_price {
        if !total.is_finite() || total < 0.0 {
            return Err(PosError::validation(format!(
                "Order total_price must not be negative, got {}",
                total
            )));
        }
    }

    for (index, item) in order.items.iter().enumerate() {
        if item.product_name.trim().is_empty() {
            return Err(PosError::validation(format!(
                "items[{}].product_name cannot be empty",
                index
            )));
        }

        if item.quantity <= 0 {
            return Err(PosError::validation(format!(
                "items[{}].quantity must be greater than zero, got {}",
                index, item.quantity
            )));
        }

        if !item.total_price.is_finite() || item.total_price < 0.0 {
            return Err(PosError::validation(format!(
                "items[{}].total_price must not be negative, got {}",
                index, item.total_price
            )));
        }
    }

    Ok(())
}

/// Validate an account creation request
pub fn validate_account(account: &NewAccount) -> Result<(), PosError> {
    if account.username.trim().is_empty() {
        return Err(PosError::validation("username cannot be empty"));
    }

    if account.password.is_empty() {
        return Err(PosError::validation("password cannot be empty"));
    }

    if account.role.trim().is_empty() {
        return Err(PosError::validation("role cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::OrderItem;

    fn item(name: &str, quantity: i32) -> OrderItem {
        OrderItem {
            product_name: name.to_string(),
            quantity,
            total_price: 10.0,
        }
    }

    #[test]
    fn product_requires_name_and_positive_price() {
        assert!(validate_product("Coffee", 5.0).is_ok());
        assert!(matches!(
            validate_product("  ", 5.0),
            Err(PosError::Validation { .. })
        ));
        assert!(validate_product("Coffee", 0.0).is_err());
        assert!(validate_product("Coffee", -1.0).is_err());
        assert!(validate_product("Coffee", f64::NAN).is_err());
    }

    #[test]
    fn order_without_items_is_valid() {
        let order = NewOrder {
            items: vec![],
            total_price: None,
        };
        assert!(validate_new_order(&order).is_ok());
    }

    #[test]
    fn order_items_need_positive_quantity() {
        let order = NewOrder {
            items: vec![item("Coffee", 2), item("Tea", 0)],
            total_price: Some(20.0),
        };
        let err = validate_new_order(&order).unwrap_err();
        assert_eq!(
            err,
            PosError::validation("items[1].quantity must be greater than zero, got 0")
        );
    }

    #[test]
    fn order_items_need_a_product_name() {
        let order = NewOrder {
            items: vec![item("", 1)],
            total_price: None,
        };
        assert!(validate_new_order(&order).is_err());
    }

    #[test]
    fn account_fields_are_required() {
        let mut account = NewAccount {
            username: "kasir1".to_string(),
            password: "secret".to_string(),
            role: "kasir".to_string(),
        };
        assert!(validate_account(&account).is_ok());

        account.password.clear();
        assert!(validate_account(&account).is_err());
    }
}
