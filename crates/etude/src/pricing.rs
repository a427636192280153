//! Coupons, discounts, and product validation
//!
//! The coupon table is explicit configuration handed to the calculator;
//! [`standard_coupons`] is the pure factory that replaces a shared global
//! list.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A discount coupon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Code entered at checkout
    pub code: String,
    /// Fractional discount, strictly between 0 and 1 (0.2 = 20% off)
    pub discount: f64,
}

impl Coupon {
    /// Create a new coupon
    #[must_use]
    pub fn new(code: impl Into<String>, discount: f64) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }
}

/// The standard coupon table
#[must_use]
pub fn standard_coupons() -> Vec<Coupon> {
    vec![Coupon::new("SAVE10", 0.1), Coupon::new("SAVE20", 0.2)]
}

/// Apply a coupon code to a price
///
/// An unknown code applies no discount; the price comes back unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidPrice`] if `price` is non-finite or not positive.
pub fn calculate_discount(price: f64, code: &str, coupons: &[Coupon]) -> Result<f64> {
    if !price.is_finite() {
        return Err(Error::InvalidPrice(format!("{price} is not a finite number")));
    }
    if price <= 0.0 {
        return Err(Error::InvalidPrice(format!("{price} is not positive")));
    }

    match coupons.iter().find(|c| c.code == code) {
        Some(coupon) => Ok(price - price * coupon.discount),
        None => {
            tracing::debug!(code, "unknown coupon code, no discount applied");
            Ok(price)
        }
    }
}

/// Check if a price falls within an inclusive range
#[must_use]
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    (min..=max).contains(&price)
}

/// A product awaiting publication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
}

/// Validate a product before publication
///
/// # Errors
///
/// Returns [`Error::InvalidProduct`] if the name is empty or the price is
/// non-finite or not positive.
pub fn validate_product(product: &Product) -> Result<()> {
    if product.name.is_empty() {
        return Err(Error::InvalidProduct("name is missing".to_string()));
    }
    if !product.price.is_finite() || product.price <= 0.0 {
        return Err(Error::InvalidProduct(format!(
            "price {} is not positive",
            product.price
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_discount_the_price() -> Result<()> {
        let coupons = standard_coupons();
        assert_eq!(calculate_discount(10.0, "SAVE10", &coupons)?, 9.0);
        assert_eq!(calculate_discount(10.0, "SAVE20", &coupons)?, 8.0);
        Ok(())
    }

    #[test]
    fn unknown_code_leaves_the_price_unchanged() -> Result<()> {
        let coupons = standard_coupons();
        assert_eq!(calculate_discount(10.0, "INVALID", &coupons)?, 10.0);
        Ok(())
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = calculate_discount(-10.0, "SAVE10", &standard_coupons());
        let message = error_message(result);
        assert!(message.to_lowercase().contains("invalid"));
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let result = calculate_discount(f64::NAN, "SAVE10", &standard_coupons());
        assert!(matches!(result, Err(Error::InvalidPrice(_))));
    }

    #[test]
    fn standard_coupons_are_well_formed() {
        let coupons = standard_coupons();
        assert!(!coupons.is_empty());
        for coupon in &coupons {
            assert!(!coupon.code.is_empty());
            assert!(coupon.discount > 0.0);
            assert!(coupon.discount < 1.0);
        }
    }

    #[test]
    fn coupon_table_loads_from_json() -> std::result::Result<(), serde_json::Error> {
        let coupons: Vec<Coupon> =
            serde_json::from_str(r#"[{"code": "WELCOME5", "discount": 0.05}]"#)?;
        assert_eq!(coupons, vec![Coupon::new("WELCOME5", 0.05)]);
        Ok(())
    }

    #[test]
    fn price_range_is_inclusive_on_both_ends() {
        assert!(!is_price_in_range(-10.0, 0.0, 100.0));
        assert!(is_price_in_range(0.0, 0.0, 100.0));
        assert!(is_price_in_range(50.0, 0.0, 100.0));
        assert!(is_price_in_range(100.0, 0.0, 100.0));
        assert!(!is_price_in_range(200.0, 0.0, 100.0));
    }

    #[test]
    fn well_formed_product_passes() {
        let product = Product {
            name: "Keyboard".to_string(),
            price: 59.0,
        };
        assert!(validate_product(&product).is_ok());
    }

    #[test]
    fn product_without_a_name_is_rejected() {
        let product = Product {
            name: String::new(),
            price: 59.0,
        };
        let message = error_message(validate_product(&product));
        assert!(message.contains("name"));
    }

    #[test]
    fn product_with_a_non_positive_price_is_rejected() {
        let product = Product {
            name: "Keyboard".to_string(),
            price: 0.0,
        };
        let message = error_message(validate_product(&product));
        assert!(message.contains("price"));
    }

    fn error_message<T>(result: Result<T>) -> String {
        match result {
            Err(err) => err.to_string(),
            Ok(_) => String::new(),
        }
    }
}
