use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single mobile-phone record, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mobile {
    pub id: u32,
    pub brand: String,
    pub model: String,
    pub price: Decimal,
    pub launched_year: u16,
}

impl fmt::Display for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mobile ID: {}, Brand: {}, Model: {}, Price: {:.2}, Launched Year: {}",
            self.id, self.brand, self.model, self.price, self.launched_year
        )
    }
}
