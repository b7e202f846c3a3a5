use serde::{Deserialize, Serialize};
use std::fmt;

/// A single sale as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldItem {
    pub id: i64,
    pub name: String,
    pub serial_number: String,
    pub cost: i64,
    pub sales_price: i64,
    #[serde(default)]
    pub sales_person: String,
}

impl SoldItem {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        serial_number: impl Into<String>,
        cost: i64,
        sales_price: i64,
        sales_person: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            serial_number: serial_number.into(),
            cost,
            sales_price,
            sales_person: sales_person.into(),
        }
    }

    /// Per-item profit; negative when sold below cost. Wraps on overflow.
    pub fn profit(&self) -> i64 {
        self.sales_price.wrapping_sub(self.cost)
    }
}

/// A sale paired with the total profit of its salesperson over the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedItem {
    #[serde(flatten)]
    pub item: SoldItem,
    pub sales_person_profit: i64,
}

impl AnnotatedItem {
    pub fn profit(&self) -> i64 {
        self.item.profit()
    }
}

impl fmt::Display for AnnotatedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, name: {}, serialNumber: {}, cost: {}, salesPrice: {}, salesPerson: {}, SalesPerson's Profit: {}",
            self.item.id,
            self.item.name,
            self.item.serial_number,
            self.item.cost,
            self.item.sales_price,
            self.item.sales_person,
            self.sales_person_profit
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalespersonTotal {
    pub sales_person: String,
    pub profit: i64,
}

/// Output of one pipeline run: the annotated input and the filtered view.
#[derive(Debug, Clone, Default)]
pub struct SalesReport {
    pub original: Vec<AnnotatedItem>,
    pub filtered: Vec<AnnotatedItem>,
    pub totals: Vec<SalespersonTotal>,
}
