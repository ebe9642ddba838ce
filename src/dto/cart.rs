use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartRow {
    pub id: i32,
    pub book_id: i32,
    /// Book title when the backend embedded it.
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: u32,
}

/// Data required to render the cart page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPageData {
    pub rows: Vec<CartRow>,
    pub item_count: u32,
    pub total_price: f64,
}
