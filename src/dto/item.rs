use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::item::SellStatus;
use crate::dto::attachment::ItemImageDto;

/// Catalog item view used by both listings and detail pages.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock_number: i32,
    pub detail: String,
    pub sell_status: SellStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Images in `token_filename` wire form, in display order.
    pub file_names: Vec<String>,
    pub images: Vec<ItemImageDto>,
}
