use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::attachment::NewAttachment;
use crate::domain::types::{ItemId, ItemName, TypeConstraintError};

/// Sale state of a catalog item.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellStatus {
    #[default]
    Sell,
    SoldOut,
}

impl SellStatus {
    pub const ALL: [SellStatus; 2] = [SellStatus::Sell, SellStatus::SoldOut];

    pub const fn as_str(self) -> &'static str {
        match self {
            SellStatus::Sell => "SELL",
            SellStatus::SoldOut => "SOLD_OUT",
        }
    }
}

impl Display for SellStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SellStatus {
    type Err = TypeConstraintError;

    /// Exact, case-sensitive match against the stored literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SellStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownSellStatus(s.to_string()))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub price: i32,
    pub stock_number: i32,
    pub detail: String,
    pub sell_status: SellStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewItem {
    pub name: ItemName,
    pub price: i32,
    pub stock_number: i32,
    pub detail: String,
    pub sell_status: SellStatus,
    /// Images in display order; the first one becomes the primary image.
    pub images: Vec<NewAttachment>,
}

impl NewItem {
    #[must_use]
    pub fn new(
        name: ItemName,
        price: i32,
        stock_number: i32,
        detail: String,
        sell_status: SellStatus,
        images: Vec<NewAttachment>,
    ) -> Self {
        Self {
            name,
            price,
            stock_number,
            detail: detail.trim().to_string(),
            sell_status,
            images,
        }
    }
}

/// Replacement values for an existing item; `images` replaces the stored set.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateItem {
    pub name: ItemName,
    pub price: i32,
    pub stock_number: i32,
    pub detail: String,
    pub sell_status: SellStatus,
    pub images: Vec<NewAttachment>,
}

impl From<NewItem> for UpdateItem {
    fn from(item: NewItem) -> Self {
        Self {
            name: item.name,
            price: item.price,
            stock_number: item.stock_number,
            detail: item.detail,
            sell_status: item.sell_status,
            images: item.images,
        }
    }
}
