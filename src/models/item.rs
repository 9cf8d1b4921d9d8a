use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::{
    Item as DomainItem, NewItem as DomainNewItem, SellStatus, UpdateItem as DomainUpdateItem,
};
use crate::domain::types::{ItemId, ItemName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::items)]
/// Diesel model for [`crate::domain::item::Item`].
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock_number: i32,
    pub detail: String,
    pub sell_status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::items)]
pub struct NewItem<'a> {
    pub name: &'a str,
    pub price: i32,
    pub stock_number: i32,
    pub detail: &'a str,
    pub sell_status: &'static str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::items)]
pub struct UpdateItem<'a> {
    pub name: &'a str,
    pub price: i32,
    pub stock_number: i32,
    pub detail: &'a str,
    pub sell_status: &'static str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Item> for DomainItem {
    type Error = TypeConstraintError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ItemId::new(item.id)?,
            name: ItemName::new(item.name)?,
            price: item.price,
            stock_number: item.stock_number,
            detail: item.detail,
            sell_status: item.sell_status.parse::<SellStatus>()?,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }
}

impl<'a> NewItem<'a> {
    pub fn from_domain(item: &'a DomainNewItem, now: NaiveDateTime) -> Self {
        Self {
            name: item.name.as_str(),
            price: item.price,
            stock_number: item.stock_number,
            detail: item.detail.as_str(),
            sell_status: item.sell_status.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateItem<'a> {
    pub fn from_domain(item: &'a DomainUpdateItem, now: NaiveDateTime) -> Self {
        Self {
            name: item.name.as_str(),
            price: item.price,
            stock_number: item.stock_number,
            detail: item.detail.as_str(),
            sell_status: item.sell_status.as_str(),
            updated_at: now,
        }
    }
}
