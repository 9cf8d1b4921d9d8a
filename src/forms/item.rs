use serde::Deserialize;
use validator::Validate;

use crate::domain::item::{NewItem, SellStatus, UpdateItem};
use crate::domain::types::ItemName;
use crate::forms::{FormError, parse_attachments};

/// Body of the item register and modify endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct ItemForm {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(range(min = 0))]
    pub stock_number: i32,
    #[validate(length(min = 1))]
    pub detail: String,
    #[serde(default)]
    pub sell_status: SellStatus,
    /// Images as `token_filename`; the first one becomes primary.
    #[serde(default)]
    pub file_names: Vec<String>,
}

impl TryFrom<ItemForm> for NewItem {
    type Error = FormError;

    fn try_from(form: ItemForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewItem::new(
            ItemName::new(form.name).map_err(|_| FormError::InvalidName)?,
            form.price,
            form.stock_number,
            form.detail,
            form.sell_status,
            parse_attachments(&form.file_names)?,
        ))
    }
}

impl TryFrom<ItemForm> for UpdateItem {
    type Error = FormError;

    fn try_from(form: ItemForm) -> Result<Self, Self::Error> {
        NewItem::try_from(form).map(UpdateItem::from)
    }
}
