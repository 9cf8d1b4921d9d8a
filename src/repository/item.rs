//! Catalog item listings and persistence.
//!
//! Same shape as the document listing: count, page, then images for the
//! page in batches.

use std::collections::HashMap;

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::attachment::ItemImage;
use crate::domain::item::{Item, NewItem, UpdateItem};
use crate::domain::types::ItemId;
use crate::models::attachment::{ItemImage as DbItemImage, item_image_rows};
use crate::models::item::{Item as DbItem, NewItem as DbNewItem, UpdateItem as DbUpdateItem};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::filter::item_filter;
use crate::repository::{
    DieselRepository, ItemReader, ItemWriter, SearchQuery, SortOrder, plan_batches,
};
use crate::schema::{item_images, items};

impl DieselRepository {
    fn load_images(
        &self,
        conn: &mut SqliteConnection,
        item_ids: &[i32],
    ) -> RepositoryResult<HashMap<i32, Vec<ItemImage>>> {
        let mut grouped: HashMap<i32, Vec<ItemImage>> = HashMap::new();

        for batch in plan_batches(item_ids, self.batch_size()) {
            let rows = item_images::table
                .filter(item_images::item_id.eq_any(batch))
                .order((item_images::item_id, item_images::ord))
                .load::<DbItemImage>(conn)?;

            for row in rows {
                let Some(item_id) = row.item_id else {
                    continue;
                };
                grouped
                    .entry(item_id)
                    .or_default()
                    .push(ItemImage::try_from(row)?);
            }
        }

        Ok(grouped)
    }
}

impl ItemReader for DieselRepository {
    fn search_items(
        &self,
        query: &SearchQuery,
    ) -> RepositoryResult<(usize, Vec<(Item, Vec<ItemImage>)>)> {
        let (offset, limit) = query.window()?;
        let mut conn = self.conn()?;

        let total = items::table
            .filter(item_filter::<items::table>(&query.predicate))
            .count()
            .get_result::<i64>(&mut conn)? as usize;
        if total == 0 {
            return Ok((0, Vec::new()));
        }

        let mut rows = items::table
            .filter(item_filter::<items::table>(&query.predicate))
            .into_boxed::<Sqlite>();
        rows = match query.sort {
            SortOrder::IdDesc => rows.order(items::id.desc()),
            SortOrder::IdAsc => rows.order(items::id.asc()),
        };
        let rows = rows.offset(offset).limit(limit).load::<DbItem>(&mut conn)?;

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut images = self.load_images(&mut conn, &ids)?;

        let items = rows
            .into_iter()
            .map(|row| {
                let children = images.remove(&row.id).unwrap_or_default();
                Ok((Item::try_from(row)?, children))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, items))
    }

    fn get_item_with_images(
        &self,
        id: ItemId,
    ) -> RepositoryResult<Option<(Item, Vec<ItemImage>)>> {
        let mut conn = self.conn()?;

        let Some(row) = items::table
            .find(id.get())
            .first::<DbItem>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let mut images = self.load_images(&mut conn, &[row.id])?;
        let children = images.remove(&row.id).unwrap_or_default();

        Ok(Some((Item::try_from(row)?, children)))
    }
}

impl ItemWriter for DieselRepository {
    fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let row = conn.transaction::<DbItem, RepositoryError, _>(|conn| {
            let row = diesel::insert_into(items::table)
                .values(&DbNewItem::from_domain(new_item, now))
                .get_result::<DbItem>(conn)?;

            let images = item_image_rows(row.id, &new_item.images);
            if !images.is_empty() {
                diesel::insert_into(item_images::table)
                    .values(&images)
                    .execute(conn)?;
            }

            Ok(row)
        })?;

        Ok(Item::try_from(row)?)
    }

    fn update_item(&self, id: ItemId, updates: &UpdateItem) -> RepositoryResult<Item> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let row = conn.transaction::<DbItem, RepositoryError, _>(|conn| {
            let row = diesel::update(items::table.find(id.get()))
                .set(&DbUpdateItem::from_domain(updates, now))
                .get_result::<DbItem>(conn)?;

            diesel::update(item_images::table.filter(item_images::item_id.eq(row.id)))
                .set(item_images::item_id.eq(None::<i32>))
                .execute(conn)?;
            diesel::delete(item_images::table.filter(item_images::item_id.is_null()))
                .execute(conn)?;

            let images = item_image_rows(row.id, &updates.images);
            if !images.is_empty() {
                diesel::insert_into(item_images::table)
                    .values(&images)
                    .execute(conn)?;
            }

            Ok(row)
        })?;

        Ok(Item::try_from(row)?)
    }

    fn delete_item(&self, id: ItemId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(item_images::table.filter(item_images::item_id.eq(id.get())))
                .execute(conn)?;

            let deleted = diesel::delete(items::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
