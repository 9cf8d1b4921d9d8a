//! Catalog item listings and CRUD.

use crate::domain::item::{NewItem, UpdateItem};
use crate::domain::types::ItemId;
use crate::dto::item::ItemDto;
use crate::forms::item::ItemForm;
use crate::repository::{ItemReader, ItemWriter};
use crate::search::fields::ITEM_FIELDS;
use crate::search::page::PageResult;
use crate::search::projector::project_item;
use crate::search::request::SearchRequest;
use crate::services::{ServiceError, ServiceResult, log_write_failure, search_query};

/// Page of items with their images; flag `s` matches only `SELL`/`SOLD_OUT`.
pub fn list_items<R>(
    repo: &R,
    request: SearchRequest,
    default_page_size: usize,
) -> ServiceResult<PageResult<ItemDto>>
where
    R: ItemReader + ?Sized,
{
    let (request, query) = search_query(request, &ITEM_FIELDS, default_page_size);

    let (total, rows) = repo.search_items(&query).map_err(|err| {
        log::error!("Failed to list items: {err}");
        err
    })?;

    let items = rows
        .into_iter()
        .map(|(item, images)| project_item(item, images))
        .collect();

    Ok(PageResult::assemble(&request, items, total)?)
}

pub fn read_item<R>(repo: &R, id: i32) -> ServiceResult<ItemDto>
where
    R: ItemReader + ?Sized,
{
    let id = ItemId::new(id)?;

    repo.get_item_with_images(id)?
        .map(|(item, images)| project_item(item, images))
        .ok_or(ServiceError::NotFound)
}

pub fn register_item<R>(repo: &R, form: ItemForm) -> ServiceResult<i32>
where
    R: ItemWriter + ?Sized,
{
    let new_item = NewItem::try_from(form)?;

    let item = repo
        .create_item(&new_item)
        .inspect_err(|err| log_write_failure("register item", err))?;

    Ok(item.id.get())
}

pub fn modify_item<R>(repo: &R, id: i32, form: ItemForm) -> ServiceResult<ItemDto>
where
    R: ItemReader + ItemWriter + ?Sized,
{
    let id = ItemId::new(id)?;
    let updates = UpdateItem::try_from(form)?;

    repo.update_item(id, &updates)
        .inspect_err(|err| log_write_failure(&format!("modify item {id}"), err))?;

    read_item(repo, id.get())
}

pub fn remove_item<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ItemWriter + ?Sized,
{
    let id = ItemId::new(id)?;

    repo.delete_item(id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::attachment::ItemImage;
    use crate::domain::item::{Item, SellStatus};
    use crate::domain::types::{AttachmentToken, FileName, ItemName};
    use crate::repository::mock::MockRepository;
    use crate::search::predicate::Condition;

    fn item(id: i32, sell_status: SellStatus) -> Item {
        let now = Utc::now().naive_utc();
        Item {
            id: ItemId::new(id).expect("valid id"),
            name: ItemName::new("Lamp").expect("valid name"),
            price: 100,
            stock_number: 1,
            detail: "Desk lamp".to_string(),
            sell_status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn status_literal_becomes_a_status_condition() {
        let mut repo = MockRepository::new();
        repo.expect_search_items()
            .withf(|query| {
                query.predicate.conditions() == [Condition::StatusIs(SellStatus::SoldOut)]
            })
            .times(1)
            .returning(|_| Ok((1, vec![(item(4, SellStatus::SoldOut), Vec::new())])));

        let request = SearchRequest::new(1, 10).search("s", "SOLD_OUT");
        let page = list_items(&repo, request, 10).expect("lists");

        assert_eq!(page.items[0].sell_status, SellStatus::SoldOut);
    }

    #[test]
    fn read_projects_images_in_order() {
        let mut repo = MockRepository::new();
        repo.expect_get_item_with_images().times(1).returning(|_| {
            let image = |token: &str, ord: i32| ItemImage {
                token: AttachmentToken::new(token).expect("valid token"),
                file_name: FileName::new("photo.jpg").expect("valid file"),
                is_primary: ord == 0,
                ord,
            };
            Ok(Some((
                item(2, SellStatus::Sell),
                vec![image("second", 1), image("first", 0)],
            )))
        });

        let dto = read_item(&repo, 2).expect("reads");

        assert_eq!(
            dto.file_names,
            vec!["first_photo.jpg", "second_photo.jpg"]
        );
        assert!(dto.images[0].is_primary);
    }

    #[test]
    fn missing_item_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_item_with_images()
            .times(1)
            .returning(|_| Ok(None));

        assert!(matches!(read_item(&repo, 1), Err(ServiceError::NotFound)));
    }
}
