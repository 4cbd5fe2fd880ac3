//! In-memory concert repository.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;

use tgle_core::result::AppResult;
use tgle_core::types::ConcertId;
use tgle_core::types::pagination::{PageRequest, PageResponse};
use tgle_entity::concert::{Concert, CreateConcert};

use super::MemoryStore;
use crate::repositories::ConcertRepository;

/// [`ConcertRepository`] backed by a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryConcertRepository {
    store: MemoryStore,
}

impl MemoryConcertRepository {
    /// Create a repository over the given store.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

/// `concert_date DESC NULLS LAST, concert_id DESC`
fn newest_first(a: &Concert, b: &Concert) -> Ordering {
    let by_date = match (&a.concert_date, &b.concert_date) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| b.concert_id.cmp(&a.concert_id))
}

#[async_trait]
impl ConcertRepository for MemoryConcertRepository {
    async fn create(&self, data: &CreateConcert) -> AppResult<Concert> {
        let mut tables = self.store.write().await;
        let id = ConcertId(tables.next_id());
        let concert = data.clone().into_concert(id, Utc::now());
        tables.concerts.insert(id, concert.clone());
        Ok(concert)
    }

    async fn find_by_id(&self, id: ConcertId) -> AppResult<Option<Concert>> {
        Ok(self.store.read().await.concerts.get(&id).cloned())
    }

    async fn find_all(
        &self,
        category_id: Option<i64>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Concert>> {
        let tables = self.store.read().await;
        let mut matching: Vec<&Concert> = tables
            .concerts
            .values()
            .filter(|c| category_id.is_none() || c.category_id == category_id)
            .collect();
        matching.sort_by(|a, b| newest_first(a, b));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn delete(&self, id: ConcertId) -> AppResult<bool> {
        Ok(self.store.write().await.concerts.remove(&id).is_some())
    }
}
