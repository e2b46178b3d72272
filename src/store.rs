use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryOrder, Select, TransactionTrait,
    sea_query::OnConflict,
};
use tracing::debug;

use crate::{
    entities::film,
    error::StoreResult,
    models::Film,
    pagination::{Page, PageRequest, Sort, SortDirection, SortKey},
};

/// Title-keyed access to the film catalog.
///
/// A missing title is a normal outcome (`Ok(None)` / `Ok(false)`), never an
/// error. Storage failures surface as `StoreError::StorageUnavailable` and are
/// not retried here.
#[async_trait]
pub trait FilmStore: Send + Sync {
    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Film>>;

    async fn find_all(&self, request: &PageRequest) -> StoreResult<Page<Film>>;

    /// Inserts the film, or overwrites type and release date of the film
    /// already stored under the same title.
    async fn save(&self, film: &Film) -> StoreResult<()>;

    /// Like [`FilmStore::save`] for every film, all or nothing.
    async fn save_all(&self, films: &[Film]) -> StoreResult<()>;

    async fn delete_by_title(&self, title: &str) -> StoreResult<bool>;

    async fn exists_by_title(&self, title: &str) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<u64>;
}

#[derive(Clone, Debug)]
pub struct SeaOrmFilmStore {
    db: DatabaseConnection,
}

impl SeaOrmFilmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl FilmStore for SeaOrmFilmStore {
    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Film>> {
        let row = film::Entity::find_by_id(title.to_string()).one(&self.db).await?;
        debug!(title, found = row.is_some(), "film lookup");
        row.map(Film::try_from).transpose()
    }

    async fn find_all(&self, request: &PageRequest) -> StoreResult<Page<Film>> {
        let txn = self.db.begin().await?;

        let (totals, rows) = {
            let paginator =
                ordered(film::Entity::find(), request.sort()).paginate(&txn, request.size());
            let totals = paginator.num_items_and_pages().await?;
            // Past the end, or an offset the engine cannot express: nothing to fetch.
            let rows = match request.offset() {
                Some(offset) if offset < totals.number_of_items => {
                    paginator.fetch_page(request.page()).await?
                }
                _ => Vec::new(),
            };
            (totals, rows)
        };

        txn.commit().await?;

        debug!(
            page = request.page(),
            size = request.size(),
            returned = rows.len(),
            total_items = totals.number_of_items,
            "film page"
        );

        let films = rows.into_iter().map(Film::try_from).collect::<StoreResult<Vec<_>>>()?;
        Ok(Page::new(films, request, totals.number_of_items))
    }

    async fn save(&self, film: &Film) -> StoreResult<()> {
        film::Entity::insert(film::ActiveModel::from(film))
            .on_conflict(upsert())
            .exec_without_returning(&self.db)
            .await?;

        debug!(title = film.title(), film_type = %film.film_type(), "film saved");
        Ok(())
    }

    async fn save_all(&self, films: &[Film]) -> StoreResult<()> {
        if films.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin().await?;

        for film in films {
            film::Entity::insert(film::ActiveModel::from(film))
                .on_conflict(upsert())
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        debug!(count = films.len(), "films saved");
        Ok(())
    }

    async fn delete_by_title(&self, title: &str) -> StoreResult<bool> {
        let res = film::Entity::delete_by_id(title.to_string()).exec(&self.db).await?;
        debug!(title, deleted = res.rows_affected, "film delete");
        Ok(res.rows_affected > 0)
    }

    async fn exists_by_title(&self, title: &str) -> StoreResult<bool> {
        let n = film::Entity::find_by_id(title.to_string()).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(film::Entity::find().count(&self.db).await?)
    }
}

fn upsert() -> OnConflict {
    OnConflict::column(film::Column::Title)
        .update_columns([film::Column::FilmType, film::Column::ReleaseDate])
        .to_owned()
}

fn ordered(query: Select<film::Entity>, sort: Sort) -> Select<film::Entity> {
    let order = match sort.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    // Titles are unique, so a title tiebreak makes every order total.
    match sort.key {
        SortKey::Title => query.order_by(film::Column::Title, order),
        SortKey::FilmType => query
            .order_by(film::Column::FilmType, order)
            .order_by(film::Column::Title, Order::Asc),
        SortKey::ReleaseDate => query
            .order_by(film::Column::ReleaseDate, order)
            .order_by(film::Column::Title, Order::Asc),
    }
}
