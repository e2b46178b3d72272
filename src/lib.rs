pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod pagination;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{Film, FilmDto, FilmType};
pub use pagination::{Page, PageRequest, Sort, SortDirection, SortKey};
pub use store::{FilmStore, SeaOrmFilmStore};
