use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("film title must not be empty")]
    InvalidTitle,

    #[error("unknown film type {0:?}")]
    InvalidFilmType(String),

    #[error("invalid page request (page {page}, size {size})")]
    InvalidPageRequest { page: i64, size: i64 },

    #[error("invalid release date {0:?}")]
    InvalidReleaseDate(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] sea_orm::DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;
