use std::{fmt, str::FromStr};

use jiff::civil::Date;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::{
    entities::film,
    error::{StoreError, StoreResult},
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilmType {
    Feature,
    Short,
    Documentary,
}

impl FilmType {
    pub const ALL: [FilmType; 3] = [FilmType::Feature, FilmType::Short, FilmType::Documentary];

    pub fn as_str(self) -> &'static str {
        match self {
            FilmType::Feature => "FEATURE",
            FilmType::Short => "SHORT",
            FilmType::Documentary => "DOCUMENTARY",
        }
    }
}

impl fmt::Display for FilmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilmType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| StoreError::InvalidFilmType(s.to_string()))
    }
}

/// One catalog entry. Built through [`Film::new`] or rehydrated from a
/// stored row; there is no way to change a field afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Film {
    title: String,
    film_type: FilmType,
    release_date: Option<Date>,
}

impl Film {
    pub fn new(title: impl Into<String>, film_type: &str) -> StoreResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StoreError::InvalidTitle);
        }
        Ok(Self { title, film_type: film_type.parse()?, release_date: None })
    }

    /// Dates are stored as ISO text and sorted as text, which only matches
    /// calendar order for years 0 and later.
    pub fn with_release_date(mut self, date: Date) -> StoreResult<Self> {
        if date.year() < 0 {
            return Err(StoreError::InvalidReleaseDate(date.to_string()));
        }
        self.release_date = Some(date);
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn film_type(&self) -> FilmType {
        self.film_type
    }

    pub fn release_date(&self) -> Option<Date> {
        self.release_date
    }

    pub fn dto(&self) -> FilmDto {
        FilmDto { title: self.title.clone(), film_type: self.film_type }
    }
}

/// Transport form handed to layers outside the store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FilmDto {
    pub title: String,
    #[serde(rename = "type")]
    pub film_type: FilmType,
}

impl TryFrom<film::Model> for Film {
    type Error = StoreError;

    fn try_from(row: film::Model) -> StoreResult<Self> {
        let release_date = row
            .release_date
            .map(|raw| raw.parse::<Date>().map_err(|_| StoreError::InvalidReleaseDate(raw)))
            .transpose()?;

        let film = Film::new(row.title, &row.film_type)?;
        match release_date {
            Some(date) => film.with_release_date(date),
            None => Ok(film),
        }
    }
}

impl From<&Film> for film::ActiveModel {
    fn from(film: &Film) -> Self {
        film::ActiveModel {
            title: Set(film.title.clone()),
            film_type: Set(film.film_type.as_str().to_string()),
            release_date: Set(film.release_date.map(|d| d.to_string())),
        }
    }
}
