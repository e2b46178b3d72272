use filmstore::{FilmStore, PageRequest, SeaOrmFilmStore, config::Config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,filmstore=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config).await?;
    let store = SeaOrmFilmStore::new(db);

    let first = store.find_all(&PageRequest::new(0, config.catalog_page_size)?).await?;
    tracing::info!(
        total_items = first.total_items(),
        total_pages = first.total_pages(),
        "film catalog ready"
    );

    for film in first.items() {
        tracing::info!(
            title = film.title(),
            film_type = %film.film_type(),
            release_date = ?film.release_date(),
            "film"
        );
    }

    Ok(())
}
