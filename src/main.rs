use entrybook::{database, handlers, utils};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    utils::config::load_dotenv();
    env_logger::init();

    let db_path = utils::config::database_path();
    if let Some(dir) = db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize database
    database::init_database(&db_path)?;
    log::info!("database ready at {}", db_path.display());

    let app = handlers::router(handlers::AppState::new(&db_path));

    let addr = utils::config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("entry store listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
