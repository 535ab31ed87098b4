//! `minreview` - browse the canteen catalog from a terminal
//!
//! Restores the persisted user session, walks the campus → canteen → floor
//! cascade to the first available location (or the one given on the command
//! line) and prints one page of dishes.
//!
//! ```text
//! minreview [campus_id] [canteen_id] [floor_id] [page]
//! ```

use std::sync::Arc;

use anyhow::Context;
use minreview_client::storage::KeyValueStorage;
use minreview_client::{ApiFlavor, ClientConfig, DishStore, FileStorage, SessionStore, UserApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    minreview_client::logger::init_logger(&config.log_level, config.log_json)?;

    let storage: Arc<dyn KeyValueStorage> = Arc::new(
        FileStorage::open(&config.storage_path)
            .with_context(|| format!("opening {}", config.storage_path.display()))?,
    );

    let http = config.build_http_client(ApiFlavor::User, storage.clone())?;
    let mut session = SessionStore::new(UserApi::new(http.clone()), storage);
    match session.restore() {
        Some(s) => tracing::info!(user = %s.user_info.name, "Using saved session"),
        None => tracing::info!("Browsing anonymously"),
    }

    let args: Vec<i64> = std::env::args()
        .skip(1)
        .map(|a| a.parse().with_context(|| format!("not a number: {a}")))
        .collect::<anyhow::Result<_>>()?;

    let mut store = DishStore::new(UserApi::new(http));
    store.fetch_campus_list().await;
    if let Some(&campus_id) = args.first() {
        store.select_campus(campus_id).await;
    }
    if let Some(&canteen_id) = args.get(1) {
        store.select_canteen(canteen_id).await;
    }
    if let Some(&floor_id) = args.get(2) {
        store.select_floor(floor_id).await;
    }
    if let Some(&page) = args.get(3) {
        store.change_page(u32::try_from(page).context("page out of range")?).await;
    }

    if let Some(error) = store.error() {
        anyhow::bail!("{error}");
    }

    let location = [
        store.selected_campus().map(|c| c.name.as_str()),
        store.selected_canteen().map(|c| c.name.as_str()),
        store.selected_floor().map(|f| f.name.as_str()),
    ];
    let location: Vec<&str> = location.into_iter().flatten().collect();
    println!("{}", location.join(" / "));
    println!(
        "page {} ({} dishes total)",
        store.current_page(),
        store.total()
    );
    for dish in store.dish_list() {
        println!(
            "  #{:<5} {:<20} ¥{:<8} 👍 {:<4} 👎 {:<4} 💬 {}",
            dish.id, dish.name, dish.price.to_string(), dish.like_count, dish.dislike_count, dish.comment_count
        );
    }

    Ok(())
}
