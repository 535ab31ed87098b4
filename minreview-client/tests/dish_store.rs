// minreview-client/tests/dish_store.rs
// 级联选择测试

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use minreview_client::{CatalogSource, ClientError, ClientResult, DishStore};
use parking_lot::Mutex;
use serde_json::json;
use shared::models::{Campus, Canteen, Dish, Floor};
use shared::{DishQuery, PageResult};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Campuses,
    Canteens(i64),
    Floors(i64),
    Dishes(DishQuery),
}

/// In-memory catalog that records every call it receives
#[derive(Debug, Default)]
struct FakeCatalog {
    campuses: Vec<Campus>,
    canteens: HashMap<i64, Vec<Canteen>>,
    floors: HashMap<i64, Vec<Floor>>,
    dishes: Vec<Dish>,
    /// `Some("")` fails without a server message
    fail_campuses: Mutex<Option<&'static str>>,
    fail_canteens: AtomicBool,
    fail_floors: AtomicBool,
    fail_dishes: AtomicBool,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn fail_campuses(&self, msg: Option<&'static str>) {
        *self.fail_campuses.lock() = msg;
    }

    fn fail_canteens(&self, fail: bool) {
        self.fail_canteens.store(fail, Ordering::SeqCst);
    }

    fn fail_floors(&self, fail: bool) {
        self.fail_floors.store(fail, Ordering::SeqCst);
    }

    fn fail_dishes(&self, fail: bool) {
        self.fail_dishes.store(fail, Ordering::SeqCst);
    }
}

fn campus(id: i64) -> Campus {
    serde_json::from_value(json!({ "id": id, "name": format!("校区{id}") })).unwrap()
}

fn canteen(id: i64, campus_id: i64) -> Canteen {
    serde_json::from_value(json!({ "id": id, "name": format!("食堂{id}"), "campusId": campus_id }))
        .unwrap()
}

fn floor(id: i64, canteen_id: i64) -> Floor {
    serde_json::from_value(json!({ "id": id, "name": format!("{id}楼"), "canteenId": canteen_id }))
        .unwrap()
}

fn dish(id: i64) -> Dish {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("菜品{id}"),
        "price": 9.5,
        "canteenId": 1,
        "campusId": 1
    }))
    .unwrap()
}

fn api_error(msg: &str) -> ClientError {
    ClientError::Api {
        code: 0,
        msg: msg.to_string(),
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn load_campuses(&self) -> ClientResult<Vec<Campus>> {
        self.calls.lock().push(Call::Campuses);
        match *self.fail_campuses.lock() {
            Some("") => Err(ClientError::InvalidResponse("boom".into())),
            Some(msg) => Err(api_error(msg)),
            None => Ok(self.campuses.clone()),
        }
    }

    async fn load_canteens(&self, campus_id: i64) -> ClientResult<Vec<Canteen>> {
        self.calls.lock().push(Call::Canteens(campus_id));
        if self.fail_canteens.load(Ordering::SeqCst) {
            return Err(ClientError::InvalidResponse("boom".into()));
        }
        Ok(self.canteens.get(&campus_id).cloned().unwrap_or_default())
    }

    async fn load_floors(&self, canteen_id: i64) -> ClientResult<Vec<Floor>> {
        self.calls.lock().push(Call::Floors(canteen_id));
        if self.fail_floors.load(Ordering::SeqCst) {
            return Err(ClientError::InvalidResponse("boom".into()));
        }
        Ok(self.floors.get(&canteen_id).cloned().unwrap_or_default())
    }

    async fn load_dishes(&self, query: &DishQuery) -> ClientResult<PageResult<Dish>> {
        self.calls.lock().push(Call::Dishes(query.clone()));
        if self.fail_dishes.load(Ordering::SeqCst) {
            return Err(api_error("菜品服务不可用"));
        }
        Ok(PageResult {
            total: 42,
            list: self.dishes.clone(),
        })
    }
}

/// Two campuses; campus 1 has canteens 10 (floors 100, 101) and 11 (no
/// floors); campus 2 has no canteens.
fn catalog() -> FakeCatalog {
    FakeCatalog {
        campuses: vec![campus(1), campus(2)],
        canteens: HashMap::from([(1, vec![canteen(10, 1), canteen(11, 1)])]),
        floors: HashMap::from([(10, vec![floor(100, 10), floor(101, 10)])]),
        dishes: vec![dish(1), dish(2)],
        ..Default::default()
    }
}

fn dish_query(page: u32, campus: Option<i64>, canteen: Option<i64>, floor: Option<i64>) -> DishQuery {
    DishQuery {
        campus_id: campus,
        canteen_id: canteen,
        floor_id: floor,
        ..DishQuery::page(page, 10)
    }
}

#[tokio::test]
async fn test_initial_load_cascades_to_first_of_each_level() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;

    assert_eq!(store.selected_campus_id(), Some(1));
    assert_eq!(store.selected_canteen_id(), Some(10));
    assert_eq!(store.selected_floor_id(), Some(100));
    assert_eq!(store.dish_list().len(), 2);
    assert_eq!(store.total(), 42);
    assert_eq!(store.current_page(), 1);
    assert!(store.error().is_none());

    assert_eq!(
        store.source().calls(),
        vec![
            Call::Campuses,
            Call::Canteens(1),
            Call::Floors(10),
            Call::Dishes(dish_query(1, Some(1), Some(10), Some(100))),
        ]
    );
}

#[tokio::test]
async fn test_refetching_campuses_keeps_existing_selection() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    store.select_floor(101).await;
    store.source().clear_calls();

    store.fetch_campus_list().await;

    assert_eq!(store.source().calls(), vec![Call::Campuses]);
    assert_eq!(store.selected_floor_id(), Some(101));
}

#[tokio::test]
async fn test_select_same_campus_is_noop() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    store.source().clear_calls();

    store.select_campus(1).await;
    store.select_canteen(10).await;
    store.select_floor(100).await;

    assert!(store.source().calls().is_empty());
}

#[tokio::test]
async fn test_select_campus_resets_lower_levels() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    store.source().clear_calls();

    // Campus 2 has no canteens: floors are cleared and dishes are filtered
    // by campus alone
    store.select_campus(2).await;

    assert_eq!(store.selected_campus_id(), Some(2));
    assert_eq!(store.selected_canteen_id(), None);
    assert_eq!(store.selected_floor_id(), None);
    assert!(store.canteen_list().is_empty());
    assert!(store.floor_list().is_empty());
    assert_eq!(
        store.source().calls(),
        vec![
            Call::Canteens(2),
            Call::Dishes(dish_query(1, Some(2), None, None)),
        ]
    );
}

#[tokio::test]
async fn test_canteen_without_floors_skips_floor_filter() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    store.source().clear_calls();

    store.select_canteen(11).await;

    assert_eq!(store.selected_canteen_id(), Some(11));
    assert_eq!(store.selected_floor_id(), None);
    assert!(store.floor_list().is_empty());
    assert_eq!(
        store.source().calls(),
        vec![
            Call::Floors(11),
            Call::Dishes(dish_query(1, Some(1), Some(11), None)),
        ]
    );
}

#[tokio::test]
async fn test_select_floor_and_change_page() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    store.change_page(3).await;
    assert_eq!(store.current_page(), 3);
    store.source().clear_calls();

    store.select_floor(101).await;
    store.change_page(2).await;

    assert_eq!(
        store.source().calls(),
        vec![
            Call::Dishes(dish_query(1, Some(1), Some(10), Some(101))),
            Call::Dishes(dish_query(2, Some(1), Some(10), Some(101))),
        ]
    );
    assert_eq!(store.current_page(), 2);
    assert_eq!(store.selected_floor().map(|f| f.id), Some(101));
}

#[tokio::test]
async fn test_campus_failure_keeps_previous_list() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    assert_eq!(store.campus_list().len(), 2);

    store.source().fail_campuses(Some("校区加载失败"));
    store.fetch_campus_list().await;

    assert_eq!(store.campus_list().len(), 2);
    assert!(!store.campus_loading());
    assert_eq!(store.error(), Some("校区加载失败"));
}

#[tokio::test]
async fn test_failure_without_server_message_uses_fallback() {
    let source = catalog();
    source.fail_campuses(Some(""));
    let mut store = DishStore::new(source);
    store.fetch_campus_list().await;

    assert!(store.campus_list().is_empty());
    assert_eq!(store.error(), Some("failed to load campus list"));
    assert!(!store.campus_loading());
    assert_eq!(store.source().calls(), vec![Call::Campuses]);
}

#[tokio::test]
async fn test_canteen_failure_halts_cascade() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    store.source().fail_canteens(true);
    store.source().clear_calls();

    store.select_campus(2).await;

    assert_eq!(store.source().calls(), vec![Call::Canteens(2)]);
    assert_eq!(store.error(), Some("failed to load canteen list"));
    assert!(!store.canteen_loading());
    assert_eq!(store.selected_campus_id(), Some(2));
    // lists from the previous selection are left as they were
    assert_eq!(store.campus_list().len(), 2);
    assert_eq!(store.canteen_list().len(), 2);
    assert_eq!(store.floor_list().len(), 2);
    assert_eq!(store.dish_list().len(), 2);
}

#[tokio::test]
async fn test_floor_failure_halts_cascade() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    store.source().fail_floors(true);
    store.source().clear_calls();

    store.select_canteen(11).await;

    assert_eq!(store.source().calls(), vec![Call::Floors(11)]);
    assert_eq!(store.error(), Some("failed to load floor list"));
    assert!(!store.floor_loading());
    assert_eq!(store.selected_canteen_id(), Some(11));
    assert_eq!(store.selected_floor_id(), None);
    assert_eq!(store.canteen_list().len(), 2);
    assert_eq!(store.floor_list().len(), 2);
    assert_eq!(store.dish_list().len(), 2);
}

#[tokio::test]
async fn test_dish_failure_keeps_selection_and_list() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;
    assert_eq!(store.dish_list().len(), 2);

    store.source().fail_dishes(true);
    store.select_floor(101).await;

    assert_eq!(store.selected_floor_id(), Some(101));
    assert_eq!(store.dish_list().len(), 2);
    assert_eq!(store.error(), Some("菜品服务不可用"));
    assert!(!store.loading());
}

#[tokio::test]
async fn test_next_fetch_clears_error() {
    let mut store = DishStore::new(catalog());
    store.source().fail_dishes(true);
    store.fetch_campus_list().await;
    assert!(store.error().is_some());
    assert!(!store.floor_loading());

    store.source().fail_dishes(false);
    store.change_page(2).await;
    assert!(store.error().is_none());
    assert_eq!(store.dish_list().len(), 2);
}

#[tokio::test]
async fn test_clear_lists() {
    let mut store = DishStore::new(catalog());
    store.fetch_campus_list().await;

    store.clear_floor_list();
    store.clear_canteen_list();

    assert!(store.floor_list().is_empty());
    assert!(store.canteen_list().is_empty());
    assert_eq!(store.selected_floor_id(), None);
    assert_eq!(store.selected_canteen_id(), None);
    assert_eq!(store.selected_campus_id(), Some(1));
}

#[tokio::test]
async fn test_custom_page_size() {
    let mut store = DishStore::new(catalog()).with_page_size(20);
    store.fetch_campus_list().await;
    let query = store.dish_query();
    assert_eq!(query.page_size, Some(20));
    assert_eq!(query.page, Some(1));
}
