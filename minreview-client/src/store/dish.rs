//! Cascading location selection and the dish list it scopes
//!
//! Dishes are browsed by physical location: campus → canteen → floor. The
//! store keeps one selection per level and the lists those selections
//! produce. Changing a level resets everything below it, auto-selects the
//! first child of each refetched level and finally refetches the dish page,
//! so the screen always shows a complete "current location".
//!
//! A canteen without floors skips the floor level: the dish list is fetched
//! with only campus and canteen filters.
//!
//! Failures halt the cascade where they happen. Lists of other levels are
//! left as they were and the message lands in the single shared `error`
//! slot (last error wins). Overlapping calls are not sequenced: whichever
//! response is applied last wins.

use async_trait::async_trait;
use shared::models::{Campus, Canteen, Dish, Floor};
use shared::{DEFAULT_PAGE_SIZE, DishQuery, PageResult};

use crate::api::UserApi;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

const CAMPUS_LIST_FAILED: &str = "failed to load campus list";
const CANTEEN_LIST_FAILED: &str = "failed to load canteen list";
const FLOOR_LIST_FAILED: &str = "failed to load floor list";
const DISH_LIST_FAILED: &str = "failed to load dish list";

/// Where the store loads its lists from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_campuses(&self) -> ClientResult<Vec<Campus>>;
    async fn load_canteens(&self, campus_id: i64) -> ClientResult<Vec<Canteen>>;
    async fn load_floors(&self, canteen_id: i64) -> ClientResult<Vec<Floor>>;
    async fn load_dishes(&self, query: &DishQuery) -> ClientResult<PageResult<Dish>>;
}

#[async_trait]
impl<C: HttpClient> CatalogSource for UserApi<C> {
    async fn load_campuses(&self) -> ClientResult<Vec<Campus>> {
        self.campus_list().await
    }

    async fn load_canteens(&self, campus_id: i64) -> ClientResult<Vec<Canteen>> {
        self.canteen_list(campus_id).await
    }

    async fn load_floors(&self, canteen_id: i64) -> ClientResult<Vec<Floor>> {
        self.floor_list(canteen_id).await
    }

    async fn load_dishes(&self, query: &DishQuery) -> ClientResult<PageResult<Dish>> {
        self.dish_list(query).await
    }
}

/// Cascading selection store
#[derive(Debug)]
pub struct DishStore<S> {
    source: S,

    campus_list: Vec<Campus>,
    canteen_list: Vec<Canteen>,
    floor_list: Vec<Floor>,
    dish_list: Vec<Dish>,
    total: u64,
    current_page: u32,
    page_size: u32,

    selected_campus_id: Option<i64>,
    selected_canteen_id: Option<i64>,
    selected_floor_id: Option<i64>,

    loading: bool,
    campus_loading: bool,
    canteen_loading: bool,
    floor_loading: bool,
    error: Option<String>,
}

impl<S: CatalogSource> DishStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            campus_list: Vec::new(),
            canteen_list: Vec::new(),
            floor_list: Vec::new(),
            dish_list: Vec::new(),
            total: 0,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selected_campus_id: None,
            selected_canteen_id: None,
            selected_floor_id: None,
            loading: false,
            campus_loading: false,
            canteen_loading: false,
            floor_loading: false,
            error: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    // ========== Actions ==========

    /// Load all campuses. Selects the first one (and cascades) only when
    /// nothing is selected yet.
    pub async fn fetch_campus_list(&mut self) {
        self.campus_loading = true;
        self.error = None;

        let result = self.source.load_campuses().await;
        self.campus_loading = false;

        match result {
            Ok(list) => {
                self.campus_list = list;
                if self.selected_campus_id.is_none()
                    && let Some(first) = self.campus_list.first()
                {
                    let campus_id = first.id;
                    self.fetch_canteen_list(campus_id).await;
                }
            }
            Err(e) => self.record_failure(&e, CAMPUS_LIST_FAILED),
        }
    }

    /// Select `campus_id` and load its canteens
    pub async fn fetch_canteen_list(&mut self, campus_id: i64) {
        self.canteen_loading = true;
        self.error = None;
        self.selected_campus_id = Some(campus_id);
        self.selected_canteen_id = None;
        self.selected_floor_id = None;

        let result = self.source.load_canteens(campus_id).await;
        self.canteen_loading = false;

        match result {
            Ok(list) => {
                self.canteen_list = list;
                match self.canteen_list.first() {
                    Some(first) => {
                        let canteen_id = first.id;
                        self.selected_canteen_id = Some(canteen_id);
                        self.fetch_floor_list(canteen_id).await;
                    }
                    None => {
                        self.floor_list.clear();
                        self.fetch_dish_list(1).await;
                    }
                }
            }
            Err(e) => self.record_failure(&e, CANTEEN_LIST_FAILED),
        }
    }

    /// Select `canteen_id`, load its floors, then refetch dishes
    pub async fn fetch_floor_list(&mut self, canteen_id: i64) {
        self.floor_loading = true;
        self.error = None;
        self.selected_canteen_id = Some(canteen_id);
        self.selected_floor_id = None;

        let result = self.source.load_floors(canteen_id).await;
        self.floor_loading = false;

        match result {
            Ok(list) => {
                self.floor_list = list;
                self.selected_floor_id = self.floor_list.first().map(|f| f.id);
                self.fetch_dish_list(1).await;
            }
            Err(e) => self.record_failure(&e, FLOOR_LIST_FAILED),
        }
    }

    /// Load one page of dishes under the current selection
    pub async fn fetch_dish_list(&mut self, page: u32) {
        self.loading = true;
        self.error = None;
        self.current_page = page;

        let query = self.dish_query();
        tracing::debug!(?query, "Fetching dish list");
        let result = self.source.load_dishes(&query).await;
        self.loading = false;

        match result {
            Ok(dishes) => {
                self.dish_list = dishes.list;
                self.total = dishes.total;
            }
            Err(e) => self.record_failure(&e, DISH_LIST_FAILED),
        }
    }

    pub async fn select_campus(&mut self, campus_id: i64) {
        if self.selected_campus_id != Some(campus_id) {
            self.fetch_canteen_list(campus_id).await;
        }
    }

    pub async fn select_canteen(&mut self, canteen_id: i64) {
        if self.selected_canteen_id != Some(canteen_id) {
            self.fetch_floor_list(canteen_id).await;
        }
    }

    pub async fn select_floor(&mut self, floor_id: i64) {
        if self.selected_floor_id != Some(floor_id) {
            self.selected_floor_id = Some(floor_id);
            self.fetch_dish_list(1).await;
        }
    }

    pub async fn change_page(&mut self, page: u32) {
        self.fetch_dish_list(page).await;
    }

    pub fn clear_canteen_list(&mut self) {
        self.canteen_list.clear();
        self.selected_canteen_id = None;
    }

    pub fn clear_floor_list(&mut self) {
        self.floor_list.clear();
        self.selected_floor_id = None;
    }

    /// Dish filter for the current selection. Unselected levels are left
    /// out rather than defaulted.
    pub fn dish_query(&self) -> DishQuery {
        DishQuery {
            campus_id: self.selected_campus_id,
            canteen_id: self.selected_canteen_id,
            floor_id: self.selected_floor_id,
            ..DishQuery::page(self.current_page, self.page_size)
        }
    }

    fn record_failure(&mut self, err: &ClientError, fallback: &str) {
        tracing::error!(error = %err, "{}", fallback);
        let message = err.server_message().unwrap_or(fallback);
        self.error = Some(message.to_string());
    }

    // ========== State ==========

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn campus_list(&self) -> &[Campus] {
        &self.campus_list
    }

    pub fn canteen_list(&self) -> &[Canteen] {
        &self.canteen_list
    }

    pub fn floor_list(&self) -> &[Floor] {
        &self.floor_list
    }

    pub fn dish_list(&self) -> &[Dish] {
        &self.dish_list
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn selected_campus_id(&self) -> Option<i64> {
        self.selected_campus_id
    }

    pub fn selected_canteen_id(&self) -> Option<i64> {
        self.selected_canteen_id
    }

    pub fn selected_floor_id(&self) -> Option<i64> {
        self.selected_floor_id
    }

    /// Dish list loading
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn campus_loading(&self) -> bool {
        self.campus_loading
    }

    pub fn canteen_loading(&self) -> bool {
        self.canteen_loading
    }

    pub fn floor_loading(&self) -> bool {
        self.floor_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_campus(&self) -> Option<&Campus> {
        let id = self.selected_campus_id?;
        self.campus_list.iter().find(|c| c.id == id)
    }

    pub fn selected_canteen(&self) -> Option<&Canteen> {
        let id = self.selected_canteen_id?;
        self.canteen_list.iter().find(|c| c.id == id)
    }

    pub fn selected_floor(&self) -> Option<&Floor> {
        let id = self.selected_floor_id?;
        self.floor_list.iter().find(|f| f.id == id)
    }
}
