//! Page routing tables
//!
//! Maps URL paths to views and applies the navigation guards. Guards only
//! look at whether a token is persisted; they never validate it. The server
//! decides that on the next request.
//!
//! Three tables exist:
//! - [`Router::app`]: user site + back-office in one table, the one the
//!   application mounts.
//! - [`Router::user`]: the standalone user site, where everything except
//!   login/register requires a token.
//! - [`Router::admin`]: the standalone back-office, unguarded, with
//!   `"{title} - MinReview 后台管理"` page titles.

use std::collections::HashMap;

use crate::storage::{ADMIN_TOKEN_KEY, KeyValueStorage, StorageExt, USER_TOKEN_KEY};

/// Back-office page title suffix
pub const ADMIN_SITE_TITLE: &str = "MinReview 后台管理";

pub const USER_LOGIN_PATH: &str = "/login";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Redirect chains longer than this are treated as a misconfigured table
const MAX_REDIRECTS: usize = 8;

/// Every page of the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
    DishDetail,
    Profile,
    AdminLogin,
    AdminDashboard,
    UserManagement,
    CampusManagement,
    CanteenManagement,
    FloorManagement,
    DishManagement,
    CommentManagement,
    AdminManagement,
}

/// What a route does when matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

/// One routing table entry
#[derive(Debug, Clone)]
pub struct Route {
    /// Absolute (`/admin/users`) or, for children, relative to the parent (`users`)
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
    pub title: Option<&'static str>,
    pub requires_auth: bool,
    pub children: Vec<Route>,
}

impl Route {
    pub fn view(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name: Some(name),
            target: RouteTarget::View(view),
            title: None,
            requires_auth: false,
            children: Vec::new(),
        }
    }

    pub fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            target: RouteTarget::Redirect(to),
            title: None,
            requires_auth: false,
            children: Vec::new(),
        }
    }

    pub fn titled(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    pub fn view_kind(&self) -> Option<View> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

/// Result of resolving a path
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation<'r> {
    Render {
        /// Matched chain, outermost first; the last entry is the page itself
        matched: Vec<&'r Route>,
        params: HashMap<String, String>,
        /// Document title to set, `None` leaves it unchanged
        title: Option<String>,
    },
    Redirect(String),
}

impl<'r> Navigation<'r> {
    /// The page that ends up rendered, if any
    pub fn view(&self) -> Option<View> {
        match self {
            Navigation::Render { matched, .. } => matched.last().and_then(|r| r.view_kind()),
            Navigation::Redirect(_) => None,
        }
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.name == other.name && self.target == other.target
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    /// `/admin*` pages need the admin token; `requires_auth` pages, back-office
    /// ones included, also need the user token
    App,
    /// Everything but login/register needs the user token
    UserOnly,
    /// No checks, titles get the back-office suffix
    AdminTitles,
}

/// A routing table plus its guard
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    guard: Guard,
    /// Flattened (full path, matched chain as indices) in declaration order
    table: Vec<(Vec<Segment>, Vec<usize>)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    /// `:name(.*)*`, swallows the rest of the path
    CatchAll(String),
}

fn user_routes() -> Vec<Route> {
    vec![
        Route::view("/", "Home", View::Home),
        Route::view("/login", "UserLogin", View::Login),
        Route::view("/register", "Register", View::Register),
        Route::view("/dish/:id", "DishDetail", View::DishDetail),
        Route::view("/profile", "Profile", View::Profile).auth(),
    ]
}

fn management_routes(absolute: bool) -> Vec<Route> {
    let pages: [(&'static str, &'static str, &'static str, View, &'static str); 7] = [
        ("/admin/users", "users", "UserManagement", View::UserManagement, "用户管理"),
        ("/admin/campus", "campuses", "CampusManagement", View::CampusManagement, "校区管理"),
        ("/admin/canteens", "canteens", "CanteenManagement", View::CanteenManagement, "食堂管理"),
        ("/admin/floors", "floors", "FloorManagement", View::FloorManagement, "楼层管理"),
        ("/admin/dishes", "dishes", "DishManagement", View::DishManagement, "菜品管理"),
        ("/admin/comments", "comments", "CommentManagement", View::CommentManagement, "评论管理"),
        ("/admin/admins", "admins", "AdminManagement", View::AdminManagement, "管理员管理"),
    ];
    pages
        .into_iter()
        .map(|(abs, rel, name, view, title)| {
            let route = Route::view(if absolute { abs } else { rel }, name, view).titled(title);
            if absolute { route.auth() } else { route }
        })
        .collect()
}

impl Router {
    /// Combined user + back-office table
    pub fn app() -> Self {
        let mut routes = user_routes();
        routes.extend([
            Route::view("/admin/login", "AdminLogin", View::AdminLogin).titled("管理员登录"),
            Route::redirect("/admin", "/admin/dashboard"),
            Route::view("/admin/dashboard", "AdminDashboard", View::AdminDashboard)
                .titled("管理后台")
                .auth()
                .with_children(management_routes(true)),
            Route::redirect("/:pathMatch(.*)*", "/"),
        ]);
        Self::new(routes, Guard::App)
    }

    /// Standalone user site table
    pub fn user() -> Self {
        let mut routes = user_routes();
        for route in &mut routes {
            if route.view_kind() == Some(View::Login) {
                route.name = Some("Login");
            }
        }
        Self::new(routes, Guard::UserOnly)
    }

    /// Standalone back-office table
    pub fn admin() -> Self {
        let routes = vec![
            Route::view("/admin/login", "AdminLogin", View::AdminLogin).titled("管理员登录"),
            Route::view("/admin", "AdminDashboard", View::AdminDashboard)
                .titled("管理后台")
                .with_children(management_routes(false)),
        ];
        Self::new(routes, Guard::AdminTitles)
    }

    fn new(routes: Vec<Route>, guard: Guard) -> Self {
        let mut table = Vec::new();
        for (i, route) in routes.iter().enumerate() {
            flatten(route, "", vec![i], &mut table);
        }
        Self {
            routes,
            guard,
            table,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find a route by name, searching children too
    pub fn find(&self, name: &str) -> Option<&Route> {
        self.table
            .iter()
            .map(|(_, chain)| self.chain(chain))
            .filter_map(|chain| chain.last().copied())
            .find(|r| r.name == Some(name))
    }

    fn chain(&self, indices: &[usize]) -> Vec<&Route> {
        let mut out = Vec::with_capacity(indices.len());
        let mut level = &self.routes;
        for &i in indices {
            let route = &level[i];
            out.push(route);
            level = &route.children;
        }
        out
    }

    fn match_path(&self, path: &str) -> Option<(Vec<&Route>, HashMap<String, String>)> {
        let segments = split_path(path);
        self.table.iter().find_map(|(pattern, chain)| {
            match_segments(pattern, &segments).map(|params| (self.chain(chain), params))
        })
    }

    /// Resolve a navigation to `path`, following redirects and applying
    /// the guard. Unknown paths on tables without a catch-all render
    /// nothing and yield `None`.
    pub fn resolve(&self, path: &str, storage: &dyn KeyValueStorage) -> Option<Navigation<'_>> {
        let mut current = strip_query(path).to_string();
        let mut redirected = false;

        for _ in 0..MAX_REDIRECTS {
            let (matched, params) = self.match_path(&current)?;
            let leaf = *matched.last()?;

            if let RouteTarget::Redirect(to) = leaf.target {
                current = to.to_string();
                redirected = true;
                continue;
            }

            if let Some(login) = self.guard_redirect(&current, leaf, storage) {
                tracing::debug!(from = %current, to = %login, "Navigation blocked by guard");
                return Some(Navigation::Redirect(login.to_string()));
            }

            if redirected {
                return Some(Navigation::Redirect(current));
            }

            let title = self.title_for(leaf);
            return Some(Navigation::Render {
                matched,
                params,
                title,
            });
        }

        tracing::warn!(path = %path, "Redirect loop in routing table");
        None
    }

    fn guard_redirect(
        &self,
        path: &str,
        leaf: &Route,
        storage: &dyn KeyValueStorage,
    ) -> Option<&'static str> {
        let has = |key: &str| storage.get_non_empty(key).is_some();
        match self.guard {
            Guard::App => {
                // Admin session first, then the user session for auth routes
                let admin_page = path.starts_with("/admin")
                    && leaf.view_kind() != Some(View::AdminLogin);
                if admin_page && !has(ADMIN_TOKEN_KEY) {
                    return Some(ADMIN_LOGIN_PATH);
                }
                (leaf.requires_auth && !has(USER_TOKEN_KEY)).then_some(USER_LOGIN_PATH)
            }
            Guard::UserOnly => {
                let open = matches!(leaf.view_kind(), Some(View::Login | View::Register));
                if !open && !has(USER_TOKEN_KEY) {
                    Some(USER_LOGIN_PATH)
                } else {
                    None
                }
            }
            Guard::AdminTitles => None,
        }
    }

    fn title_for(&self, leaf: &Route) -> Option<String> {
        match self.guard {
            Guard::AdminTitles => Some(match leaf.title {
                Some(title) => format!("{} - {}", title, ADMIN_SITE_TITLE),
                None => ADMIN_SITE_TITLE.to_string(),
            }),
            _ => leaf.title.map(str::to_string),
        }
    }
}

fn flatten(
    route: &Route,
    parent: &str,
    chain: Vec<usize>,
    out: &mut Vec<(Vec<Segment>, Vec<usize>)>,
) {
    let full = if route.path.starts_with('/') {
        route.path.to_string()
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), route.path)
    };
    // Children first so "/admin/users" wins over a catch-all parent
    for (i, child) in route.children.iter().enumerate() {
        let mut child_chain = chain.clone();
        child_chain.push(i);
        flatten(child, &full, child_chain, out);
    }
    out.push((parse_pattern(&full), chain));
}

fn parse_pattern(path: &str) -> Vec<Segment> {
    split_path(path)
        .into_iter()
        .map(|seg| match seg.strip_prefix(':') {
            Some(rest) => match rest.find('(') {
                Some(pos) if rest.ends_with('*') => Segment::CatchAll(rest[..pos].to_string()),
                _ => Segment::Param(rest.to_string()),
            },
            None => Segment::Literal(seg.to_string()),
        })
        .collect()
}

fn match_segments(pattern: &[Segment], path: &[&str]) -> Option<HashMap<String, String>> {
    let mut params = HashMap::new();
    for (i, seg) in pattern.iter().enumerate() {
        match seg {
            Segment::CatchAll(name) => {
                params.insert(name.clone(), path.get(i..).unwrap_or_default().join("/"));
                return Some(params);
            }
            Segment::Literal(lit) => {
                if path.get(i) != Some(&lit.as_str()) {
                    return None;
                }
            }
            Segment::Param(name) => {
                let value = path.get(i)?;
                params.insert(name.clone(), value.to_string());
            }
        }
    }
    (pattern.len() == path.len()).then_some(params)
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
