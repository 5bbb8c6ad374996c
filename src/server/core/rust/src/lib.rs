/* src/server/core/rust/src/lib.rs */

//! Core of the Fearless Gaming site: content catalogs, translations, the
//! per-visitor locale broadcast and page rendering. Framework-agnostic;
//! adapter crates turn [`SiteParts`] into an HTTP router.

pub mod broadcast;
pub mod catalog;
pub mod content;
pub mod errors;
pub mod i18n;
pub mod locale;
pub mod navigation;
pub mod page;
pub mod pages;
pub mod render;
pub mod resolve;
pub mod server;
pub mod session;

// Re-exports for ergonomic use
pub use broadcast::{LocaleStore, LocaleWatch, Subscription};
pub use catalog::{Catalog, ContentItem, DetailMissPolicy, Lookup, parse_route_id};
pub use content::Content;
pub use errors::SiteError;
pub use i18n::{TranslationTable, Translations};
pub use locale::LocaleCode;
pub use navigation::{RouteParams, match_route, navigate_to_detail};
pub use page::{PageContext, PageData, PageDef, PageLoader};
pub use pages::site_pages;
pub use render::{Renderer, SITE_NAME};
pub use resolve::{
  ResolveData, ResolveStrategy, default_strategies, from_session, from_url_query, resolve_chain,
};
pub use server::{SiteParts, SiteServer};
pub use session::{SESSION_COOKIE, Session, SessionRegistry, session_cookie, session_id_from_cookie};
