//! Application catalog domain module
//!
//! The `applications` capability returns heterogeneous data: a wrapped list,
//! a plain list of records, pairs or names, or a free-form text block. This
//! module turns any of those into uniform [`Application`] records and picks
//! the one a question is about.
//!
//! ```text
//! raw JSON ──▶ RawCatalog ──▶ CatalogEntry* ──▶ Vec<Application> ──▶ ApplicationChoice
//!              (classify)     (classify)         (normalize)          (select)
//! ```

pub mod entities;
pub mod normalize;
pub mod selection;

pub use entities::{APP_ID_KEYS, Application, normalize_app_id};
pub use normalize::{CatalogEntry, RawCatalog, normalize_applications, parse_text_block};
pub use selection::{ApplicationChoice, SelectionMethod, match_key, select_application};
