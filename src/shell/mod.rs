//! Page navigation shell
//!
//! ```text
//!  NavigationShell
//!  ├── registry:  PageId -> Box<dyn Page>   (registration order = tab order)
//!  ├── state:     current: Option<PageId>
//!  ├── controls:  [NavControl { active }]   (exactly one active after first navigate)
//!  └── slot:      attached page content
//! ```
//!
//! Pages are created once and live until exit; navigation only runs their
//! `on_hide`/`on_show` hooks and swaps which content is attached.

mod element;
mod navigation;
mod page;

pub use element::{to_plain_text, Element};
pub use navigation::{NavControl, NavigationShell};
pub use page::{Dialog, Page, PageAction, PageId};
