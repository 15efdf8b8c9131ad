// Render components
//
// Each module exposes a `render(f, area, app)` function (or a widget type
// for overlays) and owns nothing but layout decisions.

pub mod content;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
