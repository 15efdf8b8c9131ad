/// Responsive breakpoints for layout decisions.
///
/// Single source of truth for width thresholds.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: only the active tab, no key hints
    Compact,
    /// 60-119 cols: tab labels, page hint only
    Normal,
    /// 120+ cols: numbered tabs, page and global hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}
