//! Navigation shell - owns the page registry and the current-page state
//!
//! All visible-page transitions go through [`NavigationShell::navigate_to`].
//! Transitions are synchronous and happen on the UI loop, one at a time.

use super::{Element, Page, PageId};

/// Visual state of one navigation control (a tab in the nav bar)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControl {
    pub page: PageId,
    pub label: String,
    pub active: bool,
}

/// Which page is active. `None` until the first navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Option<PageId>,
}

/// The display surface page content is attached to. Holds at most one page.
#[derive(Debug, Default)]
struct ContentSlot {
    attached: Option<PageId>,
}

impl ContentSlot {
    fn attach(&mut self, id: PageId) {
        debug_assert!(self.attached.is_none(), "content slot already occupied");
        self.attached = Some(id);
    }

    fn detach(&mut self) -> Option<PageId> {
        self.attached.take()
    }
}

struct Entry {
    id: PageId,
    page: Box<dyn Page>,
}

/// Single-window page navigation shell
pub struct NavigationShell {
    app_title: String,
    pages: Vec<Entry>,
    controls: Vec<NavControl>,
    state: NavigationState,
    slot: ContentSlot,
}

impl NavigationShell {
    pub fn new(app_title: impl Into<String>) -> Self {
        Self {
            app_title: app_title.into(),
            pages: Vec::new(),
            controls: Vec::new(),
            state: NavigationState::default(),
            slot: ContentSlot::default(),
        }
    }

    /// Add a page to the registry and append its navigation control.
    ///
    /// # Panics
    /// If `id` is already registered. Registering twice is a wiring bug.
    pub fn register(&mut self, id: PageId, page: Box<dyn Page>) {
        assert!(
            !self.contains(&id),
            "page '{}' registered twice",
            id.as_str()
        );

        self.controls.push(NavControl {
            page: id.clone(),
            label: page.title().to_string(),
            active: false,
        });
        self.pages.push(Entry { id, page });
    }

    /// Builder-style `register`
    pub fn with_page(mut self, id: PageId, page: impl Page + 'static) -> Self {
        self.register(id, Box::new(page));
        self
    }

    pub fn contains(&self, id: &PageId) -> bool {
        self.index_of(id).is_some()
    }

    fn index_of(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|entry| &entry.id == id)
    }

    /// Show the page named `id`.
    ///
    /// Unknown ids are ignored and `false` is returned; nothing observable
    /// changes. Navigating to the current page runs the full hide/show cycle,
    /// which is how a page gets refreshed on re-visit.
    pub fn navigate_to(&mut self, id: &PageId) -> bool {
        let Some(next) = self.index_of(id) else {
            tracing::debug!("Ignoring navigation to unknown page '{}'", id);
            return false;
        };

        if let Some(current) = self.current_index() {
            self.pages[current].page.on_hide();
            self.slot.detach();
        }

        let entry = &mut self.pages[next];
        entry.page.on_show();
        self.slot.attach(entry.id.clone());
        self.state.current = Some(entry.id.clone());

        for control in &mut self.controls {
            control.active = &control.page == id;
        }

        tracing::debug!("Navigated to '{}'", id);
        true
    }

    /// Navigate to the control at `index` (registration order)
    pub fn navigate_index(&mut self, index: usize) -> bool {
        match self.controls.get(index) {
            Some(control) => {
                let id = control.page.clone();
                self.navigate_to(&id)
            }
            None => false,
        }
    }

    /// Navigate to the next control, wrapping around
    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    /// Navigate to the previous control, wrapping around
    pub fn prev(&mut self) -> bool {
        self.step(self.controls.len().saturating_sub(1))
    }

    fn step(&mut self, offset: usize) -> bool {
        let len = self.controls.len();
        if len == 0 {
            return false;
        }
        let target = match self.current_index() {
            Some(i) => (i + offset) % len,
            None => 0,
        };
        self.navigate_index(target)
    }

    fn current_index(&self) -> Option<usize> {
        self.state.current.as_ref().and_then(|id| self.index_of(id))
    }

    #[cfg(test)]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current(&self) -> Option<&PageId> {
        self.state.current.as_ref()
    }

    pub fn current_page(&self) -> Option<&dyn Page> {
        let index = self.current_index()?;
        Some(self.pages[index].page.as_ref())
    }

    pub fn current_page_mut(&mut self) -> Option<&mut (dyn Page + 'static)> {
        let index = self.current_index()?;
        Some(self.pages[index].page.as_mut())
    }

    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }

    /// Ids in registration order
    pub fn page_ids(&self) -> impl Iterator<Item = &PageId> {
        self.pages.iter().map(|entry| &entry.id)
    }

    /// Content currently attached to the display (empty before first navigation)
    pub fn visible_content(&self) -> &[Element] {
        self.slot
            .attached
            .as_ref()
            .and_then(|id| self.index_of(id))
            .map(|i| self.pages[i].page.content())
            .unwrap_or(&[])
    }

    /// Window title: "{app} - {page}" once a page is showing
    pub fn title(&self) -> String {
        match self.current_page() {
            Some(page) => format!("{} - {}", self.app_title, page.title()),
            None => self.app_title.clone(),
        }
    }
}
