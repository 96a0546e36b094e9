use crate::{
    dom::{document::ElementId, markup::to_html},
    foundation::core::Point,
    host::page::Page,
    site::{
        component::Component, config::SiteConfig, dock::Dock, navbar::Navbar, welcome::Welcome,
    },
};

/// Height reserved for the navbar above the welcome section, in px.
pub const NAVBAR_HEIGHT: f64 = 40.0;

/// Root composition: `<main>` holding the navbar, the welcome section and
/// the dock, in that order.
pub struct App {
    /// Top bar.
    pub navbar: Navbar,
    /// Hover-animated welcome section.
    pub welcome: Welcome,
    /// Dock placeholder.
    pub dock: Dock,
    root: Option<ElementId>,
}

impl App {
    /// Unmounted app built from `config`.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            navbar: Navbar::new(
                config.brand.clone(),
                config.logo.clone(),
                config.nav_links.clone(),
                config.nav_icons.clone(),
            ),
            welcome: Welcome::new(
                config.subtitle.clone(),
                config.title.clone(),
                config.title_heading_class.clone(),
                config.title_gap,
            )
            .with_origin(Point::new(0.0, NAVBAR_HEIGHT)),
            dock: Dock::default(),
            root: None,
        }
    }

    /// Mount under the page's `body`.
    pub fn mount_in(&mut self, page: &mut Page) -> ElementId {
        let body = page.doc().body();
        self.mount(page, body)
    }

    /// Whether the app is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// HTML of the mounted `<main>`, `None` while unmounted.
    pub fn html(&self, page: &Page) -> Option<String> {
        self.root.map(|root| to_html(page.doc(), root))
    }
}

impl Component for App {
    fn mount(&mut self, page: &mut Page, parent: ElementId) -> ElementId {
        if let Some(root) = self.root {
            return root;
        }
        let main = page.doc_mut().append_new(parent, "main");
        self.navbar.mount(page, main);
        self.welcome.mount(page, main);
        self.dock.mount(page, main);
        tracing::debug!(root = main.index(), "app mounted");
        self.root = Some(main);
        main
    }

    fn rerender(&mut self, page: &mut Page) {
        if self.root.is_none() {
            return;
        }
        self.navbar.rerender(page);
        self.welcome.rerender(page);
        self.dock.rerender(page);
    }

    fn unmount(&mut self, page: &mut Page) {
        let Some(root) = self.root.take() else {
            return;
        };
        self.dock.unmount(page);
        self.welcome.unmount(page);
        self.navbar.unmount(page);
        page.doc_mut().remove(root);
        tracing::debug!(root = root.index(), "app unmounted");
    }

    fn root(&self) -> Option<ElementId> {
        self.root
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/app.rs"]
mod tests;
