use std::collections::BTreeMap;

use crate::{
    clock::updater::ClockUpdater,
    dom::document::{Document, ElementId},
    host::page::Page,
    site::{
        component::Component,
        config::{NavIcon, NavLink},
    },
};

/// Top bar: logo, brand, link list, icon list and the live clock.
pub struct Navbar {
    brand: String,
    logo: String,
    links: Vec<NavLink>,
    icons: Vec<NavIcon>,
    mounted: Option<Mounted>,
}

struct Mounted {
    root: ElementId,
    link_list: ElementId,
    icon_list: ElementId,
    clock: ClockUpdater,
}

impl Navbar {
    /// Unmounted navbar.
    pub fn new(
        brand: impl Into<String>,
        logo: impl Into<String>,
        links: Vec<NavLink>,
        icons: Vec<NavIcon>,
    ) -> Self {
        Self {
            brand: brand.into(),
            logo: logo.into(),
            links,
            icons,
            mounted: None,
        }
    }

    /// Replace the links; shown on the next render.
    pub fn set_links(&mut self, links: Vec<NavLink>) {
        self.links = links;
    }

    /// Replace the icons; shown on the next render.
    pub fn set_icons(&mut self, icons: Vec<NavIcon>) {
        self.icons = icons;
    }

    /// The clock updater while mounted.
    pub fn clock(&self) -> Option<&ClockUpdater> {
        self.mounted.as_ref().map(|m| &m.clock)
    }

    /// Currently displayed timestamp.
    pub fn displayed_time<'a>(&self, page: &'a Page) -> Option<&'a str> {
        let m = self.mounted.as_ref()?;
        page.doc().text(m.clock.display())
    }

    fn fill_lists(&self, page: &mut Page, link_list: ElementId, icon_list: ElementId) {
        let doc = page.doc_mut();

        let items = reconcile(doc, link_list, self.links.iter().map(|l| l.id));
        for (link, li) in self.links.iter().zip(items) {
            let p = match doc.children(li).first() {
                Some(&p) => p,
                None => doc.append_new(li, "p"),
            };
            doc.set_text(p, link.label.clone());
        }

        let items = reconcile(doc, icon_list, self.icons.iter().map(|i| i.id));
        for (icon, li) in self.icons.iter().zip(items) {
            let img = match doc.children(li).first() {
                Some(&img) => img,
                None => {
                    let img = doc.append_new(li, "img");
                    doc.set_class(img, Some("font-bold"));
                    img
                }
            };
            doc.set_attr(img, "src", icon.icon.clone());
            doc.set_attr(img, "alt", format!("icon-{}", icon.id));
        }
    }
}

/// Bring `list`'s `<li>` children in line with `ids`, reusing items whose
/// key matches and freeing the rest. Returns the items in `ids` order.
fn reconcile(
    doc: &mut Document,
    list: ElementId,
    ids: impl Iterator<Item = u32>,
) -> Vec<ElementId> {
    let mut existing: BTreeMap<String, ElementId> = doc
        .children(list)
        .iter()
        .filter_map(|&li| doc.key(li).map(|k| (k.to_string(), li)))
        .collect();

    let mut out = Vec::new();
    for id in ids {
        let key = id.to_string();
        let li = match existing.remove(&key) {
            Some(li) => {
                // Re-appending moves the item into its new position.
                doc.append_child(list, li);
                li
            }
            None => {
                let li = doc.append_new(list, "li");
                doc.set_key(li, key);
                li
            }
        };
        out.push(li);
    }
    for stale in existing.into_values() {
        doc.remove(stale);
    }
    out
}

impl Component for Navbar {
    fn mount(&mut self, page: &mut Page, parent: ElementId) -> ElementId {
        if let Some(m) = &self.mounted {
            return m.root;
        }

        let doc = page.doc_mut();
        let nav = doc.append_new(parent, "nav");

        let left = doc.append_new(nav, "div");
        let logo = doc.append_new(left, "img");
        doc.set_attr(logo, "src", self.logo.clone());
        doc.set_attr(logo, "alt", "logo");
        let brand = doc.append_new(left, "p");
        doc.set_class(brand, Some("font-bold"));
        doc.set_text(brand, self.brand.clone());
        let link_list = doc.append_new(left, "ul");

        let right = doc.append_new(nav, "div");
        let icon_list = doc.append_new(right, "ul");
        let time = doc.append_new(right, "time");

        self.fill_lists(page, link_list, icon_list);

        let mut clock = ClockUpdater::new(time);
        clock.start(page);
        tracing::debug!(
            links = self.links.len(),
            icons = self.icons.len(),
            "navbar mounted"
        );

        self.mounted = Some(Mounted {
            root: nav,
            link_list,
            icon_list,
            clock,
        });
        nav
    }

    fn rerender(&mut self, page: &mut Page) {
        let Some(m) = &self.mounted else {
            return;
        };
        self.fill_lists(page, m.link_list, m.icon_list);
        m.clock.redraw(page);
    }

    fn unmount(&mut self, page: &mut Page) {
        let Some(mut m) = self.mounted.take() else {
            return;
        };
        m.clock.stop(page);
        page.doc_mut().remove(m.root);
        tracing::debug!("navbar unmounted");
    }

    fn root(&self) -> Option<ElementId> {
        self.mounted.as_ref().map(|m| m.root)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/navbar.rs"]
mod tests;
