use crate::{
    dom::document::{Document, ElementId},
    foundation::core::{Point, Rect},
    host::page::Page,
    hover::session::{HoverConfig, HoverSession},
    site::{component::Component, config::TextBlockConfig},
    text::{
        layout::flow_line,
        split::{mount_glyphs, split_text},
    },
};

/// Which welcome line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// The `<p>` line.
    Subtitle,
    /// The `<h1>` line.
    Title,
}

/// One mounted hover line: its container, glyphs and session.
#[derive(Debug)]
pub struct TextBlock {
    kind: BlockKind,
    session: HoverSession,
}

impl TextBlock {
    /// Which line this is.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// The `<p>` or `<h1>` holding the glyphs.
    pub fn container(&self) -> Option<ElementId> {
        self.session.container()
    }

    /// Glyph spans in reading order.
    pub fn glyphs(&self) -> &[ElementId] {
        self.session.glyphs()
    }

    /// The line's hover session.
    pub fn session(&self) -> &HoverSession {
        &self.session
    }
}

/// `section#welcome`: a subtitle paragraph and a title heading, each split
/// into weight-animated glyphs.
pub struct Welcome {
    subtitle: TextBlockConfig,
    title: TextBlockConfig,
    heading_class: String,
    gap: f64,
    origin: Point,
    mounted: Option<Mounted>,
}

struct Mounted {
    root: ElementId,
    subtitle: TextBlock,
    title: TextBlock,
}

impl Welcome {
    /// Unmounted section; `gap` separates the two lines vertically.
    pub fn new(
        subtitle: TextBlockConfig,
        title: TextBlockConfig,
        heading_class: impl Into<String>,
        gap: f64,
    ) -> Self {
        Self {
            subtitle,
            title,
            heading_class: heading_class.into(),
            gap,
            origin: Point::ZERO,
            mounted: None,
        }
    }

    /// Top-left corner of the section in page coordinates.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// A mounted line.
    pub fn block(&self, kind: BlockKind) -> Option<&TextBlock> {
        let m = self.mounted.as_ref()?;
        Some(match kind {
            BlockKind::Subtitle => &m.subtitle,
            BlockKind::Title => &m.title,
        })
    }

    /// Lay both lines out again from `origin`.
    ///
    /// Hover sessions read geometry on every event, so an attached session
    /// follows the new positions immediately.
    pub fn relayout(&mut self, page: &mut Page, origin: Point) {
        self.origin = origin;
        if let Some(m) = &self.mounted {
            layout(page, m, &self.subtitle, &self.title, origin, self.gap);
        }
    }
}

fn mount_block(
    page: &mut Page,
    container: ElementId,
    kind: BlockKind,
    cfg: &TextBlockConfig,
) -> TextBlock {
    let glyphs = split_text(&cfg.text, Some(cfg.class.as_str()), cfg.range.default);
    let ids = mount_glyphs(page.doc_mut(), container, &glyphs);
    TextBlock {
        kind,
        session: HoverSession::new(HoverConfig::new(cfg.range), Some(container), ids),
    }
}

fn layout(
    page: &mut Page,
    m: &Mounted,
    subtitle: &TextBlockConfig,
    title: &TextBlockConfig,
    origin: Point,
    gap: f64,
) {
    let doc = page.doc_mut();
    let sub = lay_block(doc, &m.subtitle, subtitle, origin);
    let title_origin = Point::new(origin.x, sub.y1 + gap);
    let head = lay_block(doc, &m.title, title, title_origin);
    doc.set_rect(m.root, sub.union(head));
}

fn lay_block(
    doc: &mut Document,
    block: &TextBlock,
    cfg: &TextBlockConfig,
    origin: Point,
) -> Rect {
    match block.container() {
        Some(c) => flow_line(doc, c, block.glyphs(), origin, &cfg.metrics()),
        None => Rect::from_origin_size(origin, (0.0, 0.0)),
    }
}

impl Component for Welcome {
    fn mount(&mut self, page: &mut Page, parent: ElementId) -> ElementId {
        if let Some(m) = &self.mounted {
            return m.root;
        }

        let doc = page.doc_mut();
        let section = doc.append_new(parent, "section");
        doc.set_attr(section, "id", "welcome");
        let p = doc.append_new(section, "p");
        let h1 = doc.append_new(section, "h1");
        doc.set_class(h1, Some(self.heading_class.as_str()));

        let mut m = Mounted {
            root: section,
            subtitle: mount_block(page, p, BlockKind::Subtitle, &self.subtitle),
            title: mount_block(page, h1, BlockKind::Title, &self.title),
        };
        layout(page, &m, &self.subtitle, &self.title, self.origin, self.gap);

        m.title.session.attach(page);
        m.subtitle.session.attach(page);
        tracing::debug!(
            subtitle = m.subtitle.glyphs().len(),
            title = m.title.glyphs().len(),
            "welcome mounted"
        );

        self.mounted = Some(m);
        section
    }

    fn unmount(&mut self, page: &mut Page) {
        let Some(mut m) = self.mounted.take() else {
            return;
        };
        m.title.session.detach(page);
        m.subtitle.session.detach(page);
        page.doc_mut().remove(m.root);
        tracing::debug!("welcome unmounted");
    }

    fn root(&self) -> Option<ElementId> {
        self.mounted.as_ref().map(|m| m.root)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/welcome.rs"]
mod tests;
