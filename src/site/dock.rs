use crate::{dom::document::ElementId, host::page::Page, site::component::Component};

/// Placeholder for the application dock; its contents are owned elsewhere.
#[derive(Debug, Default)]
pub struct Dock {
    root: Option<ElementId>,
}

impl Component for Dock {
    fn mount(&mut self, page: &mut Page, parent: ElementId) -> ElementId {
        if let Some(root) = self.root {
            return root;
        }
        let doc = page.doc_mut();
        let root = doc.append_new(parent, "div");
        doc.set_attr(root, "id", "dock");
        self.root = Some(root);
        root
    }

    fn unmount(&mut self, page: &mut Page) {
        if let Some(root) = self.root.take() {
            page.doc_mut().remove(root);
        }
    }

    fn root(&self) -> Option<ElementId> {
        self.root
    }
}
