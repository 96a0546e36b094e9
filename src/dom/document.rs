use crate::foundation::core::{Point, Rect};

/// Handle to an element inside a [`Document`] arena.
///
/// Slots are reused after [`Document::remove`]; the generation makes a
/// handle to a removed element stop resolving instead of aliasing the
/// element that took its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId {
    index: u32,
    generation: u32,
}

impl ElementId {
    /// Arena slot, stable for the element's lifetime.
    pub fn index(self) -> u32 {
        self.index
    }
}

/// One element of the retained tree.
#[derive(Clone, Debug)]
pub struct Node {
    /// Tag name (`p`, `span`, `time`, ...).
    pub tag: String,
    /// Ordered `(name, value)` attributes, excluding `class` and `style`.
    pub attrs: Vec<(String, String)>,
    /// Space-separated class list as written.
    pub class: Option<String>,
    /// Text content rendered before any children.
    pub text: Option<String>,
    /// Current `'wght'` font-variation value, rendered as inline style.
    pub weight: Option<f64>,
    /// List key; unique among siblings, never rendered.
    pub key: Option<String>,
    /// Laid-out bounding box in page coordinates.
    pub rect: Option<Rect>,
    /// Containing element, `None` for roots and detached subtrees.
    pub parent: Option<ElementId>,
    /// Children in document order.
    pub children: Vec<ElementId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            class: None,
            text: None,
            weight: None,
            key: None,
            rect: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena-backed element tree rooted at a `body` element.
///
/// [`Document::detach`] only unlinks a subtree; [`Document::remove`] frees
/// it. Reads and writes through a freed handle are ignored, so late writers
/// (tweens, stale handlers) never touch a recycled slot.
#[derive(Clone, Debug)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document holding only `body`.
    pub fn new() -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            body: ElementId {
                index: 0,
                generation: 0,
            },
        };
        doc.body = doc.create_element("body");
        doc
    }

    /// The root element.
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Number of live elements, `body` included.
    pub fn len(&self) -> usize {
        self.live
    }

    /// `true` when nothing but `body` is allocated.
    pub fn is_empty(&self) -> bool {
        self.live <= 1
    }

    /// Whether `id` still refers to a live element.
    pub fn contains(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    /// The element behind `id`, if it is still live.
    pub fn node(&self, id: ElementId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)?
            .node
            .as_ref()
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)?
            .node
            .as_mut()
    }

    /// Allocate a detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(Node::new(tag));
                ElementId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(Node::new(tag)),
                });
                ElementId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Create `tag` and append it to `parent` in one step.
    pub fn append_new(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let id = self.create_element(tag);
        self.append_child(parent, id);
        id
    }

    /// Move `child` to the end of `parent`'s children.
    ///
    /// Ignored when either handle is dead or when `child` is `parent` or one
    /// of its ancestors, which would close a cycle.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.contains(parent)
            || !self.contains(child)
            || self.ancestors(parent).contains(&child)
        {
            return;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    /// Unlink `id` from its parent. The subtree itself is kept intact.
    pub fn detach(&mut self, id: ElementId) {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    /// Detach and free `id` with its whole subtree. `body` cannot be removed.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.body || !self.contains(id) {
            return;
        }
        self.detach(id);
        for el in self.descendants(id) {
            if let Some(slot) = self.slots.get_mut(el.index as usize) {
                slot.node = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(el.index);
                self.live -= 1;
            }
        }
    }

    /// Set or overwrite attribute `name`.
    pub fn set_attr(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let value = value.into();
        match node.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => node.attrs.push((name.to_string(), value)),
        }
    }

    /// Value of attribute `name`.
    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the class list; `None` or an empty string clears it.
    pub fn set_class(&mut self, id: ElementId, class: Option<&str>) {
        if let Some(node) = self.node_mut(id) {
            node.class = class.filter(|c| !c.is_empty()).map(str::to_string);
        }
    }

    /// Class list as written, if any.
    pub fn class(&self, id: ElementId) -> Option<&str> {
        self.node(id)?.class.as_deref()
    }

    /// Replace the text content.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.text = Some(text.into());
        }
    }

    /// Text content, if any.
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.node(id)?.text.as_deref()
    }

    /// Set the `'wght'` variation value.
    pub fn set_weight(&mut self, id: ElementId, weight: f64) {
        if let Some(node) = self.node_mut(id) {
            node.weight = Some(weight);
        }
    }

    /// Current `'wght'` variation value.
    pub fn weight(&self, id: ElementId) -> Option<f64> {
        self.node(id)?.weight
    }

    /// Tag the element with a list key.
    pub fn set_key(&mut self, id: ElementId, key: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.key = Some(key.into());
        }
    }

    /// List key set by [`Document::set_key`].
    pub fn key(&self, id: ElementId) -> Option<&str> {
        self.node(id)?.key.as_deref()
    }

    /// Record the laid-out box.
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(node) = self.node_mut(id) {
            node.rect = Some(rect);
        }
    }

    /// Laid-out box, `None` before layout.
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.node(id)?.rect
    }

    /// Tag name.
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    /// Containing element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id)?.parent
    }

    /// Children in document order; empty for dead handles.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// `id` followed by its ancestors up to the top of its tree.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut cur = self.node(id).map(|_| id);
        while let Some(el) = cur {
            out.push(el);
            cur = self.parent(el);
        }
        out
    }

    /// Whether `id` is reachable from the `body` root.
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.ancestors(id).last() == Some(&self.body)
    }

    /// Depth-first, document-order walk of `root`'s subtree (inclusive).
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(el) = stack.pop() {
            if self.node(el).is_none() {
                continue;
            }
            out.push(el);
            stack.extend(self.children(el).iter().rev().copied());
        }
        out
    }

    /// First connected element whose `id` attribute is `html_id`.
    pub fn find_by_id(&self, html_id: &str) -> Option<ElementId> {
        self.descendants(self.body)
            .into_iter()
            .find(|&el| self.attr(el, "id") == Some(html_id))
    }

    /// Every `tag` element in `root`'s subtree, in document order.
    pub fn find_all_by_tag(&self, root: ElementId, tag: &str) -> Vec<ElementId> {
        self.descendants(root)
            .into_iter()
            .filter(|&el| self.tag(el) == Some(tag))
            .collect()
    }

    /// Deepest connected element whose laid-out box contains `point`.
    ///
    /// Later siblings paint over earlier ones, so they win ties.
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.hit_test_from(self.body, point)
    }

    fn hit_test_from(&self, el: ElementId, point: Point) -> Option<ElementId> {
        for &child in self.children(el).iter().rev() {
            if let Some(hit) = self.hit_test_from(child, point) {
                return Some(hit);
            }
        }
        match self.rect(el) {
            Some(r) if contains_inclusive(r, point) => Some(el),
            _ => None,
        }
    }
}

// kurbo's `Rect::contains` excludes the far edges; pointer hits on the
// right/bottom border still belong to the box.
fn contains_inclusive(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

#[cfg(test)]
#[path = "../../tests/unit/dom/document.rs"]
mod tests;
