use std::collections::{BTreeMap, BTreeSet};

/// Host-rendered block markup, reduced to what the tune reads and writes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    /// Width the host's layout engine measured, if any.
    pub layout_width: Option<f64>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_layout_width(mut self, width: f64) -> Self {
        self.layout_width = Some(width);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.styles.insert(property.to_string(), value.into());
    }

    pub fn clear_style(&mut self, property: &str) {
        self.styles.remove(property);
    }

    pub fn style_px(&self, property: &str) -> Option<f64> {
        self.style(property)?.strip_suffix("px")?.trim().parse().ok()
    }

    /// Inline width when one is set, otherwise the host-measured width.
    pub fn computed_width(&self) -> Option<f64> {
        self.style_px("width").or(self.layout_width)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First descendant carrying `class`, in document order. Never matches
    /// the element itself.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        for child in &self.children {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find_class(class) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        for child in &mut self.children {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find_class_mut(class) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_tag(&self, tag: &str) -> Option<&Element> {
        for child in &self.children {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find_tag(tag) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
        for child in &mut self.children {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find_tag_mut(tag) {
                return Some(found);
            }
        }
        None
    }

    pub fn remove_child_by_class(&mut self, class: &str) -> Option<Element> {
        let mut ix = 0;
        while ix < self.children.len() {
            if self.children[ix].has_class(class) {
                return Some(self.children.remove(ix));
            }
            if let Some(removed) = self.children[ix].remove_child_by_class(class) {
                return Some(removed);
            }
            ix += 1;
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}
