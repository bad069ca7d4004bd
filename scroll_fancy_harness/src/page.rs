// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`Page`].

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use kurbo::Rect;
use scroll_fancy_core::Page;

/// Handle to an element of a [`FakePage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

#[derive(Clone, Debug, Default)]
struct FakeElement {
    /// Top edge in document coordinates.
    top: f64,
    height: f64,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
}

/// A page with a fixed list of block elements stacked at given offsets.
///
/// Layout is whatever the test says it is: elements do not push each other
/// around, and the document height only changes when set or when an added
/// element extends past it.
#[derive(Debug)]
pub struct FakePage {
    viewport_width: Cell<f64>,
    viewport_height: Cell<f64>,
    scroll: Cell<f64>,
    document_height: Cell<f64>,
    root_classes: RefCell<Vec<String>>,
    elements: RefCell<Vec<FakeElement>>,
    style_writes: Cell<usize>,
}

impl FakePage {
    /// Creates an empty, unscrolled page with the given viewport.
    #[must_use]
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport_width: Cell::new(viewport_width),
            viewport_height: Cell::new(viewport_height),
            scroll: Cell::new(0.0),
            document_height: Cell::new(viewport_height),
            root_classes: RefCell::new(Vec::new()),
            elements: RefCell::new(Vec::new()),
            style_writes: Cell::new(0),
        }
    }

    /// Appends an element at document offset `top`.
    pub fn add_element(&self, top: f64, height: f64, attributes: &[(&str, &str)]) -> ElementId {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            top,
            height,
            attributes: attributes
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
            ..FakeElement::default()
        });
        let bottom = top + height;
        if bottom > self.document_height.get() {
            self.document_height.set(bottom);
        }
        ElementId(elements.len() - 1)
    }

    /// Sets the window scroll position.
    pub fn set_scroll(&self, y: f64) {
        self.scroll.set(y);
    }

    /// Sets the viewport size.
    pub fn set_viewport(&self, width: f64, height: f64) {
        self.viewport_width.set(width);
        self.viewport_height.set(height);
    }

    /// Sets the rendered document height.
    pub fn set_document_height(&self, height: f64) {
        self.document_height.set(height);
    }

    /// Moves an element to a new document offset.
    pub fn move_element(&self, id: ElementId, top: f64) {
        self.elements.borrow_mut()[id.0].top = top;
    }

    /// Changes an element's rendered height.
    pub fn resize_element(&self, id: ElementId, height: f64) {
        self.elements.borrow_mut()[id.0].height = height;
    }

    /// Adds a class as if another script or the author's markup had.
    pub fn add_markup_class(&self, id: ElementId, class: &str) {
        push_class(&mut self.elements.borrow_mut()[id.0].classes, class);
    }

    /// Current inline style value.
    #[must_use]
    pub fn style_of(&self, id: ElementId, property: &str) -> Option<String> {
        self.elements.borrow()[id.0].styles.get(property).cloned()
    }

    /// Whether the element carries a class.
    #[must_use]
    pub fn element_has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements.borrow()[id.0].classes.iter().any(|c| c == class)
    }

    /// Whether the root carries a class.
    #[must_use]
    pub fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.borrow().iter().any(|c| c == class)
    }

    /// Number of `set_style` calls so far.
    #[must_use]
    pub fn style_writes(&self) -> usize {
        self.style_writes.get()
    }
}

fn push_class(classes: &mut Vec<String>, class: &str) {
    if !classes.iter().any(|c| c == class) {
        classes.push(class.to_owned());
    }
}

fn drop_class(classes: &mut Vec<String>, class: &str) {
    classes.retain(|c| c != class);
}

impl Page for FakePage {
    type Element = ElementId;

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn scroll_distance(&self) -> f64 {
        self.scroll.get()
    }

    fn document_scroll_top(&self) -> f64 {
        self.scroll.get()
    }

    fn document_height(&self) -> f64 {
        self.document_height.get()
    }

    fn elements_with_attributes(&self, attributes: &[&str]) -> Vec<ElementId> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, el)| attributes.iter().any(|a| el.attributes.contains_key(*a)))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn client_rect(&self, element: &ElementId) -> Rect {
        let el = &self.elements.borrow()[element.0];
        let top = el.top - self.scroll.get();
        Rect::new(0.0, top, self.viewport_width.get(), top + el.height)
    }

    fn offset_height(&self, element: &ElementId) -> f64 {
        self.elements.borrow()[element.0].height
    }

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.elements.borrow()[element.0].attributes.get(name).cloned()
    }

    fn add_class(&self, element: &ElementId, class: &str) {
        push_class(&mut self.elements.borrow_mut()[element.0].classes, class);
    }

    fn remove_class(&self, element: &ElementId, class: &str) {
        drop_class(&mut self.elements.borrow_mut()[element.0].classes, class);
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.element_has_class(*element, class)
    }

    fn add_root_class(&self, class: &str) {
        push_class(&mut self.root_classes.borrow_mut(), class);
    }

    fn remove_root_class(&self, class: &str) {
        drop_class(&mut self.root_classes.borrow_mut(), class);
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.root_has_class(class)
    }

    fn set_style(&self, element: &ElementId, property: &str, value: &str) {
        self.style_writes.set(self.style_writes.get() + 1);
        self.elements.borrow_mut()[element.0]
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    fn remove_style(&self, element: &ElementId, property: &str) {
        self.elements.borrow_mut()[element.0].styles.remove(property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroll_fancy_core::page::document_offset;

    #[test]
    fn client_rect_follows_scroll() {
        let page = FakePage::new(1200.0, 800.0);
        let id = page.add_element(1500.0, 300.0, &[]);
        page.set_scroll(1000.0);
        let rect = page.client_rect(&id);
        assert_eq!(rect.y0, 500.0, "1500 - 1000");
        assert_eq!(rect.height(), 300.0, "height kept");
        assert_eq!(document_offset(&page, &id), 1500.0, "scroll cancels out");
    }

    #[test]
    fn adding_elements_grows_the_document() {
        let page = FakePage::new(1200.0, 800.0);
        let _ = page.add_element(2000.0, 500.0, &[]);
        assert_eq!(page.document_height(), 2500.0, "bottom of the last element");
    }

    #[test]
    fn attribute_query_keeps_document_order() {
        let page = FakePage::new(1200.0, 800.0);
        let a = page.add_element(0.0, 10.0, &[("data-parallax-bg", "0.2")]);
        let _ = page.add_element(10.0, 10.0, &[("data-reveal", "fade")]);
        let c = page.add_element(20.0, 10.0, &[("data-parallax", "0.8")]);
        assert_eq!(
            page.elements_with_attributes(&["data-parallax", "data-parallax-bg"]),
            vec![a, c],
            "either attribute matches, in order"
        );
    }
}
