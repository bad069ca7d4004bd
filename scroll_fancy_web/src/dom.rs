// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Page`] over the live DOM.
//!
//! Class and style writes that throw are ignored: the effects treat the page
//! as best-effort output, the same way a presenter ignores failed style sets.

use kurbo::Rect;
use scroll_fancy_core::Page;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement, Window};

use crate::error::{Error, Result};

/// The browser page: window, document, body (the class root) and the
/// document element (the scroll root).
#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
    body: HtmlElement,
    root: Element,
}

impl core::fmt::Debug for DomPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPage")
            .field("window", &"Window")
            .field("document", &"Document")
            .field("body", &"HtmlElement")
            .field("root", &"Element")
            .finish()
    }
}

impl DomPage {
    /// Binds to the global window's document.
    pub fn from_global() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        Self::new(window)
    }

    /// Binds to the given window's document.
    pub fn new(window: Window) -> Result<Self> {
        let document = window.document().ok_or(Error::NoDocument)?;
        let body = document.body().ok_or(Error::NoBody)?;
        let root = document.document_element().ok_or(Error::NoRootElement)?;
        Ok(Self {
            window,
            document,
            body,
            root,
        })
    }

    /// The bound window, the event target for `scroll` and `resize`.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    fn window_metric(&self, read: WindowRead) -> f64 {
        read(&self.window)
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
}

type WindowRead = fn(&Window) -> core::result::Result<JsValue, JsValue>;

/// Inline style of an HTML or SVG element; other namespaces have none.
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        element.dyn_ref::<SvgElement>().map(SvgElement::style)
    }
}

/// Builds `[a], [b], ...` selecting any of the attributes.
fn attribute_selector(attributes: &[&str]) -> String {
    attributes
        .iter()
        .map(|name| format!("[{name}]"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Page for DomPage {
    type Element = Element;

    fn viewport_width(&self) -> f64 {
        self.window_metric(Window::inner_width)
    }

    fn viewport_height(&self) -> f64 {
        self.window_metric(Window::inner_height)
    }

    fn scroll_distance(&self) -> f64 {
        // `pageYOffset` of 0 falls through to the root's scrollTop, which
        // covers quirks-mode documents that scroll the root instead.
        match self.window.page_y_offset() {
            Ok(y) if y != 0.0 => y,
            _ => self.document_scroll_top(),
        }
    }

    fn document_scroll_top(&self) -> f64 {
        f64::from(self.root.scroll_top())
    }

    fn document_height(&self) -> f64 {
        f64::from(self.body.offset_height())
    }

    fn elements_with_attributes(&self, attributes: &[&str]) -> Vec<Element> {
        let Ok(list) = self
            .document
            .query_selector_all(&attribute_selector(attributes))
        else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn client_rect(&self, element: &Element) -> Rect {
        let r = element.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn offset_height(&self, element: &Element) -> f64 {
        // SVG has no `offsetHeight`; its box height is the closest match.
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => f64::from(html.offset_height()),
            None => element.get_bounding_client_rect().height(),
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_attribute(&self, element: &Element, name: &str) -> bool {
        element.has_attribute(name)
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_root_class(&self, class: &str) {
        let _ = self.body.class_list().add_1(class);
    }

    fn remove_root_class(&self, class: &str) {
        let _ = self.body.class_list().remove_1(class);
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.body.class_list().contains(class)
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(style) = inline_style(element) {
            let _ = style.set_property(property, value);
        }
    }

    fn remove_style(&self, element: &Element, property: &str) {
        if let Some(style) = inline_style(element) {
            let _ = style.remove_property(property);
        }
    }
}
