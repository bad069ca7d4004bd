// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gateway to the live page.
//!
//! The engines never touch a document directly. Every layout read and every
//! class or style write goes through [`Page`], which the web backend
//! implements on top of `web-sys` and tests implement in memory.
//!
//! Methods take `&self`: a real document is a shared, interior-mutable object
//! and writes through one handle are visible through every other.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Read and write access to a rendered page.
pub trait Page {
    /// Handle to one element of the page.
    type Element: Clone;

    /// Width of the layout viewport, in CSS pixels.
    fn viewport_width(&self) -> f64;

    /// Height of the layout viewport, in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// Current vertical scroll position of the window.
    fn scroll_distance(&self) -> f64;

    /// Scroll offset of the document root element.
    ///
    /// Added to client rects to turn them into document coordinates.
    fn document_scroll_top(&self) -> f64;

    /// Rendered height of the document body.
    fn document_height(&self) -> f64;

    /// All elements carrying at least one of `attributes`, in document order.
    fn elements_with_attributes(&self, attributes: &[&str]) -> Vec<Self::Element>;

    /// The element's border box relative to the viewport.
    fn client_rect(&self, element: &Self::Element) -> Rect;

    /// The element's rendered layout height.
    fn offset_height(&self, element: &Self::Element) -> f64;

    /// Value of an attribute, if present.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Whether the element carries an attribute.
    fn has_attribute(&self, element: &Self::Element, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    /// Adds a class to the element.
    fn add_class(&self, element: &Self::Element, class: &str);

    /// Removes a class from the element.
    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Whether the element carries a class.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Adds a class to the page root.
    fn add_root_class(&self, class: &str);

    /// Removes a class from the page root.
    fn remove_root_class(&self, class: &str);

    /// Whether the page root carries a class.
    fn has_root_class(&self, class: &str) -> bool;

    /// Sets an inline style property (CSS property name, e.g. `transform`).
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Clears an inline style property.
    fn remove_style(&self, element: &Self::Element, property: &str);
}

/// The element's top edge in document coordinates, rounded to whole pixels.
pub fn document_offset<P: Page>(page: &P, element: &P::Element) -> f64 {
    (page.client_rect(element).y0 + page.document_scroll_top()).round()
}
