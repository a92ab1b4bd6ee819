/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;

/// Namespace used when creating SVG elements
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

///
/// Interface onto a document that can host SVG elements
///
/// This is the one corner of a document model that paths need: creating an
/// element in a namespace and setting attributes on it. Anything that can do
/// those two things can host the elements this crate produces.
///
pub trait DomDocument {
    /// The element type produced by this document
    type Element;

    /// Creates an element with the given namespace and tag
    fn create_element_ns(&mut self, namespace: &str, tag: &str) -> Self::Element;

    /// Sets an attribute on an element created by this document
    fn set_attribute(&mut self, element: &mut Self::Element, name: &str, value: &str);
}

impl Path {
    ///
    /// Creates a live `<path>` element in a document, with this path's data as
    /// its `d` attribute
    ///
    pub fn to_element<Doc: DomDocument>(
        &self,
        document: &mut Doc,
        decimal_places: usize,
    ) -> Doc::Element {
        let mut element = document.create_element_ns(SVG_NAMESPACE, "path");
        let data = self.to_path_data(decimal_places);

        document.set_attribute(&mut element, "d", &data);

        element
    }
}
