/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

extern crate glyph_path;

use glyph_path::*;

///
/// Minimal stand-in for a DOM: elements are records of how they were made
///
struct TestDocument;

#[derive(Debug, PartialEq)]
struct TestElement {
    namespace: String,
    tag: String,
    attributes: Vec<(String, String)>,
}

impl DomDocument for TestDocument {
    type Element = TestElement;

    fn create_element_ns(&mut self, namespace: &str, tag: &str) -> TestElement {
        TestElement {
            namespace: namespace.to_string(),
            tag: tag.to_string(),
            attributes: vec![],
        }
    }

    fn set_attribute(&mut self, element: &mut TestElement, name: &str, value: &str) {
        element
            .attributes
            .push((name.to_string(), value.to_string()));
    }
}

#[test]
fn element_is_an_svg_path_node() {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(10.0, 0.0);
    path.close();

    let element = path.to_element(&mut TestDocument, 2);

    assert!(element.namespace == SVG_NAMESPACE);
    assert!(element.tag == "path");
}

#[test]
fn element_carries_the_path_data() {
    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(10.0, 0.0);
    path.close();

    let element = path.to_element(&mut TestDocument, 2);

    assert!(element.attributes == vec![("d".to_string(), "M0 0L10 0Z".to_string())]);
}
