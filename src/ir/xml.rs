//! Shared XML helpers for the GPX and KML readers.
//!
//! Elements are matched by local name only, so documents with or without a
//! default namespace (`xmlns="http://www.topografix.com/GPX/1/1"`,
//! `xmlns="http://www.opengis.net/kml/2.2"`) read the same.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::PantrackError;

/// Parses `text` as XML, allowing an inline DTD.
pub(crate) fn parse_document<'input>(
    text: &'input str,
    format: &'static str,
) -> Result<Document<'input>, PantrackError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    Document::parse_with_options(text, options).map_err(|source| PantrackError::XmlParse {
        format,
        message: source.to_string(),
    })
}

/// All descendant elements of `node` (excluding `node`) named `name`, in
/// document order.
pub(crate) fn descendants_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// The first descendant element of `node` named `name`.
pub(crate) fn first_descendant_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> Option<Node<'a, 'input>> {
    descendants_named(node, name).next()
}

/// The first descendant `child` element whose parent is a `parent` element,
/// e.g. `LineString > coordinates`.
pub(crate) fn first_descendant_child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    parent: &'a str,
    child: &'a str,
) -> Option<Node<'a, 'input>> {
    descendants_named(node, child).find(|n| {
        n.parent_element()
            .is_some_and(|p| p.tag_name().name() == parent)
    })
}

/// Concatenated text of every text and CDATA node under `node`.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

/// Text content of the first descendant named `name`, if that element exists.
pub(crate) fn first_text_named(node: Node<'_, '_>, name: &str) -> Option<String> {
    first_descendant_named(node, name).map(text_content)
}
