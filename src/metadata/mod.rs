//! `$metadata` (CSDL) parsing

pub mod models;

pub use models::{ComplexType, EntityType, EnumType, Namespace, Property, SchemaDocument};

use roxmltree::{Document, Node};
use thiserror::Error;

/// Failure to read the schema container out of a metadata document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse metadata XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Metadata document has no Edmx/DataServices element")]
    MissingDataServices,
}

/// Parse a `$metadata` document into a [`SchemaDocument`]
///
/// Only the container path `Edmx` → `DataServices` is required. Anything
/// below it is read leniently: missing children become empty collections and
/// missing `Name`/`Type` attributes become empty strings.
pub fn parse_schema_document(metadata_xml: &str) -> Result<SchemaDocument, ParseError> {
    log::info!("Starting metadata XML parsing, XML length: {} bytes", metadata_xml.len());

    let doc = Document::parse(metadata_xml)?;

    let root = doc.root_element();
    if !root.has_tag_name("Edmx") {
        return Err(ParseError::MissingDataServices);
    }
    let data_services = root
        .children()
        .find(|n| n.has_tag_name("DataServices"))
        .ok_or(ParseError::MissingDataServices)?;

    let namespaces: Vec<Namespace> = data_services
        .children()
        .filter(|n| n.has_tag_name("Schema"))
        .map(parse_namespace)
        .collect();

    log::info!("Successfully parsed {} schemas from metadata", namespaces.len());
    Ok(SchemaDocument { namespaces })
}

fn parse_namespace(schema: Node<'_, '_>) -> Namespace {
    let name = attr(schema, "Namespace");
    log::debug!("Parsing schema namespace: {}", name);

    let mut namespace = Namespace {
        name,
        ..Namespace::default()
    };

    for child in schema.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "EntityType" => namespace.entity_types.push(EntityType {
                name: attr(child, "Name"),
                properties: properties(child, "Property"),
                navigation_properties: properties(child, "NavigationProperty"),
            }),
            "ComplexType" => namespace.complex_types.push(ComplexType {
                name: attr(child, "Name"),
                properties: properties(child, "Property"),
            }),
            "EnumType" => namespace.enum_types.push(EnumType {
                name: attr(child, "Name"),
                members: child
                    .children()
                    .filter(|n| n.has_tag_name("Member"))
                    .map(|n| attr(n, "Name"))
                    .collect(),
            }),
            _ => {}
        }
    }

    log::debug!(
        "Namespace {}: {} entity types, {} complex types, {} enum types",
        namespace.name,
        namespace.entity_types.len(),
        namespace.complex_types.len(),
        namespace.enum_types.len()
    );
    namespace
}

fn properties(parent: Node<'_, '_>, tag: &str) -> Vec<Property> {
    parent
        .children()
        .filter(|n| n.has_tag_name(tag))
        .map(|n| Property {
            name: attr(n, "Name"),
            type_ref: attr(n, "Type"),
            nullable: n.attribute("Nullable").map(|v| v == "true"),
        })
        .collect()
}

fn attr(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}
