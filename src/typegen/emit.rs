//! TypeScript declaration emission

use super::settings::Modularity;
use super::types::PrimitiveTypes;
use crate::metadata::{ComplexType, EntityType, EnumType, Namespace, Property, SchemaDocument};
use serde::{Deserialize, Serialize};

/// Last line of every generated document; marks the end of generated content
pub const SENTINEL: &str =
    "/// Do not modify the header line to be able to update these declarations again.";

const INDENT: &str = "    ";

/// Knobs that change individual lines, not the document layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Properties carrying a `Nullable` attribute (whatever its value) are
    /// emitted without `?`. Off by default: every property is optional.
    pub required_when_declared: bool,
}

/// Emit the declaration body for `doc`
///
/// `types` is consulted for every property and collects any unknown Edm
/// primitives on the way, so the trailing `Edm` block always lists what the
/// namespaces above it referenced.
pub fn emit(
    doc: &SchemaDocument,
    modularity: Modularity,
    options: &EmitOptions,
    types: &mut PrimitiveTypes,
) -> String {
    let mut out = String::new();

    for namespace in &doc.namespaces {
        emit_namespace(&mut out, namespace, modularity, options, types);
    }

    out.push_str(&edm_block(modularity, types));
    out.push_str(SENTINEL);
    out.push('\n');
    out
}

fn emit_namespace(
    out: &mut String,
    namespace: &Namespace,
    modularity: Modularity,
    options: &EmitOptions,
    types: &mut PrimitiveTypes,
) {
    log::debug!("Emitting namespace {}", namespace.name);
    out.push_str(&format!(
        "{}namespace {} {{\n",
        modularity.namespace_prefix(),
        namespace.name
    ));

    for entity in &namespace.entity_types {
        emit_entity(out, entity, options, types);
    }
    for complex in &namespace.complex_types {
        emit_complex(out, complex, options, types);
    }
    for enum_type in &namespace.enum_types {
        out.push_str(INDENT);
        out.push_str(&enum_declaration(enum_type));
        out.push('\n');
    }

    out.push_str("}\n");
}

fn emit_entity(out: &mut String, entity: &EntityType, options: &EmitOptions, types: &mut PrimitiveTypes) {
    out.push_str(&format!("{INDENT}export interface {} {{\n", entity.name));
    for property in entity.properties.iter().chain(&entity.navigation_properties) {
        emit_field(out, property, options, types);
    }
    out.push_str(&format!("{INDENT}}}\n"));
}

fn emit_complex(out: &mut String, complex: &ComplexType, options: &EmitOptions, types: &mut PrimitiveTypes) {
    out.push_str(&format!("{INDENT}export interface {} {{\n", complex.name));
    for property in &complex.properties {
        emit_field(out, property, options, types);
    }
    out.push_str(&format!("{INDENT}}}\n"));
}

fn emit_field(out: &mut String, property: &Property, options: &EmitOptions, types: &mut PrimitiveTypes) {
    out.push_str(INDENT);
    out.push_str(INDENT);
    out.push_str(&field_declaration(property, options, types));
    out.push('\n');
}

/// `name?: type;` for a single property
pub fn field_declaration(property: &Property, options: &EmitOptions, types: &mut PrimitiveTypes) -> String {
    let marker = if is_optional(property, options) { "?" } else { "" };
    format!("{}{}: {};", property.name, marker, types.resolve(&property.type_ref))
}

fn is_optional(property: &Property, options: &EmitOptions) -> bool {
    match property.nullable {
        None => true,
        Some(_) => !options.required_when_declared,
    }
}

/// `type Name = "A" | "B";`; no members yields `type Name = ;`
pub fn enum_declaration(enum_type: &EnumType) -> String {
    let members: Vec<String> = enum_type
        .members
        .iter()
        .map(|m| format!("\"{}\"", m))
        .collect();
    format!("type {} = {};", enum_type.name, members.join(" | "))
}

fn edm_block(modularity: Modularity, types: &PrimitiveTypes) -> String {
    let mut block = String::from("\ntype JSDate = Date;\n\n");
    block.push_str(&format!("{}namespace Edm {{\n", modularity.namespace_prefix()));
    for (name, output) in types.iter() {
        block.push_str(&format!("{INDENT}export type {} = {};\n", name, output));
    }
    block.push_str("}\n");
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_doc() -> SchemaDocument {
        SchemaDocument {
            namespaces: vec![Namespace {
                name: "Demo".to_string(),
                entity_types: vec![EntityType {
                    name: "Person".to_string(),
                    properties: vec![
                        Property::new("Id", "Edm.Int32", None),
                        Property::new("Tags", "Collection(Edm.String)", Some(true)),
                    ],
                    navigation_properties: vec![Property::new("Friends", "Collection(Demo.Person)", None)],
                }],
                complex_types: vec![ComplexType {
                    name: "Address".to_string(),
                    properties: vec![Property::new("City", "Edm.String", Some(false))],
                }],
                enum_types: vec![EnumType {
                    name: "Color".to_string(),
                    members: vec!["Red".to_string(), "Green".to_string()],
                }],
            }],
        }
    }

    fn trimmed_lines(text: &str) -> Vec<&str> {
        text.lines().map(str::trim).collect()
    }

    #[test]
    fn test_emit_person_ambient() {
        let mut types = PrimitiveTypes::baseline();
        let out = emit(&person_doc(), Modularity::Ambient, &EmitOptions::default(), &mut types);
        let lines = trimmed_lines(&out);

        assert_eq!(
            &lines[..10],
            &[
                "declare namespace Demo {",
                "export interface Person {",
                "Id?: number;",
                "Tags?: string[];",
                "Friends?: Demo.Person[];",
                "}",
                "export interface Address {",
                "City?: string;",
                "}",
                "type Color = \"Red\" | \"Green\";",
            ]
        );
        assert_eq!(lines[10], "}");
        assert!(lines.contains(&"type JSDate = Date;"));
        assert!(lines.contains(&"declare namespace Edm {"));
        assert!(lines.contains(&"export type Int32 = number;"));
        assert_eq!(*lines.last().unwrap(), SENTINEL);
    }

    #[test]
    fn test_emit_module_prefixes() {
        let mut types = PrimitiveTypes::baseline();
        let out = emit(&person_doc(), Modularity::Module, &EmitOptions::default(), &mut types);
        assert!(out.starts_with("export namespace Demo {\n"));
        assert!(out.contains("\nexport namespace Edm {\n"));
        assert!(!out.contains("declare "));
    }

    #[test]
    fn test_nullability_policy() {
        let mut types = PrimitiveTypes::baseline();
        let default = EmitOptions::default();
        let strict = EmitOptions { required_when_declared: true };

        let absent = Property::new("A", "Edm.String", None);
        let yes = Property::new("B", "Edm.String", Some(true));
        let no = Property::new("C", "Edm.String", Some(false));

        assert_eq!(field_declaration(&absent, &default, &mut types), "A?: string;");
        assert_eq!(field_declaration(&yes, &default, &mut types), "B?: string;");
        assert_eq!(field_declaration(&no, &default, &mut types), "C?: string;");

        assert_eq!(field_declaration(&absent, &strict, &mut types), "A?: string;");
        assert_eq!(field_declaration(&yes, &strict, &mut types), "B: string;");
        assert_eq!(field_declaration(&no, &strict, &mut types), "C: string;");
    }

    #[test]
    fn test_enum_declarations() {
        let color = EnumType {
            name: "Color".to_string(),
            members: vec!["Red".to_string(), "Green".to_string()],
        };
        assert_eq!(enum_declaration(&color), "type Color = \"Red\" | \"Green\";");

        let empty = EnumType {
            name: "Nothing".to_string(),
            members: vec![],
        };
        assert_eq!(enum_declaration(&empty), "type Nothing = ;");
    }

    #[test]
    fn test_unknown_primitive_lands_in_edm_block() {
        let doc = SchemaDocument {
            namespaces: vec![Namespace {
                name: "Geo".to_string(),
                complex_types: vec![ComplexType {
                    name: "Place".to_string(),
                    properties: vec![Property::new("Point", "Edm.GeographyPoint", None)],
                }],
                ..Namespace::default()
            }],
        };

        let mut types = PrimitiveTypes::baseline();
        let out = emit(&doc, Modularity::Ambient, &EmitOptions::default(), &mut types);

        assert!(out.contains("Point?: any;"));
        let edm = out.split("namespace Edm {").nth(1).unwrap();
        assert!(edm.contains("export type GeographyPoint = any;"));
        assert_eq!(edm.matches("export type ").count(), 17);
    }

    #[test]
    fn test_one_block_per_namespace_in_order() {
        let doc = SchemaDocument {
            namespaces: ["First", "Second", "First"]
                .iter()
                .map(|name| Namespace {
                    name: name.to_string(),
                    ..Namespace::default()
                })
                .collect(),
        };
        let mut types = PrimitiveTypes::baseline();
        let out = emit(&doc, Modularity::Ambient, &EmitOptions::default(), &mut types);

        let blocks: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("declare namespace ") && !l.contains("Edm"))
            .collect();
        assert_eq!(
            blocks,
            vec![
                "declare namespace First {",
                "declare namespace Second {",
                "declare namespace First {",
            ]
        );
    }
}
