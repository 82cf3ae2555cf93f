//! CSDL schema models

/// Parsed `$metadata` document: one namespace per `Schema` element, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    pub namespaces: Vec<Namespace>,
}

/// A single `Schema` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    pub name: String,
    pub entity_types: Vec<EntityType>,
    pub complex_types: Vec<ComplexType>,
    pub enum_types: Vec<EnumType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityType {
    pub name: String,
    pub properties: Vec<Property>,
    pub navigation_properties: Vec<Property>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexType {
    pub name: String,
    pub properties: Vec<Property>,
}

/// Property or navigation property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Property {
    pub name: String,
    /// Raw OData type, e.g. `Edm.String`, `Collection(Edm.Int32)`, `Demo.Person`
    pub type_ref: String,
    /// `None` when the `Nullable` attribute is absent
    pub nullable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, type_ref: impl Into<String>, nullable: Option<bool>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            nullable,
        }
    }
}
