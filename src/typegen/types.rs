//! Mapping of OData type references to TypeScript types

/// Prefix of the built-in Entity Data Model primitives
pub const EDM_PREFIX: &str = "Edm.";

/// Output type used for Edm primitives nobody told us about
pub const FALLBACK_TYPE: &str = "any";

const BASELINE: &[(&str, &str)] = &[
    ("Duration", "string"),
    ("Binary", "string"),
    ("Boolean", "boolean"),
    ("Byte", "number"),
    ("Date", "JSDate"),
    ("DateTimeOffset", "JSDate"),
    ("Decimal", "number"),
    ("Double", "number"),
    ("Guid", "string"),
    ("Int16", "number"),
    ("Int32", "number"),
    ("Int64", "number"),
    ("SByte", "number"),
    ("Single", "number"),
    ("String", "string"),
    ("TimeOfDay", "string"),
];

/// Insertion-ordered dictionary of Edm primitive name to output keyword
///
/// One instance lives for exactly one generation run. It starts from the
/// baseline (plus configured extras) and only ever grows: resolving an
/// unknown `Edm.*` type registers it with [`FALLBACK_TYPE`], and the emitter
/// writes every entry into the trailing `Edm` alias block.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveTypes {
    entries: Vec<(String, String)>,
}

impl Default for PrimitiveTypes {
    fn default() -> Self {
        Self::baseline()
    }
}

impl PrimitiveTypes {
    pub fn baseline() -> Self {
        Self {
            entries: BASELINE
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Baseline overlaid with custom entries; existing keys are overridden in place
    pub fn with_custom<I, K, V>(custom: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut types = Self::baseline();
        for (key, value) in custom {
            types.insert(key.into(), value.into());
        }
        types
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn insert(&mut self, name: String, output: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = output,
            None => self.entries.push((name, output)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve an OData type reference to its TypeScript type
    ///
    /// `Collection(T)` resolves `T` and appends `[]`. `Edm.X` maps through the
    /// dictionary, registering `X` as [`FALLBACK_TYPE`] when unknown. Anything
    /// else (user types like `Demo.Person`, or garbage) comes back verbatim.
    pub fn resolve(&mut self, type_ref: &str) -> String {
        if let Some(inner) = type_ref
            .strip_prefix("Collection(")
            .and_then(|s| s.strip_suffix(')'))
        {
            return format!("{}[]", self.resolve(inner));
        }

        let Some(name) = type_ref.strip_prefix(EDM_PREFIX) else {
            return type_ref.to_string();
        };

        if let Some(output) = self.get(name) {
            return output.to_string();
        }

        log::warn!("Unknown primitive type '{}', mapping to '{}'", type_ref, FALLBACK_TYPE);
        self.entries.push((name.to_string(), FALLBACK_TYPE.to_string()));
        FALLBACK_TYPE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_primitives() {
        let mut types = PrimitiveTypes::baseline();
        assert_eq!(types.iter().count(), 16);
        assert_eq!(types.resolve("Edm.String"), "string");
        assert_eq!(types.resolve("Edm.Int32"), "number");
        assert_eq!(types.resolve("Edm.Boolean"), "boolean");
        assert_eq!(types.resolve("Edm.DateTimeOffset"), "JSDate");
        assert_eq!(types.resolve("Edm.Guid"), "string");
        assert_eq!(types.iter().count(), 16);
    }

    #[test]
    fn test_collection_of_primitive() {
        let mut types = PrimitiveTypes::baseline();
        assert_eq!(types.resolve("Collection(Edm.Int32)"), "number[]");
        assert_eq!(types.resolve("Collection(Collection(Edm.String))"), "string[][]");
    }

    #[test]
    fn test_unknown_primitive_registers_fallback_once() {
        let mut types = PrimitiveTypes::baseline();
        assert_eq!(types.resolve("Edm.UnknownPrimitive"), "any");
        assert_eq!(types.iter().count(), 17);
        assert_eq!(types.get("UnknownPrimitive"), Some("any"));

        assert_eq!(types.resolve("Collection(Edm.UnknownPrimitive)"), "any[]");
        assert_eq!(types.iter().count(), 17);
    }

    #[test]
    fn test_unknown_primitive_inside_collection_is_registered() {
        let mut types = PrimitiveTypes::baseline();
        assert_eq!(types.resolve("Collection(Edm.GeographyPoint)"), "any[]");
        assert_eq!(types.get("GeographyPoint"), Some("any"));
    }

    #[test]
    fn test_user_types_pass_through() {
        let mut types = PrimitiveTypes::baseline();
        assert_eq!(types.resolve("Demo.Person"), "Demo.Person");
        assert_eq!(types.resolve("Collection(Demo.Person)"), "Demo.Person[]");
        assert_eq!(types.resolve(""), "");
        assert_eq!(types.resolve("Collection(Edm.Int32"), "Collection(Edm.Int32");
        assert_eq!(types.iter().count(), 16);
    }

    #[test]
    fn test_custom_entries_override_and_extend() {
        let mut types = PrimitiveTypes::with_custom([
            ("Int64", "string"),
            ("GeographyPoint", "GeoJSON.Point"),
        ]);
        assert_eq!(types.iter().count(), 17);
        assert_eq!(types.resolve("Edm.Int64"), "string");
        assert_eq!(types.resolve("Edm.GeographyPoint"), "GeoJSON.Point");

        let keys: Vec<&str> = types.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[0], "Duration");
        assert_eq!(keys[16], "GeographyPoint");
    }
}
