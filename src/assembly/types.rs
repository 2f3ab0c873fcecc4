use serde::Deserialize;
use serde_json::Value;

/// Reflected metadata for one assembly.
#[derive(Debug, Clone, Deserialize)]
pub struct AssemblyMeta {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeMeta>,
}

/// What kind of type a [`TypeMeta`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

/// One reflected type: name, namespace, kind, members and custom attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeMeta {
    pub name: String,
    pub namespace: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub properties: Vec<PropertyMeta>,
    #[serde(default)]
    pub methods: Vec<MethodMeta>,
    #[serde(default)]
    pub fields: Vec<FieldMeta>,
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Set when custom-attribute introspection failed for this type.
    #[serde(default)]
    pub attribute_error: Option<String>,
}

impl TypeMeta {
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }
}

/// One accessor (getter or setter) of a reflected property.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AccessorMeta {
    #[serde(default)]
    pub public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

/// One reflected property.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyMeta {
    pub name: String,
    /// Property type in raw CLR string syntax.
    #[serde(rename = "type")]
    pub property_type: String,
    /// Fully-qualified name of the declaring type.
    pub declaring_type: String,
    #[serde(default)]
    pub getter: Option<AccessorMeta>,
    #[serde(default)]
    pub setter: Option<AccessorMeta>,
    /// Live value captured at export time; only meaningful for public static
    /// readable properties.
    #[serde(default)]
    pub static_value: Option<Value>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub attribute_error: Option<String>,
}

/// One reflected method.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodMeta {
    pub name: String,
    /// Return type in raw CLR string syntax.
    pub return_type: String,
    pub declaring_type: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterMeta>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub attribute_error: Option<String>,
}

/// One method parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

/// One reflected field; enum literals carry their raw constant value.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldMeta {
    pub name: String,
    #[serde(default)]
    pub is_literal: bool,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub attribute_error: Option<String>,
}
