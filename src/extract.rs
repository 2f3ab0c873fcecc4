//! Member extraction.
//!
//! Walks a reflected type's properties and methods, applies the publication
//! filter and produces the flat intermediate records the emitter consumes.
//! Extraction preserves metadata enumeration order so repeated runs against
//! the same assembly produce byte-identical output.

use serde_json::Value;

use crate::assembly::{PublishedFilter, TypeMeta};
use crate::docs::{method_key, property_key, DocEntry, DocIndex};

/// One method parameter: raw CLR type name plus identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

/// Intermediate record for one method, created per `(type, method)` pair and
/// consumed once by the emitter.
#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub doc: Option<DocEntry>,
    pub return_type: String,
    pub is_static: bool,
    pub args: Vec<Param>,
}

/// Intermediate record for one property.
///
/// `value` is populated only for public static readable properties: the
/// exported value gets baked into the stub as a literal constant.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub getter: bool,
    pub setter: bool,
    pub doc: Option<DocEntry>,
    pub is_static: bool,
    pub value: Option<Value>,
}

/// Extract the published properties of `class_type` in enumeration order.
///
/// A getter or setter is modeled as present only when the declaring type is
/// an interface or the accessor itself is public. The property is static when
/// its getter is static; there is no static modifier on the property itself
/// in the reflection model.
pub fn get_properties(
    class_type: &TypeMeta,
    doc: &DocIndex,
    filter: Option<&PublishedFilter>,
) -> Vec<Property> {
    let mut output = Vec::new();
    for prop in &class_type.properties {
        if let Some(filter) = filter {
            let member_name = format!("{}.{}", prop.declaring_type, prop.name);
            if !filter.admits(&member_name, &prop.attributes, prop.attribute_error.as_deref()) {
                continue;
            }
        }
        let doc_entry = doc
            .get(&property_key(&prop.declaring_type, &prop.name))
            .cloned();
        let mut record = Property {
            name: prop.name.clone(),
            ty: prop.property_type.clone(),
            getter: false,
            setter: false,
            doc: doc_entry,
            is_static: false,
            value: None,
        };
        if let Some(getter) = &prop.getter {
            if class_type.is_interface() || getter.public {
                record.getter = true;
            }
            if getter.is_static {
                record.is_static = true;
            }
            if getter.public && getter.is_static {
                record.value = prop.static_value.clone();
            }
        }
        if let Some(setter) = &prop.setter {
            if class_type.is_interface() || setter.public {
                record.setter = true;
            }
        }
        output.push(record);
    }
    output
}

/// Extract the published methods of `class_type` in enumeration order.
///
/// The doc key is built from the declaring type and the raw parameter type
/// list; a lookup miss is a normal state and the record is built regardless.
pub fn get_methods(
    class_type: &TypeMeta,
    doc: &DocIndex,
    filter: Option<&PublishedFilter>,
) -> Vec<Method> {
    let mut output = Vec::new();
    for method in &class_type.methods {
        if let Some(filter) = filter {
            let member_name = format!("{}.{}", method.declaring_type, method.name);
            if !filter.admits(&member_name, &method.attributes, method.attribute_error.as_deref())
            {
                continue;
            }
        }
        let args: Vec<Param> = method
            .parameters
            .iter()
            .map(|p| Param {
                ty: p.param_type.clone(),
                name: p.name.clone(),
            })
            .collect();
        let param_types: Vec<String> = args.iter().map(|a| a.ty.clone()).collect();
        let key = method_key(&method.declaring_type, &method.name, &param_types);
        output.push(Method {
            name: method.name.clone(),
            doc: doc.get(&key).cloned(),
            return_type: method.return_type.clone(),
            is_static: method.is_static,
            args,
        });
    }
    output
}
