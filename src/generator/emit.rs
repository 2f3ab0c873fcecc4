//! Stub source emission.
//!
//! Pure functions from intermediate records to Python source text appended to
//! a `String` buffer. No I/O happens here; the package builder decides where
//! the buffer lands. Stubs carry shape and documentation only, so every body
//! is a placeholder and every property returns the `None` sentinel unless a
//! static value was baked in at export time.

use serde_json::Value;

use crate::assembly::{FieldMeta, PublishedFilter, TypeMeta};
use crate::docs::{type_key, DocEntry, DocIndex};
use crate::extract::{get_methods, get_properties, Method, Property};
use crate::pytype;

const INDENT: &str = "    ";

/// Enum field names that collide with Python reserved words.
const ENUM_FIELD_RENAMES: &[(&str, &str)] = &[("None", "None_"), ("True", "True_")];

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

/// Append the docstring of a documented member at the given indentation.
/// Entries without a summary produce nothing.
pub fn write_docstring(buf: &mut String, doc: Option<&DocEntry>, indent_level: usize) {
    let Some(doc) = doc else { return };
    let Some(summary) = &doc.summary else { return };
    let pad = indent(indent_level);
    buf.push_str(&format!("{pad}\"\"\"\n"));
    buf.push_str(&format!("{pad}{summary}\n"));
    buf.push_str(&format!("{pad}\"\"\"\n"));
}

/// Synthesize a docstring for an undocumented class, interface or enum.
/// Interface-shaped names (leading `I` followed by an uppercase letter) get
/// called an interface regardless of the declared kind word.
fn write_missing_type_docstring(buf: &mut String, name: &str, kind_word: &str) {
    let pad = indent(1);
    let shaped_word = if is_interface_shaped(name) { "interface" } else { kind_word };
    buf.push_str(&format!("{pad}\"\"\"\n"));
    buf.push_str(&format!("{pad}{name} {shaped_word}.\n"));
    buf.push_str(&format!("{pad}\"\"\"\n"));
}

/// Synthesize a docstring for an undocumented property or method.
/// `GetChildren` keeps its canned description; the name alone says nothing.
fn write_missing_member_docstring(buf: &mut String, name: &str, kind_word: &str, indent_level: usize) {
    let pad = indent(indent_level);
    buf.push_str(&format!("{pad}\"\"\"\n"));
    if name == "GetChildren" {
        buf.push_str(&format!("{pad}Gets the list of children, filtered by type.\n"));
    } else {
        buf.push_str(&format!("{pad}{name} {kind_word}.\n"));
    }
    buf.push_str(&format!("{pad}\"\"\"\n"));
}

fn is_interface_shaped(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('I') && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Append one enum field assignment, renaming reserved-word collisions.
///
/// A literal field always carries its constant value in the metadata; a
/// missing one means the export is malformed and the run stops.
pub fn write_enum_field(buf: &mut String, field: &FieldMeta, indent_level: usize) {
    let name = ENUM_FIELD_RENAMES
        .iter()
        .find(|(from, _)| *from == field.name)
        .map(|(_, to)| *to)
        .unwrap_or(&field.name);
    let Some(value) = field.value else {
        panic!("literal enum field without a constant value: {}", field.name);
    };
    buf.push_str(&format!("{}{} = {}\n", indent(indent_level), name, value));
}

/// Append one enum class. An enum whose published literal fields all got
/// filtered away still emits a valid `pass` body; the missing values are an
/// upstream publication gap, not ours to invent.
pub fn write_enum(
    buf: &mut String,
    enum_type: &TypeMeta,
    namespace: &str,
    doc: &DocIndex,
    filter: Option<&PublishedFilter>,
) {
    let fields: Vec<&FieldMeta> = enum_type
        .fields
        .iter()
        .filter(|f| {
            f.is_literal
                && filter.map_or(true, |flt| {
                    let member = format!("{}.{}", enum_type.full_name(), f.name);
                    flt.admits(&member, &f.attributes, f.attribute_error.as_deref())
                })
        })
        .collect();
    buf.push_str(&format!("class {}(Enum):\n", enum_type.name));
    match doc.get(&type_key(namespace, &enum_type.name)) {
        Some(entry) => write_docstring(buf, Some(entry), 1),
        None => write_missing_type_docstring(buf, &enum_type.name, "enum"),
    }
    buf.push('\n');
    for field in &fields {
        write_enum_field(buf, field, 1);
    }
    if fields.is_empty() {
        buf.push_str(&format!("{}pass\n", indent(1)));
    }
    buf.push('\n');
}

/// Append one property in the accessor shape the record calls for.
///
/// Static read-write properties are a structural impossibility in the input
/// model; hitting one means the reflection export and the docs disagree, and
/// the run stops rather than guess which accessor to keep.
pub fn write_property(buf: &mut String, prop: &Property, indent_level: usize) {
    let pad = indent(indent_level);
    let body_pad = indent(indent_level + 1);
    let py_type = pytype::to_python(&prop.ty);
    if prop.is_static {
        assert!(
            prop.getter && !prop.setter,
            "static getter+setter is not a supported property shape: {}",
            prop.name
        );
        buf.push_str(&format!("{pad}@classmethod\n"));
        buf.push_str(&format!("{pad}@property\n"));
        buf.push_str(&format!(
            "{pad}def {}(cls) -> typing.Optional[{}]:\n",
            prop.name, py_type
        ));
        write_property_docstring(buf, prop, indent_level + 1);
        match prop.value.as_ref().map(render_static_value) {
            Some(literal) => buf.push_str(&format!("{body_pad}return {literal}\n")),
            None => buf.push_str(&format!("{body_pad}return None\n")),
        }
    } else if prop.setter && !prop.getter {
        // Write-only: the read-decorator idiom cannot express it, so emit a
        // plain method and bind only the setter slot of a descriptor.
        buf.push_str(&format!(
            "{pad}def {}(self, newvalue: typing.Optional[{}]) -> None:\n",
            prop.name, py_type
        ));
        write_property_docstring(buf, prop, indent_level + 1);
        buf.push_str(&format!("{body_pad}return None\n"));
        buf.push('\n');
        buf.push_str(&format!("{pad}{} = property(None, {})\n", prop.name, prop.name));
    } else {
        assert!(prop.getter, "property without any accessor: {}", prop.name);
        buf.push_str(&format!("{pad}@property\n"));
        buf.push_str(&format!(
            "{pad}def {}(self) -> typing.Optional[{}]:\n",
            prop.name, py_type
        ));
        write_property_docstring(buf, prop, indent_level + 1);
        buf.push_str(&format!("{body_pad}return None\n"));
    }
    buf.push('\n');
}

fn write_property_docstring(buf: &mut String, prop: &Property, indent_level: usize) {
    match prop.doc.as_ref() {
        Some(entry) => write_docstring(buf, Some(entry), indent_level),
        None => write_missing_member_docstring(buf, &prop.name, "property", indent_level),
    }
}

/// Render a baked static value as a Python expression. Stringified values are
/// expressions themselves (typically enum members) and may carry arity
/// markers that need the same cleanup as type names.
fn render_static_value(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.contains('`') {
                pytype::fix_str(s)
            } else {
                s.clone()
            }
        }
        other => other.to_string(),
    }
}

/// Append one method stub.
pub fn write_method(buf: &mut String, method: &Method, indent_level: usize) {
    let pad = indent(indent_level);
    let body_pad = indent(indent_level + 1);
    let first_arg = if method.is_static {
        buf.push_str(&format!("{pad}@classmethod\n"));
        "cls"
    } else {
        "self"
    };
    let mut args = vec![first_arg.to_string()];
    args.extend(
        method
            .args
            .iter()
            .map(|arg| format!("{}: {}", arg.name, pytype::to_python(&arg.ty))),
    );
    buf.push_str(&format!(
        "{pad}def {}({}) -> {}:\n",
        method.name,
        args.join(", "),
        pytype::to_python(&method.return_type)
    ));
    match method.doc.as_ref() {
        Some(entry) => write_docstring(buf, Some(entry), indent_level + 1),
        None => write_missing_member_docstring(buf, &method.name, "method", indent_level + 1),
    }
    buf.push_str(&format!("{body_pad}pass\n"));
    buf.push('\n');
}

/// Append one class or interface with all of its published members.
pub fn write_class(
    buf: &mut String,
    class_type: &TypeMeta,
    namespace: &str,
    doc: &DocIndex,
    filter: Option<&PublishedFilter>,
) {
    buf.push_str(&format!("class {}(object):\n", class_type.name));
    match doc.get(&type_key(namespace, &class_type.name)) {
        Some(entry) => write_docstring(buf, Some(entry), 1),
        None => write_missing_type_docstring(buf, &class_type.name, "class"),
    }
    buf.push('\n');
    let props = get_properties(class_type, doc, filter);
    for prop in &props {
        write_property(buf, prop, 1);
    }
    let methods = get_methods(class_type, doc, filter);
    for method in &methods {
        write_method(buf, method, 1);
    }
    if props.is_empty() && methods.is_empty() {
        buf.push_str(&format!("{}pass\n", indent(1)));
    }
    buf.push('\n');
}
