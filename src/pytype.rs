//! .NET type-name normalization.
//!
//! Reflection hands us type names in CLR string syntax: backtick arity markers
//! on generics (`` IList`1 ``), bracketed generic argument lists, `+` as the
//! nested-class separator and `[]` array suffixes. The emitter needs Python
//! annotation expressions instead. Well-known BCL names map to fixed Python
//! equivalents; anything else becomes a quoted forward reference so that the
//! generated packages never have to import every type they mention.

use once_cell::sync::Lazy;
use regex::Regex;

/// Well-known CLR type names and their Python annotation equivalents.
///
/// `System.UInt32` intentionally narrows to `int` alongside `System.Int32`;
/// Python has no unsigned integer type and the stubs only carry shape.
const WELL_KNOWN: &[(&str, &str)] = &[
    ("System.Boolean", "bool"),
    ("System.String", "str"),
    ("System.Double", "float"),
    ("System.Int32", "int"),
    ("System.UInt32", "int"),
    ("System.Void", "None"),
    ("System.Object", "typing.Any"),
    ("System.Collections.Generic.IEnumerable", "typing.Iterable"),
    ("System.Collections.Generic.IList", "list"),
    ("System.Collections.Generic.List", "list"),
    ("System.Collections.Generic.IDictionary", "dict"),
    ("System.Collections.Generic.Dictionary", "dict"),
    ("System.Collections.Generic.IReadOnlyList", "tuple"),
    ("System.Collections.Generic.KeyValuePair", "dict"),
    ("System.Tuple", "tuple"),
    ("IronPython.Runtime.PythonTuple", "tuple"),
];

/// Generic arity marker as the CLR prints it: a backtick followed by a digit.
static ARITY_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new("`\\d").expect("static pattern"));

fn well_known(name: &str) -> Option<&'static str> {
    WELL_KNOWN
        .iter()
        .find(|(clr, _)| *clr == name)
        .map(|(_, py)| *py)
}

/// True when `name` is already one of the Python forms we emit, so a second
/// normalization pass leaves it untouched.
fn is_python_form(name: &str) -> bool {
    WELL_KNOWN.iter().any(|(_, py)| *py == name)
}

/// Strip the raw-syntax artifacts from a CLR type name: arity markers
/// (recursively, nested generics carry several), nested-class `+` separators
/// and trailing array suffixes.
pub fn fix_str(input: &str) -> String {
    let replaced = input.replace('+', ".").replace("[]", "");
    ARITY_MARKER.replace_all(&replaced, "").into_owned()
}

/// Convert a raw CLR type name into a Python annotation expression.
///
/// Well-known names map directly, generic containers recurse into their
/// argument lists, and any unmapped name is wrapped as a quoted forward
/// reference. Applying the function to its own output is a no-op for
/// well-known names.
pub fn to_python(raw: &str) -> String {
    let cleaned = fix_str(raw.trim().trim_matches('"'));
    render(&cleaned)
}

fn render(name: &str) -> String {
    if let Some((outer, args)) = split_generic(name) {
        let rendered: Vec<String> = args
            .iter()
            .map(|arg| render(arg.trim().trim_matches('"')))
            .collect();
        let direct = well_known(outer)
            .map(str::to_string)
            .or_else(|| is_python_form(outer).then(|| outer.to_string()));
        return match direct {
            Some(py) => format!("{}[{}]", py, rendered.join(",")),
            None => {
                // Unmapped generic container (e.g. System.Func): the argument
                // list keeps its direct forms and the whole expression is
                // deferred, so no nested quoting survives inside.
                let inner = rendered.join(",").replace('"', "");
                format!("\"{}[{}]\"", outer, inner)
            }
        };
    }
    if let Some(py) = well_known(name) {
        return py.to_string();
    }
    if is_python_form(name) {
        return name.to_string();
    }
    format!("\"{}\"", name)
}

/// Split `Outer[A,B]` into the container name and its top-level argument
/// list. Returns `None` for non-generic names.
fn split_generic(name: &str) -> Option<(&str, Vec<&str>)> {
    let open = name.find('[')?;
    if !name.ends_with(']') {
        return None;
    }
    let outer = &name[..open];
    let body = &name[open + 1..name.len() - 1];
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    args.push(&body[start..]);
    Some((outer, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_str_strips_arity_markers_recursively() {
        assert_eq!(
            fix_str("System.Collections.Generic.IList`1[System.Collections.Generic.IList`1[T]]"),
            "System.Collections.Generic.IList[System.Collections.Generic.IList[T]]"
        );
    }

    #[test]
    fn test_fix_str_nested_class_and_array() {
        assert_eq!(fix_str("Ansys.Common.Outer+Inner[]"), "Ansys.Common.Outer.Inner");
    }

    #[test]
    fn test_well_known_mapping() {
        for (clr, py) in WELL_KNOWN {
            assert_eq!(to_python(clr), *py);
        }
    }

    #[test]
    fn test_domain_name_is_deferred() {
        assert_eq!(
            to_python("Ansys.ACT.Interfaces.Mechanical.IParameter"),
            "\"Ansys.ACT.Interfaces.Mechanical.IParameter\""
        );
    }

    #[test]
    fn test_generic_container_with_deferred_argument() {
        assert_eq!(
            to_python("System.Collections.Generic.IList`1[ChildrenType]"),
            "list[\"ChildrenType\"]"
        );
    }

    #[test]
    fn test_unmapped_container_is_deferred_whole() {
        assert_eq!(
            to_python("System.Func[Ansys.Mechanical.DataModel.Interfaces.IDataModelObject,System.Boolean]"),
            "\"System.Func[Ansys.Mechanical.DataModel.Interfaces.IDataModelObject,bool]\""
        );
    }

    #[test]
    fn test_nested_generics_quote_only_innermost_domain_name() {
        let raw = "System.Collections.Generic.IEnumerable[System.Collections.Generic.KeyValuePair[System.Int32,System.Collections.Generic.IEnumerable[Ansys.Core.Units.Quantity]]]";
        assert_eq!(
            to_python(raw),
            "typing.Iterable[dict[int,typing.Iterable[\"Ansys.Core.Units.Quantity\"]]]"
        );
    }

    #[test]
    fn test_quoted_input_is_unwrapped_first() {
        assert_eq!(
            to_python("\"System.Tuple[Ansys.Core.Units.Quantity,Ansys.Core.Units.Quantity]\""),
            "tuple[\"Ansys.Core.Units.Quantity\",\"Ansys.Core.Units.Quantity\"]"
        );
        assert_eq!(to_python("\"IronPython.Runtime.PythonTuple\""), "tuple");
    }

    #[test]
    fn test_idempotent_on_normalized_names() {
        for name in ["bool", "str", "int", "float", "tuple", "typing.Any"] {
            assert_eq!(to_python(name), name);
            assert_eq!(to_python(&to_python(name)), name);
        }
        let deferred = to_python("Ansys.Core.Units.Quantity");
        assert_eq!(to_python(&deferred), deferred);
    }
}
