//! Doc-key construction and exporter-specific escaping.

/// One exporter quirk: a literal pattern and its replacement. When
/// `swap_brackets` is set, every remaining `]` in the key becomes `}` after
/// the substitution, matching how the exporter brace-delimits generic
/// argument lists.
struct KeyRule {
    pattern: &'static str,
    replacement: &'static str,
    swap_brackets: bool,
}

/// Ordered quirk table for method keys. These rules are coupled to one
/// specific documentation exporter and are additive: new quirks get new
/// entries, existing entries never generalize.
const DOC_KEY_RULES: &[KeyRule] = &[
    // GetChildren(System...) is written GetChildren``1(System...) in the XML.
    KeyRule {
        pattern: ".GetChildren(System",
        replacement: ".GetChildren``1(System",
        swap_brackets: false,
    },
    // IList`1[ChildrenType] collapses to the generic placeholder token.
    KeyRule {
        pattern: "IList`1[ChildrenType]",
        replacement: "IList{``0}",
        swap_brackets: false,
    },
    // Domain generic-of-one/-of-two and IEnumerable-of-System use the
    // brace-delimited form in the XML.
    KeyRule {
        pattern: "`1[Ansys",
        replacement: "{Ansys",
        swap_brackets: true,
    },
    KeyRule {
        pattern: "`2[Ansys",
        replacement: "{Ansys",
        swap_brackets: true,
    },
    KeyRule {
        pattern: "IEnumerable`1[System",
        replacement: "IEnumerable{System",
        swap_brackets: true,
    },
    // Nested-class separator is a dot in doc keys.
    KeyRule {
        pattern: "+",
        replacement: ".",
        swap_brackets: false,
    },
];

/// Key for a class, interface or enum entry.
pub fn type_key(namespace: &str, name: &str) -> String {
    format!("T:{namespace}.{name}")
}

/// Key for a property entry.
pub fn property_key(declaring_type: &str, name: &str) -> String {
    format!("P:{declaring_type}.{name}")
}

/// Key for a method entry. Parameter types are the raw CLR names, arity
/// markers intact, since that is what the escape rules match against. The
/// zero-parameter form omits the parentheses entirely.
pub fn method_key(declaring_type: &str, name: &str, param_types: &[String]) -> String {
    let key = if param_types.is_empty() {
        format!("M:{declaring_type}.{name}")
    } else {
        format!("M:{declaring_type}.{name}({})", param_types.join(","))
    };
    escape_doc_key(&key)
}

/// Apply the ordered exporter-quirk table to a raw key.
pub fn escape_doc_key(raw: &str) -> String {
    let mut key = raw.to_string();
    for rule in DOC_KEY_RULES {
        if key.contains(rule.pattern) {
            key = key.replace(rule.pattern, rule.replacement);
            if rule.swap_brackets {
                key = key.replace(']', "}");
            }
        }
    }
    key
}
