//! Shared fixtures for the integration tests: a small published assembly with
//! its XML documentation, written into a temporary install directory.

use std::path::Path;

use clrstubs::assembly::PUBLISHED_ATTRIBUTE;
use serde_json::json;

/// Write `<name>.json` metadata into `dir`.
pub fn write_assembly(dir: &Path, name: &str, metadata: &serde_json::Value) {
    let path = dir.join(format!("{name}.json"));
    std::fs::write(path, serde_json::to_string_pretty(metadata).unwrap()).unwrap();
}

/// Write `<name>.xml` documentation into `dir`.
pub fn write_docs(dir: &Path, name: &str, xml: &str) {
    let path = dir.join(format!("{name}.xml"));
    std::fs::write(path, xml).unwrap();
}

/// A small but representative assembly: a documented class, an interface, an
/// enum with reserved-word members, an unpublished type and a DesignModeler
/// type that must never reach the output.
pub fn sample_assembly() -> serde_json::Value {
    json!({
        "name": "Ansys.Mechanical.DataModel",
        "types": [
            {
                "name": "Model",
                "namespace": "Ansys.Mechanical.DataModel",
                "kind": "class",
                "attributes": [PUBLISHED_ATTRIBUTE],
                "properties": [
                    {
                        "name": "Name",
                        "type": "System.String",
                        "declaring_type": "Ansys.Mechanical.DataModel.Model",
                        "getter": { "public": true },
                        "attributes": [PUBLISHED_ATTRIBUTE]
                    },
                    {
                        "name": "Comment",
                        "type": "System.String",
                        "declaring_type": "Ansys.Mechanical.DataModel.Model",
                        "setter": { "public": true },
                        "attributes": [PUBLISHED_ATTRIBUTE]
                    }
                ],
                "methods": [
                    {
                        "name": "Duplicate",
                        "return_type": "Ansys.Mechanical.DataModel.Model",
                        "declaring_type": "Ansys.Mechanical.DataModel.Model",
                        "parameters": [
                            { "name": "name", "type": "System.String" }
                        ],
                        "attributes": [PUBLISHED_ATTRIBUTE]
                    },
                    {
                        "name": "GetChildren",
                        "return_type": "System.Collections.Generic.IList`1",
                        "declaring_type": "Ansys.Mechanical.DataModel.Model",
                        "parameters": [
                            { "name": "recurses", "type": "System.Boolean" }
                        ],
                        "attributes": [PUBLISHED_ATTRIBUTE]
                    }
                ]
            },
            {
                "name": "IDataModelObject",
                "namespace": "Ansys.Mechanical.Interfaces",
                "kind": "interface",
                "properties": [
                    {
                        "name": "Parent",
                        "type": "System.Object",
                        "declaring_type": "Ansys.Mechanical.Interfaces.IDataModelObject",
                        "getter": { "public": false },
                        "attributes": [PUBLISHED_ATTRIBUTE]
                    }
                ]
            },
            {
                "name": "YesNoType",
                "namespace": "Ansys.Mechanical.DataModel.Enums",
                "kind": "enum",
                "attributes": [PUBLISHED_ATTRIBUTE],
                "fields": [
                    { "name": "None", "is_literal": true, "value": 0,
                      "attributes": [PUBLISHED_ATTRIBUTE] },
                    { "name": "Yes", "is_literal": true, "value": 1,
                      "attributes": [PUBLISHED_ATTRIBUTE] }
                ]
            },
            {
                "name": "InternalHelper",
                "namespace": "Ansys.Mechanical.DataModel",
                "kind": "class"
            },
            {
                "name": "Primitive",
                "namespace": "DesignModeler",
                "kind": "class",
                "attributes": [PUBLISHED_ATTRIBUTE]
            }
        ]
    })
}

/// XML documentation matching [`sample_assembly`]. The `Comment` property and
/// `GetChildren` are deliberately undocumented.
pub fn sample_docs() -> &'static str {
    r#"<?xml version="1.0"?>
<doc>
    <assembly><name>Ansys.Mechanical.DataModel</name></assembly>
    <members>
        <member name="T:Ansys.Mechanical.DataModel.Model">
            <summary>Defines the top level simulation model.</summary>
        </member>
        <member name="P:Ansys.Mechanical.DataModel.Model.Name">
            <summary>Gets the name of the model.</summary>
        </member>
        <member name="M:Ansys.Mechanical.DataModel.Model.Duplicate(System.String)">
            <summary>Creates a copy of the model.</summary>
        </member>
        <member name="T:Ansys.Mechanical.DataModel.Enums.YesNoType">
            <summary>Specifies a yes or no choice.</summary>
        </member>
    </members>
</doc>
"#
}
