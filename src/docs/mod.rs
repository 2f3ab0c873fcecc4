//! Assembly XML documentation handling.
//!
//! A .NET build can drop a `<AssemblyName>.xml` file next to the assembly,
//! keyed by kind-prefixed member signatures (`T:`, `P:`, `M:`). This module
//! parses that file into an immutable [`DocIndex`] and owns the construction
//! of lookup keys, including the escape quirks of the documentation exporter.
//!
//! A key that fails to match is a normal condition: the member is simply
//! emitted with a synthesized docstring.

mod index;
mod keys;

pub use index::{DocEntry, DocIndex};
pub use keys::{escape_doc_key, method_key, property_key, type_key};
