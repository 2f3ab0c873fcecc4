//! Assembly metadata model and loading.
//!
//! Live-runtime reflection is replaced by a serialized metadata document: one
//! JSON file per assembly describing its types, members and custom
//! attributes, co-located with the assembly's XML documentation file. The
//! structs here are a read-only object graph for the duration of one
//! generation run.

mod filter;
mod load;
mod types;

pub use filter::{PublishedFilter, PUBLISHED_ATTRIBUTE};
pub use load::{group_namespaces, load_assembly};
pub use types::{
    AccessorMeta, AssemblyMeta, FieldMeta, MethodMeta, ParameterMeta, PropertyMeta, TypeKind,
    TypeMeta,
};
