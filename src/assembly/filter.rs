use tracing::warn;

/// Custom attribute marking a member as part of the supported public surface.
pub const PUBLISHED_ATTRIBUTE: &str = "Ansys.Utilities.Sdk.PublishedAttribute";

/// Interface types accepted even without the publication marker. The
/// reflection export leaves these unattributed although they are part of the
/// scripting surface.
const ALWAYS_PUBLISHED: &[&str] = &[
    "Ansys.Mechanical.Interfaces.IDataModelObject",
    "Ansys.Mechanical.Interfaces.IReadOnlyDataModelObject",
];

/// Publication predicate over reflected types and members.
///
/// A member is admitted when the publication marker appears among its custom
/// attributes. Members without any attributes are unpublished, unless their
/// fully-qualified name is on the fixed allow-list. A failed attribute
/// introspection is logged and treated as unpublished rather than aborting
/// the run.
#[derive(Debug, Clone, Default)]
pub struct PublishedFilter;

impl PublishedFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn admits(
        &self,
        full_name: &str,
        attributes: &[String],
        attribute_error: Option<&str>,
    ) -> bool {
        if let Some(err) = attribute_error {
            warn!(member = full_name, error = err, "attribute introspection failed, treating as unpublished");
            return false;
        }
        if attributes.is_empty() {
            return ALWAYS_PUBLISHED.contains(&full_name);
        }
        attributes.iter().any(|a| a == PUBLISHED_ATTRIBUTE)
    }
}
