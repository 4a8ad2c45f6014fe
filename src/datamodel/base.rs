use crate::constants::UNKNOWN_ID;
use crate::property::Property;
use crate::records::DatamodelInfo;
use crate::schema::{AnyProperty, Reconstruction};
use crate::transformers::{id, non_empty_string, string_array};

/// Fields shared by every datamodel kind
#[derive(Debug, Clone)]
pub struct DatamodelBase {
    /// `id`, required
    pub id:             Property<String>,
    /// `name`, required and non-empty
    pub name:           Property<String>,
    /// `deprecatedIDs`, older ids this object replaces
    pub deprecated_ids: Property<Vec<String>>,
}

impl DatamodelBase {
    /// Base fields in their initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            id:             Property::required("id", id, String::new()),
            name:           Property::required("name", non_empty_string, String::new()),
            deprecated_ids: Property::optional("deprecatedIDs", string_array, Vec::new()),
        }
    }

    /// Capability table entries for the base fields
    #[must_use]
    pub fn properties(&self) -> Vec<&dyn AnyProperty> {
        vec![&self.id as &dyn AnyProperty, &self.name, &self.deprecated_ids]
    }

    /// Mutable capability table entries for the base fields
    pub fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        vec![
            &mut self.id as &mut dyn AnyProperty,
            &mut self.name,
            &mut self.deprecated_ids,
        ]
    }

    /// Validated id, or `unknown` for messages
    #[must_use]
    pub fn id_or_unknown(&self) -> &str {
        self.id.value().map_or(UNKNOWN_ID, String::as_str)
    }

    /// Record of the base fields
    pub fn reconstruct(&self, r: &mut Reconstruction) -> DatamodelInfo {
        DatamodelInfo {
            id:             r.take(&self.id),
            name:           r.take(&self.name),
            deprecated_ids: r.take(&self.deprecated_ids),
        }
    }
}

impl Default for DatamodelBase {
    fn default() -> Self {
        Self::new()
    }
}
