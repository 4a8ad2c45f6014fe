use serde_json::{Map, Value};
use tracing::trace;

use super::Struct;

/// Run every property whose key is present in `object`; absent keys keep
/// their initial state. Not recursive: nested structs are built by the
/// element transformers of list properties.
pub fn bind_object<S: Struct + ?Sized>(target: &mut S, object: &Map<String, Value>) {
    for property in target.properties_mut() {
        let Some(value) = object.get(property.name()) else {
            continue;
        };
        property.set_from_json(value);
        trace!(
            field = property.name(),
            success = property.is_success(),
            "bound property"
        );
    }
}
