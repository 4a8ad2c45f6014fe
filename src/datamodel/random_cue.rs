use crate::property::Property;
use crate::records::RandomCue;
use crate::result::FieldResult;
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct};
use crate::transformers::response_ids;

use super::base::DatamodelBase;
use super::cue_pointer::{CuePointerObject, CuePointerUsage, cue_pointer_list};

/// Schema for `randomCue` datamodels; one pointer is picked at play time so
/// placement fields are not used
#[derive(Debug, Clone)]
pub struct RandomCueObject {
    /// Shared datamodel fields
    pub base:         DatamodelBase,
    /// `cues`, one of which plays
    pub cues:         Property<Vec<FieldResult<CuePointerObject>>>,
    /// `responseIDs`
    pub response_ids: Property<Vec<String>>,
}

impl RandomCueObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            base:         DatamodelBase::new(),
            cues:         Property::required(
                "cues",
                cue_pointer_list(CuePointerUsage::UNPLACED),
                Vec::new(),
            ),
            response_ids: Property::optional("responseIDs", response_ids, Vec::new()),
        }
    }
}

impl Default for RandomCueObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for RandomCueObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        let mut properties = self.base.properties();
        properties.extend([&self.cues as &dyn AnyProperty, &self.response_ids]);
        properties
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        let mut properties = self.base.properties_mut();
        properties.extend([
            &mut self.cues as &mut dyn AnyProperty,
            &mut self.response_ids,
        ]);
        properties
    }
}

impl Reconstruct for RandomCueObject {
    type Record = RandomCue;

    fn reconstruct(&self, r: &mut Reconstruction) -> RandomCue {
        RandomCue {
            info:         self.base.reconstruct(r),
            cues:         r.take_list(&self.cues, |pointer, r| pointer.reconstruct(r)),
            response_ids: r.take(&self.response_ids),
        }
    }
}
