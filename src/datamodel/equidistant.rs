use crate::property::Property;
use crate::records::Equidistant;
use crate::result::FieldResult;
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct};
use crate::transformers::{boolean, positive_float};

use super::base::DatamodelBase;
use super::cue_pointer::{CuePointerObject, CuePointerUsage, cue_pointer_list};

/// Schema for `equidistant` datamodels: cues `distance` beats apart, so the
/// pointers' own `beat` and `duration` are not used
#[derive(Debug, Clone)]
pub struct EquidistantObject {
    /// Shared datamodel fields
    pub base:        DatamodelBase,
    /// `distance` between cues, in beats
    pub distance:    Property<f64>,
    /// `stretchable`
    pub stretchable: Property<bool>,
    /// `cues`
    pub cues:        Property<Vec<FieldResult<CuePointerObject>>>,
}

impl EquidistantObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            base:        DatamodelBase::new(),
            distance:    Property::required(
                "distance",
                positive_float("Distance must be greater than zero", false),
                0.0,
            ),
            stretchable: Property::optional("stretchable", boolean, false),
            cues:        Property::required(
                "cues",
                cue_pointer_list(CuePointerUsage::UNPLACED),
                Vec::new(),
            ),
        }
    }
}

impl Default for EquidistantObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for EquidistantObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        let mut properties = self.base.properties();
        properties.extend([
            &self.distance as &dyn AnyProperty,
            &self.stretchable,
            &self.cues,
        ]);
        properties
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        let mut properties = self.base.properties_mut();
        properties.extend([
            &mut self.distance as &mut dyn AnyProperty,
            &mut self.stretchable,
            &mut self.cues,
        ]);
        properties
    }
}

impl Reconstruct for EquidistantObject {
    type Record = Equidistant;

    fn reconstruct(&self, r: &mut Reconstruction) -> Equidistant {
        Equidistant {
            info:        self.base.reconstruct(r),
            distance:    r.take(&self.distance),
            stretchable: r.take(&self.stretchable),
            cues:        r.take_list(&self.cues, |pointer, r| pointer.reconstruct(r)),
        }
    }
}
