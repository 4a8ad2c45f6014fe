use crate::property::Property;
use crate::records::Cue;
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct};
use crate::transformers::{
    boolean, float, id, nullable, positive_float, response_ids, sound_file_extension,
};
use crate::types::SoundFileExtension;

use super::base::DatamodelBase;

/// Schema for `cue` datamodels: a single sound file.
///
/// `duration` may be zero here, unlike the strictly positive `distance` and
/// `defaultDuration` of equidistant and keep-the-beat.
#[derive(Debug, Clone)]
pub struct CueObject {
    /// Shared datamodel fields
    pub base:                DatamodelBase,
    /// `duration` in beats, required
    pub duration:            Property<f64>,
    /// `stretchable`
    pub stretchable:         Property<bool>,
    /// `repitchable`
    pub repitchable:         Property<bool>,
    /// `fileExtension`, defaults to ogg
    pub file_extension:      Property<SoundFileExtension>,
    /// `loops`
    pub loops:               Property<bool>,
    /// `introSound`, id of a cue played before this one
    pub intro_sound:         Property<Option<String>>,
    /// `endingSound`, id of a cue played after this one
    pub ending_sound:        Property<Option<String>>,
    /// `responseIDs`
    pub response_ids:        Property<Vec<String>>,
    /// `baseBpm`
    pub base_bpm:            Property<f64>,
    /// `useTimeStretching`
    pub use_time_stretching: Property<bool>,
    /// `earliness`
    pub earliness:           Property<f64>,
    /// `loopStart`
    pub loop_start:          Property<f64>,
    /// `loopEnd`, `-1` meaning the end of the file
    pub loop_end:            Property<f64>,
}

impl CueObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            base:                DatamodelBase::new(),
            duration:            Property::required(
                "duration",
                positive_float("Duration must be non-negative", true),
                0.0,
            ),
            stretchable:         Property::optional("stretchable", boolean, false),
            repitchable:         Property::optional("repitchable", boolean, false),
            file_extension:      Property::optional(
                "fileExtension",
                sound_file_extension,
                SoundFileExtension::Ogg,
            ),
            loops:               Property::optional("loops", boolean, false),
            intro_sound:         Property::optional("introSound", nullable(id), None),
            ending_sound:        Property::optional("endingSound", nullable(id), None),
            response_ids:        Property::optional("responseIDs", response_ids, Vec::new()),
            base_bpm:            Property::optional(
                "baseBpm",
                positive_float("Base BPM must be non-negative", true),
                0.0,
            ),
            use_time_stretching: Property::optional("useTimeStretching", boolean, true),
            earliness:           Property::optional(
                "earliness",
                positive_float("Earliness must be non-negative", true),
                0.0,
            ),
            loop_start:          Property::optional(
                "loopStart",
                positive_float("Loop start must be non-negative", true),
                0.0,
            ),
            loop_end:            Property::optional("loopEnd", float, -1.0),
        }
    }
}

impl Default for CueObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for CueObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        let mut properties = self.base.properties();
        properties.extend([
            &self.duration as &dyn AnyProperty,
            &self.stretchable,
            &self.repitchable,
            &self.file_extension,
            &self.loops,
            &self.intro_sound,
            &self.ending_sound,
            &self.response_ids,
            &self.base_bpm,
            &self.use_time_stretching,
            &self.earliness,
            &self.loop_start,
            &self.loop_end,
        ]);
        properties
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        let mut properties = self.base.properties_mut();
        properties.extend([
            &mut self.duration as &mut dyn AnyProperty,
            &mut self.stretchable,
            &mut self.repitchable,
            &mut self.file_extension,
            &mut self.loops,
            &mut self.intro_sound,
            &mut self.ending_sound,
            &mut self.response_ids,
            &mut self.base_bpm,
            &mut self.use_time_stretching,
            &mut self.earliness,
            &mut self.loop_start,
            &mut self.loop_end,
        ]);
        properties
    }
}

impl Reconstruct for CueObject {
    type Record = Cue;

    fn reconstruct(&self, r: &mut Reconstruction) -> Cue {
        Cue {
            info:                self.base.reconstruct(r),
            duration:            r.take(&self.duration),
            stretchable:         r.take(&self.stretchable),
            repitchable:         r.take(&self.repitchable),
            file_extension:      r.take(&self.file_extension),
            loops:               r.take(&self.loops),
            intro_sound:         r.take(&self.intro_sound),
            ending_sound:        r.take(&self.ending_sound),
            response_ids:        r.take(&self.response_ids),
            base_bpm:            r.take(&self.base_bpm),
            use_time_stretching: r.take(&self.use_time_stretching),
            earliness:           r.take(&self.earliness),
            loop_start:          r.take(&self.loop_start),
            loop_end:            r.take(&self.loop_end),
        }
    }
}
