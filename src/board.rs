//! Name-keyed collection of independent sliders, driven as a unit once per
//! frame and addressed by the names used in interaction descriptions.

use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use std::collections::hash_map::Entry;
use std::time::Duration;

use crate::config::SliderConfig;
use crate::error::{Result, SliderError};
use crate::event::{Attribute, AttributeValue, SliderEvent};
use crate::projector::Pose;
use crate::slider::Slider;

/// A slider event tagged with the name of the slider that emitted it.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardEvent {
    pub slider: String,
    pub event: SliderEvent,
}

#[derive(Clone, Debug, Default)]
pub struct SliderBoard {
    sliders: FnvHashMap<String, Slider>,
}

impl SliderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and register a slider. Names must be unique.
    pub fn insert(
        &mut self,
        config: &SliderConfig,
        rest_local_position: Vec3,
        parent: Mat4,
    ) -> Result<&mut Slider> {
        match self.sliders.entry(config.name.clone()) {
            Entry::Occupied(_) => Err(SliderError::DuplicateSlider {
                name: config.name.clone(),
            }),
            Entry::Vacant(slot) => {
                let slider = Slider::new(config, rest_local_position, parent)?;
                log::info!(
                    "[board] registered {} resolution={:?} transition={:?}",
                    config.name,
                    config.resolution,
                    config.transition
                );
                Ok(slot.insert(slider))
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Slider> {
        self.sliders.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Slider> {
        self.sliders.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Slider> {
        self.sliders.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slider> {
        self.sliders.values()
    }

    fn slider_mut(&mut self, name: &str) -> Result<&mut Slider> {
        self.sliders
            .get_mut(name)
            .ok_or_else(|| SliderError::UnknownSlider {
                name: name.to_owned(),
            })
    }

    /// Apply a textual attribute, e.g. `("volume", "VALUE", "0.75")`.
    pub fn set_attribute_by_name(&mut self, slider: &str, attribute: &str, raw: &str) -> Result<()> {
        let attribute: Attribute = attribute.parse()?;
        let value = AttributeValue::parse(attribute, raw)?;
        self.slider_mut(slider)?.set_attribute(attribute, value)
    }

    pub fn begin_drag(&mut self, name: &str, pose: &Pose, out: &mut Vec<BoardEvent>) -> Result<()> {
        let mut events = Vec::new();
        self.slider_mut(name)?.begin_drag(pose, &mut events);
        tag_events(name, events, out);
        Ok(())
    }

    pub fn continue_drag(&mut self, name: &str, pose: &Pose, out: &mut Vec<BoardEvent>) -> Result<bool> {
        let mut events = Vec::new();
        let changed = self.slider_mut(name)?.continue_drag(pose, &mut events)?;
        tag_events(name, events, out);
        Ok(changed)
    }

    pub fn end_drag(&mut self, name: &str, pose: &Pose, out: &mut Vec<BoardEvent>) -> Result<f32> {
        let mut events = Vec::new();
        let value = self.slider_mut(name)?.end_drag(pose, &mut events)?;
        tag_events(name, events, out);
        Ok(value)
    }

    /// Advance every running animation by `dt`. Returns how many handles moved.
    pub fn tick(&mut self, dt: Duration) -> usize {
        self.sliders
            .values_mut()
            .map(|s| s.tick(dt))
            .filter(|moved| *moved)
            .count()
    }
}

fn tag_events(name: &str, events: Vec<SliderEvent>, out: &mut Vec<BoardEvent>) {
    out.extend(events.into_iter().map(|event| BoardEvent {
        slider: name.to_owned(),
        event,
    }));
}
