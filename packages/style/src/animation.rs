//! Keyframe animations.

use crate::compiler::Compiler;
use crate::error::StyleResult;
use crate::style::Style;
use std::sync::atomic::{AtomicUsize, Ordering};
use stylist_values::Properties;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    /// Progress points in percent.
    pub stops: Vec<u32>,
    pub properties: Properties,
}

/// Ordered keyframes rendered as one `@keyframes` block.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrames {
    name: String,
    frames: Vec<Keyframe>,
}

impl Default for AnimationFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationFrames {
    /// Animation with a generated, process-unique name.
    pub fn new() -> Self {
        Self::named(format!("Anima{}", COUNTER.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a keyframe at each of `stops` with the properties `style` declares.
    pub fn frame(mut self, stops: &[u32], style: &Style) -> StyleResult<Self> {
        self.frames.push(Keyframe {
            stops: stops.to_vec(),
            properties: Compiler::capture(style)?,
        });
        Ok(self)
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }

    /// Keyframes with identical declarations merged into one, their stops
    /// united in ascending order. Merged frames keep the position of the
    /// first occurrence.
    pub fn grouped(&self) -> Vec<Keyframe> {
        let mut grouped: Vec<Keyframe> = Vec::new();

        for frame in &self.frames {
            match grouped
                .iter_mut()
                .find(|known| known.properties == frame.properties)
            {
                Some(known) => known.stops.extend(&frame.stops),
                None => grouped.push(frame.clone()),
            }
        }

        for frame in &mut grouped {
            frame.stops.sort_unstable();
            frame.stops.dedup();
        }
        grouped
    }
}
