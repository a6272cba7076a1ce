//! The studio: named objects, verb dispatch, and the alignment offset.

use crate::objects::PTObject;
use crate::verb::Verb;
use indexmap::IndexMap;
use plotstudio_core::{PlotterOp, Result, StudioError, Vec2};
use plotstudio_device::SharedPlotter;

/// Registry of named drawable objects sharing one plotter.
///
/// The studio is the only layer that talks to the device and the only
/// owner of the alignment offset. Dispatch resolves an object by name,
/// checks the verb against its capability set, compiles it, and forwards
/// the resulting operations with the offset applied to every travel
/// target. Everything forwarded is appended to a history log for later
/// replay or inspection.
///
/// Registration order is preserved: enumeration yields objects in the
/// order they were added.
pub struct Studio {
    objects: IndexMap<String, Box<dyn PTObject>>,
    plotter: SharedPlotter,
    offset: Vec2,
    history: Vec<PlotterOp>,
}

impl Studio {
    /// Create an empty studio around a plotter handle
    pub fn new(plotter: SharedPlotter) -> Self {
        Self {
            objects: IndexMap::new(),
            plotter,
            offset: Vec2::ZERO,
            history: Vec::new(),
        }
    }

    /// Register an object under a unique name.
    ///
    /// Fails with [`StudioError::DuplicateName`] if the name is taken; the
    /// registry is left unchanged.
    pub fn add_object(&mut self, name: impl Into<String>, object: Box<dyn PTObject>) -> Result<()> {
        let name = name.into();
        if self.objects.contains_key(&name) {
            tracing::warn!("Rejected duplicate object name '{}'", name);
            return Err(StudioError::DuplicateName { name }.into());
        }
        tracing::debug!("Registered studio object '{}'", name);
        self.objects.insert(name, object);
        Ok(())
    }

    /// Number of registered objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Registered names, in registration order
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Look up a registered object
    pub fn object(&self, name: &str) -> Option<&dyn PTObject> {
        self.objects.get(name).map(Box::as_ref)
    }

    /// Invoke `verb` on the object registered as `name`.
    ///
    /// Fails with [`StudioError::UnknownObject`] if the name does not
    /// resolve and [`StudioError::UnsupportedVerb`] if the object does not
    /// offer the verb; both are detected before anything reaches the
    /// plotter. Device failures propagate unchanged; operations forwarded
    /// before the failure stay in the history, since the machine already
    /// executed them.
    pub fn dispatch(&mut self, name: &str, verb: &Verb) -> Result<()> {
        let object = self
            .objects
            .get(name)
            .ok_or_else(|| StudioError::UnknownObject {
                name: name.to_string(),
            })?;
        if !object.supports(verb.kind()) {
            return Err(StudioError::UnsupportedVerb {
                object: name.to_string(),
                verb: verb.name().to_string(),
            }
            .into());
        }

        let ops = object.perform(verb)?;
        tracing::debug!(
            "Dispatching {} on '{}' ({} operations)",
            verb.name(),
            name,
            ops.len()
        );

        let mut plotter = self.plotter.borrow_mut();
        for op in ops {
            let op = op.offset_by(self.offset);
            plotter.apply(op)?;
            self.history.push(op);
        }
        Ok(())
    }

    /// The offset currently applied to every travel target
    pub fn alignment_offset(&self) -> Vec2 {
        self.offset
    }

    /// Apply a new alignment offset and mirror it to the plotter.
    pub fn set_alignment_offset(&mut self, offset: Vec2) {
        tracing::debug!("Alignment offset set to {}", offset);
        self.offset = offset;
        self.plotter.borrow_mut().set_alignment_offset(offset);
    }

    /// Zero the alignment offset and clear the plotter's mirror.
    pub fn reset_alignment_offset(&mut self) {
        tracing::debug!("Alignment offset reset");
        self.offset = Vec2::ZERO;
        self.plotter.borrow_mut().reset_alignment_offset();
    }

    /// Everything forwarded to the plotter so far, post-offset, in order
    pub fn history(&self) -> &[PlotterOp] {
        &self.history
    }

    /// Forget the recorded history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Re-drive the recorded history through another plotter.
    ///
    /// Useful for replaying a session onto a fresh device or a recorder.
    /// The history is forwarded verbatim; the current offset is not
    /// re-applied.
    pub fn replay_history(&self, target: &SharedPlotter) -> Result<()> {
        let mut plotter = target.borrow_mut();
        for op in &self.history {
            plotter.apply(*op)?;
        }
        Ok(())
    }
}
