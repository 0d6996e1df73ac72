use crate::command::{Command, FrameEntry, Layout, decode_frame};
use crate::config::{ApplierConfig, DuplicatePolicy, FailurePolicy};
use crate::error::{ApplyError, DecodeError, SurfaceError};
use crate::node::{ElementKind, NodeId, NodeRegistry};
use crate::style::{StyleProperty, StyleValue};
use crate::surface::Surface;
use thiserror::Error;
use tracing::{debug, error, warn};

/// A frame record skipped because its kind is unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCommand {
    pub index: usize,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandFailure {
    pub index: usize,
    pub error: ApplyError,
}

/// Outcome of one batch; indices refer to positions in the batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub applied: usize,
    pub skipped: Vec<SkippedCommand>,
    /// Only filled under `FailurePolicy::Continue`
    pub failures: Vec<CommandFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failures.is_empty()
    }
}

/// A batch stopped at a failing command under `FailurePolicy::Abort`
#[derive(Debug, Error)]
#[error("command {index} failed: {source}")]
pub struct BatchError {
    pub index: usize,
    /// What happened before the failure
    pub report: BatchReport,
    pub source: ApplyError,
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// Applies commands to a surface, tracking which element each node id owns
pub struct CommandApplier<S: Surface> {
    surface: S,
    registry: NodeRegistry<S::Element>,
    config: ApplierConfig,
}

impl<S: Surface> CommandApplier<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, ApplierConfig::default())
    }

    pub fn with_config(surface: S, config: ApplierConfig) -> Self {
        Self {
            surface,
            registry: NodeRegistry::new(),
            config,
        }
    }

    /// Apply `commands` in order
    pub fn apply_batch(&mut self, commands: &[Command]) -> Result<BatchReport, BatchError> {
        if self.config.log_batches {
            debug!(count = commands.len(), batch = ?commands, "applying batch");
        }

        let mut report = BatchReport::default();
        for (index, command) in commands.iter().enumerate() {
            let result = self.apply(command);
            if let Err(source) = self.settle(index, command.kind_name(), result, &mut report) {
                return Err(BatchError {
                    index,
                    report,
                    source,
                });
            }
        }

        Ok(report)
    }

    /// Decode a JSON frame and apply it, skipping records of unknown kind
    pub fn apply_frame(&mut self, frame: &str) -> Result<BatchReport, FrameError> {
        if self.config.log_batches {
            debug!(frame, "received frame");
        }

        let entries = decode_frame(frame)?;
        let mut report = BatchReport::default();

        for (index, entry) in entries.into_iter().enumerate() {
            let (kind, result) = match entry {
                FrameEntry::Command(command) => {
                    (command.kind_name().to_string(), self.apply(&command))
                }
                FrameEntry::Unknown { kind } => {
                    warn!(index, kind = %kind, "unknown command");
                    report.skipped.push(SkippedCommand { index, kind });
                    continue;
                }
                FrameEntry::Invalid { kind, reason } => (
                    kind.clone(),
                    Err(ApplyError::InvalidCommand { kind, reason }),
                ),
            };

            if let Err(source) = self.settle(index, &kind, result, &mut report) {
                return Err(BatchError {
                    index,
                    report,
                    source,
                }
                .into());
            }
        }

        Ok(report)
    }

    pub fn apply(&mut self, command: &Command) -> Result<(), ApplyError> {
        match command {
            Command::CreateNode { node, kind } => self.create_node(*node, kind),
            Command::DeleteNode { node } => self.delete_node(*node),
            Command::SetLayout { node, layout } => self.set_layout(*node, *layout),
            Command::SetText { node, text } => self.set_text(*node, text),
            Command::SetStyle {
                node,
                property,
                value,
            } => self.set_style(*node, *property, value),
        }
    }

    /// Create an absolutely positioned, border-box element under the root
    pub fn create_node(&mut self, id: NodeId, kind: &ElementKind) -> Result<(), ApplyError> {
        if self.registry.contains(id) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => return Err(ApplyError::DuplicateNode(id)),
                DuplicatePolicy::Replace => {
                    debug!(node = %id, "replacing existing node");
                    self.delete_node(id)?;
                }
            }
        }

        let element = self.surface.create_element(kind)?;
        if let Err(err) = self.attach(&element) {
            // never registered, so nothing else can reach it
            if let Err(cleanup) = self.surface.remove(&element) {
                warn!(node = %id, %cleanup, "failed to release unattached element");
            }
            return Err(err.into());
        }

        self.registry.insert(id, element);
        Ok(())
    }

    pub fn delete_node(&mut self, id: NodeId) -> Result<(), ApplyError> {
        let element = self.registry.lookup(id)?;
        self.surface.remove(element)?;
        self.registry.remove(id)?;
        Ok(())
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), ApplyError> {
        let element = self.registry.lookup(id)?;
        self.surface.set_text(element, text)?;
        Ok(())
    }

    pub fn set_style(
        &mut self,
        id: NodeId,
        property: StyleProperty,
        value: &StyleValue,
    ) -> Result<(), ApplyError> {
        let element = self.registry.lookup(id)?;
        self.surface.set_style(element, property, value)?;
        Ok(())
    }

    /// Position and size the node through `left`/`top`/`width`/`height`
    pub fn set_layout(&mut self, id: NodeId, layout: Layout) -> Result<(), ApplyError> {
        let element = self.registry.lookup(id)?;
        for (property, px) in [
            (StyleProperty::Left, layout.x()),
            (StyleProperty::Top, layout.y()),
            (StyleProperty::Width, layout.w()),
            (StyleProperty::Height, layout.h()),
        ] {
            self.surface.set_style(element, property, &StyleValue::px(px))?;
        }
        Ok(())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.registry.contains(id)
    }

    pub fn element(&self, id: NodeId) -> Option<&S::Element> {
        self.registry.get(id)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn registry(&self) -> &NodeRegistry<S::Element> {
        &self.registry
    }

    pub fn config(&self) -> &ApplierConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn attach(&mut self, element: &S::Element) -> Result<(), SurfaceError> {
        self.surface.set_style(
            element,
            StyleProperty::Position,
            &StyleValue::Keyword("absolute"),
        )?;
        self.surface.set_style(
            element,
            StyleProperty::BoxSizing,
            &StyleValue::Keyword("border-box"),
        )?;
        self.surface.append_to_root(element)
    }

    fn settle(
        &self,
        index: usize,
        kind: &str,
        result: Result<(), ApplyError>,
        report: &mut BatchReport,
    ) -> Result<(), ApplyError> {
        let Err(error) = result else {
            report.applied += 1;
            return Ok(());
        };

        error!(index, kind, %error, "command failed");
        match self.config.failure_policy {
            FailurePolicy::Abort => Err(error),
            FailurePolicy::Continue => {
                report.failures.push(CommandFailure { index, error });
                Ok(())
            }
        }
    }
}
