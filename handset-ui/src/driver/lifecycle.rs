//! UI lifecycle state machine
//!
//! The transition table is explicit, finite and deterministic. Rejected
//! events leave the state unchanged and report why.

/// Lifecycle misuse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiError {
    /// `init` has not been called yet
    NotInitialized,
    /// `init` was called twice
    AlreadyInitialized,
    /// `terminate` has already been called
    Terminated,
    /// A frame is still being drawn
    Busy,
    /// A frame was ended without being begun
    NoFrame,
}

/// UI lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Created, `init` not called
    #[default]
    Uninitialized,
    /// Ready to draw frames
    Ready,
    /// Inside `update`
    Updating,
    /// Shut down; no further frames
    Terminated,
}

/// Events driving the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifecycleEvent {
    Init,
    BeginFrame,
    EndFrame,
    Terminate,
}

impl Lifecycle {
    /// Check if frames may be drawn
    pub fn is_ready(&self) -> bool {
        matches!(self, Lifecycle::Ready)
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Lifecycle::Terminated)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: LifecycleEvent) -> Result<Self, UiError> {
        use Lifecycle::*;
        use LifecycleEvent::*;

        match (self, event) {
            (Uninitialized, Init) => Ok(Ready),
            (Ready, BeginFrame) => Ok(Updating),
            (Updating, EndFrame) => Ok(Ready),
            (Ready, Terminate) => Ok(Terminated),

            // Terminated is final
            (Terminated, _) => Err(UiError::Terminated),

            (Uninitialized, _) => Err(UiError::NotInitialized),
            (Ready, Init) => Err(UiError::AlreadyInitialized),
            (Ready, EndFrame) => Err(UiError::NoFrame),
            (Updating, _) => Err(UiError::Busy),
        }
    }
}
