//! One full-frame redraw per tick

use crate::compose::Composer;
use crate::config::{ConfigError, UiConfig};
use crate::radio::RadioState;
use crate::traits::{ClockSource, KeyMask, PowerSensor, Rasterizer};

use super::lifecycle::{Lifecycle, LifecycleEvent, UiError};

/// Main-screen UI
///
/// Called once per redraw tick by the application's event loop. Each
/// `update` runs to completion before returning; there is no partial-frame
/// recovery if a collaborator misbehaves mid-frame.
pub struct Ui<R, C, P> {
    rasterizer: R,
    clock: C,
    power: P,
    composer: Composer,
    lifecycle: Lifecycle,
}

impl<R, C, P> Ui<R, C, P>
where
    R: Rasterizer,
    C: ClockSource,
    P: PowerSensor,
{
    /// Create the UI for a device profile
    ///
    /// Fails if the profile names a panel without a layout, so a bad
    /// profile stops startup instead of reaching the first frame.
    pub fn new(config: &UiConfig, rasterizer: R, clock: C, power: P) -> Result<Self, ConfigError> {
        let geometry = config.geometry()?;

        Ok(Self {
            rasterizer,
            clock,
            power,
            composer: Composer::new(geometry, config.theme),
            lifecycle: Lifecycle::Uninitialized,
        })
    }

    /// Prepare the UI for drawing
    pub fn init(&mut self) -> Result<(), UiError> {
        self.step(LifecycleEvent::Init)
    }

    /// Redraw the screen from `state`
    ///
    /// Clears the display, then draws the top bar and the main content.
    /// Returns whether the screen was redrawn, which is always the case
    /// for a ready UI. Rejected without drawing before `init` and after
    /// `terminate`.
    ///
    /// `keys` is accepted for interactive regions; the main screen ignores
    /// it.
    pub fn update(&mut self, state: &RadioState, _keys: KeyMask) -> Result<bool, UiError> {
        self.step(LifecycleEvent::BeginFrame)?;

        self.rasterizer.clear_screen();
        self.composer
            .draw_top_bar(&mut self.rasterizer, &mut self.clock, &mut self.power);
        self.composer
            .draw_main_content(&mut self.rasterizer, state);

        self.step(LifecycleEvent::EndFrame)?;
        Ok(true)
    }

    /// Shut the UI down; later `update` calls are rejected
    pub fn terminate(&mut self) -> Result<(), UiError> {
        self.step(LifecycleEvent::Terminate)
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn rasterizer_mut(&mut self) -> &mut R {
        &mut self.rasterizer
    }

    /// Take the collaborators back
    pub fn release(self) -> (R, C, P) {
        (self.rasterizer, self.clock, self.power)
    }

    fn step(&mut self, event: LifecycleEvent) -> Result<(), UiError> {
        match self.lifecycle.transition(event) {
            Ok(next) => {
                #[cfg(feature = "defmt")]
                {
                    if next != self.lifecycle {
                        defmt::debug!("ui: {} -> {}", self.lifecycle, next);
                    }
                }
                self.lifecycle = next;
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ui: {} rejected in {}: {}", event, self.lifecycle, e);
                Err(e)
            }
        }
    }
}
