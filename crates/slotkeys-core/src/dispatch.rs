// Slotkeys Shortcut Dispatcher
// Per-tick orchestration: latches -> hover -> action -> destination -> transfer

use std::collections::HashMap;

use thiserror::Error;

use crate::action::{Bias, ShortcutAction, TransferMode};
use crate::backend::{BackendError, ContainerBackend};
use crate::bindings::ShortcutBindings;
use crate::host::UiHost;
use crate::latch::LatchTracker;
use crate::region::{Region, SlotRef};
use crate::routing::{available_regions, resolve_destination};
use crate::transfer::{TransferEngine, TransferError, TransferRequest};

/// Error surfaced from one shortcut invocation. Everything is caught at
/// [`ShortcutDispatcher::handle_tick`]; nothing propagates to the host's
/// poll loop.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// The cursor-held stack could not be released anywhere
    #[error("couldn't put down the held stack")]
    HeldStackStuck,
}

/// How a tick ended, from the host's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickOutcome {
    /// No shortcut applied; host default handling should proceed
    NotApplicable,
    /// A shortcut executed; host default handling must be suppressed
    Fired,
}

/// The per-tick orchestrator.
///
/// Owns the binding table, the latch tracker and the transfer engine.
/// Configuration arrives through [`new`](Self::new)/[`reload`](Self::reload)
/// as a flat properties map; the container backend is injected per
/// invocation and must be opened fresh each tick so region/slot mappings
/// are never stale.
#[derive(Debug, Default)]
pub struct ShortcutDispatcher {
    bindings: ShortcutBindings,
    latches: LatchTracker,
    engine: TransferEngine,
}

impl ShortcutDispatcher {
    pub fn new(props: &HashMap<String, String>) -> Self {
        let bindings = ShortcutBindings::from_properties(props);
        let latches = LatchTracker::from_bindings(&bindings);
        Self {
            bindings,
            latches,
            engine: TransferEngine::new(),
        }
    }

    /// Replace bindings, defaults and the latch set wholesale.
    /// Idempotent; stale key codes are dropped.
    pub fn reload(&mut self, props: &HashMap<String, String>) {
        self.bindings = ShortcutBindings::from_properties(props);
        self.latches = LatchTracker::from_bindings(&self.bindings);
    }

    pub fn bindings(&self) -> &ShortcutBindings {
        &self.bindings
    }

    /// Run one poll tick. Must be called before the host's own default
    /// handling for the same input event. On success the pointer device is
    /// reset (suppressing that default handling) and repositioned to its
    /// pre-reset coordinates; on a miss or an error the pointer is left
    /// alone and the host default proceeds.
    pub fn handle_tick<H, B>(&mut self, host: &mut H, backend: &mut B)
    where
        H: UiHost,
        B: ContainerBackend,
    {
        self.latches.update(host);

        // Hover must exist and hold a stack; otherwise there is nothing to
        // transfer and no backend call is made.
        let Some(hover) = host.hovered_slot() else {
            return;
        };
        if hover.stack.is_none() {
            return;
        }

        let (pointer_x, pointer_y) = host.pointer_pos();
        match self.run_shortcut(host, backend, hover.slot) {
            Ok(TickOutcome::NotApplicable) => {}
            Ok(TickOutcome::Fired) => {
                host.reset_pointer();
                // The reset briefly moves the pointer to the origin
                host.set_pointer_pos(pointer_x, pointer_y);
            }
            Err(DispatchError::HeldStackStuck) => {
                host.show_status("Failed to put down the held item");
                log::error!("shortcut aborted: couldn't put down the held stack");
            }
            Err(err) => {
                log::error!("Failed to trigger shortcut: {}", err);
            }
        }
    }

    fn run_shortcut<H, B>(
        &mut self,
        host: &mut H,
        backend: &mut B,
        slot: usize,
    ) -> Result<TickOutcome, DispatchError>
    where
        H: UiHost,
        B: ContainerBackend,
    {
        // Transfer mode: all-items beats one-item beats the configured
        // default; only an override marks the shortcut as explicitly keyed.
        let mut mode = self.bindings.default_mode();
        let mut keyed = false;
        if self.is_active(ShortcutAction::AllItems) {
            mode = TransferMode::AllItems;
            keyed = true;
        } else if self.is_active(ShortcutAction::OneItem) {
            mode = TransferMode::OneItem;
            keyed = true;
        }
        let drop_requested = self.is_active(ShortcutAction::Drop);
        if drop_requested {
            keyed = true;
        }

        let Some(source_region) = backend.slot_region(slot) else {
            return Ok(TickOutcome::NotApplicable);
        };

        // An engaged up/down key beats the configured default bias
        let bias = self.active_bias().or(self.bindings.default_bias());

        let available = available_regions(backend);
        let Some(destination) = resolve_destination(source_region, bias, &available) else {
            // Source outside the cyclic neighborhood; the shortcut does
            // not apply this tick.
            return Ok(TickOutcome::NotApplicable);
        };
        if bias.is_some() {
            keyed = true;
        }
        if !keyed {
            return Ok(TickOutcome::NotApplicable);
        }

        let index = backend
            .slot_index(slot)
            .ok_or(BackendError::UnknownSlot(slot))?;
        let from = self.prepare_source(host, backend, SlotRef::new(source_region, index))?;

        if drop_requested {
            self.engine.drop_stack(backend, from)?;
        } else {
            let request = TransferRequest {
                from,
                to: destination,
                mode,
            };
            self.engine.execute(backend, &request)?;
        }
        Ok(TickOutcome::Fired)
    }

    /// Release any cursor-held stack before the transfer touches the source
    /// slot. The stack goes onto the source slot first; if the slot refuses
    /// it (e.g. a crafting output), the first empty generic-inventory slot
    /// takes it and becomes the new source. No room anywhere is fatal to
    /// this invocation only.
    fn prepare_source<H, B>(
        &self,
        host: &mut H,
        backend: &mut B,
        from: SlotRef,
    ) -> Result<SlotRef, DispatchError>
    where
        H: UiHost,
        B: ContainerBackend,
    {
        if host.cursor_stack().is_none() {
            return Ok(from);
        }

        backend.left_click(from)?;
        if host.cursor_stack().is_none() {
            return Ok(from);
        }

        let Some(empty) = backend.first_empty_index(Region::Inventory) else {
            return Err(DispatchError::HeldStackStuck);
        };
        let fallback = SlotRef::new(Region::Inventory, empty);
        backend.left_click(fallback)?;
        Ok(fallback)
    }

    fn is_active(&self, action: ShortcutAction) -> bool {
        self.latches.is_action_active(&self.bindings, action)
    }

    fn active_bias(&self) -> Option<Bias> {
        if self.is_active(ShortcutAction::Up) {
            Some(Bias::Up)
        } else if self.is_active(ShortcutAction::Down) {
            Some(Bias::Down)
        } else {
            None
        }
    }
}
