// Slotkeys Transfer Engine
// Executes a resolved transfer between a source slot and a destination region

use parking_lot::Mutex;
use thiserror::Error;

use crate::action::TransferMode;
use crate::backend::{BackendError, ContainerBackend};
use crate::region::{Region, SlotRef};

/// Everything the engine needs for one transfer. Built per invocation and
/// never stored; reentrancy is handled by the engine's lock alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    /// Resolved source slot
    pub from: SlotRef,
    /// Resolved destination region; may be adjusted by the furnace fallback
    pub to: Region,
    /// Which of the three transfer semantics to apply
    pub mode: TransferMode,
}

/// What a transfer actually did, observable beyond backend state mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOutcome {
    /// Destination region after the furnace-fuel fallback, if it applied
    pub destination: Region,
    /// Number of stacks (or single items for one-item mode) moved
    pub moved: usize,
}

impl TransferOutcome {
    fn noop(destination: Region) -> Self {
        Self {
            destination,
            moved: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Executes transfers under a mutual-exclusion guard.
///
/// The lock is scoped to the engine instance: a transfer runs to completion
/// before another may start, which matters because the same instance can be
/// driven both by the shortcut dispatcher and by a periodic tick handler
/// touching overlapping container state.
#[derive(Debug, Default)]
pub struct TransferEngine {
    lock: Mutex<()>,
}

impl TransferEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one transfer. Placement always targets the first empty slot of
    /// the destination region; if that region is the furnace input and it
    /// is full, the fuel slot is tried once instead. Finding no destination
    /// index is a no-op, not an error.
    pub fn execute<B: ContainerBackend>(
        &self,
        backend: &mut B,
        request: &TransferRequest,
    ) -> Result<TransferOutcome, TransferError> {
        let _guard = self.lock.lock();

        let mut to_region = request.to;
        let mut to_index = backend.first_empty_index(to_region);
        if to_index.is_none() && to_region == Region::FurnaceIn {
            // Single fallback, no further chaining
            to_region = Region::FurnaceFuel;
            to_index = backend.first_empty_index(to_region);
        }
        let Some(mut to_index) = to_index else {
            log::debug!("no empty slot in {}, transfer skipped", to_region);
            return Ok(TransferOutcome::noop(to_region));
        };

        let moved = match request.mode {
            TransferMode::OneStack => {
                let ok = backend.move_stack(request.from, SlotRef::new(to_region, to_index))?;
                usize::from(ok)
            }
            TransferMode::OneItem => {
                let ok =
                    backend.move_some(request.from, SlotRef::new(to_region, to_index), 1)?;
                usize::from(ok)
            }
            TransferMode::AllItems => {
                // Identity is captured once, before the first move empties
                // the hovered slot.
                let Some(original) = backend.stack_at(request.from.region, request.from.index)
                else {
                    return Ok(TransferOutcome::noop(to_region));
                };
                let mut moved = 0;
                for index in 0..backend.region_size(request.from.region) {
                    let Some(stack) = backend.stack_at(request.from.region, index) else {
                        continue;
                    };
                    if !stack.is_item_equal(&original) {
                        continue;
                    }
                    let ok = backend.move_stack(
                        SlotRef::new(request.from.region, index),
                        SlotRef::new(to_region, to_index),
                    )?;
                    if !ok {
                        // Backend refusal stops the batch; the rest stays put
                        break;
                    }
                    moved += 1;
                    match backend.first_empty_index(to_region) {
                        Some(next) => to_index = next,
                        None => break,
                    }
                }
                moved
            }
        };

        log::trace!(
            "{} transfer {} -> {}: moved {}",
            request.mode,
            request.from,
            to_region,
            moved
        );
        Ok(TransferOutcome {
            destination: to_region,
            moved,
        })
    }

    /// Remove the source stack from the container entirely
    pub fn drop_stack<B: ContainerBackend>(
        &self,
        backend: &mut B,
        from: SlotRef,
    ) -> Result<bool, TransferError> {
        let _guard = self.lock.lock();
        Ok(backend.drop_stack(from)?)
    }
}
