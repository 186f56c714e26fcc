use {
    crate::{FrameSlot, FrameTable, Page, ReplacementPolicy, SimError, SimResult},
    std::collections::VecDeque,
};

/// First-In-First-Out (FIFO) page replacer.
///
/// Frames are evicted in the order pages were loaded into them. Accessing a
/// resident page does not change its position.
#[derive(Debug)]
pub struct FifoReplacer {
    frames: FrameTable,

    /// Slots in load order (front = oldest).
    queue: VecDeque<FrameSlot>,
}

impl FifoReplacer {
    /// Creates a new FIFO replacer with the given number of frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl ReplacementPolicy for FifoReplacer {
    fn frames(&self) -> &FrameTable {
        &self.frames
    }

    fn frames_mut(&mut self) -> &mut FrameTable {
        &mut self.frames
    }

    fn record_load(&mut self, slot: FrameSlot) -> SimResult<()> {
        self.queue.push_back(slot);
        Ok(())
    }

    fn record_hit(&mut self, _slot: FrameSlot) -> SimResult<()> {
        // Load order is not affected by accesses.
        Ok(())
    }

    fn serving_slot(&self, page: Page) -> Option<FrameSlot> {
        let held = self.frames.slots_of(page);
        self.queue.iter().copied().find(|slot| held.contains(slot))
    }

    fn victim(&mut self) -> SimResult<FrameSlot> {
        self.queue
            .pop_front()
            .ok_or(SimError::EvictionFromEmptyMemory)
    }
}
