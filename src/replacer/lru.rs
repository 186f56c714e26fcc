use {
    crate::{FrameSlot, FrameTable, Page, ReplacementPolicy, SimError, SimResult, util::LogicalClock},
    priority_queue::PriorityQueue,
    std::cmp::Reverse,
};

/// Least Recently Used (LRU) page replacer.
///
/// This implementation uses a priority queue to manage the frames.
/// The priority queue is ordered by the last access time of the frames. The
/// most recently accessed frame is pushed to the back of the queue, while the
/// least recently accessed one is the first to be evicted.
#[derive(Debug)]
pub struct LruReplacer {
    frames: FrameTable,

    /// Resident slots, prioritized by the time of their last access.
    recency: PriorityQueue<FrameSlot, Reverse<u64>>,

    /// Monotonically increasing logical time.
    /// Used to determine the order of page accesses.
    clock: LogicalClock,
}

impl LruReplacer {
    /// Creates a new LRU replacer with the given number of frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
            recency: PriorityQueue::with_capacity(capacity),
            clock: LogicalClock::new(),
        }
    }

    fn touch(&mut self, slot: FrameSlot) -> SimResult<()> {
        // If the slot is already within the queue, its priority is updated.
        // Otherwise, it is inserted. Both cases are handled by `push`.
        let now = self.clock.tick().ok_or(SimError::ClockExhausted)?;
        self.recency.push(slot, Reverse(now));
        Ok(())
    }
}

impl ReplacementPolicy for LruReplacer {
    fn frames(&self) -> &FrameTable {
        &self.frames
    }

    fn frames_mut(&mut self) -> &mut FrameTable {
        &mut self.frames
    }

    fn record_load(&mut self, slot: FrameSlot) -> SimResult<()> {
        self.touch(slot)
    }

    fn record_hit(&mut self, slot: FrameSlot) -> SimResult<()> {
        self.touch(slot)
    }

    fn serving_slot(&self, page: Page) -> Option<FrameSlot> {
        // The least recently used copy serves the request.
        self.frames
            .slots_of(page)
            .iter()
            .copied()
            .max_by_key(|slot| self.recency.get_priority(slot).copied())
    }

    fn victim(&mut self) -> SimResult<FrameSlot> {
        self.recency
            .pop()
            .map(|(slot, _)| slot)
            .ok_or(SimError::EvictionFromEmptyMemory)
    }
}
