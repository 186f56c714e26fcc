//! Optimal (Belady) page replacement algorithm.
//!
//! The whole request sequence is known upfront, so on a fault the replacer
//! evicts the page whose next request lies furthest in the future.

use {
    crate::{FrameSlot, FrameTable, Page, ReplacementPolicy, SimError, SimResult, util::LogicalClock},
    priority_queue::PriorityQueue,
    std::{cmp::Reverse, collections::VecDeque},
};

/// Next request position of a page that is never requested again.
const NEVER: usize = usize::MAX;

/// Eviction priority of a resident frame.
///
/// Frames are ordered by the position of the next request for their page
/// (further is evicted first). Frames whose pages are never requested again
/// all share [`NEVER`], and among those the one loaded earliest goes first.
type Priority = (usize, Reverse<u64>);

/// Optimal page replacer.
#[derive(Debug)]
pub struct OptimalReplacer {
    frames: FrameTable,

    /// Positions of the remaining requests, per page.
    ///
    /// Indexed by `page - 1`; each queue holds request positions in ascending
    /// order. The front of a queue is consumed once that request is served.
    future: Vec<VecDeque<usize>>,

    /// Resident slots, prioritized for eviction.
    candidates: PriorityQueue<FrameSlot, Priority>,

    /// Load order of the frames, used to break ties.
    clock: LogicalClock,
}

impl OptimalReplacer {
    /// Creates a new optimal replacer for the given request sequence.
    ///
    /// The page universe is `1..=max(requests)`.
    pub fn new(capacity: usize, requests: &[Page]) -> Self {
        let universe = requests.iter().copied().max().unwrap_or(0);
        Self::build(capacity, universe, requests)
    }

    /// Creates a new optimal replacer with an explicit page universe
    /// `1..=page_count`.
    ///
    /// Every request must belong to the universe.
    pub fn with_page_count(capacity: usize, page_count: Page, requests: &[Page]) -> SimResult<Self> {
        if let Some(&page) = requests.iter().find(|&&page| page == 0 || page > page_count) {
            return Err(SimError::UniverseTooSmall {
                universe: page_count,
                page,
            });
        }
        Ok(Self::build(capacity, page_count, requests))
    }

    fn build(capacity: usize, universe: Page, requests: &[Page]) -> Self {
        let mut future = vec![VecDeque::new(); universe as usize];
        for (pos, &page) in requests.iter().enumerate() {
            if let Some(queue) = Self::queue_of(&mut future, page) {
                queue.push_back(pos);
            }
        }

        Self {
            frames: FrameTable::new(capacity),
            future,
            candidates: PriorityQueue::with_capacity(capacity),
            clock: LogicalClock::new(),
        }
    }

    /// Number of pages in the universe.
    pub fn page_count(&self) -> usize {
        self.future.len()
    }

    /// Position of the next outstanding request for the page, if any.
    pub fn next_request(&self, page: Page) -> Option<usize> {
        let idx = (page as usize).checked_sub(1)?;
        self.future.get(idx)?.front().copied()
    }

    fn queue_of(future: &mut [VecDeque<usize>], page: Page) -> Option<&mut VecDeque<usize>> {
        let idx = (page as usize).checked_sub(1)?;
        future.get_mut(idx)
    }

    fn requests_of(&mut self, page: Page) -> SimResult<&mut VecDeque<usize>> {
        Self::queue_of(&mut self.future, page).ok_or(SimError::UnknownPage(page))
    }
}

impl ReplacementPolicy for OptimalReplacer {
    fn frames(&self) -> &FrameTable {
        &self.frames
    }

    fn frames_mut(&mut self) -> &mut FrameTable {
        &mut self.frames
    }

    fn record_load(&mut self, slot: FrameSlot) -> SimResult<()> {
        let page = self.frames.page_at(slot)?;
        let next = self.requests_of(page)?.front().copied().unwrap_or(NEVER);
        let loaded = self.clock.tick().ok_or(SimError::ClockExhausted)?;
        self.candidates.push(slot, (next, Reverse(loaded)));
        Ok(())
    }

    fn record_hit(&mut self, slot: FrameSlot) -> SimResult<()> {
        // The request at the front of the queue has just been served.
        let page = self.frames.page_at(slot)?;
        let requests = self.requests_of(page)?;
        requests.pop_front();
        let next = requests.front().copied().unwrap_or(NEVER);

        // Every copy of the page shares the same next request.
        for held in self.frames.slots_of(page) {
            let (_, loaded) = *self
                .candidates
                .get_priority(held)
                .ok_or(SimError::InvalidFrameSlot(*held))?;
            self.candidates.push(*held, (next, loaded));
        }
        Ok(())
    }

    fn serving_slot(&self, page: Page) -> Option<FrameSlot> {
        // The copy loaded earliest serves the request.
        self.frames
            .slots_of(page)
            .iter()
            .copied()
            .max_by_key(|slot| self.candidates.get_priority(slot).map(|&(_, loaded)| loaded))
    }

    fn victim(&mut self) -> SimResult<FrameSlot> {
        self.candidates
            .pop()
            .map(|(slot, _)| slot)
            .ok_or(SimError::EvictionFromEmptyMemory)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::Outcome};

    #[test]
    fn lookahead_index() {
        let requests = [2, 1, 2, 3, 2];
        let mut replacer = OptimalReplacer::new(2, &requests);
        assert_eq!(replacer.page_count(), 3);
        assert_eq!(replacer.next_request(2), Some(0));
        assert_eq!(replacer.next_request(3), Some(3));

        replacer.request(2).unwrap();
        assert_eq!(replacer.next_request(2), Some(2));
        replacer.request(1).unwrap();
        assert_eq!(replacer.next_request(1), None);
        replacer.request(2).unwrap();
        assert_eq!(replacer.next_request(2), Some(4));

        // Page 1 is never requested again, page 2 is.
        assert_eq!(replacer.request(3).unwrap(), Outcome::Fault(2));
        assert_eq!(replacer.next_request(3), None);
        assert_eq!(replacer.request(2).unwrap(), Outcome::Hit);
    }

    #[test]
    fn copies_share_next_request() {
        let requests = [5, 5, 6, 5, 7];
        let mut replacer = OptimalReplacer::new(3, &requests);

        replacer.request(5).unwrap();
        replacer.request(5).unwrap();
        assert_eq!(replacer.frames().slots_of(5), &[1, 2]);
        assert_eq!(replacer.serving_slot(5), Some(1));
        assert_eq!(replacer.next_request(5), Some(3));

        // Both copies of 5 are needed at position 3, page 6 never again.
        replacer.request(6).unwrap();
        assert_eq!(replacer.request(5).unwrap(), Outcome::Hit);
        assert_eq!(replacer.request(7).unwrap(), Outcome::Fault(1));
    }

    #[test]
    fn unknown_page() {
        let mut replacer = OptimalReplacer::new(2, &[1, 2]);
        assert_eq!(replacer.request(3), Err(SimError::UnknownPage(3)));
        assert_eq!(replacer.next_request(0), None);
    }
}
