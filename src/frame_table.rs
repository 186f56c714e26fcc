use {
    crate::{FrameSlot, Page, SimError, SimResult},
    std::collections::HashMap,
};

/// Physical frame: a slot of fixed identity and the page it currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Resident page.
    pub page: Page,

    /// One-based slot index, stable for the lifetime of the frame.
    pub slot: FrameSlot,
}

/// Bounded collection of frames.
///
/// Slots are handed out in order `1, 2, ...` until the table is full; after
/// that only the resident page of a slot may change. While the table fills up,
/// every request takes a fresh slot, so the same page may be resident in
/// several slots.
#[derive(Debug)]
pub struct FrameTable {
    /// Maximum number of frames.
    capacity: usize,

    /// Frames in slot order, i.e. `frames[slot - 1]`.
    frames: Vec<Frame>,

    /// Reverse mapping from resident pages to the slots holding them, in
    /// order of placement.
    resident: HashMap<Page, Vec<FrameSlot>>,
}

impl FrameTable {
    /// Creates an empty table holding up to `capacity` frames.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            frames: Vec::with_capacity(capacity),
            resident: HashMap::with_capacity(capacity),
        }
    }

    /// Maximum number of frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of frames in use.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame is in use yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether another frame can be handed out without eviction.
    pub fn has_free_slot(&self) -> bool {
        self.frames.len() < self.capacity
    }

    /// Slots holding the page; empty if the page is not resident.
    pub fn slots_of(&self, page: Page) -> &[FrameSlot] {
        self.resident.get(&page).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the page is held by at least one slot.
    pub fn is_resident(&self, page: Page) -> bool {
        !self.slots_of(page).is_empty()
    }

    /// Page held by the slot.
    pub fn page_at(&self, slot: FrameSlot) -> SimResult<Page> {
        self.frame(slot).map(|frame| frame.page)
    }

    /// Places the page into the next unused slot and returns that slot.
    ///
    /// The caller ensures there is a free slot.
    pub fn place(&mut self, page: Page) -> FrameSlot {
        debug_assert!(self.has_free_slot());

        let slot = self.frames.len() + 1;
        self.frames.push(Frame { page, slot });
        self.resident.entry(page).or_default().push(slot);
        slot
    }

    /// Puts the page into an occupied slot, returning the displaced page.
    pub fn replace(&mut self, slot: FrameSlot, page: Page) -> SimResult<Page> {
        let frame = slot
            .checked_sub(1)
            .and_then(|idx| self.frames.get_mut(idx))
            .ok_or(SimError::InvalidFrameSlot(slot))?;

        let evicted = std::mem::replace(&mut frame.page, page);
        if let Some(slots) = self.resident.get_mut(&evicted) {
            slots.retain(|&held| held != slot);
            if slots.is_empty() {
                self.resident.remove(&evicted);
            }
        }
        self.resident.entry(page).or_default().push(slot);
        Ok(evicted)
    }

    /// Frames in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    fn frame(&self, slot: FrameSlot) -> SimResult<&Frame> {
        slot.checked_sub(1)
            .and_then(|idx| self.frames.get(idx))
            .ok_or(SimError::InvalidFrameSlot(slot))
    }
}
