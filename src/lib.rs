#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(elided_lifetimes_in_paths)]

pub mod batch;
mod error;
mod frame_table;
pub mod generator;
pub mod replacer;
pub mod report;
pub mod runner;
mod util;
mod workload;

pub use {
    error::{BatchError, BatchResult, InputError, InputResult, SimError, SimResult},
    frame_table::{Frame, FrameTable},
    replacer::{FifoReplacer, LruReplacer, OptimalReplacer},
    runner::{Algorithm, Report, Runner, RunnerConfig},
    workload::Workload,
};

/// Page identifier.
///
/// Pages are requested by the workload and are numbered from one.
pub type Page = u32;

/// Frame slot index.
///
/// Slots are numbered from one in order of first use and keep their number for
/// the whole run, no matter which page they hold.
pub type FrameSlot = usize;

/// Outcome of a single page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page was resident, or was placed into a free frame.
    Hit,

    /// The page replaced the one held by the given slot.
    Fault(FrameSlot),
}

impl Outcome {
    /// Integer form of the outcome: `0` for a hit, the slot index for a fault.
    #[must_use]
    pub const fn answer(self) -> usize {
        match self {
            Self::Hit => 0,
            Self::Fault(slot) => slot,
        }
    }

    /// Whether a resident page had to be displaced.
    #[must_use]
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::Fault(_))
    }
}

/// Page replacement policy.
///
/// Every policy owns a [`FrameTable`] and whatever bookkeeping it needs to pick
/// victims. The request protocol itself is shared and provided by
/// [`request`](ReplacementPolicy::request); implementors only react to the
/// events it reports.
pub trait ReplacementPolicy {
    /// Frames currently held by the policy.
    fn frames(&self) -> &FrameTable;

    /// Mutable access to the frames held by the policy.
    fn frames_mut(&mut self) -> &mut FrameTable;

    /// Notifies the policy that a page has just been placed into the slot,
    /// either into free capacity or in place of an evicted page.
    fn record_load(&mut self, slot: FrameSlot) -> SimResult<()>;

    /// Notifies the policy that the request for the page held by the slot has
    /// been served.
    ///
    /// Called once for every request, after [`record_load`] when the page has
    /// just been placed.
    ///
    /// [`record_load`]: ReplacementPolicy::record_load
    fn record_hit(&mut self, slot: FrameSlot) -> SimResult<()>;

    /// Picks the slot that serves a request for a resident page.
    ///
    /// A page may be held by several slots (see [`FrameTable`]); the first one
    /// in the policy's eviction order is served. Returns `None` if the page is
    /// not resident.
    fn serving_slot(&self, page: Page) -> Option<FrameSlot>;

    /// Selects the frame to be evicted and forgets its bookkeeping.
    ///
    /// The returned slot is refilled by the caller right away.
    fn victim(&mut self) -> SimResult<FrameSlot>;

    /// Processes a single page request.
    ///
    /// While free capacity remains, the page is placed into the next unused
    /// slot even if it is resident already. The request is then a hit if any
    /// slot holds the page, and a fault otherwise.
    fn request(&mut self, page: Page) -> SimResult<Outcome> {
        if self.frames().has_free_slot() {
            let slot = self.frames_mut().place(page);
            self.record_load(slot)?;
        }

        if let Some(slot) = self.serving_slot(page) {
            self.record_hit(slot)?;
            return Ok(Outcome::Hit);
        }

        if self.frames().is_empty() {
            return Err(SimError::EvictionFromEmptyMemory);
        }
        let slot = self.victim()?;
        let evicted = self.frames_mut().replace(slot, page)?;
        log::debug!("page {page} replaced page {evicted} in frame {slot}");
        self.record_load(slot)?;
        self.record_hit(slot)?;
        Ok(Outcome::Fault(slot))
    }

    /// Processes the whole request sequence in order.
    fn run(&mut self, requests: &[Page]) -> SimResult<Vec<Outcome>> {
        requests
            .iter()
            .map(|&page| {
                let outcome = self.request(page);
                log::trace!("request {page}: {outcome:?}");
                outcome
            })
            .collect()
    }
}
