//! Time-sequenced path highlighting.
//!
//! `animate` resets the surface immediately and queues the per-hop mutations on
//! a millisecond timeline; `tick` applies whatever has come due. Nothing is
//! cancelled by a second `animate` call: old and new mutations interleave by
//! due time and the later one wins visually.

use eframe::egui::Color32;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::ANIMATION;
use crate::domain::StationId;
use crate::surface::{Surface, SurfaceMutation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(pub u64);

/// Handle to the mutations queued by one `animate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationHandle {
    pub id: AnimationId,
    pub started_at_ms: u64,
    pub scheduled: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledKind {
    NodeHighlight,
    NodeDescale,
    EdgeHighlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledMutation {
    pub due_ms: u64,
    seq: u64,
    pub animation: AnimationId,
    pub mutation: SurfaceMutation,
}

impl ScheduledMutation {
    pub fn kind(&self) -> ScheduledKind {
        match self.mutation {
            SurfaceMutation::HighlightNode { .. } => ScheduledKind::NodeHighlight,
            SurfaceMutation::DescaleNode { .. } => ScheduledKind::NodeDescale,
            SurfaceMutation::HighlightEdge { .. } => ScheduledKind::EdgeHighlight,
        }
    }
}

#[derive(Debug, Default)]
pub struct PathAnimator {
    /// Sorted by (due_ms, seq)
    queue: Vec<ScheduledMutation>,
    next_seq: u64,
    next_animation: u64,
    last: Option<AnimationHandle>,
}

impl PathAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every edge and node, then schedules the highlight sequence for
    /// `path` starting at `now_ms`. Paths shorter than two stations only reset.
    pub fn animate(
        &mut self,
        surface: &mut Surface,
        path: &[StationId],
        color: Color32,
        now_ms: u64,
    ) {
        surface.reset_styles();

        if path.len() < 2 {
            return;
        }

        let id = AnimationId(self.next_animation);
        self.next_animation += 1;
        let step = ANIMATION.step_ms;
        let half = ANIMATION.half_step_ms;
        let mut scheduled = 0;

        for (index, &station) in path.iter().enumerate() {
            let Some(node) = surface.node_for_station(station) else {
                log::warn!("Path references station {} which has no node on the map", station);
                continue;
            };
            let at = now_ms + index as u64 * step;
            self.schedule(id, at, SurfaceMutation::HighlightNode { node, color });
            self.schedule(id, at + half, SurfaceMutation::DescaleNode { node });
            scheduled += 2;
        }

        for (index, hop) in path.windows(2).enumerate() {
            let Some(edge) = surface.edge_between(hop[0], hop[1]) else {
                log::warn!(
                    "No declared route between {} and {}; hop not highlighted",
                    hop[0],
                    hop[1]
                );
                continue;
            };
            let at = now_ms + index as u64 * step + step;
            self.schedule(id, at, SurfaceMutation::HighlightEdge { edge, color });
            scheduled += 1;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_animation_schedule {
            log::info!(
                "Animation {:?}: {} mutations for path {:?} from t={}ms",
                id,
                scheduled,
                path,
                now_ms
            );
        }

        self.last = Some(AnimationHandle {
            id,
            started_at_ms: now_ms,
            scheduled,
        });
    }

    /// Applies every mutation due at or before `now_ms`, in due order.
    /// Returns how many were applied.
    pub fn tick(&mut self, surface: &mut Surface, now_ms: u64) -> usize {
        let due = self.queue.partition_point(|m| m.due_ms <= now_ms);
        for scheduled in self.queue.drain(..due) {
            surface.apply(scheduled.mutation);
        }
        due
    }

    /// Withdraws the not-yet-applied mutations of one animation. Not used by the
    /// request flows, which keep the overlapping behaviour.
    pub fn cancel(&mut self, handle: AnimationHandle) -> usize {
        let before = self.queue.len();
        self.queue.retain(|m| m.animation != handle.id);
        before - self.queue.len()
    }

    pub fn last_handle(&self) -> Option<AnimationHandle> {
        self.last
    }

    pub fn pending(&self) -> &[ScheduledMutation] {
        &self.queue
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the next queued mutation, for repaint scheduling
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.first().map(|m| m.due_ms)
    }

    fn schedule(&mut self, animation: AnimationId, due_ms: u64, mutation: SurfaceMutation) {
        let entry = ScheduledMutation {
            due_ms,
            seq: self.next_seq,
            animation,
            mutation,
        };
        self.next_seq += 1;
        let pos = self
            .queue
            .partition_point(|m| (m.due_ms, m.seq) <= (entry.due_ms, entry.seq));
        self.queue.insert(pos, entry);
    }
}
