//! Simulated upload progress.
//!
//! A ticker per file adds a random step to its progress until it reaches
//! 100. Files may be removed while their ticker is still scheduled, so
//! every tick is addressed by id and a tick for a missing (or already
//! finished) record reports [`TickOutcome::Stale`] and stops the ticker.

use super::aggregate::{FileMeta, UploadId, UploadStatus, UploadedFile};
use crate::shared::simulation::Delay;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Still uploading, new progress value
    Advanced(f64),
    Completed,
    /// The record is gone or no longer uploading
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadQueue {
    files: Vec<UploadedFile>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// True while at least one file has not finished
    pub fn is_uploading(&self) -> bool {
        self.files.iter().any(UploadedFile::is_uploading)
    }

    /// Adds one record per file at 0% and returns their ids in order.
    pub fn enqueue(&mut self, metas: Vec<FileMeta>) -> Vec<UploadId> {
        let start = self.files.len();
        self.files.extend(metas.into_iter().map(UploadedFile::new));
        self.files[start..].iter().map(|f| f.id).collect()
    }

    pub fn advance(&mut self, id: UploadId, increment: f64) -> TickOutcome {
        let Some(file) = self.files.iter_mut().find(|f| f.id == id) else {
            return TickOutcome::Stale;
        };
        if file.status != UploadStatus::Uploading {
            return TickOutcome::Stale;
        }

        let next = file.progress + increment.max(0.0);
        if next >= 100.0 {
            file.progress = 100.0;
            file.status = UploadStatus::Completed;
            TickOutcome::Completed
        } else {
            file.progress = next;
            TickOutcome::Advanced(next)
        }
    }

    pub fn get(&self, id: UploadId) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn remove(&mut self, id: UploadId) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }
}

/// Maps a unit sample in `[0, 1)` to a progress step in `[0, max)`.
/// Out-of-range samples are clamped into that interval.
pub fn upload_step(unit: f64, max: f64) -> f64 {
    if !unit.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (unit.clamp(0.0, 1.0) * max).min(max * (1.0 - f64::EPSILON))
}

/// Drives one file's progress: wait a tick, apply the next increment,
/// repeat until the record completes or disappears.
pub async fn run_upload_ticker<D, I, A>(
    delay: &D,
    tick_ms: u32,
    mut next_increment: I,
    mut apply: A,
) -> TickOutcome
where
    D: Delay,
    I: FnMut() -> f64,
    A: FnMut(f64) -> TickOutcome,
{
    loop {
        delay.wait(tick_ms).await;
        match apply(next_increment()) {
            TickOutcome::Advanced(_) => continue,
            finished => return finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::simulation::testing::RecordingDelay;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn meta(name: &str) -> FileMeta {
        FileMeta::new(name, 2048, "application/pdf")
    }

    #[test]
    fn test_enqueue_starts_at_zero() {
        let mut queue = UploadQueue::new();
        let ids = queue.enqueue(vec![meta("a.pdf"), meta("b.xlsx")]);
        assert_eq!(ids.len(), 2);
        assert_eq!(queue.len(), 2);
        for file in queue.files() {
            assert_eq!(file.progress, 0.0);
            assert_eq!(file.status, UploadStatus::Uploading);
        }
        assert_eq!(queue.files()[1].name, "b.xlsx");
        assert!(queue.is_uploading());
    }

    #[test]
    fn test_progress_is_monotonic_and_ends_at_exactly_100() {
        let mut queue = UploadQueue::new();
        let id = queue.enqueue(vec![meta("a.pdf")])[0];

        let mut history = Vec::new();
        let mut last = TickOutcome::Stale;
        for step in [25.0, 0.0, 40.0, 29.9, 10.0] {
            last = queue.advance(id, step);
            let file = &queue.files()[0];
            history.push(file.progress);
            if file.status == UploadStatus::Completed {
                assert_eq!(file.progress, 100.0);
            }
        }

        assert_eq!(last, TickOutcome::Completed);
        assert!(history.windows(2).all(|w| w[0] <= w[1]), "{:?}", history);
        assert_eq!(*history.last().unwrap(), 100.0);
        assert!(!queue.is_uploading());
        assert_eq!(queue.files()[0].percent(), 100);
    }

    #[test]
    fn test_negative_increment_never_moves_backwards() {
        let mut queue = UploadQueue::new();
        let id = queue.enqueue(vec![meta("a.pdf")])[0];
        queue.advance(id, 10.0);
        assert_eq!(queue.advance(id, -5.0), TickOutcome::Advanced(10.0));
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut queue = UploadQueue::new();
        let id = queue.enqueue(vec![meta("a.pdf")])[0];
        assert_eq!(queue.advance(id, 150.0), TickOutcome::Completed);
        assert_eq!(queue.advance(id, 10.0), TickOutcome::Stale);
        assert_eq!(queue.files()[0].status, UploadStatus::Completed);
        assert_eq!(queue.files()[0].progress, 100.0);
    }

    #[test]
    fn test_tick_after_removal_is_stale() {
        let mut queue = UploadQueue::new();
        let ids = queue.enqueue(vec![meta("a.pdf"), meta("b.pdf")]);
        assert!(queue.remove(ids[0]));
        assert!(!queue.remove(ids[0]));
        assert_eq!(queue.advance(ids[0], 10.0), TickOutcome::Stale);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.files()[0].progress, 0.0);
    }

    #[test]
    fn test_upload_step_stays_below_max() {
        assert_eq!(upload_step(0.0, 30.0), 0.0);
        assert_eq!(upload_step(0.5, 30.0), 15.0);
        for unit in [0.0, 0.25, 0.999_999, 1.0, 1.5, -0.2, f64::NAN] {
            let step = upload_step(unit, 30.0);
            assert!((0.0..30.0).contains(&step), "{unit} -> {step}");
        }
        assert_eq!(upload_step(0.7, 0.0), 0.0);
    }

    #[test]
    fn test_get_follows_record_across_ticks() {
        let mut queue = UploadQueue::new();
        let ids = queue.enqueue(vec![meta("a.pdf"), meta("b.pdf")]);
        queue.advance(ids[1], 40.0);
        queue.advance(ids[1], 35.0);

        let file = queue.get(ids[1]).unwrap();
        assert_eq!(file.id, ids[1]);
        assert_eq!(file.percent(), 75);
        assert_eq!(queue.get(ids[0]).unwrap().percent(), 0);

        queue.remove(ids[1]);
        assert!(queue.get(ids[1]).is_none());
    }

    #[test]
    fn test_ticker_runs_until_completed() {
        let delay = RecordingDelay::default();
        let queue = RefCell::new(UploadQueue::new());
        let id = queue.borrow_mut().enqueue(vec![meta("a.pdf")])[0];

        let outcome = block_on(run_upload_ticker(
            &delay,
            200,
            || 30.0,
            |inc| queue.borrow_mut().advance(id, inc),
        ));

        assert_eq!(outcome, TickOutcome::Completed);
        assert_eq!(delay.waits(), [200, 200, 200, 200]);
        assert_eq!(queue.borrow().files()[0].progress, 100.0);
    }

    #[test]
    fn test_ticker_stops_when_file_removed() {
        let delay = RecordingDelay::default();
        let queue = RefCell::new(UploadQueue::new());
        let id = queue.borrow_mut().enqueue(vec![meta("a.pdf")])[0];
        let mut ticks = 0;

        let outcome = block_on(run_upload_ticker(&delay, 200, || 10.0, |inc| {
            ticks += 1;
            if ticks == 2 {
                queue.borrow_mut().remove(id);
            }
            queue.borrow_mut().advance(id, inc)
        }));

        assert_eq!(outcome, TickOutcome::Stale);
        assert_eq!(delay.waits().len(), 2);
        assert!(queue.borrow().is_empty());
    }
}
