//! Step generation for heap sort
//!
//! [`generate`] runs heap sort on a private working array and records a
//! [`Step`] for every insertion, comparison and exchange. Heap construction
//! uses sequential insertion with sift-up; the sort phase repeatedly moves
//! the root behind the active region and sifts the new root down.
//!
//! Comparison checkpoints are recorded even though they leave the array
//! unchanged: a consumer paces its playback on them.

use super::{Snapshot, Step, StepAction, StepSequence};
use tracing::debug;

/// Accumulates steps while the working array is mutated in place
struct Recorder {
    working: Vec<i32>,
    steps: Vec<Step>,
    active_len: usize,
}

impl Recorder {
    fn new(capacity: usize) -> Self {
        Recorder {
            working: Vec::with_capacity(capacity),
            steps: Vec::new(),
            active_len: 0,
        }
    }

    /// Clone the working array into a new step
    fn record(&mut self, action: StepAction) {
        self.steps.push(Step {
            snapshot: Snapshot::from(self.working.as_slice()),
            action,
            active_len: self.active_len,
        });
    }

    fn insert(&mut self, value: i32) {
        self.working.push(value);
        self.active_len = self.working.len();
        self.record(StepAction::Insert {
            index: self.working.len() - 1,
        });
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            self.record(StepAction::CompareWithParent { child, parent });

            if self.working[child] > self.working[parent] {
                self.working.swap(child, parent);
                self.record(StepAction::SiftUpSwap { child, parent });
                child = parent;
            } else {
                break;
            }
        }
    }

    fn extract(&mut self, last: usize) {
        self.record(StepAction::PrepareExtract { last });

        self.working.swap(0, last);
        self.active_len = last;
        self.record(StepAction::Extract { last });

        self.sift_down(last);
    }

    /// Restore the heap property over `[0, end)` starting at the root
    fn sift_down(&mut self, end: usize) {
        let mut current = 0;
        loop {
            let left = Some(2 * current + 1).filter(|&l| l < end);
            let right = Some(2 * current + 2).filter(|&r| r < end);
            self.record(StepAction::CompareChildren {
                parent: current,
                left,
                right,
            });

            // Strict comparisons: equal values never move
            let mut largest = current;
            for child in [left, right].into_iter().flatten() {
                if self.working[child] > self.working[largest] {
                    largest = child;
                }
            }

            if largest == current {
                break;
            }
            self.working.swap(current, largest);
            self.record(StepAction::SiftDownSwap {
                parent: current,
                child: largest,
            });
            current = largest;
        }
    }
}

/// Generate the full replay of heap sort over `input`
///
/// The caller is responsible for bounding the input length; this function
/// cannot fail and is deterministic for a given input.
pub fn generate(input: &[i32]) -> StepSequence {
    let mut recorder = Recorder::new(input.len());
    recorder.record(StepAction::Seed);

    for &value in input {
        recorder.insert(value);
        recorder.sift_up(recorder.working.len() - 1);
    }

    // The boundary gets its own checkpoint only when an extraction follows;
    // otherwise the last build snapshot already is the final state.
    if input.len() > 1 {
        recorder.record(StepAction::HeapComplete);
    }
    let heap_complete = recorder.steps.len() - 1;

    for last in (1..input.len()).rev() {
        recorder.extract(last);
    }

    debug!(
        input_len = input.len(),
        steps = recorder.steps.len(),
        heap_complete,
        "generated heap sort steps"
    );

    StepSequence::new(input.to_vec(), recorder.steps, heap_complete)
}
