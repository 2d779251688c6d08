// Snapshot history for heap sort replay

mod generator;

pub use generator::generate;

use std::fmt;
use std::ops::Deref;

/// One immutable array state in the replay sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Snapshot(Vec<i32>);

impl Snapshot {
    pub fn new(values: Vec<i32>) -> Self {
        Snapshot(values)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Check whether the values are in ascending order
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl Deref for Snapshot {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.0
    }
}

impl From<&[i32]> for Snapshot {
    fn from(values: &[i32]) -> Self {
        Snapshot(values.to_vec())
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// What produced a snapshot
///
/// Indices always refer to positions in the snapshot the action is attached
/// to, so a consumer never has to diff neighbouring snapshots to find the
/// pair that was compared or exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// The empty array before any work begins
    Seed,

    /// An input value was appended at `index`
    Insert { index: usize },

    /// Checkpoint: a freshly inserted value is compared with its parent
    CompareWithParent { child: usize, parent: usize },

    /// The child was larger and moved up
    SiftUpSwap { child: usize, parent: usize },

    /// Checkpoint: every input value is in the heap
    HeapComplete,

    /// Checkpoint: the root is about to be exchanged with `last`
    PrepareExtract { last: usize },

    /// The root was exchanged with `last`, which is now in final position
    Extract { last: usize },

    /// Checkpoint: `parent` is compared with its children inside the active region
    CompareChildren {
        parent: usize,
        left: Option<usize>,
        right: Option<usize>,
    },

    /// The larger child moved up into `parent`
    SiftDownSwap { parent: usize, child: usize },
}

impl StepAction {
    /// Indices exchanged by this step, if any
    pub fn swapped(&self) -> Option<(usize, usize)> {
        match *self {
            StepAction::SiftUpSwap { child, parent } => Some((child, parent)),
            StepAction::Extract { last } => Some((0, last)),
            StepAction::SiftDownSwap { parent, child } => Some((parent, child)),
            _ => None,
        }
    }

    /// Indices being compared (or about to be exchanged) at a checkpoint
    pub fn compared(&self) -> Vec<usize> {
        match *self {
            StepAction::CompareWithParent { child, parent } => vec![child, parent],
            StepAction::PrepareExtract { last } => vec![0, last],
            StepAction::CompareChildren {
                parent,
                left,
                right,
            } => std::iter::once(parent).chain(left).chain(right).collect(),
            _ => Vec::new(),
        }
    }

    /// True if the step left the array values untouched
    pub fn is_checkpoint(&self) -> bool {
        matches!(
            self,
            StepAction::Seed
                | StepAction::CompareWithParent { .. }
                | StepAction::HeapComplete
                | StepAction::PrepareExtract { .. }
                | StepAction::CompareChildren { .. }
        )
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepAction::Seed => write!(f, "start"),
            StepAction::Insert { index } => write!(f, "insert at [{}]", index),
            StepAction::CompareWithParent { child, parent } => {
                write!(f, "compare [{}] with parent [{}]", child, parent)
            }
            StepAction::SiftUpSwap { child, parent } => {
                write!(f, "swap [{}] up into [{}]", child, parent)
            }
            StepAction::HeapComplete => write!(f, "max-heap complete"),
            StepAction::PrepareExtract { last } => {
                write!(f, "about to swap root with [{}]", last)
            }
            StepAction::Extract { last } => write!(f, "swap root with [{}]", last),
            StepAction::CompareChildren {
                parent,
                left,
                right,
            } => match (left, right) {
                (Some(l), Some(r)) => {
                    write!(f, "compare [{}] with children [{}], [{}]", parent, l, r)
                }
                (Some(l), None) => write!(f, "compare [{}] with child [{}]", parent, l),
                _ => write!(f, "[{}] has no children left", parent),
            },
            StepAction::SiftDownSwap { parent, child } => {
                write!(f, "swap [{}] down into [{}]", parent, child)
            }
        }
    }
}

/// A snapshot together with its annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub snapshot: Snapshot,
    pub action: StepAction,
    /// Elements at indices `>= active_len` are fixed in sorted position
    pub active_len: usize,
}

/// Phase of the algorithm at a given index of a [`StepSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseTag {
    Building,
    HeapComplete,
    Sorting,
    Done,
}

impl fmt::Display for PhaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PhaseTag::Building => "Building heap",
            PhaseTag::HeapComplete => "Heap complete",
            PhaseTag::Sorting => "Sorting",
            PhaseTag::Done => "Done",
        };
        f.write_str(label)
    }
}

/// Immutable, ordered history of every state heap sort passes through
///
/// Built once by [`generate`]; index 0 is always the empty seed snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    input: Vec<i32>,
    steps: Vec<Step>,
    heap_complete: usize,
}

impl StepSequence {
    pub(crate) fn new(input: Vec<i32>, steps: Vec<Step>, heap_complete: usize) -> Self {
        StepSequence {
            input,
            steps,
            heap_complete,
        }
    }

    /// The values the sequence was generated from, in original order
    pub fn input(&self) -> &[i32] {
        &self.input
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get a snapshot by index
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.steps.get(index).map(|step| &step.snapshot)
    }

    /// Get the number of steps (never zero)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: the seed snapshot is present even for empty input
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Index of the snapshot marking the end of heap construction
    pub fn heap_complete_index(&self) -> usize {
        self.heap_complete
    }

    /// Phase of the step at `index`, or `None` when out of range
    ///
    /// The last step is always [`PhaseTag::Done`], even when it coincides
    /// with the heap-complete boundary (inputs of length 0 or 1).
    pub fn phase_at(&self, index: usize) -> Option<PhaseTag> {
        if index >= self.steps.len() {
            return None;
        }
        let phase = if index == self.last_index() {
            PhaseTag::Done
        } else if index < self.heap_complete {
            PhaseTag::Building
        } else if index == self.heap_complete {
            PhaseTag::HeapComplete
        } else {
            PhaseTag::Sorting
        };
        Some(phase)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Iterate over the bare snapshots
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.steps.iter().map(|step| &step.snapshot)
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_display() {
        let snapshot = Snapshot::new(vec![8, 3, 5, 1]);
        assert_eq!(snapshot.to_string(), "[8, 3, 5, 1]");
        assert_eq!(Snapshot::default().to_string(), "[]");
    }

    #[test]
    fn test_snapshot_is_sorted() {
        assert!(Snapshot::new(vec![1, 1, 2, 9]).is_sorted());
        assert!(Snapshot::default().is_sorted());
        assert!(!Snapshot::new(vec![2, 1]).is_sorted());
    }

    #[test]
    fn test_phase_precedence() {
        let sequence = generate(&[4]);
        assert_eq!(sequence.phase_at(0), Some(PhaseTag::Building));
        assert_eq!(sequence.phase_at(1), Some(PhaseTag::Done));
        assert_eq!(sequence.phase_at(2), None);

        let sequence = generate(&[2, 1]);
        let boundary = sequence.heap_complete_index();
        assert_eq!(sequence.phase_at(boundary), Some(PhaseTag::HeapComplete));
        assert_eq!(sequence.phase_at(boundary + 1), Some(PhaseTag::Sorting));
        assert_eq!(
            sequence.phase_at(sequence.last_index()),
            Some(PhaseTag::Done)
        );
    }

    #[test]
    fn test_action_indices() {
        let action = StepAction::CompareChildren {
            parent: 0,
            left: Some(1),
            right: None,
        };
        assert_eq!(action.compared(), vec![0, 1]);
        assert!(action.is_checkpoint());
        assert_eq!(StepAction::Extract { last: 4 }.swapped(), Some((0, 4)));
        assert!(!StepAction::Insert { index: 2 }.is_checkpoint());
    }
}
