// Integration tests for heap sort step generation

use heapstep::snapshot::{generate, PhaseTag, StepAction};

#[test]
fn test_example_four_values() {
    let sequence = generate(&[5, 3, 8, 1]);

    assert!(sequence.snapshot(0).unwrap().is_empty());

    let boundary = sequence.heap_complete_index();
    let heap = sequence.snapshot(boundary).unwrap();
    assert_eq!(heap.len(), 4);
    // Sequential insertion: 8 rises to the root, 1 stays under 3
    assert_eq!(heap.as_slice(), &[8, 3, 5, 1]);
    assert_eq!(
        sequence.get(boundary).unwrap().action,
        StepAction::HeapComplete
    );

    let last = sequence.snapshot(sequence.last_index()).unwrap();
    assert_eq!(last.as_slice(), &[1, 3, 5, 8]);
}

#[test]
fn test_empty_input() {
    let sequence = generate(&[]);
    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence.heap_complete_index(), 0);
    assert_eq!(sequence.phase_at(0), Some(PhaseTag::Done));
}

#[test]
fn test_single_value() {
    let sequence = generate(&[4]);
    let snapshots: Vec<Vec<i32>> = sequence.snapshots().map(|s| s.to_vec()).collect();
    assert_eq!(snapshots, vec![vec![], vec![4]]);
    assert_eq!(sequence.heap_complete_index(), 1);
    assert!(sequence
        .iter()
        .all(|step| !matches!(step.action, StepAction::PrepareExtract { .. })));
}

#[test]
fn test_pre_swap_precedes_every_extraction() {
    let sequence = generate(&[6, 2, 9, 4, 4, 1]);
    let steps = sequence.steps();

    for (i, step) in steps.iter().enumerate() {
        if let StepAction::Extract { last } = step.action {
            let before = &steps[i - 1];
            assert_eq!(before.action, StepAction::PrepareExtract { last });
            assert_eq!(before.snapshot[0], step.snapshot[last]);
            assert_eq!(before.snapshot[last], step.snapshot[0]);
        }
    }
}

#[test]
fn test_each_swap_is_preceded_by_its_comparison() {
    let sequence = generate(&[10, 20, 30, 40, 50, 60, 70]);
    let steps = sequence.steps();

    for (i, step) in steps.iter().enumerate() {
        match step.action {
            StepAction::SiftUpSwap { child, parent } => {
                assert_eq!(
                    steps[i - 1].action,
                    StepAction::CompareWithParent { child, parent }
                );
            }
            StepAction::SiftDownSwap { parent, child } => {
                assert!(matches!(
                    steps[i - 1].action,
                    StepAction::CompareChildren { parent: p, .. } if p == parent
                ));
                assert!(steps[i - 1].action.compared().contains(&child));
            }
            _ => {}
        }
    }
}

#[test]
fn test_sorted_suffix_is_fixed() {
    let input = [3, 14, 15, 92, 65, 35, 89, 79];
    let sequence = generate(&input);
    let boundary = sequence.heap_complete_index();

    for window in sequence.steps()[boundary..].windows(2) {
        let (prev, next) = (&window[0], &window[1]);
        assert!(next.active_len <= prev.active_len);
        assert_eq!(
            prev.snapshot[prev.active_len..],
            next.snapshot[prev.active_len..]
        );
    }
}

#[test]
fn test_phases_follow_boundary() {
    let sequence = generate(&[2, 9, 7]);
    let boundary = sequence.heap_complete_index();
    let phases: Vec<PhaseTag> = (0..sequence.len())
        .map(|i| sequence.phase_at(i).unwrap())
        .collect();

    assert!(phases[..boundary].iter().all(|p| *p == PhaseTag::Building));
    assert_eq!(phases[boundary], PhaseTag::HeapComplete);
    assert_eq!(*phases.last().unwrap(), PhaseTag::Done);
    assert!(phases[boundary + 1..phases.len() - 1]
        .iter()
        .all(|p| *p == PhaseTag::Sorting));
}

#[test]
fn test_duplicates_sort() {
    let sequence = generate(&[3, 1, 2, 1, 3, 0]);
    let last = sequence.snapshot(sequence.last_index()).unwrap();
    assert_eq!(last.as_slice(), &[0, 1, 1, 2, 3, 3]);
}

#[test]
fn test_input_is_kept() {
    let sequence = generate(&[9, -2, 4]);
    assert_eq!(sequence.input(), &[9, -2, 4]);
}
