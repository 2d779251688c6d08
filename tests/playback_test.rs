// Integration tests for the playback controller

use heapstep::playback::{
    ChangeCause, PlaybackController, PlaybackError, PlaybackMode, PlaybackObserver, PositionChange,
    StepOutcome, Transition,
};
use heapstep::snapshot::{generate, PhaseTag, StepSequence};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const PACING: Duration = Duration::from_millis(200);

#[derive(Default)]
struct Recorder {
    loads: Vec<(usize, usize)>,
    moves: Vec<(usize, PhaseTag, ChangeCause)>,
}

impl PlaybackObserver for Recorder {
    fn on_sequence_loaded(&mut self, sequence: &StepSequence) {
        self.loads
            .push((sequence.len(), sequence.heap_complete_index()));
    }

    fn on_position_changed(&mut self, change: &PositionChange<'_>) -> Transition {
        self.moves.push((change.index, change.phase, change.cause));
        Transition::Settled
    }
}

fn loaded(values: &[i32]) -> (PlaybackController, Rc<RefCell<Recorder>>) {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let mut controller = PlaybackController::new(PACING).unwrap();
    controller.subscribe(Box::new(Rc::clone(&recorder)));
    controller.load(generate(values));
    (controller, recorder)
}

#[test]
fn test_idle_navigation_reports_not_loaded() {
    let mut controller = PlaybackController::default();
    assert_eq!(controller.mode(), PlaybackMode::Idle);
    assert_eq!(
        controller.step_forward(),
        Err(PlaybackError::SequenceNotLoaded)
    );
    assert_eq!(
        controller.step_backward(),
        Err(PlaybackError::SequenceNotLoaded)
    );
    assert_eq!(
        controller.start_auto_play(Instant::now()),
        Err(PlaybackError::SequenceNotLoaded)
    );
    assert_eq!(controller.current_phase(), None);
    assert_eq!(controller.progress(), None);
}

#[test]
fn test_forward_saturates_at_last_index() {
    let (mut controller, _) = loaded(&[5, 3, 8, 1]);
    let len = controller.sequence().unwrap().len();

    for expected in 1..len {
        assert_eq!(
            controller.step_forward(),
            Ok(StepOutcome::Moved { position: expected })
        );
    }
    assert_eq!(controller.step_forward(), Ok(StepOutcome::Saturated));
    assert_eq!(controller.position(), len - 1);
    assert_eq!(controller.progress(), Some((len, len)));
    assert_eq!(controller.current_phase(), Some(PhaseTag::Done));
}

#[test]
fn test_backward_saturates_at_zero() {
    let (mut controller, recorder) = loaded(&[5, 3]);
    assert_eq!(controller.step_backward(), Ok(StepOutcome::Saturated));
    assert_eq!(controller.position(), 0);
    assert!(recorder.borrow().moves.is_empty());

    controller.step_forward().unwrap();
    assert_eq!(
        controller.step_backward(),
        Ok(StepOutcome::Moved { position: 0 })
    );
}

#[test]
fn test_load_notifies_with_boundary() {
    let (mut controller, recorder) = loaded(&[4]);
    controller.load(generate(&[2, 1]));

    let loads = recorder.borrow().loads.clone();
    assert_eq!(loads.len(), 2);
    assert_eq!(loads[0], (2, 1));
    assert_eq!(loads[1].1, generate(&[2, 1]).heap_complete_index());
}

#[test]
fn test_auto_play_fires_len_minus_one_ticks() {
    let (mut controller, recorder) = loaded(&[5, 3, 8, 1]);
    let len = controller.sequence().unwrap().len();
    let mut now = Instant::now();

    assert_eq!(controller.start_auto_play(now), Ok(true));
    assert_eq!(controller.mode(), PlaybackMode::AutoPlaying);

    let mut ticks = 0;
    while controller.mode() == PlaybackMode::AutoPlaying {
        now += PACING;
        if controller.tick(now) {
            ticks += 1;
        }
        assert!(ticks < len, "auto-play did not stop");
    }

    assert_eq!(ticks, len - 1);
    assert_eq!(controller.position(), len - 1);
    assert_eq!(controller.mode(), PlaybackMode::Ready);
    assert_eq!(controller.next_deadline(), None);
    assert!(recorder
        .borrow()
        .moves
        .iter()
        .all(|(_, _, cause)| *cause == ChangeCause::Tick));
}

#[test]
fn test_tick_waits_for_interval() {
    let (mut controller, _) = loaded(&[1, 2, 3]);
    let start = Instant::now();
    controller.start_auto_play(start).unwrap();

    assert!(!controller.tick(start + PACING / 2));
    assert_eq!(controller.position(), 0);
    assert!(controller.tick(start + PACING));
    assert_eq!(controller.position(), 1);
}

#[test]
fn test_manual_navigation_suppressed_while_playing() {
    let (mut controller, _) = loaded(&[7, 1, 4]);
    controller.start_auto_play(Instant::now()).unwrap();

    assert_eq!(controller.step_forward(), Ok(StepOutcome::Suppressed));
    assert_eq!(controller.step_backward(), Ok(StepOutcome::Suppressed));
    assert_eq!(controller.jump_to_end(), Ok(StepOutcome::Suppressed));
    assert_eq!(controller.position(), 0);
}

#[test]
fn test_stop_keeps_position() {
    let (mut controller, _) = loaded(&[7, 1, 4]);
    let start = Instant::now();
    controller.start_auto_play(start).unwrap();
    controller.tick(start + PACING);
    controller.tick(start + PACING * 2);

    assert!(controller.stop_auto_play());
    assert_eq!(controller.position(), 2);
    assert_eq!(controller.mode(), PlaybackMode::Ready);
    assert!(!controller.tick(start + PACING * 10));
    assert!(!controller.stop_auto_play());
}

#[test]
fn test_auto_play_at_end_does_not_start() {
    let (mut controller, _) = loaded(&[3, 2]);
    controller.jump_to_end().unwrap();
    assert_eq!(controller.start_auto_play(Instant::now()), Ok(false));
    assert_eq!(controller.mode(), PlaybackMode::Ready);

    let (mut controller, _) = loaded(&[]);
    assert_eq!(controller.start_auto_play(Instant::now()), Ok(false));
}

#[test]
fn test_toggle_auto_play() {
    let (mut controller, _) = loaded(&[3, 2, 1]);
    let now = Instant::now();
    assert_eq!(controller.toggle_auto_play(now), Ok(true));
    assert!(controller.state().auto_playing);
    assert_eq!(controller.toggle_auto_play(now), Ok(false));
    assert!(!controller.state().auto_playing);
}

#[test]
fn test_jumps() {
    let (mut controller, recorder) = loaded(&[9, 4, 6, 2]);
    let last = controller.sequence().unwrap().last_index();

    assert_eq!(
        controller.jump_to_end(),
        Ok(StepOutcome::Moved { position: last })
    );
    assert_eq!(controller.jump_to_end(), Ok(StepOutcome::Saturated));
    assert_eq!(
        controller.jump_to_start(),
        Ok(StepOutcome::Moved { position: 0 })
    );
    assert_eq!(controller.jump_to_start(), Ok(StepOutcome::Saturated));

    let causes: Vec<ChangeCause> = recorder.borrow().moves.iter().map(|m| m.2).collect();
    assert_eq!(causes, vec![ChangeCause::Jump, ChangeCause::Jump]);
}

#[test]
fn test_state_snapshot() {
    let (mut controller, _) = loaded(&[1, 2]);
    controller.set_pacing(Duration::from_secs(1)).unwrap();
    controller.step_forward().unwrap();

    let state = controller.state();
    assert_eq!(state.position, 1);
    assert!(!state.auto_playing);
    assert_eq!(state.pacing, Duration::from_secs(1));
}
