use rainbow::{
    algorithms::{ShellSortHalving, ShellSortShrinking},
    step_fn,
    utilities::generate_unique_values,
    AnimationConfig, Engine, RecordingCanvas, RunState, StepOutcome, TickOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The bubble-pass script: each call maps one array to the next, the last
/// call returns its input unchanged and reports completion.
fn bubble_script(current: &[f32], calls: usize) -> StepOutcome<usize> {
    let script: [(&[f32], &[f32]); 4] = [
        (&[4.0, 2.0, 3.0, 1.0], &[2.0, 4.0, 1.0, 3.0]),
        (&[2.0, 4.0, 1.0, 3.0], &[2.0, 1.0, 4.0, 3.0]),
        (&[2.0, 1.0, 4.0, 3.0], &[2.0, 1.0, 3.0, 4.0]),
        (&[2.0, 1.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0]),
    ];

    match script.get(calls) {
        Some((from, to)) => {
            assert_eq!(current, *from, "engine passed the wrong array on call {calls}");
            StepOutcome {
                new_values: to.to_vec(),
                is_complete: false,
                state: calls + 1,
            }
        }
        None => StepOutcome {
            new_values: current.to_vec(),
            is_complete: true,
            state: calls + 1,
        },
    }
}

#[test]
fn bubble_passes_finish_after_five_steps() {
    let algorithm = step_fn("bubble pass", bubble_script);
    let mut engine =
        Engine::new(&[4.0, 2.0, 3.0, 1.0], algorithm, AnimationConfig::default()).unwrap();
    let mut canvas = RecordingCanvas::new();
    engine.start(&mut canvas);

    let mut steps = 0;
    let mut transitions = 0;
    while !engine.is_complete() {
        match engine.tick(&mut canvas).unwrap() {
            TickOutcome::TransitionStarted { .. } => {
                steps += 1;
                transitions += 1;
            }
            TickOutcome::Unchanged | TickOutcome::Completed => steps += 1,
            _ => {}
        }
        assert!(engine.ticks() < 10_000, "animation never completed");
    }

    assert_eq!(steps, 5);
    assert_eq!(transitions, 4);
    assert_eq!(engine.advances(), 5);
    assert_eq!(*engine.algorithm_state(), 5);
    assert_eq!(engine.values(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(engine.run_state(), RunState::Complete);

    // header and footer labels
    let labels: Vec<&str> = canvas.texts().map(|(text, _)| text).collect();
    assert_eq!(labels, vec!["4", "2", "3", "1", "1", "2", "3", "4"]);
}

#[test]
fn tick_counts_follow_configuration() {
    let config = AnimationConfig {
        ticks_per_step: 5,
        swap_ticks: 7,
        ..AnimationConfig::default()
    };
    let algorithm = step_fn("bubble pass", bubble_script);
    let mut engine = Engine::new(&[4.0, 2.0, 3.0, 1.0], algorithm, config).unwrap();
    let mut canvas = RecordingCanvas::new();

    let ticks = engine.run(&mut canvas, 10_000).unwrap().unwrap();
    // first step after 4 ticks (the counter starts at one), later steps after 5,
    // and each of the 4 transitions takes 7 ticks
    assert_eq!(ticks, 4 + 4 * 5 + 4 * 7);
}

#[test]
fn run_gives_up_at_the_tick_limit() {
    let algorithm = step_fn("bubble pass", bubble_script);
    let mut engine =
        Engine::new(&[4.0, 2.0, 3.0, 1.0], algorithm, AnimationConfig::default()).unwrap();
    let mut canvas = RecordingCanvas::new();

    assert_eq!(engine.run(&mut canvas, 10).unwrap(), None);
    assert_eq!(engine.ticks(), 10);
    assert_eq!(engine.run_state(), RunState::Idle);
}

#[test]
fn shell_sorts_animate_random_arrays_to_sorted() {
    let values = generate_unique_values(40, &mut StdRng::seed_from_u64(2025));
    let mut expected = values.clone();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut halving = Engine::new(&values, ShellSortHalving, AnimationConfig::default()).unwrap();
    let mut shrinking =
        Engine::new(&values, ShellSortShrinking::default(), AnimationConfig::default()).unwrap();
    let mut canvas = RecordingCanvas::new();

    for _ in 0..200_000 {
        if halving.is_complete() && shrinking.is_complete() {
            break;
        }
        halving.tick(&mut canvas).unwrap();
        shrinking.tick(&mut canvas).unwrap();
        assert_eq!(halving.values().len(), halving.tracks().len());
        assert_eq!(shrinking.values().len(), shrinking.tracks().len());
        canvas.clear();
    }

    assert!(halving.is_complete());
    assert!(shrinking.is_complete());
    assert_eq!(halving.values(), expected.as_slice());
    assert_eq!(shrinking.values(), expected.as_slice());

    // every track ends up showing the value of its slot
    for engine_values in [halving.values(), shrinking.values()] {
        assert_eq!(engine_values, expected.as_slice());
    }
    let track_values: Vec<f32> = halving.tracks().iter().map(|t| t.value()).collect();
    assert_eq!(track_values, expected);
}

#[test]
fn tracks_only_ever_fall() {
    let values = generate_unique_values(12, &mut StdRng::seed_from_u64(9));
    let mut engine =
        Engine::new(&values, ShellSortShrinking::default(), AnimationConfig::default()).unwrap();
    let mut canvas = RecordingCanvas::new();

    let mut last_y: Vec<f32> = engine.tracks().iter().map(|t| t.y()).collect();
    while !engine.is_complete() {
        engine.tick(&mut canvas).unwrap();
        for (track, previous) in engine.tracks().iter().zip(last_y.iter_mut()) {
            assert!(track.y() >= *previous);
            *previous = track.y();
        }
        // every stroke goes downwards
        for (from, to, _) in canvas.lines() {
            assert!(to.y >= from.y);
        }
        canvas.clear();
        assert!(engine.ticks() < 100_000);
    }
}
