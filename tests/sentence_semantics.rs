mod common;

use common::NetworkBuilder;
use morphogen_data::{InitMode, SentenceKind};

const T: bool = true;
const F: bool = false;

#[test]
fn test_liar_alternates_from_false() {
    let result = NetworkBuilder::new()
        .sentence("l", SentenceKind::LiarSelf)
        .init(InitMode::AllFalse)
        .steps(6)
        .burn_in(0)
        .run();

    assert_column!(result, 0, [F, T, F, T, F, T]);
    assert_cycle!(result, 0, 2);
    assert_eq!(result.stats[0].mean, 0.5);
    assert_eq!(result.stats[0].flip_rate, 1.0);
    assert_eq!(result.stats[0].entropy_proxy, 1.0);
}

#[test]
fn test_truth_teller_keeps_initial_value() {
    for (init, value) in [(InitMode::AllTrue, T), (InitMode::AllFalse, F)] {
        let result = NetworkBuilder::new()
            .sentence("t", SentenceKind::TruthTellerSelf)
            .init(init)
            .steps(10)
            .run();
        assert_column!(result, 0, [value; 10]);
        assert_cycle!(result, 0, 1);
        assert_eq!(result.stats[0].flip_rate, 0.0);
        assert_eq!(result.stats[0].entropy_proxy, 0.0);
    }
}

#[test]
fn test_mutual_negation_reads_previous_tick_only() {
    let result = NetworkBuilder::new()
        .targeting("a", SentenceKind::AssertFalse, "b")
        .targeting("b", SentenceKind::AssertFalse, "a")
        .init(InitMode::AllFalse)
        .steps(5)
        .run();

    assert_eq!(result.history[1], vec![T, T]);
    assert_eq!(result.history[2], vec![F, F]);
    assert_cycle!(result, 0, 2);
}

#[test]
fn test_mutual_negation_checker_is_fixed_point() {
    let result = NetworkBuilder::new()
        .targeting("a", SentenceKind::AssertFalse, "b")
        .targeting("b", SentenceKind::AssertFalse, "a")
        .init(InitMode::Checker)
        .steps(6)
        .run();

    for state in &result.history {
        assert_eq!(state, &vec![T, F]);
    }
    assert_cycle!(result, 0, 1);
}

#[test]
fn test_constants_ignore_initial_state() {
    let result = NetworkBuilder::new()
        .sentence("t", SentenceKind::ConstTrue)
        .sentence("f", SentenceKind::ConstFalse)
        .init(InitMode::Checker)
        .steps(4)
        .run();

    // checker starts [T, F], which the constants already agree with
    assert_column!(result, 0, [T; 4]);
    assert_column!(result, 1, [F; 4]);

    let flipped = NetworkBuilder::new()
        .sentence("t", SentenceKind::ConstTrue)
        .sentence("f", SentenceKind::ConstFalse)
        .init(InitMode::AllFalse)
        .steps(3)
        .run();
    assert_column!(flipped, 0, [F, T, T]);
}

#[test]
fn test_assertions_copy_target_with_one_tick_lag() {
    let result = NetworkBuilder::new()
        .sentence("l", SentenceKind::LiarSelf)
        .targeting("yes", SentenceKind::AssertTrue, "l")
        .targeting("no", SentenceKind::AssertFalse, "l")
        .init(InitMode::AllFalse)
        .steps(5)
        .run();

    assert_column!(result, 0, [F, T, F, T, F]);
    assert_column!(result, 1, [F, F, T, F, T]);
    assert_column!(result, 2, [F, T, F, T, F]);
}

#[test]
fn test_iff_with_liar_target() {
    // self(t) = self(t-1) == liar(t-1)
    let result = NetworkBuilder::new()
        .sentence("l", SentenceKind::LiarSelf)
        .targeting("i", SentenceKind::IffTarget, "l")
        .init(InitMode::AllFalse)
        .steps(5)
        .run();

    assert_column!(result, 1, [F, T, T, F, F]);
}

#[test]
fn test_implication_latches_true() {
    // self(t) = !liar(t-1) || self(t-1); once true it stays true
    let result = NetworkBuilder::new()
        .sentence("l", SentenceKind::LiarSelf)
        .targeting("c", SentenceKind::ImpliesSelfIfTarget, "l")
        .init(InitMode::AllFalse)
        .steps(6)
        .run();

    assert_column!(result, 1, [F, T, T, T, T, T]);
}

#[test]
fn test_controller_tracks_its_target() {
    for init in [
        InitMode::AllFalse,
        InitMode::AllTrue,
        InitMode::Checker,
        InitMode::Random,
    ] {
        let result = NetworkBuilder::new()
            .controller("p", 0.7, 60)
            .init(init)
            .steps(500)
            .burn_in(200)
            .run();
        assert_close!(result.stats[0].mean, 0.7, 0.05);
    }
}

#[test]
fn test_controller_first_step_from_false() {
    // Window average of a single false tick is 0.0 < 0.7.
    let result = NetworkBuilder::new()
        .controller("p", 0.7, 60)
        .init(InitMode::AllFalse)
        .steps(2)
        .run();

    assert_column!(result, 0, [F, T]);
}

#[test]
fn test_controller_defaults_when_unset() {
    let sentence = morphogen_data::Sentence::new("p", "P", SentenceKind::PercentSelfController);
    let result = NetworkBuilder::new()
        .with_sentences(vec![sentence])
        .init(InitMode::AllFalse)
        .steps(500)
        .burn_in(200)
        .run();

    assert_close!(result.stats[0].mean, 0.7, 0.05);
}

#[test]
fn test_full_noise_inverts_every_update() {
    let result = NetworkBuilder::new()
        .sentence("t", SentenceKind::ConstTrue)
        .init(InitMode::AllFalse)
        .noise(1.0)
        .steps(5)
        .run();

    assert_column!(result, 0, [F; 5]);
}

#[test]
fn test_noise_flips_are_seeded() {
    let run = |seed| {
        NetworkBuilder::new()
            .sentence("t", SentenceKind::ConstTrue)
            .init(InitMode::AllFalse)
            .noise(0.1)
            .seed(seed)
            .steps(50)
            .run()
    };

    let falses = common::column(&run(7), 0).iter().filter(|&&b| !b).count();
    // tick 0 plus six noisy flips
    assert_eq!(falses, 7);
    assert_eq!(run(7), run(7));
}
