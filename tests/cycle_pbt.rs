use morphogen_core::{simulate, Simulation};
use morphogen_data::{InitMode, Sentence, SentenceKind, SimulationParams};
use proptest::prelude::*;

// Strategies for generating arbitrary networks over ids "s0".."s{n-1}"
prop_compose! {
    fn arb_sentence(n: usize)(
        kind_idx in 0..SentenceKind::ALL.len(),
        target in 0..n,
        percent_target in 0.0f64..1.0f64,
        window in 1i64..80,
    ) -> (SentenceKind, usize, f64, i64) {
        (SentenceKind::ALL[kind_idx], target, percent_target, window)
    }
}

fn build_network(specs: Vec<(SentenceKind, usize, f64, i64)>) -> Vec<Sentence> {
    specs
        .into_iter()
        .enumerate()
        .map(|(i, (kind, target, percent, window))| {
            let mut s = Sentence::new(format!("s{i}"), format!("S{i}"), kind);
            if kind.needs_target() {
                s = s.with_target(format!("s{target}"));
            }
            if kind.needs_percent() {
                s = s.with_percent(percent, window);
            }
            s
        })
        .collect()
}

prop_compose! {
    fn arb_network(max_len: usize)(n in 1..=max_len)(
        specs in prop::collection::vec(arb_sentence(n), n)
    ) -> Vec<Sentence> {
        build_network(specs)
    }
}

prop_compose! {
    /// Networks whose next state depends on the previous state alone.
    fn arb_markov_network(max_len: usize)(n in 1..=max_len)(
        specs in prop::collection::vec(arb_sentence(n), n)
    ) -> Vec<Sentence> {
        let specs = specs
            .into_iter()
            .map(|(kind, t, p, w)| {
                let kind = if kind == SentenceKind::PercentSelfController {
                    SentenceKind::LiarSelf
                } else {
                    kind
                };
                (kind, t, p, w)
            })
            .collect();
        build_network(specs)
    }
}

fn arb_init() -> impl Strategy<Value = InitMode> {
    prop_oneof![
        Just(InitMode::Random),
        Just(InitMode::AllFalse),
        Just(InitMode::AllTrue),
        Just(InitMode::Checker),
    ]
}

prop_compose! {
    fn arb_params()(
        steps in 1usize..300,
        burn_in in 0usize..400,
        init_mode in arb_init(),
        seed in any::<u32>(),
        noise_flip_prob in prop_oneof![Just(0.0), 0.0f64..0.5],
    ) -> SimulationParams {
        SimulationParams { steps, burn_in, init_mode, seed, noise_flip_prob }
    }
}

proptest! {
    #[test]
    fn test_runs_are_reproducible(sentences in arb_network(6), params in arb_params()) {
        let a = simulate(&sentences, &params).unwrap();
        let b = simulate(&sentences, &params).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_incremental_equals_batch(sentences in arb_network(6), params in arb_params()) {
        let batch = simulate(&sentences, &params).unwrap();
        let mut sim = Simulation::new(&sentences, params.clone()).unwrap();
        let mut ticks = sim.tick();
        while sim.step() {
            ticks += 1;
            prop_assert_eq!(sim.tick(), ticks);
        }
        prop_assert!(sim.is_complete());
        prop_assert_eq!(sim.finish(), batch);
    }

    #[test]
    fn test_history_shape(sentences in arb_network(6), params in arb_params()) {
        let result = simulate(&sentences, &params).unwrap();
        prop_assert_eq!(result.history.len(), params.steps);
        for state in &result.history {
            prop_assert_eq!(state.len(), sentences.len());
        }
        prop_assert_eq!(result.stats.len(), sentences.len());
    }

    #[test]
    fn test_pigeonhole_cycle_bound(
        sentences in arb_markov_network(4),
        init_mode in arb_init(),
        seed in any::<u32>(),
    ) {
        let n = sentences.len();
        let params = SimulationParams {
            steps: (1 << n) + 1,
            init_mode,
            seed,
            noise_flip_prob: 0.0,
            ..Default::default()
        };
        let result = simulate(&sentences, &params).unwrap();
        prop_assert!(result.cycle.found);
        prop_assert!(result.cycle.period >= 1);
        prop_assert!(result.cycle.start_index + result.cycle.period <= 1 << n);
        // the repeated state really does repeat
        let end = result.cycle.start_index + result.cycle.period;
        prop_assert_eq!(
            &result.history[result.cycle.start_index],
            &result.history[end]
        );
    }

    #[test]
    fn test_stats_ranges_and_entropy(sentences in arb_network(6), params in arb_params()) {
        let result = simulate(&sentences, &params).unwrap();
        for stat in &result.stats {
            prop_assert!((0.0..=1.0).contains(&stat.mean));
            prop_assert!((0.0..=1.0).contains(&stat.flip_rate));
            prop_assert!((0.0..=1.0).contains(&stat.entropy_proxy));
            let expected = 4.0 * stat.mean * (1.0 - stat.mean);
            prop_assert!((stat.entropy_proxy - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_oversized_burn_in_keeps_last_tick(
        sentences in arb_network(4),
        steps in 1usize..50,
        extra in 0usize..100,
    ) {
        let params = SimulationParams {
            steps,
            burn_in: steps + extra,
            noise_flip_prob: 0.0,
            ..Default::default()
        };
        let result = simulate(&sentences, &params).unwrap();
        let last = &result.history[steps - 1];
        for (stat, &value) in result.stats.iter().zip(last) {
            prop_assert_eq!(stat.mean, if value { 1.0 } else { 0.0 });
            prop_assert_eq!(stat.flip_rate, 0.0);
        }
    }
}
