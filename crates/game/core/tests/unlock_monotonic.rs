use alchemy_core::{Action, ElementKind, GameEngine, GameState, RuleTable, SelectionPhase};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks a random action the way a filtering shell would: only unlocked
/// elements are offered, and combine is offered whenever it is requested.
fn random_action(rng: &mut ChaCha8Rng, state: &GameState) -> Action {
    if rng.gen_bool(0.3) {
        return Action::Combine;
    }
    let unlocked: Vec<ElementKind> = state.unlocked.iter().collect();
    Action::Select(unlocked[rng.gen_range(0..unlocked.len())])
}

#[test]
fn unlocked_set_only_grows() {
    let rules = RuleTable::standard();

    for seed in 0..32 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::default();

        for _ in 0..200 {
            let action = random_action(&mut rng, &state);
            let before = state.clone();

            let result = GameEngine::new(&mut state).execute(&rules, &action);

            assert!(
                state.unlocked.is_superset(&before.unlocked),
                "seed {seed}: {action:?} removed an element"
            );
            if result.is_err() {
                assert_eq!(state, before, "seed {seed}: failed {action:?} mutated state");
            }
            assert!(
                state.selection.first().is_some() || state.selection.second().is_none(),
                "seed {seed}: second slot filled without first"
            );
        }
    }
}

#[test]
fn combine_outcome_matches_phase() {
    let rules = RuleTable::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut state = GameState::default();

    for _ in 0..500 {
        let action = random_action(&mut rng, &state);
        let phase = state.selection.phase();
        let result = GameEngine::new(&mut state).execute(&rules, &action);

        if action == Action::Combine {
            match result {
                Ok(_) => {
                    assert_eq!(phase, SelectionPhase::BothFilled);
                    assert_eq!(state.selection.phase(), SelectionPhase::FirstOnly);
                }
                Err(_) => assert_eq!(state.selection.phase(), phase),
            }
        } else {
            assert!(result.is_ok());
        }
    }
}
