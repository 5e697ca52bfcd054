//! Round lifecycle tests: selection, validation and progress together.

use pretty_assertions::assert_eq;
use riddle_cards::cards::{extract_words, Card, CardCatalog, CardId};
use riddle_cards::core::{GameConfig, RiddleRng};
use riddle_cards::rounds::{AnswerValidator, Outcome, RoundResult, RoundSelector};
use riddle_cards::session::{progress, AlbumRef, CatalogRef, UserId, UserSession};
use rustc_hash::FxHashSet;

fn scenario_catalog() -> CardCatalog {
    CardCatalog::from_cards(vec![
        Card::new("1", "кот сидит"),
        Card::new("2", "пес бежит"),
        Card::new("3", "кот спит"),
    ])
    .unwrap()
}

fn numbered_catalog(n: usize) -> CardCatalog {
    CardCatalog::from_cards((1..=n).map(|i| Card::new(i.to_string(), format!("общий слово{}", i))))
        .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

/// All three cards drawn: only "кот" is ambiguous.
#[test]
fn test_scenario_a_word_choice_and_answer() {
    let catalog = scenario_catalog();
    let selector = RoundSelector::new(&GameConfig::default());
    let validator = AnswerValidator::new(&GameConfig::default());
    let mut found_dog = false;

    for seed in 0..100 {
        let mut session = UserSession::new(UserId::new(1));
        let result = selector.select_round(&catalog, &mut session, &mut RiddleRng::new(seed));
        let word = result.round().unwrap().riddle_word.clone().unwrap();
        assert!(["сидит", "пес", "бежит", "спит"].contains(&word.as_str()));

        if word == "пес" {
            found_dog = true;
            let position = catalog.position(&CardId::new("2")).unwrap();
            assert_eq!(validator.validate(&catalog, &mut session, Some(position)), Outcome::Correct);
            assert_eq!(session.score, 3);
        }
    }

    assert!(found_dog, "100 seeds never picked \"пес\"");
}

/// Everything seen: exhausted, nothing changes.
#[test]
fn test_scenario_b_exhausted_without_mutation() {
    let catalog = scenario_catalog();
    let selector = RoundSelector::new(&GameConfig::default());

    let mut session = progress::record_seen(&UserSession::new(UserId::new(1)), catalog.ids());
    session = progress::apply_score(&session, 9);
    let before = session.clone();

    let result = selector.select_round(&catalog, &mut session, &mut RiddleRng::new(5));
    assert_eq!(result, RoundResult::Exhausted);
    assert_eq!(session.seen_cards, before.seen_cards);
    assert_eq!(session.score, 9);
}

/// Album switch wipes progress even with a high score.
#[test]
fn test_scenario_c_album_switch_resets() {
    let catalog = scenario_catalog();
    let selector = RoundSelector::new(&GameConfig::default());
    let mut session = UserSession::new(UserId::new(4));
    selector.select_round(&catalog, &mut session, &mut RiddleRng::new(1));
    session = progress::apply_score(&session, 30);

    let album = CatalogRef::Album(AlbumRef::new(-5, 77));
    let switched = progress::switch_catalog(&session, album);

    assert_eq!(switched.user_id, UserId::new(4));
    assert_eq!(switched.catalog, album);
    assert_eq!(switched.score, 0);
    assert!(switched.seen_cards.is_empty());
    assert!(switched.active_round.is_none());
}

// =============================================================================
// Session-long invariants
// =============================================================================

#[test]
fn test_no_repeats_until_exhausted() {
    for n in [1, 4, 5, 6, 13, 25] {
        let catalog = numbered_catalog(n);
        let selector = RoundSelector::new(&GameConfig::default());
        let mut session = UserSession::new(UserId::new(1));
        let mut rng = RiddleRng::new(n as u64);
        let mut shown: FxHashSet<CardId> = FxHashSet::default();
        let mut rounds = 0;

        while let RoundResult::Riddle(round) = selector.select_round(&catalog, &mut session, &mut rng) {
            rounds += 1;
            for id in &round.candidate_cards {
                assert!(shown.insert(id.clone()), "{} shown twice", id);
            }
        }

        assert_eq!(shown.len(), n);
        assert_eq!(rounds, n.div_ceil(5), "catalog of {}", n);
        assert_eq!(session.seen_cards.len(), n);
    }
}

#[test]
fn test_riddle_word_unique_in_batch() {
    let catalog = CardCatalog::from_cards(vec![
        Card::new("a", "красный дом у реки"),
        Card::new("b", "синий дом"),
        Card::new("c", "красный кот"),
        Card::new("d", "кот у реки"),
        Card::new("e", "синий кот"),
        Card::new("f", "дом"),
        Card::new("g", "река"),
    ])
    .unwrap();
    let selector = RoundSelector::new(&GameConfig::default());

    for seed in 0..200 {
        let mut session = UserSession::new(UserId::new(1));
        let mut rng = RiddleRng::new(seed);

        while let RoundResult::Riddle(round) = selector.select_round(&catalog, &mut session, &mut rng) {
            let Some(word) = round.riddle_word.as_deref() else {
                continue;
            };
            let holders = round
                .candidate_cards
                .iter()
                .filter(|id| extract_words(catalog.get(id).unwrap()).iter().any(|w| w == word))
                .count();
            assert_eq!(holders, 1, "seed {} word {}", seed, word);
        }
    }
}

#[test]
fn test_play_through_scores() {
    let catalog = numbered_catalog(12);
    let config = GameConfig::default();
    let selector = RoundSelector::new(&config);
    let validator = AnswerValidator::new(&config);
    let mut session = UserSession::new(UserId::new(1));
    let mut rng = RiddleRng::new(11);
    let mut correct = 0;

    while let RoundResult::Riddle(round) = selector.select_round(&catalog, &mut session, &mut rng) {
        // Answer with the card holding the word.
        let word = round.riddle_word.clone().unwrap();
        let target = round
            .candidate_cards
            .iter()
            .find(|id| extract_words(catalog.get(id).unwrap()).contains(&word))
            .unwrap();

        let outcome = validator.validate(&catalog, &mut session, catalog.position(target));
        assert_eq!(outcome, Outcome::Correct);
        correct += 1;
    }

    assert_eq!(correct, 3);
    assert_eq!(session.score, 9);
    assert_eq!(
        validator.validate(&catalog, &mut session, Some(1)),
        Outcome::NoActiveRound
    );
}

#[test]
fn test_restart_after_exhaustion() {
    let catalog = scenario_catalog();
    let selector = RoundSelector::new(&GameConfig::default());
    let mut session = UserSession::new(UserId::new(1));
    let mut rng = RiddleRng::new(2);

    selector.select_round(&catalog, &mut session, &mut rng);
    assert_eq!(selector.select_round(&catalog, &mut session, &mut rng), RoundResult::Exhausted);

    session = progress::reset(&session);
    assert!(matches!(
        selector.select_round(&catalog, &mut session, &mut rng),
        RoundResult::Riddle(_)
    ));
}
