//! Tests for the duel typestate lifecycle.

use code_duel_core::{
    Attempt, Code, DuelInProgress, DuelOutcome, DuelResult, DuelSetup, GuessError, Rules, Seat,
};

fn code(s: &str) -> Code {
    s.parse().expect("valid code")
}

fn started() -> DuelInProgress {
    DuelSetup::new(Rules::default())
        .set_first_secret(code("123"))
        .set_second_secret(code("456"))
}

#[test]
fn test_duel_lifecycle() {
    let game = started();
    assert_eq!(game.turn(), 1);
    assert_eq!(game.to_move(), Seat::PlayerOne);

    let result = game
        .guess(Attempt::new(Seat::PlayerOne, code("789")))
        .expect("Valid guess");
    let game = match result {
        DuelResult::InProgress(g) => g,
        DuelResult::Finished(_) => panic!("Duel shouldn't finish after a miss"),
    };
    assert_eq!(game.to_move(), Seat::PlayerTwo);
    assert_eq!(game.turn(), 1);

    let result = game
        .guess(Attempt::new(Seat::PlayerTwo, code("780")))
        .expect("Valid guess");
    let game = match result {
        DuelResult::InProgress(g) => g,
        DuelResult::Finished(_) => panic!("Duel shouldn't finish after a miss"),
    };
    assert_eq!(game.to_move(), Seat::PlayerOne);
    assert_eq!(game.turn(), 2);
}

#[test]
fn test_wrong_player_rejected() {
    let game = started();
    let result = game.guess(Attempt::new(Seat::PlayerTwo, code("123")));
    assert!(matches!(result, Err(GuessError::WrongPlayer(Seat::PlayerTwo))));
}

#[test]
fn test_player_one_wins_without_reply() {
    let result = started()
        .guess(Attempt::new(Seat::PlayerOne, code("456")))
        .expect("Valid guess");
    let DuelResult::Finished(done) = result else {
        panic!("Correct guess should end the duel");
    };
    assert_eq!(done.outcome(), &DuelOutcome::Winner(Seat::PlayerOne));
    assert!(done.history(Seat::PlayerTwo).is_empty());
    assert_eq!(
        done.summary(),
        "Congratulations! You cracked Player 2's code (456) in 1 turn."
    );
}

#[test]
fn test_player_one_wins_on_final_turn() {
    let mut guesses = Vec::new();
    for _ in 0..9 {
        guesses.push(code("789"));
        guesses.push(code("789"));
    }
    guesses.push(code("456"));

    let result = DuelInProgress::replay(Rules::default(), code("123"), code("456"), &guesses)
        .expect("Valid replay");
    let DuelResult::Finished(done) = result else {
        panic!("Correct guess should end the duel");
    };
    assert_eq!(done.outcome(), &DuelOutcome::Winner(Seat::PlayerOne));
    assert_eq!(done.turn(), 10);
    assert_eq!(done.history(Seat::PlayerOne).len(), 10);
    assert_eq!(done.history(Seat::PlayerTwo).len(), 9);
}

#[test]
fn test_player_two_wins_on_final_turn() {
    let mut guesses = vec![code("789"); 19];
    guesses.push(code("123"));

    let result = DuelInProgress::replay(Rules::default(), code("123"), code("456"), &guesses)
        .expect("Valid replay");
    let DuelResult::Finished(done) = result else {
        panic!("Correct guess should end the duel");
    };
    assert_eq!(done.outcome(), &DuelOutcome::Winner(Seat::PlayerTwo));
    assert_eq!(done.turn(), 10);
}

#[test]
fn test_draw_after_turn_limit() {
    let guesses = vec![code("789"); 20];
    let result = DuelInProgress::replay(Rules::default(), code("123"), code("456"), &guesses)
        .expect("Valid replay");
    let DuelResult::Finished(done) = result else {
        panic!("Duel should be over after ten turns");
    };
    assert_eq!(done.outcome(), &DuelOutcome::Draw);
    assert_eq!(done.turn(), 10);
    assert_eq!(
        done.summary(),
        "Neither player guessed the code within 10 turns."
    );
}

#[test]
fn test_replay_past_end_rejected() {
    let guesses = vec![code("456"), code("123")];
    let result = DuelInProgress::replay(Rules::default(), code("123"), code("456"), &guesses);
    assert!(matches!(result, Err(GuessError::GameOver)));
}

#[test]
fn test_replay_partial() {
    let guesses = vec![code("789"), code("780"), code("465")];
    let result = DuelInProgress::replay(Rules::default(), code("123"), code("456"), &guesses)
        .expect("Valid replay");
    match result {
        DuelResult::InProgress(game) => {
            assert_eq!(game.turn(), 2);
            assert_eq!(game.to_move(), Seat::PlayerTwo);
            assert_eq!(game.history(Seat::PlayerOne).len(), 2);
            let latest = game.history(Seat::PlayerOne).latest().expect("recorded");
            assert_eq!(latest.guess(), &code("465"));
            assert_eq!(latest.feedback(), "1 correct position, 2 wrong position.");
        }
        DuelResult::Finished(_) => panic!("Duel shouldn't finish"),
    }
}

#[test]
fn test_restart_keeps_rules() {
    let rules = Rules::new(3, 10).expect("valid rules");
    let done = match DuelSetup::new(rules)
        .set_first_secret(code("123"))
        .set_second_secret(code("456"))
        .guess(Attempt::new(Seat::PlayerOne, code("456")))
        .expect("Valid guess")
    {
        DuelResult::Finished(done) => done,
        DuelResult::InProgress(_) => panic!("Correct guess should end the duel"),
    };
    assert_eq!(done.restart().rules(), &rules);
}
