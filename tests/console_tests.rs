//! End-to-end tests through the text console.

use std::io::Cursor;

use hand_game::core::{GameConfig, Hand, ScriptedHands, TurnHolder};
use hand_game::engine::{GameEngine, LineConsole, RunOutcome};

const MAIN_PROMPT: &str = "Scissors(1), Rock(2), Paper(3)! <quit: 0> : ";
const TIEBREAK_PROMPT: &str = "Rock(1), Scissors(2), Paper(3)! <quit: 0> : ";

fn play(input: &str, hands: &[Hand], config: GameConfig) -> (RunOutcome, String) {
    let hands = ScriptedHands::new(hands.iter().copied());
    let mut engine = GameEngine::with_hands(config, hands).unwrap();
    let mut console = LineConsole::new(Cursor::new(input.to_string()), Vec::new());

    let outcome = engine.run(&mut console).unwrap();
    let output = String::from_utf8(console.into_writer()).unwrap();
    (outcome, output)
}

/// A full game: main win, tiebreak loss, tiebreak draw.
#[test]
fn test_full_game_transcript() {
    let hands = [Hand::Paper, Hand::Scissors, Hand::Rock];
    let (outcome, output) = play("1\n3\n1\n", &hands, GameConfig::default());

    assert_eq!(outcome, RunOutcome::Decided(TurnHolder::Computer));

    let expected = format!(
        "{main}You win!\n[User turn]\n{tb}[Computer turn]\n{tb}Computer wins the game!\nGame over\n",
        main = MAIN_PROMPT,
        tb = TIEBREAK_PROMPT,
    );
    assert_eq!(output, expected);
}

/// Quit straight away.
#[test]
fn test_quit_transcript() {
    let (outcome, output) = play("  0  \n", &[Hand::Rock], GameConfig::default());

    assert_eq!(outcome, RunOutcome::Quit);
    assert_eq!(output, format!("{}Game over\n", MAIN_PROMPT));
}

/// Empty lines and end of input are both invalid input.
#[test]
fn test_empty_and_closed_input() {
    let config = GameConfig::default().with_closed_input_limit(1);
    let (outcome, output) = play("\n", &[Hand::Rock], config);

    assert_eq!(outcome, RunOutcome::InputClosed);

    let error = "Invalid input. Please try again.\n";
    assert_eq!(
        output,
        format!("{p}{e}{p}{e}{p}", p = MAIN_PROMPT, e = error)
    );
}

/// A main-phase draw prints the draw and a fresh main prompt.
#[test]
fn test_main_draw_transcript() {
    let (outcome, output) = play("2\n0\n", &[Hand::Rock], GameConfig::default());

    assert_eq!(outcome, RunOutcome::Quit);
    assert_eq!(
        output,
        format!("{p}Draw!\n{p}Game over\n", p = MAIN_PROMPT)
    );
}
