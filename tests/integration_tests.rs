//! Integration tests - key presses through to rendered frames

use crossterm::event::{KeyCode, KeyEvent};

use tui_2048::core::Session;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, Viewport};
use tui_2048::types::{Direction, GameAction, GameStatus};

fn press(session: &mut Session, code: KeyCode) -> bool {
    let action = handle_key_event(KeyEvent::from(code));
    action.is_some_and(|a| session.apply_action(a))
}

#[test]
fn test_key_presses_drive_the_session() {
    let mut session = Session::from_grid([[0, 0, 0, 2], [0; 4], [0; 4], [0, 0, 0, 2]], 8).unwrap();

    assert!(!press(&mut session, KeyCode::Char('d')));
    assert!(press(&mut session, KeyCode::Char('w')));
    assert_eq!(session.grid().value(0, 3), 4);
    assert_eq!(session.score(), 4);
    assert_eq!(session.moves(), 1);
    assert!(!press(&mut session, KeyCode::Char('x')));
}

#[test]
fn test_restart_key_after_game_over() {
    let mut session =
        Session::from_grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 3).unwrap();
    assert_eq!(session.status(), GameStatus::Lost);

    assert!(!press(&mut session, KeyCode::Left));
    assert!(press(&mut session, KeyCode::Char('r')));
    assert_eq!(session.status(), GameStatus::Running);
    assert_eq!(session.grid().count_filled(), 1);
    assert_eq!(session.episode_id(), 1);
}

#[test]
fn test_quit_is_not_a_game_action() {
    let q = KeyEvent::from(KeyCode::Char('q'));
    assert!(should_quit(q));
    assert_eq!(handle_key_event(q), None);
}

#[test]
fn test_random_play_renders_every_frame() {
    let mut session = Session::new(31337);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = view.render(&session.snapshot(), vp);

    for dir in Direction::ALL.iter().cycle().take(300) {
        session.apply_action(GameAction::Move(*dir));
        view.render_into(&session.snapshot(), vp, &mut fb);
        assert_eq!((fb.width(), fb.height()), (80, 24));
    }
}
