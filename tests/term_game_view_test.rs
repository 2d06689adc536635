use tui_2048::core::{GameSnapshot, Session};
use tui_2048::term::{tile_style, AnchorY, FrameBuffer, GameView, Viewport, HINT_TEXT};
use tui_2048::types::GameStatus;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_draws_tile_value_centered_in_tile() {
    let mut snap = GameSnapshot::default();
    snap.grid[0][0] = 2048;

    // Default tiles are 8x3 with one-cell gutters; the board starts at (0, 1)
    // when anchored to the top of a viewport exactly as wide as the board.
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(37, 22));

    // Tile (0, 0) spans x 1..9, y 2..5; "2048" sits on its middle row.
    let row = fb.row_text(3);
    assert_eq!(&row[1..9], "  2048  ");
    assert_eq!(fb.get(1, 2).unwrap().style, tile_style(2048));
    assert_eq!(fb.get(10, 2).unwrap().style, tile_style(0));
}

#[test]
fn term_view_shows_score_and_hint() {
    let mut snap = Session::new(1).snapshot();
    snap.score = 1234;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("SCORE: 1234"));
    assert!(text.contains(HINT_TEXT));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameSnapshot::default();
    snap.best_tile = 512;
    snap.moves = 42;

    let wide = screen_text(&GameView::default().render(&snap, Viewport::new(80, 24)));
    assert!(wide.contains("BEST TILE"));
    assert!(wide.contains("42"));

    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(40, 24)));
    assert!(!narrow.contains("BEST TILE"));
}

#[test]
fn term_view_overlays_terminal_status() {
    let mut snap = GameSnapshot::default();
    snap.score = 20480;

    snap.status = GameStatus::Won;
    let won = screen_text(&GameView::default().render(&snap, Viewport::new(80, 24)));
    assert!(won.contains("YOU WIN! :)"));
    assert!(won.contains("FINAL SCORE: 20480"));

    snap.status = GameStatus::Lost;
    let lost = screen_text(&GameView::default().render(&snap, Viewport::new(80, 24)));
    assert!(lost.contains("GAME OVER!"));
    assert!(!lost.contains("YOU WIN"));

    snap.status = GameStatus::Running;
    let running = screen_text(&GameView::default().render(&snap, Viewport::new(80, 24)));
    assert!(!running.contains("GAME OVER!"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = Session::new(5).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
