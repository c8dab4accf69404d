use blockfall::core::{Game, GameConfig, GameSnapshot, MarkSnapshot};
use blockfall::term::{tint_color, FrameBuffer, GameView, Viewport};
use blockfall::types::{Cell, PieceKind, Tint};

fn snapshot_of(kind: PieceKind) -> GameSnapshot {
    Game::new(GameConfig {
        repeat_piece: Some(kind),
        ..GameConfig::default()
    })
    .snapshot()
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot_of(PieceKind::T);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_mark_as_two_chars_wide() {
    let mut snap = snapshot_of(PieceKind::O);
    snap.active = None;
    snap.marks.push(MarkSnapshot {
        cell: Cell::new(2, 21),
        tint: Tint(4),
    });

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Bottom-left cell of the board: first column, last row.
    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    let right = fb.get(x0 + 1, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, tint_color(Tint(4)));
    // Its neighbour stays empty.
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_skips_cells_outside_the_board() {
    let mut snap = snapshot_of(PieceKind::I);
    // The vertical I spawns with three blocks above the first row.
    let active = snap.active.unwrap();
    assert_eq!(active.cells[0], Cell::new(6, 2));
    snap.marks.push(MarkSnapshot {
        cell: Cell::new(2, 1),
        tint: Tint(0),
    });

    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    // Only the anchor block is inside; it lands on the first board row.
    assert_eq!(view.cell_origin(&snap, vp, Cell::new(6, 2)), Some((9, 1)));
    assert_eq!(fb.get(9, 1).unwrap().ch, '█');
    assert_eq!(view.cell_origin(&snap, vp, Cell::new(6, 1)), None);
    // The top border is intact above both the piece and the hidden mark.
    assert_eq!(fb.get(9, 0).unwrap().ch, '─');
    assert_eq!(fb.get(1, 0).unwrap().ch, '─');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot_of(PieceKind::O);
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let view = GameView::default();
    // Wider than the 22x22 board frame to allow a panel.
    let fb = view.render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    for word in ["NEXT", "SCORE", "1234", "LEVEL", "LINES"] {
        assert!(all.contains(word), "missing {word}");
    }

    // Frame at x=19, panel two columns past it; the O preview sits on the
    // bottom two rows of the four-row box below NEXT.
    let panel_x = 19 + 22 + 2;
    assert_eq!(fb.get(panel_x, 0).unwrap().ch, 'N');
    for (x, y) in [(panel_x, 4), (panel_x + 2, 4), (panel_x, 3), (panel_x + 3, 3)] {
        assert_eq!(fb.get(x, y).unwrap().ch, '█', "at ({x}, {y})");
    }
    assert_eq!(fb.get(panel_x, 2).unwrap().ch, ' ');
}

#[test]
fn term_view_omits_side_panel_when_narrow() {
    let snap = snapshot_of(PieceKind::O);
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_paused_overlay() {
    let mut snap = snapshot_of(PieceKind::S);
    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    assert!(!screen_text(&view.render(&snap, vp)).contains("PAUSED"));

    snap.paused = true;
    let fb = view.render(&snap, vp);
    // Centered on the frame's middle row.
    let row: Vec<char> = fb.row(11).iter().map(|g| g.ch).collect();
    let text: String = row[8..14].iter().collect();
    assert_eq!(text, "PAUSED");
}

#[test]
fn term_view_render_into_reuses_buffer_after_resize() {
    let snap = snapshot_of(PieceKind::Z);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(60, 22), &mut fb);
    view.render_into(&snap, Viewport::new(22, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (22, 22));
    assert_eq!(fb, view.render(&snap, Viewport::new(22, 22)));
}
