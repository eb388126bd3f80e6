//! BoardView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O). Menus, the card grid, the side panel and the finish overlay
//! are all drawn from the snapshot plus a little frontend state.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CardId, CardStatus, Difficulty, PairId, Stage, MAX_STARS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Frontend state the snapshot doesn't carry.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub categories: &'a [String],
    /// Highlighted entry on either menu screen.
    pub menu_index: usize,
    /// Highlighted card on the grid.
    pub cursor: Option<CardId>,
    pub asset_root: &'a str,
}

impl<'a> ViewState<'a> {
    pub fn new(categories: &'a [String], asset_root: &'a str) -> Self {
        Self {
            categories,
            menu_index: 0,
            cursor: None,
            asset_root,
        }
    }
}

const BG: Rgb = Rgb::new(0, 0, 0);
const TABLE: Rgb = Rgb::new(20, 50, 35);

/// Terminal renderer for the memory board.
pub struct BoardView {
    /// Columns per card face, brackets included.
    card_w: u16,
    /// Horizontal gap between cards.
    gap_x: u16,
    /// Vertical gap between card rows.
    gap_y: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            card_w: 4,
            gap_x: 1,
            gap_y: 1,
        }
    }
}

impl BoardView {
    pub fn new(card_w: u16, gap_x: u16, gap_y: u16) -> Self {
        Self {
            card_w: card_w.max(4),
            gap_x,
            gap_y,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        state: &ViewState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), BG).cell(' '));

        let title = CellStyle::new(Rgb::new(250, 200, 90), BG).bold();
        fb.put_str(1, 0, "MEMORY", title);

        match snap.stage {
            Stage::ChoosingDifficulty => self.draw_difficulty_menu(fb, state),
            Stage::ChoosingCategory => self.draw_category_menu(fb, snap, state),
            Stage::Playing | Stage::Finished => self.draw_table(fb, snap, state, viewport),
        }

        self.draw_hints(fb, snap.stage, viewport);
    }

    pub fn render(&self, snap: &GameSnapshot, state: &ViewState<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, state, viewport, &mut fb);
        fb
    }

    fn draw_difficulty_menu(&self, fb: &mut FrameBuffer, state: &ViewState<'_>) {
        let heading = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        fb.put_str(1, 2, "Choose difficulty", heading);

        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let y = 4 + i as u16;
            let selected = i == state.menu_index;
            let x = draw_menu_prefix(fb, y, i, selected);
            let style = menu_style(selected);
            let x = fb.put_str(x, y, difficulty.as_str(), style);
            let dim = CellStyle::new(Rgb::new(140, 140, 140), BG);
            let x = fb.put_str(x + 1, y, "(", dim);
            let x = fb.put_u32(x, y, difficulty.total_cards() as u32, dim);
            fb.put_str(x, y, " cards)", dim);
        }
    }

    fn draw_category_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, state: &ViewState<'_>) {
        let heading = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let x = fb.put_str(1, 2, "Choose category", heading);
        if let Some(d) = snap.difficulty {
            let dim = CellStyle::new(Rgb::new(140, 140, 140), BG);
            let x = fb.put_str(x + 1, 2, "[", dim);
            let x = fb.put_str(x, 2, d.as_str(), dim);
            fb.put_str(x, 2, "]", dim);
        }

        for (i, category) in state.categories.iter().enumerate() {
            let y = 4 + i as u16;
            let selected = i == state.menu_index;
            let x = draw_menu_prefix(fb, y, i, selected);
            fb.put_str(x, y, category, menu_style(selected));
        }
    }

    fn draw_table(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        state: &ViewState<'_>,
        viewport: Viewport,
    ) {
        let cols = snap.columns as u16;
        let rows = snap.rows() as u16;
        if cols == 0 {
            return;
        }

        let stride_x = self.card_w + self.gap_x;
        let stride_y = 1 + self.gap_y;
        let frame_w = cols * stride_x + self.gap_x + 2;
        let frame_h = rows * stride_y + self.gap_y + 2;
        let (start_x, start_y) = (1, 2);

        let felt = CellStyle::new(Rgb::new(60, 90, 70), TABLE);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', felt);
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), BG),
        );

        for (i, card) in snap.cards.iter().enumerate() {
            let i = i as u16;
            let x = start_x + 1 + self.gap_x + (i % cols) * stride_x;
            let y = start_y + 1 + self.gap_y + (i / cols) * stride_y;
            let highlighted = state.cursor == Some(i as CardId) && snap.playable();
            self.draw_card(fb, x, y, card.pair, card.status, highlighted);
        }

        self.draw_side_panel(fb, snap, state, viewport, start_x + frame_w + 2, start_y);

        if snap.finished {
            draw_finished_overlay(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        pair: u8,
        status: CardStatus,
        highlighted: bool,
    ) {
        let style = match status {
            CardStatus::Hidden => CellStyle::new(Rgb::new(170, 170, 200), Rgb::new(40, 40, 90)),
            CardStatus::Revealed => {
                CellStyle::new(Rgb::new(30, 30, 30), Rgb::new(240, 210, 90)).bold()
            }
            CardStatus::Matched => CellStyle::new(Rgb::new(20, 60, 20), Rgb::new(120, 210, 120)),
        };
        fb.fill_rect(x, y, self.card_w, 1, ' ', style);

        let mid = x + (self.card_w - 2) / 2;
        if status == CardStatus::Hidden {
            fb.put_str(mid, y, "??", style);
        } else {
            put_two_digits(fb, mid, y, pair as u32, style);
        }

        if highlighted {
            let edge = CellStyle::new(Rgb::new(255, 255, 255), style.bg).bold();
            fb.put_char(x, y, '[', edge);
            fb.put_char(x + self.card_w - 1, y, ']', edge);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        state: &ViewState<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let mut y = start_y;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x, y + 1, snap.moves, value);
        y += 3;

        fb.put_str(panel_x, y, "STARS", label);
        let gold = CellStyle::new(Rgb::new(250, 200, 60), BG).bold();
        for s in 0..MAX_STARS {
            let ch = if s < snap.stars { '★' } else { '☆' };
            fb.put_char(panel_x + s as u16, y + 1, ch, gold);
        }
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        let x = put_two_digits(fb, panel_x, y + 1, snap.time.minutes, value);
        let x = fb.put_str(x, y + 1, ":", value);
        put_two_digits(fb, x, y + 1, snap.time.seconds as u32, value);
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_str(
            panel_x,
            y + 1,
            snap.difficulty.map(|d| d.as_str()).unwrap_or("-"),
            value,
        );
        y += 3;

        fb.put_str(panel_x, y, "CATEGORY", label);
        fb.put_str(panel_x, y + 1, &snap.category, value);
        y += 3;

        fb.put_str(panel_x, y, "CARD", label);
        let face_up = state
            .cursor
            .and_then(|id| snap.cards.get(id as usize))
            .filter(|c| c.status != CardStatus::Hidden);
        match face_up {
            Some(card) => {
                put_asset_path(
                    fb,
                    panel_x,
                    y + 1,
                    state.asset_root,
                    &snap.category,
                    card.pair,
                    value.dim(),
                );
            }
            None => {
                fb.put_str(panel_x, y + 1, "-", value);
            }
        }
    }

    fn draw_hints(&self, fb: &mut FrameBuffer, stage: Stage, viewport: Viewport) {
        if viewport.height < 2 {
            return;
        }
        let hint = match stage {
            Stage::ChoosingDifficulty | Stage::ChoosingCategory => {
                "up/down choose  enter confirm  1-9 pick  q quit"
            }
            Stage::Playing => "arrows move  enter flip  r reset  q quit",
            Stage::Finished => "enter play again  q quit",
        };
        let style = CellStyle::new(Rgb::new(120, 120, 120), BG).dim();
        fb.put_str(1, viewport.height - 1, hint, style);
    }
}

fn draw_menu_prefix(fb: &mut FrameBuffer, y: u16, index: usize, selected: bool) -> u16 {
    let style = menu_style(selected);
    let x = fb.put_str(1, y, if selected { "> " } else { "  " }, style);
    let x = fb.put_u32(x, y, index as u32 + 1, style);
    fb.put_str(x, y, ". ", style)
}

fn menu_style(selected: bool) -> CellStyle {
    if selected {
        CellStyle::new(Rgb::new(250, 200, 90), BG).bold()
    } else {
        CellStyle::new(Rgb::new(200, 200, 200), BG)
    }
}

fn put_two_digits(fb: &mut FrameBuffer, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
    let x = if value < 10 {
        fb.put_char(x, y, '0', style);
        x + 1
    } else {
        x
    };
    fb.put_u32(x, y, value, style)
}

/// Same text as `card_asset_path`, written cell by cell.
fn put_asset_path(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    root: &str,
    category: &str,
    pair: PairId,
    style: CellStyle,
) -> u16 {
    let mut x = x;
    if !root.is_empty() {
        x = fb.put_str(x, y, root.trim_end_matches('/'), style);
        x = fb.put_str(x, y, "/", style);
    }
    let x = fb.put_str(x, y, category, style);
    let x = fb.put_str(x, y, "/", style);
    let x = fb.put_u32(x, y, pair as u32, style);
    fb.put_str(x, y, ".jpg", style)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    for dx in x + 1..right {
        fb.put_char(dx, y, '─', style);
        fb.put_char(dx, bottom, '─', style);
    }
    for dy in y + 1..bottom {
        fb.put_char(x, dy, '│', style);
        fb.put_char(right, dy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

fn draw_finished_overlay(
    fb: &mut FrameBuffer,
    snap: &GameSnapshot,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
    let mid_y = start_y + frame_h / 2;
    let text = "FINISHED";
    let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
    fb.put_str(x, mid_y, text, style);

    // "N moves" under the banner.
    let plain = CellStyle::new(Rgb::new(220, 220, 220), BG);
    let digits = snap.moves.max(1).ilog10() as u16 + 1;
    let line_w = digits + " moves".len() as u16;
    let x = start_x + frame_w.saturating_sub(line_w) / 2;
    let x = fb.put_u32(x, mid_y + 1, snap.moves, plain);
    fb.put_str(x, mid_y + 1, " moves", plain);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;
    use crate::types::card_asset_path;

    fn cats() -> Vec<String> {
        vec!["sweets".to_string(), "animals".to_string()]
    }

    #[test]
    fn difficulty_menu_lists_both_levels() {
        let snap = GameSnapshot::default();
        let categories = cats();
        let state = ViewState::new(&categories, "img");
        let fb = BoardView::default().render(&snap, &state, Viewport::new(60, 12));
        let text = fb.text();

        assert!(text.contains("Choose difficulty"));
        assert!(text.contains("> 1. easy (16 cards)"));
        assert!(text.contains("  2. hard (36 cards)"));
    }

    #[test]
    fn hidden_cards_show_question_marks() {
        let mut session = Session::new(3);
        session.choose_difficulty(Difficulty::Easy).unwrap();
        session.choose_category("sweets").unwrap();
        let snap = session.snapshot();

        let categories = cats();
        let state = ViewState::new(&categories, "img");
        let fb = BoardView::default().render(&snap, &state, Viewport::new(60, 16));
        assert_eq!(fb.text().matches("??").count(), 16);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let categories = cats();
        let state = ViewState::new(&categories, "img");
        let fb = BoardView::default().render(&snap, &state, Viewport::new(3, 1));
        assert_eq!(fb.width(), 3);
    }

    #[test]
    fn asset_path_is_drawn_like_card_asset_path() {
        for root in ["img", "img/", "", "/srv/cards/"] {
            let mut fb = FrameBuffer::new(40, 1);
            let style = CellStyle::new(Rgb::new(255, 255, 255), BG);
            let end = put_asset_path(&mut fb, 0, 0, root, "sweets", 17, style);

            let expected = card_asset_path(root, "sweets", 17);
            assert_eq!(fb.row_text(0).trim_end(), expected);
            assert_eq!(end as usize, expected.len());
        }
    }
}
