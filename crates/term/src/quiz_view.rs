//! QuizView: maps a [`QuizSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{progressive_hint, QuizSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{LossReason, RevealOutcome, Screen, ADMIN_JUMP_SLOTS, CORRECT_ANSWER_POINTS};

const BG: Rgb = Rgb::new(16, 18, 32);
const PANEL_BG: Rgb = Rgb::new(34, 30, 60);

const TEXT: CellStyle = CellStyle::new(Rgb::new(225, 225, 235), BG);
const MUTED: CellStyle = CellStyle::new(Rgb::new(150, 150, 170), BG);
const TITLE: CellStyle = CellStyle::new(Rgb::new(250, 204, 21), BG).bold();
const ACCENT: CellStyle = CellStyle::new(Rgb::new(192, 132, 252), BG).bold();
const HEART: CellStyle = CellStyle::new(Rgb::new(244, 63, 94), BG);
const HINT: CellStyle = CellStyle::new(Rgb::new(253, 224, 71), BG).bold();
const TILE: CellStyle = CellStyle::new(Rgb::new(129, 140, 248), BG);
const WIN: CellStyle = CellStyle::new(Rgb::new(74, 222, 128), PANEL_BG).bold();
const LOSE: CellStyle = CellStyle::new(Rgb::new(248, 113, 113), PANEL_BG).bold();
const MODAL: CellStyle = CellStyle::new(Rgb::new(235, 235, 245), PANEL_BG);
const MODAL_STRONG: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
const ADMIN: CellStyle = CellStyle::new(Rgb::new(250, 204, 21), PANEL_BG);
const ADMIN_CURRENT: CellStyle = CellStyle::new(PANEL_BG, Rgb::new(250, 204, 21)).bold();
const DEBUG: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(185, 28, 28)).bold();

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

/// Terminal presentation of the quiz.
///
/// Images are shown as labelled tiles (one per image reference); the host
/// projects the actual pictures separately.
pub struct QuizView {
    max_tile_w: u16,
    tile_h: u16,
    /// Columns the tile row moves while the wrong-answer shake is active.
    shake_offset: u16,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            max_tile_w: 24,
            tile_h: 5,
            shake_offset: 2,
        }
    }
}

impl QuizView {
    pub fn new(max_tile_w: u16, tile_h: u16) -> Self {
        Self {
            max_tile_w: max_tile_w.max(4),
            tile_h: tile_h.max(3),
            ..Self::default()
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &QuizSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell { ch: ' ', style: TEXT });
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        match (snap.screen, snap.level) {
            (Screen::Home, _) => self.draw_home(fb, snap, viewport),
            (Screen::Playing, Some(_)) => self.draw_playing(fb, snap, viewport),
            (Screen::Playing, None) | (Screen::Finished, _) => {
                self.draw_finished(fb, snap, viewport)
            }
        }

        if snap.admin.is_enabled() {
            self.draw_admin_panel(fb, snap, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &QuizSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_home(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot<'_>, viewport: Viewport) {
        let attempts = format!("• Có {} lượt sai / câu", snap.max_wrong_attempts);
        let points = format!("• Đúng = +{} điểm", CORRECT_ANSWER_POINTS);
        let questions = format!("• {} câu hỏi thú vị", snap.level_count);
        let lines: [(&str, CellStyle); 13] = [
            ("Đuổi hình bắt chữ", TITLE),
            ("Phong trào đấu tranh ở Việt Nam", ACCENT),
            ("", TEXT),
            ("Cách chơi", TITLE),
            ("• Nhìn các hình ảnh gợi ý", TEXT),
            ("• Đoán tên sự kiện lịch sử", TEXT),
            ("• Sử dụng gợi ý nếu cần", TEXT),
            ("Luật chơi", TITLE),
            (&attempts, TEXT),
            (&points, TEXT),
            (&questions, TEXT),
            ("", TEXT),
            ("[Space] Bắt đầu    [q] Thoát", MUTED),
        ];
        draw_centered_block(fb, viewport, &lines);
    }

    fn draw_finished(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot<'_>, viewport: Viewport) {
        let score = format!("{} điểm", snap.score);
        let lines: [(&str, CellStyle); 5] = [
            ("Hoàn thành!", TITLE),
            ("", TEXT),
            (&score, ACCENT),
            ("", TEXT),
            ("[Enter] Chơi lại    [b] Trang chủ    [q] Thoát", MUTED),
        ];
        draw_centered_block(fb, viewport, &lines);
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot<'_>, viewport: Viewport) {
        let Some(level) = snap.level else {
            return;
        };
        let w = viewport.width;

        // Header: score on the left, progress on the right.
        let label = "ĐIỂM SỐ";
        fb.put_str(1, 0, label, MUTED);
        fb.put_u32(text_cols(label) + 2, 0, snap.score, TITLE);
        let progress = format!("Câu {}/{}", snap.level_index + 1, snap.level_count);
        fb.put_str(w.saturating_sub(text_cols(&progress) + 1), 0, &progress, ACCENT);
        fb.fill_rect(0, 1, w, 1, '─', MUTED);

        if snap.admin.show_answers() {
            let banner = format!(" DEBUG: {} ", level.answer);
            fb.put_str(1, 2, &banner, DEBUG);
        }

        let mut y = self.draw_tiles(fb, &level.images, snap.shaking, w, 3);
        y = y.saturating_add(1);

        // Attempts left.
        fb.put_str(2, y, "Lượt sai", MUTED);
        let mut x = 11;
        for i in 0..snap.max_wrong_attempts {
            let ch = if i < snap.attempts_left() { '♥' } else { '·' };
            fb.put_char(x, y, ch, HEART);
            x = x.saturating_add(2);
        }
        y = y.saturating_add(2);

        if snap.hints_revealed > 0 {
            let label = format!(
                "Gợi ý ({}/{} từ)",
                snap.hints_revealed.min(snap.word_count()),
                snap.word_count()
            );
            fb.put_str(2, y, &label, MUTED);
            y = y.saturating_add(1);
            let hint = progressive_hint(&level.answer, snap.hints_revealed);
            fb.put_str_clipped(4, y, &hint, w.saturating_sub(5), HINT);
            y = y.saturating_add(2);
        }

        for clue in snap.visible_content_hints() {
            fb.put_str(2, y, "•", ACCENT);
            fb.put_str_clipped(4, y, clue, w.saturating_sub(5), TEXT);
            y = y.saturating_add(1);
        }

        self.draw_controls(fb, snap, viewport);

        if snap.is_answer_revealed {
            self.draw_reveal(fb, snap, &level.answer, viewport);
        }
    }

    /// Draw one tile per image reference. Returns the first row below the tiles.
    fn draw_tiles(&self, fb: &mut FrameBuffer, images: &[String], shaking: bool, w: u16, y: u16) -> u16 {
        let n = images.len().min(u16::MAX as usize) as u16;
        if n == 0 {
            return y;
        }
        let gap = 2;
        let avail = w.saturating_sub(2).saturating_sub(gap * (n - 1));
        let tile_w = (avail / n).clamp(4, self.max_tile_w);
        let total = tile_w * n + gap * (n - 1);
        let mut x = w.saturating_sub(total) / 2;
        if shaking {
            x = x.saturating_add(self.shake_offset);
        }

        let inner = tile_w - 2;
        for (i, image) in images.iter().enumerate() {
            fb.draw_box(x, y, tile_w, self.tile_h, TILE);
            let label = format!("#{}", i + 1);
            fb.put_str_centered(x + 1, y + 1, inner, &label, ACCENT);
            let name = image.rsplit('/').next().unwrap_or(image);
            fb.put_str_centered(x + 1, y + self.tile_h / 2 + 1, inner, name, MUTED);
            x = x.saturating_add(tile_w + gap);
        }
        y.saturating_add(self.tile_h)
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot<'_>, viewport: Viewport) {
        let y = viewport.height.saturating_sub(1);
        let judging = if snap.accepts_answers() { TEXT } else { MUTED.dim() };
        let mut x = 1;
        for (keys, style) in [
            ("[Enter] Đúng", judging),
            ("[x] Sai", judging),
            ("[h] Gợi ý", judging),
            ("[g] Gợi ý nội dung", judging),
            ("[←/→] Chuyển câu", TEXT),
            ("[r] Chơi lại", MUTED),
            ("[q] Thoát", MUTED),
        ] {
            let written = fb.put_str_clipped(x, y, keys, viewport.width.saturating_sub(x), style);
            x = x.saturating_add(written + 2);
        }
    }

    fn draw_reveal(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot<'_>, answer: &str, viewport: Viewport) {
        let won = snap.reveal_outcome.is_some_and(|o| o.shows_points());
        let mut lines: Vec<(String, CellStyle)> = Vec::with_capacity(7);

        match snap.reveal_outcome {
            Some(RevealOutcome::Lost(reason)) => {
                let (title, detail) = match reason {
                    LossReason::OutOfAttempts => (
                        "Bạn đã hết lượt chơi",
                        format!("Đã sai {} lần", snap.max_wrong_attempts),
                    ),
                    LossReason::HintsExhausted => ("Bạn đã thua", "Đã dùng hết gợi ý".to_string()),
                };
                lines.push((title.to_string(), LOSE));
                lines.push((detail, MODAL));
                lines.push((String::new(), MODAL));
                lines.push(("Đáp án đúng là:".to_string(), MODAL));
            }
            Some(RevealOutcome::Won) | None => {
                lines.push(("Chính xác!".to_string(), WIN));
                lines.push((String::new(), MODAL));
                lines.push(("Đáp án là:".to_string(), MODAL));
            }
        }
        lines.push((answer.to_string(), MODAL_STRONG));
        if won {
            lines.push((format!("+{} điểm", CORRECT_ANSWER_POINTS), WIN));
        }
        if let Some(secs) = snap.advance_in_secs {
            lines.push((format!("Câu tiếp theo sau {}s   [Esc] Đóng", secs), MODAL));
        }

        let content_w = lines.iter().map(|(s, _)| text_cols(s)).max().unwrap_or(0);
        let box_w = (content_w + 6).max(30).min(viewport.width);
        let box_h = (lines.len() as u16 + 4).min(viewport.height);
        let x = viewport.width.saturating_sub(box_w) / 2;
        let y = viewport.height.saturating_sub(box_h) / 2;

        fb.fill_rect(x, y, box_w, box_h, ' ', MODAL);
        fb.draw_box(x, y, box_w, box_h, if won { WIN } else { LOSE });
        for (i, (line, style)) in lines.iter().enumerate() {
            fb.put_str_centered(x + 1, y + 2 + i as u16, box_w.saturating_sub(2), line, *style);
        }
    }

    fn draw_admin_panel(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot<'_>, viewport: Viewport) {
        let show = snap.admin.show_answers();
        let panel_w = 34u16.min(viewport.width);
        let panel_h: u16 = if show { 8 } else { 7 };
        let x = viewport.width.saturating_sub(panel_w + 1);
        let y = viewport.height.saturating_sub(panel_h + 2);

        fb.fill_rect(x, y, panel_w, panel_h, ' ', ADMIN);
        fb.draw_box(x, y, panel_w, panel_h, ADMIN);
        fb.put_str(x + 2, y, " ADMIN PANEL ", ADMIN.bold());

        fb.put_str(x + 2, y + 1, "Jump to Level:", ADMIN);
        let mut cx = x + 2;
        for i in 0..snap.level_count.min(ADMIN_JUMP_SLOTS) {
            let style = if i == snap.level_index { ADMIN_CURRENT } else { ADMIN };
            fb.put_char(cx, y + 2, '[', style);
            fb.put_u32(cx + 1, y + 2, (i + 1) as u32, style);
            fb.put_char(cx + 2, y + 2, ']', style);
            cx += 4;
        }

        fb.put_str(x + 2, y + 3, "[z] Reset Score", ADMIN);
        let toggle = if show { "[v] Hide Answers" } else { "[v] Show Answers" };
        fb.put_str(x + 2, y + 4, toggle, ADMIN);
        fb.put_str(x + 2, y + 5, "[Ctrl+Shift+A] Close", ADMIN.dim());

        if let (true, Some(level)) = (show, snap.level) {
            let label = "Current Answer: ";
            let label_w = text_cols(label);
            fb.put_str(x + 2, y + 6, label, ADMIN);
            fb.put_str_clipped(
                x + 2 + label_w,
                y + 6,
                &level.answer,
                panel_w.saturating_sub(label_w + 4),
                ADMIN.bold(),
            );
        }
    }
}

fn text_cols(s: &str) -> u16 {
    crate::fb::text_width(s)
}

/// Draw lines centered horizontally, the block centered vertically.
fn draw_centered_block(fb: &mut FrameBuffer, viewport: Viewport, lines: &[(&str, CellStyle)]) {
    let h = lines.len() as u16;
    let top = viewport.height.saturating_sub(h) / 2;
    for (i, (line, style)) in lines.iter().enumerate() {
        fb.put_str_centered(0, top + i as u16, viewport.width, line, *style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameController, LevelCatalog, QuizConfig};
    use crate::types::HostAction;

    const VP: Viewport = Viewport {
        width: 100,
        height: 30,
    };

    fn playing() -> GameController {
        let mut game = GameController::new(LevelCatalog::builtin(), QuizConfig::default());
        game.apply(HostAction::StartGame);
        game
    }

    fn text(game: &GameController) -> String {
        QuizView::default().render(&game.snapshot(), VP).to_text()
    }

    #[test]
    fn home_screen_lists_rules() {
        let game = GameController::new(LevelCatalog::builtin(), QuizConfig::default());
        let out = text(&game);
        assert!(out.contains("Đuổi hình bắt chữ"));
        assert!(out.contains("Có 3 lượt sai / câu"));
        assert!(out.contains("4 câu hỏi thú vị"));
    }

    #[test]
    fn header_shows_score_and_progress() {
        let out = text(&playing());
        let header = out.lines().next().unwrap();
        assert!(header.contains("ĐIỂM SỐ"));
        assert!(header.contains("Câu 1/4"));
        assert!(out.contains("#1"));
    }

    #[test]
    fn hint_box_counts_words() {
        let mut game = playing();
        game.apply(HostAction::Hint);
        let out = text(&game);
        assert!(out.contains("Gợi ý (1/2 từ)"));
        assert!(out.contains("Việt"));
    }

    #[test]
    fn reveal_modal_shows_points_only_when_won() {
        let mut game = playing();
        game.apply(HostAction::Correct);
        let out = text(&game);
        assert!(out.contains("Chính xác!"));
        assert!(out.contains("+10 điểm"));
        assert!(out.contains("Câu tiếp theo sau 2s"));

        let mut game = playing();
        for _ in 0..3 {
            game.apply(HostAction::Wrong);
        }
        let out = text(&game);
        assert!(out.contains("Bạn đã hết lượt chơi"));
        assert!(out.contains("Đáp án đúng là:"));
        assert!(!out.contains("+10 điểm"));
    }

    #[test]
    fn shaking_moves_tiles() {
        let mut game = playing();
        let still = QuizView::default().render(&game.snapshot(), VP);
        game.apply(HostAction::Wrong);
        let shaken = QuizView::default().render(&game.snapshot(), VP);

        let first_corner = |fb: &FrameBuffer| (0..VP.width).find(|&x| fb.get(x, 3).map(|c| c.ch) == Some('┌'));
        assert_eq!(
            first_corner(&shaken).unwrap(),
            first_corner(&still).unwrap() + 2
        );
    }

    #[test]
    fn admin_panel_and_debug_banner() {
        let mut game = playing();
        assert!(!text(&game).contains("ADMIN PANEL"));

        game.apply(HostAction::ToggleAdmin);
        game.apply(HostAction::ToggleShowAnswers);
        let answer = game.current_level().unwrap().answer.clone();
        let out = text(&game);
        assert!(out.contains("ADMIN PANEL"));
        assert!(out.contains(&format!("DEBUG: {answer}")));
        assert!(out.contains("Current Answer:"));
    }

    #[test]
    fn finished_screen_shows_score() {
        let mut game = playing();
        for i in 0..4 {
            game.apply(HostAction::Correct);
            game.tick(2000);
            assert_eq!(game.round().current_level(), i + 1);
        }
        let out = text(&game);
        assert!(out.contains("Hoàn thành!"));
        assert!(out.contains("40 điểm"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut game = playing();
        game.apply(HostAction::ToggleAdmin);
        game.apply(HostAction::Correct);
        for (w, h) in [(0, 0), (1, 1), (10, 3), (20, 8)] {
            let fb = QuizView::default().render(&game.snapshot(), Viewport::new(w, h));
            assert_eq!((fb.width(), fb.height()), (w, h));
        }
    }
}
