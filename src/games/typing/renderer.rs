/// Terminal rendering for the typing game
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::core::state::{GameSnapshot, Viewport, WordView};

/// World units covered by one terminal column
pub const CELL_WIDTH: f32 = 8.0;
/// World units covered by one terminal row
pub const CELL_HEIGHT: f32 = 16.0;

pub struct Areas {
    pub hud: Rect,
    pub play: Rect,
    pub input: Rect,
}

pub struct TypingRenderer;

impl TypingRenderer {
    pub fn layout(area: Rect) -> Areas {
        let [hud, play, input] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(area);
        Areas { hud, play, input }
    }

    pub fn viewport_for(play: Rect) -> Viewport {
        Viewport::new(
            f32::from(play.width) * CELL_WIDTH,
            f32::from(play.height) * CELL_HEIGHT,
        )
    }

    pub fn render(frame: &mut Frame, snapshot: &GameSnapshot<'_>, input: &str) {
        let areas = Self::layout(frame.area());

        Self::render_hud(frame, areas.hud, snapshot);
        Self::render_baseline(frame, areas.play, snapshot.baseline_y);
        for word in &snapshot.words {
            Self::render_word(frame, areas.play, word);
        }
        Self::render_input(frame, areas.input, input, snapshot.game_over);

        if snapshot.game_over {
            Self::render_game_over(frame, areas.play, snapshot);
        }
    }

    fn render_hud(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot<'_>) {
        let mut spans = vec![Span::styled("命: ", Style::new().fg(Color::Gray))];
        for i in 0..snapshot.max_lives {
            if i < snapshot.lives {
                spans.push(Span::styled("♥ ", Style::new().fg(Color::Red)));
            } else {
                spans.push(Span::styled("♡ ", Style::new().fg(Color::DarkGray)));
            }
        }
        let score = format!("cleared {}  missed {}", snapshot.cleared, snapshot.missed);
        let score_width = u16::try_from(score.len()).unwrap_or(u16::MAX);
        let [lives_area, score_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(score_width)]).areas(area);

        frame.render_widget(Paragraph::new(Line::from(spans)), lives_area);
        frame.render_widget(
            Paragraph::new(score).alignment(Alignment::Right).fg(Color::Gray),
            score_area,
        );
    }

    fn render_baseline(frame: &mut Frame, play: Rect, baseline_y: f32) {
        if baseline_y < 0.0 {
            return;
        }
        let row = (baseline_y / CELL_HEIGHT) as u16;
        if row >= play.height {
            return;
        }
        let line = Line::from("╌".repeat(usize::from(play.width))).fg(Color::DarkGray);
        frame.render_widget(line, Rect::new(play.x, play.y + row, play.width, 1));
    }

    fn render_word(frame: &mut Frame, play: Rect, word: &WordView<'_>) {
        let line = Line::from(word.text).bold().fg(Color::White);
        let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
        if let Some(rect) = word_rect(play, word, width) {
            frame.render_widget(line, rect);
        }
    }

    fn render_input(frame: &mut Frame, area: Rect, input: &str, game_over: bool) {
        let border = if game_over { Color::DarkGray } else { Color::Cyan };
        let block = Block::bordered()
            .title(" 入力 ")
            .border_style(Style::new().fg(border));
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(input).block(block), area);

        if !game_over && inner.width > 0 && inner.height > 0 {
            let typed = u16::try_from(Line::from(input).width()).unwrap_or(u16::MAX);
            let x = inner.x.saturating_add(typed).min(inner.right() - 1);
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }

    fn render_game_over(frame: &mut Frame, play: Rect, snapshot: &GameSnapshot<'_>) {
        let area = centered(play, 40, 8);
        let lines = vec![
            Line::from("GAME OVER").bold().fg(Color::White),
            Line::default(),
            Line::from("All lives lost."),
            Line::from(format!("cleared {}  missed {}", snapshot.cleared, snapshot.missed)),
            Line::default(),
            Line::from("[r] restart   [Esc] quit").fg(Color::Gray),
        ];

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(Style::new().fg(Color::Red))),
            area,
        );
    }
}

/// Where a word of `width` columns lands in the play area. Words are centred
/// on their `x`; anything above the top edge or below the area is not drawn.
fn word_rect(play: Rect, word: &WordView<'_>, width: u16) -> Option<Rect> {
    if word.y.is_nan() || word.y < 0.0 || play.width == 0 {
        return None;
    }
    let row = (word.y / CELL_HEIGHT) as u16;
    if row >= play.height {
        return None;
    }
    let width = width.min(play.width);
    let center = (word.x / CELL_WIDTH).max(0.0) as u16;
    let left = center.saturating_sub(width / 2).min(play.width - width);
    Some(Rect::new(play.x + left, play.y + row, width, 1))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
