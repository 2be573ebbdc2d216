//! TUI rendering.
//!
//! ┌──────────────────────────────────────────────┐
//! │ ▮ bubbleviz  sorting  n=50  cmp 312/1225 ... │
//! ├──────────────────────────────────────────────┤
//! │                    █                         │
//! │        █    ▄      █ █         █             │
//! │   ▆ █  █ █  █  █ ▂ █ █ █  ▅ █  █ █           │
//! │ █ █ █ ██ █ ██ █████ ███ ██ █ ██ █ █ ...      │
//! ├──────────────────────────────────────────────┤
//! │ [n] New Array   [s] Start Sort   [q] Quit    │
//! └──────────────────────────────────────────────┘

use std::time::Duration;

use super::app::{Action, App, Phase};
use bubbleviz_core::{Bar, BarColor};
use ratatui::{prelude::*, widgets::*};

/// Partial blocks for the top cell of a bar, indexed by eighths.
const EIGHTHS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(5),    // chart
            Constraint::Length(1), // controls
        ])
        .split(f.area());

    draw_title(f, rows[0], app);
    draw_chart(f, rows[1], app);
    draw_controls(f, rows[2], app);
}

pub fn color_for(color: BarColor) -> Color {
    match color {
        BarColor::Neutral => Color::Blue,
        BarColor::Comparing => Color::Red,
        BarColor::Sorted => Color::Green,
    }
}

fn format_secs(d: Duration) -> String {
    format!("{:.2}s", d.as_secs_f64())
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let phase = app.phase();
    let phase_style = match phase {
        Phase::Idle => Style::default().fg(Color::DarkGray),
        Phase::Playing => Style::default().bold().fg(Color::Yellow),
    };

    let mut spans = vec![
        Span::styled(" ▮ bubbleviz ", Style::default().bold().fg(Color::Cyan)),
        Span::styled(format!(" {} ", phase.label()), phase_style),
        Span::raw(format!("  n={}", app.size())),
    ];

    if let (Some(progress), Some((comparisons, swaps)), Some((clock, total))) =
        (app.progress(), app.totals(), app.playback_time())
    {
        spans.push(Span::styled(
            format!(
                "  cmp {}/{}  swaps {}/{}  {} / {} ",
                progress.comparisons,
                comparisons,
                progress.swaps,
                swaps,
                format_secs(clock),
                format_secs(total)
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if app.sorts_completed() > 0 {
        spans.push(Span::styled(
            format!("  sorted ×{} ", app.sorts_completed()),
            Style::default().fg(Color::Green),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(spans));

    f.render_widget(block, area);
}

fn draw_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Bubble Sort ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.size() == 0 {
        return;
    }

    let view = BarsView {
        bars: app.bar_positions(),
        slots: app.size(),
        max_value: app.max_value(),
    };
    f.render_widget(view, inner);
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for action in Action::ALL {
        let style = if app.is_enabled(action) {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", action.key_hint(), action.label()),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ---------------------------------------------------------------------------
// Bars widget
// ---------------------------------------------------------------------------

/// Vertical bars anchored to the bottom edge of the area.
pub struct BarsView<'a> {
    /// Each bar with its horizontal position in slot units.
    pub bars: Vec<(f64, &'a Bar)>,
    pub slots: usize,
    pub max_value: u32,
}

/// Column range `[start, end)` of a bar at slot position `x`.
///
/// Slot edges are floored; a bar is always at least one column wide unless
/// it falls past the right edge.
pub fn column_span(x: f64, slots: usize, width: u16) -> (u16, u16) {
    if slots == 0 || width == 0 {
        return (0, 0);
    }
    let per_slot = f64::from(width) / slots as f64;
    let start = (x * per_slot).floor().max(0.0) as u16;
    let end = ((x + 1.0) * per_slot).floor().max(0.0) as u16;
    let end = end.max(start + 1).min(width);
    (start.min(width), end)
}

/// Full rows and the partial top cell for a bar of `fraction` height.
pub fn bar_cells(fraction: f64, rows: u16) -> (u16, &'static str) {
    if rows == 0 || fraction <= 0.0 {
        return (0, EIGHTHS[0]);
    }
    let eighths = ((fraction.min(1.0) * f64::from(rows) * 8.0).round() as u32).max(1);
    let full = (eighths / 8) as u16;
    (full.min(rows), EIGHTHS[(eighths % 8) as usize])
}

impl Widget for BarsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for (x, bar) in &self.bars {
            let (start, end) = column_span(*x, self.slots, area.width);
            let (full, partial) = bar_cells(bar.height_fraction(self.max_value), area.height);
            let style = Style::default().fg(color_for(bar.color));

            for col in start..end {
                let cx = area.x + col;
                for row in 0..full {
                    let cy = area.bottom() - 1 - row;
                    if let Some(cell) = buf.cell_mut((cx, cy)) {
                        cell.set_symbol("█").set_style(style);
                    }
                }
                if full < area.height && partial != EIGHTHS[0] {
                    let cy = area.bottom() - 1 - full;
                    if let Some(cell) = buf.cell_mut((cx, cy)) {
                        cell.set_symbol(partial).set_style(style);
                    }
                }
            }
        }
    }
}
