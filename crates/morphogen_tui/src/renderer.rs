use morphogen_data::{PresetId, Sentence, SimulationResult};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::Line;
use ratatui::Frame;

use crate::views::stats::StatsWidget;
use crate::views::status::StatusWidget;
use crate::views::timeline::TimelineWidget;

/// Read-only snapshot of what the playground shows.
pub struct PlaygroundView<'a> {
    pub preset: PresetId,
    pub sentences: &'a [Sentence],
    pub result: &'a SimulationResult,
    pub current_step: usize,
    pub playing: bool,
    pub fingerprint: &'a str,
    pub error: Option<&'a str>,
}

/// Lays out status, timeline, metrics and the key help line.
pub fn draw(frame: &mut Frame, view: &PlaygroundView) {
    let timeline_height = view.sentences.len() as u16 + 2;
    let stats_height = view.result.stats.len() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(timeline_height),
            Constraint::Length(stats_height),
            Constraint::Min(1),
        ])
        .split(frame.area());

    frame.render_widget(
        StatusWidget {
            preset: view.preset,
            current_step: view.current_step,
            max_step: view.result.max_step(),
            playing: view.playing,
            cycle: view.result.cycle,
            fingerprint: view.fingerprint,
            error: view.error,
        },
        chunks[0],
    );
    frame.render_widget(
        TimelineWidget {
            sentences: view.sentences,
            history: &view.result.history,
            current_step: view.current_step,
            cycle: view.result.cycle,
        },
        chunks[1],
    );
    frame.render_widget(
        StatsWidget {
            stats: &view.result.stats,
        },
        chunks[2],
    );
    frame.render_widget(
        Line::raw(" space play/pause  ←/→ step  home/end jump  p preset  s reseed  a add  d drop  r reset  q quit"),
        chunks[3],
    );
}
