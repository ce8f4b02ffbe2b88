use morphogen_data::{CycleInfo, PresetId};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

pub struct StatusWidget<'a> {
    pub preset: PresetId,
    pub current_step: usize,
    pub max_step: usize,
    pub playing: bool,
    pub cycle: CycleInfo,
    pub fingerprint: &'a str,
    pub error: Option<&'a str>,
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = if self.playing { "▶ playing" } else { "⏸ paused" };
        let short_fp: String = self.fingerprint.chars().take(8).collect();

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!(" {} ", self.preset.name()),
                Style::default().fg(Color::LightGreen),
            ),
            Span::raw(format!(
                " t = {} / {}  {}  [{}]",
                self.current_step, self.max_step, state, short_fp
            )),
        ])];
        match self.error {
            Some(err) => lines.push(Line::styled(
                format!(" {err}"),
                Style::default().fg(Color::Red),
            )),
            None => lines.push(Line::raw(format!(" {}", self.cycle.summary()))),
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" logical morphogenesis "),
            )
            .render(area, buf);
    }
}
