use morphogen_core::describe::badge;
use morphogen_data::SentenceStats;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table, Widget};

/// Per-sentence post-burn-in metrics.
pub struct StatsWidget<'a> {
    pub stats: &'a [SentenceStats],
}

impl Widget for StatsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec!["Sentence", "Type", "Mean", "Flip", "Entropy"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.stats.iter().map(|s| {
            Row::new(vec![
                s.label.clone(),
                badge(s.kind).to_string(),
                format!("{:.3}", s.mean),
                format!("{:.3}", s.flip_rate),
                format!("{:.3}", s.entropy_proxy),
            ])
            .style(Style::default().fg(entropy_color(s.entropy_proxy)))
        });

        let widths = [
            Constraint::Min(14),
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(8),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" Metrics "))
            .render(area, buf);
    }
}

fn entropy_color(entropy: f64) -> Color {
    if entropy > 0.75 {
        Color::Magenta
    } else if entropy > 0.25 {
        Color::Yellow
    } else {
        Color::Cyan
    }
}
