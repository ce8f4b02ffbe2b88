use morphogen_data::{CycleInfo, Sentence};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

const MAX_LABEL_WIDTH: usize = 14;
const TRUE_CELL: &str = "█";
const FALSE_CELL: &str = "·";

/// Kymograph: one row per sentence, one column per tick.
pub struct TimelineWidget<'a> {
    pub sentences: &'a [Sentence],
    pub history: &'a [Vec<bool>],
    pub current_step: usize,
    pub cycle: CycleInfo,
}

impl TimelineWidget<'_> {
    fn label_width(&self) -> u16 {
        let longest = self
            .sentences
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);
        (longest.min(MAX_LABEL_WIDTH) + 1) as u16
    }

    /// First tick shown so the cursor stays in view.
    pub fn scroll_offset(current_step: usize, columns: usize) -> usize {
        if columns == 0 {
            return current_step;
        }
        (current_step + 1).saturating_sub(columns)
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Timeline ");
        let inner = block.inner(area);
        block.render(area, buf);

        let label_w = self.label_width().min(inner.width);
        let columns = inner.width.saturating_sub(label_w) as usize;
        let offset = Self::scroll_offset(self.current_step, columns);

        for (row, (i, sentence)) in self
            .sentences
            .iter()
            .enumerate()
            .take(inner.height as usize)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let label: String = sentence.label.chars().take(MAX_LABEL_WIDTH).collect();
            buf.set_string(inner.x, y, label, Style::default().fg(Color::Gray));

            for col in 0..columns {
                let t = offset + col;
                let Some(state) = self.history.get(t) else {
                    break;
                };
                let (symbol, mut style) = if state[i] {
                    (TRUE_CELL, Style::default().fg(Color::LightGreen))
                } else {
                    (FALSE_CELL, Style::default().fg(Color::DarkGray))
                };
                if t > self.current_step {
                    style = style.add_modifier(Modifier::DIM);
                }
                if self.cycle.found && t == self.cycle.start_index {
                    style = style.bg(Color::Rgb(60, 60, 0));
                }
                if t == self.current_step {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                buf.set_string(inner.x + label_w + col as u16, y, symbol, style);
            }
        }
    }
}
