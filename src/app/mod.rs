pub mod input;
pub mod playback;
pub mod state;

pub use playback::Playback;
pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use morphogen_tui::{draw, PlaygroundView, Tui};
use ratatui::backend::Backend;
use ratatui::Frame;
use std::time::{Duration, Instant};

impl App {
    /// Borrowed snapshot for the renderer.
    pub fn view(&self) -> PlaygroundView<'_> {
        PlaygroundView {
            preset: self.preset,
            sentences: &self.network,
            result: &self.result,
            current_step: self.playback.current_step(),
            playing: self.playback.is_playing(),
            fingerprint: &self.fingerprint,
            error: self.error.as_deref(),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        draw(frame, &self.view());
    }

    /// Interactive loop: redraw, handle keys, advance playback on a fixed interval.
    pub fn run<B: Backend>(&mut self, tui: &mut Tui<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.playback.interval_ms);
        let mut last_tick = Instant::now();

        while self.running {
            tui.render(&self.view())?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.playback.advance();
                last_tick = Instant::now();
            }
        }

        tracing::info!(
            runs = self.metrics.run_count(),
            ticks = self.metrics.tick_count(),
            uptime_ms = self.metrics.elapsed().as_millis() as u64,
            "Playground closed"
        );
        Ok(())
    }
}
