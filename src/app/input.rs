use crossterm::event::{KeyCode, KeyEvent};
use morphogen_data::SimulationParams;

use super::App;

impl App {
    /// Applies one key press to playback or to the simulation inputs.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') => self.playback.toggle(),
            KeyCode::Right | KeyCode::Char('l') => self.playback.step_forward(),
            KeyCode::Left | KeyCode::Char('h') => self.playback.step_backward(),
            KeyCode::Home => self.playback.reset(),
            KeyCode::End => {
                self.playback.pause();
                self.playback.set_step(self.playback.max_step());
            }
            KeyCode::Char('p') => self.next_preset(),
            KeyCode::Char('s') => {
                let params = SimulationParams {
                    seed: self.params().seed.wrapping_add(1),
                    ..self.params().clone()
                };
                self.set_params(params);
            }
            KeyCode::Char('a') => self.add_template_sentence(),
            KeyCode::Char('d') => self.remove_last_sentence(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }
}
