use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Input(Event),
    Tick,
}
