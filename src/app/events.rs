use crate::share::ShareOutcome;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Tick,
    Share(ShareEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum ShareEvent {
    Finished {
        color: String,
        result: Result<ShareOutcome, String>,
    },
}
