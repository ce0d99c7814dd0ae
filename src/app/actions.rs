use super::state::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextScreen,
    PrevScreen,
    SetScreen(Screen),

    ToggleLanguage,
    ToggleTheme,

    // Picker
    FocusInput,
    InputChar(char),
    Backspace,
    ClearInput,
    TogglePanel,
    /// Left/right: nudges the focused picker row, or moves the palette swatch.
    Nudge(i16),
    RandomColor,
    SaveFavorite,
    Share,

    ListUp,
    ListDown,
    Activate,
    Copy,
    RemoveFavorite,

    Tick,
    Resize,
}
