pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::color::{Color, FormatKind};
use crate::config::Config;
use crate::i18n::Key;
use crate::input;
use crate::palettes;
use crate::share::{self, FileShareSheet, ShareOutcome, ShareSheet};
use crate::storage::{KeyValueStore, Storage};
use crate::store::Store;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, ShareEvent};
use state::{AppState, CopiedFlag, CopyTarget, PickerFocus, Screen, Toast};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct App<K: KeyValueStore = Storage> {
    cfg: Config,
    config_path: PathBuf,
    store: Store<K>,
    state: AppState,
    clipboard: Box<dyn Clipboard>,
    share_sheet: Arc<dyn ShareSheet>,
}

impl App {
    pub fn new(cfg: Config, config_path: PathBuf) -> anyhow::Result<Self> {
        let storage = Storage::open(&cfg.database_path())?;
        let sheet = Arc::new(FileShareSheet::new(cfg.shares_dir()));
        debug!(dir = %sheet.dir().display(), "share target");
        Ok(Self::with_parts(
            cfg,
            config_path,
            Store::open(storage),
            Box::new(SystemClipboard::new()),
            sheet,
        ))
    }
}

impl<K: KeyValueStore> App<K> {
    pub fn with_parts(
        cfg: Config,
        config_path: PathBuf,
        store: Store<K>,
        clipboard: Box<dyn Clipboard>,
        share_sheet: Arc<dyn ShareSheet>,
    ) -> Self {
        let mut state = AppState::new(store.current_color());

        // Restore last screen if available
        if let Some(screen) = cfg.ui.last_screen.as_deref().and_then(Screen::from_name) {
            state.screen = screen;
        }

        Self {
            cfg,
            config_path,
            store,
            state,
            clipboard,
            share_sheet,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        // The ticker only expires toasts and copied flags; redraws stay
        // event-driven.
        spawn_ticker(tx.clone(), Duration::from_millis(self.cfg.ui.tick_ms.max(50)));

        let document = self.store.document();
        info!(
            lang = document.lang(),
            dir = document.dir().as_str(),
            dark = document.is_dark(),
            screen = self.state.screen.name(),
            "ui ready"
        );

        // First draw
        tui::draw(terminal, &self.store, &self.state)?;

        while let Some(ev) = rx.recv().await {
            let redraw = match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                    true
                }
                Event::Tick => self.expire_flags(),
                Event::Share(se) => {
                    self.handle_share(se);
                    true
                }
            };

            if self.state.should_quit {
                break;
            }

            if redraw {
                tui::draw(terminal, &self.store, &self.state)?;
            }
        }

        // Save state before quitting
        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.ui.last_screen = Some(self.state.screen.name().to_string());
        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            warn!("failed to save config: {e:#}");
        }
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        let before = self.store.current_color().to_string();

        match action {
            Action::ToggleLanguage => {
                let next = self.store.language().other();
                let result = self.store.set_language(next);
                self.report(result, None);
            }
            Action::ToggleTheme => {
                let result = self.store.toggle_theme();
                self.report(result, None);
            }
            Action::InputChar(c) => {
                self.state.picker.hex_input.push(c);
                self.commit_input();
            }
            Action::Backspace => {
                self.state.picker.hex_input.pop();
                self.commit_input();
            }
            Action::Nudge(delta) => self.nudge(delta),
            Action::RandomColor => {
                let [r, g, b] = rand::random::<[u8; 3]>();
                let hex = self.state.picker.with_slider_alpha(Color::rgb(r, g, b));
                self.store.set_current_color(hex);
            }
            Action::SaveFavorite => {
                let color = self.store.current_color().to_string();
                let result = self.store.add_favorite(&color);
                self.report(result, Some(Key::Saved));
            }
            Action::Share => self.spawn_share(tx),
            Action::Activate => self.activate(),
            Action::Copy => self.copy_selected(),
            Action::RemoveFavorite => {
                if self.state.screen == Screen::Favorites
                    && let Some(color) = self.selected_favorite()
                {
                    let result = self.store.remove_favorite(&color);
                    self.state.favorites.clamp(self.store.favorites().len());
                    self.report(result, Some(Key::Removed));
                }
            }
            Action::Tick => {
                self.expire_flags();
            }
            _ => self.reduce(action),
        }

        if self.store.current_color() != before {
            debug!(from = %before, to = self.store.current_color(), "current color changed");
            self.state.picker.sync_with(self.store.current_color());
            self.state.status = self.store.current_color().to_string();
        }
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NextScreen => self.state.screen = self.state.screen.next(),
            Action::PrevScreen => self.state.screen = self.state.screen.prev(),
            Action::SetScreen(screen) => self.state.screen = screen,
            Action::FocusInput => {
                self.state.screen = Screen::Picker;
                self.state.picker.focus = PickerFocus::HexInput;
            }
            Action::ClearInput => self.state.picker.hex_input.clear(),
            Action::TogglePanel => self.state.picker.toggle_panel(),
            Action::ListUp => match self.state.screen {
                Screen::Picker => self.state.picker.focus_prev(),
                Screen::Favorites => self.state.favorites.select_prev(),
                Screen::Themes => self.state.palettes.select_prev(),
                Screen::Help => {}
            },
            Action::ListDown => match self.state.screen {
                Screen::Picker => self.state.picker.focus_next(),
                Screen::Favorites => {
                    let len = self.store.favorites().len();
                    self.state.favorites.select_next(len);
                }
                Screen::Themes => self.state.palettes.select_next(),
                Screen::Help => {}
            },
            Action::Resize => {
                // Resize is handled by terminal
            }
            // Side-effecting actions are routed through handle_action.
            Action::ToggleLanguage
            | Action::ToggleTheme
            | Action::InputChar(_)
            | Action::Backspace
            | Action::Nudge(_)
            | Action::RandomColor
            | Action::SaveFavorite
            | Action::Share
            | Action::Activate
            | Action::Copy
            | Action::RemoveFavorite
            | Action::Tick => {}
        }
    }

    /// Store the typed color when the buffer parses; otherwise leave the
    /// current color alone until it does.
    fn commit_input(&mut self) {
        if let Some(hex) = self.state.picker.commit_input() {
            self.store.set_current_color(hex);
        }
    }

    fn nudge(&mut self, delta: i16) {
        match self.state.screen {
            Screen::Picker => {
                let picker = &mut self.state.picker;
                let next = match picker.focus {
                    PickerFocus::Opacity => {
                        let alpha = (i16::from(picker.alpha) + delta).clamp(0, 255) as u8;
                        picker.set_alpha(self.store.current_color(), alpha)
                    }
                    focus if focus.is_panel() => {
                        picker.nudge_panel(self.store.current_color(), delta)
                    }
                    _ => None,
                };
                if let Some(hex) = next {
                    self.store.set_current_color(hex);
                }
            }
            Screen::Themes => self.state.palettes.move_swatch(delta.signum()),
            Screen::Favorites | Screen::Help => {}
        }
    }

    fn activate(&mut self) {
        match self.state.screen {
            Screen::Picker => match self.state.picker.focus {
                PickerFocus::Format(kind) => self.copy_format(kind),
                PickerFocus::HexInput => self.state.picker.focus_next(),
                _ => {}
            },
            Screen::Favorites => {
                if let Some(color) = self.selected_favorite() {
                    self.store.set_current_color(color);
                }
            }
            Screen::Themes => {
                let p = &self.state.palettes;
                if let Some(color) = palettes::swatch(p.palette, p.swatch) {
                    self.store.set_current_color(color);
                }
            }
            Screen::Help => {}
        }
    }

    fn copy_selected(&mut self) {
        match self.state.screen {
            Screen::Picker => match self.state.picker.focus {
                PickerFocus::Format(kind) => self.copy_format(kind),
                _ => {
                    let color = self.store.current_color().to_string();
                    self.copy(&color, CopyTarget::HexInput);
                }
            },
            Screen::Favorites => {
                if let Some(color) = self.selected_favorite() {
                    self.copy(&color, CopyTarget::Favorite(color.clone()));
                }
            }
            Screen::Themes => {
                let p = &self.state.palettes;
                if let Some(color) = palettes::swatch(p.palette, p.swatch) {
                    self.copy(color, CopyTarget::HexInput);
                }
            }
            Screen::Help => {}
        }
    }

    fn copy_format(&mut self, kind: FormatKind) {
        let Some(formats) = self.store.formats() else {
            return;
        };
        self.copy(formats.get(kind), CopyTarget::Format(kind));
    }

    fn copy(&mut self, text: &str, target: CopyTarget) {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                self.state.copied = Some(CopiedFlag::new(target));
                self.state.status = format!("{}: {text}", self.store.translate(Key::Copied));
            }
            Err(e) => {
                warn!("copy failed: {e:#}");
                self.state.toast = Some(Toast::error(format!("{e:#}")));
            }
        }
    }

    fn selected_favorite(&self) -> Option<String> {
        self.store
            .favorites()
            .get(self.state.favorites.selected)
            .cloned()
    }

    /// Surface a store write failure. The in-memory change has already been
    /// applied either way.
    fn report(&mut self, result: anyhow::Result<()>, success: Option<Key>) {
        match result {
            Ok(()) => {
                if let Some(key) = success {
                    self.state.toast = Some(Toast::success(self.store.translate(key)));
                }
            }
            Err(e) => {
                warn!("persist failed: {e:#}");
                self.state.toast = Some(Toast::error(format!(
                    "{}: {e:#}",
                    self.store.translate(Key::NotSaved)
                )));
            }
        }
    }

    /// Drop expired toasts and copied flags. Returns whether anything changed.
    fn expire_flags(&mut self) -> bool {
        let mut changed = false;
        let ttl = Duration::from_secs(self.cfg.ui.copied_flag_secs);
        if self.state.copied.as_ref().is_some_and(|c| c.is_expired(ttl)) {
            self.state.copied = None;
            changed = true;
        }
        if self.state.toast.as_ref().is_some_and(Toast::is_expired) {
            self.state.toast = None;
            changed = true;
        }
        changed
    }

    fn spawn_share(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.share_in_flight {
            return;
        }
        self.state.share_in_flight = true;

        let color = self.store.current_color().to_string();
        let title = self.store.translate(Key::ShareColor).to_string();
        let cfg = self.cfg.share.clone();
        let sheet = Arc::clone(&self.share_sheet);
        let tx = tx.clone();
        info!(color, "sharing");

        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking({
                let color = color.clone();
                move || {
                    let payload = share::build_payload(&color, &title, &cfg);
                    sheet.share(&payload)
                }
            })
            .await;

            let result = match result {
                Ok(Ok(outcome)) => Ok(outcome),
                Ok(Err(e)) => Err(format!("{e:#}")),
                Err(e) => Err(format!("share task failed: {e}")),
            };
            let _ = tx
                .send(Event::Share(ShareEvent::Finished { color, result }))
                .await;
        });
    }

    fn handle_share(&mut self, ev: ShareEvent) {
        match ev {
            ShareEvent::Finished { color, result } => {
                self.state.share_in_flight = false;
                match result {
                    Ok(ShareOutcome::Saved(path)) => {
                        self.state.toast = Some(Toast::success(format!(
                            "{}: {}",
                            self.store.translate(Key::ShareSaved),
                            path.display()
                        )));
                    }
                    Err(e) => {
                        // Fall back to putting the color on the clipboard.
                        warn!("share failed: {e}");
                        self.copy(&color, CopyTarget::Share);
                        if self.state.is_copied(&CopyTarget::Share) {
                            self.state.toast =
                                Some(Toast::success(self.store.translate(Key::Copied)));
                        }
                    }
                }
            }
        }
    }
}

fn spawn_ticker(tx: mpsc::Sender<Event>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::i18n::{Language, TextDirection};
    use crate::share::SharePayload;
    use crate::store::Theme;
    use state::ToastKind;

    /// Reads as empty, refuses every write.
    struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("database is locked")
        }
    }

    struct FailingSheet;

    impl ShareSheet for FailingSheet {
        fn share(&self, _payload: &SharePayload) -> anyhow::Result<ShareOutcome> {
            anyhow::bail!("no share target")
        }
    }

    fn app_with(sheet: Arc<dyn ShareSheet>) -> (App, MemoryClipboard) {
        let clipboard = MemoryClipboard::default();
        let store = Store::open(Storage::open_in_memory().unwrap());
        let app = App::with_parts(
            Config::default(),
            std::env::temp_dir().join("swatchbox-test-config.toml"),
            store,
            Box::new(clipboard.clone()),
            sheet,
        );
        (app, clipboard)
    }

    fn app() -> (App, MemoryClipboard) {
        app_with(Arc::new(FailingSheet))
    }

    fn tx() -> mpsc::Sender<Event> {
        mpsc::channel(8).0
    }

    fn type_text(app: &mut App, text: &str) {
        let tx = tx();
        app.handle_action(Action::ClearInput, &tx);
        for c in text.chars() {
            app.handle_action(Action::InputChar(c), &tx);
        }
    }

    #[test]
    fn test_restores_last_screen() {
        let mut cfg = Config::default();
        cfg.ui.last_screen = Some("themes".into());
        let app = App::with_parts(
            cfg,
            PathBuf::from("unused.toml"),
            Store::open(Storage::open_in_memory().unwrap()),
            Box::new(MemoryClipboard::default()),
            Arc::new(FailingSheet),
        );
        assert_eq!(app.state.screen, Screen::Themes);
    }

    #[test]
    fn test_typing_valid_hex_sets_color_and_alpha() {
        let (mut app, _) = app();
        type_text(&mut app, "#ff000080");
        assert_eq!(app.store.current_color(), "#ff000080");
        assert_eq!(app.state.picker.alpha, 128);
        assert_eq!(app.state.picker.hex_input, "#ff000080");
    }

    #[test]
    fn test_typing_invalid_hex_is_ignored() {
        let (mut app, _) = app();
        type_text(&mut app, "#zz");
        assert_eq!(app.store.current_color(), "#3B82F6");
        // The buffer keeps what the user typed.
        assert_eq!(app.state.picker.hex_input, "#zz");
    }

    #[test]
    fn test_short_hex_survives_sync() {
        let (mut app, _) = app();
        type_text(&mut app, "#f00");
        assert_eq!(app.store.current_color(), "#ff0000");
        assert_eq!(app.state.picker.hex_input, "#f00");
    }

    #[test]
    fn test_opacity_nudge() {
        let (mut app, _) = app();
        app.state.picker.focus = PickerFocus::Opacity;
        app.handle_action(Action::Nudge(-127), &tx());
        assert_eq!(app.state.picker.alpha, 128);
        assert_eq!(app.store.current_color(), "#3b82f680");
        app.handle_action(Action::Nudge(1000), &tx());
        assert_eq!(app.store.current_color(), "#3b82f6");
    }

    #[test]
    fn test_panel_nudge_keeps_alpha() {
        let (mut app, _) = app();
        type_text(&mut app, "#ff000080");
        app.handle_action(Action::TogglePanel, &tx());
        app.state.picker.focus = PickerFocus::Hue;
        app.handle_action(Action::Nudge(120), &tx());
        assert_eq!(app.store.current_color(), "#00ff0080");
        assert_eq!(app.state.picker.hex_input, "#00ff0080");
    }

    #[test]
    fn test_palette_load_syncs_picker() {
        let (mut app, _) = app();
        app.handle_action(Action::SetScreen(Screen::Themes), &tx());
        app.handle_action(Action::ListDown, &tx());
        app.handle_action(Action::Nudge(1), &tx());
        app.handle_action(Action::Activate, &tx());
        let expected = palettes::swatch(1, 1).unwrap();
        assert_eq!(app.store.current_color(), expected);
        assert_eq!(app.state.picker.hex_input, expected);
        assert_eq!(app.state.picker.alpha, 255);
    }

    #[test]
    fn test_save_and_remove_favorite() {
        let (mut app, _) = app();
        app.handle_action(Action::SaveFavorite, &tx());
        app.handle_action(Action::SaveFavorite, &tx());
        assert_eq!(app.store.favorites(), ["#3B82F6"]);

        // Only removes from the favorites screen.
        app.handle_action(Action::RemoveFavorite, &tx());
        assert_eq!(app.store.favorites().len(), 1);

        app.handle_action(Action::SetScreen(Screen::Favorites), &tx());
        app.handle_action(Action::RemoveFavorite, &tx());
        assert!(app.store.favorites().is_empty());
        assert_eq!(app.state.favorites.selected, 0);
    }

    #[test]
    fn test_favorite_load_and_copy() {
        let (mut app, clipboard) = app();
        type_text(&mut app, "#00ff00");
        app.handle_action(Action::SaveFavorite, &tx());
        type_text(&mut app, "#0000ff");

        app.handle_action(Action::SetScreen(Screen::Favorites), &tx());
        app.handle_action(Action::Copy, &tx());
        assert_eq!(clipboard.writes(), ["#00ff00"]);
        assert!(app.state.is_copied(&CopyTarget::Favorite("#00ff00".into())));

        app.handle_action(Action::Activate, &tx());
        assert_eq!(app.store.current_color(), "#00ff00");
    }

    #[test]
    fn test_copy_format_sets_flag() {
        let (mut app, clipboard) = app();
        app.state.picker.focus = PickerFocus::Format(FormatKind::Hsl);
        app.handle_action(Action::Activate, &tx());
        assert_eq!(clipboard.writes(), ["hsl(217, 91%, 60%)"]);
        assert!(app.state.is_copied(&CopyTarget::Format(FormatKind::Hsl)));
        assert!(!app.state.is_copied(&CopyTarget::Format(FormatKind::Hex)));
    }

    #[test]
    fn test_copied_flag_expires() {
        let (mut app, _) = app();
        app.cfg.ui.copied_flag_secs = 0;
        app.handle_action(Action::Copy, &tx());
        assert!(app.state.copied.is_some());
        assert!(app.expire_flags());
        assert!(app.state.copied.is_none());
        assert!(!app.expire_flags());
    }

    #[test]
    fn test_clipboard_failure_is_a_toast() {
        let (mut app, _) = app();
        let mut clipboard = MemoryClipboard::default();
        clipboard.fail = true;
        app.clipboard = Box::new(clipboard);
        app.handle_action(Action::Copy, &tx());
        assert!(app.state.copied.is_none());
        assert!(app.state.toast.is_some());
    }

    #[test]
    fn test_language_and_theme_toggle() {
        let (mut app, _) = app();
        app.handle_action(Action::ToggleLanguage, &tx());
        assert_eq!(app.store.language(), Language::Ar);
        assert_eq!(app.store.document().dir(), TextDirection::Rtl);

        app.handle_action(Action::ToggleTheme, &tx());
        assert_eq!(app.store.theme(), Theme::Dark);
        assert!(app.store.document().is_dark());
    }

    #[test]
    fn test_persist_failure_keeps_change_and_shows_error() {
        let mut app = App::with_parts(
            Config::default(),
            PathBuf::from("unused.toml"),
            Store::open(ReadOnlyStorage),
            Box::new(MemoryClipboard::default()),
            Arc::new(FailingSheet),
        );

        app.handle_action(Action::ToggleTheme, &tx());
        assert_eq!(app.store.theme(), Theme::Dark);
        assert!(app.store.document().is_dark());
        let toast = app.state.toast.take().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.starts_with("Not saved: "));
        assert!(toast.message.contains("database is locked"));

        app.handle_action(Action::SaveFavorite, &tx());
        assert_eq!(app.store.favorites(), ["#3B82F6"]);
        assert_eq!(app.state.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));

        // The error message follows the active language.
        app.handle_action(Action::ToggleLanguage, &tx());
        assert_eq!(app.store.language(), Language::Ar);
        let toast = app.state.toast.as_ref().unwrap();
        assert!(toast.message.starts_with("لم يتم الحفظ: "));

        assert!(!app.state.should_quit);
    }

    #[test]
    fn test_random_color_keeps_slider_alpha() {
        let (mut app, _) = app();
        app.state.picker.focus = PickerFocus::Opacity;
        app.handle_action(Action::Nudge(-127), &tx());
        app.handle_action(Action::RandomColor, &tx());
        let color = Color::parse(app.store.current_color()).unwrap();
        assert_eq!(color.alpha_byte(), 128);
    }

    #[test]
    fn test_share_failure_falls_back_to_clipboard() {
        let (mut app, clipboard) = app();
        app.state.share_in_flight = true;
        app.handle_share(ShareEvent::Finished {
            color: "#3B82F6".into(),
            result: Err("no share target".into()),
        });
        assert!(!app.state.share_in_flight);
        assert_eq!(clipboard.writes(), ["#3B82F6"]);
        assert!(app.state.is_copied(&CopyTarget::Share));
    }

    #[tokio::test]
    async fn test_share_round_trip_through_channel() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.share.image_size = 64;
        let mut app = App::with_parts(
            cfg,
            dir.path().join("config.toml"),
            Store::open(Storage::open_in_memory().unwrap()),
            Box::new(MemoryClipboard::default()),
            Arc::new(FileShareSheet::new(dir.path().join("shares"))),
        );
        let (tx, mut rx) = mpsc::channel(8);
        app.handle_action(Action::Share, &tx);
        assert!(app.state.share_in_flight);
        // A second request while one is running is ignored.
        app.handle_action(Action::Share, &tx);

        let Some(Event::Share(ev)) = rx.recv().await else {
            panic!("expected a share event");
        };
        app.handle_share(ev);
        assert!(!app.state.share_in_flight);
        assert_eq!(std::fs::read_dir(dir.path().join("shares")).unwrap().count(), 2);
    }

    #[test]
    fn test_quit_saves_last_screen() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = app();
        app.config_path = dir.path().join("config.toml");
        app.handle_action(Action::SetScreen(Screen::Favorites), &tx());
        app.handle_action(Action::Quit, &tx());
        assert!(app.state.should_quit);
        app.save_state_on_quit();
        let cfg = crate::config::load(Some(&app.config_path)).unwrap();
        assert_eq!(cfg.ui.last_screen.as_deref(), Some("favorites"));
    }
}
