use {
    crate::{
        Error,
        counter::Ticker,
        state::AppState,
        ui::{self, theme::Theme},
    },
    crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers},
    futures::StreamExt,
    ratatui::DefaultTerminal,
    tokio::sync::mpsc,
    tracing::debug,
    vitae_content::SkillsSection,
};

/// Events that drive the application.
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal key press.
    Key(KeyEvent),
    /// Terminal resize or focus-regained — forces a full redraw.
    Redraw,
    /// Animation tick (16 ms) from the [`Ticker`].
    Tick,
}

/// Top-level application.
pub struct App {
    state: AppState,
    theme: Theme,
    ticker: Option<Ticker>,
    should_quit: bool,
}

impl App {
    pub fn new(section: SkillsSection) -> Self {
        Self {
            state: AppState::new(section),
            theme: Theme::default(),
            ticker: None,
            should_quit: false,
        }
    }

    /// Main event loop: reads terminal events, dispatches, and re-renders.
    ///
    /// The animation ticker is acquired after a draw arms something and
    /// released as soon as every transition has settled; dropping the app
    /// on any exit path aborts it.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<(), Error> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

        // Spawn terminal event reader
        let term_tx = event_tx.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            while let Some(Ok(event)) = reader.next().await {
                let app_event = match event {
                    Event::Key(key) => AppEvent::Key(key),
                    Event::Resize(..) | Event::FocusGained => AppEvent::Redraw,
                    _ => continue,
                };
                if term_tx.send(app_event).is_err() {
                    break;
                }
            }
        });

        while !self.should_quit {
            if self.state.dirty {
                terminal.draw(|frame| ui::draw(frame, &mut self.state, &self.theme))?;
                self.state.dirty = false;
                // Drawing may have armed entrances via visibility.
                self.sync_ticker(&event_tx);
            }

            if let Some(event) = event_rx.recv().await {
                self.handle_event(event);
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Redraw => {
                self.state.dirty = true;
            },
            AppEvent::Tick => {
                self.state.advance_animations();
                if !self.state.animations.is_active() {
                    // Everything settled: release the timer.
                    debug!("animations settled, releasing ticker");
                    self.ticker = None;
                }
            },
        }
    }

    /// Hold a ticker exactly while at least one animation needs ticks.
    fn sync_ticker(&mut self, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        if self.state.animations.is_active() {
            if self.ticker.is_none() {
                self.ticker = Some(Ticker::spawn(event_tx.clone()));
            }
        } else {
            self.ticker = None;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), _)
            | (KeyCode::Esc, _) => {
                self.should_quit = true;
            },

            // Scrolling
            (KeyCode::Char('j') | KeyCode::Down, _) => {
                self.state.scroll_down(1);
            },
            (KeyCode::Char('k') | KeyCode::Up, _) => {
                self.state.scroll_up(1);
            },
            (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                self.state.scroll_down(10);
            },
            (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
                self.state.scroll_up(10);
            },
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                self.state.scroll_to_top();
            },
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.state.scroll_to_bottom();
            },

            // Replay all entrance animations
            (KeyCode::Char('r'), _) => {
                self.state.replay();
            },

            _ => {},
        }
    }
}
