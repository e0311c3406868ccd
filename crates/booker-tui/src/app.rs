/// Main application struct and event loop
use crate::actions::Action;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::{Effects, selection_listeners};
use crate::keyboard;
use crate::stores::{AppLogsStore, SchedulerStore, UIStore};
use crate::ui::{render_layout, scheduler_regions};
use booker_core::{ConsultationScheduler, LocaleLabeler, SystemClock, get_booker_setting};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// The main application structure following flux architecture
pub struct App {
    /// Dispatcher for sending actions
    dispatcher: Dispatcher,

    /// Store for the consultation scheduler
    scheduler_store: SchedulerStore,

    /// Store for UI state
    ui_store: UIStore,

    /// Store for application logs
    app_logs_store: AppLogsStore,

    /// Effects handler for side effects
    effects: Effects,

    /// Terminal area of the last drawn frame, used for mouse hit testing
    last_area: Rect,
}

impl App {
    /// Build the application for a terminal of size `area`. The scheduler
    /// only mounts when the layout has room for every one of its anchors.
    pub fn new(area: Rect) -> Result<(Self, ActionReceiver), Box<dyn std::error::Error>> {
        let (dispatcher, rx) = Dispatcher::new();
        let action_receiver = ActionReceiver::new(rx);

        let log_buffer =
            crate::logger::init_memory_logger(get_booker_setting!(BOOKER_LOG_BUFFER_LINES, usize))?;

        let labeler = Arc::new(LocaleLabeler::new(get_booker_setting!(BOOKER_LOCALE)));
        let scheduler = ConsultationScheduler::mount(&scheduler_regions(area), &SystemClock, labeler);

        let scheduler_store = SchedulerStore::new(scheduler);
        let ui_store = UIStore::new();
        let app_logs_store = AppLogsStore::new(log_buffer);
        let mut effects = Effects::new(dispatcher.clone(), selection_listeners());
        effects.set_scheduler_store(scheduler_store.clone());

        Ok((
            Self {
                dispatcher,
                scheduler_store,
                ui_store,
                app_logs_store,
                effects,
                last_area: area,
            },
            action_receiver,
        ))
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!("Booker TUI started");
        if !self.scheduler_store.is_mounted() {
            log::warn!("Terminal too small for the scheduler; widget left inert");
        }

        let tick = Duration::from_millis(get_booker_setting!(BOOKER_TUI_TICK_MS, usize) as u64);

        loop {
            self.app_logs_store.refresh();
            terminal.draw(|frame| {
                self.last_area = frame.area();
                render_layout(
                    frame,
                    &self.scheduler_store,
                    &self.ui_store,
                    &self.app_logs_store,
                );
            })?;

            if self.ui_store.should_exit() {
                break;
            }

            tokio::select! {
                // Poll for keyboard and mouse events
                _ = tokio::time::sleep(tick) => {
                    if event::poll(Duration::from_millis(0))? {
                        self.handle_event(event::read()?);
                    }
                }

                // Process actions from the dispatcher
                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                    while let Some(queued) = action_receiver.try_recv() {
                        self.handle_action(&queued);
                    }
                }
            }
        }

        log::info!("Booker TUI exiting");
        Ok(())
    }

    fn handle_event(&self, event: Event) {
        let action = match event {
            // Only process key press events (not release)
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                keyboard::handle_key_event(
                    key_event,
                    &self.ui_store,
                    &self.scheduler_store,
                    &self.app_logs_store,
                )
            }
            Event::Mouse(mouse_event) => keyboard::handle_mouse_event(
                mouse_event,
                &self.ui_store,
                &scheduler_regions(self.last_area),
                &self.scheduler_store,
            ),
            _ => None,
        };
        if let Some(action) = action {
            self.dispatcher.dispatch(action);
        }
    }

    /// Handle an action by routing it to stores and effects
    fn handle_action(&mut self, action: &Action) {
        log::debug!("Handling action: {:?}", action);

        // Route to stores (reducers)
        self.scheduler_store.reduce(action);
        self.ui_store.reduce(action);

        // Trigger side effects
        self.effects.handle(action);
    }
}
