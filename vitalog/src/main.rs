use std::sync::Arc;

use iced::keyboard::{self, Event as KeyboardEvent, Key};
use iced::widget::{button, center, column, container, row, scrollable, stack, text};
use iced::{Center, Element, Fill, Subscription, Task, Theme};

use vitalog_core::{
    ClientConfig, LogClient, LogEntry, LogStore, MeasurementKind, NewLogEntry, Range,
};

mod dial;

use dial::dial_input;

pub fn main() -> iced::Result {
    env_logger::init();

    iced::application(VitaLogApp::default, VitaLogApp::update, VitaLogApp::view)
        .title("VitaLog")
        .subscription(VitaLogApp::subscription)
        .theme(VitaLogApp::theme)
        .run()
}

/// Radius of the dial input, in logical pixels.
const DIAL_RADIUS: f32 = 120.0;

struct VitaLogApp {
    client: Option<Arc<LogClient>>,
    screen: Screen,

    // Transient confirmation/problem line on the home screen
    status_message: Option<String>,
}

enum Screen {
    Home,
    Logbook(LogbookScreen),
    Entry(EntryScreen),
}

struct LogbookScreen {
    entries: Vec<LogEntry>,
    loading: bool,
    error: Option<String>,
}

impl LogbookScreen {
    fn loading() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            error: None,
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            entries: Vec::new(),
            loading: false,
            error: Some(message.to_string()),
        }
    }
}

struct EntryScreen {
    kind: MeasurementKind,
    range: Range,
    value: f32,
    saving: bool,
    error: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    // Navigation
    OpenLogbook,
    OpenEntry(MeasurementKind),
    GoHome,

    // Logbook fetch
    LogsFetched(Result<Vec<LogEntry>, String>),

    // Dial entry
    ValueChanged(f32),
    SaveRequested,
    SaveFinished(Result<(), String>),

    // Keyboard event
    KeyboardEvent(KeyboardEvent),
}

impl Default for VitaLogApp {
    fn default() -> Self {
        let mut app = Self {
            client: None,
            screen: Screen::Home,
            status_message: None,
        };

        // Build the HTTP client from the environment
        match LogClient::new(ClientConfig::from_env()) {
            Ok(client) => app.client = Some(Arc::new(client)),
            Err(e) => app.status_message = Some(format!("Failed to initialize: {}", e)),
        }

        app
    }
}

impl VitaLogApp {
    fn update(&mut self, message: Message) -> Task<Message> {
        // Clear the previous status on new user actions
        if !matches!(
            message,
            Message::LogsFetched(_) | Message::SaveFinished(_) | Message::KeyboardEvent(_)
        ) {
            self.status_message = None;
        }

        match message {
            Message::OpenLogbook => match self.client.clone() {
                Some(client) => {
                    self.screen = Screen::Logbook(LogbookScreen::loading());
                    return Task::perform(
                        async move { client.fetch_logs().await.map_err(|e| e.to_string()) },
                        Message::LogsFetched,
                    );
                }
                None => {
                    self.screen = Screen::Logbook(LogbookScreen::failed("Client not initialized"));
                }
            },

            Message::OpenEntry(kind) => {
                if let Some((range, initial)) = kind.dial_entry() {
                    self.screen = Screen::Entry(EntryScreen {
                        kind,
                        range,
                        value: initial,
                        saving: false,
                        error: None,
                    });
                }
            }

            Message::GoHome => {
                self.screen = Screen::Home;
            }

            Message::LogsFetched(result) => {
                if let Screen::Logbook(screen) = &mut self.screen {
                    screen.loading = false;
                    match result {
                        Ok(entries) => screen.entries = entries,
                        Err(e) => screen.error = Some(e),
                    }
                }
            }

            Message::ValueChanged(value) => {
                if let Screen::Entry(screen) = &mut self.screen {
                    screen.value = value;
                }
            }

            Message::SaveRequested => {
                if let Screen::Entry(screen) = &mut self.screen {
                    // One in-flight request per screen
                    if screen.saving {
                        return Task::none();
                    }
                    match self.client.clone() {
                        Some(client) => {
                            screen.saving = true;
                            screen.error = None;
                            let entry = NewLogEntry::single(screen.kind, screen.value);
                            return Task::perform(
                                async move {
                                    client.create_log(entry).await.map_err(|e| e.to_string())
                                },
                                Message::SaveFinished,
                            );
                        }
                        None => {
                            screen.error = Some("Client not initialized".to_string());
                        }
                    }
                }
            }

            Message::SaveFinished(result) => {
                if let Screen::Entry(screen) = &mut self.screen {
                    screen.saving = false;
                    match result {
                        Ok(()) => {
                            let saved = format!("{} saved", screen.kind.label());
                            self.screen = Screen::Home;
                            self.status_message = Some(saved);
                        }
                        // Stay on the screen so the reading is not lost
                        Err(e) => screen.error = Some(e),
                    }
                }
            }

            Message::KeyboardEvent(event) => {
                if let KeyboardEvent::KeyPressed { key, .. } = event {
                    let on_home = matches!(self.screen, Screen::Home);
                    if matches!(key.as_ref(), Key::Named(keyboard::key::Named::Escape)) && !on_home
                    {
                        return self.update(Message::GoHome);
                    }
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Home => self.view_home(),
            Screen::Logbook(screen) => view_logbook(screen),
            Screen::Entry(screen) => view_entry(screen),
        }
    }

    fn view_home(&self) -> Element<'_, Message> {
        let title = text("VitaLog").size(48);

        // Confirmation/problem message
        let status = if let Some(ref msg) = self.status_message {
            text(msg).size(14)
        } else {
            text("").size(14)
        };

        let menu = column(MeasurementKind::ALL.iter().map(|kind| menu_button(*kind)))
            .spacing(15)
            .width(Fill);

        let logbook = button(text("Logbook").width(Fill).align_x(Center))
            .padding(20)
            .style(button::primary)
            .on_press(Message::OpenLogbook);

        let content = column![title, status, menu, logbook]
            .spacing(20)
            .max_width(400)
            .align_x(Center);

        center(content).padding(20).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(Message::KeyboardEvent)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn view_logbook(screen: &LogbookScreen) -> Element<'_, Message> {
    let body: Element<'_, Message> = if screen.loading {
        center(text("Loading entries...").size(16)).into()
    } else if let Some(ref error) = screen.error {
        center(text(format!("Error: {}", error)).size(16).style(text::danger)).into()
    } else if screen.entries.is_empty() {
        center(text("No entries in the logbook yet.").size(16)).into()
    } else {
        scrollable(
            column(screen.entries.iter().map(entry_card))
                .spacing(10)
                .padding(10),
        )
        .height(Fill)
        .into()
    };

    column![nav_header("Logbook"), body].spacing(10).padding(20).into()
}

fn view_entry(screen: &EntryScreen) -> Element<'_, Message> {
    let readout = column![
        text(format!("{:.1}", screen.value)).size(56),
        text(screen.kind.unit()).size(18).style(text::secondary),
    ]
    .align_x(Center);

    let dial = stack![
        dial_input(DIAL_RADIUS, screen.range, screen.value, Message::ValueChanged),
        center(readout),
    ]
    .width(DIAL_RADIUS * 2.0)
    .height(DIAL_RADIUS * 2.0);

    // Save failures keep the screen (and the reading) in place
    let status = if let Some(ref error) = screen.error {
        text(format!("Save failed: {}", error)).size(14).style(text::danger)
    } else {
        text("").size(14)
    };

    let save = if screen.saving {
        button(text("Saving...").size(20)).padding([15.0, 60.0]).style(button::success)
    } else {
        button(text("Save").size(20))
            .padding([15.0, 60.0])
            .style(button::success)
            .on_press(Message::SaveRequested)
    };

    let content = column![dial, status, save].spacing(25).align_x(Center);

    column![nav_header(screen.kind.label()), center(content)]
        .spacing(10)
        .padding(20)
        .into()
}

/// Sub-screen header: a back button next to the screen title.
fn nav_header(title: &str) -> Element<'_, Message> {
    row![
        button(text("Back").size(14))
            .style(button::text)
            .on_press(Message::GoHome),
        text(title).size(24),
    ]
    .spacing(15)
    .align_y(Center)
    .into()
}

fn menu_button(kind: MeasurementKind) -> Element<'static, Message> {
    let btn = button(text(kind.label()).width(Fill).align_x(Center)).padding(20);
    // Kinds without a dial entry screen are listed but not wired up
    match kind.dial_entry() {
        Some(_) => btn.on_press(Message::OpenEntry(kind)).into(),
        None => btn.into(),
    }
}

fn entry_card(entry: &LogEntry) -> Element<'_, Message> {
    let kind = entry.kind.replace('_', " ").to_uppercase();

    let mut reading = match (entry.value_1, entry.unit_1.as_deref()) {
        (Some(value), Some(unit)) => format!("{} {}", value, unit),
        (Some(value), None) => value.to_string(),
        _ => "-".to_string(),
    };
    if let (Some(value), Some(unit)) = (entry.value_2, entry.unit_2.as_deref()) {
        reading = format!("{} / {} {}", reading, value, unit);
    }

    let mut card = column![
        text(kind).size(16),
        text(reading).size(18).style(text::primary),
    ]
    .spacing(5);

    if let Some(ref notes) = entry.notes {
        card = card.push(text(notes.as_str()).size(12));
    }

    card = card.push(text(entry.timestamp.as_str()).size(12).style(text::secondary));

    container(card)
        .padding(15)
        .width(Fill)
        .style(container::rounded_box)
        .into()
}
