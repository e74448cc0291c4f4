use iced::widget::{
    checkbox, column, container, pick_list, row, scrollable, text, text_input, Column,
};
use iced::{Background, Color, Element, Font, Length, Task, Theme};

// Declare the application modules
mod fetch;
mod state;

use state::data::{format_birth_date, User};
use state::view::{derive_view, Filters, ViewEntry};

/// Main application state
struct UserDirectory {
    /// The full dataset from the one fetch; empty until it completes
    users: Vec<User>,
    /// Current filter inputs bound to the controls
    filters: Filters,
    /// The derived view currently rendered as the list
    entries: Vec<ViewEntry>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The one background fetch finished
    UsersFetched(Result<Vec<User>, String>),
    /// User typed in the name search box
    NameFilterChanged(String),
    /// User picked an option in the city selector
    CitySelected(CityChoice),
    /// User toggled the "Highlight Oldest" checkbox
    HighlightToggled(bool),
}

/// One option of the city selector
#[derive(Debug, Clone, PartialEq)]
enum CityChoice {
    AllCities,
    City(String),
}

impl std::fmt::Display for CityChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CityChoice::AllCities => f.write_str("All Cities"),
            CityChoice::City(city) => f.write_str(city),
        }
    }
}

impl UserDirectory {
    /// Create the application and kick off the one directory fetch
    fn new() -> (Self, Task<Message>) {
        let app = UserDirectory {
            users: Vec::new(),
            filters: Filters::default(),
            entries: Vec::new(),
        };

        // Fire-and-forget: the fetch runs exactly once per lifetime
        let fetch = Task::perform(fetch::fetch_users(), |result| {
            Message::UsersFetched(result.map_err(|error| error.to_string()))
        });

        (app, fetch)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UsersFetched(Ok(users)) => {
                println!("📥 Fetched {} users", users.len());
                self.users = users;
            }
            Message::UsersFetched(Err(error)) => {
                // The list stays empty; there is no retry
                eprintln!("⚠️  Error fetching users: {error}");
            }
            Message::NameFilterChanged(name) => {
                self.filters.name = name;
            }
            Message::CitySelected(choice) => {
                self.filters.city = match choice {
                    CityChoice::AllCities => String::new(),
                    CityChoice::City(city) => city,
                };
            }
            Message::HighlightToggled(enabled) => {
                self.filters.highlight_oldest = enabled;
            }
        }

        // Every message above changes an input of the derived view,
        // so recompute it before the next render
        self.entries = derive_view(&self.users, &self.filters);

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let controls = row![
            text_input("Search by name", &self.filters.name)
                .on_input(Message::NameFilterChanged)
                .width(Length::Fill),
            pick_list(
                self.city_choices(),
                Some(self.selected_city()),
                Message::CitySelected,
            ),
            checkbox("Highlight Oldest", self.filters.highlight_oldest)
                .on_toggle(Message::HighlightToggled),
        ]
        .spacing(15);

        let mut list = Column::new().spacing(5).push(header_row());
        for entry in &self.entries {
            list = list.push(entry_row(entry));
        }

        container(column![controls, scrollable(list).height(Length::Fill)].spacing(15))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Options for the city selector: "All Cities" plus every distinct
    /// city in the full dataset, regardless of the current filters
    fn city_choices(&self) -> Vec<CityChoice> {
        std::iter::once(CityChoice::AllCities)
            .chain(
                state::view::cities(&self.users)
                    .into_iter()
                    .map(CityChoice::City),
            )
            .collect()
    }

    /// The selector option matching the current city filter
    fn selected_city(&self) -> CityChoice {
        if self.filters.city.is_empty() {
            CityChoice::AllCities
        } else {
            CityChoice::City(self.filters.city.clone())
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// The bold header above the user list
fn header_row() -> Element<'static, Message> {
    let bold = Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    };

    container(row![
        text("Name").font(bold).width(Length::Fill),
        text("City").font(bold).width(Length::Fill),
        text("Birthday").font(bold).width(Length::Fill),
    ])
    .padding(8)
    .into()
}

/// One row of the user list; highlighted rows get a distinct background
fn entry_row(entry: &ViewEntry) -> Element<'_, Message> {
    let user = &entry.user;

    let cells = row![
        text(user.full_name()).width(Length::Fill),
        text(user.city()).width(Length::Fill),
        text(format_birth_date(&user.birth_date)).width(Length::Fill),
    ];

    let mut cells = container(cells).padding(8).width(Length::Fill);
    if entry.highlight {
        cells = cells.style(highlight_style);
    }

    cells.into()
}

/// Background treatment for the oldest user of a city (display-only)
fn highlight_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb8(0xFF, 0xD7, 0x4D))),
        text_color: Some(Color::BLACK),
        ..container::Style::default()
    }
}

fn main() -> iced::Result {
    iced::application(
        "User Directory",
        UserDirectory::update,
        UserDirectory::view,
    )
    .theme(UserDirectory::theme)
    .centered()
    .run_with(UserDirectory::new)
}
