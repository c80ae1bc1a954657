use iced::widget::{button, container, image, scrollable, text, Column};
use iced::{event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

// Declare the application modules
mod api;
mod state;
mod ui;

use api::Analysis;
use state::{Phase, RequestToken, Session};

/// Extensions offered by the file picker. Drag-and-drop bypasses this
/// filter entirely; the server is the only validator of dropped files.
const PICKER_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Main application state
struct DeepfakeDetector {
    /// The current upload/result cycle
    session: Session,
    /// Decoded texture for the currently selected image
    preview: Option<image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Select Image" button
    PickImage,
    /// User dropped a file onto the window
    ImageDropped(PathBuf),
    /// Background preview decode completed
    PreviewLoaded(Result<image::Handle, String>),
    /// Background classification request completed
    ClassifyFinished {
        token: RequestToken,
        result: Result<Analysis, String>,
    },
}

impl DeepfakeDetector {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🕵️ Deepfake Detector ready");

        (
            DeepfakeDetector {
                session: Session::new(),
                preview: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select an Image")
                    .add_filter("Images", &PICKER_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => self.start_upload(path),
                    None => Task::none(),
                }
            }
            Message::ImageDropped(path) => self.start_upload(path),
            Message::PreviewLoaded(Ok(handle)) => {
                self.preview = Some(handle);
                Task::none()
            }
            Message::PreviewLoaded(Err(message)) => {
                // Not fatal: the upload continues without a preview
                eprintln!("⚠️  No preview: {}", message);
                Task::none()
            }
            Message::ClassifyFinished { token, result } => {
                if self.session.finish_upload(token, result) {
                    if let Some(label) = self.session.result_label() {
                        println!("📋 {}", label);
                    }
                } else {
                    println!("⚠️  Discarded response from a superseded upload");
                }
                Task::none()
            }
        }
    }

    /// Begin a new upload cycle: decode the preview and dispatch the
    /// classification request as parallel background tasks.
    fn start_upload(&mut self, path: PathBuf) -> Task<Message> {
        if self.session.is_loading() {
            println!("⏳ Superseding the in-flight request");
        }

        self.preview = None;
        let token = self.session.begin_upload(path.clone());

        let preview = Task::perform(
            ui::preview::load_preview(path.clone()),
            Message::PreviewLoaded,
        );

        let classify = Task::perform(
            async move { api::classify_image(path).await.map_err(|e| e.to_string()) },
            move |result| Message::ClassifyFinished { token, result },
        );

        Task::batch(vec![preview, classify])
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = Column::new()
            .spacing(20)
            .padding(40)
            .align_x(Alignment::Center)
            .push(text("Deepfake Detector").size(48))
            .push(
                container(text("Drag & drop an image onto the window, or click to upload"))
                    .style(container::rounded_box)
                    .padding(30),
            )
            .push(
                button("Select Image")
                    .on_press(Message::PickImage)
                    .padding(10),
            );

        if let Some(handle) = &self.preview {
            content = content
                .push(text("Uploaded Image").size(24))
                .push(image(handle.clone()).width(Length::Fixed(360.0)));
        }

        if let Some(name) = self.session.selected_image().and_then(|p| p.file_name()) {
            content = content.push(text(name.to_string_lossy().to_string()).size(14));
        }

        content = match self.session.phase() {
            Phase::Idle => content,
            Phase::Loading => content.push(text("Analyzing image...").size(20)),
            Phase::Succeeded { verdict, .. } => {
                let label = text(verdict.to_string()).size(20);
                let label = if verdict.is_deepfake() {
                    label.style(text::danger)
                } else if verdict.is_real() {
                    label.style(text::success)
                } else {
                    label
                };
                content.push(label)
            }
            Phase::Failed { message } => {
                content.push(text(message.clone()).size(20).style(text::danger))
            }
        };

        if let Some(payload) = self.session.raw_payload() {
            let pretty =
                serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());

            content = content.push(text("API Response Details").size(24)).push(
                container(scrollable(text(pretty).size(14)))
                    .style(container::rounded_box)
                    .padding(15)
                    .width(Length::Fixed(560.0))
                    .height(Length::Fixed(220.0)),
            );
        }

        container(scrollable(content.width(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Listen for files dropped anywhere on the window
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::ImageDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Deepfake Detector",
        DeepfakeDetector::update,
        DeepfakeDetector::view,
    )
    .subscription(DeepfakeDetector::subscription)
    .theme(DeepfakeDetector::theme)
    .centered()
    .run_with(DeepfakeDetector::new)
}
