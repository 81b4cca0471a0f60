use iced::widget::{button, column, container, keyed_column, row, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

mod api;
mod error;
mod state;

use api::{ApiClient, GenerationRequest};
use state::input::InputState;
use state::outcome::GenerationOutcome;
use state::story::StoryMetadata;

/// Main application state
struct StoryStudio {
    /// User-editable request fields
    input: InputState,
    /// Outcome of the last generation request
    outcome: GenerationOutcome,
    /// True strictly between a submit and its settlement
    in_flight: bool,
    /// Status message for the download side channel
    status: String,
    /// HTTP client for the story service
    client: ApiClient,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the genre field
    GenreChanged(String),
    /// User edited the scene count field
    SceneCountChanged(String),
    /// User clicked "Generate Story"
    Submit,
    /// The generation request settled
    GenerationFinished(Result<StoryMetadata, String>),
    /// User clicked "Download Video"
    DownloadVideo,
    /// The background download settled
    DownloadFinished(Result<PathBuf, String>),
}

impl StoryStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (
            StoryStudio {
                input: InputState::default(),
                outcome: GenerationOutcome::default(),
                in_flight: false,
                status: String::new(),
                client: ApiClient::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GenreChanged(text) => {
                self.input.set_genre(text);
                Task::none()
            }
            Message::SceneCountChanged(raw) => {
                self.input.set_scene_count(&raw);
                Task::none()
            }
            Message::Submit => {
                // The button is disabled while a request is outstanding,
                // but a re-entrant submit must still be a no-op.
                if self.in_flight {
                    return Task::none();
                }

                // Clear the old result before flagging in-flight, so the
                // view never shows a stale result next to the loading
                // indicator.
                self.outcome = GenerationOutcome::Idle;
                self.in_flight = true;

                let client = self.client.clone();
                let request = GenerationRequest {
                    genre: self.input.genre.clone(),
                    num_scenes: self.input.scene_count,
                };

                Task::perform(
                    async move {
                        client
                            .generate_story(request)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::GenerationFinished,
                )
            }
            Message::GenerationFinished(result) => {
                // Settlement drops the in-flight flag on every path.
                self.in_flight = false;
                self.outcome = match result {
                    Ok(metadata) => GenerationOutcome::Success(metadata),
                    Err(message) => GenerationOutcome::Failure(message),
                };
                Task::none()
            }
            Message::DownloadVideo => {
                // Reads the result state only; no network call without a
                // success outcome carrying a video path.
                let Some(video_file) = self.outcome.video_file().map(str::to_owned) else {
                    MessageDialog::new()
                        .set_level(MessageLevel::Info)
                        .set_title("Download")
                        .set_description("No video file is available for this story.")
                        .show();
                    return Task::none();
                };

                let file_name = Path::new(&video_file)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| String::from("story.mp4"));

                let Some(destination) = FileDialog::new()
                    .set_title("Save Story Video")
                    .set_file_name(&file_name)
                    .save_file()
                else {
                    return Task::none();
                };

                self.status = format!("Downloading {video_file}...");

                let client = self.client.clone();
                Task::perform(
                    async move {
                        client
                            .download_video(video_file, destination)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::DownloadFinished,
                )
            }
            Message::DownloadFinished(result) => {
                self.status = match result {
                    Ok(path) => format!("Video saved to {}", path.display()),
                    Err(message) => format!("Download failed: {message}"),
                };
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let editable = !self.in_flight;

        let controls = row![
            text_input("Genre, e.g. fantasy", &self.input.genre)
                .on_input_maybe(editable.then_some(Message::GenreChanged))
                .padding(10),
            text_input("Scenes", &self.input.scene_count.to_string())
                .on_input_maybe(editable.then_some(Message::SceneCountChanged))
                .padding(10)
                .width(Length::Fixed(80.0)),
            button(if self.in_flight {
                "Generating..."
            } else {
                "Generate Story"
            })
            .on_press_maybe(editable.then_some(Message::Submit))
            .padding(10),
        ]
        .spacing(10);

        let result_block: Element<Message> = match &self.outcome {
            GenerationOutcome::Idle => {
                if self.in_flight {
                    text("Generating your story... this can take a while.")
                        .size(16)
                        .into()
                } else {
                    text("Pick a genre and press Generate Story.").size(16).into()
                }
            }
            GenerationOutcome::Failure(message) => text(format!("Error: {message}")).size(16).into(),
            GenerationOutcome::Success(metadata) => {
                // Scene number is the stable identity; order stays exactly
                // as the service returned it.
                let scene_cards = keyed_column(metadata.scenes.iter().map(|scene| {
                    (
                        scene.scene,
                        container(
                            column![
                                text(format!("Scene {}", scene.scene)).size(18),
                                text(&scene.summary).size(14),
                                text(&scene.description).size(14),
                            ]
                            .spacing(5),
                        )
                        .padding(10)
                        .width(Length::Fill)
                        .style(container::rounded_box)
                        .into(),
                    )
                }))
                .spacing(10);

                column![
                    text(&metadata.title).size(28),
                    text(format!("Genre: {}", metadata.genre)).size(14),
                    text(&metadata.story_idea).size(16),
                    button("Download Video")
                        .on_press(Message::DownloadVideo)
                        .padding(10),
                    scene_cards,
                ]
                .spacing(15)
                .into()
            }
        };

        let mut page = column![text("Story Studio").size(32), controls, result_block].spacing(20);

        if !self.status.is_empty() {
            page = page.push(text(&self.status).size(14));
        }

        scrollable(container(page).padding(40).width(Length::Fill)).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    iced::application("Story Studio", StoryStudio::update, StoryStudio::view)
        .theme(StoryStudio::theme)
        .centered()
        .run_with(StoryStudio::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::story::SceneEntry;

    fn app() -> StoryStudio {
        StoryStudio::new().0
    }

    fn sample_metadata() -> StoryMetadata {
        StoryMetadata {
            title: String::from("T"),
            genre: String::from("fantasy"),
            story_idea: String::from("I"),
            video_file: String::from("out/v.mp4"),
            scenes: vec![
                SceneEntry {
                    scene: 1,
                    summary: String::from("s1"),
                    description: String::from("d1"),
                },
                SceneEntry {
                    scene: 2,
                    summary: String::from("s2"),
                    description: String::from("d2"),
                },
            ],
        }
    }

    #[test]
    fn test_submit_clears_result_and_sets_in_flight() {
        let mut app = app();
        app.outcome = GenerationOutcome::Failure(String::from("old error"));

        let _ = app.update(Message::Submit);

        assert!(app.in_flight);
        assert_eq!(app.outcome, GenerationOutcome::Idle);
    }

    #[test]
    fn test_submit_while_in_flight_is_noop() {
        let mut app = app();
        app.in_flight = true;
        app.outcome = GenerationOutcome::Failure(String::from("previous"));

        let _ = app.update(Message::Submit);

        // Nothing moved: still in flight, result untouched.
        assert!(app.in_flight);
        assert_eq!(
            app.outcome,
            GenerationOutcome::Failure(String::from("previous"))
        );
    }

    #[test]
    fn test_settlement_success() {
        let mut app = app();
        let _ = app.update(Message::Submit);
        assert!(app.in_flight);

        let metadata = sample_metadata();
        let _ = app.update(Message::GenerationFinished(Ok(metadata.clone())));

        assert!(!app.in_flight);
        assert_eq!(app.outcome, GenerationOutcome::Success(metadata));
    }

    #[test]
    fn test_settlement_failure_replaces_prior_success() {
        let mut app = app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::GenerationFinished(Ok(sample_metadata())));

        let _ = app.update(Message::Submit);
        assert_eq!(app.outcome, GenerationOutcome::Idle);

        let _ = app.update(Message::GenerationFinished(Err(String::from(
            "story service returned HTTP 500 Internal Server Error",
        ))));

        assert!(!app.in_flight);
        match &app.outcome {
            GenerationOutcome::Failure(message) => assert!(message.contains("500")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_in_flight_settles_exactly_once_per_submit() {
        let mut app = app();

        for result in [
            Ok(sample_metadata()),
            Err(String::from("connection refused")),
            Err(String::from("could not parse story response")),
        ] {
            let _ = app.update(Message::Submit);
            assert!(app.in_flight);

            let _ = app.update(Message::GenerationFinished(result));
            assert!(!app.in_flight);
        }
    }

    #[test]
    fn test_edits_update_input_state() {
        let mut app = app();

        let _ = app.update(Message::GenreChanged(String::from("horror")));
        let _ = app.update(Message::SceneCountChanged(String::from("abc")));

        assert_eq!(app.input.genre, "horror");
        assert_eq!(app.input.scene_count, 1);
    }

    #[test]
    fn test_download_settlement_touches_status_only() {
        let mut app = app();
        app.outcome = GenerationOutcome::Success(sample_metadata());

        let _ = app.update(Message::DownloadFinished(Ok(PathBuf::from("/tmp/v.mp4"))));

        assert!(app.status.contains("Video saved"));
        assert!(!app.in_flight);
        assert_eq!(app.outcome, GenerationOutcome::Success(sample_metadata()));

        let _ = app.update(Message::DownloadFinished(Err(String::from("HTTP 404"))));
        assert!(app.status.contains("Download failed"));
        assert_eq!(app.outcome, GenerationOutcome::Success(sample_metadata()));
    }
}
