// SPDX-License-Identifier: MPL-2.0
//! Toast application: one borderless window, one timer, then exit.
//!
//! `App` is booted with an already prepared toast, so nothing in here can
//! fail validation. The boot task arms a one-shot timer; when it fires the
//! update loop exits, which destroys the window and returns control to the
//! caller of [`run`].

mod message;
pub mod paths;
mod window;

pub use message::Message;
pub use window::{placement, window_settings};

use crate::error::Result;
use crate::presenter::PreparedToast;
use crate::ui::toast;
use iced::{Element, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    toast: PreparedToast,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("title", &self.toast.title())
            .field("position", &self.toast.position())
            .finish()
    }
}

/// Runs the Iced event loop for `toast`, blocking until it closes.
pub fn run(toast: PreparedToast) -> Result<()> {
    let settings = window_settings(toast.size(), toast.position());
    tracing::debug!(title = toast.title().as_str(), "opening toast window");

    iced::application(move || App::new(toast.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .run()?;

    tracing::debug!("toast window closed");
    Ok(())
}

impl App {
    fn new(toast: PreparedToast) -> (Self, Task<Message>) {
        let close = close_after(toast.duration());
        (Self { toast }, close)
    }

    fn title(&self) -> String {
        self.toast.title().as_str().to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Expired => {
                tracing::debug!(
                    after_secs = self.toast.duration().as_secs(),
                    "toast expired"
                );
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        toast::view(&self.toast)
    }
}

/// One-shot timer on the application executor.
fn close_after(duration: Duration) -> Task<Message> {
    Task::perform(expired_after(duration), |message| message)
}

/// Resolves to [`Message::Expired`] once `duration` has elapsed.
///
/// The sleep is created on first poll, so it binds to the executor's tokio
/// runtime rather than the caller's.
async fn expired_after(duration: Duration) -> Message {
    tokio::time::sleep(duration).await;
    Message::Expired
}
