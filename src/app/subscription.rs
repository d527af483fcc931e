// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are translated into application
//! messages here; timers only run while something animates or a toast waits
//! for its auto-dismiss deadline.

use super::Message;
use crate::gallery;
use crate::ui::notifications;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval between spinner animation frames.
pub const SPINNER_TICK: Duration = Duration::from_millis(50);

/// Interval between toast auto-dismiss checks.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Routes window resizes and the Escape key.
///
/// Escape closes the composer; it is a no-op while the composer is closed.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) if status == event::Status::Ignored => {
            Some(Message::Gallery(gallery::Event::OverlayClosed))
        }
        _ => None,
    })
}

/// Drives the canvas spinners while the grid or the artwork is loading.
pub fn create_spinner_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(SPINNER_TICK).map(|_| Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}

/// Checks toast deadlines while any toast is showing.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|_| Message::Notification(notifications::NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}
