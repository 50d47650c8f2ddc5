//! Transient user-visible notices (toasts).
//!
//! ERROR HANDLING
//! ==============
//! Pages catch every failure at their own boundary and land it here instead
//! of letting it escape. Notices expire on a timer in the browser.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Warning => "notice--warning",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub detail: Option<String>,
}

/// Ordered list of visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, title: &str, detail: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, title: title.to_owned(), detail });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Push a notice and schedule its removal.
pub fn notify(notices: RwSignal<NoticeState>, level: NoticeLevel, title: &str, detail: Option<String>) {
    let Some(id) = notices.try_update(|s| s.push(level, title, detail)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::config::NOTICE_TTL_MS)).await;
        let _ = notices.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn notify_success(notices: RwSignal<NoticeState>, title: &str) {
    notify(notices, NoticeLevel::Success, title, None);
}

pub fn notify_error(notices: RwSignal<NoticeState>, title: &str, error: &ApiError) {
    leptos::logging::warn!("{title}: {error}");
    notify(notices, NoticeLevel::Error, title, Some(error.user_message()));
}
