//! Click/hover selection state shared by all four charts.
//!
//! The machine is a plain value plus a pure transition function: hosts feed
//! `PointerEvent`s keyed by record identity, charts project the resulting
//! state onto per-key style classes. Grouping differs per chart (bar charts
//! pair two elements per key, the others map 1:1) but the state itself only
//! ever tracks keys.

use serde::{Deserialize, Serialize};

/// Pointer interaction on a drawn element, identified by its record key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter(String),
    Leave(String),
    Click(String),
}

impl PointerEvent {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Enter(key) | Self::Leave(key) | Self::Click(key) => key,
        }
    }
}

/// Visual class a key's group projects to under the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Resting,
    Highlighted,
}

/// At most one pinned key, plus a transient hover overlay.
///
/// Pinning survives pointer-leave; hover does not. Clicking the pinned key
/// again returns the machine to idle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pinned: Option<String>,
    hovered: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn pinned(&self) -> Option<&str> {
        self.pinned.as_deref()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pinned.is_none()
    }

    /// Pure transition function: returns the state after one pointer event.
    #[must_use]
    pub fn apply(&self, event: &PointerEvent) -> Self {
        let mut next = self.clone();
        match event {
            PointerEvent::Enter(key) => {
                next.hovered = Some(key.clone());
            }
            PointerEvent::Leave(key) => {
                if next.hovered.as_deref() == Some(key.as_str()) {
                    next.hovered = None;
                }
            }
            PointerEvent::Click(key) => {
                if next.pinned.as_deref() == Some(key.as_str()) {
                    next.pinned = None;
                } else {
                    next.pinned = Some(key.clone());
                }
            }
        }
        next
    }

    /// Projects the state onto one key's group.
    ///
    /// Highlighted iff the key is pinned or currently hovered; hovering some
    /// other group never demotes a pinned group to resting.
    #[must_use]
    pub fn style_class(&self, key: &str) -> StyleClass {
        if self.pinned.as_deref() == Some(key) || self.hovered.as_deref() == Some(key) {
            StyleClass::Highlighted
        } else {
            StyleClass::Resting
        }
    }
}
