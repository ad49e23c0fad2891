//! Hover tracking for the actor under the cursor.
//!
//! Each frame the cursor trace produces at most one hover actor. [`HoverTracker`]
//! compares it with the previous frame's and reports which highlight changes
//! follow, keeping the "at most one highlighted actor" invariant:
//!
//! | last  | this          | transition                      |
//! |-------|---------------|---------------------------------|
//! | none  | none          | nothing                         |
//! | none  | some          | highlight `this`                |
//! | some  | none          | unhighlight `last`              |
//! | some  | some, differs | unhighlight `last`, highlight `this` |
//! | some  | same          | nothing                         |

use bevy::prelude::*;

pub use crate::events::HighlightEvent;

/// Resource mirroring the hover actor for systems outside the controller.
#[derive(Resource, Default, Debug)]
pub struct HoveredEntity(pub Option<Entity>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    None,
    Highlight(Entity),
    Unhighlight(Entity),
    Swap { from: Entity, to: Entity },
}

impl HoverTransition {
    /// Actor that loses its highlight, applied before [`Self::highlighted`].
    pub fn unhighlighted(self) -> Option<Entity> {
        match self {
            HoverTransition::Unhighlight(e) | HoverTransition::Swap { from: e, .. } => Some(e),
            _ => None,
        }
    }

    pub fn highlighted(self) -> Option<Entity> {
        match self {
            HoverTransition::Highlight(e) | HoverTransition::Swap { to: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// Previous and current hover actor. Entity ids do not keep actors alive, so
/// either may refer to something despawned since.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoverTracker {
    last: Option<Entity>,
    this: Option<Entity>,
}

impl HoverTracker {
    pub fn last(&self) -> Option<Entity> {
        self.last
    }

    pub fn current(&self) -> Option<Entity> {
        self.this
    }

    pub fn advance(&mut self, hovered: Option<Entity>) -> HoverTransition {
        self.last = self.this;
        self.this = hovered;

        match (self.last, self.this) {
            (None, None) => HoverTransition::None,
            (None, Some(this)) => HoverTransition::Highlight(this),
            (Some(last), None) => HoverTransition::Unhighlight(last),
            (Some(last), Some(this)) if last != this => HoverTransition::Swap {
                from: last,
                to: this,
            },
            (Some(_), Some(_)) => HoverTransition::None,
        }
    }
}
