//! Story bodies shown under the header.

use platform_i18n::MessageKey;

use crate::describe::{Scope, StoryBody};

pub(crate) fn empty(scope: &Scope<'_>) -> StoryBody {
    scope.empty_story()
}

/// Snapshot name, linked while the model exists.
pub(crate) fn linked_name(scope: &Scope<'_>) -> StoryBody {
    StoryBody {
        body: Some(scope.target_name()),
        body_link: scope.model_link(),
        ..scope.empty_story()
    }
}

pub(crate) fn name_only(scope: &Scope<'_>) -> StoryBody {
    StoryBody {
        body: Some(scope.target_name()),
        ..scope.empty_story()
    }
}

pub(crate) fn description(scope: &Scope<'_>) -> StoryBody {
    StoryBody {
        body: scope.entry.details.description.clone(),
        ..scope.empty_story()
    }
}

pub(crate) fn revision_message(scope: &Scope<'_>) -> StoryBody {
    StoryBody {
        body: scope.entry.details.revision_message.clone(),
        ..scope.empty_story()
    }
}

/// Only the first card of a multi-card edit is shown.
pub(crate) fn first_dashcard(scope: &Scope<'_>) -> StoryBody {
    let Some(card) = scope.entry.details.dashcards.first() else {
        return scope.empty_story();
    };
    let body = card
        .name
        .clone()
        .unwrap_or_else(|| scope.text(MessageKey::UnknownName));
    let body_link = match card.card_id {
        Some(card_id) if card.exists && scope.entry.model_exists => {
            Some(scope.urls.question(card_id))
        }
        _ => None,
    };
    StoryBody {
        body: Some(body),
        body_link,
        ..scope.empty_story()
    }
}
