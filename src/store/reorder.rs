// The list reconciler: the single ordering rule applied after any mutation
// that may move a chat.

use crate::models::ChatSession;

/// Re-seats `updated` in the list. A pinned chat is replaced in place and
/// never moves; an unpinned chat surfaces to the top of the unpinned
/// segment, directly below the pinned block. Both segments keep their
/// original relative order.
pub fn reorder(current: Vec<ChatSession>, updated: ChatSession) -> Vec<ChatSession> {
    if updated.pinned {
        return current
            .into_iter()
            .map(|chat| if chat.id == updated.id { updated.clone() } else { chat })
            .collect();
    }

    let mut pinned = Vec::new();
    let mut unpinned = Vec::new();
    for chat in current {
        if chat.id == updated.id {
            continue;
        }
        if chat.pinned {
            pinned.push(chat);
        } else {
            unpinned.push(chat);
        }
    }

    let mut next = pinned;
    next.push(updated);
    next.extend(unpinned);
    next
}
