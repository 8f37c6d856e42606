#[cfg(test)]
#[path = "friends_test.rs"]
mod friends_test;

use crate::net::types::Friend;

/// Friends sorted by display name, ascending.
///
/// The backend guarantees no order, so the client owns presentation order.
/// Comparison is Unicode-lowercase first with the raw name as tiebreak, which
/// keeps "alice" next to "Alice" without a full collation table.
pub fn sorted_by_name(friends: &[Friend]) -> Vec<Friend> {
    let mut sorted = friends.to_vec();
    sorted.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

/// Look up a friend by id in an already-fetched list.
pub fn find_by_id<'a>(friends: &'a [Friend], id: &str) -> Option<&'a Friend> {
    friends.iter().find(|f| f.id == id)
}

/// Avatar initials for a display name: first letter of the first and last
/// words, uppercased. Falls back to the first character, or "?" when blank.
pub fn initials(name: &str) -> String {
    let cleaned = name.trim();
    if cleaned.is_empty() {
        return "?".to_owned();
    }
    let mut words = cleaned.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());
    let mut out = String::new();
    if let Some(c) = first {
        out.extend(c.to_uppercase());
    }
    if let Some(c) = last {
        out.extend(c.to_uppercase());
    }
    if out.is_empty() { "?".to_owned() } else { out }
}
