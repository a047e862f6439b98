//! Search over the working set.

use shared::domain::Member;

/// Case-insensitive substring match against name, email or role.
///
/// `needle` must already be lower-cased.
fn matches_lowered(member: &Member, needle: &str) -> bool {
    member.name.to_lowercase().contains(needle)
        || member.email.to_lowercase().contains(needle)
        || member.role.to_lowercase().contains(needle)
}

/// Positions of the matching members, in working-set order.
pub fn filter_indices(members: &[Member], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..members.len()).collect();
    }
    let needle = term.to_lowercase();
    members
        .iter()
        .enumerate()
        .filter(|(_, member)| matches_lowered(member, &needle))
        .map(|(index, _)| index)
        .collect()
}

pub fn filter<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    filter_indices(members, term)
        .into_iter()
        .map(|index| &members[index])
        .collect()
}
