// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving tokens between subtag categories.

use tag_primitives::SubtagSequence;

/// Moves every token of `from` for which `predicate` holds to the end of `to`.
///
/// Relative order is preserved on both sides. Returns `(from, to)` after the move.
pub fn move_matching(
    from: SubtagSequence,
    to: SubtagSequence,
    predicate: impl FnMut(&str) -> bool,
) -> (SubtagSequence, SubtagSequence) {
    let (kept, moved) = from.partition(predicate);
    if !moved.is_empty() {
        log::debug!("moving `{moved}` after `{to}`");
    }
    (kept, to.concat(moved))
}

/// Moves tokens matching `matches` from `from` to `to`, except the first token that is valid
/// where it already sits.
///
/// `from` is walked in order. The first token for which `keep_first` holds stays in `from`,
/// whether or not it also satisfies `matches`; every other token for which `matches` holds is
/// moved. "First" is by position, so a token that is valid for both categories (a two-letter
/// code that is both a language and a region, say) is only kept if nothing valid precedes it.
pub fn move_matching_except_first_valid(
    from: SubtagSequence,
    to: SubtagSequence,
    mut matches: impl FnMut(&str) -> bool,
    mut keep_first: impl FnMut(&str) -> bool,
) -> (SubtagSequence, SubtagSequence) {
    let mut kept_first = false;
    move_matching(from, to, |token| {
        if !kept_first && keep_first(token) {
            kept_first = true;
            return false;
        }
        matches(token)
    })
}
