//! Reversible per-caller votes shared by confessions, reviews and forum posts.
//!
//! A votable record carries a counter and a voter list with set semantics:
//! no duplicates, order irrelevant. [`toggle`] is the only mutation path, so
//! the counter always equals the voter-list length. Adapters must call it
//! under the store's per-record serialisation; the function itself is pure.

use crate::domain::identity::CallerId;

/// Accessors a record exposes to participate in vote toggling.
///
/// The wire names differ per resource (`likes`/`likedBy`,
/// `upvotes`/`upvotedBy`, `helpful`/`helpfulBy`); the semantics do not.
pub trait Votable {
    /// Callers who currently hold a vote on the record.
    fn voters(&self) -> &[CallerId];
    /// Mutable voter list, for [`toggle`] only.
    fn voters_mut(&mut self) -> &mut Vec<CallerId>;
    /// Stored vote counter.
    fn vote_count(&self) -> u32;
    /// Replace the stored vote counter, for [`toggle`] only.
    fn set_vote_count(&mut self, count: u32);
}

/// Direction a [`toggle`] call flipped the caller's vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteFlip {
    /// The caller was absent from the voter list and has been added.
    Added,
    /// The caller held a vote and it has been withdrawn.
    Removed,
}

/// Flip the caller's vote on `record`.
///
/// Present voters are removed (counter saturates at zero); absent voters are
/// appended. Toggling twice restores the record exactly.
///
/// # Examples
/// ```
/// use backend::domain::{Confession, CallerId, votes};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let author = CallerId::new(Uuid::new_v4());
/// let mut confession =
///     Confession::new("content".into(), true, author, Utc::now()).expect("valid confession");
/// let fan = CallerId::new(Uuid::new_v4());
/// assert_eq!(votes::toggle(&mut confession, fan.clone()), votes::VoteFlip::Added);
/// assert_eq!(votes::toggle(&mut confession, fan), votes::VoteFlip::Removed);
/// assert_eq!(confession.likes, 0);
/// ```
pub fn toggle(record: &mut impl Votable, caller: CallerId) -> VoteFlip {
    let existing = record.voters().iter().position(|voter| voter == &caller);
    match existing {
        Some(index) => {
            record.voters_mut().remove(index);
            let count = record.vote_count().saturating_sub(1);
            record.set_vote_count(count);
            VoteFlip::Removed
        }
        None => {
            record.voters_mut().push(caller);
            let count = record.vote_count() + 1;
            record.set_vote_count(count);
            VoteFlip::Added
        }
    }
}

/// Check the counter/set invariant: counter equals the number of distinct
/// voters and the list holds no duplicates.
pub fn consistent(record: &impl Votable) -> bool {
    let voters = record.voters();
    let mut seen = Vec::with_capacity(voters.len());
    for voter in voters {
        if seen.contains(&voter) {
            return false;
        }
        seen.push(voter);
    }
    record.vote_count() as usize == voters.len()
}
