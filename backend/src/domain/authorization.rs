//! The ownership gate: one pure decision point for every protected operation.
//!
//! No I/O, no global state. Services fetch whatever record metadata the
//! decision needs (the owner id) and pass it in; the gate only compares.

use crate::domain::error::Error;
use crate::domain::identity::{Caller, CallerId, Role};

/// Resource families the gate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    StudySpot,
    EatingSpot,
    Confession,
    Review,
    ForumPost,
    Notice,
    Event,
}

impl ResourceKind {
    /// Singular label used in denial messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::StudySpot => "study spot",
            Self::EatingSpot => "eating spot",
            Self::Confession => "confession",
            Self::Review => "review",
            Self::ForumPost => "post",
            Self::Notice => "notice",
            Self::Event => "event",
        }
    }

    /// Plural label used in denial messages for unscoped actions.
    pub fn plural_label(self) -> &'static str {
        match self {
            Self::StudySpot => "study spots",
            Self::EatingSpot => "eating spots",
            Self::Confession => "confessions",
            Self::Review => "reviews",
            Self::ForumPost => "posts",
            Self::Notice => "notices",
            Self::Event => "events",
        }
    }
}

/// Protected operations routed through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
    /// Approve a pending confession for the public feed.
    Approve,
    /// Flip a forum post's solved marker.
    MarkSolved,
    /// List every record including ones hidden from the public feed.
    ListAll,
}

/// Decide whether `caller` may perform `action` on a record of `kind`.
///
/// `owner` is the record's owner when it has one; ownerless records
/// (study spots) pass `None` and owner-based grants never fire.
///
/// # Examples
/// ```
/// use backend::domain::{Action, Caller, CallerId, ResourceKind, Role, authorization};
/// use uuid::Uuid;
///
/// let owner = CallerId::new(Uuid::new_v4());
/// let caller = Caller::new(owner.clone(), Role::Student);
/// assert!(authorization::allows(
///     ResourceKind::ForumPost,
///     Some(&owner),
///     &caller,
///     Action::Update,
/// ));
/// ```
pub fn allows(kind: ResourceKind, owner: Option<&CallerId>, caller: &Caller, action: Action) -> bool {
    let is_owner = owner.is_some_and(|owner| *owner == caller.id);
    let is_admin = caller.role == Role::Admin;
    let is_staff = matches!(caller.role, Role::Admin | Role::Faculty);

    match action {
        // Owner only. Admins cannot mark someone else's problem solved.
        Action::MarkSolved => is_owner,
        Action::Approve => is_admin,
        Action::ListAll => match kind {
            ResourceKind::Notice | ResourceKind::Event => is_staff,
            _ => is_admin,
        },
        Action::Create => match kind {
            ResourceKind::StudySpot | ResourceKind::EatingSpot => is_admin,
            ResourceKind::Notice | ResourceKind::Event => is_staff,
            ResourceKind::Confession | ResourceKind::Review | ResourceKind::ForumPost => true,
        },
        Action::Update => {
            is_owner
                || is_admin
                || (matches!(kind, ResourceKind::Notice | ResourceKind::Event) && is_staff)
        }
        Action::Delete => is_owner || is_admin,
    }
}

/// [`allows`], mapped to a [`Forbidden`](crate::domain::ErrorCode::Forbidden)
/// error naming the denied action.
pub fn authorize(
    kind: ResourceKind,
    owner: Option<&CallerId>,
    caller: &Caller,
    action: Action,
) -> Result<(), Error> {
    if allows(kind, owner, caller, action) {
        return Ok(());
    }
    let message = match action {
        Action::Create => format!("not authorized to create {}", kind.plural_label()),
        Action::ListAll => format!("not authorized to list all {}", kind.plural_label()),
        Action::Update => format!("not authorized to update this {}", kind.label()),
        Action::Delete => format!("not authorized to delete this {}", kind.label()),
        Action::Approve => format!("not authorized to approve this {}", kind.label()),
        Action::MarkSolved => format!("not authorized to mark this {} solved", kind.label()),
    };
    Err(Error::forbidden(message))
}
