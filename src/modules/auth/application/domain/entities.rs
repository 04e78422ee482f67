use serde::{Deserialize, Serialize};

/// Forum user id. `0` (or anything non-positive) is the guest identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub const GUEST: UserId = UserId(0);

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_guest(&self) -> bool {
        self.0 <= 0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity behind the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub uid: UserId,
}

impl Requester {
    pub fn new(uid: UserId) -> Self {
        Self { uid }
    }

    pub fn guest() -> Self {
        Self {
            uid: UserId::GUEST,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        !self.uid.is_guest()
    }
}
