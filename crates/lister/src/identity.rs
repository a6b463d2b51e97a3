//! uid/gid to name resolution.

use users::{Groups, Users, UsersCache};

use crate::error::{IdKind, ListError, Result};

/// Resolves numeric owner and group ids to display names.
pub trait Identity {
    fn user_name(&self, uid: u32) -> Result<String>;
    fn group_name(&self, gid: u32) -> Result<String>;
}

/// Looks ids up in the system user and group databases, caching results.
pub struct SystemIdentity {
    cache: UsersCache,
}

impl SystemIdentity {
    pub fn new() -> Self {
        SystemIdentity {
            cache: UsersCache::new(),
        }
    }
}

impl Default for SystemIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl Identity for SystemIdentity {
    fn user_name(&self, uid: u32) -> Result<String> {
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .ok_or(ListError::LookupFailed {
                kind: IdKind::User,
                id: uid,
            })
    }

    fn group_name(&self, gid: u32) -> Result<String> {
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
            .ok_or(ListError::LookupFailed {
                kind: IdKind::Group,
                id: gid,
            })
    }
}

/// Owner name for display, falling back to the numeric uid.
pub fn display_user<I: Identity + ?Sized>(identity: &I, uid: u32) -> String {
    identity.user_name(uid).unwrap_or_else(|err| {
        tracing::debug!(%err, "user lookup failed");
        uid.to_string()
    })
}

/// Group name for display, falling back to the numeric gid.
pub fn display_group<I: Identity + ?Sized>(identity: &I, gid: u32) -> String {
    identity.group_name(gid).unwrap_or_else(|err| {
        tracing::debug!(%err, "group lookup failed");
        gid.to_string()
    })
}
