//! Extended-attribute marker for the mode column.
//!
//! `+` marks an entry carrying a POSIX ACL, `.` one with only an SELinux
//! security context. Other attributes leave the mode string alone.

use std::os::unix::ffi::OsStrExt;
use std::path::Path;

const ACL_ACCESS: &[u8] = b"system.posix_acl_access";
const ACL_DEFAULT: &[u8] = b"system.posix_acl_default";
const SELINUX: &[u8] = b"security.selinux";

/// Marker character for `path`, without following symlinks.
///
/// Filesystems or platforms without extended attributes yield `None`.
pub fn marker(path: &Path) -> Option<char> {
    match xattr::list(path) {
        Ok(names) => {
            let names: Vec<_> = names.collect();
            marker_for(names.iter().map(|n| n.as_bytes()))
        }
        Err(err) => {
            tracing::trace!(%err, path = %path.display(), "no extended attributes");
            None
        }
    }
}

/// Pick the marker for a list of attribute names.
pub fn marker_for<'a>(names: impl IntoIterator<Item = &'a [u8]>) -> Option<char> {
    let mut selinux = false;
    for name in names {
        if name == ACL_ACCESS || name == ACL_DEFAULT {
            return Some('+');
        }
        selinux |= name == SELINUX;
    }
    selinux.then_some('.')
}
