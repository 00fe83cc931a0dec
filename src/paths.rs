//! Tilde expansion for user paths
//!
//! `~` and `~/rest` resolve through `$HOME`; `~name/rest` resolves through the
//! system account database. Paths without a leading `~` pass through as-is.

use std::env::VarError;

use tracing::debug;

/// Upper bound for the `getpwnam_r` scratch buffer when it reports ERANGE.
#[cfg(unix)]
const MAX_PASSWD_BUFFER: usize = 1 << 20;

/// Errors that can occur while expanding a `~` prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("HOME is not set")]
    NoHome,

    #[error("HOME is not valid UTF-8")]
    HomeNotUnicode,

    #[error("Unknown user: {name}")]
    UnknownUser { name: String },
}

/// Expand a leading `~` or `~name`.
///
/// The remainder after the user name (starting at the first `/`) is appended
/// unchanged to the home directory.
pub fn try_expand_user_path(path: &str) -> Result<String, ExpandError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path.to_string());
    };

    let name_len = rest.find('/').unwrap_or(rest.len());
    let (name, tail) = rest.split_at(name_len);

    let home = if name.is_empty() {
        std::env::var("HOME").map_err(|e| match e {
            VarError::NotPresent => ExpandError::NoHome,
            VarError::NotUnicode(_) => ExpandError::HomeNotUnicode,
        })?
    } else {
        home_dir_of(name).ok_or_else(|| ExpandError::UnknownUser {
            name: name.to_string(),
        })?
    };

    Ok(format!("{}{}", home, tail))
}

/// Expand a leading `~`, returning the path unchanged if expansion fails.
///
/// An unexpanded path is left for the caller's file access to reject.
pub fn expand_user_path(path: &str) -> String {
    match try_expand_user_path(path) {
        Ok(expanded) => expanded,
        Err(e) => {
            debug!(path, error = %e, "Skipping tilde expansion");
            path.to_string()
        }
    }
}

/// Look up the home directory of `name` in the account database.
#[cfg(unix)]
fn home_dir_of(name: &str) -> Option<String> {
    use std::ffi::{CStr, CString};

    let c_name = CString::new(name).ok()?;
    let suggested = unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) };
    let mut buf_len = if suggested > 0 {
        suggested as usize
    } else {
        1024
    };

    loop {
        let mut buf: Vec<libc::c_char> = vec![0; buf_len];
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        let rc = unsafe {
            libc::getpwnam_r(
                c_name.as_ptr(),
                &mut pwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buf_len < MAX_PASSWD_BUFFER {
            buf_len *= 2;
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_dir.is_null() {
            return None;
        }

        // pw_dir points into `buf`, copy it out before the buffer drops.
        let dir = unsafe { CStr::from_ptr(pwd.pw_dir) };
        return Some(dir.to_string_lossy().into_owned());
    }
}

#[cfg(not(unix))]
fn home_dir_of(_name: &str) -> Option<String> {
    None
}
