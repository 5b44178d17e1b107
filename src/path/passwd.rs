//! Home directory lookups in the system user database.

#[cfg(unix)]
mod imp {
    use std::ffi::{CStr, CString};

    const INITIAL_BUFFER_LEN: usize = 1024;
    const MAX_BUFFER_LEN: usize = 1 << 20;

    pub(crate) fn user_home(user: &str) -> Option<String> {
        let name = CString::new(user).ok()?;
        lookup(|entry, buf, len, result| {
            // SAFETY: every pointer is valid for the duration of the call and `len` is the
            // length of `buf`.
            unsafe { libc::getpwnam_r(name.as_ptr(), entry, buf, len, result) }
        })
    }

    pub(crate) fn current_user_home() -> Option<String> {
        // SAFETY: getuid has no preconditions and cannot fail.
        let uid = unsafe { libc::getuid() };
        lookup(|entry, buf, len, result| {
            // SAFETY: as in `user_home`.
            unsafe { libc::getpwuid_r(uid, entry, buf, len, result) }
        })
    }

    fn lookup<F>(mut call: F) -> Option<String>
    where
        F: FnMut(
            *mut libc::passwd,
            *mut libc::c_char,
            libc::size_t,
            *mut *mut libc::passwd,
        ) -> libc::c_int,
    {
        let mut buf: Vec<libc::c_char> = vec![0; INITIAL_BUFFER_LEN];

        loop {
            // SAFETY: passwd is plain old data; an all-zero value is valid.
            let mut entry: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = std::ptr::null_mut();

            let rc = call(
                &mut entry as *mut libc::passwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result as *mut *mut libc::passwd,
            );

            if rc == libc::ERANGE && buf.len() < MAX_BUFFER_LEN {
                let grown = buf.len() * 2;
                buf.resize(grown, 0);
                continue;
            }

            if rc != 0 || result.is_null() || entry.pw_dir.is_null() {
                return None;
            }

            // SAFETY: pw_dir points into `buf`, which is alive and unmodified here.
            let dir = unsafe { CStr::from_ptr(entry.pw_dir) };
            return dir.to_str().ok().map(str::to_owned);
        }
    }
}

#[cfg(not(unix))]
mod imp {
    pub(crate) fn user_home(_user: &str) -> Option<String> {
        None
    }

    pub(crate) fn current_user_home() -> Option<String> {
        None
    }
}

pub(crate) use imp::{current_user_home, user_home};
