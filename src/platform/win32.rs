use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::path::{Path, PathBuf};

use widestring::U16CString;
use windows::Win32::Storage::FileSystem::GetShortPathNameW;
use windows::core::PCWSTR;

use crate::error::{PathError, PathResult};

// The required size can grow between the sizing call and the copy if the
// entry is renamed underneath us.
const MAX_ATTEMPTS: usize = 3;

pub fn short_path_name(path: &Path) -> PathResult<PathBuf> {
    let wide = U16CString::from_os_str(path.as_os_str()).map_err(|_| PathError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let source = PCWSTR(wide.as_ptr());

    let mut required = unsafe { GetShortPathNameW(source, None) };
    for _ in 0..MAX_ATTEMPTS {
        if required == 0 {
            return Err(last_error(path));
        }

        let mut buffer = vec![0u16; required as usize];
        let written = unsafe { GetShortPathNameW(source, Some(buffer.as_mut_slice())) };
        if written == 0 {
            return Err(last_error(path));
        }

        // On success the count excludes the terminator; otherwise it is the
        // size needed
        if (written as usize) < buffer.len() {
            buffer.truncate(written as usize);
            return Ok(PathBuf::from(OsString::from_wide(&buffer)));
        }
        required = written;
    }

    tracing::warn!(target: "platform", path = %path.display(), "Short path kept growing between calls");
    Err(PathError::Platform {
        path: path.to_path_buf(),
        source: std::io::Error::other("short path length changed between calls"),
    })
}

fn last_error(path: &Path) -> PathError {
    PathError::Platform {
        path: path.to_path_buf(),
        source: std::io::Error::last_os_error(),
    }
}
