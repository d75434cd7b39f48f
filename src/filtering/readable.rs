// src/filtering/readable.rs

use crate::errors::ReadError;
use std::fs::{self, Metadata};
use std::path::Path;

/// Owner-read permission bit.
#[cfg(unix)]
const OWNER_READ: u32 = 0o400;

/// Confirms that `path` exists, is a regular file, and is owner-readable.
///
/// Any stat failure is reported as [`ReadError::NotFound`]; the check does not
/// distinguish a missing file from one whose metadata cannot be read.
/// Symlinks are followed, so a link to a regular file passes and a link to a
/// directory fails with [`ReadError::IsDirectory`].
///
/// This is a best-effort pre-flight check. The file can still change before it
/// is opened.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use clipper::filtering::check_readable;
/// # use clipper::errors::ReadError;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let file = temp.path().join("notes.txt");
/// fs::write(&file, "hello")?;
///
/// assert!(check_readable(&file).is_ok());
/// assert!(matches!(check_readable(temp.path()), Err(ReadError::IsDirectory)));
/// assert!(matches!(check_readable(&temp.path().join("missing")), Err(ReadError::NotFound)));
/// # Ok(())
/// # }
/// ```
pub fn check_readable(path: &Path) -> Result<(), ReadError> {
    let metadata = fs::metadata(path).map_err(|e| {
        log::debug!("Cannot stat '{}': {}", path.display(), e);
        ReadError::NotFound
    })?;

    if !is_file_type(&metadata) {
        return Err(ReadError::IsDirectory);
    }

    if !is_owner_readable(&metadata) {
        return Err(ReadError::PermissionDenied);
    }

    Ok(())
}

/// Checks if the metadata belongs to a regular file.
#[inline]
fn is_file_type(metadata: &Metadata) -> bool {
    metadata.is_file()
}

#[cfg(unix)]
fn is_owner_readable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & OWNER_READ != 0
}

#[cfg(not(unix))]
fn is_owner_readable(_metadata: &Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_regular_file_passes() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("test_file.txt");
        fs::write(&file_path, "content")?;
        assert!(check_readable(&file_path).is_ok());
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_directory_is_rejected() -> std::io::Result<()> {
        let temp = tempdir()?;
        assert!(matches!(
            check_readable(temp.path()),
            Err(ReadError::IsDirectory)
        ));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let path = Path::new("non_existent_file_for_readable_check.txt");
        assert!(matches!(check_readable(path), Err(ReadError::NotFound)));
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_file_is_permission_denied() -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let temp = tempdir()?;
        let file_path = temp.path().join("secret.txt");
        fs::write(&file_path, "secret")?;
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o200))?;

        assert!(matches!(
            check_readable(&file_path),
            Err(ReadError::PermissionDenied)
        ));

        // Restore so the temp dir can be cleaned up everywhere.
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o600))?;
        temp.close()?;
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_to_directory_is_rejected() -> std::io::Result<()> {
        use std::os::unix::fs::symlink;
        let temp = tempdir()?;
        let dir = temp.path().join("dir");
        fs::create_dir(&dir)?;
        let link = temp.path().join("link");
        symlink(&dir, &link)?;
        assert!(matches!(check_readable(&link), Err(ReadError::IsDirectory)));
        temp.close()?;
        Ok(())
    }
}
