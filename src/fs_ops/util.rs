use std::io;

/// Classification of a failed rename: the mover only branches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameFailure {
    /// Source and destination live on different filesystems.
    CrossDevice,
    Other,
}

impl RenameFailure {
    pub fn classify(e: &io::Error) -> Self {
        if e.kind() == io::ErrorKind::CrossesDevices {
            return RenameFailure::CrossDevice;
        }
        // Older error mappings may only carry the raw code.
        #[cfg(unix)]
        if e.raw_os_error() == Some(libc::EXDEV) {
            return RenameFailure::CrossDevice;
        }
        #[cfg(windows)]
        if e.raw_os_error() == Some(17) {
            // ERROR_NOT_SAME_DEVICE
            return RenameFailure::CrossDevice;
        }
        RenameFailure::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn exdev_is_cross_device() {
        let e = io::Error::from_raw_os_error(libc::EXDEV);
        assert_eq!(RenameFailure::classify(&e), RenameFailure::CrossDevice);
    }

    #[test]
    fn crosses_devices_kind_is_cross_device() {
        let e = io::Error::new(io::ErrorKind::CrossesDevices, "simulated");
        assert_eq!(RenameFailure::classify(&e), RenameFailure::CrossDevice);
    }

    #[test]
    fn other_errors_are_other() {
        let e = io::Error::new(io::ErrorKind::PermissionDenied, "cross-device in message only");
        assert_eq!(RenameFailure::classify(&e), RenameFailure::Other);
        #[cfg(unix)]
        {
            let e = io::Error::from_raw_os_error(libc::EACCES);
            assert_eq!(RenameFailure::classify(&e), RenameFailure::Other);
        }
    }
}
