//! TEAM_501: Framebuffer error type
//!
//! Most variants mirror the errno values the fbdev ioctls return. The rest
//! are raised before any syscall is made.

use core::fmt;

use linux_raw_sys::errno::{
    EAGAIN, EBADF, EBUSY, EFAULT, EINTR, EINVAL, EIO, ENODEV, ENOMEM, ENOSYS, ENOTTY, ENXIO,
    EPERM, ETIMEDOUT,
};

/// Framebuffer error codes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FbError {
    /// Operation not permitted (EPERM)
    PermissionDenied,
    /// Interrupted system call (EINTR)
    Interrupted,
    /// I/O error (EIO)
    IoError,
    /// No such device or address (ENXIO)
    NoSuchAddress,
    /// Bad file descriptor (EBADF)
    BadFd,
    /// Resource temporarily unavailable (EAGAIN)
    WouldBlock,
    /// Out of memory (ENOMEM)
    OutOfMemory,
    /// Bad address (EFAULT)
    BadAddress,
    /// Device or resource busy (EBUSY)
    Busy,
    /// No such device (ENODEV)
    NoDevice,
    /// Invalid argument (EINVAL)
    InvalidArgument,
    /// Descriptor is not a framebuffer, or the driver lacks the request (ENOTTY)
    NotAFramebuffer,
    /// Function not implemented (ENOSYS)
    NotImplemented,
    /// Timed out waiting for the display (ETIMEDOUT)
    TimedOut,
    /// Any other errno, kept verbatim
    Unknown(i32),
    /// Colour map channels have different lengths
    ChannelLengthMismatch,
    /// Colour map index outside `start..start + len`
    IndexOutOfRange,
    /// Colour map has more entries than `fb_cmap.len` can describe
    ColorMapTooLarge,
    /// Header field holds a value this crate has no name for
    UnknownConstant(u32),
}

impl FbError {
    /// Map a positive errno value to an error.
    pub fn from_errno(errno: i32) -> Self {
        let errno = errno.unsigned_abs();
        match errno {
            EPERM => FbError::PermissionDenied,
            EINTR => FbError::Interrupted,
            EIO => FbError::IoError,
            ENXIO => FbError::NoSuchAddress,
            EBADF => FbError::BadFd,
            EAGAIN => FbError::WouldBlock,
            ENOMEM => FbError::OutOfMemory,
            EFAULT => FbError::BadAddress,
            EBUSY => FbError::Busy,
            ENODEV => FbError::NoDevice,
            EINVAL => FbError::InvalidArgument,
            ENOTTY => FbError::NotAFramebuffer,
            ENOSYS => FbError::NotImplemented,
            ETIMEDOUT => FbError::TimedOut,
            _ => FbError::Unknown(i32::try_from(errno).unwrap_or(i32::MAX)),
        }
    }

    /// Convert to POSIX errno value (negative).
    ///
    /// Crate-side errors report `EINVAL`.
    pub fn to_errno(self) -> i64 {
        let errno = match self {
            FbError::PermissionDenied => EPERM,
            FbError::Interrupted => EINTR,
            FbError::IoError => EIO,
            FbError::NoSuchAddress => ENXIO,
            FbError::BadFd => EBADF,
            FbError::WouldBlock => EAGAIN,
            FbError::OutOfMemory => ENOMEM,
            FbError::BadAddress => EFAULT,
            FbError::Busy => EBUSY,
            FbError::NoDevice => ENODEV,
            FbError::NotAFramebuffer => ENOTTY,
            FbError::NotImplemented => ENOSYS,
            FbError::TimedOut => ETIMEDOUT,
            FbError::Unknown(e) => return -i64::from(e),
            FbError::InvalidArgument
            | FbError::ChannelLengthMismatch
            | FbError::IndexOutOfRange
            | FbError::ColorMapTooLarge
            | FbError::UnknownConstant(_) => EINVAL,
        };
        -i64::from(errno)
    }

    /// Get error name
    pub fn name(&self) -> &'static str {
        match self {
            FbError::PermissionDenied => "EPERM",
            FbError::Interrupted => "EINTR",
            FbError::IoError => "EIO",
            FbError::NoSuchAddress => "ENXIO",
            FbError::BadFd => "EBADF",
            FbError::WouldBlock => "EAGAIN",
            FbError::OutOfMemory => "ENOMEM",
            FbError::BadAddress => "EFAULT",
            FbError::Busy => "EBUSY",
            FbError::NoDevice => "ENODEV",
            FbError::InvalidArgument => "EINVAL",
            FbError::NotAFramebuffer => "ENOTTY",
            FbError::NotImplemented => "ENOSYS",
            FbError::TimedOut => "ETIMEDOUT",
            FbError::Unknown(_) => "E?",
            FbError::ChannelLengthMismatch => "CMAP_LEN",
            FbError::IndexOutOfRange => "CMAP_RANGE",
            FbError::ColorMapTooLarge => "CMAP_SIZE",
            FbError::UnknownConstant(_) => "UNKNOWN_CONST",
        }
    }
}

impl fmt::Display for FbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FbError::PermissionDenied => "Operation not permitted",
            FbError::Interrupted => "Interrupted system call",
            FbError::IoError => "I/O error",
            FbError::NoSuchAddress => "No such device or address",
            FbError::BadFd => "Bad file descriptor",
            FbError::WouldBlock => "Resource temporarily unavailable",
            FbError::OutOfMemory => "Out of memory",
            FbError::BadAddress => "Bad address",
            FbError::Busy => "Device or resource busy",
            FbError::NoDevice => "No such device",
            FbError::InvalidArgument => "Invalid argument",
            FbError::NotAFramebuffer => "Inappropriate ioctl for device",
            FbError::NotImplemented => "Function not implemented",
            FbError::TimedOut => "Timed out waiting for display",
            FbError::Unknown(errno) => return write!(f, "Unknown error (errno {errno})"),
            FbError::ChannelLengthMismatch => "Colour map channel lengths differ",
            FbError::IndexOutOfRange => "Colour map index out of range",
            FbError::ColorMapTooLarge => "Colour map too large",
            FbError::UnknownConstant(v) => {
                return write!(f, "Unrecognised header value {v:#x}");
            }
        };
        write!(f, "{} ({})", msg, self.name())
    }
}

impl core::error::Error for FbError {}

#[cfg(feature = "std")]
impl From<FbError> for std::io::Error {
    fn from(err: FbError) -> Self {
        match err {
            FbError::ChannelLengthMismatch
            | FbError::IndexOutOfRange
            | FbError::ColorMapTooLarge
            | FbError::UnknownConstant(_) => {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
            }
            // to_errno is within i32 range for every kernel-originated variant
            _ => std::io::Error::from_raw_os_error((-err.to_errno()) as i32),
        }
    }
}

/// Result type for framebuffer operations
pub type FbResult<T> = Result<T, FbError>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_errno_roundtrip() {
        for errno in [1, 4, 5, 6, 9, 11, 12, 14, 16, 19, 22, 25, 38, 110] {
            let err = FbError::from_errno(errno);
            assert!(!matches!(err, FbError::Unknown(_)), "errno {errno}");
            assert_eq!(err.to_errno(), -i64::from(errno));
        }
    }

    #[test]
    fn test_negative_errno_accepted() {
        assert_eq!(FbError::from_errno(-9), FbError::BadFd);
        assert_eq!(FbError::from_errno(-61), FbError::Unknown(61));
    }

    /// Tests: the most negative i32 does not overflow when negated
    #[test]
    fn test_from_errno_extremes() {
        assert_eq!(FbError::from_errno(i32::MIN), FbError::Unknown(i32::MAX));
        assert_eq!(FbError::from_errno(i32::MAX), FbError::Unknown(i32::MAX));
        assert_eq!(FbError::from_errno(0), FbError::Unknown(0));
    }

    #[test]
    fn test_unknown_errno_preserved() {
        let err = FbError::from_errno(95);
        assert_eq!(err, FbError::Unknown(95));
        assert_eq!(err.to_errno(), -95);
    }

    #[test]
    fn test_crate_errors_report_einval() {
        assert_eq!(FbError::ChannelLengthMismatch.to_errno(), -22);
        assert_eq!(FbError::IndexOutOfRange.to_errno(), -22);
        assert_eq!(FbError::ColorMapTooLarge.to_errno(), -22);
        assert_eq!(FbError::UnknownConstant(9).to_errno(), -22);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            FbError::NotAFramebuffer.to_string(),
            "Inappropriate ioctl for device (ENOTTY)"
        );
        assert_eq!(FbError::Unknown(61).to_string(), "Unknown error (errno 61)");
        assert_eq!(
            FbError::UnknownConstant(0x1f).to_string(),
            "Unrecognised header value 0x1f"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_into_io_error() {
        let io: std::io::Error = FbError::BadFd.into();
        assert_eq!(io.raw_os_error(), Some(9));
        let io: std::io::Error = FbError::IndexOutOfRange.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidInput);
    }
}
