//! TEAM_501: Architecture-specific syscall primitives
//!
//! Only the three-argument form is needed: `ioctl(fd, request, arg)`.

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use aarch64::*;

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;
