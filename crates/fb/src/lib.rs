//! Linux Framebuffer ABI for `LevitateOS` userspace
//!
//! `TEAM_501`: Mirrors `<linux/fb.h>` (struct layouts, ioctl numbers, constants)
//! so userspace can drive `/dev/fbN` without a libc.
//!
//! Every `#[repr(C)]` type here has the exact size, field order and padding of
//! its kernel counterpart. Layouts are asserted at compile time.
//!
//! ## Usage
//! ```rust,no_run
//! use los_fb::{get_var_screeninfo, get_fix_screeninfo};
//!
//! # fn demo(fd: i32) -> los_fb::FbResult<()> {
//! let var = get_var_screeninfo(fd)?;
//! let fix = get_fix_screeninfo(fd)?;
//! let _stride = fix.line_length as usize * var.yres_virtual as usize;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// TEAM_501: Architecture-specific syscall primitives (only what ioctl needs)
#[cfg(all(
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod arch;

// Modules
pub mod accel;
pub mod cmap;
pub mod consts;
pub mod cursor;
pub mod error;
pub mod ioc;
pub mod request;
pub mod screeninfo;
pub mod timing;
pub mod vblank;

#[cfg(all(
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
pub mod ioctl;

// Re-exports
pub use accel::*;
pub use cmap::*;
pub use consts::*;
pub use cursor::*;
pub use error::{FbError, FbResult};
pub use request::*;
pub use screeninfo::*;
pub use timing::*;
pub use vblank::*;

#[cfg(all(
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
pub use ioctl::*;
