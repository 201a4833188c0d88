//! TEAM_501: Framebuffer ioctl wrappers
//!
//! Each wrapper issues one `ioctl(2)` on a descriptor the caller already
//! opened (typically `/dev/fb0`). Argument structs are passed by pointer with
//! the exact kernel layout, so the typed wrappers are safe; only requests that
//! carry caller-supplied pointers (`FBIO_CURSOR`, `ioctl_raw`) are `unsafe`.

use bytemuck::Zeroable;
use linux_raw_sys::general::__NR_ioctl;

use crate::arch;
use crate::consts::BlankLevel;
use crate::cursor::Cursor;
use crate::error::{FbError, FbResult};
use crate::request::{
    request_name, FBIOBLANK, FBIOGET_CON2FBMAP, FBIOGET_FSCREENINFO, FBIOGET_VBLANK,
    FBIOGET_VSCREENINFO, FBIOPAN_DISPLAY, FBIOPUT_CON2FBMAP, FBIOPUT_VSCREENINFO, FBIO_CURSOR,
    FBIO_WAITFORVSYNC,
};
use crate::screeninfo::{FixScreenInfo, VarScreenInfo};
use crate::vblank::{Con2FbMap, Vblank};

#[cfg(feature = "alloc")]
use crate::cmap::ColorMap;
#[cfg(feature = "alloc")]
use crate::request::{FBIOGETCMAP, FBIOPUTCMAP};

/// Largest errno the kernel returns in-band.
const MAX_ERRNO: i64 = 4095;

// ============================================================================
// Raw entry point
// ============================================================================

/// Issue `ioctl(fd, request, arg)` and return the non-negative result.
///
/// # Safety
///
/// `arg` must satisfy whatever `request` expects: if it is a pointer, it must
/// be valid for the reads and writes the driver performs through it.
pub unsafe fn ioctl_raw(fd: i32, request: u32, arg: usize) -> FbResult<i32> {
    // SAFETY: forwarded to the caller's contract on `arg`.
    let ret = unsafe {
        arch::syscall3(
            u64::from(__NR_ioctl),
            fd as u64,
            u64::from(request),
            arg as u64,
        )
    };

    if (-MAX_ERRNO..0).contains(&ret) {
        let err = FbError::from_errno((-ret) as i32);
        log::debug!(
            "[FB] ioctl(fd={}, {}) failed: {}",
            fd,
            request_name(request).unwrap_or("?"),
            err
        );
        return Err(err);
    }

    log::trace!(
        "[FB] ioctl(fd={}, {}={:#x}) -> {}",
        fd,
        request_name(request).unwrap_or("?"),
        request,
        ret
    );
    Ok(ret as i32)
}

/// Kernel fills a `T`.
fn ioctl_read<T: Zeroable>(fd: i32, request: u32) -> FbResult<T> {
    let mut out = T::zeroed();
    // SAFETY: `out` is a live, properly sized `T` for the whole call.
    unsafe { ioctl_raw(fd, request, &mut out as *mut T as usize)? };
    Ok(out)
}

/// Kernel reads a `T` and may write it back.
fn ioctl_update<T>(fd: i32, request: u32, arg: &mut T) -> FbResult<()> {
    // SAFETY: `arg` is a live, exclusive `T` for the whole call.
    unsafe { ioctl_raw(fd, request, arg as *mut T as usize)? };
    Ok(())
}

// ============================================================================
// Screen info
// ============================================================================

/// `FBIOGET_VSCREENINFO`: current mode.
pub fn get_var_screeninfo(fd: i32) -> FbResult<VarScreenInfo> {
    ioctl_read(fd, FBIOGET_VSCREENINFO)
}

/// `FBIOPUT_VSCREENINFO`: request a mode.
///
/// The driver rounds impossible values and writes the mode it accepted back
/// into `var`. With `FB_ACTIVATE_TEST` nothing changes on screen.
pub fn put_var_screeninfo(fd: i32, var: &mut VarScreenInfo) -> FbResult<()> {
    ioctl_update(fd, FBIOPUT_VSCREENINFO, var)
}

/// `FBIOGET_FSCREENINFO`: fixed hardware description.
pub fn get_fix_screeninfo(fd: i32) -> FbResult<FixScreenInfo> {
    ioctl_read(fd, FBIOGET_FSCREENINFO)
}

/// `FBIOPAN_DISPLAY`: move the visible window to `var.xoffset`/`var.yoffset`.
pub fn pan_display(fd: i32, var: &mut VarScreenInfo) -> FbResult<()> {
    ioctl_update(fd, FBIOPAN_DISPLAY, var)
}

// ============================================================================
// Colour map
// ============================================================================

/// `FBIOGETCMAP`: read palette entries `map.start()..map.start() + map.len()`.
#[cfg(feature = "alloc")]
pub fn get_cmap(fd: i32, map: &mut ColorMap) -> FbResult<()> {
    let mut raw = map.as_raw();
    ioctl_update(fd, FBIOGETCMAP, &mut raw)
}

/// `FBIOPUTCMAP`: write palette entries.
#[cfg(feature = "alloc")]
pub fn put_cmap(fd: i32, map: &ColorMap) -> FbResult<()> {
    let mut raw = map.as_raw_readonly();
    ioctl_update(fd, FBIOPUTCMAP, &mut raw)
}

// ============================================================================
// Blanking, vblank, console mapping
// ============================================================================

/// `FBIOBLANK`: the level is passed by value, not by pointer.
pub fn blank(fd: i32, level: BlankLevel) -> FbResult<()> {
    // SAFETY: FBIOBLANK takes an integer argument.
    unsafe { ioctl_raw(fd, FBIOBLANK, u32::from(level) as usize)? };
    Ok(())
}

/// `FBIOGET_VBLANK`: vertical blank capabilities and counters.
pub fn get_vblank(fd: i32) -> FbResult<Vblank> {
    ioctl_read(fd, FBIOGET_VBLANK)
}

/// `FBIO_WAITFORVSYNC`: block until the next vertical sync on `crtc`.
pub fn wait_for_vsync(fd: i32, crtc: u32) -> FbResult<()> {
    let mut crtc = crtc;
    ioctl_update(fd, FBIO_WAITFORVSYNC, &mut crtc)
}

/// `FBIOGET_CON2FBMAP`: framebuffer currently bound to `console`.
pub fn get_con2fbmap(fd: i32, console: u32) -> FbResult<u32> {
    let mut map = Con2FbMap {
        console,
        framebuffer: 0,
    };
    ioctl_update(fd, FBIOGET_CON2FBMAP, &mut map)?;
    Ok(map.framebuffer)
}

/// `FBIOPUT_CON2FBMAP`: bind a console to a framebuffer.
pub fn put_con2fbmap(fd: i32, map: Con2FbMap) -> FbResult<()> {
    let mut map = map;
    ioctl_update(fd, FBIOPUT_CON2FBMAP, &mut map)
}

// ============================================================================
// Cursor
// ============================================================================

/// `FBIO_CURSOR`: update the hardware cursor.
///
/// # Safety
///
/// `cursor.mask`, `cursor.image.data` and the pointers in `cursor.image.cmap`
/// must be null or valid for the sizes implied by the image dimensions,
/// for every attribute selected in `cursor.set`.
pub unsafe fn set_cursor(fd: i32, cursor: &Cursor) -> FbResult<()> {
    let mut cursor = *cursor;
    // SAFETY: the caller guarantees the embedded pointers; the struct itself
    // is a live local for the whole call.
    unsafe { ioctl_raw(fd, FBIO_CURSOR, &mut cursor as *mut Cursor as usize)? };
    Ok(())
}

// ============================================================================
// std handles
// ============================================================================

/// Framebuffer requests on any open descriptor (`File`, `OwnedFd`, ...).
#[cfg(feature = "std")]
pub trait FramebufferExt: std::os::fd::AsRawFd {
    fn var_screeninfo(&self) -> FbResult<VarScreenInfo> {
        get_var_screeninfo(self.as_raw_fd())
    }

    fn put_var_screeninfo(&self, var: &mut VarScreenInfo) -> FbResult<()> {
        put_var_screeninfo(self.as_raw_fd(), var)
    }

    fn fix_screeninfo(&self) -> FbResult<FixScreenInfo> {
        get_fix_screeninfo(self.as_raw_fd())
    }

    fn pan_display(&self, var: &mut VarScreenInfo) -> FbResult<()> {
        pan_display(self.as_raw_fd(), var)
    }

    fn get_cmap(&self, map: &mut ColorMap) -> FbResult<()> {
        get_cmap(self.as_raw_fd(), map)
    }

    fn put_cmap(&self, map: &ColorMap) -> FbResult<()> {
        put_cmap(self.as_raw_fd(), map)
    }

    fn blank(&self, level: BlankLevel) -> FbResult<()> {
        blank(self.as_raw_fd(), level)
    }

    fn vblank(&self) -> FbResult<Vblank> {
        get_vblank(self.as_raw_fd())
    }

    fn wait_for_vsync(&self, crtc: u32) -> FbResult<()> {
        wait_for_vsync(self.as_raw_fd(), crtc)
    }

    fn con2fbmap(&self, console: u32) -> FbResult<u32> {
        get_con2fbmap(self.as_raw_fd(), console)
    }

    fn put_con2fbmap(&self, map: Con2FbMap) -> FbResult<()> {
        put_con2fbmap(self.as_raw_fd(), map)
    }

    /// # Safety
    ///
    /// Same contract as [`set_cursor`].
    unsafe fn set_cursor(&self, cursor: &Cursor) -> FbResult<()> {
        // SAFETY: forwarded to the caller.
        unsafe { set_cursor(self.as_raw_fd(), cursor) }
    }
}

#[cfg(feature = "std")]
impl<T: std::os::fd::AsRawFd + ?Sized> FramebufferExt for T {}
