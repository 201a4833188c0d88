//! TEAM_501: Framebuffer ioctl request codes
//!
//! Most fbdev requests predate size-encoded ioctls and are plain `0x46xx`
//! values. `FBIO_CURSOR`, `FBIOGET_VBLANK` and `FBIO_WAITFORVSYNC` are encoded
//! with `_IOWR/_IOR/_IOW`, so they differ between 32- and 64-bit targets and
//! between the generic and powerpc/mips/sparc ioctl layouts.

use crate::cursor::Cursor;
use crate::ioc::{ior, iow, iowr};
use crate::vblank::Vblank;

/// ioctl type byte shared by every framebuffer request.
pub const FB_IOC_MAGIC: u8 = b'F';

pub const FBIOGET_VSCREENINFO: u32 = 0x4600;
pub const FBIOPUT_VSCREENINFO: u32 = 0x4601;
pub const FBIOGET_FSCREENINFO: u32 = 0x4602;
pub const FBIOGETCMAP: u32 = 0x4604;
pub const FBIOPUTCMAP: u32 = 0x4605;
pub const FBIOPAN_DISPLAY: u32 = 0x4606;
pub const FBIO_CURSOR: u32 = iowr::<Cursor>(FB_IOC_MAGIC, 0x08);
// 0x4607-0x460B are defined by the kernel but unused
pub const FBIOGET_CON2FBMAP: u32 = 0x460F;
pub const FBIOPUT_CON2FBMAP: u32 = 0x4610;
/// arg: 0 or vesa level + 1
pub const FBIOBLANK: u32 = 0x4611;
pub const FBIOGET_VBLANK: u32 = ior::<Vblank>(FB_IOC_MAGIC, 0x12);
pub const FBIO_ALLOC: u32 = 0x4613;
pub const FBIO_FREE: u32 = 0x4614;
pub const FBIOGET_GLYPH: u32 = 0x4615;
pub const FBIOGET_HWCINFO: u32 = 0x4616;
pub const FBIOPUT_MODEINFO: u32 = 0x4617;
pub const FBIOGET_DISPINFO: u32 = 0x4618;
pub const FBIO_WAITFORVSYNC: u32 = iow::<u32>(FB_IOC_MAGIC, 0x20);

/// Kernel name of a framebuffer request, for log output.
pub fn request_name(request: u32) -> Option<&'static str> {
    let name = match request {
        FBIOGET_VSCREENINFO => "FBIOGET_VSCREENINFO",
        FBIOPUT_VSCREENINFO => "FBIOPUT_VSCREENINFO",
        FBIOGET_FSCREENINFO => "FBIOGET_FSCREENINFO",
        FBIOGETCMAP => "FBIOGETCMAP",
        FBIOPUTCMAP => "FBIOPUTCMAP",
        FBIOPAN_DISPLAY => "FBIOPAN_DISPLAY",
        FBIO_CURSOR => "FBIO_CURSOR",
        FBIOGET_CON2FBMAP => "FBIOGET_CON2FBMAP",
        FBIOPUT_CON2FBMAP => "FBIOPUT_CON2FBMAP",
        FBIOBLANK => "FBIOBLANK",
        FBIOGET_VBLANK => "FBIOGET_VBLANK",
        FBIO_ALLOC => "FBIO_ALLOC",
        FBIO_FREE => "FBIO_FREE",
        FBIOGET_GLYPH => "FBIOGET_GLYPH",
        FBIOGET_HWCINFO => "FBIOGET_HWCINFO",
        FBIOPUT_MODEINFO => "FBIOPUT_MODEINFO",
        FBIOGET_DISPINFO => "FBIOGET_DISPINFO",
        FBIO_WAITFORVSYNC => "FBIO_WAITFORVSYNC",
        _ => return None,
    };
    Some(name)
}
