//! TEAM_501: Vertical blank state and console mapping

use core::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::consts::VblankFlags;

/// `struct fb_vblank`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Vblank {
    /// FB_VBLANK flags
    pub flags: u32,
    /// counter of retraces since boot
    pub count: u32,
    /// current scanline position
    pub vcount: u32,
    /// current scandot position
    pub hcount: u32,
    /// reserved for future compatibility
    pub reserved: [u32; 4],
}

impl Vblank {
    pub const fn flags(&self) -> VblankFlags {
        VblankFlags::from_bits_truncate(self.flags)
    }

    /// Retrace counter, if the driver maintains one.
    pub const fn retrace_count(&self) -> Option<u32> {
        if self.flags & VblankFlags::HAVE_COUNT.bits() != 0 {
            Some(self.count)
        } else {
            None
        }
    }

    /// Current scanline, if the driver reports it.
    pub const fn scanline(&self) -> Option<u32> {
        if self.flags & VblankFlags::HAVE_VCOUNT.bits() != 0 {
            Some(self.vcount)
        } else {
            None
        }
    }

    pub const fn in_vblank(&self) -> bool {
        self.flags & VblankFlags::VBLANKING.bits() != 0
    }
}

/// `struct fb_con2fbmap`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Con2FbMap {
    pub console: u32,
    pub framebuffer: u32,
}

const _: () = assert!(size_of::<Vblank>() == 32);
const _: () = assert!(size_of::<Con2FbMap>() == 8);
