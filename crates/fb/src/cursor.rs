//! TEAM_501: Hardware cursor (`FBIO_CURSOR`)

use core::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::accel::Image;
use crate::consts::CursorSet;

/// `struct fbcurpos`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct CurPos {
    pub x: u16,
    pub y: u16,
}

/// `struct fb_cursor`
///
/// The cursor position lives in `image.dx`/`image.dy`; `hot` is the offset of
/// the pointer tip inside the image.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct Cursor {
    /// what to set
    pub set: u16,
    /// cursor on/off
    pub enable: u16,
    /// bitop operation
    pub rop: u16,
    /// cursor mask bits
    pub mask: *const u8,
    /// cursor hot spot
    pub hot: CurPos,
    /// Cursor image
    pub image: Image,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Cursor {
    /// Request that only moves the cursor.
    pub fn move_to(x: u32, y: u32) -> Self {
        let mut cursor = Self {
            set: CursorSet::POS.bits(),
            enable: 1,
            ..Default::default()
        };
        cursor.image.dx = x;
        cursor.image.dy = y;
        cursor
    }

    /// Request that only toggles visibility.
    pub fn visibility(enable: bool) -> Self {
        Self {
            enable: u16::from(enable),
            ..Default::default()
        }
    }

    pub const fn set_flags(&self) -> CursorSet {
        CursorSet::from_bits_truncate(self.set)
    }

    pub const fn is_enabled(&self) -> bool {
        self.enable != 0
    }

    /// Bytes of `mask` the kernel reads: one bit per pixel, rows byte-padded.
    ///
    /// `None` if the size does not fit in `usize`.
    pub fn mask_len(&self) -> Option<usize> {
        let row = u64::from(self.image.width.div_ceil(8));
        usize::try_from(row * u64::from(self.image.height)).ok()
    }
}

const _: () = assert!(size_of::<CurPos>() == 4);
#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<Cursor>() == 104);
#[cfg(target_pointer_width = "32")]
const _: () = assert!(size_of::<Cursor>() == 72);
