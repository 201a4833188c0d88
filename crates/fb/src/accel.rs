//! TEAM_501: Hardware-acceleration argument structs
//!
//! The kernel uses these for its internal blit/fill/image hooks; userspace
//! only meets `Image` as part of `Cursor`.

use core::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::cmap::Cmap;
use crate::consts::{ROP_COPY, ROP_XOR};

/// `struct fb_copyarea`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct CopyArea {
    pub dx: u32,
    pub dy: u32,
    pub width: u32,
    pub height: u32,
    pub sx: u32,
    pub sy: u32,
}

/// `struct fb_fillrect`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct FillRect {
    /// screen-relative
    pub dx: u32,
    pub dy: u32,
    pub width: u32,
    pub height: u32,
    pub color: u32,
    /// ROP_COPY or ROP_XOR
    pub rop: u32,
}

impl FillRect {
    pub const fn is_xor(&self) -> bool {
        self.rop == ROP_XOR
    }
}

impl CopyArea {
    /// Source and destination rectangles share at least one pixel.
    pub const fn overlaps(&self) -> bool {
        let x_overlap = self.sx < self.dx.saturating_add(self.width)
            && self.dx < self.sx.saturating_add(self.width);
        let y_overlap = self.sy < self.dy.saturating_add(self.height)
            && self.dy < self.sy.saturating_add(self.height);
        self.width != 0 && self.height != 0 && x_overlap && y_overlap
    }
}

/// `struct fb_image`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct Image {
    /// Where to place image
    pub dx: u32,
    pub dy: u32,
    /// Size of image
    pub width: u32,
    pub height: u32,
    /// Only used when a mono bitmap
    pub fg_color: u32,
    pub bg_color: u32,
    /// Depth of the image
    pub depth: u8,
    /// Pointer to image data
    pub data: *const u8,
    /// color map info
    pub cmap: Cmap,
}

impl Default for Image {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Image {
    /// Bytes of `data` the kernel reads: rows are padded to whole bytes.
    ///
    /// `None` if the size does not fit in `usize`.
    pub fn data_len(&self) -> Option<usize> {
        let row_bits = u64::from(self.width) * u64::from(self.depth);
        let len = row_bits.div_ceil(8).checked_mul(u64::from(self.height))?;
        usize::try_from(len).ok()
    }
}

/// Default raster op for `FillRect` and cursors.
pub const DEFAULT_ROP: u32 = ROP_COPY;

const _: () = assert!(size_of::<CopyArea>() == 24);
const _: () = assert!(size_of::<FillRect>() == 24);
#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<Image>() == 80);
#[cfg(target_pointer_width = "32")]
const _: () = assert!(size_of::<Image>() == 56);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_len() {
        let mono = Image {
            width: 10,
            height: 3,
            depth: 1,
            ..Default::default()
        };
        // 10 bits -> 2 bytes per row
        assert_eq!(mono.data_len(), Some(6));

        let rgb = Image {
            width: 4,
            height: 2,
            depth: 24,
            ..Default::default()
        };
        assert_eq!(rgb.data_len(), Some(24));
    }

    /// Tests: kernel-sized dimensions never overflow the byte count
    #[test]
    fn test_image_data_len_overflow() {
        let huge = Image {
            width: u32::MAX,
            height: u32::MAX,
            depth: 255,
            ..Default::default()
        };
        assert_eq!(huge.data_len(), None);

        let tall = Image {
            width: 8,
            height: u32::MAX,
            depth: 1,
            ..Default::default()
        };
        assert_eq!(
            tall.data_len(),
            usize::try_from(u64::from(u32::MAX)).ok()
        );
    }

    #[test]
    fn test_copyarea_overlap() {
        let scroll = CopyArea {
            dx: 0,
            dy: 0,
            width: 640,
            height: 464,
            sx: 0,
            sy: 16,
        };
        assert!(scroll.overlaps());

        let disjoint = CopyArea {
            dx: 0,
            dy: 0,
            width: 8,
            height: 8,
            sx: 8,
            sy: 0,
        };
        assert!(!disjoint.overlaps());

        let empty = CopyArea::default();
        assert!(!empty.overlaps());
    }

    #[test]
    fn test_fillrect_rop() {
        let rect = FillRect {
            rop: ROP_XOR,
            ..Default::default()
        };
        assert!(rect.is_xor());
        assert_eq!(FillRect::default().rop, DEFAULT_ROP);
    }
}
