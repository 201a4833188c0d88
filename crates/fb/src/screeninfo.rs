//! TEAM_501: Fixed and variable screen information
//!
//! `FixScreenInfo` is read-only hardware description (`FBIOGET_FSCREENINFO`).
//! `VarScreenInfo` is the mode the driver is in, and the request format for
//! changing it (`FBIOGET_VSCREENINFO` / `FBIOPUT_VSCREENINFO`).

use core::ffi::c_ulong;
use core::mem::size_of;

use bytemuck::{Pod, Zeroable};

use crate::consts::{
    ActivateFlags, FbType, Rotation, SyncFlags, Visual, VmodeFlags, FB_ACTIVATE_MASK,
    FB_CAP_FOURCC, FB_VMODE_MASK,
};
use crate::error::FbResult;

// ============================================================================
// fb_bitfield
// ============================================================================

/// Position of one colour component inside a pixel value.
///
/// Offsets count from the right of a pixel that is exactly `bits_per_pixel`
/// wide, so `offset` can be used directly as a shift amount. For pseudocolour
/// all components share offset and length, and `1 << length` is the number of
/// palette entries.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Bitfield {
    /// Beginning of bitfield
    pub offset: u32,
    /// Length of bitfield
    pub length: u32,
    /// != 0 : Most significant bit is right
    pub msb_right: u32,
}

impl Bitfield {
    pub const fn new(offset: u32, length: u32) -> Self {
        Self {
            offset,
            length,
            msb_right: 0,
        }
    }

    /// Bits of a pixel value that belong to this component.
    pub fn mask(&self) -> u32 {
        let bits = match self.length {
            0 => return 0,
            len if len >= 32 => u32::MAX,
            len => (1u32 << len) - 1,
        };
        bits.checked_shl(self.offset).unwrap_or(0)
    }

    /// Component value stored in `pixel`, most significant bit first.
    pub fn extract(&self, pixel: u32) -> u32 {
        if self.length == 0 || self.offset >= 32 {
            return 0;
        }
        let raw = (pixel & self.mask()) >> self.offset;
        if self.msb_right != 0 {
            reverse_low_bits(raw, self.length)
        } else {
            raw
        }
    }

    /// `pixel` with this component replaced by `value`. Excess high bits of
    /// `value` are dropped.
    pub fn insert(&self, pixel: u32, value: u32) -> u32 {
        if self.length == 0 || self.offset >= 32 {
            return pixel;
        }
        let value = if self.msb_right != 0 {
            reverse_low_bits(value, self.length)
        } else {
            value
        };
        let mask = self.mask();
        (pixel & !mask) | ((value << self.offset) & mask)
    }
}

fn reverse_low_bits(value: u32, len: u32) -> u32 {
    if len >= 32 {
        value.reverse_bits()
    } else {
        value.reverse_bits() >> (32 - len)
    }
}

// ============================================================================
// fb_fix_screeninfo
// ============================================================================

/// `struct fb_fix_screeninfo`
///
/// `smem_start` and `mmio_start` are `unsigned long`, so the struct is 80 bytes
/// on 64-bit targets and 68 bytes on 32-bit ones.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct FixScreenInfo {
    /// Identification string eg "TT Builtin"
    pub id: [u8; 16],
    /// Start of frame buffer mem (physical address)
    pub smem_start: c_ulong,
    /// Length of frame buffer mem
    pub smem_len: u32,
    /// See FB_TYPE_*
    pub type_: u32,
    /// Interleave for interleaved Planes
    pub type_aux: u32,
    /// See FB_VISUAL_*
    pub visual: u32,
    /// zero if no hardware panning
    pub xpanstep: u16,
    /// zero if no hardware panning
    pub ypanstep: u16,
    /// zero if no hardware ywrap
    pub ywrapstep: u16,
    /// length of a line in bytes
    pub line_length: u32,
    /// Start of Memory Mapped I/O (physical address)
    pub mmio_start: c_ulong,
    /// Length of Memory Mapped I/O
    pub mmio_len: u32,
    /// Indicate to driver which specific chip/card we have
    pub accel: u32,
    /// see FB_CAP_*
    pub capabilities: u16,
    /// Reserved for future compatibility
    pub reserved: [u16; 2],
}

impl FixScreenInfo {
    /// Driver identification up to the first NUL, if it is valid UTF-8.
    pub fn id_str(&self) -> Option<&str> {
        let len = self.id.iter().position(|&b| b == 0).unwrap_or(self.id.len());
        core::str::from_utf8(&self.id[..len]).ok()
    }

    pub fn fb_type(&self) -> FbResult<FbType> {
        FbType::try_from(self.type_)
    }

    pub fn visual(&self) -> FbResult<Visual> {
        Visual::try_from(self.visual)
    }

    pub fn supports_fourcc(&self) -> bool {
        self.capabilities & FB_CAP_FOURCC != 0
    }
}

// ============================================================================
// fb_var_screeninfo
// ============================================================================

/// `struct fb_var_screeninfo`
///
/// Timing fields are in pixclocks, except `pixclock` itself which is the pixel
/// period in picoseconds.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct VarScreenInfo {
    /// visible resolution
    pub xres: u32,
    pub yres: u32,
    /// virtual resolution
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    /// offset from virtual to visible
    pub xoffset: u32,
    pub yoffset: u32,

    /// guess what
    pub bits_per_pixel: u32,
    /// 0 = color, 1 = grayscale, >1 = FOURCC
    pub grayscale: u32,
    /// bitfield in fb mem if true color, else only length is significant
    pub red: Bitfield,
    pub green: Bitfield,
    pub blue: Bitfield,
    /// transparency
    pub transp: Bitfield,

    /// != 0 Non standard pixel format
    pub nonstd: u32,

    /// see FB_ACTIVATE_*
    pub activate: u32,

    /// height of picture in mm
    pub height: u32,
    /// width of picture in mm
    pub width: u32,

    /// (OBSOLETE) see fb_info.flags
    pub accel_flags: u32,

    /// pixel clock in ps (pico seconds)
    pub pixclock: u32,
    /// time from sync to picture
    pub left_margin: u32,
    /// time from picture to sync
    pub right_margin: u32,
    /// time from sync to picture
    pub upper_margin: u32,
    pub lower_margin: u32,
    /// length of horizontal sync
    pub hsync_len: u32,
    /// length of vertical sync
    pub vsync_len: u32,
    /// see FB_SYNC_*
    pub sync: u32,
    /// see FB_VMODE_*
    pub vmode: u32,
    /// angle we rotate counter clockwise
    pub rotate: u32,
    /// colorspace for FOURCC-based modes
    pub colorspace: u32,
    /// Reserved for future compatibility
    pub reserved: [u32; 4],
}

impl VarScreenInfo {
    /// Copy of every meaningful field.
    ///
    /// The obsolete `accel_flags` word and the `reserved` words are left zero,
    /// so the copy is safe to hand back to `FBIOPUT_VSCREENINFO` as a fresh
    /// request.
    pub fn duplicate(&self) -> Self {
        Self {
            xres: self.xres,
            yres: self.yres,
            xres_virtual: self.xres_virtual,
            yres_virtual: self.yres_virtual,
            xoffset: self.xoffset,
            yoffset: self.yoffset,
            bits_per_pixel: self.bits_per_pixel,
            grayscale: self.grayscale,
            red: self.red,
            green: self.green,
            blue: self.blue,
            transp: self.transp,
            nonstd: self.nonstd,
            activate: self.activate,
            height: self.height,
            width: self.width,
            accel_flags: 0,
            pixclock: self.pixclock,
            left_margin: self.left_margin,
            right_margin: self.right_margin,
            upper_margin: self.upper_margin,
            lower_margin: self.lower_margin,
            hsync_len: self.hsync_len,
            vsync_len: self.vsync_len,
            sync: self.sync,
            vmode: self.vmode,
            rotate: self.rotate,
            colorspace: self.colorspace,
            reserved: [0; 4],
        }
    }

    /// Bytes one pixel occupies, rounded up.
    pub const fn bytes_per_pixel(&self) -> u32 {
        self.bits_per_pixel.div_ceil(8)
    }

    /// `grayscale` holds a V4L2 FOURCC instead of a colour/grey switch.
    pub const fn is_fourcc(&self) -> bool {
        self.grayscale > 1
    }

    /// FOURCC code as its four ASCII bytes.
    pub const fn fourcc(&self) -> Option<[u8; 4]> {
        if self.is_fourcc() {
            Some(self.grayscale.to_le_bytes())
        } else {
            None
        }
    }

    /// Scan mode in the low byte of `vmode` (`FB_VMODE_MASK`).
    pub const fn scan_mode(&self) -> u32 {
        self.vmode & FB_VMODE_MASK
    }

    pub const fn vmode_flags(&self) -> VmodeFlags {
        VmodeFlags::from_bits_truncate(self.vmode)
    }

    pub const fn is_interlaced(&self) -> bool {
        self.vmode & VmodeFlags::INTERLACED.bits() != 0
    }

    pub const fn is_double_scan(&self) -> bool {
        self.vmode & VmodeFlags::DOUBLE.bits() != 0
    }

    pub const fn sync_flags(&self) -> SyncFlags {
        SyncFlags::from_bits_truncate(self.sync)
    }

    /// When the request applies (`FB_ACTIVATE_NOW`, `_NXTOPEN`, `_TEST`).
    pub const fn activate_mode(&self) -> u32 {
        self.activate & FB_ACTIVATE_MASK
    }

    pub const fn activate_flags(&self) -> ActivateFlags {
        ActivateFlags::from_bits_truncate(self.activate)
    }

    /// Set the activation mode while keeping the flag bits.
    pub fn set_activate(&mut self, mode: u32, flags: ActivateFlags) {
        self.activate = (mode & FB_ACTIVATE_MASK) | flags.bits();
    }

    pub fn rotation(&self) -> FbResult<Rotation> {
        Rotation::try_from(self.rotate)
    }
}

// Layouts are fixed by the kernel ABI.
const _: () = assert!(size_of::<Bitfield>() == 12);
const _: () = assert!(size_of::<VarScreenInfo>() == 160);
#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<FixScreenInfo>() == 80);
#[cfg(target_pointer_width = "32")]
const _: () = assert!(size_of::<FixScreenInfo>() == 68);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FB_ACTIVATE_TEST, FB_VMODE_INTERLACED, FB_VMODE_YWRAP};

    fn rgb565() -> VarScreenInfo {
        VarScreenInfo {
            xres: 320,
            yres: 240,
            xres_virtual: 320,
            yres_virtual: 480,
            bits_per_pixel: 16,
            red: Bitfield::new(11, 5),
            green: Bitfield::new(5, 6),
            blue: Bitfield::new(0, 5),
            ..Default::default()
        }
    }

    #[test]
    fn test_bitfield_mask() {
        assert_eq!(Bitfield::new(11, 5).mask(), 0xF800);
        assert_eq!(Bitfield::new(0, 32).mask(), u32::MAX);
        assert_eq!(Bitfield::new(24, 8).mask(), 0xFF00_0000);
        assert_eq!(Bitfield::new(5, 0).mask(), 0);
    }

    #[test]
    fn test_bitfield_extract_insert() {
        let var = rgb565();
        let pixel = var.red.insert(0, 0x1F);
        let pixel = var.green.insert(pixel, 0x01);
        let pixel = var.blue.insert(pixel, 0x10);
        assert_eq!(pixel, 0xF830);
        assert_eq!(var.red.extract(pixel), 0x1F);
        assert_eq!(var.green.extract(pixel), 0x01);
        assert_eq!(var.blue.extract(pixel), 0x10);
    }

    #[test]
    fn test_bitfield_insert_truncates_value() {
        let field = Bitfield::new(4, 4);
        assert_eq!(field.insert(0xFFFF_FFFF, 0x123), 0xFFFF_FF3F);
    }

    #[test]
    fn test_bitfield_msb_right() {
        let field = Bitfield {
            offset: 0,
            length: 4,
            msb_right: 1,
        };
        // 0b0001 stored with reversed bit order lands as 0b1000
        assert_eq!(field.insert(0, 0b0001), 0b1000);
        assert_eq!(field.extract(0b1000), 0b0001);
    }

    /// Tests: copy keeps every named field and drops obsolete/reserved words
    #[test]
    fn test_duplicate() {
        let mut var = rgb565();
        var.pixclock = 39_721;
        var.left_margin = 48;
        var.colorspace = 7;
        var.accel_flags = 1;
        var.reserved = [1, 2, 3, 4];

        let copy = var.duplicate();
        assert_eq!(copy.xres, 320);
        assert_eq!(copy.yres_virtual, 480);
        assert_eq!(copy.green, Bitfield::new(5, 6));
        assert_eq!(copy.pixclock, 39_721);
        assert_eq!(copy.left_margin, 48);
        assert_eq!(copy.colorspace, 7);
        assert_eq!(copy.accel_flags, 0);
        assert_eq!(copy.reserved, [0; 4]);

        var.accel_flags = 0;
        var.reserved = [0; 4];
        assert_eq!(copy, var);
    }

    #[test]
    fn test_bytes_per_pixel_rounds_up() {
        let mut var = rgb565();
        assert_eq!(var.bytes_per_pixel(), 2);
        var.bits_per_pixel = 1;
        assert_eq!(var.bytes_per_pixel(), 1);
        var.bits_per_pixel = 24;
        assert_eq!(var.bytes_per_pixel(), 3);
    }

    #[test]
    fn test_fourcc() {
        let mut var = rgb565();
        assert!(!var.is_fourcc());
        assert_eq!(var.fourcc(), None);
        var.grayscale = 1;
        assert!(!var.is_fourcc());
        var.grayscale = u32::from_le_bytes(*b"NV12");
        assert_eq!(var.fourcc(), Some(*b"NV12"));
    }

    #[test]
    fn test_vmode_accessors() {
        let mut var = rgb565();
        var.vmode = FB_VMODE_INTERLACED | FB_VMODE_YWRAP;
        assert!(var.is_interlaced());
        assert!(!var.is_double_scan());
        assert_eq!(var.scan_mode(), FB_VMODE_INTERLACED);
        assert!(var.vmode_flags().contains(VmodeFlags::YWRAP));
    }

    #[test]
    fn test_set_activate_keeps_mode_and_flags_apart() {
        let mut var = rgb565();
        var.set_activate(FB_ACTIVATE_TEST, ActivateFlags::FORCE | ActivateFlags::ALL);
        assert_eq!(var.activate_mode(), FB_ACTIVATE_TEST);
        assert_eq!(
            var.activate_flags(),
            ActivateFlags::FORCE | ActivateFlags::ALL
        );
        assert_eq!(var.activate, 2 | 128 | 64);
    }

    #[test]
    fn test_fix_id_str() {
        let mut fix = FixScreenInfo::default();
        fix.id[..10].copy_from_slice(b"TT Builtin");
        assert_eq!(fix.id_str(), Some("TT Builtin"));

        fix.id = *b"0123456789abcdef";
        assert_eq!(fix.id_str(), Some("0123456789abcdef"));

        fix.id[0] = 0xFF;
        assert_eq!(fix.id_str(), None);
    }

    #[test]
    fn test_fix_typed_views() {
        let fix = FixScreenInfo {
            type_: 0,
            visual: 2,
            capabilities: FB_CAP_FOURCC,
            ..Default::default()
        };
        assert_eq!(fix.fb_type(), Ok(FbType::PackedPixels));
        assert_eq!(fix.visual(), Ok(Visual::TrueColor));
        assert!(fix.supports_fourcc());
    }
}
