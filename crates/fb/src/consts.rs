//! TEAM_501: Enumerated constants from `<linux/fb.h>`
//!
//! Raw `u32` constants keep the kernel names so code ported from C reads the
//! same. Typed views (`FbType`, `Visual`, the `bitflags` sets) sit on top.

use bitflags::bitflags;

use crate::error::FbError;

/// Number of framebuffer minors the kernel supports.
pub const FB_MAX: u32 = 32;

// ============================================================================
// fb_fix_screeninfo.type
// ============================================================================

pub const FB_TYPE_PACKED_PIXELS: u32 = 0; // Packed Pixels
pub const FB_TYPE_PLANES: u32 = 1; // Non interleaved planes
pub const FB_TYPE_INTERLEAVED_PLANES: u32 = 2; // Interleaved planes
pub const FB_TYPE_TEXT: u32 = 3; // Text/attributes
pub const FB_TYPE_VGA_PLANES: u32 = 4; // EGA/VGA planes
pub const FB_TYPE_FOURCC: u32 = 5; // Type identified by a V4L2 FOURCC

// fb_fix_screeninfo.type_aux for FB_TYPE_TEXT
pub const FB_AUX_TEXT_MDA: u32 = 0; // Monochrome text
pub const FB_AUX_TEXT_CGA: u32 = 1; // CGA/EGA/VGA Color text
pub const FB_AUX_TEXT_S3_MMIO: u32 = 2; // S3 MMIO fasttext
pub const FB_AUX_TEXT_MGA_STEP16: u32 = 3; // MGA Millenium I: text, attr, 14 reserved bytes
pub const FB_AUX_TEXT_MGA_STEP8: u32 = 4; // other MGAs:      text, attr,  6 reserved bytes
pub const FB_AUX_TEXT_SVGA_GROUP: u32 = 8; // 8-15: SVGA tileblit compatible modes
pub const FB_AUX_TEXT_SVGA_MASK: u32 = 7; // lower three bits says step
pub const FB_AUX_TEXT_SVGA_STEP2: u32 = 8; // SVGA text mode:  text, attr
pub const FB_AUX_TEXT_SVGA_STEP4: u32 = 9; // SVGA text mode:  text, attr,  2 reserved bytes
pub const FB_AUX_TEXT_SVGA_STEP8: u32 = 10; // SVGA text mode:  text, attr,  6 reserved bytes
pub const FB_AUX_TEXT_SVGA_STEP16: u32 = 11; // SVGA text mode:  text, attr, 14 reserved bytes
pub const FB_AUX_TEXT_SVGA_LAST: u32 = 15; // reserved up to 15

// fb_fix_screeninfo.type_aux for FB_TYPE_VGA_PLANES
pub const FB_AUX_VGA_PLANES_VGA4: u32 = 0; // 16 color planes (EGA/VGA)
pub const FB_AUX_VGA_PLANES_CFB4: u32 = 1; // CFB4 in planes (VGA)
pub const FB_AUX_VGA_PLANES_CFB8: u32 = 2; // CFB8 in planes (VGA)

// ============================================================================
// fb_fix_screeninfo.visual
// ============================================================================

pub const FB_VISUAL_MONO01: u32 = 0; // Monochr. 1=Black 0=White
pub const FB_VISUAL_MONO10: u32 = 1; // Monochr. 1=White 0=Black
pub const FB_VISUAL_TRUECOLOR: u32 = 2; // True color
pub const FB_VISUAL_PSEUDOCOLOR: u32 = 3; // Pseudo color (like atari)
pub const FB_VISUAL_DIRECTCOLOR: u32 = 4; // Direct color
pub const FB_VISUAL_STATIC_PSEUDOCOLOR: u32 = 5; // Pseudo color readonly
pub const FB_VISUAL_FOURCC: u32 = 6; // Visual identified by a V4L2 FOURCC

// ============================================================================
// fb_fix_screeninfo.accel: hardware accelerator identifiers
// ============================================================================

pub const FB_ACCEL_NONE: u32 = 0; // no hardware accelerator
pub const FB_ACCEL_ATARIBLITT: u32 = 1; // Atari Blitter
pub const FB_ACCEL_AMIGABLITT: u32 = 2; // Amiga Blitter
pub const FB_ACCEL_S3_TRIO64: u32 = 3; // Cybervision64 (S3 Trio64)
pub const FB_ACCEL_NCR_77C32BLT: u32 = 4; // RetinaZ3 (NCR 77C32BLT)
pub const FB_ACCEL_S3_VIRGE: u32 = 5; // Cybervision64/3D (S3 ViRGE)
pub const FB_ACCEL_ATI_MACH64GX: u32 = 6; // ATI Mach 64GX family
pub const FB_ACCEL_DEC_TGA: u32 = 7; // DEC 21030 TGA
pub const FB_ACCEL_ATI_MACH64CT: u32 = 8; // ATI Mach 64CT family
pub const FB_ACCEL_ATI_MACH64VT: u32 = 9; // ATI Mach 64CT family VT class
pub const FB_ACCEL_ATI_MACH64GT: u32 = 10; // ATI Mach 64CT family GT class
pub const FB_ACCEL_SUN_CREATOR: u32 = 11; // Sun Creator/Creator3D
pub const FB_ACCEL_SUN_CGSIX: u32 = 12; // Sun cg6
pub const FB_ACCEL_SUN_LEO: u32 = 13; // Sun leo/zx
pub const FB_ACCEL_IMS_TWINTURBO: u32 = 14; // IMS Twin Turbo
pub const FB_ACCEL_3DLABS_PERMEDIA2: u32 = 15; // 3Dlabs Permedia 2
pub const FB_ACCEL_MATROX_MGA2064W: u32 = 16; // Matrox MGA2064W (Millenium)
pub const FB_ACCEL_MATROX_MGA1064SG: u32 = 17; // Matrox MGA1064SG (Mystique)
pub const FB_ACCEL_MATROX_MGA2164W: u32 = 18; // Matrox MGA2164W (Millenium II)
pub const FB_ACCEL_MATROX_MGA2164W_AGP: u32 = 19; // Matrox MGA2164W (Millenium II)
pub const FB_ACCEL_MATROX_MGAG100: u32 = 20; // Matrox G100 (Productiva G100)
pub const FB_ACCEL_MATROX_MGAG200: u32 = 21; // Matrox G200 (Myst, Mill, ...)
pub const FB_ACCEL_SUN_CG14: u32 = 22; // Sun cgfourteen
pub const FB_ACCEL_SUN_BWTWO: u32 = 23; // Sun bwtwo
pub const FB_ACCEL_SUN_CGTHREE: u32 = 24; // Sun cgthree
pub const FB_ACCEL_SUN_TCX: u32 = 25; // Sun tcx
pub const FB_ACCEL_MATROX_MGAG400: u32 = 26; // Matrox G400
pub const FB_ACCEL_NV3: u32 = 27; // nVidia RIVA 128
pub const FB_ACCEL_NV4: u32 = 28; // nVidia RIVA TNT
pub const FB_ACCEL_NV5: u32 = 29; // nVidia RIVA TNT2
pub const FB_ACCEL_CT_6555X: u32 = 30; // C&T 6555x
pub const FB_ACCEL_3DFX_BANSHEE: u32 = 31; // 3Dfx Banshee
pub const FB_ACCEL_ATI_RAGE128: u32 = 32; // ATI Rage128 family
pub const FB_ACCEL_IGS_CYBER2000: u32 = 33; // CyberPro 2000
pub const FB_ACCEL_IGS_CYBER2010: u32 = 34; // CyberPro 2010
pub const FB_ACCEL_IGS_CYBER5000: u32 = 35; // CyberPro 5000
pub const FB_ACCEL_SIS_GLAMOUR: u32 = 36; // SiS 300/630/540
pub const FB_ACCEL_3DLABS_PERMEDIA3: u32 = 37; // 3Dlabs Permedia 3
pub const FB_ACCEL_ATI_RADEON: u32 = 38; // ATI Radeon family
pub const FB_ACCEL_I810: u32 = 39; // Intel 810/815
pub const FB_ACCEL_SIS_GLAMOUR_2: u32 = 40; // SiS 315, 650, 740
pub const FB_ACCEL_SIS_XABRE: u32 = 41; // SiS 330 ("Xabre")
pub const FB_ACCEL_I830: u32 = 42; // Intel 830M/845G/85x/865G
pub const FB_ACCEL_NV_10: u32 = 43; // nVidia Arch 10
pub const FB_ACCEL_NV_20: u32 = 44; // nVidia Arch 20
pub const FB_ACCEL_NV_30: u32 = 45; // nVidia Arch 30
pub const FB_ACCEL_NV_40: u32 = 46; // nVidia Arch 40
pub const FB_ACCEL_XGI_VOLARI_V: u32 = 47; // XGI Volari V3XT, V5, V8
pub const FB_ACCEL_XGI_VOLARI_Z: u32 = 48; // XGI Volari Z7
pub const FB_ACCEL_OMAP1610: u32 = 49; // TI OMAP16xx
pub const FB_ACCEL_TRIDENT_TGUI: u32 = 50; // Trident TGUI
pub const FB_ACCEL_TRIDENT_3DIMAGE: u32 = 51; // Trident 3DImage
pub const FB_ACCEL_TRIDENT_BLADE3D: u32 = 52; // Trident Blade3D
pub const FB_ACCEL_TRIDENT_BLADEXP: u32 = 53; // Trident BladeXP
pub const FB_ACCEL_CIRRUS_ALPINE: u32 = 53; // Cirrus Logic 543x/544x/5480
pub const FB_ACCEL_NEOMAGIC_NM2070: u32 = 90; // NeoMagic NM2070
pub const FB_ACCEL_NEOMAGIC_NM2090: u32 = 91; // NeoMagic NM2090
pub const FB_ACCEL_NEOMAGIC_NM2093: u32 = 92; // NeoMagic NM2093
pub const FB_ACCEL_NEOMAGIC_NM2097: u32 = 93; // NeoMagic NM2097
pub const FB_ACCEL_NEOMAGIC_NM2160: u32 = 94; // NeoMagic NM2160
pub const FB_ACCEL_NEOMAGIC_NM2200: u32 = 95; // NeoMagic NM2200
pub const FB_ACCEL_NEOMAGIC_NM2230: u32 = 96; // NeoMagic NM2230
pub const FB_ACCEL_NEOMAGIC_NM2360: u32 = 97; // NeoMagic NM2360
pub const FB_ACCEL_NEOMAGIC_NM2380: u32 = 98; // NeoMagic NM2380
pub const FB_ACCEL_PXA3XX: u32 = 99; // PXA3xx
pub const FB_ACCEL_SAVAGE4: u32 = 0x80; // S3 Savage4
pub const FB_ACCEL_SAVAGE3D: u32 = 0x81; // S3 Savage3D
pub const FB_ACCEL_SAVAGE3D_MV: u32 = 0x82; // S3 Savage3D-MV
pub const FB_ACCEL_SAVAGE2000: u32 = 0x83; // S3 Savage2000
pub const FB_ACCEL_SAVAGE_MX_MV: u32 = 0x84; // S3 Savage/MX-MV
pub const FB_ACCEL_SAVAGE_MX: u32 = 0x85; // S3 Savage/MX
pub const FB_ACCEL_SAVAGE_IX_MV: u32 = 0x86; // S3 Savage/IX-MV
pub const FB_ACCEL_SAVAGE_IX: u32 = 0x87; // S3 Savage/IX
pub const FB_ACCEL_PROSAVAGE_PM: u32 = 0x88; // S3 ProSavage PM133
pub const FB_ACCEL_PROSAVAGE_KM: u32 = 0x89; // S3 ProSavage KM133
pub const FB_ACCEL_S3TWISTER_P: u32 = 0x8a; // S3 Twister
pub const FB_ACCEL_S3TWISTER_K: u32 = 0x8b; // S3 TwisterK
pub const FB_ACCEL_SUPERSAVAGE: u32 = 0x8c; // S3 Supersavage
pub const FB_ACCEL_PROSAVAGE_DDR: u32 = 0x8d; // S3 ProSavage DDR
pub const FB_ACCEL_PROSAVAGE_DDRK: u32 = 0x8e; // S3 ProSavage DDR-K
pub const FB_ACCEL_PUV3_UNIGFX: u32 = 0xa0; // PKUnity-v3 Unigfx

// ============================================================================
// Capabilities, nonstd, activate
// ============================================================================

/// Device supports FOURCC-based formats.
pub const FB_CAP_FOURCC: u16 = 1;

pub const FB_NONSTD_HAM: u32 = 1; // Hold-And-Modify (HAM)
pub const FB_NONSTD_REV_PIX_IN_B: u32 = 2; // order of pixels in each byte is reversed

pub const FB_ACTIVATE_NOW: u32 = 0; // set values immediately (or vbl)
pub const FB_ACTIVATE_NXTOPEN: u32 = 1; // activate on next open
pub const FB_ACTIVATE_TEST: u32 = 2; // don't set, round up impossible values
pub const FB_ACTIVATE_MASK: u32 = 15;
pub const FB_ACTIVATE_VBL: u32 = 16; // activate values on next vbl
pub const FB_CHANGE_CMAP_VBL: u32 = 32; // change colormap on vbl
pub const FB_ACTIVATE_ALL: u32 = 64; // change all VCs on this fb
pub const FB_ACTIVATE_FORCE: u32 = 128; // force apply even when no change
pub const FB_ACTIVATE_INV_MODE: u32 = 256; // invalidate videomode
pub const FB_ACTIVATE_KD_TEXT: u32 = 512; // for KDSET vt ioctl

/// Obsolete `accel_flags` value; the field is ignored by current kernels.
pub const FB_ACCELF_TEXT: u32 = 1;

// ============================================================================
// Sync, vmode, rotate
// ============================================================================

pub const FB_SYNC_HOR_HIGH_ACT: u32 = 1; // horizontal sync high active
pub const FB_SYNC_VERT_HIGH_ACT: u32 = 2; // vertical sync high active
pub const FB_SYNC_EXT: u32 = 4; // external sync
pub const FB_SYNC_COMP_HIGH_ACT: u32 = 8; // composite sync high active
pub const FB_SYNC_BROADCAST: u32 = 16; // broadcast video timings
pub const FB_SYNC_ON_GREEN: u32 = 32; // sync on green

pub const FB_VMODE_NONINTERLACED: u32 = 0; // non interlaced
pub const FB_VMODE_INTERLACED: u32 = 1; // interlaced
pub const FB_VMODE_DOUBLE: u32 = 2; // double scan
pub const FB_VMODE_ODD_FLD_FIRST: u32 = 4; // interlaced: top line first
pub const FB_VMODE_MASK: u32 = 255;
pub const FB_VMODE_YWRAP: u32 = 256; // ywrap instead of panning
pub const FB_VMODE_SMOOTH_XPAN: u32 = 512; // smooth xpan possible (internally used)
pub const FB_VMODE_CONUPDATE: u32 = 512; // don't update x/yoffset

pub const FB_ROTATE_UR: u32 = 0;
pub const FB_ROTATE_CW: u32 = 1;
pub const FB_ROTATE_UD: u32 = 2;
pub const FB_ROTATE_CCW: u32 = 3;

// ============================================================================
// Blanking
// ============================================================================

pub const VESA_NO_BLANKING: u32 = 0;
pub const VESA_VSYNC_SUSPEND: u32 = 1;
pub const VESA_HSYNC_SUSPEND: u32 = 2;
pub const VESA_POWERDOWN: u32 = 3;

pub const FB_BLANK_UNBLANK: u32 = VESA_NO_BLANKING; // screen: unblanked, hsync: on,  vsync: on
pub const FB_BLANK_NORMAL: u32 = VESA_NO_BLANKING + 1; // screen: blanked,   hsync: on,  vsync: on
pub const FB_BLANK_VSYNC_SUSPEND: u32 = VESA_VSYNC_SUSPEND + 1; // screen: blanked,   hsync: on,  vsync: off
pub const FB_BLANK_HSYNC_SUSPEND: u32 = VESA_HSYNC_SUSPEND + 1; // screen: blanked,   hsync: off, vsync: on
pub const FB_BLANK_POWERDOWN: u32 = VESA_POWERDOWN + 1; // screen: blanked,   hsync: off, vsync: off

// ============================================================================
// fb_vblank.flags
// ============================================================================

pub const FB_VBLANK_VBLANKING: u32 = 0x001; // currently in a vertical blank
pub const FB_VBLANK_HBLANKING: u32 = 0x002; // currently in a horizontal blank
pub const FB_VBLANK_HAVE_VBLANK: u32 = 0x004; // vertical blanks can be detected
pub const FB_VBLANK_HAVE_HBLANK: u32 = 0x008; // horizontal blanks can be detected
pub const FB_VBLANK_HAVE_COUNT: u32 = 0x010; // global retrace counter is available
pub const FB_VBLANK_HAVE_VCOUNT: u32 = 0x020; // the vcount field is valid
pub const FB_VBLANK_HAVE_HCOUNT: u32 = 0x040; // the hcount field is valid
pub const FB_VBLANK_VSYNCING: u32 = 0x080; // currently in a vsync
pub const FB_VBLANK_HAVE_VSYNC: u32 = 0x100; // vertical syncs can be detected

// ============================================================================
// Raster ops, cursor, backlight, console handover
// ============================================================================

pub const ROP_COPY: u32 = 0;
pub const ROP_XOR: u32 = 1;

pub const FB_CUR_SETIMAGE: u16 = 0x01;
pub const FB_CUR_SETPOS: u16 = 0x02;
pub const FB_CUR_SETHOT: u16 = 0x04;
pub const FB_CUR_SETCMAP: u16 = 0x08;
pub const FB_CUR_SETSHAPE: u16 = 0x10;
pub const FB_CUR_SETSIZE: u16 = 0x20;
pub const FB_CUR_SETALL: u16 = 0xFF;

/// Settings for the generic backlight code.
pub const FB_BACKLIGHT_LEVELS: u32 = 128;
pub const FB_BACKLIGHT_MAX: u32 = 0xFF;

pub const FB_ACTIVE: u32 = 0;
pub const FB_REL_REQ: u32 = 1;
pub const FB_INACTIVE: u32 = 2;
pub const FB_ACQ_REQ: u32 = 3;

// ============================================================================
// Typed views
// ============================================================================

/// Generates a `#[repr(u32)]` enum over header constants with a checked
/// `TryFrom<u32>`.
macro_rules! header_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:path
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl TryFrom<u32> for $name {
            type Error = FbError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $(v if v == $value => Ok(Self::$variant),)*
                    other => Err(FbError::UnknownConstant(other)),
                }
            }
        }

        impl From<$name> for u32 {
            fn from(v: $name) -> u32 {
                v as u32
            }
        }
    };
}

header_enum! {
    /// Macropixel layout (`fb_fix_screeninfo.type`).
    pub enum FbType {
        PackedPixels = FB_TYPE_PACKED_PIXELS,
        Planes = FB_TYPE_PLANES,
        InterleavedPlanes = FB_TYPE_INTERLEAVED_PLANES,
        Text = FB_TYPE_TEXT,
        VgaPlanes = FB_TYPE_VGA_PLANES,
        FourCc = FB_TYPE_FOURCC,
    }
}

header_enum! {
    /// Colour model (`fb_fix_screeninfo.visual`).
    pub enum Visual {
        Mono01 = FB_VISUAL_MONO01,
        Mono10 = FB_VISUAL_MONO10,
        TrueColor = FB_VISUAL_TRUECOLOR,
        PseudoColor = FB_VISUAL_PSEUDOCOLOR,
        DirectColor = FB_VISUAL_DIRECTCOLOR,
        StaticPseudoColor = FB_VISUAL_STATIC_PSEUDOCOLOR,
        FourCc = FB_VISUAL_FOURCC,
    }
}

header_enum! {
    /// Counter-clockwise display rotation (`fb_var_screeninfo.rotate`).
    pub enum Rotation {
        Upright = FB_ROTATE_UR,
        Clockwise = FB_ROTATE_CW,
        UpsideDown = FB_ROTATE_UD,
        CounterClockwise = FB_ROTATE_CCW,
    }
}

header_enum! {
    /// Argument to `FBIOBLANK`.
    pub enum BlankLevel {
        Unblank = FB_BLANK_UNBLANK,
        Normal = FB_BLANK_NORMAL,
        VsyncSuspend = FB_BLANK_VSYNC_SUSPEND,
        HsyncSuspend = FB_BLANK_HSYNC_SUSPEND,
        Powerdown = FB_BLANK_POWERDOWN,
    }
}

impl Visual {
    /// Whether pixel values index a palette rather than encode colour.
    pub const fn uses_palette(self) -> bool {
        matches!(
            self,
            Visual::PseudoColor | Visual::StaticPseudoColor | Visual::DirectColor
        )
    }
}

bitflags! {
    /// `fb_var_screeninfo.sync`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SyncFlags: u32 {
        const HOR_HIGH_ACT = FB_SYNC_HOR_HIGH_ACT;
        const VERT_HIGH_ACT = FB_SYNC_VERT_HIGH_ACT;
        const EXT = FB_SYNC_EXT;
        const COMP_HIGH_ACT = FB_SYNC_COMP_HIGH_ACT;
        const BROADCAST = FB_SYNC_BROADCAST;
        const ON_GREEN = FB_SYNC_ON_GREEN;
    }
}

bitflags! {
    /// `fb_var_screeninfo.vmode`
    ///
    /// `SMOOTH_XPAN` and `CONUPDATE` share bit 9; the kernel reads it as
    /// `CONUPDATE` on input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VmodeFlags: u32 {
        const INTERLACED = FB_VMODE_INTERLACED;
        const DOUBLE = FB_VMODE_DOUBLE;
        const ODD_FLD_FIRST = FB_VMODE_ODD_FLD_FIRST;
        const YWRAP = FB_VMODE_YWRAP;
        const SMOOTH_XPAN = FB_VMODE_SMOOTH_XPAN;
        const CONUPDATE = FB_VMODE_CONUPDATE;
    }
}

bitflags! {
    /// Flag bits of `fb_var_screeninfo.activate` above `FB_ACTIVATE_MASK`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ActivateFlags: u32 {
        const VBL = FB_ACTIVATE_VBL;
        const CHANGE_CMAP_VBL = FB_CHANGE_CMAP_VBL;
        const ALL = FB_ACTIVATE_ALL;
        const FORCE = FB_ACTIVATE_FORCE;
        const INV_MODE = FB_ACTIVATE_INV_MODE;
        const KD_TEXT = FB_ACTIVATE_KD_TEXT;
    }
}

bitflags! {
    /// `fb_vblank.flags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VblankFlags: u32 {
        const VBLANKING = FB_VBLANK_VBLANKING;
        const HBLANKING = FB_VBLANK_HBLANKING;
        const HAVE_VBLANK = FB_VBLANK_HAVE_VBLANK;
        const HAVE_HBLANK = FB_VBLANK_HAVE_HBLANK;
        const HAVE_COUNT = FB_VBLANK_HAVE_COUNT;
        const HAVE_VCOUNT = FB_VBLANK_HAVE_VCOUNT;
        const HAVE_HCOUNT = FB_VBLANK_HAVE_HCOUNT;
        const VSYNCING = FB_VBLANK_VSYNCING;
        const HAVE_VSYNC = FB_VBLANK_HAVE_VSYNC;
    }
}

bitflags! {
    /// `fb_cursor.set`: which cursor attributes an `FBIO_CURSOR` call updates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CursorSet: u16 {
        const IMAGE = FB_CUR_SETIMAGE;
        const POS = FB_CUR_SETPOS;
        const HOT = FB_CUR_SETHOT;
        const CMAP = FB_CUR_SETCMAP;
        const SHAPE = FB_CUR_SETSHAPE;
        const SIZE = FB_CUR_SETSIZE;
        const ALL = FB_CUR_SETALL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_levels_follow_vesa() {
        assert_eq!(FB_BLANK_UNBLANK, 0);
        assert_eq!(FB_BLANK_NORMAL, 1);
        assert_eq!(FB_BLANK_VSYNC_SUSPEND, 2);
        assert_eq!(FB_BLANK_HSYNC_SUSPEND, 3);
        assert_eq!(FB_BLANK_POWERDOWN, 4);
    }

    #[test]
    fn test_enum_try_from() {
        assert_eq!(Visual::try_from(2), Ok(Visual::TrueColor));
        assert_eq!(FbType::try_from(5), Ok(FbType::FourCc));
        assert_eq!(Rotation::try_from(3), Ok(Rotation::CounterClockwise));
        assert_eq!(BlankLevel::try_from(4), Ok(BlankLevel::Powerdown));
        assert_eq!(Visual::try_from(7), Err(FbError::UnknownConstant(7)));
        assert_eq!(u32::from(BlankLevel::Normal), FB_BLANK_NORMAL);
    }

    #[test]
    fn test_palette_visuals() {
        assert!(Visual::PseudoColor.uses_palette());
        assert!(Visual::DirectColor.uses_palette());
        assert!(!Visual::TrueColor.uses_palette());
        assert!(!Visual::Mono01.uses_palette());
    }

    /// Tests: shared vmode bit and the aliased accel id
    #[test]
    fn test_aliased_values() {
        assert_eq!(VmodeFlags::SMOOTH_XPAN, VmodeFlags::CONUPDATE);
        assert_eq!(FB_ACCEL_TRIDENT_BLADEXP, FB_ACCEL_CIRRUS_ALPINE);
        assert_eq!(FB_VMODE_YWRAP & FB_VMODE_MASK, 0);
    }

    #[test]
    fn test_cursor_set_all_covers_every_bit() {
        let every = CursorSet::IMAGE
            | CursorSet::POS
            | CursorSet::HOT
            | CursorSet::CMAP
            | CursorSet::SHAPE
            | CursorSet::SIZE;
        assert!(CursorSet::ALL.contains(every));
        assert_eq!(CursorSet::ALL.bits(), 0xFF);
    }

    #[test]
    fn test_activate_flags_above_mask() {
        assert_eq!(ActivateFlags::all().bits() & FB_ACTIVATE_MASK, 0);
    }
}
