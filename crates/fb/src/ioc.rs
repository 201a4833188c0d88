//! TEAM_501: ioctl request number encoding (`<asm-generic/ioctl.h>`)
//!
//! A request packs four fields, low to high: number (8 bits), type (8 bits),
//! argument size, and direction. powerpc, mips and sparc use a 13-bit size
//! field and a 3-bit direction field with different direction values.
//!
//! `WRITE` means userland writes and the kernel reads; `READ` is the reverse.

use core::mem::size_of;

// ============================================================================
// Layout parameters
// ============================================================================

pub const IOC_NRBITS: u32 = 8;
pub const IOC_TYPEBITS: u32 = 8;

#[cfg(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64"
))]
mod layout {
    pub const IOC_SIZEBITS: u32 = 13;
    pub const IOC_DIRBITS: u32 = 3;
    pub const IOC_NONE: u32 = 1;
    pub const IOC_READ: u32 = 2;
    pub const IOC_WRITE: u32 = 4;
}

#[cfg(not(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64"
)))]
mod layout {
    pub const IOC_SIZEBITS: u32 = 14;
    pub const IOC_DIRBITS: u32 = 2;
    pub const IOC_NONE: u32 = 0;
    pub const IOC_WRITE: u32 = 1;
    pub const IOC_READ: u32 = 2;
}

pub use layout::{IOC_DIRBITS, IOC_NONE, IOC_READ, IOC_SIZEBITS, IOC_WRITE};

pub const IOC_NRMASK: u32 = (1 << IOC_NRBITS) - 1;
pub const IOC_TYPEMASK: u32 = (1 << IOC_TYPEBITS) - 1;
pub const IOC_SIZEMASK: u32 = (1 << IOC_SIZEBITS) - 1;
pub const IOC_DIRMASK: u32 = (1 << IOC_DIRBITS) - 1;

pub const IOC_NRSHIFT: u32 = 0;
pub const IOC_TYPESHIFT: u32 = IOC_NRSHIFT + IOC_NRBITS;
pub const IOC_SIZESHIFT: u32 = IOC_TYPESHIFT + IOC_TYPEBITS;
pub const IOC_DIRSHIFT: u32 = IOC_SIZESHIFT + IOC_SIZEBITS;

// ============================================================================
// Encoding
// ============================================================================

/// `_IOC(dir, type, nr, size)`.
///
/// Panics (at compile time when used in a `const`) if any field overflows
/// its slot.
pub const fn ioc(dir: u32, ty: u32, nr: u32, size: usize) -> u32 {
    assert!(dir <= IOC_DIRMASK, "ioctl direction out of range");
    assert!(ty <= IOC_TYPEMASK, "ioctl type out of range");
    assert!(nr <= IOC_NRMASK, "ioctl number out of range");
    assert!(size <= IOC_SIZEMASK as usize, "ioctl argument too large");

    (dir << IOC_DIRSHIFT)
        | (ty << IOC_TYPESHIFT)
        | (nr << IOC_NRSHIFT)
        | ((size as u32) << IOC_SIZESHIFT)
}

/// `_IO(type, nr)`: no argument.
pub const fn io(ty: u8, nr: u8) -> u32 {
    ioc(IOC_NONE, ty as u32, nr as u32, 0)
}

/// `_IOR(type, nr, T)`: kernel writes a `T` to userland.
pub const fn ior<T>(ty: u8, nr: u8) -> u32 {
    ioc(IOC_READ, ty as u32, nr as u32, size_of::<T>())
}

/// `_IOW(type, nr, T)`: kernel reads a `T` from userland.
pub const fn iow<T>(ty: u8, nr: u8) -> u32 {
    ioc(IOC_WRITE, ty as u32, nr as u32, size_of::<T>())
}

/// `_IOWR(type, nr, T)`: both directions.
pub const fn iowr<T>(ty: u8, nr: u8) -> u32 {
    ioc(IOC_READ | IOC_WRITE, ty as u32, nr as u32, size_of::<T>())
}

// ============================================================================
// Decoding
// ============================================================================

/// `_IOC_DIR(nr)`
pub const fn ioc_dir(request: u32) -> u32 {
    (request >> IOC_DIRSHIFT) & IOC_DIRMASK
}

/// `_IOC_TYPE(nr)`
pub const fn ioc_type(request: u32) -> u32 {
    (request >> IOC_TYPESHIFT) & IOC_TYPEMASK
}

/// `_IOC_NR(nr)`
pub const fn ioc_nr(request: u32) -> u32 {
    (request >> IOC_NRSHIFT) & IOC_NRMASK
}

/// `_IOC_SIZE(nr)`
pub const fn ioc_size(request: u32) -> u32 {
    (request >> IOC_SIZESHIFT) & IOC_SIZEMASK
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests: field positions of the generic layout
    #[test]
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    fn test_generic_layout_shifts() {
        assert_eq!(IOC_TYPESHIFT, 8);
        assert_eq!(IOC_SIZESHIFT, 16);
        assert_eq!(IOC_DIRSHIFT, 30);
        assert_eq!(IOC_SIZEMASK, 0x3FFF);
    }

    /// Tests: well-known non-framebuffer requests encode identically to the kernel
    #[test]
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    fn test_known_requests() {
        // TIOCGPTN = _IOR('T', 0x30, unsigned int)
        assert_eq!(ior::<u32>(b'T', 0x30), 0x8004_5430);
        // TIOCSPTLCK = _IOW('T', 0x31, int)
        assert_eq!(iow::<i32>(b'T', 0x31), 0x4004_5431);
        // DRM_IOCTL_MODE_CREATE_DUMB = _IOWR('d', 0xb2, 32-byte struct)
        assert_eq!(iowr::<[u64; 4]>(b'd', 0xb2), 0xC020_64B2);
        // _IO carries no size and no direction on the generic layout
        assert_eq!(io(b'F', 0x20), 0x4620);
    }

    /// Tests: decoding recovers every field
    #[test]
    fn test_decode_roundtrip_fields() {
        let req = iowr::<[u8; 104]>(b'F', 0x08);
        assert_eq!(ioc_dir(req), IOC_READ | IOC_WRITE);
        assert_eq!(ioc_type(req), u32::from(b'F'));
        assert_eq!(ioc_nr(req), 0x08);
        assert_eq!(ioc_size(req), 104);
    }

    /// Tests: a legacy fixed request decodes to no direction and no size
    #[test]
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    fn test_decode_legacy_request() {
        assert_eq!(ioc_dir(0x4600), IOC_NONE);
        assert_eq!(ioc_size(0x4600), 0);
        assert_eq!(ioc_type(0x4600), 0x46);
        assert_eq!(ioc_nr(0x4600), 0);
    }

    /// Tests: oversize argument is rejected
    #[test]
    #[should_panic(expected = "ioctl argument too large")]
    fn test_oversize_argument_panics() {
        let size = IOC_SIZEMASK as usize + 1;
        let _ = ioc(IOC_READ, 0x46, 0, size);
    }
}
