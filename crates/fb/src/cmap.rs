//! TEAM_501: Colour maps (`FBIOGETCMAP` / `FBIOPUTCMAP`)
//!
//! `Cmap` is the raw kernel struct: four pointers to `u16` channel arrays of
//! `len` entries each. `ColorMap` owns those arrays and hands out a `Cmap`
//! that borrows them for the duration of an ioctl.

use core::mem::size_of;
#[cfg(feature = "alloc")]
use core::ptr;

use bytemuck::Zeroable;

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

#[cfg(feature = "alloc")]
use crate::error::{FbError, FbResult};

/// `struct fb_cmap`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroable)]
pub struct Cmap {
    /// First entry
    pub start: u32,
    /// Number of entries
    pub len: u32,
    /// Red values
    pub red: *mut u16,
    pub green: *mut u16,
    pub blue: *mut u16,
    /// transparency, can be NULL
    pub transp: *mut u16,
}

impl Default for Cmap {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Cmap {
    pub fn has_transparency(&self) -> bool {
        !self.transp.is_null()
    }
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<Cmap>() == 40);
#[cfg(target_pointer_width = "32")]
const _: () = assert!(size_of::<Cmap>() == 24);

/// One palette entry, 16 bits per channel as the kernel stores them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CmapEntry {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub transp: u16,
}

impl CmapEntry {
    pub const fn rgb(red: u16, green: u16, blue: u16) -> Self {
        Self {
            red,
            green,
            blue,
            transp: 0,
        }
    }

    /// Widen 8-bit channels to the kernel's 16-bit range (0xAB -> 0xABAB).
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            u16::from_le_bytes([red, red]),
            u16::from_le_bytes([green, green]),
            u16::from_le_bytes([blue, blue]),
        )
    }
}

/// Owned colour map covering palette indices `start..start + len`.
///
/// Invariant: every channel holds exactly `len` entries.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    start: u32,
    red: Vec<u16>,
    green: Vec<u16>,
    blue: Vec<u16>,
    transp: Option<Vec<u16>>,
}

/// Channel length as the kernel's `u32` entry count.
#[cfg(feature = "alloc")]
fn entry_count(len: usize) -> FbResult<u32> {
    u32::try_from(len).map_err(|_| FbError::ColorMapTooLarge)
}

#[cfg(feature = "alloc")]
impl ColorMap {
    /// Zero-filled map of `len` entries.
    pub fn new(start: u32, len: u32, with_transp: bool) -> Self {
        let n = len as usize;
        Self {
            start,
            red: vec![0; n],
            green: vec![0; n],
            blue: vec![0; n],
            transp: with_transp.then(|| vec![0; n]),
        }
    }

    /// Build from existing channel data. All channels must be equally long.
    pub fn from_channels(
        start: u32,
        red: Vec<u16>,
        green: Vec<u16>,
        blue: Vec<u16>,
        transp: Option<Vec<u16>>,
    ) -> FbResult<Self> {
        let n = red.len();
        if green.len() != n || blue.len() != n || transp.as_ref().is_some_and(|t| t.len() != n) {
            return Err(FbError::ChannelLengthMismatch);
        }
        entry_count(n)?;
        Ok(Self {
            start,
            red,
            green,
            blue,
            transp,
        })
    }

    /// Linear grey ramp over `len` entries, as used for `FB_VISUAL_DIRECTCOLOR`
    /// and grayscale pseudocolour modes.
    pub fn grey_ramp(len: u32) -> Self {
        let mut map = Self::new(0, len, false);
        let last = u64::from(len.saturating_sub(1)).max(1);
        for i in 0..len {
            let level = (u64::from(i) * 0xFFFF / last) as u16;
            let n = i as usize;
            map.red[n] = level;
            map.green[n] = level;
            map.blue[n] = level;
        }
        map
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn len(&self) -> u32 {
        self.red.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    pub fn has_transparency(&self) -> bool {
        self.transp.is_some()
    }

    fn slot(&self, index: u32) -> FbResult<usize> {
        index
            .checked_sub(self.start)
            .filter(|&i| i < self.len())
            .map(|i| i as usize)
            .ok_or(FbError::IndexOutOfRange)
    }

    /// Entry for absolute palette index `index`.
    pub fn get(&self, index: u32) -> FbResult<CmapEntry> {
        let i = self.slot(index)?;
        Ok(CmapEntry {
            red: self.red[i],
            green: self.green[i],
            blue: self.blue[i],
            transp: self.transp.as_ref().map_or(0, |t| t[i]),
        })
    }

    /// Store `entry` at absolute palette index `index`. The transparency
    /// channel is ignored when the map has none.
    pub fn set(&mut self, index: u32, entry: CmapEntry) -> FbResult<()> {
        let i = self.slot(index)?;
        self.red[i] = entry.red;
        self.green[i] = entry.green;
        self.blue[i] = entry.blue;
        if let Some(t) = self.transp.as_mut() {
            t[i] = entry.transp;
        }
        Ok(())
    }

    /// Iterate `(index, entry)` pairs in palette order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, CmapEntry)> + '_ {
        (0..self.len()).map(move |i| {
            let n = i as usize;
            (
                self.start.wrapping_add(i),
                CmapEntry {
                    red: self.red[n],
                    green: self.green[n],
                    blue: self.blue[n],
                    transp: self.transp.as_ref().map_or(0, |t| t[n]),
                },
            )
        })
    }

    /// Raw view for the kernel. The pointers are valid while `self` is
    /// mutably borrowed and not reallocated.
    pub fn as_raw(&mut self) -> Cmap {
        Cmap {
            start: self.start,
            len: self.len(),
            red: self.red.as_mut_ptr(),
            green: self.green.as_mut_ptr(),
            blue: self.blue.as_mut_ptr(),
            transp: self
                .transp
                .as_mut()
                .map_or(ptr::null_mut(), |t| t.as_mut_ptr()),
        }
    }

    /// Raw view for requests the kernel only reads (`FBIOPUTCMAP`).
    pub(crate) fn as_raw_readonly(&self) -> Cmap {
        Cmap {
            start: self.start,
            len: self.len(),
            red: self.red.as_ptr().cast_mut(),
            green: self.green.as_ptr().cast_mut(),
            blue: self.blue.as_ptr().cast_mut(),
            transp: self
                .transp
                .as_ref()
                .map_or(ptr::null_mut(), |t| t.as_ptr().cast_mut()),
        }
    }
}
