//! TEAM_501: Pixel clock conversions and derived display rates
//!
//! `fb_var_screeninfo` stores the pixel clock as a period in picoseconds and
//! every other timing in pixel clocks. This module only reads those values;
//! it never invents a mode.

use crate::screeninfo::VarScreenInfo;

/// `PICOS2KHZ(a)`: pixel period in picoseconds to clock in kHz.
///
/// Returns `None` for a zero period instead of dividing by zero.
pub const fn picos_to_khz(picos: u32) -> Option<u32> {
    if picos == 0 {
        None
    } else {
        Some(1_000_000_000 / picos)
    }
}

/// `KHZ2PICOS(a)`: clock in kHz to pixel period in picoseconds.
pub const fn khz_to_picos(khz: u32) -> Option<u32> {
    if khz == 0 {
        None
    } else {
        Some(1_000_000_000 / khz)
    }
}

const PICOS_PER_SEC: u64 = 1_000_000_000_000;

/// Rates derived from a mode's timing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Pixel clock in Hz
    pub pixel_clock_hz: u64,
    /// left_margin + xres + right_margin + hsync_len
    pub htotal: u32,
    /// upper_margin + yres + lower_margin + vsync_len
    pub vtotal: u32,
    /// Line rate in Hz
    pub hsync_hz: u64,
    /// Field rate in millihertz, after interlace/doublescan adjustment
    pub refresh_mhz: u64,
}

impl Timings {
    /// Refresh rate rounded to whole hertz.
    pub const fn refresh_hz(&self) -> u64 {
        (self.refresh_mhz + 500) / 1000
    }
}

impl VarScreenInfo {
    /// Derive line and refresh rates the way `fbset` reports them.
    ///
    /// Interlaced modes scan two fields per frame (rate doubled); doublescan
    /// modes show every line twice (rate halved). `None` when `pixclock` is
    /// zero or a total would be zero.
    pub fn timings(&self) -> Option<Timings> {
        if self.pixclock == 0 {
            return None;
        }
        let htotal = self
            .left_margin
            .checked_add(self.xres)?
            .checked_add(self.right_margin)?
            .checked_add(self.hsync_len)?;
        let vtotal = self
            .upper_margin
            .checked_add(self.yres)?
            .checked_add(self.lower_margin)?
            .checked_add(self.vsync_len)?;
        if htotal == 0 || vtotal == 0 {
            return None;
        }

        let pixel_clock_hz = PICOS_PER_SEC / u64::from(self.pixclock);
        let hsync_hz = pixel_clock_hz / u64::from(htotal);
        let mut refresh_mhz = pixel_clock_hz * 1000 / (u64::from(htotal) * u64::from(vtotal));
        if self.is_interlaced() {
            refresh_mhz *= 2;
        }
        if self.is_double_scan() {
            refresh_mhz /= 2;
        }

        Some(Timings {
            pixel_clock_hz,
            htotal,
            vtotal,
            hsync_hz,
            refresh_mhz,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FB_VMODE_DOUBLE, FB_VMODE_INTERLACED};

    /// VESA 640x480@60: 25.175 MHz, 800x525 totals
    fn vga() -> VarScreenInfo {
        VarScreenInfo {
            xres: 640,
            yres: 480,
            pixclock: 39_722,
            left_margin: 48,
            right_margin: 16,
            upper_margin: 33,
            lower_margin: 10,
            hsync_len: 96,
            vsync_len: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_picos_khz() {
        assert_eq!(picos_to_khz(39_722), Some(25_174));
        assert_eq!(khz_to_picos(25_175), Some(39_721));
        assert_eq!(picos_to_khz(0), None);
        assert_eq!(khz_to_picos(0), None);
    }

    #[test]
    fn test_vga_timings() {
        let expected = Timings {
            pixel_clock_hz: 25_174_966,
            htotal: 800,
            vtotal: 525,
            hsync_hz: 31_468,
            refresh_mhz: 59_940,
        };
        assert_eq!(vga().timings(), Some(expected));
        assert_eq!(expected.refresh_hz(), 60);
    }

    #[test]
    fn test_interlace_and_doublescan() {
        let refresh = |var: VarScreenInfo| var.timings().map(|t| t.refresh_mhz);
        assert_eq!(refresh(vga()), Some(59_940));

        let mut laced = vga();
        laced.vmode = FB_VMODE_INTERLACED;
        assert_eq!(refresh(laced), Some(119_880));

        let mut dbl = vga();
        dbl.vmode = FB_VMODE_DOUBLE;
        assert_eq!(refresh(dbl), Some(29_970));
    }

    #[test]
    fn test_missing_timings() {
        let mut var = vga();
        var.pixclock = 0;
        assert_eq!(var.timings(), None);

        assert_eq!(VarScreenInfo { pixclock: 1, ..Default::default() }.timings(), None);
    }

    #[test]
    fn test_overflowing_totals() {
        let mut var = vga();
        var.hsync_len = u32::MAX;
        assert_eq!(var.timings(), None);
    }
}
