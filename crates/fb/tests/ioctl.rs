// Integration tests for the framebuffer ioctl wrappers
// These run on the host: no framebuffer is required, only the error paths are
// exercised against descriptors that are not framebuffers.

#[cfg(all(
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod host {
    use std::fs::File;
    use std::io;
    use std::os::fd::AsRawFd;

    use los_fb::*;

    fn dev_null() -> io::Result<File> {
        File::open("/dev/null")
    }

    /// Tests: a character device without fb ioctls reports ENOTTY
    #[test]
    fn test_dev_null_is_not_a_framebuffer() -> io::Result<()> {
        let file = dev_null()?;
        let fd = file.as_raw_fd();

        assert_eq!(get_var_screeninfo(fd), Err(FbError::NotAFramebuffer));
        assert_eq!(get_fix_screeninfo(fd), Err(FbError::NotAFramebuffer));
        assert_eq!(get_vblank(fd), Err(FbError::NotAFramebuffer));
        assert_eq!(blank(fd, BlankLevel::Powerdown), Err(FbError::NotAFramebuffer));
        Ok(())
    }

    /// Tests: requests that write back leave the argument untouched on failure
    #[test]
    fn test_failed_pan_keeps_offsets() -> io::Result<()> {
        let file = dev_null()?;
        let mut var = VarScreenInfo {
            yoffset: 480,
            ..Default::default()
        };
        assert_eq!(
            pan_display(file.as_raw_fd(), &mut var),
            Err(FbError::NotAFramebuffer)
        );
        assert_eq!(var.yoffset, 480);
        Ok(())
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_cmap_requests_on_non_framebuffer() -> io::Result<()> {
        let file = dev_null()?;
        let mut map = ColorMap::grey_ramp(16);
        assert_eq!(get_cmap(file.as_raw_fd(), &mut map), Err(FbError::NotAFramebuffer));
        assert_eq!(put_cmap(file.as_raw_fd(), &map), Err(FbError::NotAFramebuffer));
        assert_eq!(map.get(15).map(|e| e.red), Ok(0xFFFF));
        Ok(())
    }

    #[test]
    fn test_invalid_descriptor() {
        assert_eq!(get_var_screeninfo(-1), Err(FbError::BadFd));
        assert_eq!(put_con2fbmap(-1, Con2FbMap::default()), Err(FbError::BadFd));
    }

    /// Tests: set_cursor with no attached buffers reaches the kernel
    #[test]
    fn test_cursor_on_non_framebuffer() -> io::Result<()> {
        let file = dev_null()?;
        let cursor = Cursor::move_to(10, 10);
        // SAFETY: the cursor carries no data, mask or cmap pointers.
        let res = unsafe { set_cursor(file.as_raw_fd(), &cursor) };
        assert_eq!(res, Err(FbError::NotAFramebuffer));
        Ok(())
    }

    /// Tests: raw requests return errno mapping unchanged
    #[test]
    fn test_ioctl_raw_unknown_request() -> io::Result<()> {
        let file = dev_null()?;
        // SAFETY: FBIOBLANK takes an integer argument.
        let res = unsafe { ioctl_raw(file.as_raw_fd(), FBIOBLANK, 0) };
        assert_eq!(res, Err(FbError::NotAFramebuffer));
        assert_eq!(FbError::NotAFramebuffer.to_errno(), -25);
        Ok(())
    }

    /// Tests: every wrapper is reachable as a method on an open handle
    #[cfg(feature = "std")]
    #[test]
    fn test_extension_trait() -> io::Result<()> {
        let file = dev_null()?;
        assert_eq!(file.var_screeninfo(), Err(FbError::NotAFramebuffer));
        let mut var = VarScreenInfo::default();
        assert_eq!(file.put_var_screeninfo(&mut var), Err(FbError::NotAFramebuffer));
        assert_eq!(file.pan_display(&mut var), Err(FbError::NotAFramebuffer));
        assert_eq!(file.blank(BlankLevel::Unblank), Err(FbError::NotAFramebuffer));
        assert_eq!(file.vblank(), Err(FbError::NotAFramebuffer));
        assert_eq!(file.wait_for_vsync(1), Err(FbError::NotAFramebuffer));
        assert_eq!(file.con2fbmap(1), Err(FbError::NotAFramebuffer));
        assert_eq!(file.put_con2fbmap(Con2FbMap::default()), Err(FbError::NotAFramebuffer));

        let mut map = ColorMap::new(0, 4, false);
        assert_eq!(file.get_cmap(&mut map), Err(FbError::NotAFramebuffer));
        assert_eq!(file.put_cmap(&map), Err(FbError::NotAFramebuffer));

        // SAFETY: the cursor carries no data, mask or cmap pointers.
        let res = unsafe { file.set_cursor(&Cursor::visibility(true)) };
        assert_eq!(res, Err(FbError::NotAFramebuffer));

        let err = file.fix_screeninfo().map_err(io::Error::from);
        assert_eq!(err.map_err(|e| e.raw_os_error()), Err(Some(25)));
        Ok(())
    }
}
