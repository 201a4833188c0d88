//! AArch64 syscall primitive
//!
//! Uses `svc #0` instruction with x8 for syscall number and x0-x2 for arguments.

/// Syscall with 3 arguments
///
/// # Safety
///
/// Pointer arguments must be valid for whatever the kernel reads or writes
/// for syscall `nr`.
#[inline(always)]
pub unsafe fn syscall3(nr: u64, a0: u64, a1: u64, a2: u64) -> i64 {
    let ret: i64;
    // SAFETY: `svc #0` traps into the kernel; x0 carries the result back.
    unsafe {
        core::arch::asm!(
            "svc #0",
            in("x8") nr,
            inlateout("x0") a0 => ret,
            in("x1") a1,
            in("x2") a2,
            options(nostack)
        );
    }
    ret
}
