//! x86_64 syscall primitive
//!
//! Uses `syscall` instruction with:
//! - rax: syscall number (input), return value (output)
//! - rdi, rsi, rdx: arguments 1-3
//! - rcx, r11: clobbered by syscall instruction

/// Syscall with 3 arguments
///
/// # Safety
///
/// Pointer arguments must be valid for whatever the kernel reads or writes
/// for syscall `nr`.
#[inline(always)]
pub unsafe fn syscall3(nr: u64, a0: u64, a1: u64, a2: u64) -> i64 {
    let ret: i64;
    // SAFETY: `syscall` is valid from ring 3. rcx/r11 are declared clobbered
    // per the x86_64 Linux ABI. Memory validity is the caller's contract.
    unsafe {
        core::arch::asm!(
            "syscall",
            inlateout("rax") nr => ret,
            in("rdi") a0,
            in("rsi") a1,
            in("rdx") a2,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack)
        );
    }
    ret
}
