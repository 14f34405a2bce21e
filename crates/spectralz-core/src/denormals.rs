#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const FTZ_DAZ: u32 = (1 << 15) | (1 << 6);

/// Enables flush-to-zero and denormals-are-zero for the lifetime of the guard
/// and restores the previous floating point mode on drop.
pub struct ScopedNoDenormals {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    prev: u32,
}

impl ScopedNoDenormals {
    #[inline]
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[allow(deprecated)]
    pub fn new() -> Self {
        #[cfg(target_arch = "x86")]
        use std::arch::x86::{_mm_getcsr, _mm_setcsr};
        #[cfg(target_arch = "x86_64")]
        use std::arch::x86_64::{_mm_getcsr, _mm_setcsr};

        // SAFETY: SSE is part of the baseline for both targets; only the
        // FTZ/DAZ bits of MXCSR are touched.
        unsafe {
            let prev = _mm_getcsr();
            _mm_setcsr(prev | FTZ_DAZ);
            Self { prev }
        }
    }

    #[inline]
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ScopedNoDenormals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl Drop for ScopedNoDenormals {
    #[allow(deprecated)]
    fn drop(&mut self) {
        #[cfg(target_arch = "x86")]
        use std::arch::x86::_mm_setcsr;
        #[cfg(target_arch = "x86_64")]
        use std::arch::x86_64::_mm_setcsr;

        // SAFETY: restores the register value read in `new`.
        unsafe { _mm_setcsr(self.prev) }
    }
}

#[cfg(all(test, any(target_arch = "x86", target_arch = "x86_64")))]
mod tests {
    use super::*;

    #[allow(deprecated)]
    fn csr() -> u32 {
        #[cfg(target_arch = "x86")]
        use std::arch::x86::_mm_getcsr;
        #[cfg(target_arch = "x86_64")]
        use std::arch::x86_64::_mm_getcsr;
        unsafe { _mm_getcsr() }
    }

    #[test]
    fn guard_sets_and_restores_mode() {
        let before = csr();
        {
            let _guard = ScopedNoDenormals::new();
            assert_eq!(csr() & FTZ_DAZ, FTZ_DAZ);
        }
        assert_eq!(csr(), before);
    }
}
