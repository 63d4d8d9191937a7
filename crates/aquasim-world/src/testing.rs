//! Scripted random source for deterministic tests.

use rand::RngCore;
use std::collections::VecDeque;

const F64_PRECISION: u32 = 53;

/// Replays a fixed queue of draws.
///
/// `rng.gen::<f64>()` returns the scripted samples exactly (for values that
/// fit in 53 bits of fraction) and `rng.gen::<bool>()` returns the scripted
/// flags. Panics when the script runs dry so a test never silently draws
/// more than it planned.
pub struct ScriptedRng {
    words: VecDeque<u64>,
}

impl ScriptedRng {
    pub fn new(samples: &[f64]) -> Self {
        let mut rng = Self {
            words: VecDeque::new(),
        };
        rng.push_samples(samples);
        rng
    }

    pub fn with_bools(mut self, flags: &[bool]) -> Self {
        self.words
            .extend(flags.iter().map(|&flag| if flag { 1u64 << 63 } else { 0 }));
        self
    }

    pub fn push_samples(&mut self, samples: &[f64]) {
        for &sample in samples {
            assert!((0.0..1.0).contains(&sample), "sample {sample} outside [0, 1)");
            let mantissa = (sample * (1u64 << F64_PRECISION) as f64) as u64;
            self.words.push_back(mantissa << (64 - F64_PRECISION));
        }
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.words
            .pop_front()
            .expect("scripted generator exhausted")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_replays_samples_exactly() {
        let mut rng = ScriptedRng::new(&[0.0, 0.5, 0.7, 0.8, 0.25]);
        assert_eq!(rng.gen::<f64>(), 0.0);
        assert_eq!(rng.gen::<f64>(), 0.5);
        assert_eq!(rng.gen::<f64>(), 0.7);
        assert_eq!(rng.gen::<f64>(), 0.8);
        assert_eq!(rng.gen::<f64>(), 0.25);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_replays_flags() {
        let mut rng = ScriptedRng::new(&[]).with_bools(&[true, false, true]);
        assert!(rng.gen::<bool>());
        assert!(!rng.gen::<bool>());
        assert!(rng.gen::<bool>());
    }
}
