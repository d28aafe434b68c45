//! Divider-chain configuration, for clock trees where a peripheral clock is
//! derived from the bus clock through cascaded multiplexer/divider units.
//!
//! Rather than dividing the bus clock by every divisor combination, the search
//! runs in the opposite direction: the requested frequency is scaled up
//! through the stages, and any intermediate or final value above the bus
//! clock is pruned. The retained combination is the one whose fully scaled
//! value lands closest to the bus clock from below, ie the largest divisor
//! product the request supports.

use crate::error::{Error, Result};

/// Bus clock reference frequency, in Hz.
pub const BUS_CLOCK: u32 = 16_000_000;

/// Stage 1 divisor options. Sorted descending; index 0 is the strongest
/// reduction, and divisor 1 is pass-through.
const STAGE_1_DIVISORS: [u32; 5] = [16, 8, 4, 2, 1];

/// Stage 2 divisor options.
const STAGE_2_DIVISORS: [u32; 5] = [5, 4, 3, 2, 1];

/// One multiplexer/divider unit: a fixed set of selectable divisors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DividerStage {
    /// Divisor options, sorted descending. Divisor tables describe fixed
    /// hardware, hence `'static`.
    divisors: &'static [u32],
}

impl DividerStage {
    /// `divisors` must be non-empty and sorted descending, with no repeats.
    pub const fn new(divisors: &'static [u32]) -> Self {
        Self { divisors }
    }

    /// The selectable divisors, largest first.
    pub const fn divisors(&self) -> &'static [u32] {
        self.divisors
    }
}

/// The best terminal result found so far: the scaled request it achieves, in
/// Hz, and the divisor index selected in each stage along its path.
struct BestSelection<const N: usize> {
    output: u64,
    indices: [usize; N],
}

/// An ordered cascade of divider stages. Stage 0 is fed by the bus clock; the
/// last stage's output is the one delivered to the peripheral. Stage order is
/// fixed at construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DividerChain<const N: usize> {
    stages: [DividerStage; N],
}

impl<const N: usize> DividerChain<N> {
    pub fn new(stages: [DividerStage; N]) -> Self {
        const { assert!(N >= 1) }
        for stage in &stages {
            assert!(!stage.divisors.is_empty());
            assert!(stage.divisors.windows(2).all(|pair| pair[0] > pair[1]));
        }

        Self { stages }
    }

    /// Find the divisor selection bringing the output frequency closest to
    /// `target` without the scaled request exceeding `limit` at any stage.
    /// Both are in Hz, although any unit works as long as the two match.
    ///
    /// Returns one configuration value per stage, head first, each in
    /// `1..=divisor_count` for that stage: 1 selects the smallest divisor
    /// (pass-through when the table ends in 1), `divisor_count` the largest.
    ///
    /// A `target` above `limit` admits no valid combination: the pre-search
    /// default of every stage at its largest divisor is returned as a
    /// documented fallback, leaving the output clock at its slowest. Only a
    /// zero `target` is an error.
    pub fn compute(&self, target: u32, limit: u32) -> Result<[u8; N]> {
        if target == 0 {
            return Err(Error::InvalidFrequency);
        }

        let mut best = BestSelection {
            output: 0,
            indices: [0; N],
        };
        let mut path = [0_usize; N];
        self.search(0, target as u64, limit as u64, &mut path, &mut best);

        let mut configuration = [0; N];
        for (value, (stage, index)) in configuration
            .iter_mut()
            .zip(self.stages.iter().zip(best.indices))
        {
            *value = (stage.divisors.len() - index) as u8;
        }

        Ok(configuration)
    }

    /// Depth-first walk over the divisor combinations from `depth` onward.
    /// `incoming` is the scaled request arriving at this stage; a candidate
    /// above `limit` overshoots the bus clock and is pruned, along with the
    /// whole subtree below it.
    fn search(
        &self,
        depth: usize,
        incoming: u64,
        limit: u64,
        path: &mut [usize; N],
        best: &mut BestSelection<N>,
    ) {
        let terminal = depth + 1 == N;

        for (index, &divisor) in self.stages[depth].divisors.iter().enumerate() {
            let candidate = incoming * divisor as u64;
            if candidate > limit {
                continue;
            }

            path[depth] = index;
            if terminal {
                // Strict comparison: the first combination reaching a given
                // output wins. Divisors are tried largest-first, so among
                // equal outputs this keeps the one that reduces hardest in
                // the earliest stage.
                if candidate > best.output {
                    best.output = candidate;
                    best.indices = *path;
                }
            } else {
                self.search(depth + 1, candidate, limit, path, best);
            }
        }
    }
}

/// Compute the multiplexer configuration bringing the output clock as close
/// as possible to `expected`, in Hz, for the reference two-stage cascade off
/// the 16 MHz bus clock.
///
/// Returns one configuration value per stage, stage 1 first. Eg
/// `configure_frequency(8_000_000)` returns `[2, 1]`: stage 1 divides by 2,
/// stage 2 passes through.
pub fn configure_frequency(expected: u32) -> Result<[u8; 2]> {
    let chain = DividerChain::new([
        DividerStage::new(&STAGE_1_DIVISORS),
        DividerStage::new(&STAGE_2_DIVISORS),
    ]);

    chain.compute(expected, BUS_CLOCK)
}
