use std::fmt;

#[allow(unused_imports)]
use crate::Rbt;

/// Depth calculates minimum, maximum, average and percentile of sentinel
/// depths in the [`Rbt`] tree. Depth of a sentinel is the number of links
/// between the root and that sentinel.
#[derive(Clone, Default, Debug)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    depths: Vec<u64>, // histogram, indexed by depth
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
        if self.depths.len() <= depth {
            self.depths.resize(depth + 1, 0);
        }
        self.depths[depth] += 1;
    }

    /// Return number of sentinels sampled in [`Rbt`] instance.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum depth of sentinel in [`Rbt`] instance.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum depth of sentinel in [`Rbt`] instance. The deepest
    /// entry sits one link above it.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth of sentinels in [`Rbt`] instance.
    pub fn mean(&self) -> usize {
        if self.samples == 0 {
            0
        } else {
            self.total / self.samples
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth). Returned percentiles from 90, 91 .. 100
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        let (mut acc, mut prev_perc) = (0_u64, 90_u8);
        let iter = self.depths.iter().enumerate().filter(|(_, &n)| n > 0);
        for (depth, samples) in iter {
            acc += *samples;
            let perc = ((acc as f64 / self.samples as f64) * 100_f64) as u8;
            if perc >= prev_perc {
                percentiles.push((perc, depth));
                prev_perc = perc;
            }
        }
        percentiles
    }

    /// Log depth statistics in human readable format.
    pub fn pretty_print(&self, prefix: &str) {
        log::info!(
            "{}depth (min, avg, max): {:?}",
            prefix,
            (self.min, self.mean(), self.max)
        );
        for (perc, depth) in self.percentiles().into_iter() {
            log::info!("{}  {} percentile = {}", prefix, perc, depth);
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ps: Vec<String> = self
            .percentiles()
            .into_iter()
            .map(|(p, d)| format!("{}: {}", p, d))
            .collect();
        write!(
            f,
            "{{ min: {}, mean: {}, max: {}, percentiles: {{ {} }} }}",
            self.min,
            self.mean(),
            self.max,
            ps.join(", ")
        )
    }
}
