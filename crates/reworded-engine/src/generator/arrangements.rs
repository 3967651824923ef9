// Arrangement expansion (all orderings of one subset).
//
// Uses the iterative form of Heap's algorithm: each step after the first
// performs a single swap, so consecutive arrangements differ in exactly
// two slots and no allocation happens after `reset`.

/// Expands a slot sequence into all `r!` orderings.
///
/// Slots holding equal characters are still treated as distinct, so a
/// subset like `['a', 'a']` yields two arrangements that render to the same
/// string. Deduplication is the collector's responsibility.
pub struct ArrangementExpander {
    slots: Vec<char>,
    counters: Vec<usize>,
    index: usize,
    started: bool,
}

impl ArrangementExpander {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            counters: Vec::new(),
            index: 1,
            started: false,
        }
    }

    /// Prepare to expand the given slots, reusing the internal buffers.
    pub fn reset(&mut self, slots: &[char]) {
        self.slots.clear();
        self.slots.extend_from_slice(slots);
        self.counters.clear();
        self.counters.resize(slots.len(), 0);
        self.index = 1;
        self.started = false;
    }

    /// Write the next arrangement into `output`.
    ///
    /// Returns `true` if an arrangement was written, `false` once all of
    /// them have been produced. `output` is cleared before each write.
    pub fn next(&mut self, output: &mut String) -> bool {
        if !self.started {
            self.started = true;
            self.render(output);
            return true;
        }
        let n = self.slots.len();
        while self.index < n {
            let i = self.index;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.slots.swap(0, i);
                } else {
                    self.slots.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.index = 1;
                self.render(output);
                return true;
            }
            self.counters[i] = 0;
            self.index += 1;
        }
        false
    }

    fn render(&self, output: &mut String) {
        output.clear();
        output.extend(self.slots.iter());
    }
}

impl Default for ArrangementExpander {
    fn default() -> Self {
        Self::new()
    }
}
