use crate::config::{LABELS, NUM_TINES, TUNING};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tine {
    pub pitch: u8,
    pub label: &'static str,
    pub pressed: bool,
}

/// Per-tine state, fixed at startup except for the pressed flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TineBank {
    tines: [Tine; NUM_TINES],
}

impl TineBank {
    pub fn new(pitches: [u8; NUM_TINES], labels: [&'static str; NUM_TINES]) -> Self {
        Self {
            tines: core::array::from_fn(|i| Tine {
                pitch: pitches[i],
                label: labels[i],
                pressed: false,
            }),
        }
    }

    pub fn get(&self, pos: usize) -> Option<&Tine> {
        self.tines.get(pos)
    }

    pub fn pitch(&self, pos: usize) -> Option<u8> {
        self.get(pos).map(|tine| tine.pitch)
    }

    /// Returns false when `pos` is not a valid tine index.
    pub fn set_pressed(&mut self, pos: usize, pressed: bool) -> bool {
        match self.tines.get_mut(pos) {
            Some(tine) => {
                tine.pressed = pressed;
                true
            }
            None => false,
        }
    }

    pub fn pressed(&self) -> impl Iterator<Item = usize> + '_ {
        self.tines
            .iter()
            .enumerate()
            .filter(|(_, tine)| tine.pressed)
            .map(|(pos, _)| pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tine> {
        self.tines.iter()
    }

    pub fn len(&self) -> usize {
        self.tines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tines.is_empty()
    }
}

impl Default for TineBank {
    fn default() -> Self {
        Self::new(TUNING, LABELS)
    }
}
