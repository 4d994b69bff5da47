/// One pool entry. Inactive slots keep their last value around so they can be
/// reused without reallocating
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slot<T> {
    pub item: T,
    pub active: bool
}

/// Fixed capacity arena of `N` items with "allocate free slot / release slot" semantics
#[derive(Clone, Debug)]
pub struct Pool<T, const N: usize> {
    slots: [Slot<T>; N]
}

impl<T, const N: usize> Pool<T, N> {
    pub fn from_fn(active: bool, mut f: impl FnMut(usize) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|idx| Slot { item: f(idx), active })
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Activates the first free slot. Returns `None` when every slot is taken
    pub fn allocate(&mut self) -> Option<(usize, &mut T)> {
        let (idx, slot) = self.slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| !slot.active)?;
        slot.active = true;
        Some((idx, &mut slot.item))
    }

    pub fn release(&mut self, idx: usize) {
        if let Some(slot) = self.slots.get_mut(idx) {
            slot.active = false;
        }
    }

    pub fn is_active(&self, idx: usize) -> bool {
        self.slots.get(idx).map_or(false, |slot| slot.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).map(|slot| &slot.item)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx).map(|slot| &mut slot.item)
    }

    pub fn get_active_mut(&mut self, idx: usize) -> Option<&mut T> {
        match self.slots.get_mut(idx) {
            Some(slot) if slot.active => Some(&mut slot.item),
            _ => None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=&T> {
        self.slots.iter().map(|slot| &slot.item)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item=&mut T> {
        self.slots.iter_mut().map(|slot| &mut slot.item)
    }

    pub fn iter_active(&self) -> impl Iterator<Item=&T> {
        self.slots
            .iter()
            .filter(|slot| slot.active)
            .map(|slot| &slot.item)
    }
}
