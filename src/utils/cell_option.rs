use_prelude!();

use ::core::mem::MaybeUninit;

/// A `Cell<Option<T>>` which can report emptiness without giving the value
/// up. The handoff slot between a stream and its emitter.
pub
struct CellOption<T> /* = */ {
    is_some: Cell<bool>,
    value: Cell<MaybeUninit<T>>,
}

impl<T> CellOption<T> {
    #[allow(bad_style)]
    pub
    const None: Self = Self {
        is_some: Cell::new(false),
        value: Cell::new(MaybeUninit::uninit()),
    };

    pub
    fn take (self: &'_ Self)
      -> Option<T>
    {
        if self.is_some() {
            self.is_some.set(false);
            Some(unsafe {
                // Safety: `is_some` guarantees the value is initialized,
                // and it has just been marked vacant.
                self.value
                    .replace(MaybeUninit::uninit())
                    .assume_init()
            })
        } else {
            None
        }
    }

    pub
    fn set (self: &'_ Self, value: T)
      -> Option<T>
    {
        let prev = self.value.replace(MaybeUninit::new(value));
        if self.is_some() {
            Some(unsafe {
                // Safety: `is_some` guarantees `prev` was initialized.
                prev.assume_init()
            })
        } else {
            self.is_some.set(true);
            None
        }
    }

    #[inline]
    pub
    fn is_some (self: &'_ Self)
      -> bool
    {
        self.is_some.get()
    }
}

/// A resident value must not outlive the slot (an abandoned stream may drop
/// while suspended mid-emit).
impl<T> Drop for CellOption<T> {
    fn drop (self: &'_ mut Self)
    {
        drop(self.take());
    }
}
