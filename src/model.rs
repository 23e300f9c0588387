/// A color identifier. Non-negative and unbounded; rendering maps ids into a
/// finite symbol/color palette with modulo, the core never interprets them.
pub type Unit = u32;

/// A capacity-bounded stack of colored units. The top of the vial is the end
/// of the sequence. The capacity itself is board-wide (`Board::vial_size`),
/// so a `Vial` on its own is just the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vial {
    units: Vec<Unit>,
}

impl Vial {
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    pub fn from_units(units: Vec<Unit>) -> Self {
        Self { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn top(&self) -> Option<Unit> {
        self.units.last().copied()
    }

    pub fn get_units(&self) -> &[Unit] {
        &self.units
    }

    fn push(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    fn pop(&mut self) -> Option<Unit> {
        self.units.pop()
    }

    /// A vial is solved if it is empty, or completely full of one color.
    fn is_solved(&self, vial_size: usize) -> bool {
        if self.units.is_empty() {
            return true;
        }
        if self.units.len() != vial_size {
            return false;
        }
        let first = self.units[0];
        self.units.iter().all(|&unit| unit == first)
    }
}

/// Mutable access to two distinct vials at once.
fn two_vials_mut(vials: &mut [Vial], a: usize, b: usize) -> (&mut Vial, &mut Vial) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = vials.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = vials.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// An atomic, reversible operation on the board's vial sequence.
///
/// `apply` returns false if the operation had no effect; the board only
/// records actions that returned true, so every history entry is guaranteed
/// to have a real effect to reverse. `undo` may assume the vials are exactly
/// as its own `apply` left them, because the history is unwound in strict
/// LIFO order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Pour {
        from: usize,
        to: usize,
        qty_moved: usize,
        applied: bool,
    },
    AddEmptyVial,
}

impl Action {
    pub fn pour(from: usize, to: usize) -> Self {
        Action::Pour {
            from,
            to,
            qty_moved: 0,
            applied: false,
        }
    }

    /// Both indices are trusted to be in bounds; the board checks them before
    /// constructing a pour, and an out-of-range index here is a caller bug.
    fn apply(&mut self, vials: &mut Vec<Vial>, vial_size: usize) -> bool {
        match self {
            Action::Pour {
                from,
                to,
                qty_moved,
                applied,
            } => {
                *applied = true;

                // Pouring a vial into itself can never move anything.
                if *from == *to {
                    return false;
                }

                let (src, dst) = two_vials_mut(vials, *from, *to);

                let Some(color) = src.top() else {
                    return false;
                };

                // Unlike-color pours are forbidden.
                if let Some(top) = dst.top() {
                    if top != color {
                        return false;
                    }
                }

                // Move the maximal same-colored run, bounded by the
                // destination's remaining capacity.
                while dst.len() < vial_size && src.top() == Some(color) {
                    if let Some(unit) = src.pop() {
                        dst.push(unit);
                        *qty_moved += 1;
                    }
                }

                *qty_moved > 0
            }
            Action::AddEmptyVial => {
                vials.push(Vial::new());
                true
            }
        }
    }

    /// Reverses a prior successful `apply`.
    ///
    /// Panics if called on a pour that was never applied. That is a contract
    /// violation on the caller's part: unapplied actions never enter the
    /// history and so never reach the normal undo flow.
    fn undo(&self, vials: &mut Vec<Vial>) {
        match self {
            Action::Pour {
                from,
                to,
                qty_moved,
                applied,
            } => {
                assert!(*applied, "cannot undo a pour that was never applied");
                if *qty_moved == 0 {
                    return;
                }
                let (src, dst) = two_vials_mut(vials, *from, *to);
                for _ in 0..*qty_moved {
                    if let Some(unit) = dst.pop() {
                        src.push(unit);
                    }
                }
            }
            Action::AddEmptyVial => {
                // Safe under LIFO unwinding: the last vial is the one added.
                vials.pop();
            }
        }
    }
}

/// The puzzle state machine: a sequence of vials, the shared vial capacity,
/// and the history of successfully-applied actions.
///
/// Vial indices are the player-facing identity of a vial, so the sequence
/// order is meaningful. The sequence may grow at runtime (`add_empty_vial`)
/// and only shrinks by undoing such an addition.
#[derive(Clone, Debug, Default)]
pub struct Board {
    vials: Vec<Vial>,
    vial_size: usize,
    history: Vec<Action>,
}

impl Board {
    pub fn new(vial_size: usize, vials: Vec<Vial>) -> Self {
        Self {
            vials,
            vial_size,
            history: Vec::new(),
        }
    }

    pub fn get_vial_size(&self) -> usize {
        self.vial_size
    }

    pub fn get_num_vials(&self) -> usize {
        self.vials.len()
    }

    pub fn is_vial_empty(&self, vial_index: usize) -> bool {
        self.vials[vial_index].is_empty()
    }

    pub fn get_vials(&self) -> &[Vial] {
        &self.vials
    }

    /// Applies the action and records it, unless it had no effect. A no-op
    /// action is discarded so the history never contains anything that undo
    /// could not reverse.
    fn apply_action(&mut self, mut action: Action) {
        if !action.apply(&mut self.vials, self.vial_size) {
            return;
        }
        self.history.push(action);
    }

    /// Pours from one vial into another. A pour that moves nothing is
    /// silently absorbed; the caller never sees a failure.
    pub fn pour(&mut self, from_index: usize, to_index: usize) {
        self.apply_action(Action::pour(from_index, to_index));
    }

    pub fn add_empty_vial(&mut self) {
        self.apply_action(Action::AddEmptyVial);
    }

    /// Reverses the most recently recorded action. No-op if there is none.
    pub fn undo(&mut self) {
        if let Some(action) = self.history.pop() {
            action.undo(&mut self.vials);
        }
    }

    /// The largest color id on the board, 0 if the board holds no units.
    /// Used by rendering for palette sizing, not by the core itself.
    pub fn get_max_color(&self) -> Unit {
        self.vials
            .iter()
            .flat_map(|vial| vial.get_units())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// A board is solved if all of its vials are solved: empty, or full of
    /// only one color. A board with zero vials is trivially solved.
    pub fn is_solved(&self) -> bool {
        self.vials
            .iter()
            .all(|vial| vial.is_solved(self.vial_size))
    }
}
