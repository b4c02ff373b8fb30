use crate::sequence_game::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Transition {
    trigger: Symbol,
    source: usize,
    dest: usize,
}

/// States `matched0..=matchedN` for a prefix of length N: from `matchedK` only the K-th
/// symbol of the prefix leads to `matchedK+1`, every other symbol is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixMachine {
    transitions: Vec<Transition>,
    state: usize,
}

impl PrefixMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_prefix(prefix: &[Symbol]) -> Self {
        let mut machine = Self::new();
        for &symbol in prefix {
            machine.push(symbol);
        }
        machine
    }

    /// Appends one symbol to the prefix and goes back to `matched0`.
    pub fn push(&mut self, symbol: Symbol) {
        let source = self.transitions.len();
        self.transitions.push(Transition {
            trigger: symbol,
            source,
            dest: source + 1,
        });
        self.state = 0;
        debug!(
            "added transition {} from matched{} to matched{}",
            symbol,
            source,
            source + 1
        );
    }

    pub fn state(&self) -> usize {
        self.state
    }

    pub fn terminal(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.state == self.terminal()
    }

    /// Fires the transition for `symbol` from the current state.
    /// Returns false and stays put when there is none.
    pub fn trigger(&mut self, symbol: Symbol) -> bool {
        let next = self
            .transitions
            .iter()
            .find(|t| t.source == self.state && t.trigger == symbol)
            .map(|t| t.dest);

        match next {
            Some(dest) => {
                self.state = dest;
                true
            }
            None => false,
        }
    }

    pub fn state_name(&self) -> String {
        format!("matched{}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_machine_walks_prefix() {
        let mut machine = PrefixMachine::for_prefix(&[2, 0, 1]);
        assert_eq!(3, machine.terminal());
        assert_eq!("matched0", machine.state_name());

        assert!(machine.trigger(2));
        assert!(machine.trigger(0));
        assert!(!machine.is_terminal());
        assert!(machine.trigger(1));
        assert!(machine.is_terminal());
        assert_eq!("matched3", machine.state_name());
    }

    #[test]
    fn test_prefix_machine_ignores_invalid_trigger() {
        let mut machine = PrefixMachine::for_prefix(&[3, 3]);
        assert!(machine.trigger(3));

        assert!(!machine.trigger(1));
        assert_eq!(1, machine.state());
    }

    #[test]
    fn test_terminal_state_has_no_transitions() {
        let mut machine = PrefixMachine::for_prefix(&[0]);
        assert!(machine.trigger(0));

        assert!(!machine.trigger(0));
        assert_eq!(1, machine.state());
    }

    #[test]
    fn test_push_grows_and_resets() {
        let mut machine = PrefixMachine::for_prefix(&[1]);
        assert!(machine.trigger(1));

        machine.push(2);
        assert_eq!(0, machine.state());
        assert_eq!(2, machine.terminal());
        assert!(machine.trigger(1));
        assert!(machine.trigger(2));
        assert!(machine.is_terminal());
    }
}
