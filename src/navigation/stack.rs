use crate::navigation::Destination;

/// Ordered list of visited destinations. The top entry is the visible screen.
///
/// The stack is never empty: it starts at [`Destination::START`] and popping
/// the root entry is refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<Destination>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Destination::START)
    }
}

impl NavigationStack {
    pub fn new(start: Destination) -> Self {
        Self {
            entries: vec![start],
        }
    }

    /// Push `destination` and make it current.
    pub fn navigate_to(&mut self, destination: Destination) {
        self.entries.push(destination);
    }

    /// Pop the current destination and return it.
    ///
    /// Returns `None` without touching the stack when only the root remains.
    pub fn navigate_back(&mut self) -> Option<Destination> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop()
    }

    pub fn current(&self) -> Destination {
        // Non-empty by construction.
        self.entries
            .last()
            .copied()
            .unwrap_or(Destination::START)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn entries(&self) -> &[Destination] {
        &self.entries
    }
}
