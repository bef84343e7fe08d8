use std::fmt;

/// A named screen in the navigation graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Destination {
    ScreenA,
    ScreenB,
    ScreenC,
}

impl Destination {
    /// Every destination, in forward order.
    pub const ALL: [Destination; 3] = [Self::ScreenA, Self::ScreenB, Self::ScreenC];

    /// Where the back-stack starts.
    pub const START: Destination = Self::ScreenA;

    /// Stable routing key.
    pub fn route(self) -> &'static str {
        match self {
            Self::ScreenA => "screenA",
            Self::ScreenB => "screenB",
            Self::ScreenC => "screenC",
        }
    }

    /// The destination the "Next" button leads to, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::ScreenA => Some(Self::ScreenB),
            Self::ScreenB => Some(Self::ScreenC),
            Self::ScreenC => None,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_distinct() {
        let routes: Vec<_> = Destination::ALL.iter().map(|d| d.route()).collect();
        assert_eq!(routes, ["screenA", "screenB", "screenC"]);
    }

    #[test]
    fn forward_path_is_linear() {
        assert_eq!(Destination::START.next(), Some(Destination::ScreenB));
        assert_eq!(Destination::ScreenB.next(), Some(Destination::ScreenC));
        assert_eq!(Destination::ScreenC.next(), None);
    }

    #[test]
    fn display_uses_route() {
        assert_eq!(Destination::ScreenB.to_string(), "screenB");
    }
}
