use std::ops::{BitAnd, BitOr, BitOrAssign};

/// One of the four boundaries of a [`Window`](crate::cartesian::Window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Top,
    Bottom,
    Right,
    Left,
}

impl Boundary {
    /// The order in which boundaries are picked when clipping a point that violates more than
    /// one of them.
    pub const PRIORITY: [Self; 4] = [Self::Top, Self::Bottom, Self::Right, Self::Left];
}

/// The region code of a point: the set of window boundaries whose half-plane the point lies
/// beyond.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    /// Returns the raw bits of self.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if, and only if, no boundary is violated.
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns true if, and only if, every flag in other is also set in self.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if, and only if, self and other share at least one flag.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the first boundary set in self, following [`Boundary::PRIORITY`].
    pub fn boundary(self) -> Option<Boundary> {
        Boundary::PRIORITY
            .into_iter()
            .find(|&boundary| self.contains(boundary.into()))
    }
}

impl From<Boundary> for Outcode {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Top => Self::TOP,
            Boundary::Bottom => Self::BOTTOM,
            Boundary::Right => Self::RIGHT,
            Boundary::Left => Self::LEFT,
        }
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Outcode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Boundary, Outcode};

    #[test]
    fn boundary_priority() {
        struct Test {
            name: &'static str,
            outcode: Outcode,
            want: Option<Boundary>,
        }

        vec![
            Test {
                name: "inside",
                outcode: Outcode::INSIDE,
                want: None,
            },
            Test {
                name: "single left flag",
                outcode: Outcode::LEFT,
                want: Some(Boundary::Left),
            },
            Test {
                name: "top wins over left",
                outcode: Outcode::TOP | Outcode::LEFT,
                want: Some(Boundary::Top),
            },
            Test {
                name: "bottom wins over right",
                outcode: Outcode::BOTTOM | Outcode::RIGHT,
                want: Some(Boundary::Bottom),
            },
            Test {
                name: "right wins over left",
                outcode: Outcode::RIGHT | Outcode::LEFT,
                want: Some(Boundary::Right),
            },
            Test {
                name: "every flag set",
                outcode: Outcode::TOP | Outcode::BOTTOM | Outcode::RIGHT | Outcode::LEFT,
                want: Some(Boundary::Top),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.outcode.boundary();
            assert_eq!(
                got, test.want,
                "{}: got boundary = {got:?}, want = {:?}",
                test.name, test.want
            );
        });
    }

    #[test]
    fn bit_values() {
        assert_eq!(Outcode::LEFT.bits(), 1);
        assert_eq!(Outcode::RIGHT.bits(), 2);
        assert_eq!(Outcode::BOTTOM.bits(), 4);
        assert_eq!(Outcode::TOP.bits(), 8);

        let mut outcode = Outcode::INSIDE;
        outcode |= Outcode::TOP;
        outcode |= Outcode::RIGHT;
        assert_eq!(outcode.bits(), 10);
        assert!(outcode.intersects(Outcode::TOP));
        assert!(!outcode.intersects(Outcode::LEFT | Outcode::BOTTOM));
        assert_eq!((outcode & Outcode::TOP), Outcode::TOP);
    }
}
