//! Fixed catalog of the supported device categories.

use enumset::EnumSet;
use itertools::Itertools;

use crate::{intake::Rejection, quantity::power::Watts};

/// Device category with its typical power draw.
///
/// Declaration order defines the menu selectors: the first variant is `1`.
#[derive(Debug, derive_more::Display, enumset::EnumSetType)]
pub enum DeviceCategory {
    Laptop,
    Smartphone,

    #[display("Gaming Console")]
    GamingConsole,

    Tablet,
    Desktop,
}

impl DeviceCategory {
    pub const fn power_rating(self) -> Watts {
        match self {
            Self::Laptop => Watts(50.0),
            Self::Smartphone => Watts(5.0),
            Self::GamingConsole => Watts(150.0),
            Self::Tablet => Watts(10.0),
            Self::Desktop => Watts(200.0),
        }
    }

    /// All categories along with their 1-based menu selectors.
    pub fn selectors() -> impl Iterator<Item = (usize, Self)> {
        EnumSet::<Self>::all().into_iter().enumerate().map(|(index, category)| (index + 1, category))
    }

    /// Render the selection menu, one category per line.
    pub fn menu() -> String {
        Self::selectors().map(|(selector, category)| format!("  {selector}. {category}")).join("\n")
    }
}

impl TryFrom<i64> for DeviceCategory {
    type Error = Rejection;

    fn try_from(selector: i64) -> Result<Self, Self::Error> {
        Self::selectors()
            .find(|(candidate, _)| i64::try_from(*candidate).is_ok_and(|it| it == selector))
            .map(|(_, category)| category)
            .ok_or(Rejection::UnknownCategory(selector))
    }
}
