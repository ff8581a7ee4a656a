/// Fire icons used for the spice indicator and the feedback picker
use iced::widget::{row, svg, Row};
use iced::{Element, Length};

use crate::state::data::{SpiceLevel, MAX_SPICE_LEVEL};
use crate::Message;

const FIRE_ICON: &[u8] = include_bytes!("../../assets/icon-fire.svg");
const FIRE_ICON_DISABLED: &[u8] = include_bytes!("../../assets/icon-fire-disable.svg");

/// Indicator icon size next to a result
pub const RESULT_ICON_SIZE: f32 = 36.0;

/// A single fire icon, lit or greyed out
pub fn fire<'a>(active: bool, size: f32) -> Element<'a, Message> {
    let bytes = if active { FIRE_ICON } else { FIRE_ICON_DISABLED };
    svg(svg::Handle::from_memory(bytes))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}

/// Lit/unlit state for each of the five indicator slots
pub fn indicator_slots(level: SpiceLevel) -> [bool; MAX_SPICE_LEVEL as usize] {
    std::array::from_fn(|slot| (slot as u8) < level.get())
}

/// `level` lit icons followed by the remaining unlit ones
pub fn spice_row<'a>(level: SpiceLevel) -> Row<'a, Message> {
    indicator_slots(level)
        .into_iter()
        .fold(row![].spacing(2), |icons, active| {
            icons.push(fire(active, RESULT_ICON_SIZE))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(level: u8) -> (usize, usize) {
        let slots = indicator_slots(SpiceLevel::new(level).unwrap());
        let active = slots.iter().filter(|lit| **lit).count();
        (active, slots.len() - active)
    }

    #[test]
    fn test_level_three_shows_three_of_five() {
        assert_eq!(count(3), (3, 2));
    }

    #[test]
    fn test_extremes() {
        assert_eq!(count(0), (0, 5));
        assert_eq!(count(5), (5, 0));
    }

    #[test]
    fn test_lit_icons_come_first() {
        let slots = indicator_slots(SpiceLevel::new(2).unwrap());
        assert_eq!(slots, [true, true, false, false, false]);
    }
}
