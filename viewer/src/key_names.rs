use three_d::{Event as WindowEvent, Key};

use model::Event;

/// Returns the host key name of a window key, matching the names used in layout configurations.
///
/// Returns [`None`] for keys without a host key name.
pub fn key_name(key: Key) -> Option<&'static str> {
    let name = match key {
        Key::ArrowDown => "ArrowDown",
        Key::ArrowLeft => "ArrowLeft",
        Key::ArrowRight => "ArrowRight",
        Key::ArrowUp => "ArrowUp",
        Key::Escape => "Escape",
        Key::Tab => "Tab",
        Key::Backspace => "Backspace",
        Key::Enter => "Enter",
        Key::Space => " ",
        Key::Insert => "Insert",
        Key::Delete => "Delete",
        Key::Home => "Home",
        Key::End => "End",
        Key::PageUp => "PageUp",
        Key::PageDown => "PageDown",
        Key::Num0 => "0",
        Key::Num1 => "1",
        Key::Num2 => "2",
        Key::Num3 => "3",
        Key::Num4 => "4",
        Key::Num5 => "5",
        Key::Num6 => "6",
        Key::Num7 => "7",
        Key::Num8 => "8",
        Key::Num9 => "9",
        Key::A => "a",
        Key::B => "b",
        Key::C => "c",
        Key::D => "d",
        Key::E => "e",
        Key::F => "f",
        Key::G => "g",
        Key::H => "h",
        Key::I => "i",
        Key::J => "j",
        Key::K => "k",
        Key::L => "l",
        Key::M => "m",
        Key::N => "n",
        Key::O => "o",
        Key::P => "p",
        Key::Q => "q",
        Key::R => "r",
        Key::S => "s",
        Key::T => "t",
        Key::U => "u",
        Key::V => "v",
        Key::W => "w",
        Key::X => "x",
        Key::Y => "y",
        Key::Z => "z",
        #[allow(unreachable_patterns)]
        _ => return None,
    };

    Some(name)
}

/// Translates a window event into a simulation event, if it is a key event.
pub fn key_event(event: &WindowEvent) -> Option<Event> {
    match event {
        WindowEvent::KeyPress { kind, .. } => {
            key_name(*kind).map(|name| Event::KeyDown(name.to_owned()))
        }
        WindowEvent::KeyRelease { kind, .. } => {
            key_name(*kind).map(|name| Event::KeyUp(name.to_owned()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_to_lowercase_symbols() {
        assert_eq!(key_name(Key::A), Some("a"));
        assert_eq!(key_name(Key::Z), Some("z"));
        assert_eq!(key_name(Key::Num0), Some("0"));
        assert_eq!(key_name(Key::Num9), Some("9"));
    }

    #[test]
    fn named_keys_use_host_names() {
        assert_eq!(key_name(Key::Space), Some(" "));
        assert_eq!(key_name(Key::Enter), Some("Enter"));
        assert_eq!(key_name(Key::ArrowLeft), Some("ArrowLeft"));
        assert_eq!(key_name(Key::PageDown), Some("PageDown"));
    }

    #[test]
    fn every_key_of_the_default_layout_can_be_typed() {
        let config = config::Config::default();
        let layout = model::LayoutTable::from_config(&config.layout);
        let keys = [
            Key::ArrowDown,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::ArrowUp,
            Key::Backspace,
            Key::Enter,
            Key::Space,
            Key::Insert,
            Key::Delete,
            Key::Home,
            Key::End,
            Key::PageUp,
            Key::PageDown,
            Key::Num0,
            Key::Num1,
            Key::Num2,
            Key::Num3,
            Key::Num4,
            Key::Num5,
            Key::Num6,
            Key::Num7,
            Key::Num8,
            Key::Num9,
            Key::A,
            Key::B,
            Key::C,
            Key::D,
            Key::E,
            Key::F,
            Key::G,
            Key::H,
            Key::I,
            Key::J,
            Key::K,
            Key::L,
            Key::M,
            Key::N,
            Key::O,
            Key::P,
            Key::Q,
            Key::R,
            Key::S,
            Key::T,
            Key::U,
            Key::V,
            Key::W,
            Key::X,
            Key::Y,
            Key::Z,
        ];
        let names: Vec<_> = keys.into_iter().filter_map(key_name).collect();

        for (identifier, _) in layout.iter() {
            assert!(names.contains(&identifier), "{identifier:?} cannot be typed");
        }
    }
}
