#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::interactive::ui::components::text_input::TextInput;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let mut input = TextInput::new();
        type_str(&mut input, "berlin");
        assert_eq!(input.text(), "berlin");
    }

    #[test]
    fn insertion_respects_cursor_position() {
        let mut input = TextInput::new();
        type_str(&mut input, "brlin");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Char('e')));
        assert_eq!(input.text(), "berlin");
    }

    #[test]
    fn backspace_deletes_before_the_cursor() {
        let mut input = TextInput::new();
        type_str(&mut input, "abc");
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn backspace_on_empty_reports_no_change() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn delete_removes_the_char_under_the_cursor() {
        let mut input = TextInput::new();
        type_str(&mut input, "abc");
        input.handle_key(key(KeyCode::Home));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.text(), "bc");
    }

    #[test]
    fn ctrl_u_kills_to_line_start() {
        let mut input = TextInput::new();
        type_str(&mut input, "hello world");
        assert!(input.handle_key(ctrl('u')));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn ctrl_k_kills_to_line_end() {
        let mut input = TextInput::new();
        type_str(&mut input, "hello world");
        input.handle_key(ctrl('a'));
        input.handle_key(ctrl('f'));
        assert!(input.handle_key(ctrl('k')));
        assert_eq!(input.text(), "h");
    }

    #[test]
    fn ctrl_w_deletes_the_previous_word() {
        let mut input = TextInput::new();
        type_str(&mut input, "staff backend");
        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.text(), "staff ");
        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn cursor_movement_does_not_change_the_text() {
        let mut input = TextInput::new();
        type_str(&mut input, "abc");
        assert!(!input.handle_key(key(KeyCode::Left)));
        assert!(!input.handle_key(key(KeyCode::Right)));
        assert!(!input.handle_key(ctrl('a')));
        assert!(!input.handle_key(ctrl('e')));
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn set_text_moves_the_cursor_to_the_end() {
        let mut input = TextInput::new();
        input.set_text("Lon".to_string());
        input.handle_key(key(KeyCode::Char('d')));
        assert_eq!(input.text(), "Lond");
    }

    #[test]
    fn handles_multibyte_text() {
        let mut input = TextInput::new();
        type_str(&mut input, "Zürich");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "Züric");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "Zric");
    }
}
