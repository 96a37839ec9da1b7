use crate::ui::app::App;
use crate::ui::directory::SortKey;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_page(),
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::Home => app.first_page(),
        KeyCode::End => app.last_page(),
        // Column headers
        KeyCode::Char('i') => app.sort_by(SortKey::Id),
        KeyCode::Char('n') => app.sort_by(SortKey::FirstName),
        KeyCode::Char('a') => app.sort_by(SortKey::Age),
        KeyCode::Char('g') => app.cycle_gender_filter(),
        KeyCode::Char('c') => app.cycle_country_filter(),
        KeyCode::Char('x') => app.clear_filters(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::directory::SortDirection;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn q_quits() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::default();
        let mut key = press(KeyCode::Char('c'));
        key.modifiers = KeyModifiers::CONTROL;
        handle_key(&mut app, key);
        assert!(app.should_quit());
    }

    #[test]
    fn plain_c_cycles_country_instead_of_quitting() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert!(!app.should_quit());
    }

    #[test]
    fn a_sorts_by_age() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.directory().sort().key, SortKey::Age);
        assert_eq!(app.directory().sort().direction, SortDirection::Descending);
    }

    #[test]
    fn right_moves_to_next_page() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.directory().current_page(), 2);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::default();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }

    #[test]
    fn g_cycles_gender() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.directory().filters().gender.as_deref(), Some("male"));
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.directory().filters().gender.as_deref(), Some("female"));
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.directory().filters().gender, None);
    }
}
