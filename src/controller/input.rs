//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{CatalogApi, Focus, Screen};
use super::AppController;

impl<A: CatalogApi> AppController<A> {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Help popup blocks everything else
        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        if let Screen::Details(_) = ui_state.screen {
            match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
                    self.close_details().await;
                }
                KeyCode::Char(c @ '1'..='5') => {
                    let value = i64::from(c as u8 - b'0');
                    self.rate_current(value).await;
                }
                KeyCode::Char('r') | KeyCode::Char('R') => self.retry().await,
                KeyCode::Char('?') => model.show_help_popup().await,
                KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
                _ => {}
            }
            return Ok(());
        }

        // Typing goes to the search box while it has focus
        if ui_state.focus == Focus::Search {
            match key.code {
                KeyCode::Tab | KeyCode::Down => {
                    model.set_focus(Focus::List).await;
                }
                KeyCode::Enter => {
                    self.search_now(ui_state.search_input.clone()).await;
                    model.set_focus(Focus::List).await;
                }
                KeyCode::Esc => {
                    if !ui_state.search_input.is_empty() {
                        model.clear_search().await;
                        self.schedule_search(String::new());
                    }
                }
                KeyCode::Backspace => {
                    if !ui_state.search_input.is_empty() {
                        let query = model.backspace_search().await;
                        self.schedule_search(query);
                    }
                }
                KeyCode::Char(c) => {
                    let query = model.append_to_search(c).await;
                    self.schedule_search(query);
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Up => model.move_selection_up().await,
            KeyCode::Down => model.move_selection_down().await,
            KeyCode::Enter | KeyCode::Right => self.open_selected().await,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => model.toggle_focus().await,
            KeyCode::Char('r') | KeyCode::Char('R') => self.retry().await,
            KeyCode::Char('?') => model.show_help_popup().await,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => model.set_should_quit(true).await,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::testing::{details, movie, Call, MockCatalog};
    use crate::model::{AppModel, ViewState};

    const DEBOUNCE: Duration = Duration::from_millis(200);

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(controller: &AppController<MockCatalog>, text: &str) {
        for c in text.chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn setup() -> (MockCatalog, AppController<MockCatalog>) {
        let api = MockCatalog::new();
        let model = Arc::new(AppModel::new(Arc::new(api.clone()), "https://img"));
        (api, AppController::new(model, DEBOUNCE))
    }

    #[tokio::test(start_paused = true)]
    async fn typing_searches_once_input_settles() {
        let (api, controller) = setup();
        api.set_search("heat", Ok(vec![movie(949, "Heat")])).await;

        type_text(&controller, "heat").await;
        tokio::time::sleep(DEBOUNCE * 2).await;

        assert_eq!(api.calls().await, vec![Call::Search("heat".to_string())]);
        assert_eq!(
            controller.model.search().snapshot(),
            ViewState::Loaded(vec![movie(949, "Heat")])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_box_falls_back_to_popular() {
        let (api, controller) = setup();
        type_text(&controller, "x").await;
        tokio::time::sleep(DEBOUNCE * 2).await;

        controller.handle_key_event(press(KeyCode::Backspace)).await.unwrap();
        tokio::time::sleep(DEBOUNCE * 2).await;

        assert_eq!(
            api.calls().await,
            vec![Call::Search("x".to_string()), Call::Popular]
        );
        assert_eq!(controller.model.search().query().await, "");
    }

    #[tokio::test(start_paused = true)]
    async fn open_rate_and_go_back() {
        let (api, controller) = setup();
        api.set_popular(Ok(vec![movie(1, "A")])).await;
        api.set_details(1, Ok(details(1, "A"))).await;

        controller.load_initial_catalog().await;
        tokio::time::sleep(DEBOUNCE).await;

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        tokio::time::sleep(DEBOUNCE).await;

        let snap = controller.model.snapshot().await;
        assert_eq!(snap.ui.screen, Screen::Details(1));
        assert_eq!(snap.details, Some(ViewState::Loaded(details(1, "A"))));

        controller.handle_key_event(press(KeyCode::Char('4'))).await.unwrap();
        assert_eq!(controller.model.snapshot().await.rating, Some(4));

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        let snap = controller.model.snapshot().await;
        assert_eq!(snap.ui.screen, Screen::Catalog);
        assert_eq!(controller.model.ratings().get_rating(1).await, Some(4));
    }

    #[tokio::test]
    async fn ctrl_c_quits_from_the_search_box() {
        let (_, controller) = setup();
        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(controller.model.should_quit().await);
    }

    #[tokio::test]
    async fn q_types_into_the_search_box() {
        let (_, controller) = setup();
        controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        assert!(!controller.model.should_quit().await);
        assert_eq!(controller.model.get_ui_state().await.search_input, "q");
    }
}
