//! JavaScript bindings: one `ReversiGame` owns one game session.
//!
//! ```javascript
//! import init, { ReversiGame } from 'othello';
//!
//! await init();
//! const game = new ReversiGame({ animationEnabled: true });
//! const result = game.applyMove(2, 3);
//! if (result.success) render(result.state, result.animationHints);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::Settings;
use crate::game::GameState;
use crate::types::{self, AnimationHints, GameSnapshot};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveResponse {
    success: bool,
    state: GameSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    animation_hints: Option<AnimationHints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[wasm_bindgen]
pub struct ReversiGame {
    state: GameState,
    settings: Settings,
}

#[wasm_bindgen]
impl ReversiGame {
    /// `settings` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<ReversiGame, JsValue> {
        Ok(Self {
            state: GameState::new(),
            settings: parse_settings(settings)?,
        })
    }

    /// Resets to the opening position. Settings are kept.
    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self) {
        self.state = GameState::new();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.snapshot())
    }

    /// `[{ row, col }, ...]` for the side to move.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.legal_moves().positions())
    }

    /// Returns `{ success, state, animationHints?, error? }`. A rejected move
    /// leaves the session untouched.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let response = match self.state.play(row, col) {
            Ok(hints) => MoveResponse {
                success: true,
                state: self.state.snapshot(),
                animation_hints: self.settings.animation_enabled.then_some(hints),
                error: None,
            },
            Err(err) => MoveResponse {
                success: false,
                state: self.state.snapshot(),
                animation_hints: None,
                error: Some(err.to_string()),
            },
        };
        to_js(&response)
    }

    /// `{ winner, blackCount, whiteCount }` once finished, otherwise `null`.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        match self.state.outcome() {
            Some(outcome) => to_js(&outcome),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.state.history().iter().map(ToString::to_string).collect()
    }

    #[wasm_bindgen(js_name = boardText)]
    pub fn board_text(&self) -> String {
        self.state.board_text()
    }

    pub fn settings(&self) -> Result<JsValue, JsValue> {
        to_js(&self.settings)
    }

    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&mut self, settings: JsValue) -> Result<(), JsValue> {
        self.settings = parse_settings(settings)?;
        Ok(())
    }
}

/// `a1`..`h8`, or `undefined` when off the board.
#[wasm_bindgen(js_name = formatCoordinate)]
pub fn format_coordinate(row: u8, col: u8) -> Option<String> {
    types::format_coordinate(row, col)
}

fn parse_settings(value: JsValue) -> Result<Settings, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Settings::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}
