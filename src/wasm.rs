//! JavaScript-facing wrapper. The presentation layer owns one `WasmGame`
//! per game; players cross the boundary as codes (1 = red, 2 = blue).

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::game::Game;
use crate::types::Player;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(height: usize, width: usize) -> Result<WasmGame, JsValue> {
        let game = Game::new(GameConfig::with_size(height, width)).map_err(to_js)?;
        Ok(Self { game })
    }

    /// Builds a game from a `GameConfig`-shaped object; missing fields use defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<WasmGame, JsValue> {
        let config: GameConfig = serde_wasm_bindgen::from_value(config)?;
        let game = Game::new(config).map_err(to_js)?;
        Ok(Self { game })
    }

    pub fn initialize(&mut self, height: usize, width: usize) -> Result<(), JsValue> {
        self.game.initialize(height, width).map_err(to_js)
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    #[wasm_bindgen(js_name = isLegalMove)]
    pub fn is_legal_move(&self, x: usize, y: usize) -> Result<bool, JsValue> {
        self.game.is_legal_move(x, y).map_err(to_js)
    }

    #[wasm_bindgen(js_name = isLegalMoveFor)]
    pub fn is_legal_move_for(&self, x: usize, y: usize, player: u8) -> Result<bool, JsValue> {
        let player = Player::try_from(player).map_err(to_js)?;
        self.game.is_legal_move_for(x, y, player).map_err(to_js)
    }

    /// Returns the `MoveOutcome` as a JS object.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, x: usize, y: usize) -> Result<JsValue, JsValue> {
        let outcome = self.game.apply_move(x, y).map_err(to_js)?;
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.legal_moves())?)
    }

    /// 0 for an empty cell, otherwise the owner's player code.
    #[wasm_bindgen(js_name = cellOwner)]
    pub fn cell_owner(&self, x: usize, y: usize) -> Result<u8, JsValue> {
        self.game.cell_owner(x, y).map(|cell| cell.code()).map_err(to_js)
    }

    pub fn count(&self, player: u8) -> Result<usize, JsValue> {
        let player = Player::try_from(player).map_err(to_js)?;
        Ok(self.game.count(player))
    }

    #[wasm_bindgen(js_name = currentTurn)]
    pub fn current_turn(&self) -> u8 {
        self.game.current_turn().code()
    }

    #[wasm_bindgen(js_name = isBoardFull)]
    pub fn is_board_full(&self) -> bool {
        self.game.is_board_full()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    #[wasm_bindgen(js_name = gameState)]
    pub fn game_state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    #[wasm_bindgen(js_name = gameResult)]
    pub fn game_result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_result())?)
    }

    /// Signed-value rendering of the board, one row per line.
    pub fn render(&self) -> String {
        self.game.board().to_string()
    }
}

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
