//! Digit combination finder for the browser.
//!
//! Given an operation, a goal and a digit count, searches the digits 1-9 for
//! every multiset that reaches the goal, and keeps a per-operation list of
//! results the user chose to save for the session.
//!
//! - [`finder::find`]: the search itself
//! - [`registry::SavedRegistry`]: saved results
//! - [`request::SearchRequest`]: parameters as they come from the page
//! - [`DigitPuzzle`]: the JavaScript-facing wrapper

use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub mod arrangement;
pub mod digit;
pub mod error;
pub mod finder;
pub mod operation;
pub mod registry;
pub mod request;

pub use digit::{Combination, SortedKey};
pub use error::PuzzleError;
pub use finder::find;
pub use operation::Operation;
pub use registry::{SavedEntry, SavedRegistry};
pub use request::SearchRequest;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_write(s: &str);
}

// Helper macro for logging to the console
macro_rules! console_log {
    ($($t:tt)*) => (console_write(&format!($($t)*)))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init only happens if the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js_error(err: PuzzleError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    JsValue::from_serde(value).map_err(|e| to_js_error(PuzzleError::Json(e)))
}

fn parse_operation(operation: &str) -> Result<Operation, JsValue> {
    operation.parse::<Operation>().map_err(to_js_error)
}

/// Page session state: the search entry point plus the saved lists.
#[wasm_bindgen]
pub struct DigitPuzzle {
    saved: SavedRegistry,
}

#[wasm_bindgen]
impl DigitPuzzle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        console::log_1(&"DigitPuzzle initialized".into());

        Self {
            saved: SavedRegistry::new(),
        }
    }

    /// Runs a search described by JSON such as
    /// `{"operation":"add","goal":5,"digits":2,"allowRepeats":false}` and
    /// returns an array of digit arrays.
    pub fn search(&self, request_json: &str) -> Result<JsValue, JsValue> {
        console_log!("Search called with request: {}", request_json);

        let request = SearchRequest::from_json(request_json).map_err(to_js_error)?;
        let found = request.run().map_err(to_js_error)?;

        console_log!("{}", finder::results_headline(found.len(), request.goal));
        to_js_value(&found)
    }

    /// Same as [`DigitPuzzle::search`] but takes the raw form fields, for page
    /// scripts that forward input values untouched.
    pub fn search_form(
        &self,
        operation: &str,
        goal: &str,
        digits: &str,
        allow_repeats: bool,
    ) -> Result<JsValue, JsValue> {
        let request =
            SearchRequest::from_form(operation, goal, digits, allow_repeats).map_err(to_js_error)?;
        let found = request.run().map_err(to_js_error)?;
        to_js_value(&found)
    }

    pub fn headline(&self, count: usize, goal: i32) -> String {
        finder::results_headline(count, i64::from(goal))
    }

    /// Saves one result and returns the new length of that operation's list.
    /// A duplicate is rejected with an error whose message the page can show.
    pub fn save(
        &mut self,
        operation: &str,
        combination_json: &str,
        goal: i32,
    ) -> Result<usize, JsValue> {
        let operation = parse_operation(operation)?;
        let combination: Combination = serde_json::from_str(combination_json)
            .map_err(|e| to_js_error(PuzzleError::Json(e)))?;

        self.saved
            .save(operation, combination, i64::from(goal))
            .map_err(to_js_error)?;
        Ok(self.saved.len(operation))
    }

    pub fn delete(&mut self, operation: &str, index: usize) -> Result<(), JsValue> {
        let operation = parse_operation(operation)?;
        self.saved.delete(operation, index).map_err(to_js_error)?;
        Ok(())
    }

    /// The saved list for one operation, oldest first.
    pub fn saved(&self, operation: &str) -> Result<JsValue, JsValue> {
        let operation = parse_operation(operation)?;
        to_js_value(&self.saved.list(operation))
    }

    pub fn saved_count(&self, operation: &str) -> Result<usize, JsValue> {
        Ok(self.saved.len(parse_operation(operation)?))
    }

    pub fn empty_saved_message(&self) -> String {
        registry::NO_SAVED_MESSAGE.to_string()
    }
}

impl Default for DigitPuzzle {
    fn default() -> Self {
        Self::new()
    }
}
