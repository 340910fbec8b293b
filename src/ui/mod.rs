//! UI描画モジュール
//!
//! パレットオーバーレイと本文領域の描画を提供

pub mod palette;

pub use palette::{PaletteRenderer, PaletteViewModel};
