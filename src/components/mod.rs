// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod pile; // カードの山 (Pile) と置き場の種類 (PileType) ！🃏
pub mod game_state; // ゲーム進行状態 (Playing / Won) ！🏆

// よく使う型はここから直接使えるように再エクスポートしておくよ。整理整頓！🧹✨
pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use pile::{Pile, PileType};
