// src/lib.rs

//! クロンダイク・ソリティアのルールエンジンだよ！🃏
//!
//! ここにあるのはゲームの状態モデルだけ。描画もマウス処理も一切なし！
//! 表示側は [`GameEngine`] のクエリで状態を読んで、コマンドで動かす。
//! 山 (Pile) の中身を直接いじる手段は公開してないから、
//! 「カードは常に52枚・重複なし」の不変条件はエンジンが守り切るよ。
//!
//! ```
//! use klondike_engine::GameEngine;
//!
//! let mut game = GameEngine::new();
//! assert_eq!(game.stock_size(), 24);
//!
//! // 山札を1枚めくる
//! assert!(game.draw_from_stock());
//! assert_eq!(game.waste_size(), 1);
//!
//! // 気に入らなければ取り消す (-50点だけど！)
//! assert!(game.undo());
//! assert_eq!(game.waste_size(), 0);
//! ```

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // カード・山・ゲーム進行状態のデータ型
pub mod logic; // デッキ生成・ルール判定・得点ポリシー (純粋関数)
pub mod game; // エンジン本体とハンドラ

// 各モジュールから必要な型をここで再エクスポート！
pub use components::{Card, GameStatus, Pile, PileType, Rank, Suit};
pub use game::{CardData, GameEngine, GameSnapshot, GameStateData, HintMove};
pub use logic::scoring::MoveKind;
