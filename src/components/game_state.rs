// src/components/game_state.rs

// serde を使う宣言！ゲーム状態を JSON ビューに含めるかも！
use serde::{Serialize, Deserialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// ゲームがまだプレイ中なのか、それとも勝って終わったのか、
/// みたいな状況を示すのに使うよ！🏆🏁
///
/// 勝利判定は組札に触るムーブの直後にだけ走って、一度 Won になったら
/// 戻らない（勝利ボーナスの二重加算を防ぐため）。クエリ側はこの値を
/// 読むだけで、再計算はしないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 全部の組札が K まで積み上がった状態
    Won,
}
