// src/logic/scoring.rs
//! 得点計算のポリシーをまとめるモジュールだよ！💯
//!
//! どのムーブが何点になるかは、ムーブの種類 (`MoveKind`) を enum で
//! 受け取って決める。ムーブの説明文字列を見て判定するのは事故のもと
//! （"Foundation" と "Tableau" が両方含まれる説明もあるからね）なので、
//! 必ず構造的に種類を渡すこと！

use serde::{Serialize, Deserialize};

/// 得点が動くムーブ（とサブイベント）の種類だよ。
///
/// プレイヤーの操作そのもの（Waste→Foundation とか）に加えて、
/// 場札の裏カードがめくれる「Reveal」、山札の「Recycle」、
/// 「Undo」のペナルティもここに含まれるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// 捨て札から組札へ。+10！
    WasteToFoundation,
    /// 場札から組札へ。+10！
    TableauToFoundation,
    /// 組札から場札へ戻す。-15…
    FoundationToTableau,
    /// 捨て札から場札へ。得点は動かないよ。
    WasteToTableau,
    /// 場札から場札へ（1枚でも連続でも）。得点は動かないよ。
    TableauToTableau,
    /// 場札の裏カードが表になった。+5！
    RevealTableauCard,
    /// 捨て札を山札に戻すリサイクル。-100…！
    RecycleWaste,
    /// アンドゥのペナルティ。-50。
    Undo,
}

/// ムーブの種類ごとの得点差分を返すよ。
pub fn score_delta(kind: MoveKind) -> i32 {
    match kind {
        MoveKind::WasteToFoundation => 10,
        MoveKind::TableauToFoundation => 10,
        MoveKind::FoundationToTableau => -15,
        MoveKind::WasteToTableau => 0,
        MoveKind::TableauToTableau => 0,
        MoveKind::RevealTableauCard => 5,
        MoveKind::RecycleWaste => -100,
        MoveKind::Undo => -50,
    }
}

/// 差分を適用して、0 未満にならないようにクランプした得点を返すよ。
/// 得点は絶対にマイナスにならない！
pub fn apply_delta(score: i32, kind: MoveKind) -> i32 {
    (score + score_delta(kind)).max(0)
}

/// 勝利時のタイムボーナス。速いほど高得点！
/// `max(0, 10000 - 2 * 経過秒)` だよ。
pub fn time_bonus(elapsed_secs: u64) -> i32 {
    (10_000i64 - 2 * elapsed_secs as i64).max(0) as i32
}

/// 勝利時のムーブボーナス。少ない手数ほど高得点！
/// `max(0, 1000 - 5 * 手数)` だよ。
pub fn move_bonus(moves: u32) -> i32 {
    (1_000i64 - 5 * moves as i64).max(0) as i32
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_deltas() {
        assert_eq!(score_delta(MoveKind::WasteToFoundation), 10);
        assert_eq!(score_delta(MoveKind::TableauToFoundation), 10);
        assert_eq!(score_delta(MoveKind::FoundationToTableau), -15);
        assert_eq!(score_delta(MoveKind::WasteToTableau), 0);
        assert_eq!(score_delta(MoveKind::TableauToTableau), 0);
        assert_eq!(score_delta(MoveKind::RevealTableauCard), 5);
        assert_eq!(score_delta(MoveKind::RecycleWaste), -100);
        assert_eq!(score_delta(MoveKind::Undo), -50);
        println!("得点差分テスト、成功！🎉");
    }

    #[test]
    fn test_score_never_negative() {
        // 0 点からリサイクルしても 0 点のまま！
        assert_eq!(apply_delta(0, MoveKind::RecycleWaste), 0);
        // 30 点からアンドゥしたら 0 点 (30 - 50 → クランプ)
        assert_eq!(apply_delta(30, MoveKind::Undo), 0);
        // 100 点からアンドゥしたら 50 点
        assert_eq!(apply_delta(100, MoveKind::Undo), 50);
        println!("得点クランプテスト、成功！🎉");
    }

    #[test]
    fn test_win_bonuses() {
        // 開始直後 (0秒, 0手) なら満額
        assert_eq!(time_bonus(0), 10_000);
        assert_eq!(move_bonus(0), 1_000);

        // 100秒なら 10000 - 200
        assert_eq!(time_bonus(100), 9_800);
        // 100手なら 1000 - 500
        assert_eq!(move_bonus(100), 500);

        // 長すぎるゲームはボーナス 0 (マイナスにはならない！)
        assert_eq!(time_bonus(10_000), 0);
        assert_eq!(move_bonus(1_000), 0);
        println!("勝利ボーナステスト、成功！🎉");
    }
}
