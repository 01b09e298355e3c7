//! ゲームの勝利条件判定ロジックを定義するよ。

/// ゲームのクリア条件（4つの組札がすべて13枚ずつ = A から K まで完成）を判定する。
pub fn check_win_condition(foundation_sizes: &[usize; 4]) -> bool {
    foundation_sizes.iter().all(|&size| size == 13)
}
