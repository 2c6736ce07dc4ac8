//! ドメイン層のエンティティ定義
//!
//! `Room` はプランニングポーカー 1 セッション分の共有状態、
//! `Participant` はルームに参加している 1 クライアントの投票状態を表します。

use super::value_object::{
    ConnectionId, ParticipantId, ParticipantName, RoomCode, StoryTitle, Timestamp, VoteValue,
};

/// ルームに参加している 1 クライアントの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// 参加者 ID（クライアントが払い出す）
    pub id: ParticipantId,
    /// 表示名
    pub name: ParticipantName,
    /// 投票済みかどうか
    pub has_voted: bool,
    /// 投票値（未投票の場合は None）
    pub vote: Option<VoteValue>,
    /// この参加者を所有する接続への参照（所有ではなく紐付けのみ）
    pub connection: ConnectionId,
}

impl Participant {
    /// 新しい参加者を作成（未投票状態で初期化）
    pub fn new(id: ParticipantId, name: ParticipantName, connection: ConnectionId) -> Self {
        Self {
            id,
            name,
            has_voted: false,
            vote: None,
            connection,
        }
    }
}

/// プランニングポーカー 1 セッション分の共有状態
///
/// `participants` は参加順を保持します。配信内容の並びを決定的にするため、
/// 同じ ID での上書きも元の位置を保ったまま行います。
#[derive(Debug, Clone)]
pub struct Room {
    /// ルームコード
    pub code: RoomCode,
    /// 参加者のリスト（参加順）
    pub participants: Vec<Participant>,
    /// 見積もり対象のストーリー
    pub current_story: StoryTitle,
    /// 投票値が公開されているかどうか
    pub votes_revealed: bool,
    /// ルームの作成時刻
    pub created_at: Timestamp,
}

impl Room {
    /// 新しい空のルームを作成
    pub fn new(code: RoomCode, created_at: Timestamp) -> Self {
        Self {
            code,
            participants: Vec::new(),
            current_story: StoryTitle::default(),
            votes_revealed: false,
            created_at,
        }
    }

    /// 参加者を追加する
    ///
    /// 同じ ID の参加者が既に存在する場合は、リスト内の位置を保ったまま
    /// 置き換え、置き換え前の参加者を返します。
    pub fn upsert_participant(&mut self, participant: Participant) -> Option<Participant> {
        match self
            .participants
            .iter()
            .position(|p| p.id == participant.id)
        {
            Some(index) => Some(std::mem::replace(
                &mut self.participants[index],
                participant,
            )),
            None => {
                self.participants.push(participant);
                None
            }
        }
    }

    /// 参加者を削除し、削除した参加者を返す（存在しない場合は None）
    pub fn remove_participant(&mut self, participant_id: &ParticipantId) -> Option<Participant> {
        self.participants
            .iter()
            .position(|p| p.id == *participant_id)
            .map(|index| self.participants.remove(index))
    }

    /// 参加者を取得する
    pub fn participant(&self, participant_id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == *participant_id)
    }

    /// 指定された参加者の投票を記録する（参加者が存在しない場合は false）
    pub fn record_vote(&mut self, participant_id: &ParticipantId, vote: VoteValue) -> bool {
        match self
            .participants
            .iter_mut()
            .find(|p| p.id == *participant_id)
        {
            Some(participant) => {
                participant.has_voted = true;
                participant.vote = Some(vote);
                true
            }
            None => false,
        }
    }

    /// 指定された参加者の投票を取り消す（参加者が存在しない場合は false）
    pub fn clear_vote(&mut self, participant_id: &ParticipantId) -> bool {
        match self
            .participants
            .iter_mut()
            .find(|p| p.id == *participant_id)
        {
            Some(participant) => {
                participant.has_voted = false;
                participant.vote = None;
                true
            }
            None => false,
        }
    }

    /// 投票値を公開する
    pub fn reveal_votes(&mut self) {
        self.votes_revealed = true;
    }

    /// ラウンドをリセットする
    ///
    /// 公開フラグを下ろし、ストーリーを空にし、全参加者の投票を取り消します。
    pub fn reset_round(&mut self) {
        self.votes_revealed = false;
        self.current_story = StoryTitle::default();
        for participant in &mut self.participants {
            participant.has_voted = false;
            participant.vote = None;
        }
    }

    /// ストーリーを設定する
    pub fn set_story(&mut self, story: StoryTitle) {
        self.current_story = story;
    }

    /// 参加者がいないかどうか
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// 全参加者の接続ハンドルを参加順で取得する（配信対象の選定に使う）
    pub fn connections(&self) -> Vec<ConnectionId> {
        self.participants.iter().map(|p| p.connection).collect()
    }
}
