use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 一条评分分配：一个被评对象与其评分人列表
///
/// team 粒度下 target_id 为队伍 ID，member_ids 为队员；
/// individual 粒度下 target_id 即学生 ID，member_ids 只含该学生。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentEntry {
    pub target_id: i64,
    pub member_ids: Vec<i64>,
    // 可为空：无可用评分人的对象仍须出现在分配集中，由下游标记
    pub grader_ids: Vec<i64>,
}

/// 某次考核的完整分配集
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssessmentAssignmentSet {
    pub assessment_id: i64,
    pub entries: Vec<AssignmentEntry>,
}

impl AssessmentAssignmentSet {
    /// 查找覆盖某学生的分配条目
    pub fn entry_for_student(&self, student_id: i64) -> Option<&AssignmentEntry> {
        self.entries
            .iter()
            .find(|e| e.member_ids.contains(&student_id))
    }
}
