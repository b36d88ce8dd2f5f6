use serde::Deserialize;
use ts_rs::TS;

// 分配集生成的输入对象：队伍（含队员）或个人
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentTarget {
    pub target_id: i64,
    // individual 粒度下可省略，默认 [target_id]
    #[serde(default)]
    pub member_ids: Vec<i64>,
}

// 生成（替换）分配集请求
//
// 队伍/学生名册与助教名册由上游拉取后随请求传入，
// 引擎本身不访问课程服务。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct GenerateAssignmentSetRequest {
    pub targets: Vec<AssignmentTarget>,
    pub grader_ids: Vec<i64>,
    // 每个对象分配的评分人数量，默认 1
    pub graders_per_target: Option<usize>,
}
