//! 分配集构建
//!
//! 纯函数：同样的名册输入必然产出同样的分配，方便审计与重放。

use std::collections::HashSet;

use crate::models::assignments::entities::AssignmentEntry;
use crate::models::assignments::requests::AssignmentTarget;

/// 返回名册中第一个重复出现的对象 ID
pub fn duplicate_target_id(targets: &[AssignmentTarget]) -> Option<i64> {
    let mut seen = HashSet::with_capacity(targets.len());
    targets
        .iter()
        .find(|t| !seen.insert(t.target_id))
        .map(|t| t.target_id)
}

/// 轮转分配评分人
///
/// 对象按 ID 升序、评分人按 ID 升序排列后，每个对象从旋转游标处
/// 取连续 graders_per_target 个评分人。每个对象恰好出现一次；
/// 评分人名册为空时产出空评分人列表的条目，由调用方标记而非报错。
pub fn build_assignment_entries(
    targets: Vec<AssignmentTarget>,
    grader_ids: Vec<i64>,
    graders_per_target: usize,
) -> Vec<AssignmentEntry> {
    let mut targets = targets;
    targets.sort_by_key(|t| t.target_id);
    let mut graders = grader_ids;
    graders.sort_unstable();
    graders.dedup();

    let per_target = graders_per_target.min(graders.len());
    let mut cursor = 0usize;

    targets
        .into_iter()
        .map(|target| {
            let mut assigned = Vec::with_capacity(per_target);
            for _ in 0..per_target {
                assigned.push(graders[cursor % graders.len()]);
                cursor += 1;
            }
            // individual 粒度下请求可省略 member_ids，默认对象即成员
            let member_ids = if target.member_ids.is_empty() {
                vec![target.target_id]
            } else {
                target.member_ids
            };
            AssignmentEntry {
                target_id: target.target_id,
                member_ids,
                grader_ids: assigned,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: i64, members: Vec<i64>) -> AssignmentTarget {
        AssignmentTarget {
            target_id: id,
            member_ids: members,
        }
    }

    #[test]
    fn test_round_robin_rotates_graders() {
        let entries = build_assignment_entries(
            vec![target(3, vec![]), target(1, vec![]), target(2, vec![])],
            vec![20, 10, 30],
            2,
        );
        // 对象按 ID 升序出现
        assert_eq!(
            entries.iter().map(|e| e.target_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(entries[0].grader_ids, vec![10, 20]);
        assert_eq!(entries[1].grader_ids, vec![30, 10]);
        assert_eq!(entries[2].grader_ids, vec![20, 30]);
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let make = || {
            build_assignment_entries(
                vec![target(5, vec![50, 51]), target(2, vec![20])],
                vec![7, 3],
                1,
            )
        };
        let a = make();
        let b = make();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.target_id, y.target_id);
            assert_eq!(x.grader_ids, y.grader_ids);
        }
    }

    #[test]
    fn test_every_target_covered_once() {
        let entries = build_assignment_entries(
            (1..=7).map(|id| target(id, vec![])).collect(),
            vec![1, 2, 3],
            1,
        );
        assert_eq!(entries.len(), 7);
        let mut ids: Vec<i64> = entries.iter().map(|e| e.target_id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_no_graders_yields_empty_lists() {
        let entries =
            build_assignment_entries(vec![target(1, vec![]), target(2, vec![])], vec![], 2);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.grader_ids.is_empty()));
    }

    #[test]
    fn test_individual_defaults_self_as_member() {
        let entries = build_assignment_entries(vec![target(42, vec![])], vec![1], 1);
        assert_eq!(entries[0].member_ids, vec![42]);
    }

    #[test]
    fn test_duplicate_target_detected() {
        let roster = vec![target(1, vec![]), target(2, vec![]), target(1, vec![])];
        assert_eq!(duplicate_target_id(&roster), Some(1));
    }

    #[test]
    fn test_unique_roster_has_no_duplicate() {
        let roster = vec![target(1, vec![]), target(2, vec![])];
        assert_eq!(duplicate_target_id(&roster), None);
    }

    #[test]
    fn test_per_target_capped_at_roster_size() {
        let entries = build_assignment_entries(vec![target(1, vec![])], vec![9, 8], 5);
        assert_eq!(entries[0].grader_ids.len(), 2);
    }
}
