// Submission relay: writes a team and its members as spreadsheet rows

use thiserror::Error;

use crate::domain::registration::submission::TeamSubmission;
use crate::domain::repositories::SheetRepository;

/// Range receiving the team name row
pub const TEAM_RANGE: &str = "Data!A:A";

/// Range receiving one row per member
pub const MEMBER_RANGE: &str = "Data!A:D";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to append team row: {0}")]
    TeamRow(String),

    #[error("Failed to append row for member {position}: {reason}")]
    MemberRow { position: usize, reason: String },
}

/// Appends `submission` to the sheet
///
/// Writes one `[team]` row, then one `[fio, program, email, tg]` row per
/// member in submission order. Appends are awaited one at a time so rows
/// land in order. The first failure stops the relay; rows already
/// appended stay in the sheet.
pub async fn relay_submission(
    sheets: &dyn SheetRepository,
    submission: &TeamSubmission,
) -> Result<(), RelayError> {
    sheets
        .append_rows(TEAM_RANGE, vec![vec![submission.team.clone()]])
        .await
        .map_err(RelayError::TeamRow)?;

    for (position, member) in submission.members.iter().enumerate() {
        sheets
            .append_rows(MEMBER_RANGE, vec![member.to_row()])
            .await
            .map_err(|reason| RelayError::MemberRow {
                position: position + 1,
                reason,
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::submission::MemberRecord;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeSheet {
        appends: Mutex<Vec<(String, Vec<Vec<String>>)>>,
        fail_at: Option<usize>,
    }

    impl FakeSheet {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                appends: Mutex::new(Vec::new()),
                fail_at,
            }
        }
    }

    #[async_trait]
    impl SheetRepository for FakeSheet {
        async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> Result<(), String> {
            let mut appends = self.appends.lock().unwrap();
            if self.fail_at == Some(appends.len()) {
                return Err("quota exceeded".to_string());
            }
            appends.push((range.to_string(), rows));
            Ok(())
        }
    }

    fn submission() -> TeamSubmission {
        TeamSubmission {
            team: "AI Squad".to_string(),
            members: vec![
                MemberRecord::new("Иванов Иван", "ИВТ", "ivanov@edu.hse.ru", "@ivanov"),
                MemberRecord::new("Петров Пётр", "ПМИ", "petrov@edu.hse.ru", "@petrov"),
            ],
        }
    }

    #[tokio::test]
    async fn appends_team_then_members_in_order() {
        let sheet = FakeSheet::new(None);

        relay_submission(&sheet, &submission()).await.unwrap();

        let appends = sheet.appends.lock().unwrap();
        assert_eq!(appends.len(), 3);
        assert_eq!(appends[0], (TEAM_RANGE.to_string(), vec![vec!["AI Squad".to_string()]]));
        assert_eq!(appends[1].0, MEMBER_RANGE);
        assert_eq!(appends[1].1[0][0], "Иванов Иван");
        assert_eq!(appends[2].1[0][0], "Петров Пётр");
        assert_eq!(appends[2].1[0][3], "@petrov");
    }

    #[tokio::test]
    async fn team_row_failure_skips_members() {
        let sheet = FakeSheet::new(Some(0));

        let err = relay_submission(&sheet, &submission()).await.unwrap_err();

        assert!(matches!(err, RelayError::TeamRow(_)));
        assert!(sheet.appends.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn member_failure_keeps_earlier_rows() {
        let sheet = FakeSheet::new(Some(2));

        let err = relay_submission(&sheet, &submission()).await.unwrap_err();

        assert!(matches!(err, RelayError::MemberRow { position: 2, .. }));
        let appends = sheet.appends.lock().unwrap();
        assert_eq!(appends.len(), 2);
        assert_eq!(appends[0].0, TEAM_RANGE);
    }

    #[tokio::test]
    async fn submission_without_members_writes_team_only() {
        let sheet = FakeSheet::new(None);
        let submission = TeamSubmission {
            team: "Solo".to_string(),
            members: Vec::new(),
        };

        relay_submission(&sheet, &submission).await.unwrap();

        assert_eq!(sheet.appends.lock().unwrap().len(), 1);
    }
}
