use crate::response::models::{TeamSlot, TeamStadiumOpponentListResponse, TrainedChara};

/// Coarse account metadata for one pre-selection candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentSummary {
    pub rank: u8,
    pub name: String,
    pub play_count: u32,
    pub login_day_count: u32,
}

impl OpponentSummary {
    /// Career runs per login day. None when the account has never
    /// logged in, which the server does send for fresh transfers.
    pub fn intensity(&self) -> Option<f64> {
        if self.login_day_count == 0 {
            None
        } else {
            Some(self.play_count as f64 / self.login_day_count as f64)
        }
    }
}

/// Which of the two opponent-list shapes a response holds.
///
/// The dispatcher forwards every response through here regardless of
/// type; Inapplicable is the ordinary "not ours" answer, not an error.
#[derive(Debug)]
pub enum Shape<'a> {
    PreSelection(Vec<OpponentSummary>),
    PostSelection {
        name: &'a str,
        roster: &'a [TeamSlot],
        pool: &'a [TrainedChara],
    },
    Inapplicable,
}

/// Pure inspection: the pre-selection shape needs exactly three
/// candidates, anything else falls through to the post-selection copy
/// or to Inapplicable.
pub fn classify(response: &TeamStadiumOpponentListResponse) -> Shape<'_> {
    let data = &response.data;

    if let Some(array) = data.opponent_info_array.as_deref() {
        if array.len() == 3 {
            let summaries = array
                .iter()
                .map(|info| OpponentSummary {
                    rank: info.strength,
                    name: info.user_info.name.clone(),
                    play_count: info.user_info.single_mode_play_count,
                    login_day_count: info.user_info.total_login_day_count,
                })
                .collect();
            return Shape::PreSelection(summaries);
        }
    }

    if let Some(copy) = &data.opponent_info_copy {
        return Shape::PostSelection {
            name: &copy.user_info.name,
            roster: &copy.team_data_array,
            pool: &copy.trained_chara_array,
        };
    }

    Shape::Inapplicable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::models::{OpponentInfo, OpponentInfoCopy, ResponseData, UserInfo};

    fn user(name: &str, play_count: u32, login_day_count: u32) -> UserInfo {
        UserInfo {
            name: name.to_string(),
            single_mode_play_count: play_count,
            total_login_day_count: login_day_count,
        }
    }

    fn pre_selection(names: &[&str]) -> TeamStadiumOpponentListResponse {
        TeamStadiumOpponentListResponse {
            data: ResponseData {
                opponent_info_array: Some(
                    names
                        .iter()
                        .enumerate()
                        .map(|(idx, name)| OpponentInfo {
                            strength: idx as u8 + 1,
                            user_info: user(name, 100, 10),
                        })
                        .collect(),
                ),
                opponent_info_copy: None,
            },
        }
    }

    #[test]
    fn three_candidates_classify_as_pre_selection() {
        let response = pre_selection(&["A", "B", "C"]);
        match classify(&response) {
            Shape::PreSelection(summaries) => {
                assert_eq!(summaries.len(), 3);
                let ranks: Vec<u8> = summaries.iter().map(|s| s.rank).collect();
                assert_eq!(ranks, [1, 2, 3]);
                assert_eq!(summaries[1].name, "B");
            }
            other => panic!("expected PreSelection, got {other:?}"),
        }
    }

    #[test]
    fn wrong_candidate_count_is_inapplicable() {
        let response = pre_selection(&["A", "B"]);
        assert!(matches!(classify(&response), Shape::Inapplicable));

        let response = pre_selection(&["A", "B", "C", "D"]);
        assert!(matches!(classify(&response), Shape::Inapplicable));
    }

    #[test]
    fn opponent_copy_classifies_as_post_selection() {
        let response = TeamStadiumOpponentListResponse {
            data: ResponseData {
                opponent_info_array: None,
                opponent_info_copy: Some(OpponentInfoCopy {
                    user_info: user("rival", 0, 0),
                    team_data_array: vec![],
                    trained_chara_array: vec![],
                }),
            },
        };
        match classify(&response) {
            Shape::PostSelection { name, roster, pool } => {
                assert_eq!(name, "rival");
                assert!(roster.is_empty());
                assert!(pool.is_empty());
            }
            other => panic!("expected PostSelection, got {other:?}"),
        }
    }

    #[test]
    fn empty_response_is_inapplicable() {
        let response = TeamStadiumOpponentListResponse {
            data: ResponseData::default(),
        };
        assert!(matches!(classify(&response), Shape::Inapplicable));
    }

    #[test]
    fn intensity_guards_zero_login_days() {
        let summary = OpponentSummary {
            rank: 1,
            name: "fresh".to_string(),
            play_count: 5,
            login_day_count: 0,
        };
        assert!(summary.intensity().is_none());

        let summary = OpponentSummary {
            login_day_count: 2,
            ..summary
        };
        assert_eq!(summary.intensity(), Some(2.5));
    }
}
