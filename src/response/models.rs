use serde::Deserialize;

// Team stadium opponent list response
#[derive(Debug, Deserialize)]
pub struct TeamStadiumOpponentListResponse {
    pub data: ResponseData,
}

// Both opponent fields are optional: the server multiplexes several
// response types through the same envelope and most carry neither.
#[derive(Debug, Deserialize, Default)]
pub struct ResponseData {
    #[serde(default)]
    pub opponent_info_array: Option<Vec<OpponentInfo>>,
    #[serde(default)]
    pub opponent_info_copy: Option<OpponentInfoCopy>,
}

// Pre-selection candidate (coarse account metadata only)
#[derive(Debug, Deserialize, Clone)]
pub struct OpponentInfo {
    pub strength: u8,
    pub user_info: UserInfo,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserInfo {
    pub name: String,
    #[serde(default)]
    pub single_mode_play_count: u32,
    #[serde(default)]
    pub total_login_day_count: u32,
}

// Post-selection opponent with full roster and character pool
#[derive(Debug, Deserialize)]
pub struct OpponentInfoCopy {
    pub user_info: UserInfo,
    #[serde(default)]
    pub team_data_array: Vec<TeamSlot>,
    #[serde(default)]
    pub trained_chara_array: Vec<TrainedChara>,
}

// One roster slot; trained_chara_id == 0 means the slot is empty
#[derive(Debug, Deserialize, Clone)]
pub struct TeamSlot {
    pub trained_chara_id: u64,
    pub distance_type: u8,
    pub running_style: u8,
}

// Aptitude ordinals are 1..=8 (G..S); anything else is rejected
// during aggregation rather than defaulted.
#[derive(Debug, Deserialize, Clone)]
pub struct TrainedChara {
    pub trained_chara_id: u64,
    pub proper_distance_short: u8,
    pub proper_distance_mile: u8,
    pub proper_distance_middle: u8,
    pub proper_distance_long: u8,
    pub proper_ground_turf: u8,
    pub proper_ground_dirt: u8,
    pub proper_running_style_nige: u8,
    pub proper_running_style_senko: u8,
    pub proper_running_style_sashi: u8,
    pub proper_running_style_oikomi: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_SELECTION: &str = r#"{
        "data": {
            "opponent_info_copy": {
                "user_info": {
                    "name": "Teio Fan",
                    "single_mode_play_count": 412,
                    "total_login_day_count": 97
                },
                "team_data_array": [
                    { "trained_chara_id": 9001, "distance_type": 2, "running_style": 1 },
                    { "trained_chara_id": 0, "distance_type": 0, "running_style": 0 }
                ],
                "trained_chara_array": [
                    {
                        "trained_chara_id": 9001,
                        "proper_distance_short": 1,
                        "proper_distance_mile": 8,
                        "proper_distance_middle": 7,
                        "proper_distance_long": 3,
                        "proper_ground_turf": 7,
                        "proper_ground_dirt": 1,
                        "proper_running_style_nige": 8,
                        "proper_running_style_senko": 6,
                        "proper_running_style_sashi": 4,
                        "proper_running_style_oikomi": 1
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn parses_post_selection_payload() {
        let resp: TeamStadiumOpponentListResponse =
            serde_json::from_str(POST_SELECTION).expect("payload should parse");
        assert!(resp.data.opponent_info_array.is_none());

        let copy = resp.data.opponent_info_copy.expect("copy should be present");
        assert_eq!(copy.user_info.name, "Teio Fan");
        assert_eq!(copy.team_data_array.len(), 2);
        assert_eq!(copy.team_data_array[1].trained_chara_id, 0);
        assert_eq!(copy.trained_chara_array[0].proper_distance_mile, 8);
    }

    #[test]
    fn parses_pre_selection_payload() {
        let raw = r#"{
            "data": {
                "opponent_info_array": [
                    { "strength": 1, "user_info": { "name": "A", "single_mode_play_count": 10, "total_login_day_count": 5 } },
                    { "strength": 2, "user_info": { "name": "B", "single_mode_play_count": 20, "total_login_day_count": 4 } },
                    { "strength": 3, "user_info": { "name": "C", "single_mode_play_count": 30, "total_login_day_count": 3 } }
                ]
            }
        }"#;
        let resp: TeamStadiumOpponentListResponse =
            serde_json::from_str(raw).expect("payload should parse");
        let arr = resp.data.opponent_info_array.expect("array should be present");
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[2].user_info.name, "C");
    }

    #[test]
    fn unrelated_response_parses_to_empty_data() {
        let resp: TeamStadiumOpponentListResponse =
            serde_json::from_str(r#"{ "data": { "race_result": 1 } }"#).expect("should parse");
        assert!(resp.data.opponent_info_array.is_none());
        assert!(resp.data.opponent_info_copy.is_none());
    }
}
